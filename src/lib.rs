pub mod rbst;
