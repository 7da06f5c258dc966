//! Probabilistic binary search tree where balance is maintained by occasionally rebuilding a
//! subtree around a randomly chosen root instead of performing rotations.

mod node;
mod set;
mod tree;

pub use self::set::RbstSet;
pub use self::set::RbstSetIntoIter;
pub use self::set::RbstSetIter;
