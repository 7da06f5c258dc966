use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use randomized_bst::rbst::RbstSet;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 1000;

fn bench_rbst_insert(c: &mut Criterion) {
    c.bench_function("bench rbst insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut tree = RbstSet::from_seed([2, 2, 2, 2]);
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();

                black_box(tree.insert(key));
            }
        })
    });
}

fn bench_rbst_height(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut tree = RbstSet::from_seed([2, 2, 2, 2]);
    for _ in 0..NUM_OF_OPERATIONS {
        tree.insert(rng.next_u32());
    }

    c.bench_function("bench rbst height", move |b| {
        b.iter(|| {
            black_box(tree.height());
        })
    });
}

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut tree = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();

                tree.insert(key);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_rbst_insert,
    bench_rbst_height,
    bench_btreeset_insert
);
criterion_main!(benches);
