use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use hibbard::{Discriminator, OrderedMap};
use rand::prelude::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::iter::FromIterator;

const SIZES: &[usize] = &[64, 256, 1024, 4096, 16384];

const DISCRIMINATORS: &[(&str, Discriminator)] = &[
    ("fixed", Discriminator::Fixed),
    ("random", Discriminator::Random),
    ("size_weighted", Discriminator::SizeWeighted),
];

fn loaded(discriminator: Discriminator, size: usize) -> OrderedMap<usize, usize> {
    let mut map = OrderedMap::with_seed(discriminator, 31337);
    map.bulk_load((0..size).map(|i| (i, i)));
    map
}

fn insert_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_random");
    for size in SIZES {
        let input_data: Vec<(usize, usize)> = rand::rngs::StdRng::seed_from_u64(31337)
            .sample_iter(rand::distributions::Standard)
            .take(*size)
            .collect();
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("std::btree", size),
            &input_data,
            |b, input_data| {
                b.iter_batched_ref(
                    BTreeMap::<usize, usize>::new,
                    |map| {
                        for (k, v) in input_data {
                            map.insert(*k, *v);
                        }
                    },
                    BatchSize::SmallInput,
                )
            },
        );
        group.bench_with_input(BenchmarkId::new("bst", size), &input_data, |b, input_data| {
            b.iter_batched_ref(
                || OrderedMap::<usize, usize>::with_seed(Discriminator::Fixed, 31337),
                |map| {
                    for (k, v) in input_data {
                        map.put(*k, *v);
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bulk_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_load");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("std::btree", size), size, |b, &size| {
            b.iter(|| BTreeMap::<usize, usize>::from_iter((0..size).map(|i| (i, i))))
        });
        group.bench_with_input(BenchmarkId::new("bst", size), size, |b, &size| {
            b.iter(|| loaded(Discriminator::Fixed, size))
        });
    }
    group.finish();
}

fn remove_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_random");
    for size in SIZES {
        let mut indices = Vec::from_iter(0..*size);
        indices.shuffle(&mut rand::rngs::StdRng::seed_from_u64(31337));
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("std::btree", size),
            &(&indices, size),
            |b, &(indices, &size)| {
                b.iter_batched_ref(
                    || BTreeMap::<usize, usize>::from_iter((0..size).map(|i| (i, i))),
                    |map| {
                        for k in indices {
                            map.remove(k);
                        }
                    },
                    BatchSize::SmallInput,
                )
            },
        );
        for (name, discriminator) in DISCRIMINATORS {
            group.bench_with_input(
                BenchmarkId::new(format!("bst/{}", name), size),
                &(&indices, size),
                |b, &(indices, &size)| {
                    b.iter_batched_ref(
                        || loaded(*discriminator, size),
                        |map| {
                            for k in indices {
                                map.delete(k);
                            }
                        },
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

// Delete a random sample of keys and put them back, over and over: the
// shape degrades differently depending on where replacements come from.
fn delete_reinsert_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_reinsert_cycle");
    for size in SIZES {
        let mut rng = rand::rngs::StdRng::seed_from_u64(31337);
        let samples: Vec<Vec<usize>> = (0..16)
            .map(|_| (0..size / 8).map(|_| rng.gen_range(0..*size)).collect())
            .collect();
        group.throughput(Throughput::Elements((16 * (size / 8)) as u64));
        for (name, discriminator) in DISCRIMINATORS {
            group.bench_with_input(BenchmarkId::new(*name, size), &samples, |b, samples| {
                b.iter_batched_ref(
                    || loaded(*discriminator, *size),
                    |map| {
                        for sample in samples {
                            for key in sample {
                                map.delete(key);
                            }
                            for key in sample {
                                map.put(*key, 0);
                            }
                        }
                        black_box(map.mean_depth());
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("std::btree", size), size, |b, &size| {
            b.iter_batched_ref(
                || BTreeMap::<usize, usize>::from_iter((0..size).map(|i| (i, i))),
                |map| {
                    for i in 0..size {
                        black_box(map.get(&i));
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("bst", size), size, |b, &size| {
            b.iter_batched_ref(
                || loaded(Discriminator::Fixed, size),
                |map| {
                    for i in 0..size {
                        black_box(map.get(&i));
                    }
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("std::btree", size), size, |b, &size| {
            b.iter_batched_ref(
                || BTreeMap::<usize, usize>::from_iter((0..size).map(|i| (i, i))),
                |map| {
                    map.iter().for_each(|i| {
                        black_box(i);
                    });
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("bst", size), size, |b, &size| {
            b.iter_batched_ref(
                || loaded(Discriminator::Fixed, size),
                |map| {
                    map.iter().for_each(|i| {
                        black_box(i);
                    });
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    hibbard,
    insert_random,
    bulk_load,
    remove_random,
    delete_reinsert_cycle,
    lookup,
    iterate,
);
criterion_main!(hibbard);
