use criterion::{black_box, criterion_group, criterion_main, Criterion};
use segdeque::*;
use std::collections::VecDeque;

const N: i32 = 100000;

fn filled(segment_capacity: usize) -> SegDeque<i32> {
    let mut d = SegDeque::with_segment_capacity(segment_capacity).unwrap();
    d.extend(0..N);
    d
}

pub fn push_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push values");

    group.bench_function("std VecDeque back", |b| {
        b.iter_with_large_drop(|| {
            let mut v: VecDeque<i32> = VecDeque::new();
            for i in 0..N {
                v.push_back(black_box(i));
            }
            v
        });
    });
    group.bench_function("std VecDeque front", |b| {
        b.iter_with_large_drop(|| {
            let mut v: VecDeque<i32> = VecDeque::new();
            for i in 0..N {
                v.push_front(black_box(i));
            }
            v
        });
    });
    for &cap in &[16usize, 1024] {
        group.bench_function(format!("SegDeque<{}> back", cap), |b| {
            b.iter_with_large_drop(|| {
                let mut v: SegDeque<i32> = SegDeque::with_segment_capacity(cap).unwrap();
                for i in 0..N {
                    v.push_back(black_box(i));
                }
                v
            });
        });
        group.bench_function(format!("SegDeque<{}> front", cap), |b| {
            b.iter_with_large_drop(|| {
                let mut v: SegDeque<i32> = SegDeque::with_segment_capacity(cap).unwrap();
                for i in 0..N {
                    v.push_front(black_box(i));
                }
                v
            });
        });
    }
    group.finish();
}

pub fn pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop values");

    group.bench_function("std VecDeque", |b| {
        b.iter_with_setup(
            || (0..N).collect::<VecDeque<i32>>(),
            |mut v| {
                while let Some(x) = v.pop_front() {
                    black_box(x);
                    if let Some(y) = v.pop_back() {
                        black_box(y);
                    }
                }
            },
        );
    });
    for &cap in &[16usize, 1024] {
        group.bench_function(format!("SegDeque<{}>", cap), |b| {
            b.iter_with_setup(
                || filled(cap),
                |mut v| {
                    while let Ok(x) = v.pop_front() {
                        black_box(x);
                        if let Ok(y) = v.pop_back() {
                            black_box(y);
                        }
                    }
                },
            );
        });
    }
    group.finish();
}

pub fn access_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");

    let v: VecDeque<i32> = (0..N).collect();
    group.bench_function("std VecDeque index", |b| {
        b.iter(|| {
            for i in (0..v.len()).step_by(97) {
                black_box(v[i]);
            }
        });
    });
    group.bench_function("std VecDeque iter", |b| {
        b.iter(|| v.iter().fold(0i64, |acc, &x| acc + x as i64));
    });
    for &cap in &[16usize, 1024] {
        let d = filled(cap);
        group.bench_function(format!("SegDeque<{}> index", cap), |b| {
            b.iter(|| {
                for i in (0..d.len()).step_by(97) {
                    black_box(d[i]);
                }
            });
        });
        group.bench_function(format!("SegDeque<{}> iter", cap), |b| {
            b.iter(|| d.iter().fold(0i64, |acc, &x| acc + x as i64));
        });
        group.bench_function(format!("SegDeque<{}> reduce", cap), |b| {
            b.iter(|| d.reduce(0i64, |acc, &x| acc + x as i64));
        });
    }
    group.finish();
}

criterion_group!(benches, push_benchmark, pop_benchmark, access_benchmark);
criterion_main!(benches);
