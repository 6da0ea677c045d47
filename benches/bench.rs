use std::collections::VecDeque;
use std::hint::black_box;

use centered_deque::Deque;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_push_and_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back then pop_front 1001");
    group.bench_function("Deque", |b| {
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..1001 {
                deque.push_back(black_box(i)).unwrap();
            }

            let mut sum = 0;
            while let Ok(value) = deque.pop_front() {
                sum += value;
            }
            assert_eq!(sum, 500500);
        })
    });
    group.bench_function("VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..1001 {
                deque.push_back(black_box(i));
            }

            let mut sum = 0;
            while let Some(value) = deque.pop_front() {
                sum += value;
            }
            assert_eq!(sum, 500500);
        })
    });
    group.finish();
}

fn bench_push_both_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("alternate push_front/push_back 1000");
    group.bench_function("Deque", |b| {
        b.iter(|| {
            let mut deque = Deque::new();
            for i in 0..1000 {
                if i % 2 == 0 {
                    deque.push_front(black_box(i)).unwrap();
                } else {
                    deque.push_back(black_box(i)).unwrap();
                }
            }
            deque
        })
    });
    group.bench_function("VecDeque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..1000 {
                if i % 2 == 0 {
                    deque.push_front(black_box(i));
                } else {
                    deque.push_back(black_box(i));
                }
            }
            deque
        })
    });
    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let deque = (0..1001).collect::<Deque<_>>();
    let vec_deque = (0..1001).collect::<VecDeque<_>>();

    let mut group = c.benchmark_group("get 1001");
    group.bench_function("Deque", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..1001 {
                if let Some(x) = deque.get(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });
    group.bench_function("Deque cursor", |b| {
        b.iter(|| {
            let begin = deque.begin();
            let mut sum = 0;
            for i in 0..1001 {
                if let Ok(x) = begin.at(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });
    group.bench_function("VecDeque", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..1001 {
                if let Some(x) = vec_deque.get(black_box(i * 2)) {
                    sum += x;
                }
            }
            assert_eq!(sum, 250500);
        })
    });
    group.finish();
}

criterion_group!(benches, bench_push_and_pop, bench_push_both_ends, bench_get);
criterion_main!(benches);
