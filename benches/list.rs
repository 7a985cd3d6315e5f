use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dlink::{BasicList, SortedList};

const N: u64 = 1_000;

fn bench_basic(c: &mut Criterion) {
    let mut group = c.benchmark_group("basic");
    group.throughput(Throughput::Elements(N));

    group.bench_function("push_back_pop_front", |b| {
        b.iter(|| {
            let mut list = BasicList::new();
            for i in 0..N {
                list.push_back(black_box(i));
            }
            while let Some(v) = list.pop_front() {
                black_box(v);
            }
        })
    });

    group.bench_function("push_front_pop_back", |b| {
        b.iter(|| {
            let mut list = BasicList::new();
            for i in 0..N {
                list.push_front(black_box(i));
            }
            while let Some(v) = list.pop_back() {
                black_box(v);
            }
        })
    });

    group.bench_function("iter_sum", |b| {
        let list: BasicList<u64> = (0..N).collect();
        b.iter(|| black_box(list.iter().sum::<u64>()))
    });

    group.finish();
}

fn bench_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorted");
    group.throughput(Throughput::Elements(N));

    // Descending input: every insert lands at the head (best case).
    group.bench_function("insert_descending", |b| {
        b.iter(|| {
            let mut list = SortedList::new(u64::cmp);
            for i in (0..N).rev() {
                list.insert(black_box(i));
            }
            black_box(list.len())
        })
    });

    // Ascending input: every insert scans to the tail (worst case).
    group.bench_function("insert_ascending", |b| {
        b.iter(|| {
            let mut list = SortedList::new(u64::cmp);
            for i in 0..N {
                list.insert(black_box(i));
            }
            black_box(list.len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_basic, bench_sorted);
criterion_main!(benches);
