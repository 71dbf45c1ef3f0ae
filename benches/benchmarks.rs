use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seqlab::graph::overlap::{build_overlap_graph, OverlapParams};
use seqlab::index::sa;
use seqlab::search::{find_approx, search_bad_char, search_good_suffix, DistanceMode};

fn make_reference(len: usize) -> Vec<u8> {
    let bases = [b'A', b'C', b'G', b'T'];
    let mut seq = Vec::with_capacity(len);
    let mut x: u32 = 42;
    for _ in 0..len {
        x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        seq.push(bases[(x >> 16) as usize % 4]);
    }
    seq
}

fn bench_exact_search(c: &mut Criterion) {
    let reference = make_reference(10_000);
    let pattern = reference[100..120].to_vec();

    c.bench_function("bad_char_20bp", |b| {
        b.iter(|| {
            black_box(search_bad_char(black_box(&reference), black_box(&pattern)).unwrap());
        })
    });

    c.bench_function("good_suffix_20bp", |b| {
        b.iter(|| {
            black_box(search_good_suffix(black_box(&reference), black_box(&pattern)).unwrap());
        })
    });
}

fn bench_approx_search(c: &mut Criterion) {
    let reference = make_reference(10_000);
    let pattern = reference[500..520].to_vec();

    c.bench_function("hamming_k2_20bp", |b| {
        b.iter(|| {
            black_box(
                find_approx(
                    black_box(&reference),
                    black_box(&pattern),
                    2,
                    DistanceMode::Hamming,
                )
                .unwrap(),
            );
        })
    });

    c.bench_function("edit_k2_20bp", |b| {
        b.iter(|| {
            black_box(
                find_approx(
                    black_box(&reference),
                    black_box(&pattern),
                    2,
                    DistanceMode::Edit,
                )
                .unwrap(),
            );
        })
    });
}

fn bench_build_sa(c: &mut Criterion) {
    let reference = make_reference(10_000);

    c.bench_function("build_sa_10k", |b| {
        b.iter(|| {
            black_box(sa::build_sa(black_box(&reference)));
        })
    });
}

fn bench_sa_locate(c: &mut Criterion) {
    let reference = make_reference(10_000);
    let sa_arr = sa::build_sa(&reference);
    let pattern = reference[100..120].to_vec();

    c.bench_function("sa_locate_20bp", |b| {
        b.iter(|| {
            black_box(sa::locate(black_box(&reference), &sa_arr, black_box(&pattern)).unwrap());
        })
    });
}

fn bench_overlap_graph(c: &mut Criterion) {
    // 50 条 200bp 读段，相邻读段重叠 100bp
    let reference = make_reference(5_100);
    let reads: Vec<Vec<u8>> = (0..50).map(|i| reference[i * 100..i * 100 + 200].to_vec()).collect();
    let params = OverlapParams {
        min_overlap: 50,
        self_overlap: false,
    };

    c.bench_function("overlap_graph_50x200bp", |b| {
        b.iter(|| {
            black_box(build_overlap_graph(black_box(&reads), params).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_exact_search,
    bench_approx_search,
    bench_build_sa,
    bench_sa_locate,
    bench_overlap_graph
);
criterion_main!(benches);
