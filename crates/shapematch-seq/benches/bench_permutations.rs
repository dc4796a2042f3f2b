use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shapematch_seq::{index_permutations, SeqView};

fn bench_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Permutations");

    for n in [4, 6, 8].iter() {
        group.bench_with_input(BenchmarkId::new("advance", n), n, |b, &n| {
            b.iter(|| {
                let mut perms = index_permutations(n);
                let mut checksum = 0;
                while let Some(perm) = perms.advance() {
                    checksum += perm[0];
                }
                std::hint::black_box(checksum)
            });
        });

        group.bench_with_input(BenchmarkId::new("collect", n), n, |b, &n| {
            b.iter(|| std::hint::black_box(index_permutations(n).count()));
        });
    }

    group.finish();
}

fn bench_remapped_view(c: &mut Criterion) {
    let values = (0..8).map(|v| v as f64).collect::<Vec<_>>();

    c.bench_function("remapped_view_sum", |b| {
        b.iter(|| {
            let mut perms = index_permutations(values.len());
            let mut total = 0.0;
            while let Some(perm) = perms.advance() {
                if let Ok(view) = values.remapped(perm) {
                    total += view.view_iter().enumerate().map(|(i, v)| i as f64 * v).sum::<f64>();
                }
            }
            std::hint::black_box(total)
        });
    });
}

criterion_group!(benches, bench_permutations, bench_remapped_view);
criterion_main!(benches);
