use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greed_score::ScoreCalculator;

fn gen_rolls(n: usize) -> Vec<[u8; 5]> {
    // Deterministic xorshift64 so runs are comparable.
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let mut dice = [0u8; 5];
        for die in dice.iter_mut() {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            *die = (x % 6) as u8 + 1;
        }
        out.push(dice);
    }
    out
}

fn bench_score(c: &mut Criterion) {
    let calc = ScoreCalculator::default();
    let mut g = c.benchmark_group("greed_scoring");
    for &n in &[256usize, 4096usize] {
        let rolls = gen_rolls(n);
        g.bench_with_input(BenchmarkId::new("score_batch", n), &rolls, |b, rolls| {
            b.iter(|| {
                for dice in rolls.iter() {
                    black_box(calc.score(black_box(dice)));
                }
            })
        });
        g.bench_with_input(BenchmarkId::new("breakdown_batch", n), &rolls, |b, rolls| {
            b.iter(|| {
                for dice in rolls.iter() {
                    black_box(calc.breakdown(black_box(dice)));
                }
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_score);
criterion_main!(benches);
