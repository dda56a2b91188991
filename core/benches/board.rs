use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweep_core::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, config) in [
        ("classic", GameConfig::classic()),
        ("expert", GameConfig::new((16, 30), 99).unwrap()),
        ("dense", GameConfig::new((30, 30), 800).unwrap()),
    ] {
        let mut generator = RandomMineGenerator::new(0x5eed);
        group.bench_function(name, |b| {
            b.iter(|| Board::generate(black_box(config), &mut generator).unwrap())
        });
    }
    group.finish();
}

fn bench_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for side in [64u16, 512] {
        let layout = MineLayout::from_mine_coords((side, side), &[(side - 1, side - 1)]).unwrap();
        let board = Board::from_layout(layout).unwrap();
        group.bench_function(format!("{side}x{side}"), |b| {
            b.iter_batched(
                || board.clone(),
                |mut board| board.reveal(black_box((0, 0))),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_flood_fill);
criterion_main!(benches);
