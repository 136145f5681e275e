use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_board::game_state::board::Board;
use plum_board::utils::render_board::{
    render_board, square_ascii, square_unicode, write_demo, SquareRenderer,
};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    render_square: SquareRenderer,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "ascii",
        render_square: square_ascii,
    },
    BenchCase {
        name: "unicode",
        render_square: square_unicode,
    },
];

fn standard_suite() -> bool {
    matches!(std::env::var("PLUM_BENCH_SUITE"), Ok(value) if value.eq_ignore_ascii_case("standard"))
}

fn bench_render(c: &mut Criterion) {
    let suite_name = if standard_suite() { "standard" } else { "quick" };

    let mut group = c.benchmark_group(format!("render_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(if standard_suite() { 6 } else { 2 }));
    group.sample_size(if standard_suite() { 100 } else { 20 });

    let board = Board::initial_position();
    for case in CASES {
        // Correctness guard before benchmarking.
        let lines = render_board(&board, case.render_square);
        assert_eq!(lines.len(), 9, "line count mismatch for {}", case.name);

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(render_board(black_box(board), case.render_square)));
        });
    }

    group.bench_function("demo", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(2048);
            write_demo(&mut out).expect("writing to a Vec should succeed");
            black_box(out)
        });
    });

    group.finish();
}

criterion_group!(render_benches, bench_render);
criterion_main!(render_benches);
