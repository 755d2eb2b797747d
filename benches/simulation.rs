use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrion::core::{Event, EventType, Key, KeyState, Matrix, Tetrion};
use tetrion::types::TetrominoType;

fn bench_simulate_next_frame(c: &mut Criterion) {
    let mut tetrion = Tetrion::new(12345, 0, "bench");
    tetrion.simulate_up_until(0);

    c.bench_function("simulate_next_frame", |b| {
        b.iter(|| {
            tetrion.simulate_next_frame(black_box(KeyState::default()));
        })
    });
}

fn bench_simulate_1000_frames_with_inputs(c: &mut Criterion) {
    c.bench_function("simulate_1000_frames", |b| {
        b.iter(|| {
            let mut tetrion = Tetrion::new(black_box(12345), 0, "bench");
            for frame in (0..1000).step_by(40) {
                tetrion.enqueue_event(Event {
                    key: Key::Drop,
                    event_type: EventType::Pressed,
                    frame,
                });
                tetrion.enqueue_event(Event {
                    key: Key::Drop,
                    event_type: EventType::Released,
                    frame: frame + 1,
                });
            }
            tetrion.simulate_up_until(1000);
            black_box(tetrion.score())
        })
    });
}

fn bench_clear_four_rows(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut matrix = Matrix::new();
            for y in 18..22 {
                matrix.fill_row(y, Some(TetrominoType::Garbage));
            }
            for y in 18..22 {
                matrix.clear_row(y);
                matrix.shift_down_above(y);
            }
            black_box(matrix.is_row_empty(21))
        })
    });
}

fn bench_snapshot_and_serialize(c: &mut Criterion) {
    let mut tetrion = Tetrion::new(12345, 0, "bench");
    tetrion.simulate_up_until(100);

    c.bench_function("snapshot_to_json_line", |b| {
        b.iter(|| {
            let line = tetrion.snapshot().to_json_line().unwrap();
            black_box(line.len())
        })
    });
}

criterion_group!(
    benches,
    bench_simulate_next_frame,
    bench_simulate_1000_frames_with_inputs,
    bench_clear_four_rows,
    bench_snapshot_and_serialize
);
criterion_main!(benches);
