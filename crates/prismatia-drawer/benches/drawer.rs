use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prismatia_drawer::release::{resolve_release_target, Release};
use prismatia_drawer::{Drawer, DrawerOptions, PanelMetrics, SnapMode, SnapPointInput};
use prismatia_foundation::{GestureTracker, PointerEvent, PointerEventKind};
use prismatia_ui_graphics::Point;
use prismatia_ui_layout::resolve_snap_points;

fn snap_inputs(count: usize) -> Vec<SnapPointInput> {
    (0..count)
        .map(|i| match i % 3 {
            0 => SnapPointInput::Number(1.0 - i as f32 / (count as f32 * 2.0)),
            1 => SnapPointInput::Length(format!("{}px", 100 + i * 7)),
            _ => SnapPointInput::Length(format!("{}rem", 5 + i)),
        })
        .collect()
}

fn snap_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_snap_points");
    for count in [3usize, 8, 32] {
        let inputs = snap_inputs(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &inputs, |b, inputs| {
            b.iter(|| resolve_snap_points(black_box(inputs), 800.0, 900.0, 16.0));
        });
    }
    group.finish();
}

fn release_targets(c: &mut Criterion) {
    let points = resolve_snap_points(&snap_inputs(8), 800.0, 900.0, 16.0);
    let release = Release {
        origin_offset: 400.0,
        drag_offset: 520.0,
        velocity: 0.3,
        panel_height: 800.0,
    };
    let mut group = c.benchmark_group("release_target");
    for mode in [SnapMode::Free, SnapMode::Sequential] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", mode)),
            &mode,
            |b, &mode| {
                b.iter(|| resolve_release_target(mode, black_box(&release), &points));
            },
        );
    }
    group.finish();
}

fn gesture_dispatch(c: &mut Criterion) {
    let options = DrawerOptions::new().with_snap_points([1.0_f32, 0.5, 0.25]);
    let mut drawer = Drawer::new(options, PanelMetrics::new(800.0, 800.0));
    let mut tracker = GestureTracker::new();

    c.bench_function("drawer_swipe_30_moves", |b| {
        b.iter(|| {
            drawer.show();
            let origin = Point::new(200.0, 300.0);
            let down = PointerEvent::new(PointerEventKind::Down, origin, 0.0);
            tracker.handle(&down, &mut drawer);
            for step in 1..=30 {
                let position = Point::new(200.0, 300.0 + step as f32 * 2.0);
                let event = PointerEvent::new(PointerEventKind::Move, position, step as f64 * 20.0);
                tracker.handle(&event, &mut drawer);
            }
            let end = Point::new(200.0, 360.0);
            let up = PointerEvent::new(PointerEventKind::Up, end, 600.0);
            tracker.handle(&up, &mut drawer);
            black_box(drawer.take_effects());
        });
    });
}

criterion_group!(benches, snap_resolution, release_targets, gesture_dispatch);
criterion_main!(benches);
