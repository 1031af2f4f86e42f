use criterion::{Criterion, black_box, criterion_group, criterion_main};

use nightbloom_debug_draw::primitives::{circle_points, cube, solid_circle, sphere};
use nightbloom_debug_draw::{Drawer, GizmoDrawer};
use nightbloom_geometry::math::Vec3;

// ---------------------------------------------------------------------------
// Shape generation
// ---------------------------------------------------------------------------

fn bench_cube(c: &mut Criterion) {
    c.bench_function("cube", |b| {
        b.iter(|| cube(black_box(Vec3::new(1.0, 2.0, 3.0))));
    });
}

fn bench_sphere(c: &mut Criterion) {
    c.bench_function("sphere", |b| {
        b.iter(|| sphere(black_box(1.0)));
    });
}

fn bench_circle_points_30(c: &mut Criterion) {
    c.bench_function("circle_points_30", |b| {
        b.iter(|| {
            circle_points(
                black_box(Vec3::zeros()),
                black_box(1.0),
                black_box(Vec3::y()),
                black_box(30),
            )
        });
    });
}

fn bench_solid_circle_64(c: &mut Criterion) {
    c.bench_function("solid_circle_64", |b| {
        b.iter(|| solid_circle(black_box(1.0), black_box(Vec3::new(1.0, 2.0, 3.0)), black_box(64)));
    });
}

// ---------------------------------------------------------------------------
// Drawer accumulation
// ---------------------------------------------------------------------------

fn bench_gizmo_scene(c: &mut Criterion) {
    c.bench_function("gizmo_scene", |b| {
        b.iter(|| {
            let mut gizmos = GizmoDrawer::new();
            gizmos.draw_wire_cube(black_box(Vec3::zeros()), black_box(Vec3::new(1.0, 1.0, 1.0)));
            gizmos.draw_wire_sphere(black_box(Vec3::zeros()), black_box(1.0));
            gizmos.draw_wire_circle(Vec3::zeros(), 1.0, Vec3::y(), 30);
            gizmos.draw_arrow(Vec3::zeros(), Vec3::new(1.0, 1.0, 0.0));
            gizmos.take_lines()
        });
    });
}

criterion_group!(
    benches,
    bench_cube,
    bench_sphere,
    bench_circle_points_30,
    bench_solid_circle_64,
    bench_gizmo_scene
);
criterion_main!(benches);
