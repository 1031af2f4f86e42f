use nightbloom_debug_draw::{Color, DebugLineDrawer, DebugMesh, Drawer, GizmoDrawer};
use nightbloom_geometry::bounds::Bounds;
use nightbloom_geometry::camera::{world_to_screen_bounds, Projection, ViewportCamera};
use nightbloom_geometry::math::{Vec2, Vec3};

// ---------------------------------------------------------------------------
// Full scene accumulation
// ---------------------------------------------------------------------------

#[test]
fn gizmo_scene_accumulates_all_shapes() {
    let mut gizmos = GizmoDrawer::new();

    gizmos.set_color(Color::GREEN);
    gizmos.draw_wire_cube(Vec3::zeros(), Vec3::new(2.0, 1.0, 2.0));
    gizmos.draw_wire_sphere(Vec3::new(3.0, 0.0, 0.0), 1.0);

    gizmos.set_color(Color::YELLOW);
    gizmos.draw_arrow(Vec3::zeros(), Vec3::new(0.0, 2.0, 0.0));
    gizmos.draw_wire_circle(Vec3::new(-3.0, 0.0, 0.0), 1.5, Vec3::y(), 30);
    gizmos.draw_wire_cylinder(Vec3::new(0.0, 0.0, 3.0), Vec3::y(), 2.0, 0.5);

    // cube 72 + sphere 144 + arrow 6 + circle 60 + cylinder 72
    let lines = gizmos.take_lines();
    assert_eq!(lines.len(), 354);

    // Color captured at draw time: cube and sphere vertices are green,
    // the rest yellow.
    for v in &lines[..216] {
        assert_eq!(v.color, [0.0, 1.0, 0.0, 1.0]);
    }
    for v in &lines[216..] {
        assert_eq!(v.color, [1.0, 1.0, 0.0, 1.0]);
    }
}

// ---------------------------------------------------------------------------
// Bounds through the camera onto the screen
// ---------------------------------------------------------------------------

#[test]
fn projected_bounds_draw_as_screen_quad() {
    // 8x6 world units onto 800x600 pixels, 100 px per unit.
    let camera = ViewportCamera::look_at(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::zeros(),
        Vec3::y(),
        Projection::orthographic(8.0, 6.0, 0.1, 100.0),
        Vec2::new(800.0, 600.0),
    )
    .unwrap();

    let world_bounds = Bounds::new(Vec3::zeros(), Vec3::new(2.0, 2.0, 0.0));
    let screen_bounds = world_to_screen_bounds(&camera, &world_bounds);

    let mut gizmos = GizmoDrawer::new();
    gizmos.draw_bounds(&screen_bounds);
    let lines = gizmos.take_lines();
    assert_eq!(lines.len(), 8);

    // Quad runs top-left → top-right → bottom-right → bottom-left.
    let near = |v: [f32; 3], x: f32, y: f32| (v[0] - x).abs() < 1e-3 && (v[1] - y).abs() < 1e-3;
    assert!(near(lines[0].position, 300.0, 400.0));
    assert!(near(lines[1].position, 500.0, 400.0));
    assert!(near(lines[3].position, 500.0, 200.0));
    assert!(near(lines[5].position, 300.0, 200.0));
}

#[test]
fn screen_culling_flow() {
    let camera = ViewportCamera::look_at(
        Vec3::new(0.0, 0.0, 10.0),
        Vec3::zeros(),
        Vec3::y(),
        Projection::orthographic(8.0, 6.0, 0.1, 100.0),
        Vec2::new(800.0, 600.0),
    )
    .unwrap();
    let viewport_bounds = Bounds::new(
        Vec3::new(400.0, 300.0, 0.0),
        Vec3::new(800.0, 600.0, 0.0),
    );

    // One object near the center, one far off screen.
    let visible = Bounds::new(Vec3::new(1.0, 0.5, 0.0), Vec3::new(1.0, 1.0, 0.0));
    let offscreen = Bounds::new(Vec3::new(40.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0));

    let mut gizmos = GizmoDrawer::new();
    for object in [visible, offscreen] {
        let projected = world_to_screen_bounds(&camera, &object);
        if projected.is_inside(&viewport_bounds) {
            gizmos.draw_bounds(&projected);
        }
    }

    // Only the visible object produced a quad.
    assert_eq!(gizmos.take_lines().len(), 8);
}

// ---------------------------------------------------------------------------
// Timed lines across frames
// ---------------------------------------------------------------------------

#[test]
fn timed_lines_expire_on_schedule() {
    let mut lines = DebugLineDrawer::new();

    lines.duration = 0.1;
    lines.draw_line(Vec3::zeros(), Vec3::x());
    lines.duration = 0.3;
    lines.draw_arrow(Vec3::zeros(), Vec3::new(1.0, 1.0, 0.0));

    // 1 plain line + 3 arrow lines
    assert_eq!(lines.lines().len(), 4);
    assert_eq!(lines.vertices().len(), 8);

    lines.advance(0.2);
    assert_eq!(lines.lines().len(), 3);
    lines.advance(0.2);
    assert!(lines.lines().is_empty());
}

// ---------------------------------------------------------------------------
// Custom meshes through the drawer
// ---------------------------------------------------------------------------

#[test]
fn custom_mesh_draws_wireframe() {
    let mesh = DebugMesh::new(
        vec![Vec3::zeros(), Vec3::x(), Vec3::y(), Vec3::z()],
        vec![[0, 1, 2], [0, 2, 3]],
    )
    .unwrap();

    let mut gizmos = GizmoDrawer::new();
    gizmos.draw_wire_mesh(&mesh, Vec3::new(5.0, 0.0, 0.0));

    // 2 triangles * 3 edges * 2 vertices, offset onto x >= 5.
    let vertices = gizmos.take_lines();
    assert_eq!(vertices.len(), 12);
    assert!(vertices.iter().all(|v| v.position[0] >= 5.0));
}

#[test]
fn invalid_mesh_is_rejected() {
    let result = DebugMesh::new(vec![Vec3::zeros()], vec![[0, 0, 1]]);
    assert!(result.is_err());
}
