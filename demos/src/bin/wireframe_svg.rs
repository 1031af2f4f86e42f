//! # Wireframe SVG Demo
//!
//! Builds a small scene of wireframe primitives, projects it through a
//! perspective camera and writes the result to `wireframe.svg`.

use nightbloom_debug_draw::{
    Color, ColorVertex, Drawer, GizmoDrawer, DEFAULT_SOLID_CIRCLE_SEGMENTS,
    DEFAULT_WIRE_CIRCLE_SEGMENTS,
};
use nightbloom_geometry::camera::{Camera, Projection, ViewportCamera};
use nightbloom_geometry::math::{Vec2, Vec3};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

/// Fills the drawer with one of everything.
fn setup_scene(gizmos: &mut GizmoDrawer) {
    log::info!("Setting up scene...");

    gizmos.set_color(Color::BLUE);
    gizmos.draw_solid_circle(
        Vec3::new(0.0, -0.01, 0.0),
        2.8,
        Vec3::y(),
        DEFAULT_SOLID_CIRCLE_SEGMENTS,
    );

    gizmos.set_color(Color::GREEN);
    gizmos.draw_wire_cube(Vec3::new(-1.5, 0.5, 0.0), Vec3::new(1.0, 1.0, 1.0));

    gizmos.set_color(Color::CYAN);
    gizmos.draw_wire_sphere(Vec3::new(1.5, 0.75, 0.0), 0.75);

    gizmos.set_color(Color::YELLOW);
    gizmos.draw_wire_circle(
        Vec3::zeros(),
        2.5,
        Vec3::y(),
        DEFAULT_WIRE_CIRCLE_SEGMENTS,
    );

    gizmos.set_color(Color::MAGENTA);
    gizmos.draw_wire_cylinder(Vec3::new(0.0, 0.0, -1.8), Vec3::y(), 1.2, 0.4);

    gizmos.set_color(Color::RED);
    gizmos.draw_arrow(Vec3::new(0.0, 0.0, 1.8), Vec3::new(0.0, 1.5, 1.8));

    gizmos.set_color(Color::WHITE);
    gizmos.draw_wire_triangle_2d_from_height(Vec2::new(0.0, 2.6), Vec2::new(0.0, -0.8), 1.0);
}

/// Projects a vertex to SVG pixel coordinates (y grows downward).
/// Returns `None` for points behind the camera.
fn project(camera: &ViewportCamera, vertex: &ColorVertex) -> Option<(f32, f32)> {
    let screen = camera.world_to_screen(Vec3::from(vertex.position));
    if screen.z <= 0.0 {
        return None;
    }
    Some((screen.x, HEIGHT - screen.y))
}

fn css_color(color: [f32; 4]) -> String {
    format!(
        "rgb({},{},{})",
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8
    )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Nightbloom wireframe demo");
    log::info!("Geometry version: {}", nightbloom_geometry::VERSION);

    let camera = ViewportCamera::look_at(
        Vec3::new(4.5, 3.5, 6.5),
        Vec3::new(0.0, 0.75, 0.0),
        Vec3::y(),
        Projection::perspective(std::f32::consts::FRAC_PI_4, WIDTH / HEIGHT, 0.1, 100.0),
        Vec2::new(WIDTH, HEIGHT),
    )
    .expect("Failed to build camera");

    let mut gizmos = GizmoDrawer::new();
    setup_scene(&mut gizmos);

    let triangles = gizmos.take_triangles();
    let lines = gizmos.take_lines();
    log::info!(
        "Scene ready: {} line vertices, {} triangle vertices",
        lines.len(),
        triangles.len()
    );

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" \
         viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n"
    ));
    svg.push_str(&format!(
        "  <rect width=\"{WIDTH}\" height=\"{HEIGHT}\" fill=\"#101018\"/>\n"
    ));

    // Solid triangles first so the wireframe draws on top of them.
    for tri in triangles.chunks_exact(3) {
        let projected: Option<Vec<(f32, f32)>> =
            tri.iter().map(|v| project(&camera, v)).collect();
        if let Some(points) = projected {
            let list = points
                .iter()
                .map(|(x, y)| format!("{x:.1},{y:.1}"))
                .collect::<Vec<_>>()
                .join(" ");
            svg.push_str(&format!(
                "  <polygon points=\"{list}\" fill=\"{}\" fill-opacity=\"0.35\"/>\n",
                css_color(tri[0].color)
            ));
        }
    }

    for pair in lines.chunks_exact(2) {
        if let (Some(a), Some(b)) = (project(&camera, &pair[0]), project(&camera, &pair[1])) {
            svg.push_str(&format!(
                "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" \
                 stroke=\"{}\" stroke-width=\"1\"/>\n",
                a.0,
                a.1,
                b.0,
                b.1,
                css_color(pair[0].color)
            ));
        }
    }

    svg.push_str("</svg>\n");

    std::fs::write("wireframe.svg", svg).expect("Failed to write wireframe.svg");
    log::info!("Wrote wireframe.svg");
}
