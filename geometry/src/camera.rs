//! Cameras and screen-space conversions.
//!
//! Screen coordinates follow the viewport convention: `x` and `y` in
//! pixels with the origin at the bottom-left corner, `z` the view-space
//! distance in front of the camera. Points behind the camera project to
//! mirrored pixel coordinates with a negative `z`, same as the raw
//! projective math.

use thiserror::Error;

use crate::bounds::Bounds;
use crate::math::{
    look_at_rh, orthographic_rh, perspective_rh, transform_point, Mat4, Vec2, Vec3, Vec4,
};

/// Camera construction error.
#[derive(Error, Debug)]
pub enum CameraError {
    #[error("viewport has no area: {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
    #[error("view-projection matrix is not invertible")]
    NonInvertibleViewProj,
}

pub type CameraResult<T> = Result<T, CameraError>;

/// Camera projection type.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    Perspective {
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic {
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Projection {
    /// Perspective projection. `fov_y` is the vertical field of view in
    /// radians.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Projection::Perspective {
            fov_y,
            aspect,
            near,
            far,
        }
    }

    /// Symmetric orthographic projection spanning `width` x `height`
    /// world units.
    pub fn orthographic(width: f32, height: f32, near: f32, far: f32) -> Self {
        let half_w = width / 2.0;
        let half_h = height / 2.0;
        Projection::Orthographic {
            left: -half_w,
            right: half_w,
            bottom: -half_h,
            top: half_h,
            near,
            far,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        match self {
            Projection::Perspective {
                fov_y,
                aspect,
                near,
                far,
            } => perspective_rh(*fov_y, *aspect, *near, *far),
            Projection::Orthographic {
                left,
                right,
                bottom,
                top,
                near,
                far,
            } => orthographic_rh(*left, *right, *bottom, *top, *near, *far),
        }
    }
}

/// Maps points between world space and screen space.
///
/// [`world_to_screen_bounds`] and [`screen_to_world_bounds`] accept any
/// implementor, so callers decide where the mapping comes from instead
/// of reaching for an ambient main camera.
pub trait Camera {
    /// Project a world-space point to screen space.
    fn world_to_screen(&self, world: Vec3) -> Vec3;

    /// Unproject a screen-space point back to world space. `screen.z`
    /// selects the depth plane, in world units in front of the camera.
    fn screen_to_world(&self, screen: Vec3) -> Vec3;
}

/// A [`Camera`] built from explicit view and projection matrices plus a
/// viewport size in pixels.
#[derive(Debug, Clone)]
pub struct ViewportCamera {
    view: Mat4,
    proj: Mat4,
    view_proj: Mat4,
    inv_view_proj: Mat4,
    viewport: Vec2,
}

impl ViewportCamera {
    /// Build a camera from a view matrix and a [`Projection`].
    pub fn new(view: Mat4, projection: Projection, viewport: Vec2) -> CameraResult<Self> {
        Self::from_matrices(view, projection.matrix(), viewport)
    }

    /// Build a camera looking from `eye` towards `target`.
    pub fn look_at(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        projection: Projection,
        viewport: Vec2,
    ) -> CameraResult<Self> {
        Self::new(look_at_rh(eye, target, up), projection, viewport)
    }

    /// Build a camera from raw view and projection matrices.
    pub fn from_matrices(view: Mat4, proj: Mat4, viewport: Vec2) -> CameraResult<Self> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Err(CameraError::EmptyViewport {
                width: viewport.x,
                height: viewport.y,
            });
        }
        let view_proj = proj * view;
        let inv_view_proj = view_proj
            .try_inverse()
            .ok_or(CameraError::NonInvertibleViewProj)?;
        Ok(Self {
            view,
            proj,
            view_proj,
            inv_view_proj,
            viewport,
        })
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.proj
    }
}

impl Camera for ViewportCamera {
    fn world_to_screen(&self, world: Vec3) -> Vec3 {
        let ndc = transform_point(&self.view_proj, world);
        // View-space depth, positive in front of the camera.
        let view = self.view * Vec4::new(world.x, world.y, world.z, 1.0);
        Vec3::new(
            (ndc.x * 0.5 + 0.5) * self.viewport.x,
            (ndc.y * 0.5 + 0.5) * self.viewport.y,
            -view.z,
        )
    }

    fn screen_to_world(&self, screen: Vec3) -> Vec3 {
        // NDC depth of the requested view-space depth plane. Standard
        // projections make this independent of x and y.
        let ndc_z = transform_point(&self.proj, Vec3::new(0.0, 0.0, -screen.z)).z;
        let ndc = Vec3::new(
            screen.x / self.viewport.x * 2.0 - 1.0,
            screen.y / self.viewport.y * 2.0 - 1.0,
            ndc_z,
        );
        transform_point(&self.inv_view_proj, ndc)
    }
}

/// Project world-space bounds to screen space.
///
/// The min and max corners are projected and the result is rebuilt from
/// the projected pair, so the screen box always spans the two corner
/// images even when the projection flips an axis.
pub fn world_to_screen_bounds(camera: &impl Camera, bounds: &Bounds) -> Bounds {
    let bottom_left = camera.world_to_screen(bounds.min());
    let top_right = camera.world_to_screen(bounds.max());
    let size = top_right - bottom_left;
    Bounds::new(bottom_left + size * 0.5, size)
}

/// Unproject screen-space bounds back to world space. The z range of
/// `bounds` selects the near and far depth planes of the result.
pub fn screen_to_world_bounds(camera: &impl Camera, bounds: &Bounds) -> Bounds {
    let bottom_left = camera.screen_to_world(bounds.min());
    let top_right = camera.screen_to_world(bounds.max());
    let size = top_right - bottom_left;
    Bounds::new(bottom_left + size * 0.5, size)
}

/// Unproject a screen-space size to world units by running it through
/// [`Camera::screen_to_world`] as if it were a point. Offset by the
/// image of the screen origin at the same depth to get a pure extent.
pub fn screen_to_world_size(camera: &impl Camera, screen_size: Vec3) -> Vec3 {
    camera.screen_to_world(screen_size)
}
