//! Math type aliases and helper functions.
//!
//! All geometry in this workspace is computed on nalgebra types consumed
//! through the f32 aliases below, so callers never spell out the generic
//! parameters.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4D vector (f32).
pub type Vec4 = nalgebra::Vector4<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Rotation quaternion (f32).
pub type Quat = nalgebra::UnitQuaternion<f32>;

// ===== Rotation helpers =====

/// Rotate `v` by `angle` radians around `axis`.
///
/// The axis is normalized internally; a zero axis yields NaN, so callers
/// that accept untrusted axes must reject zero-length vectors first.
pub fn rotate_axis_angle(axis: Vec3, angle: f32, v: Vec3) -> Vec3 {
    let axis = nalgebra::Unit::new_normalize(axis);
    Quat::from_axis_angle(&axis, angle) * v
}

/// Rotate a 2D vector by `angle` radians (counterclockwise).
pub fn rotate_z(angle: f32, v: Vec2) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(cos * v.x - sin * v.y, sin * v.x + cos * v.y)
}

/// Rotation that orients local +Z along `forward`, using `up` as the
/// vertical hint. Undefined when `forward` is zero or parallel to `up`.
pub fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    Quat::face_towards(&forward, &up)
}

// ===== Matrix builders =====

/// Build a 4x4 TRS matrix from scale, rotation, and translation.
pub fn mat4_from_scale_rotation_translation(scale: Vec3, rotation: Quat, translation: Vec3) -> Mat4 {
    let rm = rotation.to_rotation_matrix();
    let rm = rm.matrix();
    #[rustfmt::skip]
    let result = Mat4::new(
        rm[(0, 0)] * scale.x, rm[(0, 1)] * scale.y, rm[(0, 2)] * scale.z, translation.x,
        rm[(1, 0)] * scale.x, rm[(1, 1)] * scale.y, rm[(1, 2)] * scale.z, translation.y,
        rm[(2, 0)] * scale.x, rm[(2, 1)] * scale.y, rm[(2, 2)] * scale.z, translation.z,
        0.0,                  0.0,                  0.0,                  1.0,
    );
    result
}

/// Build a right-handed perspective projection with depth range [0, 1].
pub fn perspective_rh(yfov: f32, aspect: f32, znear: f32, zfar: f32) -> Mat4 {
    let f = 1.0 / (yfov / 2.0).tan();
    let nf = 1.0 / (znear - zfar);
    #[rustfmt::skip]
    let result = Mat4::new(
        f / aspect, 0.0,  0.0,              0.0,
        0.0,        f,    0.0,              0.0,
        0.0,        0.0,  zfar * nf,        znear * zfar * nf,
        0.0,        0.0,  -1.0,             0.0,
    );
    result
}

/// Build a right-handed orthographic projection with depth range [0, 1].
pub fn orthographic_rh(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let rml = right - left;
    let tmb = top - bottom;
    let fmn = far - near;
    #[rustfmt::skip]
    let result = Mat4::new(
        2.0 / rml, 0.0,       0.0,         -(right + left) / rml,
        0.0,       2.0 / tmb, 0.0,         -(top + bottom) / tmb,
        0.0,       0.0,       -1.0 / fmn,  -near / fmn,
        0.0,       0.0,       0.0,          1.0,
    );
    result
}

/// Right-handed look-at view matrix.
pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let eye_point = nalgebra::Point3::from(eye);
    let target_point = nalgebra::Point3::from(target);
    nalgebra::Isometry3::look_at_rh(&eye_point, &target_point, &up).to_homogeneous()
}

/// Transform a point through a homogeneous matrix, with perspective divide.
pub fn transform_point(m: &Mat4, p: Vec3) -> Vec3 {
    let h = m * Vec4::new(p.x, p.y, p.z, 1.0);
    Vec3::new(h.x / h.w, h.y / h.w, h.z / h.w)
}
