//! Vector and triangle primitives used by the leg solver.
//!
//! Dot, cross, length, scaling, addition and subtraction are the nalgebra
//! operators on [`Vector3`]. This module adds the fallible and
//! degree-based helpers on top of them. All angles are in degrees.

use nalgebra::{Point3, Vector3};

use hexapod_model::RotationFrame;

use crate::error::GeometryError;

/// Vectors shorter than this are treated as zero length.
pub const EPSILON: f64 = 1e-9;

/// Unit vector along `v`.
///
/// # Errors
///
/// [`GeometryError::ZeroLengthVector`] if `v` is shorter than [`EPSILON`].
pub fn unit_vector(v: &Vector3<f64>) -> Result<Vector3<f64>, GeometryError> {
    v.try_normalize(EPSILON).ok_or(GeometryError::ZeroLengthVector)
}

/// Unit vector along the part of `v` lying in the plane with normal `normal`.
///
/// # Errors
///
/// [`GeometryError::ZeroLengthVector`] if `normal` is zero or `v` is
/// parallel to it.
pub fn project_onto_plane(v: &Vector3<f64>, normal: &Vector3<f64>) -> Result<Vector3<f64>, GeometryError> {
    let n = unit_vector(normal)?;
    unit_vector(&(v - n * v.dot(&n)))
}

/// Angle between `u` and `v`, in `[0, 180]`.
///
/// # Errors
///
/// [`GeometryError::ZeroLengthVector`] if either vector is zero.
pub fn angle_between(u: &Vector3<f64>, v: &Vector3<f64>) -> Result<f64, GeometryError> {
    let cos = unit_vector(u)?.dot(&unit_vector(v)?);
    Ok(cos.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Law of cosines: the angle between sides `d` and `b`, i.e. opposite side
/// `a`, of a triangle with sides `(d, b, a)`.
///
/// # Errors
///
/// [`GeometryError::DegenerateTriangle`] if `d` or `b` is zero.
pub fn angle_opposite_last_side(d: f64, b: f64, a: f64) -> Result<f64, GeometryError> {
    if d.abs() < EPSILON || b.abs() < EPSILON {
        return Err(GeometryError::DegenerateTriangle { d, b });
    }
    let cos = (d * d + b * b - a * a) / (2.0 * d * b);
    Ok(cos.clamp(-1.0, 1.0).acos().to_degrees())
}

/// Whether sides `a` and `b` can close a triangle with third side `c`.
///
/// Inclusive on both ends: straight (zero-area) configurations count.
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    (a - b).abs() <= c && c <= a + b
}

/// Rotation about the z-axis by `angle_degrees`, counter-clockwise seen from
/// +z.
pub fn rotation_about_z(angle_degrees: f64) -> RotationFrame {
    RotationFrame::from_axis_angle(&Vector3::z_axis(), angle_degrees.to_radians())
}

/// Sign test `a · (b × n) > 0`.
pub fn is_counter_clockwise(a: &Vector3<f64>, b: &Vector3<f64>, n: &Vector3<f64>) -> bool {
    a.dot(&b.cross(n)) > 0.0
}

/// Map `point` from a leg's local plane into global coordinates in place:
/// rotate by `twist`, then by `orientation`, then translate by `origin`.
pub fn place_in_frame(
    point: &mut Point3<f64>,
    twist: &RotationFrame,
    orientation: &RotationFrame,
    origin: &Point3<f64>,
) {
    *point = origin + orientation * (twist * point.coords);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
