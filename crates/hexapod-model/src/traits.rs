use nalgebra::{Point3, Vector3};

use hexapod_core::types::{LegId, LegLinkLengths};

use crate::joints::{LegJoints, RotationFrame};

// ---------------------------------------------------------------------------
// BodyModel
// ---------------------------------------------------------------------------

/// Geometric model of a six-legged body, as consumed by the pose solver.
///
/// The solver reads attachment points, foot tips and the body frame, calls
/// [`apply_rotate_and_translate`](Self::apply_rotate_and_translate) once per
/// pose command, and writes solved joints back through
/// [`set_leg_joints`](Self::set_leg_joints). `Clone` must produce an
/// independent copy.
pub trait BodyModel: Clone {
    /// Rotate the body (not the legs) about its center by `rotation_degrees`
    /// (extrinsic x, then y, then z), then translate it by `translation`.
    fn apply_rotate_and_translate(&mut self, rotation_degrees: &Vector3<f64>, translation: &Vector3<f64>);

    /// Current attachment point of `leg` on the body.
    fn body_attachment_point(&self, leg: LegId) -> Point3<f64>;

    /// Tracked ground-contact point of `leg`.
    fn foot_tip(&self, leg: LegId) -> Point3<f64>;

    /// Current body orientation.
    fn orientation_frame(&self) -> RotationFrame;

    /// Body x-axis in global coordinates.
    fn x_axis(&self) -> Vector3<f64> {
        self.orientation_frame() * Vector3::x()
    }

    /// Body z-axis (the body normal) in global coordinates.
    fn z_axis(&self) -> Vector3<f64> {
        self.orientation_frame() * Vector3::z()
    }

    /// Link lengths of `leg`.
    fn leg_link_lengths(&self, leg: LegId) -> LegLinkLengths;

    /// Display name of `leg`.
    fn leg_name(&self, leg: LegId) -> &str {
        leg.name()
    }

    /// Per-axis reach used to scale normalized translation offsets.
    fn translation_scale(&self) -> Vector3<f64>;

    /// Replace the joint points of `leg`.
    fn set_leg_joints(&mut self, leg: LegId, joints: LegJoints);
}
