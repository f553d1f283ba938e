//! Joint angles recovered from solved joint points.

use nalgebra::Vector3;

use hexapod_core::types::LegId;
use hexapod_model::{LegJoints, RotationFrame};

use crate::error::GeometryError;
use crate::geometry::{angle_between, is_counter_clockwise, project_onto_plane, rotation_about_z};

/// Servo angles of one leg, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegAngles {
    /// Coxia azimuth relative to the leg's mounting axis, counter-clockwise
    /// positive, in `(-180, 180]`.
    pub coxia: f64,
    /// Femur elevation above the body plane. Positive is raised.
    pub femur: f64,
    /// Knee bend measured from perpendicular: zero when the tibia is at a
    /// right angle to the femur.
    pub tibia: f64,
}

impl LegAngles {
    /// Recover the angles of `leg` from its joint points and the body
    /// orientation they were solved against.
    ///
    /// # Errors
    ///
    /// [`GeometryError::ZeroLengthVector`] if a link has zero length or the
    /// coxia is parallel to the body normal.
    pub fn from_joints(
        joints: &LegJoints,
        leg: LegId,
        orientation: &RotationFrame,
    ) -> Result<Self, GeometryError> {
        let normal = orientation * Vector3::z();
        let mount_axis = orientation * rotation_about_z(leg.axis_angle()) * Vector3::x();

        let coxia_vec = project_onto_plane(&(joints.coxia_end - joints.body_contact), &normal)?;
        let femur_vec = joints.femur_end - joints.coxia_end;
        let tibia_vec = joints.foot_tip - joints.femur_end;

        let mut coxia = angle_between(&mount_axis, &coxia_vec)?;
        if is_counter_clockwise(&coxia_vec, &mount_axis, &normal) {
            coxia = -coxia;
        }
        if coxia <= -180.0 {
            coxia += 360.0;
        }

        Ok(Self {
            coxia,
            femur: 90.0 - angle_between(&normal, &femur_vec)?,
            tibia: angle_between(&femur_vec, &tibia_vec)? - 90.0,
        })
    }
}
