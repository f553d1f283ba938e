//! Single-leg solver.
//!
//! Places the coxia, femur and tibia of one leg so that the foot lands on
//! its tracked ground-contact point. The leg is first solved as a planar
//! two-link problem in its local sagittal plane (x along the coxia, z along
//! the body normal), then twisted about the body normal and mapped into
//! global coordinates through the body orientation.
//!
//! ```text
//!   p0 ──coxia── p1
//!                 \  femur
//!                  p2
//!                  |  tibia
//!                  p3 (foot tip)
//! ```

use nalgebra::{Point3, Vector3};
use tracing::{debug, error, warn};

use hexapod_core::types::{LegId, LegLinkLengths, Link};
use hexapod_model::{BodyModel, LegJoints, RotationFrame};

use crate::error::{GeometryError, GeometryResultExt, IkError};
use crate::geometry::{
    angle_between, angle_opposite_last_side, is_counter_clockwise, is_triangle, place_in_frame,
    project_onto_plane, rotation_about_z, unit_vector,
};

// ---------------------------------------------------------------------------
// LegTarget
// ---------------------------------------------------------------------------

/// Everything the solver needs to know about one leg and the body it hangs
/// from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegTarget {
    pub leg: LegId,
    /// Attachment point on the body, in global coordinates.
    pub body_contact: Point3<f64>,
    /// Where the foot must land, in global coordinates.
    pub foot_tip: Point3<f64>,
    /// Body z-axis in global coordinates.
    pub body_normal: Vector3<f64>,
    /// Body x-axis in global coordinates.
    pub body_x_axis: Vector3<f64>,
    pub orientation: RotationFrame,
    pub links: LegLinkLengths,
}

impl LegTarget {
    /// Read the current state of `leg` from `body`.
    pub fn from_body<B: BodyModel>(body: &B, leg: LegId) -> Self {
        Self {
            leg,
            body_contact: body.body_attachment_point(leg),
            foot_tip: body.foot_tip(leg),
            body_normal: body.z_axis(),
            body_x_axis: body.x_axis(),
            orientation: body.orientation_frame(),
            links: body.leg_link_lengths(leg),
        }
    }
}

// ---------------------------------------------------------------------------
// LegGeometryResult
// ---------------------------------------------------------------------------

/// How the foot target was met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegReach {
    /// Femur and tibia close a triangle onto the foot target.
    Solved,
    /// The target is out of reach. Femur and tibia are laid straight
    /// towards it and the foot stops short.
    FullyExtended,
}

/// Solved joint points of one leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegGeometryResult {
    pub leg: LegId,
    pub joints: LegJoints,
    pub reach: LegReach,
}

impl LegGeometryResult {
    pub fn is_fully_extended(&self) -> bool {
        self.reach == LegReach::FullyExtended
    }
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

/// Solve the joint points of one leg.
///
/// `tolerance` bounds how far each solved link length may drift from its
/// configured length. Exceeding it is a solver fault: debug builds panic,
/// release builds return [`IkError::LinkLengthMismatch`].
///
/// # Errors
///
/// The ground and reach failures of [`IkError`] for an infeasible target,
/// [`IkError::DegenerateGeometry`] when the leg plane or triangle is
/// undefined, and [`IkError::LinkLengthMismatch`] in release builds.
///
/// # Panics
///
/// In debug builds, if the solved link lengths drift beyond `tolerance`.
pub fn solve_leg(target: &LegTarget, tolerance: f64) -> Result<LegGeometryResult, IkError> {
    let leg = target.leg;
    let links = target.links;

    let body_to_foot = target.foot_tip - target.body_contact;
    let unit_coxia_dir = project_onto_plane(&body_to_foot, &target.body_normal).for_leg(leg)?;

    let coxia_point = target.body_contact + unit_coxia_dir * links.coxia;
    if coxia_point.z < target.foot_tip.z {
        debug!(%leg, coxia_z = coxia_point.z, foot_z = target.foot_tip.z, "coxia joint below foot tip");
        return Err(IkError::CoxiaJointBelowGround { leg });
    }

    // Sagittal plane of the leg.
    let p0 = Point3::origin();
    let p1 = Point3::new(links.coxia, 0.0, 0.0);
    let mut droop = angle_between(&unit_coxia_dir, &body_to_foot).for_leg(leg)?;
    // Feet above the body plane stay above the local x-axis.
    if body_to_foot.dot(&target.body_normal) > 0.0 {
        droop = -droop;
    }
    let droop = droop.to_radians();
    let reach = body_to_foot.norm();
    let foot_local = Point3::new(reach * droop.cos(), 0.0, -reach * droop.sin());

    let coxia_to_foot = foot_local - p1;
    let d = coxia_to_foot.norm();
    let a = links.tibia;
    let b = links.femur;
    if !d.is_finite() {
        return Err(IkError::DegenerateGeometry {
            leg,
            source: GeometryError::NonFiniteLength(d),
        });
    }

    let (femur_end, foot, reach_kind) = if is_triangle(a, b, d) {
        let aa = angle_opposite_last_side(d, b, a).for_leg(leg)?;
        let ee = angle_between(&coxia_to_foot, &Vector3::x()).for_leg(leg)?;
        let beta = if foot_local.z > 0.0 { aa + ee } else { aa - ee };

        let femur_x = p1.x + b * beta.to_radians().cos();
        let mut femur_z = b * beta.to_radians().sin();
        if -foot_local.z > a {
            femur_z = -femur_z;
        }
        if beta < 0.0 && femur_z > 0.0 {
            femur_z = -femur_z;
        }
        let femur_end = Point3::new(femur_x, 0.0, femur_z);

        if femur_end.z < foot_local.z {
            debug!(%leg, beta, "tibia would pass through the ground");
            return Err(IkError::TibiaThroughGround { leg });
        }
        debug!(%leg, d, beta, "triangle solve");
        (femur_end, foot_local, LegReach::Solved)
    } else if a + b < d {
        let dir = unit_vector(&coxia_to_foot).for_leg(leg)?;
        let femur_end = p1 + dir * b;
        warn!(%leg, d, max_reach = a + b, "foot tip out of reach, leg fully extended");
        (femur_end, femur_end + dir * a, LegReach::FullyExtended)
    } else if d + b < a {
        debug!(%leg, d, "foot tip too close for the tibia");
        return Err(IkError::TibiaTooLong { leg });
    } else if d + a < b {
        debug!(%leg, d, "foot tip too close for the femur");
        return Err(IkError::FemurTooLong { leg });
    } else {
        return Err(IkError::DegenerateGeometry {
            leg,
            source: GeometryError::NonFiniteLength(d),
        });
    };

    let mut twist = angle_between(&unit_coxia_dir, &target.body_x_axis).for_leg(leg)?;
    if is_counter_clockwise(&unit_coxia_dir, &target.body_x_axis, &target.body_normal) {
        twist = -twist;
    }
    let twist_frame = rotation_about_z(twist);

    let mut points = [p0, p1, femur_end, foot];
    for point in &mut points {
        place_in_frame(point, &twist_frame, &target.orientation, &target.body_contact);
    }
    let joints = LegJoints::from_points(points);

    if let Err(fault) = check_link_lengths(leg, &joints, &links, tolerance) {
        error!(%fault, "leg solve produced inconsistent link lengths");
        if cfg!(debug_assertions) {
            panic!("{fault}");
        }
        return Err(fault);
    }

    Ok(LegGeometryResult {
        leg,
        joints,
        reach: reach_kind,
    })
}

/// Compare each link of `joints` against `links`.
///
/// # Errors
///
/// [`IkError::LinkLengthMismatch`] for the first link (proximal to distal)
/// whose length differs by more than `tolerance` or is not finite.
pub fn check_link_lengths(
    leg: LegId,
    joints: &LegJoints,
    links: &LegLinkLengths,
    tolerance: f64,
) -> Result<(), IkError> {
    for link in [Link::Coxia, Link::Femur, Link::Tibia] {
        let expected = links.get(link);
        let actual = joints.link_length(link);
        let drift = (actual - expected).abs();
        if !drift.is_finite() || drift > tolerance {
            return Err(IkError::LinkLengthMismatch {
                leg,
                link,
                expected,
                actual,
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
