//! Concrete six-legged body model.
//!
//! [`VirtualHexapod`] keeps the body as a rigid hexagon of attachment points
//! around a center, plus one [`LegJoints`] per leg. Body transforms move the
//! hexagon only; legs keep their joints until a solver writes new ones.

use nalgebra::{Point3, Rotation3, Vector3};

use hexapod_core::config::{BodyDimensions, HexapodConfig, StanceConfig};
use hexapod_core::error::ConfigError;
use hexapod_core::types::{LegId, LegLinkLengths};

use crate::joints::{LegJoints, RotationFrame};
use crate::traits::BodyModel;

/// A six-legged robot with a hexagonal body.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualHexapod {
    dimensions: BodyDimensions,
    stance: StanceConfig,
    /// Body center in global coordinates.
    center: Point3<f64>,
    orientation: RotationFrame,
    /// Attachment points relative to the center, in the body frame.
    local_vertices: [Vector3<f64>; LegId::COUNT],
    legs: [LegJoints; LegId::COUNT],
}

impl VirtualHexapod {
    /// Build a robot in its rest stance from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is invalid.
    pub fn from_config(config: &HexapodConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::rest(config))
    }

    /// Rest stance: body level, coxia horizontal, femur raised by
    /// `leg_stance`, tibia vertical, and every foot at `z = 0`.
    fn rest(config: &HexapodConfig) -> Self {
        let dims = config.dimensions;
        let stance = config.stance;
        let center = Point3::new(0.0, 0.0, config.rest_height());

        let local_vertices = LegId::ALL.map(|leg| body_vertex(&dims, leg));
        let legs = LegId::ALL.map(|leg| {
            rest_leg(
                center + local_vertices[leg.index()],
                coxia_azimuth(leg, stance.hip_stance),
                &dims,
                stance.leg_stance,
            )
        });

        Self {
            dimensions: dims,
            stance,
            center,
            orientation: RotationFrame::identity(),
            local_vertices,
            legs,
        }
    }

    pub const fn dimensions(&self) -> &BodyDimensions {
        &self.dimensions
    }

    pub const fn stance(&self) -> &StanceConfig {
        &self.stance
    }

    /// Body center in global coordinates.
    pub const fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Current joint points of `leg`.
    pub const fn leg_joints(&self, leg: LegId) -> &LegJoints {
        &self.legs[leg.index()]
    }

    /// Joint points of all legs, in leg order.
    pub const fn legs(&self) -> &[LegJoints; LegId::COUNT] {
        &self.legs
    }

    /// Attachment points of all legs in global coordinates, in leg order.
    pub fn body_vertices(&self) -> [Point3<f64>; LegId::COUNT] {
        LegId::ALL.map(|leg| self.body_attachment_point(leg))
    }

    /// Move the tracked ground-contact point of `leg`.
    pub fn set_foot_tip(&mut self, leg: LegId, point: Point3<f64>) {
        self.legs[leg.index()].foot_tip = point;
    }
}

impl Default for VirtualHexapod {
    fn default() -> Self {
        Self::rest(&HexapodConfig::default())
    }
}

impl BodyModel for VirtualHexapod {
    fn apply_rotate_and_translate(&mut self, rotation_degrees: &Vector3<f64>, translation: &Vector3<f64>) {
        let delta = Rotation3::from_euler_angles(
            rotation_degrees.x.to_radians(),
            rotation_degrees.y.to_radians(),
            rotation_degrees.z.to_radians(),
        );
        self.orientation = delta * self.orientation;
        self.center += translation;
    }

    fn body_attachment_point(&self, leg: LegId) -> Point3<f64> {
        self.center + self.orientation * self.local_vertices[leg.index()]
    }

    fn foot_tip(&self, leg: LegId) -> Point3<f64> {
        self.legs[leg.index()].foot_tip
    }

    fn orientation_frame(&self) -> RotationFrame {
        self.orientation
    }

    fn leg_link_lengths(&self, _leg: LegId) -> LegLinkLengths {
        self.dimensions.link_lengths()
    }

    fn translation_scale(&self) -> Vector3<f64> {
        Vector3::new(self.dimensions.middle, self.dimensions.side, self.dimensions.tibia)
    }

    fn set_leg_joints(&mut self, leg: LegId, joints: LegJoints) {
        self.legs[leg.index()] = joints;
    }
}

/// Attachment point of `leg` relative to the body center.
fn body_vertex(dims: &BodyDimensions, leg: LegId) -> Vector3<f64> {
    let (f, s, m) = (dims.front, dims.side, dims.middle);
    match leg {
        LegId::RightMiddle => Vector3::new(m, 0.0, 0.0),
        LegId::RightFront => Vector3::new(s, f, 0.0),
        LegId::LeftFront => Vector3::new(-s, f, 0.0),
        LegId::LeftMiddle => Vector3::new(-m, 0.0, 0.0),
        LegId::LeftBack => Vector3::new(-s, -f, 0.0),
        LegId::RightBack => Vector3::new(s, -f, 0.0),
    }
}

/// Coxia azimuth in degrees: the mounting axis turned towards +y for front
/// legs and towards -y for back legs.
fn coxia_azimuth(leg: LegId, hip_stance: f64) -> f64 {
    let splay = match leg {
        LegId::RightFront | LegId::LeftBack => hip_stance,
        LegId::LeftFront | LegId::RightBack => -hip_stance,
        LegId::RightMiddle | LegId::LeftMiddle => 0.0,
    };
    leg.axis_angle() + splay
}

fn rest_leg(body_contact: Point3<f64>, azimuth: f64, dims: &BodyDimensions, leg_stance: f64) -> LegJoints {
    let (sin_az, cos_az) = azimuth.to_radians().sin_cos();
    let (sin_ls, cos_ls) = leg_stance.to_radians().sin_cos();
    let out = Vector3::new(cos_az, sin_az, 0.0);
    let up = Vector3::z();

    let coxia_end = body_contact + out * dims.coxia;
    let femur_end = coxia_end + (out * cos_ls + up * sin_ls) * dims.femur;
    let foot_tip = femur_end - up * dims.tibia;
    LegJoints::new(body_contact, coxia_end, femur_end, foot_tip)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
