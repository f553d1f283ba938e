//! Joint points of a single leg.

use nalgebra::{Point3, Rotation3};

use hexapod_core::types::Link;

/// Orientation of the body as a 3x3 rotation.
///
/// Frames compose by multiplication; `a * b` applies `b` first.
pub type RotationFrame = Rotation3<f64>;

/// The four joint points of one leg in global coordinates, proximal to
/// distal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegJoints {
    /// Attachment point on the body (coxia hinge).
    pub body_contact: Point3<f64>,
    /// End of the coxia (femur hinge).
    pub coxia_end: Point3<f64>,
    /// End of the femur (tibia hinge).
    pub femur_end: Point3<f64>,
    /// End of the tibia.
    pub foot_tip: Point3<f64>,
}

impl LegJoints {
    pub const fn new(
        body_contact: Point3<f64>,
        coxia_end: Point3<f64>,
        femur_end: Point3<f64>,
        foot_tip: Point3<f64>,
    ) -> Self {
        Self {
            body_contact,
            coxia_end,
            femur_end,
            foot_tip,
        }
    }

    /// Build from `[p0, p1, p2, p3]`.
    pub const fn from_points(points: [Point3<f64>; 4]) -> Self {
        let [body_contact, coxia_end, femur_end, foot_tip] = points;
        Self::new(body_contact, coxia_end, femur_end, foot_tip)
    }

    /// `[p0, p1, p2, p3]`.
    pub const fn points(&self) -> [Point3<f64>; 4] {
        [self.body_contact, self.coxia_end, self.femur_end, self.foot_tip]
    }

    /// Distance between the two joints bounding `link`.
    pub fn link_length(&self, link: Link) -> f64 {
        let (start, end) = match link {
            Link::Coxia => (self.body_contact, self.coxia_end),
            Link::Femur => (self.coxia_end, self.femur_end),
            Link::Tibia => (self.femur_end, self.foot_tip),
        };
        (end - start).norm()
    }
}
