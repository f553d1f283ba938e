use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CommandError;

// ---------------------------------------------------------------------------
// LegId
// ---------------------------------------------------------------------------

/// One of the six legs, in the fixed order used for solving and reporting.
///
/// The discriminant is the leg index. Failure reporting always names the
/// lowest-indexed failing leg, so this order is part of the observable
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegId {
    RightMiddle = 0,
    RightFront = 1,
    LeftFront = 2,
    LeftMiddle = 3,
    LeftBack = 4,
    RightBack = 5,
}

impl LegId {
    /// Number of legs.
    pub const COUNT: usize = 6;

    /// All legs in solve order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::RightMiddle,
        Self::RightFront,
        Self::LeftFront,
        Self::LeftMiddle,
        Self::LeftBack,
        Self::RightBack,
    ];

    /// Position of this leg in [`LegId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable leg name (e.g. `"left-front"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::RightMiddle => "right-middle",
            Self::RightFront => "right-front",
            Self::LeftFront => "left-front",
            Self::LeftMiddle => "left-middle",
            Self::LeftBack => "left-back",
            Self::RightBack => "right-back",
        }
    }

    /// Azimuth of the leg's mounting axis in the body frame, in degrees,
    /// measured counter-clockwise from the body x-axis.
    pub const fn axis_angle(self) -> f64 {
        match self {
            Self::RightMiddle => 0.0,
            Self::RightFront => 45.0,
            Self::LeftFront => 135.0,
            Self::LeftMiddle => 180.0,
            Self::LeftBack => 225.0,
            Self::RightBack => 315.0,
        }
    }
}

impl fmt::Display for LegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Link / LegLinkLengths
// ---------------------------------------------------------------------------

/// One of the three rigid links of a leg, proximal to distal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Link {
    Coxia,
    Femur,
    Tibia,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Coxia => "coxia",
            Self::Femur => "femur",
            Self::Tibia => "tibia",
        })
    }
}

/// Link lengths of one leg. Fixed per robot instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegLinkLengths {
    pub coxia: f64,
    pub femur: f64,
    pub tibia: f64,
}

impl LegLinkLengths {
    pub const fn new(coxia: f64, femur: f64, tibia: f64) -> Self {
        Self {
            coxia,
            femur,
            tibia,
        }
    }

    /// Length of the given link.
    pub const fn get(&self, link: Link) -> f64 {
        match link {
            Link::Coxia => self.coxia,
            Link::Femur => self.femur,
            Link::Tibia => self.tibia,
        }
    }
}

// ---------------------------------------------------------------------------
// PoseCommand
// ---------------------------------------------------------------------------

/// Commanded body pose delta.
///
/// `rotation` is `[rot_x, rot_y, rot_z]` in degrees. `offset` is
/// `[end_x, end_y, end_z]`, each normalized to `[-1, 1]` and scaled by the
/// body's per-axis reach when applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PoseCommand {
    #[serde(default)]
    pub rotation: [f64; 3],
    #[serde(default)]
    pub offset: [f64; 3],
}

impl PoseCommand {
    pub const fn new(rot_x: f64, rot_y: f64, rot_z: f64, end_x: f64, end_y: f64, end_z: f64) -> Self {
        Self {
            rotation: [rot_x, rot_y, rot_z],
            offset: [end_x, end_y, end_z],
        }
    }

    /// The zero command: no rotation, no translation.
    pub const fn neutral() -> Self {
        Self {
            rotation: [0.0; 3],
            offset: [0.0; 3],
        }
    }

    /// Set the rotation part (degrees).
    #[must_use]
    pub const fn with_rotation(mut self, rot_x: f64, rot_y: f64, rot_z: f64) -> Self {
        self.rotation = [rot_x, rot_y, rot_z];
        self
    }

    /// Set the normalized translation part.
    #[must_use]
    pub const fn with_offset(mut self, end_x: f64, end_y: f64, end_z: f64) -> Self {
        self.offset = [end_x, end_y, end_z];
        self
    }

    /// Check that every value is finite and every offset lies in `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// [`CommandError::NonFinite`] or [`CommandError::OffsetOutOfRange`] for
    /// the first offending field.
    pub fn validate(&self) -> Result<(), CommandError> {
        const ROTATION_FIELDS: [&str; 3] = ["rot_x", "rot_y", "rot_z"];
        const OFFSET_FIELDS: [&str; 3] = ["end_x", "end_y", "end_z"];

        for (field, value) in ROTATION_FIELDS.into_iter().zip(self.rotation) {
            if !value.is_finite() {
                return Err(CommandError::NonFinite { field });
            }
        }
        for (field, value) in OFFSET_FIELDS.into_iter().zip(self.offset) {
            if !value.is_finite() {
                return Err(CommandError::NonFinite { field });
            }
            if !(-1.0..=1.0).contains(&value) {
                return Err(CommandError::OffsetOutOfRange { field, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
