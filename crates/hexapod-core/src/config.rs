use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::LegLinkLengths;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_front() -> f64 {
    59.0
}
const fn default_side() -> f64 {
    119.0
}
const fn default_middle() -> f64 {
    93.0
}
const fn default_coxia() -> f64 {
    58.0
}
const fn default_femur() -> f64 {
    66.0
}
const fn default_tibia() -> f64 {
    101.0
}
const fn default_link_length_tolerance() -> f64 {
    1.0
}

// ---------------------------------------------------------------------------
// BodyDimensions
// ---------------------------------------------------------------------------

/// Body and leg dimensions, in arbitrary but consistent length units.
///
/// `front`, `side` and `middle` place the six leg attachment points on the
/// body: corner legs sit at `(±side, ±front)`, middle legs at `(±middle, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDimensions {
    #[serde(default = "default_front")]
    pub front: f64,
    #[serde(default = "default_side")]
    pub side: f64,
    #[serde(default = "default_middle")]
    pub middle: f64,
    #[serde(default = "default_coxia")]
    pub coxia: f64,
    #[serde(default = "default_femur")]
    pub femur: f64,
    #[serde(default = "default_tibia")]
    pub tibia: f64,
}

impl Default for BodyDimensions {
    fn default() -> Self {
        Self {
            front: default_front(),
            side: default_side(),
            middle: default_middle(),
            coxia: default_coxia(),
            femur: default_femur(),
            tibia: default_tibia(),
        }
    }
}

impl BodyDimensions {
    /// Link lengths shared by all six legs.
    pub const fn link_lengths(&self) -> LegLinkLengths {
        LegLinkLengths::new(self.coxia, self.femur, self.tibia)
    }

    /// Validate configuration. Returns Err on invalid values.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NonPositiveDimension`] for the first dimension that is
    /// not a finite positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("front", self.front),
            ("side", self.side),
            ("middle", self.middle),
            ("coxia", self.coxia),
            ("femur", self.femur),
            ("tibia", self.tibia),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { field, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// StanceConfig
// ---------------------------------------------------------------------------

/// Starting stance of the legs, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StanceConfig {
    /// Coxia splay: front legs turn forward and back legs backward by this
    /// angle. Middle legs are unaffected.
    #[serde(default)]
    pub hip_stance: f64,
    /// Femur elevation above the horizontal. The tibia hangs vertically.
    #[serde(default)]
    pub leg_stance: f64,
}

impl StanceConfig {
    /// # Errors
    ///
    /// [`ConfigError::InvalidStance`] if either angle is outside
    /// `[-90, 90]` degrees.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("hip_stance", self.hip_stance), ("leg_stance", self.leg_stance)] {
            if !(-90.0..=90.0).contains(&value) {
                return Err(ConfigError::InvalidStance { field, value });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SolverConfig
// ---------------------------------------------------------------------------

/// Pose solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Allowed difference between a solved link length and its configured
    /// length before the solve is treated as an internal fault.
    #[serde(default = "default_link_length_tolerance")]
    pub link_length_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            link_length_tolerance: default_link_length_tolerance(),
        }
    }
}

impl SolverConfig {
    /// # Errors
    ///
    /// [`ConfigError::InvalidTolerance`] if the tolerance is not a finite
    /// positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.link_length_tolerance.is_finite() || self.link_length_tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(self.link_length_tolerance));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// HexapodConfig
// ---------------------------------------------------------------------------

/// Complete robot configuration.
///
/// Every section and field is optional in TOML; missing values take the
/// defaults of the reference robot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HexapodConfig {
    #[serde(default)]
    pub dimensions: BodyDimensions,
    #[serde(default)]
    pub stance: StanceConfig,
    #[serde(default)]
    pub solver: SolverConfig,
}

impl HexapodConfig {
    /// Height of the body center above the ground in the rest stance.
    pub fn rest_height(&self) -> f64 {
        self.dimensions.tibia - self.dimensions.femur * self.stance.leg_stance.to_radians().sin()
    }

    /// Validate configuration. Returns Err on invalid values.
    ///
    /// # Errors
    ///
    /// Any section error, or [`ConfigError::BodyBelowGround`] if the rest
    /// stance would put the body at or below the ground.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dimensions.validate()?;
        self.stance.validate()?;
        self.solver.validate()?;
        let height = self.rest_height();
        if height <= 0.0 {
            return Err(ConfigError::BodyBelowGround { height });
        }
        Ok(())
    }

    /// Parse and validate from a TOML string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] on malformed input, or any validation error.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`HexapodConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = HexapodConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.rest_height() - 101.0).abs() < 1e-12);
    }

    #[test]
    fn link_lengths_from_dimensions() {
        let links = BodyDimensions::default().link_lengths();
        assert_eq!(links, LegLinkLengths::new(58.0, 66.0, 101.0));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = HexapodConfig::from_toml_str("").unwrap();
        assert_eq!(config, HexapodConfig::default());
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let config = HexapodConfig::from_toml_str(
            r"
            [dimensions]
            femur = 80.0
            tibia = 120.0

            [stance]
            leg_stance = 30.0
            ",
        )
        .unwrap();
        assert!((config.dimensions.femur - 80.0).abs() < f64::EPSILON);
        assert!((config.dimensions.coxia - 58.0).abs() < f64::EPSILON);
        assert!((config.stance.leg_stance - 30.0).abs() < f64::EPSILON);
        assert!((config.rest_height() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn zero_dimension_rejected() {
        let err = HexapodConfig::from_toml_str("[dimensions]\ncoxia = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositiveDimension { field: "coxia", .. }
        ));
    }

    #[test]
    fn nan_dimension_rejected() {
        let mut config = HexapodConfig::default();
        config.dimensions.side = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveDimension { field: "side", .. })
        ));
    }

    #[test]
    fn infinite_dimension_rejected() {
        for field in ["middle", "front", "coxia"] {
            let err = HexapodConfig::from_toml_str(&format!("[dimensions]\n{field} = inf\n")).unwrap_err();
            assert!(
                matches!(err, ConfigError::NonPositiveDimension { field: f, value } if f == field && value.is_infinite()),
                "{field}: {err}"
            );
        }
    }

    #[test]
    fn infinite_tolerance_rejected() {
        let err = HexapodConfig::from_toml_str("[solver]\nlink_length_tolerance = inf\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTolerance(t) if t.is_infinite()));
    }

    #[test]
    fn stance_out_of_range_rejected() {
        let err = HexapodConfig::from_toml_str("[stance]\nhip_stance = 95.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidStance {
                field: "hip_stance",
                ..
            }
        ));
    }

    #[test]
    fn raised_femur_lifting_feet_above_body_rejected() {
        let mut config = HexapodConfig::default();
        config.dimensions.femur = 200.0;
        config.stance.leg_stance = 45.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BodyBelowGround { .. })
        ));
    }

    #[test]
    fn non_positive_tolerance_rejected() {
        let err = HexapodConfig::from_toml_str("[solver]\nlink_length_tolerance = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTolerance(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = HexapodConfig::from_toml_str("[dimensions\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = HexapodConfig::from_file("/nonexistent/hexapod.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
