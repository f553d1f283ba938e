use thiserror::Error;

/// Top-level error type for hexapod-core.
#[derive(Debug, Error)]
pub enum HexapodError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid dimension {field}: {value} (must be finite and > 0)")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("Invalid stance {field}: {value} (must be within [-90, 90] degrees)")]
    InvalidStance { field: &'static str, value: f64 },

    #[error("Body height {height} is not above ground: femur raised too high for the tibia")]
    BodyBelowGround { height: f64 },

    #[error("Invalid link_length_tolerance: {0} (must be finite and > 0)")]
    InvalidTolerance(f64),
}

/// Pose command validation errors.
///
/// Copy + static messages for cheap propagation in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CommandError {
    #[error("Command value {field} is not finite")]
    NonFinite { field: &'static str },

    #[error("Command offset {field} = {value} is outside [-1, 1]")]
    OffsetOutOfRange { field: &'static str, value: f64 },
}
