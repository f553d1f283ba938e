// hexapod-core: Types, config and errors shared by the hexapod kinematics crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::{BodyDimensions, HexapodConfig, SolverConfig, StanceConfig};
pub use error::{CommandError, ConfigError, HexapodError};
pub use types::{LegId, LegLinkLengths, Link, PoseCommand};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{BodyDimensions, HexapodConfig, SolverConfig, StanceConfig};
    pub use crate::error::{CommandError, ConfigError, HexapodError};
    pub use crate::types::{LegId, LegLinkLengths, Link, PoseCommand};
}
