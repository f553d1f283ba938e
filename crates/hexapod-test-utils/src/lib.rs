//! Shared test fixtures and utilities for the hexapod crates.
//!
//! Provides standard robot configurations, rest-pose body builders,
//! joint assertions and deterministic pose generation.

pub mod assertions;
pub mod fixtures;
pub mod rng;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use assertions::{assert_leg_joints_close, assert_link_lengths};
pub use fixtures::{config_with_stance, hexapod_with_stance, rest_hexapod, short_leg_links, standard_config};
pub use rng::{random_pose_command, seeded_rng};
