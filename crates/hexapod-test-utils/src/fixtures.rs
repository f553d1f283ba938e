//! Standard robot configurations and bodies for tests.

use hexapod_core::config::HexapodConfig;
use hexapod_core::types::LegLinkLengths;
use hexapod_model::VirtualHexapod;

/// The reference robot: front 59, side 119, middle 93, coxia 58, femur 66,
/// tibia 101, zero stance.
pub fn standard_config() -> HexapodConfig {
    HexapodConfig::default()
}

/// Reference robot with the given hip and leg stance (degrees).
pub fn config_with_stance(hip_stance: f64, leg_stance: f64) -> HexapodConfig {
    let mut config = standard_config();
    config.stance.hip_stance = hip_stance;
    config.stance.leg_stance = leg_stance;
    config
}

/// Reference robot in its rest pose.
pub fn rest_hexapod() -> VirtualHexapod {
    VirtualHexapod::default()
}

/// Reference robot in the rest pose for the given stance.
///
/// # Panics
///
/// Panics if the stance produces an invalid configuration.
pub fn hexapod_with_stance(hip_stance: f64, leg_stance: f64) -> VirtualHexapod {
    VirtualHexapod::from_config(&config_with_stance(hip_stance, leg_stance))
        .unwrap_or_else(|err| panic!("invalid test stance ({hip_stance}, {leg_stance}): {err}"))
}

/// Small `(10, 20, 30)` leg used by hand-checked single-leg cases.
pub const fn short_leg_links() -> LegLinkLengths {
    LegLinkLengths::new(10.0, 20.0, 30.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
