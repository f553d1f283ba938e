//! Geometric model of a six-legged robot.
//!
//! The pose solver in `hexapod-ik` only talks to a body through the
//! [`BodyModel`] trait. [`VirtualHexapod`] is the concrete model: a rigid
//! hexagonal body with six three-link legs, built in a rest stance from a
//! [`HexapodConfig`](hexapod_core::HexapodConfig).
//!
//! # Coordinates
//!
//! Global frame, z up, ground at `z = 0`. The body frame x-axis points to the
//! right side of the robot, y to the front.

pub mod hexapod;
pub mod joints;
pub mod traits;

pub use hexapod::VirtualHexapod;
pub use joints::{LegJoints, RotationFrame};
pub use traits::BodyModel;
