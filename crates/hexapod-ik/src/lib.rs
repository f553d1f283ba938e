//! Body-pose inverse kinematics for six-legged robots.
//!
//! Given a commanded body rotation and translation, re-solves every leg so
//! the feet stay on their ground-contact points, or rejects the pose with
//! the first offending leg.
//!
//! # Architecture
//!
//! ```text
//! PoseCommand ──► PoseSolver ──► solve_leg ×6 ──► SolveOutcome
//!                     │               │
//!                BodyModel        geometry
//! ```
//!
//! [`PoseSolver`] drives any [`BodyModel`](hexapod_model::BodyModel). Each leg
//! is solved independently by [`solve_leg`] as a planar two-link problem
//! and mapped back through the body frame. [`LegAngles`] recovers servo
//! angles from the solved joint points.

pub mod angles;
pub mod error;
pub mod geometry;
pub mod leg;
pub mod pose;

pub use angles::LegAngles;
pub use error::{GeometryError, IkError};
pub use leg::{LegGeometryResult, LegReach, LegTarget, check_link_lengths, solve_leg};
pub use pose::{PoseSolver, SolveOutcome};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::angles::LegAngles;
    pub use crate::error::{GeometryError, IkError};
    pub use crate::leg::{LegGeometryResult, LegReach};
    pub use crate::pose::{PoseSolver, SolveOutcome};
    pub use hexapod_core::prelude::*;
    pub use hexapod_model::{BodyModel, LegJoints, VirtualHexapod};
}
