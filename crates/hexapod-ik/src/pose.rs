//! Whole-body pose solver.
//!
//! Applies a [`PoseCommand`] to a body and re-solves all six legs so the
//! feet stay on their ground-contact points. The update is all-or-nothing:
//! either every leg is solved and written back, or the body is returned in
//! its post-transform state with no leg touched.

use nalgebra::Vector3;
use tracing::debug;

use hexapod_core::config::SolverConfig;
use hexapod_core::types::{LegId, PoseCommand};
use hexapod_model::BodyModel;

use crate::angles::LegAngles;
use crate::error::{GeometryResultExt, IkError};
use crate::leg::{LegGeometryResult, LegTarget, solve_leg};

// ---------------------------------------------------------------------------
// SolveOutcome
// ---------------------------------------------------------------------------

/// Result of a pose update.
#[derive(Debug, Clone)]
pub enum SolveOutcome<B> {
    /// All legs solved. `body` carries the new pose and leg joints; `legs`
    /// holds one result per leg in [`LegId::ALL`] order.
    Success {
        body: B,
        legs: Vec<LegGeometryResult>,
    },
    /// The pose was rejected. `body` is the body after the rotation and
    /// translation were applied, with every leg unchanged. For an invalid
    /// command it is the body as passed in.
    Failure { error: IkError, body: B },
}

impl<B: BodyModel> SolveOutcome<B> {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub const fn body(&self) -> &B {
        match self {
            Self::Success { body, .. } | Self::Failure { body, .. } => body,
        }
    }

    pub fn into_body(self) -> B {
        match self {
            Self::Success { body, .. } | Self::Failure { body, .. } => body,
        }
    }

    pub const fn error(&self) -> Option<IkError> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error, .. } => Some(*error),
        }
    }

    pub fn legs(&self) -> Option<&[LegGeometryResult]> {
        match self {
            Self::Success { legs, .. } => Some(legs),
            Self::Failure { .. } => None,
        }
    }

    /// Joint angles of every solved leg, in [`LegId::ALL`] order.
    ///
    /// # Errors
    ///
    /// A failed outcome returns its error. A solved leg with a zero-length
    /// link returns [`IkError::DegenerateGeometry`].
    pub fn leg_angles(&self) -> Result<Vec<LegAngles>, IkError> {
        match self {
            Self::Success { body, legs } => {
                let orientation = body.orientation_frame();
                legs.iter()
                    .map(|result| LegAngles::from_joints(&result.joints, result.leg, &orientation).for_leg(result.leg))
                    .collect()
            }
            Self::Failure { error, .. } => Err(*error),
        }
    }

    /// Discard the rollback body of a failure.
    ///
    /// # Errors
    ///
    /// The rejection reason of a failed outcome.
    pub fn into_result(self) -> Result<(B, Vec<LegGeometryResult>), IkError> {
        match self {
            Self::Success { body, legs } => Ok((body, legs)),
            Self::Failure { error, .. } => Err(error),
        }
    }
}

// ---------------------------------------------------------------------------
// PoseSolver
// ---------------------------------------------------------------------------

/// Body pose inverse kinematics solver.
#[derive(Debug, Clone, Default)]
pub struct PoseSolver {
    config: SolverConfig,
}

impl PoseSolver {
    /// Create a new solver with the given configuration.
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Apply `command` to `body` and solve every leg.
    ///
    /// Offsets are scaled by [`BodyModel::translation_scale`]. Legs are
    /// solved in [`LegId::ALL`] order and the first failing leg is
    /// reported.
    pub fn solve<B: BodyModel>(&self, mut body: B, command: &PoseCommand) -> SolveOutcome<B> {
        if let Err(err) = command.validate() {
            debug!(%err, "pose command rejected");
            return SolveOutcome::Failure {
                error: err.into(),
                body,
            };
        }

        let rotation = Vector3::from(command.rotation);
        let translation = Vector3::from(command.offset).component_mul(&body.translation_scale());
        body.apply_rotate_and_translate(&rotation, &translation);

        // From here on `body` is the rollback snapshot: nothing below mutates
        // it until every leg has been solved.
        for leg in LegId::ALL {
            let contact = body.body_attachment_point(leg);
            let foot = body.foot_tip(leg);
            if contact.z < foot.z {
                debug!(%leg, contact_z = contact.z, foot_z = foot.z, "body contact below foot tip");
                return SolveOutcome::Failure {
                    error: IkError::BodyContactBelowGround { leg },
                    body,
                };
            }
        }

        let mut legs = Vec::with_capacity(LegId::COUNT);
        for leg in LegId::ALL {
            match solve_leg(&LegTarget::from_body(&body, leg), self.config.link_length_tolerance) {
                Ok(result) => legs.push(result),
                Err(error) => {
                    debug!(%error, leg = body.leg_name(leg), "pose rejected");
                    return SolveOutcome::Failure { error, body };
                }
            }
        }

        for result in &legs {
            body.set_leg_joints(result.leg, result.joints);
        }
        SolveOutcome::Success { body, legs }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
