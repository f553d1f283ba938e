use thiserror::Error;

use hexapod_core::error::CommandError;
use hexapod_core::types::{LegId, Link};

/// Geometry primitive failures.
///
/// Copy + static messages for cheap propagation in hot paths.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("zero-length vector has no direction")]
    ZeroLengthVector,

    #[error("degenerate triangle: side d = {d}, side b = {b}")]
    DegenerateTriangle { d: f64, b: f64 },

    #[error("non-finite length {0}")]
    NonFiniteLength(f64),
}

/// Reasons a pose update is rejected.
///
/// Every variant except [`IkError::InvalidCommand`] names the leg that
/// caused the rejection. [`IkError::LinkLengthMismatch`] signals a solver
/// bug rather than an unreachable pose.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IkError {
    #[error("Impossible twist at given height: {leg} body contact shoved on ground")]
    BodyContactBelowGround { leg: LegId },

    #[error("Impossible twist at given height: {leg} coxia joint shoved on ground")]
    CoxiaJointBelowGround { leg: LegId },

    #[error("{leg} leg can't go through ground")]
    TibiaThroughGround { leg: LegId },

    #[error("Can't reach foot tip: {leg} leg's tibia is too long")]
    TibiaTooLong { leg: LegId },

    #[error("Can't reach foot tip: {leg} leg's femur is too long")]
    FemurTooLong { leg: LegId },

    #[error("{leg} leg geometry is degenerate: {source}")]
    DegenerateGeometry { leg: LegId, source: GeometryError },

    #[error("Invalid pose command: {0}")]
    InvalidCommand(#[from] CommandError),

    #[error("Internal fault: {leg} leg {link} length {actual} differs from configured {expected}")]
    LinkLengthMismatch {
        leg: LegId,
        link: Link,
        expected: f64,
        actual: f64,
    },
}

impl IkError {
    /// The leg this failure is attributed to, if any.
    pub const fn leg(&self) -> Option<LegId> {
        match *self {
            Self::BodyContactBelowGround { leg }
            | Self::CoxiaJointBelowGround { leg }
            | Self::TibiaThroughGround { leg }
            | Self::TibiaTooLong { leg }
            | Self::FemurTooLong { leg }
            | Self::DegenerateGeometry { leg, .. }
            | Self::LinkLengthMismatch { leg, .. } => Some(leg),
            Self::InvalidCommand(_) => None,
        }
    }

    /// Whether this is a solver consistency fault rather than an infeasible
    /// pose.
    pub const fn is_internal_fault(&self) -> bool {
        matches!(self, Self::LinkLengthMismatch { .. })
    }
}

/// Attach a leg to a geometry failure.
pub(crate) trait GeometryResultExt<T> {
    fn for_leg(self, leg: LegId) -> Result<T, IkError>;
}

impl<T> GeometryResultExt<T> for Result<T, GeometryError> {
    fn for_leg(self, leg: LegId) -> Result<T, IkError> {
        self.map_err(|source| IkError::DegenerateGeometry { leg, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leg_accessor() {
        let err = IkError::TibiaTooLong { leg: LegId::LeftBack };
        assert_eq!(err.leg(), Some(LegId::LeftBack));

        let err = IkError::InvalidCommand(CommandError::NonFinite { field: "rot_x" });
        assert_eq!(err.leg(), None);
    }

    #[test]
    fn only_link_mismatch_is_internal_fault() {
        let fault = IkError::LinkLengthMismatch {
            leg: LegId::RightMiddle,
            link: Link::Femur,
            expected: 66.0,
            actual: 70.0,
        };
        assert!(fault.is_internal_fault());
        assert!(!IkError::FemurTooLong { leg: LegId::RightMiddle }.is_internal_fault());
    }

    #[test]
    fn display_messages_name_the_leg() {
        assert_eq!(
            IkError::BodyContactBelowGround { leg: LegId::RightFront }.to_string(),
            "Impossible twist at given height: right-front body contact shoved on ground"
        );
        assert_eq!(
            IkError::TibiaThroughGround { leg: LegId::LeftMiddle }.to_string(),
            "left-middle leg can't go through ground"
        );
        assert_eq!(
            IkError::FemurTooLong { leg: LegId::RightBack }.to_string(),
            "Can't reach foot tip: right-back leg's femur is too long"
        );
    }

    #[test]
    fn degenerate_geometry_wraps_source() {
        let result: Result<(), GeometryError> = Err(GeometryError::ZeroLengthVector);
        let err = result.for_leg(LegId::LeftFront).unwrap_err();
        assert_eq!(
            err,
            IkError::DegenerateGeometry {
                leg: LegId::LeftFront,
                source: GeometryError::ZeroLengthVector,
            }
        );
        assert_eq!(
            err.to_string(),
            "left-front leg geometry is degenerate: zero-length vector has no direction"
        );
    }

    #[test]
    fn command_error_converts() {
        let err: IkError = CommandError::OffsetOutOfRange { field: "end_y", value: 1.5 }.into();
        assert!(matches!(err, IkError::InvalidCommand(_)));
        assert!(err.to_string().contains("end_y"));
    }
}
