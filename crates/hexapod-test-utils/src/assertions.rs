//! Joint-level assertions.

use approx::relative_eq;

use hexapod_core::types::{LegLinkLengths, Link};
use hexapod_model::LegJoints;

/// Assert that every link of `joints` is within `tolerance` of `links`.
///
/// # Panics
///
/// Panics naming the first link out of tolerance.
pub fn assert_link_lengths(joints: &LegJoints, links: &LegLinkLengths, tolerance: f64) {
    for link in [Link::Coxia, Link::Femur, Link::Tibia] {
        let expected = links.get(link);
        let actual = joints.link_length(link);
        assert!(
            (actual - expected).abs() <= tolerance,
            "{link} length {actual} differs from {expected} by more than {tolerance}"
        );
    }
}

/// Assert that two legs have the same joint points within `epsilon`.
///
/// # Panics
///
/// Panics naming the first joint that differs.
pub fn assert_leg_joints_close(actual: &LegJoints, expected: &LegJoints, epsilon: f64) {
    const NAMES: [&str; 4] = ["body_contact", "coxia_end", "femur_end", "foot_tip"];
    for ((name, a), e) in NAMES.into_iter().zip(actual.points()).zip(expected.points()) {
        assert!(
            relative_eq!(a, e, epsilon = epsilon),
            "{name} differs: {a} vs {e} (epsilon {epsilon})"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn straight_leg() -> LegJoints {
        LegJoints::new(
            Point3::origin(),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(30.0, 0.0, 0.0),
            Point3::new(30.0, 0.0, -30.0),
        )
    }

    #[test]
    fn matching_lengths_pass() {
        assert_link_lengths(&straight_leg(), &LegLinkLengths::new(10.0, 20.0, 30.0), 1e-9);
    }

    #[test]
    #[should_panic(expected = "femur length")]
    fn wrong_femur_fails() {
        assert_link_lengths(&straight_leg(), &LegLinkLengths::new(10.0, 25.0, 30.0), 1.0);
    }

    #[test]
    #[should_panic(expected = "foot_tip differs")]
    fn moved_foot_fails() {
        let mut moved = straight_leg();
        moved.foot_tip.z -= 1.0;
        assert_leg_joints_close(&moved, &straight_leg(), 1e-6);
    }
}
