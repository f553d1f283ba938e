//! Integration test: hand-checked leg and body scenarios.
//!
//! Single-leg cases use a `(10, 20, 30)` leg hanging from a level body at
//! the origin so every joint position can be verified by hand. Body cases
//! use the reference robot.

use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};

use hexapod_ik::prelude::*;
use hexapod_ik::{LegTarget, solve_leg};
use hexapod_model::RotationFrame;
use hexapod_test_utils::{assert_link_lengths, rest_hexapod, short_leg_links};

const TOLERANCE: f64 = 1.0;

fn level_leg(foot_tip: Point3<f64>, links: LegLinkLengths) -> LegTarget {
    LegTarget {
        leg: LegId::RightMiddle,
        body_contact: Point3::origin(),
        foot_tip,
        body_normal: Vector3::z(),
        body_x_axis: Vector3::x(),
        orientation: RotationFrame::identity(),
        links,
    }
}

// ---------------------------------------------------------------------------
// Triangle solve
// ---------------------------------------------------------------------------

#[test]
fn foot_below_and_out_is_solved_without_ground_contact() {
    let result = solve_leg(&level_leg(Point3::new(30.0, 0.0, -30.0), short_leg_links()), TOLERANCE).unwrap();

    assert_eq!(result.reach, LegReach::Solved);
    assert_relative_eq!(result.joints.coxia_end, Point3::new(10.0, 0.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(result.joints.femur_end, Point3::new(30.0, 0.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(result.joints.foot_tip, Point3::new(30.0, 0.0, -30.0), epsilon = 1e-9);
    assert_link_lengths(&result.joints, &short_leg_links(), 1e-9);
}

#[test]
fn foot_above_rolled_body_plane_bends_knee_upward() {
    // Body rolled 30 degrees about x. The foot is below the attachment point
    // but on the upper side of the body plane.
    let orientation = RotationFrame::from_euler_angles(30_f64.to_radians(), 0.0, 0.0);
    let normal = orientation * Vector3::z();
    let foot = Point3::new(20.0, -40.0, -5.0);
    let target = LegTarget {
        body_normal: normal,
        body_x_axis: orientation * Vector3::x(),
        orientation,
        ..level_leg(foot, short_leg_links())
    };
    assert!(foot.coords.dot(&normal) > 0.0);

    let result = solve_leg(&target, TOLERANCE).unwrap();
    assert_eq!(result.reach, LegReach::Solved);
    assert_relative_eq!(result.joints.foot_tip, foot, epsilon = 1e-9);
    assert_link_lengths(&result.joints, &short_leg_links(), 1e-9);
    // Knee above both the body plane and the foot.
    assert!(result.joints.femur_end.coords.dot(&normal) > foot.coords.dot(&normal));
}

// ---------------------------------------------------------------------------
// Reach limits
// ---------------------------------------------------------------------------

#[test]
fn exact_full_reach_is_still_a_triangle() {
    let result = solve_leg(&level_leg(Point3::new(60.0, 0.0, 0.0), short_leg_links()), TOLERANCE).unwrap();
    assert_eq!(result.reach, LegReach::Solved);
    assert_relative_eq!(result.joints.femur_end, Point3::new(30.0, 0.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(result.joints.foot_tip, Point3::new(60.0, 0.0, 0.0), epsilon = 1e-9);
}

#[test]
fn over_reach_extends_fully_and_stops_short() {
    let target = Point3::new(61.0, 0.0, 0.0);
    let result = solve_leg(&level_leg(target, short_leg_links()), TOLERANCE).unwrap();
    assert_eq!(result.reach, LegReach::FullyExtended);
    assert_relative_eq!(result.joints.femur_end, Point3::new(30.0, 0.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(result.joints.foot_tip, Point3::new(60.0, 0.0, 0.0), epsilon = 1e-9);
    assert!((result.joints.foot_tip - target).norm() > 0.5);
    assert_link_lengths(&result.joints, &short_leg_links(), 1e-9);
}

#[test]
fn under_reach_names_the_longer_link() {
    let foot = Point3::new(15.0, 0.0, 0.0);

    let err = solve_leg(&level_leg(foot, short_leg_links()), TOLERANCE).unwrap_err();
    assert_eq!(err, IkError::TibiaTooLong { leg: LegId::RightMiddle });

    let err = solve_leg(&level_leg(foot, LegLinkLengths::new(10.0, 30.0, 20.0)), TOLERANCE).unwrap_err();
    assert_eq!(err, IkError::FemurTooLong { leg: LegId::RightMiddle });
}

#[test]
fn raised_body_fully_extends_every_leg() {
    let body = rest_hexapod();
    let outcome = PoseSolver::with_defaults().solve(body, &PoseCommand::neutral().with_offset(0.0, 0.0, 1.0));

    let legs = outcome.legs().unwrap();
    for result in legs {
        assert!(result.is_fully_extended(), "{}", result.leg);
        // Feet are lifted off their ground contacts.
        assert!(result.joints.foot_tip.z > 1.0, "{}", result.leg);
    }
}

// ---------------------------------------------------------------------------
// Ground violations
// ---------------------------------------------------------------------------

#[test]
fn pitched_and_lowered_body_hits_ground_before_any_leg_is_solved() {
    let body = rest_hexapod();
    let command = PoseCommand::new(0.0, 30.0, 0.0, 0.0, 0.0, -0.6);
    let outcome = PoseSolver::with_defaults().solve(body.clone(), &command);

    let Some(error) = outcome.error() else {
        panic!("pose should be rejected");
    };
    assert_eq!(error, IkError::BodyContactBelowGround { leg: LegId::RightMiddle });
    assert!(error.to_string().contains("body contact shoved on ground"));

    let returned = outcome.into_body();
    assert!(returned.body_attachment_point(LegId::RightMiddle).z < 0.0);
    for leg in LegId::ALL {
        assert_eq!(returned.leg_joints(leg), body.leg_joints(leg));
    }
}

#[test]
fn femur_dipping_below_foot_is_rejected() {
    let links = LegLinkLengths::new(10.0, 30.0, 20.0);
    let err = solve_leg(&level_leg(Point3::new(10.0, 0.0, -15.0), links), TOLERANCE).unwrap_err();
    assert_eq!(err, IkError::TibiaThroughGround { leg: LegId::RightMiddle });
}

#[test]
fn foot_above_coxia_is_rejected() {
    let err = solve_leg(&level_leg(Point3::new(40.0, 0.0, 5.0), short_leg_links()), TOLERANCE).unwrap_err();
    assert_eq!(err, IkError::CoxiaJointBelowGround { leg: LegId::RightMiddle });
}
