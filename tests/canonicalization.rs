mod common;

use approx::assert_abs_diff_eq;
use common::*;
use impact_rotation::{
    Active, AngleAxis, EulerAnglesXyz, EulerAnglesZyx, EulerAnglesZyz, Passive,
    RotationQuaternion, RotationVector,
};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

proptest! {
    #[test]
    fn unique_zyx_angles_are_idempotent_and_in_range(
        angles in unbounded_angles_strategy(),
    ) {
        let rotation = EulerAnglesZyx::<f64, Active>::from_angles(&angles);
        let unique = rotation.unique();
        assert_eq!(
            unique.unique().to_stored_implementation(),
            unique.to_stored_implementation()
        );
        assert!((-PI..PI).contains(&unique.yaw()));
        assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&unique.pitch()));
        assert!((-PI..PI).contains(&unique.roll()));
        assert_near(&unique, &rotation);
    }

    #[test]
    fn unique_passive_zyx_angles_are_idempotent_and_in_range(
        angles in unbounded_angles_strategy(),
    ) {
        let rotation = EulerAnglesZyx::<f64, Passive>::from_angles(&angles);
        let unique = rotation.unique();
        assert_eq!(
            unique.unique().to_stored_implementation(),
            unique.to_stored_implementation()
        );
        assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&unique.pitch()));
        assert_near(&unique, &rotation);
    }

    #[test]
    fn unique_xyz_angles_are_idempotent_and_in_range(
        angles in unbounded_angles_strategy(),
    ) {
        let rotation = EulerAnglesXyz::<f64, Passive>::from_angles(&angles);
        let unique = rotation.unique();
        assert_eq!(unique.unique().angles(), unique.angles());
        assert!((-PI..PI).contains(&unique.roll()));
        assert!((-FRAC_PI_2..=FRAC_PI_2).contains(&unique.pitch()));
        assert!((-PI..PI).contains(&unique.yaw()));
        assert_near(&unique, &rotation);
    }

    #[test]
    fn unique_zyz_angles_are_idempotent_and_in_range(
        angles in unbounded_angles_strategy(),
    ) {
        let rotation = EulerAnglesZyz::<f64, Active>::from_angles(&angles);
        let unique = rotation.unique();
        assert_eq!(unique.unique().angles(), unique.angles());
        assert!((-PI..PI).contains(&unique.precession()));
        assert!((0.0..=PI).contains(&unique.nutation()));
        assert!((-PI..PI).contains(&unique.spin()));
        assert_near(&unique, &rotation);
    }

    #[test]
    fn unique_angle_axis_is_idempotent_and_in_range(
        angle in angle_strategy(10.0),
        axis in unit_axis_strategy(),
    ) {
        let rotation = AngleAxis::<f64, Passive>::from_angle_and_axis(angle, &axis);
        let unique = rotation.unique();
        assert_eq!(
            unique.unique().to_stored_implementation(),
            unique.to_stored_implementation()
        );
        assert!((0.0..=PI).contains(&unique.angle()));
        assert_near(&unique, &rotation);
    }

    #[test]
    fn unique_quaternion_has_non_negative_real_part(
        quaternion in quaternion_strategy(),
    ) {
        let rotation = RotationQuaternion::<f64, Passive>::from_implementation(quaternion);
        let unique = rotation.unique();
        assert!(unique.w() >= 0.0);
        assert_eq!(unique.unique().quaternion(), unique.quaternion());
        assert_near(&unique, &rotation);
    }

    #[test]
    fn unique_rotation_vector_is_no_longer_than_half_turn(
        vector in rotation_vector_strategy(3.0 * PI),
    ) {
        let rotation = RotationVector::<f64, Active>::from_vector(&vector);
        let unique = rotation.unique();
        assert!(unique.vector().norm() <= PI + 1e-12);
        assert_near(&unique, &rotation);
    }

    #[test]
    fn usage_symmetry_of_stored_euler_angles(
        angles in unbounded_angles_strategy(),
    ) {
        let active = EulerAnglesZyx::<f64, Active>::new(angles[0], angles[1], angles[2]);
        let passive = EulerAnglesZyx::<f64, Passive>::new(angles[0], angles[1], angles[2]);
        assert_eq!(
            active.to_stored_implementation(),
            -passive.to_stored_implementation()
        );
        assert_eq!(active.to_implementation(), passive.to_implementation());
    }
}

#[test]
fn pitch_beyond_quarter_turn_is_flipped_into_range() {
    let rotation = EulerAnglesZyx::<f64, Active>::new(PI, FRAC_PI_2 + 0.1, 0.0);
    let unique = rotation.unique();
    assert_abs_diff_eq!(unique.yaw(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(unique.pitch(), FRAC_PI_2 - 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(unique.roll(), -PI, epsilon = 1e-12);
    assert_near(&unique, &rotation);
}

#[test]
fn unique_of_canonical_rotation_is_exact_copy() {
    let rotation = EulerAnglesZyx::<f64, Passive>::new(-PI, -FRAC_PI_2, 1.0);
    assert_eq!(
        rotation.unique().to_stored_implementation(),
        rotation.to_stored_implementation()
    );
}
