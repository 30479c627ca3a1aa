#![allow(dead_code)]

use impact_rotation::{
    AngleAxisRepr, EulerXyzRepr, EulerZyxRepr, EulerZyzRepr, MatrixRepr, QuaternionRepr,
    Representation, Rotation, RotationVectorRepr, Usage,
};
use nalgebra::{UnitQuaternion, Vector3, vector};
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Largest acceptable angle between rotations that should be equal.
pub const TOLERANCE: f64 = 1e-9;

prop_compose! {
    pub fn unit_axis_strategy()(
        direction_phi in 0.0..TAU,
        direction_theta in 0.0..PI,
    ) -> Vector3<f64> {
        vector![
            direction_phi.cos() * direction_theta.sin(),
            direction_phi.sin() * direction_theta.sin(),
            direction_theta.cos()
        ]
    }
}

prop_compose! {
    pub fn angle_strategy(max_angle: f64)(angle in -max_angle..max_angle) -> f64 {
        angle
    }
}

prop_compose! {
    /// Tait-Bryan angles with the middle angle kept away from gimbal lock,
    /// where extraction loses precision.
    pub fn tait_bryan_angles_strategy()(
        first in -PI..PI,
        middle in -(FRAC_PI_2 - 0.05)..(FRAC_PI_2 - 0.05),
        third in -PI..PI,
    ) -> Vector3<f64> {
        vector![first, middle, third]
    }
}

prop_compose! {
    /// ZYZ angles with the nutation kept away from 0 and π.
    pub fn proper_euler_angles_strategy()(
        precession in -PI..PI,
        nutation in 0.05..(PI - 0.05),
        spin in -PI..PI,
    ) -> Vector3<f64> {
        vector![precession, nutation, spin]
    }
}

prop_compose! {
    /// Angles anywhere in a few turns, for exercising wrapping.
    pub fn unbounded_angles_strategy()(
        first in -10.0..10.0,
        middle in -10.0..10.0,
        third in -10.0..10.0,
    ) -> Vector3<f64> {
        vector![first, middle, third]
    }
}

prop_compose! {
    pub fn rotation_vector_strategy(max_angle: f64)(
        axis in unit_axis_strategy(),
        angle in 0.0..max_angle,
    ) -> Vector3<f64> {
        axis * angle
    }
}

prop_compose! {
    pub fn quaternion_strategy()(
        axis in unit_axis_strategy(),
        angle in -PI..PI,
    ) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&nalgebra::Unit::new_unchecked(axis), angle)
    }
}

pub fn assert_near<A: Representation, B: Representation, U: Usage>(
    a: &Rotation<A, f64, U>,
    b: &Rotation<B, f64, U>,
) {
    let disparity = a.disparity_angle(b);
    assert!(
        disparity <= TOLERANCE,
        "rotations differ by {disparity} rad:\n{a:?}\n{b:?}"
    );
}

/// Converts the rotation into `B` and back, checking that neither step
/// changes the rotation.
pub fn assert_round_trip<A: Representation, B: Representation, U: Usage>(
    rotation: &Rotation<A, f64, U>,
) {
    let converted: Rotation<B, f64, U> = rotation.convert();
    assert_near(&converted, rotation);
    let back: Rotation<A, f64, U> = converted.convert();
    assert_near(&back, rotation);
}

/// Round trips the rotation through every representation.
pub fn assert_round_trips_through_all<A: Representation, U: Usage>(
    rotation: &Rotation<A, f64, U>,
) {
    assert_round_trip::<A, MatrixRepr, U>(rotation);
    assert_round_trip::<A, QuaternionRepr, U>(rotation);
    assert_round_trip::<A, AngleAxisRepr, U>(rotation);
    assert_round_trip::<A, RotationVectorRepr, U>(rotation);
    assert_round_trip::<A, EulerZyxRepr, U>(rotation);
    assert_round_trip::<A, EulerXyzRepr, U>(rotation);
    assert_round_trip::<A, EulerZyzRepr, U>(rotation);
}
