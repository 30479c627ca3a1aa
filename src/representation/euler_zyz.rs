//! Euler angles about the Z, Y' and Z'' axes (precession, nutation, spin).

use crate::{
    conversion,
    num::{self, Float},
    representation::{self, Payload, Representation, RepresentationKind},
    rotation::Rotation,
    usage::Usage,
};
use nalgebra::Vector3;
use simba::scalar::SubsetOf;

/// Representation tag for intrinsic ZYZ Euler angles stored as
/// `[precession; nutation; spin]`, describing
/// `Rz(precession) Ry(nutation) Rz(spin)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EulerZyzRepr;

pub type EulerAnglesZyz<T, U> = Rotation<EulerZyzRepr, T, U>;

impl Representation for EulerZyzRepr {
    const KIND: RepresentationKind = RepresentationKind::EulerAnglesZyz;

    type Payload<T: Float> = Vector3<T>;

    fn identity<T: Float>() -> Vector3<T> {
        Vector3::zeros()
    }

    fn into_payload<T: Float>(value: Vector3<T>) -> Payload<T> {
        Payload::EulerAnglesZyz(value)
    }

    fn from_payload<T: Float>(payload: &Payload<T>) -> Vector3<T> {
        conversion::to_euler_zyz(payload)
    }

    fn mirrored<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        -value
    }

    fn inverted<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        representation::inverted_through_matrix::<Self, T>(value)
    }

    /// Precession and spin end up in `[-π, π)` and nutation in `[0, π]`,
    /// using that `(a, -b, c)` and `(a ± π, b, c ± π)` are the same rotation.
    fn unique<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        let precession = num::wrap_angle(value[0]);
        let nutation = num::wrap_angle_lower_open(value[1]);
        let spin = num::wrap_angle(value[2]);

        if nutation < T::ZERO {
            Vector3::new(
                num::shift_by_half_turn(precession),
                -nutation,
                num::shift_by_half_turn(spin),
            )
        } else {
            Vector3::new(precession, nutation, spin)
        }
    }

    fn cast<T: Float + SubsetOf<V>, V: Float>(value: &Vector3<T>) -> Vector3<V> {
        value.cast()
    }
}

impl<T: Float, U: Usage> EulerAnglesZyz<T, U> {
    pub fn new(precession: T, nutation: T, spin: T) -> Self {
        Self::from_angles(&Vector3::new(precession, nutation, spin))
    }

    /// Creates a rotation from the angles `[precession; nutation; spin]`.
    pub fn from_angles(angles: &Vector3<T>) -> Self {
        Self::from_implementation(*angles)
    }

    pub fn angles(&self) -> Vector3<T> {
        self.to_implementation()
    }

    impl_component_accessors!(
        0 => precession, set_precession;
        1 => nutation, set_nutation;
        2 => spin, set_spin;
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Active, AngleAxis, Passive};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn nutation_rotates_about_y() {
        let zyz = EulerAnglesZyz::<f64, Active>::new(0.0, 0.9, 0.0);
        let angle_axis = AngleAxis::<f64, Active>::new(0.9, 0.0, 1.0, 0.0);
        assert!(zyz.is_near(&angle_axis, 1e-12));
    }

    #[test]
    fn precession_and_spin_add_up_without_nutation() {
        let zyz = EulerAnglesZyz::<f64, Active>::new(0.3, 0.0, 0.5);
        let angle_axis = AngleAxis::<f64, Active>::new(0.8, 0.0, 0.0, 1.0);
        assert!(zyz.is_near(&angle_axis, 1e-12));
    }

    #[test]
    fn unique_makes_nutation_non_negative() {
        let rotation = EulerAnglesZyz::<f64, Passive>::new(0.4, -1.0, -0.3);
        let unique = rotation.unique();
        assert_abs_diff_eq!(unique.precession(), 0.4 - PI, epsilon = 1e-12);
        assert_abs_diff_eq!(unique.nutation(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(unique.spin(), PI - 0.3, epsilon = 1e-12);
        assert!(unique.is_near(&rotation, 1e-12));
        assert_eq!(unique.unique().angles(), unique.angles());
    }

    #[test]
    fn unique_keeps_half_turn_nutation() {
        let angles = Vector3::new(0.1, PI, 0.2);
        assert_eq!(EulerZyzRepr::unique(&angles), angles);
    }

    #[test]
    fn inverse_undoes_rotation() {
        let rotation = EulerAnglesZyz::<f64, Active>::new(0.3, 1.2, -2.0);
        assert!(
            (rotation.inverted() * rotation).is_near(&EulerAnglesZyz::identity(), 1e-12)
        );
    }

    #[test]
    fn setters_write_through_usage() {
        let mut rotation = EulerAnglesZyz::<f64, Passive>::identity();
        rotation.set_nutation(0.5);
        assert_eq!(rotation.nutation(), 0.5);
        assert_eq!(rotation.to_stored_implementation()[1], -0.5);
    }
}
