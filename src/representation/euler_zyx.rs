//! Euler angles about the Z, Y' and X'' axes (yaw, pitch, roll).

use crate::{
    conversion,
    num::{self, Float},
    representation::{self, Payload, Representation, RepresentationKind},
    rotation::Rotation,
    usage::Usage,
};
use nalgebra::Vector3;
use simba::scalar::SubsetOf;

/// Representation tag for intrinsic ZYX Euler angles stored as
/// `[yaw; pitch; roll]`, describing `Rz(yaw) Ry(pitch) Rx(roll)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EulerZyxRepr;

/// A rotation stored as yaw, pitch and roll angles.
pub type EulerAnglesZyx<T, U> = Rotation<EulerZyxRepr, T, U>;

/// Alias of [`EulerAnglesZyx`] named after its angles.
pub type EulerAnglesYpr<T, U> = EulerAnglesZyx<T, U>;

impl Representation for EulerZyxRepr {
    const KIND: RepresentationKind = RepresentationKind::EulerAnglesZyx;

    type Payload<T: Float> = Vector3<T>;

    fn identity<T: Float>() -> Vector3<T> {
        Vector3::zeros()
    }

    fn into_payload<T: Float>(value: Vector3<T>) -> Payload<T> {
        Payload::EulerAnglesZyx(value)
    }

    fn from_payload<T: Float>(payload: &Payload<T>) -> Vector3<T> {
        conversion::to_euler_zyx(payload)
    }

    fn mirrored<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        -value
    }

    fn inverted<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        representation::inverted_through_matrix::<Self, T>(value)
    }

    /// Yaw and roll end up in `[-π, π)` and pitch in `[-π/2, π/2]`.
    fn unique<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        unique_tait_bryan_angles(value)
    }

    fn cast<T: Float + SubsetOf<V>, V: Float>(value: &Vector3<T>) -> Vector3<V> {
        value.cast()
    }
}

/// Canonicalizes Tait-Bryan angles, where `(a, b, c)` and
/// `(a ± π, π - b, c ± π)` describe the same rotation.
pub(crate) fn unique_tait_bryan_angles<T: Float>(angles: &Vector3<T>) -> Vector3<T> {
    let first = num::wrap_angle(angles[0]);
    let middle = num::wrap_angle(angles[1]);
    let third = num::wrap_angle(angles[2]);

    if middle > T::FRAC_PI_2 {
        Vector3::new(
            num::shift_by_half_turn(first),
            T::PI - middle,
            num::shift_by_half_turn(third),
        )
    } else if middle < -T::FRAC_PI_2 {
        Vector3::new(
            num::shift_by_half_turn(first),
            -T::PI - middle,
            num::shift_by_half_turn(third),
        )
    } else {
        Vector3::new(first, middle, third)
    }
}

impl<T: Float, U: Usage> EulerAnglesZyx<T, U> {
    pub fn new(yaw: T, pitch: T, roll: T) -> Self {
        Self::from_angles(&Vector3::new(yaw, pitch, roll))
    }

    /// Creates a rotation from the angles `[yaw; pitch; roll]`.
    pub fn from_angles(angles: &Vector3<T>) -> Self {
        Self::from_implementation(*angles)
    }

    /// Returns `[yaw; pitch; roll]`.
    pub fn angles(&self) -> Vector3<T> {
        self.to_implementation()
    }

    impl_component_accessors!(
        0 => yaw, set_yaw;
        1 => pitch, set_pitch;
        2 => roll, set_roll;
        0 => z, set_z;
        1 => y, set_y;
        2 => x, set_x;
    );
}
