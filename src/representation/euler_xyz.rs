//! Euler angles about the X, Y' and Z'' axes (roll, pitch, yaw).

use crate::{
    conversion,
    num::Float,
    representation::{self, Payload, Representation, RepresentationKind, euler_zyx},
    rotation::Rotation,
    usage::Usage,
};
use nalgebra::Vector3;
use simba::scalar::SubsetOf;

/// Representation tag for intrinsic XYZ Euler angles stored as
/// `[roll; pitch; yaw]`, describing `Rx(roll) Ry(pitch) Rz(yaw)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EulerXyzRepr;

/// A rotation stored as roll, pitch and yaw angles.
pub type EulerAnglesXyz<T, U> = Rotation<EulerXyzRepr, T, U>;

/// Alias of [`EulerAnglesXyz`] named after its angles.
pub type EulerAnglesRpy<T, U> = EulerAnglesXyz<T, U>;

impl Representation for EulerXyzRepr {
    const KIND: RepresentationKind = RepresentationKind::EulerAnglesXyz;

    type Payload<T: Float> = Vector3<T>;

    fn identity<T: Float>() -> Vector3<T> {
        Vector3::zeros()
    }

    fn into_payload<T: Float>(value: Vector3<T>) -> Payload<T> {
        Payload::EulerAnglesXyz(value)
    }

    fn from_payload<T: Float>(payload: &Payload<T>) -> Vector3<T> {
        conversion::to_euler_xyz(payload)
    }

    fn mirrored<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        -value
    }

    fn inverted<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        representation::inverted_through_matrix::<Self, T>(value)
    }

    fn unique<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        euler_zyx::unique_tait_bryan_angles(value)
    }

    fn cast<T: Float + SubsetOf<V>, V: Float>(value: &Vector3<T>) -> Vector3<V> {
        value.cast()
    }
}

impl<T: Float, U: Usage> EulerAnglesXyz<T, U> {
    pub fn new(roll: T, pitch: T, yaw: T) -> Self {
        Self::from_angles(&Vector3::new(roll, pitch, yaw))
    }

    /// Creates a rotation from the angles `[roll; pitch; yaw]`.
    pub fn from_angles(angles: &Vector3<T>) -> Self {
        Self::from_implementation(*angles)
    }

    pub fn angles(&self) -> Vector3<T> {
        self.to_implementation()
    }

    impl_component_accessors!(
        0 => roll, set_roll;
        1 => pitch, set_pitch;
        2 => yaw, set_yaw;
        0 => x, set_x;
        1 => y, set_y;
        2 => z, set_z;
    );
}
