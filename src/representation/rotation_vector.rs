//! Rotation vectors.

use crate::{
    conversion,
    num::Float,
    representation::{AngleAxisRepr, Payload, Representation, RepresentationKind},
    rotation::Rotation,
    usage::Usage,
};
use nalgebra::Vector3;
use simba::scalar::SubsetOf;

/// Representation tag for rotations stored as the rotation axis scaled by
/// the rotation angle.
#[derive(Clone, Copy, Debug, Default)]
pub struct RotationVectorRepr;

/// A rotation stored as a rotation vector.
pub type RotationVector<T, U> = Rotation<RotationVectorRepr, T, U>;

impl Representation for RotationVectorRepr {
    const KIND: RepresentationKind = RepresentationKind::RotationVector;

    type Payload<T: Float> = Vector3<T>;

    fn identity<T: Float>() -> Vector3<T> {
        Vector3::zeros()
    }

    fn into_payload<T: Float>(value: Vector3<T>) -> Payload<T> {
        Payload::RotationVector(value)
    }

    fn from_payload<T: Float>(payload: &Payload<T>) -> Vector3<T> {
        conversion::to_rotation_vector(payload)
    }

    fn mirrored<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        -value
    }

    fn inverted<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        -value
    }

    /// Vectors no longer than π are already unique. Longer ones are
    /// canonicalized as angle-axis.
    fn unique<T: Float>(value: &Vector3<T>) -> Vector3<T> {
        if value.norm() <= T::PI {
            return *value;
        }
        let angle_axis = conversion::angle_axis_from_rotation_vector(value);
        conversion::rotation_vector_from_angle_axis(&AngleAxisRepr::unique(&angle_axis))
    }

    fn cast<T: Float + SubsetOf<V>, V: Float>(value: &Vector3<T>) -> Vector3<V> {
        value.cast()
    }
}

impl<T: Float, U: Usage> RotationVector<T, U> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self::from_vector(&Vector3::new(x, y, z))
    }

    pub fn from_vector(vector: &Vector3<T>) -> Self {
        Self::from_implementation(*vector)
    }

    pub fn vector(&self) -> Vector3<T> {
        self.to_implementation()
    }

    pub fn set_vector(&mut self, vector: &Vector3<T>) {
        self.set_implementation(*vector);
    }

    impl_component_accessors!(
        0 => x, set_x;
        1 => y, set_y;
        2 => z, set_z;
    );
}
