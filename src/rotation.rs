//! The generic rotation value type.

use crate::{
    conversion,
    num::Float,
    representation::{AxisAngle, Payload, Representation},
    usage::{self, Usage},
};
use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use simba::scalar::SubsetOf;
use std::marker::PhantomData;

/// A rotation stored in representation `R` with scalar type `T` and usage
/// `U`.
///
/// The stored payload always describes the rotation that is applied to
/// vectors. For [`Active`](crate::Active) rotations it is what the
/// constructors and accessors see. For [`Passive`](crate::Passive) rotations
/// constructors and accessors work with the mirror of the stored payload
/// (negated angles, transposed matrix or conjugated quaternion).
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        transparent,
        bound(
            serialize = "R::Payload<T>: serde::Serialize",
            deserialize = "R::Payload<T>: serde::Deserialize<'de>"
        )
    )
)]
#[derive(Clone, Copy, Debug)]
pub struct Rotation<R: Representation, T: Float, U: Usage> {
    stored: R::Payload<T>,
    #[cfg_attr(feature = "serde", serde(skip))]
    _marker: PhantomData<fn() -> (R, U)>,
}

impl<R: Representation, T: Float, U: Usage> Rotation<R, T, U> {
    /// Creates the identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::from_stored_implementation(R::identity())
    }

    /// Creates a rotation whose accessors will report the given payload.
    #[inline]
    pub fn from_implementation(logical: R::Payload<T>) -> Self {
        Self::from_stored_implementation(usage::usage_transformed::<R, T, U>(logical))
    }

    /// Creates a rotation storing the given payload as is.
    #[inline]
    pub fn from_stored_implementation(stored: R::Payload<T>) -> Self {
        Self {
            stored,
            _marker: PhantomData,
        }
    }

    /// Creates a rotation in this representation describing the same
    /// rotation as the given one.
    pub fn from_rotation<S: Representation>(other: &Rotation<S, T, U>) -> Self {
        Self::from_stored_implementation(R::from_payload(&other.payload()))
    }

    /// Converts the rotation into representation `D`.
    pub fn convert<D: Representation>(&self) -> Rotation<D, T, U> {
        Rotation::from_rotation(self)
    }

    /// Makes this rotation describe the same rotation as the given one.
    pub fn set_from<S: Representation>(&mut self, other: &Rotation<S, T, U>) {
        *self = Self::from_rotation(other);
    }

    /// Returns the payload as seen through the usage of the rotation.
    #[inline]
    pub fn to_implementation(&self) -> R::Payload<T> {
        usage::usage_transformed::<R, T, U>(self.stored)
    }

    /// Replaces the payload as seen through the usage of the rotation.
    #[inline]
    pub fn set_implementation(&mut self, logical: R::Payload<T>) {
        self.stored = usage::usage_transformed::<R, T, U>(logical);
    }

    /// Returns the stored payload.
    #[inline]
    pub fn to_stored_implementation(&self) -> R::Payload<T> {
        self.stored
    }

    #[inline]
    pub fn stored_implementation_mut(&mut self) -> &mut R::Payload<T> {
        &mut self.stored
    }

    /// The stored payload tagged with its kind.
    #[inline]
    pub(crate) fn payload(&self) -> Payload<T> {
        R::into_payload(self.stored)
    }

    /// Returns the inverse rotation.
    #[inline]
    pub fn inverted(&self) -> Self {
        Self::from_stored_implementation(R::inverted(&self.stored))
    }

    /// Inverts the rotation in place.
    #[inline]
    pub fn invert(&mut self) {
        *self = self.inverted();
    }

    /// Returns the canonical payload for this rotation. Canonicalization
    /// happens on the payload seen through the usage of the rotation.
    pub fn unique(&self) -> Self {
        Self::from_implementation(R::unique(&self.to_implementation()))
    }

    pub fn set_unique(&mut self) {
        *self = self.unique();
    }

    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Casts the rotation to scalar type `V`.
    pub fn cast<V: Float>(&self) -> Rotation<R, V, U>
    where
        T: SubsetOf<V>,
    {
        Rotation::from_stored_implementation(R::cast(&self.stored))
    }

    /// Returns a rotation of the opposite usage whose accessors report the
    /// same payload as this one. Except for Euler angles, whose negation is
    /// not the inverse, the two rotate vectors inversely to each other.
    pub fn with_other_usage(&self) -> Rotation<R, T, U::Other> {
        Rotation::from_implementation(self.to_implementation())
    }

    /// Returns the stored rotation as a quaternion.
    #[inline]
    pub fn to_stored_quaternion(&self) -> UnitQuaternion<T> {
        conversion::to_rotation_quaternion(&self.payload())
    }

    /// Computes the angle of the rotation taking this rotation to the given
    /// one, in `[0, π]`.
    pub fn disparity_angle<S: Representation>(&self, other: &Rotation<S, T, U>) -> T {
        let relative = self.to_stored_quaternion().inverse() * other.to_stored_quaternion();
        T::TWO * relative.imag().norm().atan2(relative.w.abs())
    }

    /// Whether the angle between this and the given rotation does not exceed
    /// the given tolerance.
    pub fn is_near<S: Representation>(&self, other: &Rotation<S, T, U>, tolerance: T) -> bool {
        self.disparity_angle(other) <= tolerance
    }

    /// Creates the shortest rotation taking the direction of `from` onto the
    /// direction of `to`. Opposite directions give a half turn about an axis
    /// orthogonal to `from`. A zero-length input gives the identity.
    pub fn from_vectors(from: &Vector3<T>, to: &Vector3<T>) -> Self {
        let (Some(from), Some(to)) = (
            from.try_normalize(T::DEGENERACY_THRESHOLD),
            to.try_normalize(T::DEGENERACY_THRESHOLD),
        ) else {
            log::trace!("Zero-length direction given, using the identity rotation");
            return Self::identity();
        };

        let cos_angle = from.dot(&to);

        let quaternion = if cos_angle + T::ONE < T::GIMBAL_LOCK_THRESHOLD {
            log::trace!("Opposite directions given, rotating half a turn");
            let axis = from
                .cross(&Vector3::x())
                .try_normalize(T::GIMBAL_LOCK_THRESHOLD)
                .unwrap_or_else(|| conversion::normalized_axis(&from.cross(&Vector3::y())));
            conversion::quaternion_from_angle_axis(&AxisAngle {
                angle: T::PI,
                axis,
            })
        } else {
            UnitQuaternion::new_normalize(Quaternion::from_parts(
                T::ONE + cos_angle,
                from.cross(&to),
            ))
        };

        Self::from_stored_implementation(R::from_payload(&Payload::RotationQuaternion(
            quaternion,
        )))
    }

    /// Perturbs the rotation by the given rotation vector, applied after
    /// this rotation.
    pub fn box_plus(&self, perturbation: &Vector3<T>) -> Self {
        let perturbed = conversion::quaternion_from_rotation_vector(perturbation)
            * self.to_stored_quaternion();
        Self::from_stored_implementation(R::from_payload(&Payload::RotationQuaternion(
            perturbed,
        )))
    }

    /// Returns the rotation vector `v` for which `other.box_plus(v)` gives
    /// this rotation, using the shortest such rotation.
    pub fn box_minus<S: Representation>(&self, other: &Rotation<S, T, U>) -> Vector3<T> {
        let difference = self.to_stored_quaternion() * other.to_stored_quaternion().inverse();
        conversion::rotation_vector_from_angle_axis(&conversion::angle_axis_from_quaternion(
            &difference,
        ))
    }
}

impl<R: Representation, T: Float, U: Usage> Default for Rotation<R, T, U> {
    fn default() -> Self {
        Self::identity()
    }
}
