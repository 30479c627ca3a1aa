//! Unit quaternions.

use crate::{
    conversion,
    num::Float,
    representation::{Payload, Representation, RepresentationKind},
    rotation::Rotation,
    usage::Usage,
    validation,
};
use anyhow::Result;
use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use simba::scalar::SubsetOf;

/// Representation tag for rotations stored as unit quaternions with Hamilton
/// multiplication.
#[derive(Clone, Copy, Debug, Default)]
pub struct QuaternionRepr;

/// A rotation stored as a unit quaternion.
pub type RotationQuaternion<T, U> = Rotation<QuaternionRepr, T, U>;

impl Representation for QuaternionRepr {
    const KIND: RepresentationKind = RepresentationKind::RotationQuaternion;

    type Payload<T: Float> = UnitQuaternion<T>;

    fn identity<T: Float>() -> UnitQuaternion<T> {
        UnitQuaternion::identity()
    }

    fn into_payload<T: Float>(value: UnitQuaternion<T>) -> Payload<T> {
        Payload::RotationQuaternion(value)
    }

    fn from_payload<T: Float>(payload: &Payload<T>) -> UnitQuaternion<T> {
        conversion::to_rotation_quaternion(payload)
    }

    fn mirrored<T: Float>(value: &UnitQuaternion<T>) -> UnitQuaternion<T> {
        value.conjugate()
    }

    fn inverted<T: Float>(value: &UnitQuaternion<T>) -> UnitQuaternion<T> {
        value.conjugate()
    }

    /// Picks the quaternion with non-negative real part.
    fn unique<T: Float>(value: &UnitQuaternion<T>) -> UnitQuaternion<T> {
        if value.w < T::ZERO {
            UnitQuaternion::new_unchecked(-value.into_inner())
        } else {
            *value
        }
    }

    fn cast<T: Float + SubsetOf<V>, V: Float>(value: &UnitQuaternion<T>) -> UnitQuaternion<V> {
        UnitQuaternion::new_unchecked(Quaternion::from(value.coords.cast::<V>()))
    }
}

impl<T: Float, U: Usage> RotationQuaternion<T, U> {
    /// Creates a rotation from the components of a quaternion, which is
    /// assumed to have unit norm.
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self::from_quaternion(&Quaternion::new(w, x, y, z))
    }

    /// Creates a rotation from the given quaternion, which is assumed to
    /// have unit norm.
    pub fn from_quaternion(quaternion: &Quaternion<T>) -> Self {
        Self::from_implementation(UnitQuaternion::new_unchecked(*quaternion))
    }

    /// Creates a rotation from the components of a quaternion after
    /// checking that it has unit norm.
    ///
    /// # Errors
    /// Returns an error if any component is non-finite or the norm deviates
    /// from one.
    pub fn try_new(w: T, x: T, y: T, z: T) -> Result<Self> {
        let quaternion = Quaternion::new(w, x, y, z);
        validation::check_unit_quaternion(&quaternion)?;
        Ok(Self::from_quaternion(&quaternion))
    }

    pub fn w(&self) -> T {
        self.to_implementation().w
    }

    pub fn x(&self) -> T {
        self.to_implementation().i
    }

    pub fn y(&self) -> T {
        self.to_implementation().j
    }

    pub fn z(&self) -> T {
        self.to_implementation().k
    }

    /// The scalar part, equal to [`w`](Self::w).
    pub fn real(&self) -> T {
        self.w()
    }

    /// The vector part `[x; y; z]`.
    pub fn imaginary(&self) -> Vector3<T> {
        self.to_implementation().imag()
    }

    pub fn quaternion(&self) -> UnitQuaternion<T> {
        self.to_implementation()
    }

    /// The norm of the stored quaternion, which deviates from one only
    /// through numerical drift or invalid input.
    pub fn norm(&self) -> T {
        self.to_stored_implementation().into_inner().norm()
    }

    /// Returns the rotation with the conjugated quaternion, which is the
    /// inverse rotation.
    pub fn conjugated(&self) -> Self {
        Self::from_implementation(self.to_implementation().conjugate())
    }

    /// Returns the rotation with the quaternion rescaled to unit norm.
    pub fn renormalized(&self) -> Self {
        log::debug!("Renormalizing quaternion with norm {}", self.norm());
        Self::from_stored_implementation(UnitQuaternion::new_normalize(
            self.to_stored_implementation().into_inner(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Active, Passive};
    use approx::assert_abs_diff_eq;

    #[test]
    fn accessors_report_constructor_components() {
        let active = RotationQuaternion::<f64, Active>::new(0.5, -0.5, 0.5, 0.5);
        let passive = RotationQuaternion::<f64, Passive>::new(0.5, -0.5, 0.5, 0.5);
        assert_eq!(
            [active.w(), active.x(), active.y(), active.z()],
            [0.5, -0.5, 0.5, 0.5]
        );
        assert_eq!(
            [passive.w(), passive.x(), passive.y(), passive.z()],
            [0.5, -0.5, 0.5, 0.5]
        );
    }

    #[test]
    fn passive_quaternions_store_the_conjugate() {
        let rotation = RotationQuaternion::<f64, Passive>::new(0.5, -0.5, 0.5, 0.5);
        let stored = rotation.to_stored_implementation();
        assert_eq!(stored.w, 0.5);
        assert_eq!(stored.imag(), Vector3::new(0.5, -0.5, -0.5));
        assert_eq!(rotation.imaginary(), Vector3::new(-0.5, 0.5, 0.5));
        assert_eq!(rotation.real(), 0.5);
    }

    #[test]
    fn unique_quaternion_has_non_negative_real_part() {
        let rotation = RotationQuaternion::<f64, Active>::new(-0.5, 0.5, 0.5, 0.5);
        let unique = rotation.unique();
        assert_eq!(unique.w(), 0.5);
        assert_eq!(unique.imaginary(), Vector3::new(-0.5, -0.5, -0.5));
        assert_eq!(unique.unique().quaternion(), unique.quaternion());
    }

    #[test]
    fn conjugating_inverts_rotation() {
        let rotation = RotationQuaternion::<f64, Active>::new(0.5, 0.5, 0.5, 0.5);
        assert!(
            (rotation * rotation.conjugated()).is_near(&RotationQuaternion::identity(), 1e-12)
        );
    }

    #[test]
    fn try_new_rejects_non_unit_quaternions() {
        assert!(RotationQuaternion::<f64, Active>::try_new(1.0, 1.0, 0.0, 0.0).is_err());
        assert!(RotationQuaternion::<f64, Active>::try_new(f64::NAN, 0.0, 0.0, 0.0).is_err());
        assert!(RotationQuaternion::<f64, Active>::try_new(0.0, 0.0, 1.0, 0.0).is_ok());
    }

    #[test]
    fn renormalizing_restores_unit_norm() {
        let rotation = RotationQuaternion::<f64, Passive>::new(1.0, 1.0, 0.0, 0.0);
        assert_abs_diff_eq!(rotation.norm(), 2.0_f64.sqrt(), epsilon = 1e-12);
        let renormalized = rotation.renormalized();
        assert_abs_diff_eq!(renormalized.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(renormalized.x(), 0.5_f64.sqrt(), epsilon = 1e-12);
    }
}
