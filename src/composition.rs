//! Composition of rotations and their application to vectors.

use crate::{
    conversion,
    num::Float,
    representation::{Payload, Representation, RepresentationKind},
    rotation::Rotation,
    usage::Usage,
};
use nalgebra::{Matrix3, Matrix3xX, Point3, SMatrix, Vector3};

/// Composes two stored payloads so that the result applies `rhs` first and
/// `lhs` second. Matrices are multiplied directly; every other
/// representation is composed as quaternions and converted back.
pub fn composed<R: Representation, T: Float>(
    lhs: &R::Payload<T>,
    rhs: &R::Payload<T>,
) -> R::Payload<T> {
    let lhs = R::into_payload(*lhs);
    let rhs = R::into_payload(*rhs);

    let product = match R::KIND {
        RepresentationKind::RotationMatrix => Payload::RotationMatrix(
            conversion::to_rotation_matrix(&lhs) * conversion::to_rotation_matrix(&rhs),
        ),
        _ => Payload::RotationQuaternion(
            conversion::to_rotation_quaternion(&lhs) * conversion::to_rotation_quaternion(&rhs),
        ),
    };

    R::from_payload(&product)
}

impl<R: Representation, T: Float, U: Usage> Rotation<R, T, U> {
    /// Returns the rotation applying `other` first and then this rotation.
    pub fn compose(&self, other: &Self) -> Self {
        Self::from_stored_implementation(composed::<R, T>(
            &self.to_stored_implementation(),
            &other.to_stored_implementation(),
        ))
    }

    /// Returns the stored rotation as a matrix, which is what gets applied
    /// to vectors.
    #[inline]
    pub fn to_stored_matrix(&self) -> Matrix3<T> {
        conversion::to_rotation_matrix(&self.payload())
    }

    /// Applies the rotation to the given vector.
    #[inline]
    pub fn rotate(&self, vector: &Vector3<T>) -> Vector3<T> {
        self.to_stored_matrix() * vector
    }

    /// Applies the rotation to the given point, rotating about the origin.
    #[inline]
    pub fn rotate_point(&self, point: &Point3<T>) -> Point3<T> {
        self.to_stored_matrix() * point
    }

    /// Applies the rotation to each column of the given matrix.
    pub fn rotate_columns<const N: usize>(&self, columns: &SMatrix<T, 3, N>) -> SMatrix<T, 3, N> {
        self.to_stored_matrix() * columns
    }

    /// Applies the rotation to each column of the given dynamically sized
    /// matrix.
    pub fn rotate_dynamic_columns(&self, columns: &Matrix3xX<T>) -> Matrix3xX<T> {
        self.to_stored_matrix() * columns
    }

    /// Applies the inverse of the rotation to the given vector.
    #[inline]
    pub fn inverse_rotate(&self, vector: &Vector3<T>) -> Vector3<T> {
        self.to_stored_matrix().tr_mul(vector)
    }

    #[inline]
    pub fn inverse_rotate_point(&self, point: &Point3<T>) -> Point3<T> {
        Point3::from(self.to_stored_matrix().tr_mul(&point.coords))
    }
}

impl_binop!(
    Mul,
    mul,
    [R: Representation, T: Float, U: Usage],
    Rotation<R, T, U>,
    Rotation<R, T, U>,
    Rotation<R, T, U>,
    |a, b| { a.compose(b) }
);

impl_binop!(
    Mul,
    mul,
    [R: Representation, T: Float, U: Usage],
    Rotation<R, T, U>,
    Vector3<T>,
    Vector3<T>,
    |a, b| { a.rotate(b) }
);

impl_binop!(
    Mul,
    mul,
    [R: Representation, T: Float, U: Usage],
    Rotation<R, T, U>,
    Point3<T>,
    Point3<T>,
    |a, b| { a.rotate_point(b) }
);

impl_binop_assign!(
    MulAssign,
    mul_assign,
    [R: Representation, T: Float, U: Usage],
    Rotation<R, T, U>,
    Rotation<R, T, U>,
    |a, b| {
        *a = a.compose(b);
    }
);
