//! Rotation matrices.

use crate::{
    conversion,
    num::Float,
    representation::{Payload, Representation, RepresentationKind},
    rotation::Rotation,
    usage::Usage,
    validation,
};
use anyhow::Result;
use nalgebra::{Matrix3, Rotation3};
use simba::scalar::SubsetOf;

/// Representation tag for rotations stored as orthonormal 3×3 matrices.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixRepr;

/// A rotation stored as a 3×3 rotation matrix.
pub type RotationMatrix<T, U> = Rotation<MatrixRepr, T, U>;

impl Representation for MatrixRepr {
    const KIND: RepresentationKind = RepresentationKind::RotationMatrix;

    type Payload<T: Float> = Matrix3<T>;

    fn identity<T: Float>() -> Matrix3<T> {
        Matrix3::identity()
    }

    fn into_payload<T: Float>(value: Matrix3<T>) -> Payload<T> {
        Payload::RotationMatrix(value)
    }

    fn from_payload<T: Float>(payload: &Payload<T>) -> Matrix3<T> {
        conversion::to_rotation_matrix(payload)
    }

    fn mirrored<T: Float>(value: &Matrix3<T>) -> Matrix3<T> {
        value.transpose()
    }

    fn inverted<T: Float>(value: &Matrix3<T>) -> Matrix3<T> {
        value.transpose()
    }

    fn unique<T: Float>(value: &Matrix3<T>) -> Matrix3<T> {
        *value
    }

    fn cast<T: Float + SubsetOf<V>, V: Float>(value: &Matrix3<T>) -> Matrix3<V> {
        value.cast()
    }
}

impl<T: Float, U: Usage> RotationMatrix<T, U> {
    /// Creates a rotation matrix from its elements given in row-major order.
    /// The matrix is assumed to be orthonormal with unit determinant.
    #[allow(clippy::many_single_char_names)]
    pub fn new(
        r00: T,
        r01: T,
        r02: T,
        r10: T,
        r11: T,
        r12: T,
        r20: T,
        r21: T,
        r22: T,
    ) -> Self {
        Self::from_matrix(&Matrix3::new(r00, r01, r02, r10, r11, r12, r20, r21, r22))
    }

    /// Creates a rotation from the given matrix, which is assumed to be
    /// orthonormal with unit determinant.
    pub fn from_matrix(matrix: &Matrix3<T>) -> Self {
        Self::from_implementation(*matrix)
    }

    /// Creates a rotation from the given matrix after checking that it is a
    /// proper rotation matrix.
    ///
    /// # Errors
    /// Returns an error if the matrix has non-finite elements, is not
    /// orthonormal or has a negative determinant.
    pub fn try_from_matrix(matrix: &Matrix3<T>) -> Result<Self> {
        validation::check_rotation_matrix(matrix)?;
        Ok(Self::from_matrix(matrix))
    }

    pub fn matrix(&self) -> Matrix3<T> {
        self.to_implementation()
    }

    /// Returns the element at the given row and column.
    ///
    /// # Panics
    /// If the row or column exceeds 2.
    pub fn element(&self, row: usize, col: usize) -> T {
        self.to_implementation()[(row, col)]
    }

    pub fn determinant(&self) -> T {
        self.to_stored_implementation().determinant()
    }

    /// Returns the closest proper rotation matrix, removing accumulated
    /// numerical drift.
    pub fn orthonormalized(&self) -> Self {
        log::debug!("Orthonormalizing rotation matrix");
        Self::from_stored_implementation(
            Rotation3::from_matrix(&self.to_stored_implementation()).into_inner(),
        )
    }
}
