//! Checks for raw rotation input supplied by callers.

use crate::num::Float;
use anyhow::{Result, bail};
use nalgebra::{Matrix3, Quaternion};

/// Deviations from unit norm or orthonormality up to the square root of the
/// machine epsilon are accepted.
fn tolerance<T: Float>() -> T {
    T::default_epsilon().sqrt()
}

/// Checks that the given quaternion has finite components and unit norm.
///
/// # Errors
/// Returns an error describing the first violated condition.
pub fn check_unit_quaternion<T: Float>(quaternion: &Quaternion<T>) -> Result<()> {
    if !quaternion.coords.iter().all(|component| component.is_finite()) {
        bail!("Quaternion {quaternion} has non-finite components");
    }

    let norm = quaternion.norm();
    if (norm - T::ONE).abs() > tolerance() {
        bail!("Quaternion {quaternion} has norm {norm}, expected unit norm");
    }

    Ok(())
}

/// Checks that the given matrix has finite elements, is orthonormal and has
/// a positive determinant.
///
/// # Errors
/// Returns an error describing the first violated condition.
pub fn check_rotation_matrix<T: Float>(matrix: &Matrix3<T>) -> Result<()> {
    if !matrix.iter().all(|element| element.is_finite()) {
        bail!("Rotation matrix has non-finite elements: {matrix}");
    }

    let orthogonality_error = (matrix.transpose() * matrix - Matrix3::identity()).amax();
    if orthogonality_error > tolerance() {
        bail!(
            "Rotation matrix is not orthonormal (max deviation {orthogonality_error}): {matrix}"
        );
    }

    let determinant = matrix.determinant();
    if determinant < T::ZERO {
        bail!("Rotation matrix has negative determinant {determinant}: {matrix}");
    }

    Ok(())
}
