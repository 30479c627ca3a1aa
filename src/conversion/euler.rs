//! Closed-form conversions between Euler angles and quaternions or rotation
//! matrices.
//!
//! Angle vectors are ordered the way the elementary rotations are composed:
//! `[z; y; x]` for ZYX (`R = Rz Ry Rx`), `[x; y; z]` for XYZ and `[z; y; z]`
//! for ZYZ.

use crate::num::Float;
use nalgebra::{Matrix3, Quaternion, UnitQuaternion, Vector3};

fn half_angle_sin_cos<T: Float>(angles: &Vector3<T>) -> [(T, T); 3] {
    [
        (angles[0] * T::ONE_HALF).sin_cos(),
        (angles[1] * T::ONE_HALF).sin_cos(),
        (angles[2] * T::ONE_HALF).sin_cos(),
    ]
}

/// The quaternion of `Rz(yaw) Ry(pitch) Rx(roll)`.
pub fn quaternion_from_zyx<T: Float>(zyx: &Vector3<T>) -> UnitQuaternion<T> {
    let [(sy, cy), (sp, cp), (sr, cr)] = half_angle_sin_cos(zyx);

    UnitQuaternion::new_unchecked(Quaternion::new(
        cr * cp * cy + sr * sp * sy,
        sr * cp * cy - cr * sp * sy,
        cr * sp * cy + sr * cp * sy,
        cr * cp * sy - sr * sp * cy,
    ))
}

/// The quaternion of `Rx(roll) Ry(pitch) Rz(yaw)`.
pub fn quaternion_from_xyz<T: Float>(xyz: &Vector3<T>) -> UnitQuaternion<T> {
    let [(sa, ca), (sb, cb), (sc, cc)] = half_angle_sin_cos(xyz);

    UnitQuaternion::new_unchecked(Quaternion::new(
        ca * cb * cc - sa * sb * sc,
        sa * cb * cc + ca * sb * sc,
        ca * sb * cc - sa * cb * sc,
        ca * cb * sc + sa * sb * cc,
    ))
}

/// The quaternion of `Rz(precession) Ry(nutation) Rz(spin)`.
pub fn quaternion_from_zyz<T: Float>(zyz: &Vector3<T>) -> UnitQuaternion<T> {
    let (sb, cb) = (zyz[1] * T::ONE_HALF).sin_cos();
    let (s_sum, c_sum) = ((zyz[0] + zyz[2]) * T::ONE_HALF).sin_cos();
    let (s_diff, c_diff) = ((zyz[2] - zyz[0]) * T::ONE_HALF).sin_cos();

    UnitQuaternion::new_unchecked(Quaternion::new(
        cb * c_sum,
        sb * s_diff,
        sb * c_diff,
        cb * s_sum,
    ))
}

/// Extracts `[yaw; pitch; roll]` with pitch in `[-π/2, π/2]`. At gimbal
/// lock the roll is set to zero and the yaw takes up the full rotation about
/// the vertical axis.
pub fn zyx_from_matrix<T: Float>(m: &Matrix3<T>) -> Vector3<T> {
    let cos_pitch = (m[(0, 0)] * m[(0, 0)] + m[(1, 0)] * m[(1, 0)]).sqrt();
    let pitch = (-m[(2, 0)]).atan2(cos_pitch);

    if cos_pitch < T::GIMBAL_LOCK_THRESHOLD {
        log::trace!("Extracting ZYX Euler angles at gimbal lock");
        let yaw = (-m[(0, 1)]).atan2(m[(1, 1)]);
        return Vector3::new(yaw, pitch, T::ZERO);
    }

    Vector3::new(
        m[(1, 0)].atan2(m[(0, 0)]),
        pitch,
        m[(2, 1)].atan2(m[(2, 2)]),
    )
}

/// Extracts `[roll; pitch; yaw]` with pitch in `[-π/2, π/2]`. At gimbal lock
/// the yaw is set to zero.
pub fn xyz_from_matrix<T: Float>(m: &Matrix3<T>) -> Vector3<T> {
    let cos_pitch = (m[(0, 0)] * m[(0, 0)] + m[(0, 1)] * m[(0, 1)]).sqrt();
    let pitch = m[(0, 2)].atan2(cos_pitch);

    if cos_pitch < T::GIMBAL_LOCK_THRESHOLD {
        log::trace!("Extracting XYZ Euler angles at gimbal lock");
        let roll = m[(2, 1)].atan2(m[(1, 1)]);
        return Vector3::new(roll, pitch, T::ZERO);
    }

    Vector3::new(
        (-m[(1, 2)]).atan2(m[(2, 2)]),
        pitch,
        (-m[(0, 1)]).atan2(m[(0, 0)]),
    )
}

/// Extracts `[precession; nutation; spin]` with nutation in `[0, π]`. When
/// the nutation is close to 0 or π the spin is set to zero.
pub fn zyz_from_matrix<T: Float>(m: &Matrix3<T>) -> Vector3<T> {
    let sin_nutation = (m[(0, 2)] * m[(0, 2)] + m[(1, 2)] * m[(1, 2)]).sqrt();
    let nutation = sin_nutation.atan2(m[(2, 2)]);

    if sin_nutation < T::GIMBAL_LOCK_THRESHOLD {
        log::trace!("Extracting ZYZ Euler angles at gimbal lock");
        let precession = (-m[(0, 1)]).atan2(m[(1, 1)]);
        return Vector3::new(precession, nutation, T::ZERO);
    }

    Vector3::new(
        m[(1, 2)].atan2(m[(0, 2)]),
        nutation,
        m[(2, 1)].atan2(-m[(2, 0)]),
    )
}
