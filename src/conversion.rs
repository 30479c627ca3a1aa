//! Conversion between rotation representations.
//!
//! Every destination representation has one row function here that matches
//! on the kind of the source payload. Pairs with a direct formula are
//! converted directly; everything else is routed through the rotation
//! quaternion, which every representation converts to and from. Euler angles
//! are always extracted from a rotation matrix, which is better conditioned
//! than the quaternion near gimbal lock.

pub mod euler;

use crate::{
    num::Float,
    representation::{AxisAngle, Payload},
};
use nalgebra::{Matrix3, Quaternion, Rotation3, UnitQuaternion, Vector3};

/// Converts the given payload into a rotation matrix.
pub fn to_rotation_matrix<T: Float>(payload: &Payload<T>) -> Matrix3<T> {
    match payload {
        Payload::RotationMatrix(matrix) => *matrix,
        Payload::RotationQuaternion(quaternion) => matrix_from_quaternion(quaternion),
        Payload::AngleAxis(angle_axis) => matrix_from_angle_axis(angle_axis),
        other => matrix_from_quaternion(&to_rotation_quaternion(other)),
    }
}

/// Converts the given payload into a rotation quaternion.
pub fn to_rotation_quaternion<T: Float>(payload: &Payload<T>) -> UnitQuaternion<T> {
    match payload {
        Payload::RotationMatrix(matrix) => quaternion_from_matrix(matrix),
        Payload::RotationQuaternion(quaternion) => *quaternion,
        Payload::AngleAxis(angle_axis) => quaternion_from_angle_axis(angle_axis),
        Payload::RotationVector(vector) => quaternion_from_rotation_vector(vector),
        Payload::EulerAnglesZyx(zyx) => euler::quaternion_from_zyx(zyx),
        Payload::EulerAnglesXyz(xyz) => euler::quaternion_from_xyz(xyz),
        Payload::EulerAnglesZyz(zyz) => euler::quaternion_from_zyz(zyz),
    }
}

/// Converts the given payload into an angle and axis.
pub fn to_angle_axis<T: Float>(payload: &Payload<T>) -> AxisAngle<T> {
    match payload {
        Payload::AngleAxis(angle_axis) => *angle_axis,
        Payload::RotationVector(vector) => angle_axis_from_rotation_vector(vector),
        other => angle_axis_from_quaternion(&to_rotation_quaternion(other)),
    }
}

/// Converts the given payload into a rotation vector.
pub fn to_rotation_vector<T: Float>(payload: &Payload<T>) -> Vector3<T> {
    match payload {
        Payload::RotationVector(vector) => *vector,
        Payload::AngleAxis(angle_axis) => rotation_vector_from_angle_axis(angle_axis),
        other => rotation_vector_from_angle_axis(&angle_axis_from_quaternion(
            &to_rotation_quaternion(other),
        )),
    }
}

/// Converts the given payload into `[yaw; pitch; roll]` Euler angles.
pub fn to_euler_zyx<T: Float>(payload: &Payload<T>) -> Vector3<T> {
    match payload {
        Payload::EulerAnglesZyx(zyx) => *zyx,
        other => euler::zyx_from_matrix(&to_rotation_matrix(other)),
    }
}

/// Converts the given payload into `[roll; pitch; yaw]` Euler angles.
pub fn to_euler_xyz<T: Float>(payload: &Payload<T>) -> Vector3<T> {
    match payload {
        Payload::EulerAnglesXyz(xyz) => *xyz,
        other => euler::xyz_from_matrix(&to_rotation_matrix(other)),
    }
}

/// Converts the given payload into `[precession; nutation; spin]` Euler
/// angles.
pub fn to_euler_zyz<T: Float>(payload: &Payload<T>) -> Vector3<T> {
    match payload {
        Payload::EulerAnglesZyz(zyz) => *zyz,
        other => euler::zyz_from_matrix(&to_rotation_matrix(other)),
    }
}

/// Returns the unit vector along the given vector, or the x-axis if the
/// vector is too short to have a well-defined direction.
pub fn normalized_axis<T: Float>(vector: &Vector3<T>) -> Vector3<T> {
    vector
        .try_normalize(T::DEGENERACY_THRESHOLD)
        .unwrap_or_else(|| {
            log::trace!("Replacing degenerate axis {vector:?} with the x-axis");
            Vector3::x()
        })
}

pub fn matrix_from_quaternion<T: Float>(quaternion: &UnitQuaternion<T>) -> Matrix3<T> {
    quaternion.to_rotation_matrix().into_inner()
}

pub fn quaternion_from_matrix<T: Float>(matrix: &Matrix3<T>) -> UnitQuaternion<T> {
    UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(*matrix))
}

/// Rodrigues' formula. The axis is assumed to be of unit length.
pub fn matrix_from_angle_axis<T: Float>(angle_axis: &AxisAngle<T>) -> Matrix3<T> {
    let axis = &angle_axis.axis;
    let (sin_angle, cos_angle) = angle_axis.angle.sin_cos();

    Matrix3::identity() * cos_angle
        + axis.cross_matrix() * sin_angle
        + axis * axis.transpose() * (T::ONE - cos_angle)
}

/// The axis is assumed to be of unit length.
pub fn quaternion_from_angle_axis<T: Float>(angle_axis: &AxisAngle<T>) -> UnitQuaternion<T> {
    let (sin_half_angle, cos_half_angle) = (angle_axis.angle * T::ONE_HALF).sin_cos();
    UnitQuaternion::new_unchecked(Quaternion::from_parts(
        cos_half_angle,
        angle_axis.axis * sin_half_angle,
    ))
}

/// Extracts the angle and axis of the shortest rotation described by the
/// given quaternion, with the angle in `[0, π]`. A quaternion whose vector
/// part is shorter than [`Float::DEGENERACY_THRESHOLD`] gives a zero angle
/// about the x-axis.
pub fn angle_axis_from_quaternion<T: Float>(quaternion: &UnitQuaternion<T>) -> AxisAngle<T> {
    let (w, imag) = if quaternion.w < T::ZERO {
        (-quaternion.w, -quaternion.imag())
    } else {
        (quaternion.w, quaternion.imag())
    };

    let imag_norm = imag.norm();

    if imag_norm < T::DEGENERACY_THRESHOLD {
        log::trace!("Quaternion {quaternion:?} describes no rotation, using the x-axis");
        return AxisAngle::identity();
    }

    AxisAngle {
        angle: T::TWO * imag_norm.atan2(w),
        axis: imag / imag_norm,
    }
}

pub fn rotation_vector_from_angle_axis<T: Float>(angle_axis: &AxisAngle<T>) -> Vector3<T> {
    angle_axis.axis * angle_axis.angle
}

/// A rotation vector shorter than [`Float::DEGENERACY_THRESHOLD`] gives a
/// zero angle about the x-axis.
pub fn angle_axis_from_rotation_vector<T: Float>(vector: &Vector3<T>) -> AxisAngle<T> {
    let angle = vector.norm();

    if angle < T::DEGENERACY_THRESHOLD {
        AxisAngle::identity()
    } else {
        AxisAngle {
            angle,
            axis: vector / angle,
        }
    }
}

/// The exponential map from rotation vectors to quaternions. Short vectors
/// use the first-order expansion instead of dividing by the angle.
pub fn quaternion_from_rotation_vector<T: Float>(vector: &Vector3<T>) -> UnitQuaternion<T> {
    let angle = vector.norm();

    if angle < T::DEGENERACY_THRESHOLD {
        UnitQuaternion::new_normalize(Quaternion::from_parts(T::ONE, vector * T::ONE_HALF))
    } else {
        let (sin_half_angle, cos_half_angle) = (angle * T::ONE_HALF).sin_cos();
        UnitQuaternion::new_unchecked(Quaternion::from_parts(
            cos_half_angle,
            vector * (sin_half_angle / angle),
        ))
    }
}
