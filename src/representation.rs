//! Parameterizations of rotations.

pub mod angle_axis;
pub mod euler_xyz;
pub mod euler_zyx;
pub mod euler_zyz;
pub mod matrix;
pub mod quaternion;
pub mod rotation_vector;

pub use angle_axis::{AngleAxis, AngleAxisRepr, AxisAngle};
pub use euler_xyz::{EulerAnglesRpy, EulerAnglesXyz, EulerXyzRepr};
pub use euler_zyx::{EulerAnglesYpr, EulerAnglesZyx, EulerZyxRepr};
pub use euler_zyz::{EulerAnglesZyz, EulerZyzRepr};
pub use matrix::{MatrixRepr, RotationMatrix};
pub use quaternion::{QuaternionRepr, RotationQuaternion};
pub use rotation_vector::{RotationVector, RotationVectorRepr};

use crate::num::Float;
use nalgebra::{Matrix3, UnitQuaternion, Vector3};
use simba::scalar::SubsetOf;
use std::fmt;

/// The different parameterizations a rotation can be stored in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RepresentationKind {
    RotationMatrix,
    RotationQuaternion,
    AngleAxis,
    RotationVector,
    EulerAnglesZyx,
    EulerAnglesXyz,
    EulerAnglesZyz,
}

/// A rotation payload of any representation, tagged with its kind. This is
/// the common currency of the conversion engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Payload<T: Float> {
    RotationMatrix(Matrix3<T>),
    RotationQuaternion(UnitQuaternion<T>),
    AngleAxis(AxisAngle<T>),
    RotationVector(Vector3<T>),
    /// Angles `[yaw; pitch; roll]` about Z, Y' and X''.
    EulerAnglesZyx(Vector3<T>),
    /// Angles `[roll; pitch; yaw]` about X, Y' and Z''.
    EulerAnglesXyz(Vector3<T>),
    /// Angles `[precession; nutation; spin]` about Z, Y' and Z''.
    EulerAnglesZyz(Vector3<T>),
}

/// A parameterization of rotations.
///
/// Implementors are zero-sized tags selecting the payload stored by a
/// [`Rotation`](crate::Rotation) along with the family-specific parts of
/// inversion, canonicalization and the usage mirror. Everything else goes
/// through the tagged [`Payload`].
pub trait Representation: Copy + fmt::Debug + Default + Send + Sync + 'static {
    /// The kind of this representation.
    const KIND: RepresentationKind;

    /// The stored numeric payload.
    type Payload<T: Float>: Copy + fmt::Debug + PartialEq + Send + Sync;

    /// The payload of the identity rotation.
    fn identity<T: Float>() -> Self::Payload<T>;

    /// Tags the given payload with this representation's kind.
    fn into_payload<T: Float>(value: Self::Payload<T>) -> Payload<T>;

    /// Converts a payload of any kind into this representation.
    fn from_payload<T: Float>(payload: &Payload<T>) -> Self::Payload<T>;

    /// The payload seen through the opposite usage.
    fn mirrored<T: Float>(value: &Self::Payload<T>) -> Self::Payload<T>;

    /// The payload of the inverse rotation.
    fn inverted<T: Float>(value: &Self::Payload<T>) -> Self::Payload<T>;

    /// The canonical member of the class of payloads describing the same
    /// rotation as the given one.
    fn unique<T: Float>(value: &Self::Payload<T>) -> Self::Payload<T>;

    /// Casts the payload to another scalar type.
    fn cast<T: Float + SubsetOf<V>, V: Float>(value: &Self::Payload<T>) -> Self::Payload<V>;
}

impl<T: Float> Payload<T> {
    /// Returns the kind of representation this payload belongs to.
    pub fn kind(&self) -> RepresentationKind {
        match self {
            Self::RotationMatrix(_) => RepresentationKind::RotationMatrix,
            Self::RotationQuaternion(_) => RepresentationKind::RotationQuaternion,
            Self::AngleAxis(_) => RepresentationKind::AngleAxis,
            Self::RotationVector(_) => RepresentationKind::RotationVector,
            Self::EulerAnglesZyx(_) => RepresentationKind::EulerAnglesZyx,
            Self::EulerAnglesXyz(_) => RepresentationKind::EulerAnglesXyz,
            Self::EulerAnglesZyz(_) => RepresentationKind::EulerAnglesZyz,
        }
    }
}

impl fmt::Display for RepresentationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RotationMatrix => "rotation matrix",
            Self::RotationQuaternion => "rotation quaternion",
            Self::AngleAxis => "angle-axis",
            Self::RotationVector => "rotation vector",
            Self::EulerAnglesZyx => "Euler angles ZYX",
            Self::EulerAnglesXyz => "Euler angles XYZ",
            Self::EulerAnglesZyz => "Euler angles ZYZ",
        };
        write!(f, "{name}")
    }
}

/// Inverts an Euler angle payload by transposing its rotation matrix.
pub(crate) fn inverted_through_matrix<R: Representation, T: Float>(
    value: &R::Payload<T>,
) -> R::Payload<T> {
    let matrix = crate::conversion::to_rotation_matrix(&R::into_payload(*value));
    R::from_payload(&Payload::RotationMatrix(matrix.transpose()))
}
