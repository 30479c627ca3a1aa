//! Rotations in three dimensions.
//!
//! A [`Rotation`] stores one of several parameterizations (rotation matrix,
//! unit quaternion, angle-axis, rotation vector or Euler angles in the ZYX,
//! XYZ and ZYZ orders) and is tagged at the type level with its usage,
//! [`Active`] or [`Passive`]. Rotations convert losslessly between
//! representations of the same usage, compose with `*` and rotate vectors,
//! points and batches of column vectors.

#[macro_use]
mod macros;

pub mod composition;
pub mod conversion;
pub mod num;
pub mod representation;
pub mod rotation;
pub mod usage;
pub mod validation;

pub use num::Float;
pub use representation::{
    AngleAxis, AngleAxisRepr, AxisAngle, EulerAnglesRpy, EulerAnglesXyz, EulerAnglesYpr,
    EulerAnglesZyx, EulerAnglesZyz, EulerXyzRepr, EulerZyxRepr, EulerZyzRepr, MatrixRepr,
    Payload, QuaternionRepr, Representation, RepresentationKind, RotationMatrix,
    RotationQuaternion, RotationVector, RotationVectorRepr,
};
pub use rotation::Rotation;
pub use usage::{Active, Passive, RotationUsage, Usage};
