//! Active and passive rotation usage.

use crate::{num::Float, representation::Representation};
use std::fmt;

/// How a rotation acts on the vectors it is applied to.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationUsage {
    /// The rotation rotates vectors within a fixed reference frame.
    Active,
    /// The rotation rotates the reference frame, which is the inverse of the
    /// active rotation with the same nominal parameters.
    Passive,
}

/// Type-level usage tag of a rotation. Rotations with different usage tags
/// are distinct types and can not be composed or converted into each other.
pub trait Usage: Copy + fmt::Debug + Default + Send + Sync + 'static {
    /// The usage this tag stands for.
    const KIND: RotationUsage;

    /// The tag of the opposite usage.
    type Other: Usage<Other = Self>;
}

/// Tag for [`RotationUsage::Active`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Active;

/// Tag for [`RotationUsage::Passive`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Passive;

impl Usage for Active {
    const KIND: RotationUsage = RotationUsage::Active;
    type Other = Passive;
}

impl Usage for Passive {
    const KIND: RotationUsage = RotationUsage::Passive;
    type Other = Active;
}

impl fmt::Display for RotationUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Passive => write!(f, "passive"),
        }
    }
}

/// Translates between the stored payload of a rotation and the logical
/// payload its accessors present. Active payloads pass through; passive
/// payloads are mirrored (negated angles, transposed matrix, conjugated
/// quaternion). The mirror is an involution, so the same function serves
/// both directions.
#[inline]
pub(crate) fn usage_transformed<R, T, U>(payload: R::Payload<T>) -> R::Payload<T>
where
    R: Representation,
    T: Float,
    U: Usage,
{
    match U::KIND {
        RotationUsage::Active => payload,
        RotationUsage::Passive => R::mirrored(&payload),
    }
}
