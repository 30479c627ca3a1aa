//! Angle-axis rotations.

use crate::{
    conversion,
    num::{self, Float},
    representation::{Payload, Representation, RepresentationKind},
    rotation::Rotation,
    usage::Usage,
};
use nalgebra::Vector3;
use simba::scalar::SubsetOf;

/// A rotation angle in radians about a unit axis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisAngle<T: Float> {
    pub angle: T,
    pub axis: Vector3<T>,
}

/// Representation tag for rotations stored as an angle about a unit axis.
#[derive(Clone, Copy, Debug, Default)]
pub struct AngleAxisRepr;

/// A rotation stored as an angle about a unit axis.
pub type AngleAxis<T, U> = Rotation<AngleAxisRepr, T, U>;

impl<T: Float> AxisAngle<T> {
    /// Zero angle about the x-axis.
    pub fn identity() -> Self {
        Self {
            angle: T::ZERO,
            axis: Vector3::x(),
        }
    }
}

impl Representation for AngleAxisRepr {
    const KIND: RepresentationKind = RepresentationKind::AngleAxis;

    type Payload<T: Float> = AxisAngle<T>;

    fn identity<T: Float>() -> AxisAngle<T> {
        AxisAngle::identity()
    }

    fn into_payload<T: Float>(value: AxisAngle<T>) -> Payload<T> {
        Payload::AngleAxis(value)
    }

    fn from_payload<T: Float>(payload: &Payload<T>) -> AxisAngle<T> {
        conversion::to_angle_axis(payload)
    }

    fn mirrored<T: Float>(value: &AxisAngle<T>) -> AxisAngle<T> {
        AxisAngle {
            angle: -value.angle,
            axis: value.axis,
        }
    }

    fn inverted<T: Float>(value: &AxisAngle<T>) -> AxisAngle<T> {
        Self::mirrored(value)
    }

    /// Wraps the angle into `(-π, π]` and flips a negative angle along with
    /// the axis, so the angle ends up in `[0, π]`.
    fn unique<T: Float>(value: &AxisAngle<T>) -> AxisAngle<T> {
        let angle = num::wrap_angle_lower_open(value.angle);
        if angle < T::ZERO {
            AxisAngle {
                angle: -angle,
                axis: -value.axis,
            }
        } else {
            AxisAngle {
                angle,
                axis: value.axis,
            }
        }
    }

    fn cast<T: Float + SubsetOf<V>, V: Float>(value: &AxisAngle<T>) -> AxisAngle<V> {
        AxisAngle {
            angle: <T as SubsetOf<V>>::to_superset(&value.angle),
            axis: value.axis.cast(),
        }
    }
}

impl<T: Float, U: Usage> AngleAxis<T, U> {
    /// Creates a rotation by `angle` about the axis `[x; y; z]`. The axis is
    /// normalized, and replaced by the x-axis if it has zero length.
    pub fn new(angle: T, x: T, y: T, z: T) -> Self {
        Self::from_angle_and_axis(angle, &Vector3::new(x, y, z))
    }

    /// Creates a rotation by `angle` about the given axis. The axis is
    /// normalized, and replaced by the x-axis if it has zero length.
    pub fn from_angle_and_axis(angle: T, axis: &Vector3<T>) -> Self {
        Self::from_implementation(AxisAngle {
            angle,
            axis: conversion::normalized_axis(axis),
        })
    }

    pub fn angle(&self) -> T {
        self.to_implementation().angle
    }

    pub fn axis(&self) -> Vector3<T> {
        self.to_implementation().axis
    }

    pub fn set_angle(&mut self, angle: T) {
        let mut logical = self.to_implementation();
        logical.angle = angle;
        self.set_implementation(logical);
    }

    /// Sets the axis after normalizing it.
    pub fn set_axis(&mut self, axis: &Vector3<T>) {
        let mut logical = self.to_implementation();
        logical.axis = conversion::normalized_axis(axis);
        self.set_implementation(logical);
    }
}
