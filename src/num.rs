//! Numbers and numerics.

#![allow(clippy::excessive_precision)]

use nalgebra as na;
use num_traits as nt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float: Copy + nt::FromPrimitive + na::RealField + na::Scalar {
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const TWO: Self;
    const ONE_HALF: Self;
    const PI: Self;
    const TWO_PI: Self;
    const FRAC_PI_2: Self;

    /// Norms below this value are treated as zero when an axis has to be
    /// extracted from a vector.
    const DEGENERACY_THRESHOLD: Self;

    /// When the cosine of the middle Euler angle falls below this value, the
    /// first and third angles are no longer separable.
    const GIMBAL_LOCK_THRESHOLD: Self;
}

macro_rules! impl_float {
    ($f:tt, $gimbal_lock_threshold:expr) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const TWO: Self = 2.0;
            const ONE_HALF: Self = 0.5;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = 2.0 * std::$f::consts::PI;
            const FRAC_PI_2: Self = std::$f::consts::FRAC_PI_2;
            const DEGENERACY_THRESHOLD: Self = $f::EPSILON;
            const GIMBAL_LOCK_THRESHOLD: Self = $gimbal_lock_threshold;
        }
    };
}

// The gimbal lock thresholds are the square roots of the machine epsilons.
impl_float!(f32, 3.452669830012e-4);
impl_float!(f64, 1.4901161193847656e-8);

/// Computes `x` modulo `y` with the result in `[0, y)` for positive `y` (and
/// in `(y, 0]` for negative `y`), guarding against results landing on the
/// excluded boundary due to floating point cut-off. Returns `x` if `y` is
/// zero.
pub fn floating_point_modulo<F: Float>(x: F, y: F) -> F {
    if y == F::ZERO {
        return x;
    }

    let m = x - y * (x / y).floor();

    if y > F::ZERO {
        if m >= y {
            return F::ZERO;
        }
        if m < F::ZERO {
            return if y + m == y { F::ZERO } else { y + m };
        }
    } else {
        if m <= y {
            return F::ZERO;
        }
        if m > F::ZERO {
            return if y + m == y { F::ZERO } else { y + m };
        }
    }

    m
}

/// Wraps the given angle into `[-π, π)`. Angles already in the range are
/// returned unchanged.
pub fn wrap_angle<F: Float>(angle: F) -> F {
    if angle >= -F::PI && angle < F::PI {
        angle
    } else {
        floating_point_modulo(angle + F::PI, F::TWO_PI) - F::PI
    }
}

/// Wraps the given angle into `(-π, π]`. Angles already in the range are
/// returned unchanged.
pub fn wrap_angle_lower_open<F: Float>(angle: F) -> F {
    if angle > -F::PI && angle <= F::PI {
        angle
    } else {
        -wrap_angle(-angle)
    }
}

/// Shifts the given angle by π towards zero, keeping it inside `[-π, π)`.
pub(crate) fn shift_by_half_turn<F: Float>(angle: F) -> F {
    if angle >= F::ZERO {
        wrap_angle(angle - F::PI)
    } else {
        wrap_angle(angle + F::PI)
    }
}
