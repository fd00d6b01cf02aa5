use num_traits::{Float, FloatConst, FromPrimitive, Signed};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Default tolerance for the pole test of periodic functions
pub const DEFAULT_SINGULARITY_TOLERANCE: f64 = 1e-10;

/// The scalar a derivative vector is computed in.
///
/// `Float` already brings the arithmetic operators, ordering and `Copy`;
/// the recurrences additionally accumulate in place and take `PI` from
/// `FloatConst`. Both `f64` (the default) and `f32` are exercised; `f32`
/// loses accuracy quickly at high orders.
pub trait MathScalar:
    Float
    + FloatConst
    + FromPrimitive
    + Signed
    + Debug
    + Display
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
{
    /// Convert a loop index to the scalar type
    #[inline]
    fn from_index(n: usize) -> Self {
        Self::from_usize(n).unwrap_or_else(Self::nan)
    }

    /// The constant two
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Whether the value has no fractional part
    #[inline]
    fn is_integral(self) -> bool {
        self.is_finite() && self.fract() == Self::zero()
    }
}

impl<T> MathScalar for T where
    T: Float
        + FloatConst
        + FromPrimitive
        + Signed
        + Debug
        + Display
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + 'static
{
}

/// Check whether `value` lies within `tolerance` of an integer multiple of `period`.
///
/// Uses the floating remainder, so the test is periodic in `value`.
#[inline]
pub(crate) fn near_multiple<T: MathScalar>(value: T, period: T, tolerance: T) -> bool {
    let r = (value % period).abs();
    r < tolerance || period - r < tolerance
}
