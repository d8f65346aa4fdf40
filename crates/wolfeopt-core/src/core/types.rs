//! Type definitions and aliases for line search computations.
//!
//! This module provides the scalar trait shared by every numeric routine in
//! the crate, vector aliases over `nalgebra`, and numerical constants.

use nalgebra::{Const, Dyn, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types used in line searches (f32 or f64).
///
/// This trait combines all the numeric traits required by the search
/// engine and the vector arithmetic it consumes.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Default relative bracket width below which a search reports lack of progress.
    const DEFAULT_PARAMETER_TOLERANCE: Self;

    /// Convert from f64 (for constants).
    ///
    /// # Panics
    ///
    /// Panics if the conversion fails.
    fn from_f64(v: f64) -> Self {
        <Self as FromPrimitive>::from_f64(v).expect("Failed to convert from f64")
    }
}

impl Scalar for f32 {
    const DEFAULT_PARAMETER_TOLERANCE: Self = 1e-6;
}

impl Scalar for f64 {
    const DEFAULT_PARAMETER_TOLERANCE: Self = 1e-10;
}

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

/// Type alias for a statically-sized vector.
pub type SVector<T, const N: usize> = OVector<T, Const<N>>;

/// Numerical constants for line searches.
pub mod constants {
    use super::Scalar;

    /// Get the default lack-of-progress tolerance.
    pub fn parameter_tolerance<T: Scalar>() -> T {
        T::DEFAULT_PARAMETER_TOLERANCE
    }

    /// Default sufficient decrease constant c₁.
    pub fn default_c1<T: Scalar>() -> T {
        <T as Scalar>::from_f64(1e-4)
    }

    /// Default curvature constant c₂.
    pub fn default_c2<T: Scalar>() -> T {
        <T as Scalar>::from_f64(0.9)
    }

    /// Factor applied to the step while the bracket is still unbounded.
    pub fn expansion_factor<T: Scalar>() -> T {
        <T as Scalar>::from_f64(2.0)
    }
}
