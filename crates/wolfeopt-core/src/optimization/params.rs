//! Configuration of Wolfe line searches.
//!
//! # Wolfe Condition Constants
//!
//! - **c₁ (sufficient decrease)**: a trial step α is too long when
//!   φ(α) > φ(0) + c₁ α φ'(0). Typically 10⁻⁴.
//! - **c₂ (curvature)**: decides when a step is too short. Large values
//!   (0.9) suit quasi-Newton methods, small values (0.1) suit nonlinear
//!   conjugate gradient.
//!
//! Both must satisfy 0 < c₁ < c₂ < 1.
//!
//! # Termination Controls
//!
//! - **parameter_tolerance**: once the bracket is finite, the search stops
//!   with a lack-of-progress exit when the largest relative coordinate change
//!   the bracket still allows drops below this value.
//! - **max_iterations**: hard cap on objective evaluations per search.

use crate::core::{
    error::{LineSearchError, Result},
    types::{constants, Scalar},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a Wolfe line search.
///
/// ```rust
/// # use wolfeopt_core::optimization::params::WolfeParams;
/// let params = WolfeParams::<f64>::default()
///     .with_c2(0.5)
///     .with_max_iterations(50);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WolfeParams<T> {
    /// Sufficient decrease constant c₁ ∈ (0, c₂)
    pub c1: T,

    /// Curvature constant c₂ ∈ (c₁, 1)
    pub c2: T,

    /// Relative bracket width below which the search reports lack of progress
    pub parameter_tolerance: T,

    /// Maximum number of trial evaluations per search
    pub max_iterations: usize,
}

impl<T: Scalar> Default for WolfeParams<T> {
    fn default() -> Self {
        Self {
            c1: constants::default_c1(),
            c2: constants::default_c2(),
            parameter_tolerance: constants::parameter_tolerance(),
            max_iterations: 10,
        }
    }
}

impl<T: Scalar> WolfeParams<T> {
    /// Creates parameters from explicit values without validating them.
    pub fn new(c1: T, c2: T, parameter_tolerance: T, max_iterations: usize) -> Self {
        Self {
            c1,
            c2,
            parameter_tolerance,
            max_iterations,
        }
    }

    /// Parameters suited to nonlinear conjugate gradient (c₂ = 0.1).
    pub fn strong_wolfe() -> Self {
        Self {
            c2: <T as Scalar>::from_f64(0.1),
            ..Self::default()
        }
    }

    /// Parameters suited to quasi-Newton methods (c₂ = 0.9).
    pub fn weak_wolfe() -> Self {
        Self {
            c2: <T as Scalar>::from_f64(0.9),
            max_iterations: 1000,
            ..Self::default()
        }
    }

    /// Sets the sufficient decrease constant.
    pub fn with_c1(mut self, c1: T) -> Self {
        self.c1 = c1;
        self
    }

    /// Sets the curvature constant.
    pub fn with_c2(mut self, c2: T) -> Self {
        self.c2 = c2;
        self
    }

    /// Sets the lack-of-progress tolerance.
    pub fn with_parameter_tolerance(mut self, tol: T) -> Self {
        self.parameter_tolerance = tol;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks 0 < c₁ < c₂ < 1.
    ///
    /// The checks run in order and the first failure is reported. The
    /// tolerance and iteration budget are not validated.
    ///
    /// # Errors
    ///
    /// Returns `LineSearchError::InvalidParameter` if c₁ ≤ 0, c₂ ≤ c₁ or c₂ ≥ 1.
    pub fn validate(&self) -> Result<()> {
        if self.c1 <= T::zero() {
            return Err(LineSearchError::invalid_parameter(format!(
                "c1 {} should be greater than 0",
                self.c1
            )));
        }

        if self.c2 <= self.c1 {
            return Err(LineSearchError::invalid_parameter(format!(
                "c1 {} should be less than c2 {}",
                self.c1, self.c2
            )));
        }

        if self.c2 >= T::one() {
            return Err(LineSearchError::invalid_parameter(format!(
                "c2 {} should be less than 1",
                self.c2
            )));
        }

        Ok(())
    }
}
