//! # WolfeOpt
//!
//! Line searches satisfying the Wolfe conditions, for quasi-Newton and
//! nonlinear conjugate gradient optimizers.
//!
//! This crate re-exports [`wolfeopt_core`] and the `nalgebra` version it is
//! built against.
//!
//! ## Quick Start
//!
//! ```rust
//! use wolfeopt::prelude::*;
//!
//! // f(x) = ||x||², searched from (3, 4) along the negative gradient
//! let objective = GradientObjective::new(|x: &DVector<f64>| (x.norm_squared(), x * 2.0));
//! let start = objective.evaluate(DVector::from_vec(vec![3.0, 4.0]))?;
//! let direction = -start.gradient().clone();
//!
//! let search = StrongWolfeLineSearch::with_params(WolfeParams::strong_wolfe())?;
//! let result = search.find_conforming_step(&objective, &start, &direction, 1.0)?;
//!
//! assert!(result.exit_condition.is_wolfe());
//! assert!(result.value() < start.value());
//! # Ok::<(), wolfeopt::LineSearchError>(())
//! ```

pub use wolfeopt_core::*;

pub use nalgebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use wolfeopt_core::prelude::*;
}
