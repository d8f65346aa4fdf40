//! Core traits, types and the Wolfe line search engine.
//!
//! This crate finds step lengths along descent directions for gradient-based
//! optimizers (quasi-Newton, nonlinear conjugate gradient). A step is
//! accepted once it satisfies the Wolfe conditions:
//!
//! - **Sufficient decrease**: f(x + α d) ≤ f(x) + c₁ α ⟨∇f(x), d⟩
//! - **Curvature**: ⟨∇f(x + α d), d⟩ ≥ c₂ ⟨∇f(x), d⟩ (weak), or
//!   |⟨∇f(x + α d), d⟩| ≤ -c₂ ⟨∇f(x), d⟩ (strong)
//!
//! # Modules
//!
//! - [`error`]: Error types for configuration, convergence and validation failures
//! - [`objective`]: Objective function interface and evaluation records
//! - [`vector`]: Vector arithmetic required by the search
//! - [`types`]: Scalar trait, vector aliases and constants
//! - [`line_search`]: The bracketing Wolfe line search engine
//! - [`params`]: Wolfe constants and iteration controls
//! - [`strategy`]: Strong and weak curvature strategies, exit conditions
//! - [`hooks`]: Validation and observation callbacks
//! - [`bracket`]: Step-length bracket bookkeeping

pub mod core;
pub mod optimization;

pub use crate::core::{error, objective, types, vector};
pub use crate::optimization::{bracket, hooks, line_search, params, strategy};

// Re-export commonly used items at the crate root
pub use crate::core::error::{LineSearchError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use wolfeopt_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::error::{LineSearchError, Result};
    pub use crate::core::objective::{
        CountingObjective, GradientObjective, ObjectiveEvaluation, ObjectiveFunction,
    };
    pub use crate::core::types::{constants, DVector, SVector, Scalar};
    pub use crate::core::vector::VectorOps;
    pub use crate::optimization::bracket::{Bracket, BracketState};
    pub use crate::optimization::hooks::SearchHooks;
    pub use crate::optimization::line_search::{
        LineSearch, LineSearchResult, StrongWolfeLineSearch, WeakWolfeLineSearch,
        WolfeLineSearch,
    };
    pub use crate::optimization::params::WolfeParams;
    pub use crate::optimization::strategy::{ExitCondition, StrongWolfe, WeakWolfe, WolfeStrategy};
}
