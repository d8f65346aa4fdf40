//! Curvature strategies distinguishing strong and weak Wolfe searches.
//!
//! Both variants share the bracketing algorithm and the sufficient decrease
//! test φ(α) ≤ φ(0) + c₁ α φ'(0). They differ only in the curvature test
//! deciding whether an accepted-decrease step is still too short, and in
//! the exit condition they report on success:
//!
//! - **Weak Wolfe**: φ'(α) ≥ c₂ φ'(0)
//! - **Strong Wolfe**: |φ'(α)| ≤ -c₂ φ'(0)

use crate::core::types::Scalar;
use num_traits::Float;
use std::fmt::{self, Debug};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Reason a line search stopped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExitCondition {
    /// No stopping condition recorded
    #[default]
    None,
    /// Sufficient decrease and strong curvature conditions hold
    StrongWolfeCriteria,
    /// Sufficient decrease and weak curvature conditions hold
    WeakWolfeCriteria,
    /// The bracket became too narrow to change the point meaningfully
    LackOfProgress,
}

impl ExitCondition {
    /// Returns true if the step satisfies a Wolfe criterion.
    pub fn is_wolfe(&self) -> bool {
        matches!(self, Self::StrongWolfeCriteria | Self::WeakWolfeCriteria)
    }
}

impl fmt::Display for ExitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::StrongWolfeCriteria => "strong Wolfe criteria",
            Self::WeakWolfeCriteria => "weak Wolfe criteria",
            Self::LackOfProgress => "lack of progress",
        };
        f.write_str(name)
    }
}

/// Decision points that differ between Wolfe variants.
pub trait WolfeStrategy<T: Scalar>: Debug + Clone + Send + Sync {
    /// Exit condition reported when both Wolfe conditions hold.
    fn exit_condition(&self) -> ExitCondition;

    /// Returns true if the curvature condition is violated, i.e. the step is
    /// too short and the lower bound must move up.
    ///
    /// * `step_dd` - directional derivative φ'(α) at the trial step
    /// * `initial_dd` - directional derivative φ'(0) at the starting point
    /// * `c2` - curvature constant
    fn curvature_violated(&self, step_dd: T, initial_dd: T, c2: T) -> bool;

    /// Human-readable name for logging.
    fn name(&self) -> &'static str;
}

/// Strong Wolfe curvature test: |φ'(α)| ≤ -c₂ φ'(0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StrongWolfe;

impl<T: Scalar> WolfeStrategy<T> for StrongWolfe {
    fn exit_condition(&self) -> ExitCondition {
        ExitCondition::StrongWolfeCriteria
    }

    fn curvature_violated(&self, step_dd: T, initial_dd: T, c2: T) -> bool {
        Float::abs(step_dd) > -c2 * initial_dd
    }

    fn name(&self) -> &'static str {
        "StrongWolfe"
    }
}

/// Weak Wolfe curvature test: φ'(α) ≥ c₂ φ'(0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeakWolfe;

impl<T: Scalar> WolfeStrategy<T> for WeakWolfe {
    fn exit_condition(&self) -> ExitCondition {
        ExitCondition::WeakWolfeCriteria
    }

    fn curvature_violated(&self, step_dd: T, initial_dd: T, c2: T) -> bool {
        step_dd < c2 * initial_dd
    }

    fn name(&self) -> &'static str {
        "WeakWolfe"
    }
}
