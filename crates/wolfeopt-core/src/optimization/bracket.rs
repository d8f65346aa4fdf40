//! Step-length bracket maintained during a line search.
//!
//! The bracket `[lower, upper]` encloses the steps that may still be
//! acceptable. It starts as `[0, upper_bound]` (often `[0, ∞)`) and only
//! ever shrinks: a step that is too long becomes the new upper bound, a step
//! that is too short becomes the new lower bound.

use crate::core::{
    types::{constants, Scalar},
    vector::VectorOps,
};
use num_traits::Float;

/// Interval of candidate step lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket<T> {
    lower: T,
    upper: T,
}

impl<T: Scalar> Bracket<T> {
    /// Creates the initial bracket `[0, upper]`.
    pub fn new(upper: T) -> Self {
        Self {
            lower: T::zero(),
            upper,
        }
    }

    /// Creates the unbounded bracket `[0, ∞)`.
    pub fn unbounded() -> Self {
        Self::new(<T as Float>::infinity())
    }

    /// Lower bound.
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Upper bound, possibly infinite.
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns true once the upper bound is finite.
    pub fn is_bounded(&self) -> bool {
        !Float::is_infinite(self.upper)
    }

    /// `upper - lower` (infinite while unbounded).
    pub fn width(&self) -> T {
        self.upper - self.lower
    }

    /// Midpoint of the bracket.
    pub fn midpoint(&self) -> T {
        <T as Scalar>::from_f64(0.5) * (self.lower + self.upper)
    }

    /// Records `step` as too long and returns the next trial step.
    pub fn contract_upper(&mut self, step: T) -> T {
        self.upper = step;
        self.midpoint()
    }

    /// Records `step` as too short and returns the next trial step.
    ///
    /// While the bracket is unbounded the step is doubled, otherwise the
    /// bracket is bisected.
    pub fn raise_lower(&mut self, step: T) -> T {
        self.lower = step;
        if self.is_bounded() {
            self.midpoint()
        } else {
            constants::expansion_factor::<T>() * self.lower
        }
    }

    /// Largest relative coordinate change the bracket still allows.
    ///
    /// For every coordinate j of `point` this is
    /// `|direction[j] * width| / max(|point[j]|, 1)`; the maximum over j is
    /// returned. Only meaningful once the bracket is bounded.
    pub fn max_relative_change<V: VectorOps<T>>(&self, point: &V, direction: &V) -> T {
        let width = self.width();
        (0..point.dimension()).fold(T::zero(), |acc, j| {
            let change = Float::abs(direction.coordinate(j) * width)
                / Float::max(Float::abs(point.coordinate(j)), T::one());
            Float::max(acc, change)
        })
    }
}

/// Snapshot of the search state after one iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketState<T> {
    /// Zero-based iteration index
    pub iteration: usize,
    /// Lower bound after the update
    pub lower: T,
    /// Upper bound after the update
    pub upper: T,
    /// Next trial step
    pub step: T,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unbounded_expansion_doubles() {
        let mut bracket = Bracket::<f64>::unbounded();
        assert!(!bracket.is_bounded());

        let next = bracket.raise_lower(1.5);
        assert_eq!(next, 3.0);
        assert_eq!(bracket.lower(), 1.5);
        assert!(bracket.upper().is_infinite());
    }

    #[test]
    fn test_bisection_after_contraction() {
        let mut bracket = Bracket::<f64>::unbounded();
        let next = bracket.contract_upper(4.0);
        assert_eq!(next, 2.0);
        assert!(bracket.is_bounded());

        let next = bracket.raise_lower(2.0);
        assert_eq!(next, 3.0);
        assert_relative_eq!(bracket.width(), 2.0);
    }

    #[test]
    fn test_caller_supplied_upper_bound() {
        let mut bracket = Bracket::new(1.0_f64);
        assert!(bracket.is_bounded());
        // with a finite bound a too-short step bisects instead of doubling
        assert_eq!(bracket.raise_lower(0.5), 0.75);
    }

    #[test]
    fn test_max_relative_change_uses_mixed_scale() {
        let mut bracket = Bracket::<f64>::unbounded();
        bracket.contract_upper(0.5);

        // |x| < 1 divides by 1, |x| > 1 divides by |x|
        let point = vec![0.25, 10.0];
        let direction = vec![2.0, 4.0];
        let change = bracket.max_relative_change(&point, &direction);
        assert_relative_eq!(change, 1.0);

        let point = vec![0.25, 10.0];
        let direction = vec![0.0, 4.0];
        assert_relative_eq!(bracket.max_relative_change(&point, &direction), 0.2);
    }
}
