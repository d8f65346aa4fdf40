//! Wolfe line search by bracketing and bisection.
//!
//! Given a starting point x with value f(x) and gradient ∇f(x), and a search
//! direction d, the search looks for a step α > 0 along
//! φ(α) = f(x + α d) that satisfies
//!
//! 1. **Sufficient decrease**: φ(α) ≤ φ(0) + c₁ α φ'(0)
//! 2. **Curvature**: the weak test φ'(α) ≥ c₂ φ'(0), or the strong test
//!    |φ'(α)| ≤ -c₂ φ'(0), depending on the [`WolfeStrategy`]
//!
//! with 0 < c₁ < c₂ < 1.
//!
//! # Algorithm
//!
//! The search keeps a bracket [l, u] of candidate steps, initially [0, u₀]
//! with u₀ = ∞ unless the caller bounds it. At each trial step α:
//!
//! - if sufficient decrease fails, α is too long: u ← α, α ← (l + u) / 2;
//! - else if curvature fails, α is too short: l ← α, and α doubles while
//!   u = ∞, otherwise α ← (l + u) / 2;
//! - else α is accepted.
//!
//! Once u is finite, the search also stops when the largest change the
//! bracket still allows in any coordinate, relative to max(|xⱼ|, 1), falls
//! below the parameter tolerance. That outcome is a successful return with
//! [`ExitCondition::LackOfProgress`], not an error; the caller decides what
//! to do with a stalled search. Running out of iterations is an error.
//!
//! Reference: J. V. Burke, *Line search methods*, weak Wolfe bisection
//! (Math 408 lecture notes, University of Washington).
//!
//! # Example
//!
//! ```rust
//! use wolfeopt_core::prelude::*;
//!
//! // f(x) = x², starting at x = 10 and searching along -1
//! let objective = GradientObjective::new(|x: &DVector<f64>| (x[0] * x[0], x * 2.0));
//! let start = objective.evaluate(DVector::from_vec(vec![10.0]))?;
//! let direction = DVector::from_vec(vec![-1.0]);
//!
//! let search = WeakWolfeLineSearch::new(1e-4, 0.9, 1e-10, 10)?;
//! let result = search.find_conforming_step(&objective, &start, &direction, 1.0)?;
//!
//! assert_eq!(result.exit_condition, ExitCondition::WeakWolfeCriteria);
//! assert!(result.value() < 100.0);
//! # Ok::<(), wolfeopt_core::error::LineSearchError>(())
//! ```

use crate::{
    core::{
        error::{LineSearchError, Result},
        objective::{ObjectiveEvaluation, ObjectiveFunction},
        types::{DVector, Scalar},
        vector::VectorOps,
    },
    optimization::{
        bracket::{Bracket, BracketState},
        hooks::SearchHooks,
        params::WolfeParams,
        strategy::{ExitCondition, StrongWolfe, WeakWolfe, WolfeStrategy},
    },
};
use log::{debug, trace, warn};
use num_traits::Float;
use std::fmt::Debug;

/// Outcome of a line search that terminated without error.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSearchResult<T, V> {
    /// Evaluation at the last trial step
    pub evaluation: ObjectiveEvaluation<T, V>,

    /// Zero-based index of the iteration that stopped the search
    pub iterations: usize,

    /// Final step length
    ///
    /// On a Wolfe exit this is the step of `evaluation`. On lack of
    /// progress it is the bisected step that would have been tried next.
    pub step: T,

    /// Why the search stopped
    pub exit_condition: ExitCondition,
}

impl<T: Scalar, V: VectorOps<T>> LineSearchResult<T, V> {
    /// Objective value at the final evaluation.
    pub fn value(&self) -> T {
        self.evaluation.value()
    }

    /// Point of the final evaluation.
    pub fn point(&self) -> &V {
        self.evaluation.point()
    }

    /// Gradient at the final evaluation.
    pub fn gradient(&self) -> &V {
        self.evaluation.gradient()
    }

    /// Returns true if the search stopped for lack of progress.
    pub fn is_stalled(&self) -> bool {
        self.exit_condition == ExitCondition::LackOfProgress
    }
}

/// Common interface for line searches used by optimizers.
pub trait LineSearch<T: Scalar, V: VectorOps<T>>: Debug {
    /// Searches along `direction` from `starting_point`.
    ///
    /// # Arguments
    ///
    /// * `objective` - Objective being minimized
    /// * `starting_point` - Evaluation of the objective at the search origin
    /// * `direction` - Search direction, same dimension as the point
    /// * `initial_step` - First trial step
    /// * `upper_bound` - Largest admissible step (`T::infinity()` for none)
    fn search<F>(
        &self,
        objective: &F,
        starting_point: &ObjectiveEvaluation<T, V>,
        direction: &V,
        initial_step: T,
        upper_bound: T,
    ) -> Result<LineSearchResult<T, V>>
    where
        F: ObjectiveFunction<T, Vector = V> + ?Sized;

    /// Returns a human-readable name identifying the line search.
    fn name(&self) -> &str;
}

/// Bracketing line search satisfying the Wolfe conditions.
///
/// The strategy `S` selects the curvature test; see [`StrongWolfeLineSearch`]
/// and [`WeakWolfeLineSearch`]. The engine holds only its configuration, so
/// one instance can serve any number of searches, concurrently if its hooks
/// allow.
#[derive(Debug, Clone)]
pub struct WolfeLineSearch<T, S, V = DVector<T>> {
    params: WolfeParams<T>,
    strategy: S,
    hooks: SearchHooks<T, V>,
}

/// Line search accepting steps that satisfy the strong Wolfe conditions.
pub type StrongWolfeLineSearch<T, V = DVector<T>> = WolfeLineSearch<T, StrongWolfe, V>;

/// Line search accepting steps that satisfy the weak Wolfe conditions.
pub type WeakWolfeLineSearch<T, V = DVector<T>> = WolfeLineSearch<T, WeakWolfe, V>;

impl<T, S, V> WolfeLineSearch<T, S, V>
where
    T: Scalar,
    S: WolfeStrategy<T> + Default,
    V: VectorOps<T> + 'static,
{
    /// Creates a line search from its four constants.
    ///
    /// # Errors
    ///
    /// Returns `LineSearchError::InvalidParameter` if c₁ ≤ 0, c₂ ≤ c₁ or
    /// c₂ ≥ 1, checked in that order. `parameter_tolerance` and
    /// `max_iterations` are not validated.
    pub fn new(c1: T, c2: T, parameter_tolerance: T, max_iterations: usize) -> Result<Self> {
        Self::with_params(WolfeParams::new(c1, c2, parameter_tolerance, max_iterations))
    }

    /// Creates a line search from a parameter set.
    pub fn with_params(params: WolfeParams<T>) -> Result<Self> {
        Self::with_strategy(S::default(), params)
    }
}

impl<T, S, V> WolfeLineSearch<T, S, V>
where
    T: Scalar,
    S: WolfeStrategy<T>,
    V: VectorOps<T> + 'static,
{
    /// Creates a line search with an explicit strategy value.
    pub fn with_strategy(strategy: S, params: WolfeParams<T>) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            strategy,
            hooks: SearchHooks::default(),
        })
    }

    /// Replaces the validation and observation hooks.
    pub fn with_hooks(mut self, hooks: SearchHooks<T, V>) -> Self {
        self.hooks = hooks;
        self
    }

    /// Parameters of this search.
    pub fn params(&self) -> &WolfeParams<T> {
        &self.params
    }

    /// Sufficient decrease constant c₁.
    pub fn c1(&self) -> T {
        self.params.c1
    }

    /// Curvature constant c₂.
    pub fn c2(&self) -> T {
        self.params.c2
    }

    /// Lack-of-progress tolerance.
    pub fn parameter_tolerance(&self) -> T {
        self.params.parameter_tolerance
    }

    /// Iteration budget.
    pub fn max_iterations(&self) -> usize {
        self.params.max_iterations
    }

    /// Curvature strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Installed hooks.
    pub fn hooks(&self) -> &SearchHooks<T, V> {
        &self.hooks
    }

    /// Finds a step along `direction` satisfying the Wolfe conditions, with
    /// no upper bound on the step.
    ///
    /// See [`find_conforming_step_bounded`](Self::find_conforming_step_bounded).
    pub fn find_conforming_step<F>(
        &self,
        objective: &F,
        starting_point: &ObjectiveEvaluation<T, V>,
        direction: &V,
        initial_step: T,
    ) -> Result<LineSearchResult<T, V>>
    where
        F: ObjectiveFunction<T, Vector = V> + ?Sized,
    {
        self.find_conforming_step_bounded(
            objective,
            starting_point,
            direction,
            initial_step,
            <T as Float>::infinity(),
        )
    }

    /// Finds a step in `(0, upper_bound]` along `direction` satisfying the
    /// Wolfe conditions.
    ///
    /// `starting_point` must hold the objective value and gradient at the
    /// search origin; it is never modified. Each iteration evaluates the
    /// objective once.
    ///
    /// # Errors
    ///
    /// - `LineSearchError::MaxIterationsReached` when the iteration budget is
    ///   exhausted; `unbounded` is set if no finite upper bound was ever known.
    /// - Any error returned by the objective or by an installed hook.
    pub fn find_conforming_step_bounded<F>(
        &self,
        objective: &F,
        starting_point: &ObjectiveEvaluation<T, V>,
        direction: &V,
        initial_step: T,
        upper_bound: T,
    ) -> Result<LineSearchResult<T, V>>
    where
        F: ObjectiveFunction<T, Vector = V> + ?Sized,
    {
        self.hooks
            .validate_input(starting_point, direction, initial_step, upper_bound)?;

        let WolfeParams {
            c1,
            c2,
            parameter_tolerance,
            max_iterations,
        } = self.params;

        let mut bracket = Bracket::new(upper_bound);
        let mut step = initial_step;

        let initial_value = starting_point.value();
        let initial_dd = starting_point.directional_derivative(direction);

        for iteration in 0..max_iterations {
            let trial_point = starting_point.point().scaled_add(step, direction);
            let evaluation = objective.evaluate(trial_point)?;
            self.hooks.validate_gradient(&evaluation)?;
            self.hooks.validate_value(&evaluation)?;

            let step_dd = evaluation.directional_derivative(direction);

            if evaluation.value() > initial_value + c1 * step * initial_dd {
                step = bracket.contract_upper(step);
            } else if self.strategy.curvature_violated(step_dd, initial_dd, c2) {
                step = bracket.raise_lower(step);
            } else {
                debug!(
                    "{} line search accepted step {} after {} iterations (value {})",
                    self.strategy.name(),
                    step,
                    iteration,
                    evaluation.value()
                );
                return Ok(LineSearchResult {
                    evaluation,
                    iterations: iteration,
                    step,
                    exit_condition: self.strategy.exit_condition(),
                });
            }

            trace!(
                "{} iteration {}: bracket [{}, {}], next step {}",
                self.strategy.name(),
                iteration,
                bracket.lower(),
                bracket.upper(),
                step
            );
            self.hooks.observe(&BracketState {
                iteration,
                lower: bracket.lower(),
                upper: bracket.upper(),
                step,
            });

            if bracket.is_bounded()
                && bracket.max_relative_change(evaluation.point(), direction) < parameter_tolerance
            {
                debug!(
                    "{} line search stalled at iteration {}: bracket [{}, {}]",
                    self.strategy.name(),
                    iteration,
                    bracket.lower(),
                    bracket.upper()
                );
                return Ok(LineSearchResult {
                    evaluation,
                    iterations: iteration,
                    step,
                    exit_condition: ExitCondition::LackOfProgress,
                });
            }
        }

        let unbounded = !bracket.is_bounded();
        warn!(
            "{} line search exhausted {} iterations (unbounded: {})",
            self.strategy.name(),
            max_iterations,
            unbounded
        );
        Err(LineSearchError::max_iterations(max_iterations, unbounded))
    }
}

impl<T, S, V> LineSearch<T, V> for WolfeLineSearch<T, S, V>
where
    T: Scalar,
    S: WolfeStrategy<T>,
    V: VectorOps<T> + 'static,
{
    fn search<F>(
        &self,
        objective: &F,
        starting_point: &ObjectiveEvaluation<T, V>,
        direction: &V,
        initial_step: T,
        upper_bound: T,
    ) -> Result<LineSearchResult<T, V>>
    where
        F: ObjectiveFunction<T, Vector = V> + ?Sized,
    {
        self.find_conforming_step_bounded(
            objective,
            starting_point,
            direction,
            initial_step,
            upper_bound,
        )
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::objective::{CountingObjective, GradientObjective};
    use approx::assert_relative_eq;

    /// f(x) = Σ xᵢ²
    #[derive(Debug)]
    struct SumOfSquares;

    impl ObjectiveFunction<f64> for SumOfSquares {
        type Vector = DVector<f64>;

        fn value_and_gradient(&self, point: &DVector<f64>) -> Result<(f64, DVector<f64>)> {
            Ok((point.norm_squared(), point * 2.0))
        }
    }

    fn start_at(x: f64) -> ObjectiveEvaluation<f64, DVector<f64>> {
        SumOfSquares.evaluate(DVector::from_vec(vec![x])).unwrap()
    }

    fn minus_one() -> DVector<f64> {
        DVector::from_vec(vec![-1.0])
    }

    #[test]
    fn test_construction_rejects_invalid_constants() {
        let err = WeakWolfeLineSearch::<f64>::new(0.0, 0.9, 1e-10, 10).unwrap_err();
        assert_eq!(err.to_string(), "Invalid parameter: c1 0 should be greater than 0");

        let err = StrongWolfeLineSearch::<f64>::new(0.5, 0.4, 1e-10, 10).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: c1 0.5 should be less than c2 0.4"
        );

        let err = WeakWolfeLineSearch::<f64>::new(1e-4, 1.0, 1e-10, 10).unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_accessors() {
        let search = StrongWolfeLineSearch::<f64>::new(1e-3, 0.5, 1e-8, 42).unwrap();
        assert_eq!(search.c1(), 1e-3);
        assert_eq!(search.c2(), 0.5);
        assert_eq!(search.parameter_tolerance(), 1e-8);
        assert_eq!(search.max_iterations(), 42);
        assert_eq!(LineSearch::name(&search), "StrongWolfe");
        assert_eq!(search.params(), &WolfeParams::new(1e-3, 0.5, 1e-8, 42));
    }

    #[test]
    fn test_quadratic_accepts_first_step() {
        let search = WeakWolfeLineSearch::<f64>::new(1e-4, 0.9, 1e-10, 10).unwrap();
        let start = start_at(10.0);

        let result = search
            .find_conforming_step(&SumOfSquares, &start, &minus_one(), 1.0)
            .unwrap();

        assert_eq!(result.exit_condition, ExitCondition::WeakWolfeCriteria);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.step, 1.0);
        assert_relative_eq!(result.value(), 81.0);
        assert_relative_eq!(result.point()[0], 9.0);
    }

    #[test]
    fn test_overlong_step_is_bisected() {
        let search = StrongWolfeLineSearch::<f64>::new(1e-4, 0.9, 1e-10, 10).unwrap();
        let start = start_at(10.0);

        // step 30 lands at x = -20 with f = 400, then bisects to 15 (x = -5)
        let result = search
            .find_conforming_step(&SumOfSquares, &start, &minus_one(), 30.0)
            .unwrap();

        assert_eq!(result.exit_condition, ExitCondition::StrongWolfeCriteria);
        assert_eq!(result.iterations, 1);
        assert_relative_eq!(result.step, 15.0);
        assert_relative_eq!(result.value(), 25.0);
    }

    #[test]
    fn test_short_step_is_expanded() {
        let search = WeakWolfeLineSearch::<f64>::new(1e-4, 0.9, 1e-10, 10).unwrap();
        let start = start_at(10.0);

        // steps 0.25 and 0.5 are too short, 1.0 passes
        let result = search
            .find_conforming_step(&SumOfSquares, &start, &minus_one(), 0.25)
            .unwrap();

        assert_eq!(result.iterations, 2);
        assert_relative_eq!(result.step, 1.0);
    }

    #[test]
    fn test_upper_bound_limits_expansion() {
        let search = WeakWolfeLineSearch::<f64>::new(1e-4, 0.9, 1e-10, 10).unwrap();
        let start = start_at(10.0);

        // with upper bound 1.5 the short steps are bisected instead of doubled:
        // 0.25 -> 0.875 -> 1.1875
        let result = search
            .find_conforming_step_bounded(&SumOfSquares, &start, &minus_one(), 0.25, 1.5)
            .unwrap();

        assert_eq!(result.iterations, 2);
        assert_relative_eq!(result.step, 1.1875);
        assert_eq!(result.exit_condition, ExitCondition::WeakWolfeCriteria);
    }

    #[test]
    fn test_unbounded_direction_fails() {
        let objective = GradientObjective::new(|x: &DVector<f64>| (-x[0], DVector::from_vec(vec![-1.0])));
        let start = objective.evaluate(DVector::from_vec(vec![0.0])).unwrap();
        let direction = DVector::from_vec(vec![1.0]);

        let search = WeakWolfeLineSearch::<f64>::new(1e-4, 0.9, 1e-10, 5).unwrap();
        let err = search
            .find_conforming_step(&objective, &start, &direction, 1.0)
            .unwrap_err();

        assert_eq!(err, LineSearchError::max_iterations(5, true));
        assert!(err.to_string().contains("unbounded in search direction"));
    }

    #[test]
    fn test_zero_iteration_budget_fails_immediately() {
        let counting = CountingObjective::new(SumOfSquares);
        let search = WeakWolfeLineSearch::<f64>::new(1e-4, 0.9, 1e-10, 0).unwrap();
        let start = start_at(10.0);

        let err = search
            .find_conforming_step(&counting, &start, &minus_one(), 1.0)
            .unwrap_err();

        assert!(err.is_convergence_failure());
        assert_eq!(counting.evaluations(), 0);
    }

    #[test]
    fn test_objective_errors_propagate() {
        #[derive(Debug)]
        struct Failing;

        impl ObjectiveFunction<f64> for Failing {
            type Vector = DVector<f64>;

            fn value_and_gradient(&self, _point: &DVector<f64>) -> Result<(f64, DVector<f64>)> {
                Err(LineSearchError::evaluation("outside domain"))
            }
        }

        let search = WeakWolfeLineSearch::<f64>::new(1e-4, 0.9, 1e-10, 10).unwrap();
        let err = search
            .find_conforming_step(&Failing, &start_at(1.0), &minus_one(), 1.0)
            .unwrap_err();
        assert_eq!(err, LineSearchError::evaluation("outside domain"));
    }

    #[test]
    fn test_works_through_trait_object() {
        let search = WeakWolfeLineSearch::<f64>::new(1e-4, 0.9, 1e-10, 10).unwrap();
        let objective: &dyn ObjectiveFunction<f64, Vector = DVector<f64>> = &SumOfSquares;
        let start = objective.evaluate(DVector::from_vec(vec![10.0])).unwrap();

        let result = search
            .search(objective, &start, &minus_one(), 1.0, f64::INFINITY)
            .unwrap();
        assert!(result.exit_condition.is_wolfe());
    }
}
