//! Validation and observation hooks for line searches.
//!
//! The engine itself accepts whatever the objective returns. Callers that
//! need stricter behavior install callbacks here:
//!
//! - `validate_input` runs once before the first trial step;
//! - `validate_gradient` and `validate_value` run after every trial
//!   evaluation, in that order;
//! - `on_iteration` receives the bracket after every iteration that did not
//!   accept the step.
//!
//! Every hook defaults to a no-op. [`SearchHooks::finite`] installs the
//! validators that reject non-finite quantities and inconsistent arguments.

use crate::{
    core::{
        error::{LineSearchError, Result},
        objective::ObjectiveEvaluation,
        types::Scalar,
        vector::VectorOps,
    },
    optimization::bracket::BracketState,
};
use num_traits::Float;
use std::fmt::{self, Debug};
use std::sync::Arc;

/// Validator for `(starting_point, direction, initial_step, upper_bound)`.
pub type InputValidator<T, V> =
    Arc<dyn Fn(&ObjectiveEvaluation<T, V>, &V, T, T) -> Result<()> + Send + Sync>;

/// Validator applied to each trial evaluation.
pub type EvaluationValidator<T, V> =
    Arc<dyn Fn(&ObjectiveEvaluation<T, V>) -> Result<()> + Send + Sync>;

/// Observer receiving the bracket after each iteration.
pub type IterationObserver<T> = Arc<dyn Fn(&BracketState<T>) + Send + Sync>;

/// Optional callbacks invoked by the search loop.
pub struct SearchHooks<T, V> {
    validate_input: Option<InputValidator<T, V>>,
    validate_gradient: Option<EvaluationValidator<T, V>>,
    validate_value: Option<EvaluationValidator<T, V>>,
    on_iteration: Option<IterationObserver<T>>,
}

impl<T, V> Default for SearchHooks<T, V> {
    fn default() -> Self {
        Self {
            validate_input: None,
            validate_gradient: None,
            validate_value: None,
            on_iteration: None,
        }
    }
}

impl<T, V> Clone for SearchHooks<T, V> {
    fn clone(&self) -> Self {
        Self {
            validate_input: self.validate_input.clone(),
            validate_gradient: self.validate_gradient.clone(),
            validate_value: self.validate_value.clone(),
            on_iteration: self.on_iteration.clone(),
        }
    }
}

impl<T, V> Debug for SearchHooks<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchHooks")
            .field("validate_input", &self.validate_input.is_some())
            .field("validate_gradient", &self.validate_gradient.is_some())
            .field("validate_value", &self.validate_value.is_some())
            .field("on_iteration", &self.on_iteration.is_some())
            .finish()
    }
}

impl<T, V> SearchHooks<T, V>
where
    T: Scalar,
    V: VectorOps<T> + 'static,
{
    /// Hooks that do nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks rejecting non-finite values, non-finite gradients and
    /// inconsistent search arguments.
    pub fn finite() -> Self {
        Self::new()
            .with_input_validator(check_input_arguments::<T, V>)
            .with_gradient_validator(check_finite_gradient::<T, V>)
            .with_value_validator(check_finite_value::<T, V>)
    }

    /// Installs the input validator.
    pub fn with_input_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&ObjectiveEvaluation<T, V>, &V, T, T) -> Result<()> + Send + Sync + 'static,
    {
        self.validate_input = Some(Arc::new(validator));
        self
    }

    /// Installs the gradient validator.
    pub fn with_gradient_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&ObjectiveEvaluation<T, V>) -> Result<()> + Send + Sync + 'static,
    {
        self.validate_gradient = Some(Arc::new(validator));
        self
    }

    /// Installs the value validator.
    pub fn with_value_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&ObjectiveEvaluation<T, V>) -> Result<()> + Send + Sync + 'static,
    {
        self.validate_value = Some(Arc::new(validator));
        self
    }

    /// Installs the iteration observer.
    pub fn with_iteration_observer<F>(mut self, observer: F) -> Self
    where
        F: Fn(&BracketState<T>) + Send + Sync + 'static,
    {
        self.on_iteration = Some(Arc::new(observer));
        self
    }

    pub(crate) fn validate_input(
        &self,
        starting_point: &ObjectiveEvaluation<T, V>,
        direction: &V,
        initial_step: T,
        upper_bound: T,
    ) -> Result<()> {
        match &self.validate_input {
            Some(validator) => validator(starting_point, direction, initial_step, upper_bound),
            None => Ok(()),
        }
    }

    pub(crate) fn validate_gradient(&self, evaluation: &ObjectiveEvaluation<T, V>) -> Result<()> {
        match &self.validate_gradient {
            Some(validator) => validator(evaluation),
            None => Ok(()),
        }
    }

    pub(crate) fn validate_value(&self, evaluation: &ObjectiveEvaluation<T, V>) -> Result<()> {
        match &self.validate_value {
            Some(validator) => validator(evaluation),
            None => Ok(()),
        }
    }

    pub(crate) fn observe(&self, state: &BracketState<T>) {
        if let Some(observer) = &self.on_iteration {
            observer(state);
        }
    }
}

/// Rejects inconsistent dimensions, a non-positive initial step, a
/// non-positive upper bound and a non-finite starting evaluation.
pub fn check_input_arguments<T, V>(
    starting_point: &ObjectiveEvaluation<T, V>,
    direction: &V,
    initial_step: T,
    upper_bound: T,
) -> Result<()>
where
    T: Scalar,
    V: VectorOps<T>,
{
    let dim = starting_point.point().dimension();
    if direction.dimension() != dim {
        return Err(LineSearchError::dimension_mismatch(dim, direction.dimension()));
    }
    if starting_point.gradient().dimension() != dim {
        return Err(LineSearchError::dimension_mismatch(
            dim,
            starting_point.gradient().dimension(),
        ));
    }
    if !(initial_step > T::zero()) || !Float::is_finite(initial_step) {
        return Err(LineSearchError::invalid_parameter(format!(
            "initial step {} should be positive and finite",
            initial_step
        )));
    }
    if !(upper_bound > T::zero()) {
        return Err(LineSearchError::invalid_parameter(format!(
            "upper bound {} should be positive",
            upper_bound
        )));
    }
    if !Float::is_finite(starting_point.value()) {
        return Err(LineSearchError::validation(
            "Non-finite value at the starting point",
        ));
    }
    if !starting_point.gradient().is_finite() {
        return Err(LineSearchError::validation(
            "Non-finite gradient at the starting point",
        ));
    }
    Ok(())
}

/// Rejects evaluations whose gradient has a NaN or infinite coordinate.
pub fn check_finite_gradient<T, V>(evaluation: &ObjectiveEvaluation<T, V>) -> Result<()>
where
    T: Scalar,
    V: VectorOps<T>,
{
    if evaluation.gradient().is_finite() {
        Ok(())
    } else {
        Err(LineSearchError::validation(
            "Non-finite gradient returned by objective function",
        ))
    }
}

/// Rejects evaluations whose value is NaN or infinite.
pub fn check_finite_value<T, V>(evaluation: &ObjectiveEvaluation<T, V>) -> Result<()>
where
    T: Scalar,
    V: VectorOps<T>,
{
    if Float::is_finite(evaluation.value()) {
        Ok(())
    } else {
        Err(LineSearchError::validation(
            "Non-finite value returned by objective function",
        ))
    }
}
