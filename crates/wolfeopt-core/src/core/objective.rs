//! Objective function interface for line searches.
//!
//! A line search only needs to evaluate the objective value and its
//! gradient at trial points. [`ObjectiveFunction`] is the contract an
//! optimizer implements for its problem, and [`ObjectiveEvaluation`] is the
//! immutable record of one evaluation (point, value, gradient).
//!
//! # Design
//!
//! Evaluations are values. The search never re-evaluates an object in
//! place; it asks the objective for a fresh evaluation at every trial point
//! and keeps only the latest one. The starting evaluation supplied by the
//! caller is borrowed and never modified.

use crate::{
    core::{
        error::{LineSearchError, Result},
        types::Scalar,
        vector::VectorOps,
    },
};
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for objective functions evaluated by line searches.
pub trait ObjectiveFunction<T: Scalar>: Debug {
    /// Vector type of points and gradients.
    type Vector: VectorOps<T>;

    /// Evaluates the objective value and its gradient at a point.
    ///
    /// # Errors
    ///
    /// Implementations return [`LineSearchError::Evaluation`] when the
    /// objective is undefined at `point`.
    fn value_and_gradient(&self, point: &Self::Vector) -> Result<(T, Self::Vector)>;

    /// Evaluates the objective at `point` and packages the result.
    fn evaluate(&self, point: Self::Vector) -> Result<ObjectiveEvaluation<T, Self::Vector>> {
        let (value, gradient) = self.value_and_gradient(&point)?;
        Ok(ObjectiveEvaluation::new(point, value, gradient))
    }
}

impl<T: Scalar, F: ObjectiveFunction<T> + ?Sized> ObjectiveFunction<T> for &F {
    type Vector = F::Vector;

    fn value_and_gradient(&self, point: &Self::Vector) -> Result<(T, Self::Vector)> {
        (**self).value_and_gradient(point)
    }
}

/// Objective value and gradient at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveEvaluation<T, V> {
    point: V,
    value: T,
    gradient: V,
}

impl<T: Scalar, V: VectorOps<T>> ObjectiveEvaluation<T, V> {
    /// Creates an evaluation from already computed quantities.
    pub fn new(point: V, value: T, gradient: V) -> Self {
        Self {
            point,
            value,
            gradient,
        }
    }

    /// The point at which the objective was evaluated.
    pub fn point(&self) -> &V {
        &self.point
    }

    /// The objective value at [`point`](Self::point).
    pub fn value(&self) -> T {
        self.value
    }

    /// The gradient at [`point`](Self::point).
    pub fn gradient(&self) -> &V {
        &self.gradient
    }

    /// Directional derivative `⟨gradient, direction⟩`.
    pub fn directional_derivative(&self, direction: &V) -> T {
        direction.dot(&self.gradient)
    }

    /// Decomposes the evaluation into `(point, value, gradient)`.
    pub fn into_parts(self) -> (V, T, V) {
        (self.point, self.value, self.gradient)
    }
}

/// Objective defined by a closure returning value and gradient.
pub struct GradientObjective<T, V, F> {
    function: F,
    _phantom: PhantomData<fn() -> (T, V)>,
}

impl<T, V, F> GradientObjective<T, V, F>
where
    T: Scalar,
    V: VectorOps<T>,
    F: Fn(&V) -> (T, V),
{
    /// Wraps `function`, which maps a point to `(value, gradient)`.
    pub fn new(function: F) -> Self {
        Self {
            function,
            _phantom: PhantomData,
        }
    }
}

impl<T, V, F> Debug for GradientObjective<T, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientObjective").finish_non_exhaustive()
    }
}

impl<T, V, F> ObjectiveFunction<T> for GradientObjective<T, V, F>
where
    T: Scalar,
    V: VectorOps<T>,
    F: Fn(&V) -> (T, V),
{
    type Vector = V;

    fn value_and_gradient(&self, point: &V) -> Result<(T, V)> {
        let (value, gradient) = (self.function)(point);
        if gradient.dimension() != point.dimension() {
            return Err(LineSearchError::dimension_mismatch(
                point.dimension(),
                gradient.dimension(),
            ));
        }
        Ok((value, gradient))
    }
}

/// Wrapper that counts evaluations of an inner objective.
///
/// The counter is atomic so the wrapper can be shared through `&self`.
#[derive(Debug)]
pub struct CountingObjective<F> {
    /// The wrapped objective
    pub inner: F,
    evaluations: AtomicUsize,
}

impl<F> CountingObjective<F> {
    /// Creates a new counting wrapper around an objective.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            evaluations: AtomicUsize::new(0),
        }
    }

    /// Number of evaluations performed since creation or the last reset.
    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::Relaxed)
    }

    /// Resets the counter to zero.
    pub fn reset(&self) {
        self.evaluations.store(0, Ordering::Relaxed);
    }
}

impl<T, F> ObjectiveFunction<T> for CountingObjective<F>
where
    T: Scalar,
    F: ObjectiveFunction<T>,
{
    type Vector = F::Vector;

    fn value_and_gradient(&self, point: &Self::Vector) -> Result<(T, Self::Vector)> {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        self.inner.value_and_gradient(point)
    }
}
