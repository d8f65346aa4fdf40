//! Vector arithmetic consumed by the line search.
//!
//! The search only needs four operations on points and directions: a dot
//! product, a scaled addition `x + α d`, coordinate access and the
//! dimension. [`VectorOps`] captures exactly that, so any numeric backend
//! can drive the engine. Implementations are provided for `nalgebra` column
//! vectors (static or dynamic) and for plain `Vec<T>`.

use crate::core::types::Scalar;
use nalgebra::{allocator::Allocator, DefaultAllocator, Dim, OVector};
use std::fmt::Debug;

/// Minimal vector arithmetic required by the line search.
pub trait VectorOps<T: Scalar>: Clone + Debug {
    /// Number of coordinates.
    fn dimension(&self) -> usize;

    /// Coordinate `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.dimension()`.
    fn coordinate(&self, index: usize) -> T;

    /// Euclidean inner product `⟨self, other⟩`.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors have different dimensions.
    fn dot(&self, other: &Self) -> T;

    /// Returns `self + alpha * direction` without modifying either operand.
    ///
    /// # Panics
    ///
    /// Panics if the two vectors have different dimensions.
    fn scaled_add(&self, alpha: T, direction: &Self) -> Self;

    /// Returns true if every coordinate is finite.
    fn is_finite(&self) -> bool {
        (0..self.dimension()).all(|i| num_traits::Float::is_finite(self.coordinate(i)))
    }
}

impl<T, D> VectorOps<T> for OVector<T, D>
where
    T: Scalar,
    D: Dim,
    DefaultAllocator: Allocator<D>,
{
    fn dimension(&self) -> usize {
        self.len()
    }

    fn coordinate(&self, index: usize) -> T {
        self[index]
    }

    fn dot(&self, other: &Self) -> T {
        nalgebra::Matrix::dot(self, other)
    }

    fn scaled_add(&self, alpha: T, direction: &Self) -> Self {
        let mut result = self.clone();
        result.axpy(alpha, direction, T::one());
        result
    }
}

impl<T: Scalar> VectorOps<T> for Vec<T> {
    fn dimension(&self) -> usize {
        self.len()
    }

    fn coordinate(&self, index: usize) -> T {
        self[index]
    }

    fn dot(&self, other: &Self) -> T {
        assert_eq!(self.len(), other.len(), "Vector dimensions must match");
        self.iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    fn scaled_add(&self, alpha: T, direction: &Self) -> Self {
        assert_eq!(self.len(), direction.len(), "Vector dimensions must match");
        self.iter()
            .zip(direction.iter())
            .map(|(&x, &d)| x + alpha * d)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DVector, SVector};
    use approx::assert_relative_eq;

    #[test]
    fn test_dvector_ops() {
        let x = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let d = DVector::from_vec(vec![-1.0, 0.5, 2.0]);

        assert_eq!(VectorOps::dimension(&x), 3);
        assert_eq!(x.coordinate(1), 2.0);
        assert_relative_eq!(VectorOps::dot(&x, &d), 6.0);

        let y = x.scaled_add(2.0, &d);
        assert_relative_eq!(y, DVector::from_vec(vec![-1.0, 3.0, 7.0]));
        // operands untouched
        assert_eq!(x[0], 1.0);
        assert_eq!(d[0], -1.0);
    }

    #[test]
    fn test_static_vector_ops() {
        let x = SVector::<f64, 2>::new(3.0, 4.0);
        let d = SVector::<f64, 2>::new(1.0, -1.0);

        assert_relative_eq!(VectorOps::dot(&x, &x), 25.0);
        assert_relative_eq!(x.scaled_add(-0.5, &d), SVector::<f64, 2>::new(2.5, 4.5));
    }

    #[test]
    fn test_vec_ops_match_nalgebra() {
        let x = vec![0.5_f64, -1.5, 2.0];
        let d = vec![1.0_f64, 1.0, -0.25];
        let nx = DVector::from_vec(x.clone());
        let nd = DVector::from_vec(d.clone());

        assert_relative_eq!(x.dot(&d), VectorOps::dot(&nx, &nd));
        let y = x.scaled_add(0.3, &d);
        let ny = nx.scaled_add(0.3, &nd);
        for i in 0..3 {
            assert_relative_eq!(y[i], ny[i]);
        }
    }

    #[test]
    #[should_panic(expected = "Vector dimensions must match")]
    fn test_vec_dot_rejects_mismatched_lengths() {
        let x = vec![1.0_f64, 2.0];
        let d = vec![-1.0_f64];
        let _ = VectorOps::dot(&x, &d);
    }

    #[test]
    #[should_panic(expected = "Vector dimensions must match")]
    fn test_vec_scaled_add_rejects_mismatched_lengths() {
        let x = vec![10.0_f64, 10.0];
        let d = vec![-1.0_f64];
        let _ = x.scaled_add(1.0, &d);
    }

    #[test]
    #[should_panic]
    fn test_dvector_scaled_add_rejects_mismatched_lengths() {
        let x = DVector::from_vec(vec![10.0_f64, 10.0]);
        let d = DVector::from_vec(vec![-1.0_f64]);
        let _ = x.scaled_add(1.0, &d);
    }

    #[test]
    fn test_is_finite() {
        assert!(vec![1.0_f64, 2.0].is_finite());
        assert!(!vec![1.0_f64, f64::NAN].is_finite());
        assert!(!VectorOps::is_finite(&DVector::from_vec(vec![f64::INFINITY])));
    }
}
