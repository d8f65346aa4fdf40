//! Steepest descent on the Rosenbrock function driven by Wolfe line searches.
//!
//! This example shows how to:
//! - Implement an objective function
//! - Run strong and weak Wolfe searches along the negative gradient
//! - Count objective evaluations
//! - Handle lack-of-progress exits

use wolfeopt_core::prelude::*;

/// f(a, b) = (1 - a)² + 100 (b - a²)²
#[derive(Debug)]
struct Rosenbrock;

impl ObjectiveFunction<f64> for Rosenbrock {
    type Vector = DVector<f64>;

    fn value_and_gradient(&self, point: &DVector<f64>) -> Result<(f64, DVector<f64>)> {
        let (a, b) = (point[0], point[1]);
        let value = (1.0 - a).powi(2) + 100.0 * (b - a * a).powi(2);
        let gradient = DVector::from_vec(vec![
            -2.0 * (1.0 - a) - 400.0 * a * (b - a * a),
            200.0 * (b - a * a),
        ]);
        Ok((value, gradient))
    }
}

fn descend<S: WolfeStrategy<f64>>(search: &WolfeLineSearch<f64, S>) -> Result<()> {
    let objective = CountingObjective::new(Rosenbrock);
    let mut current = objective.evaluate(DVector::from_vec(vec![-1.2, 1.0]))?;

    for iteration in 0..200 {
        if current.gradient().norm() < 1e-6 {
            break;
        }
        let direction = -current.gradient().clone();
        let result = match search.find_conforming_step(&objective, &current, &direction, 1.0) {
            Ok(result) => result,
            Err(err) if err.is_convergence_failure() => {
                println!("  stopped: {}", err);
                break;
            }
            Err(err) => return Err(err),
        };

        if iteration % 25 == 0 {
            println!(
                "  iter {:3}: f = {:.6e}, step = {:.3e} ({})",
                iteration,
                result.value(),
                result.step,
                result.exit_condition
            );
        }
        if result.is_stalled() {
            println!("  stopped: {}", result.exit_condition);
            break;
        }
        current = result.evaluation;
    }

    println!(
        "  final point ({:.4}, {:.4}), f = {:.6e}, {} evaluations",
        current.point()[0],
        current.point()[1],
        current.value(),
        objective.evaluations()
    );
    Ok(())
}

fn main() -> Result<()> {
    println!("Weak Wolfe (c2 = 0.9):");
    descend(&WeakWolfeLineSearch::with_params(WolfeParams::weak_wolfe())?)?;

    println!("Strong Wolfe (c2 = 0.1):");
    descend(&StrongWolfeLineSearch::with_params(
        WolfeParams::strong_wolfe().with_max_iterations(100),
    )?)?;

    Ok(())
}
