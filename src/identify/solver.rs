//! Linear program backends
//!
//! The identification pipeline only needs "minimize this objective subject to
//! these rows" from a solver, expressed by [`LinearSolver`]. The default
//! backend is [`MicroLpSolver`], a pure Rust simplex with branch-and-bound
//! for integer columns.

use log::debug;
use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};

use super::constraints::{ConstraintSystem, Relation};
use crate::error::SolveError;

/// A backend able to minimize a linear objective over a [`ConstraintSystem`]
///
/// `objective` holds one coefficient per column. On success the returned
/// vector holds one value per column.
pub trait LinearSolver {
    fn solve(&self, system: &ConstraintSystem, objective: &[f64]) -> Result<Vec<f64>, SolveError>;
}

/// [`LinearSolver`] backed by `microlp`
///
/// Every column is an integer variable bounded by `[0, max_weight]`, so an
/// optimal solution is integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MicroLpSolver {
    /// Upper bound of every column
    pub max_weight: i32,
}

impl MicroLpSolver {
    pub fn new(max_weight: i32) -> Self {
        MicroLpSolver { max_weight }
    }
}

impl Default for MicroLpSolver {
    fn default() -> Self {
        MicroLpSolver {
            max_weight: i32::MAX,
        }
    }
}

impl LinearSolver for MicroLpSolver {
    fn solve(&self, system: &ConstraintSystem, objective: &[f64]) -> Result<Vec<f64>, SolveError> {
        if objective.len() != system.num_columns() {
            return Err(SolveError::Backend(format!(
                "objective has {} coefficients for {} columns",
                objective.len(),
                system.num_columns()
            )));
        }
        if self.max_weight < 0 {
            return Err(SolveError::Backend(format!(
                "negative column bound {}",
                self.max_weight
            )));
        }

        let mut problem = Problem::new(OptimizationDirection::Minimize);
        let columns: Vec<_> = objective
            .iter()
            .map(|&coefficient| problem.add_integer_var(coefficient, (0, self.max_weight)))
            .collect();

        for row in system.rows() {
            let mut expr = LinearExpr::empty();
            for &(column, coefficient) in &row.terms {
                expr.add(columns[column], coefficient as f64);
            }
            let op = match row.relation {
                Relation::Ge => ComparisonOp::Ge,
                Relation::Le => ComparisonOp::Le,
            };
            problem.add_constraint(expr, op, row.rhs as f64);
        }

        let solution = problem.solve().map_err(|err| match err {
            microlp::Error::Infeasible => SolveError::Infeasible,
            microlp::Error::Unbounded => SolveError::Unbounded,
            other => SolveError::Backend(other.to_string()),
        })?;
        debug!("solver objective {}", solution.objective());

        Ok(columns.iter().map(|&column| solution[column]).collect())
    }
}
