//! Threshold function identification
//!
//! A threshold function `f(x) = [Σ w_i·x_i >= T]` is unate in every
//! variable. Identification therefore runs in four stages:
//!
//! 1. [`unate::classify`] rejects functions with a binate variable and
//!    records which variables are negative unate.
//! 2. [`Polarity::normalize`] flips those variables so the working copy is
//!    positive unate everywhere.
//! 3. [`ConstraintSystem::from_covers`] turns the irredundant covers of the
//!    ON-set and OFF-set into linear inequalities.
//! 4. A [`LinearSolver`] finds non-negative integer weights, which
//!    [`Polarity::restore`] maps back to the original polarities.

pub mod constraints;
pub mod polarity;
pub mod solver;
pub mod unate;


use std::fmt;

use log::debug;

pub use constraints::{ConstraintSystem, LinearConstraint, Relation};
pub use polarity::Polarity;
pub use solver::{LinearSolver, MicroLpSolver};
pub use unate::Unateness;

use crate::error::{SolveError, ThresholdError};
use crate::truth_table::{isop, TruthTable};
use crate::ThresholdConfig;

/// Integer weights and threshold of `Σ w_i·x_i >= T`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinearForm {
    pub weights: Vec<i64>,
    pub threshold: i64,
}

impl LinearForm {
    pub fn new(weights: Vec<i64>, threshold: i64) -> Self {
        LinearForm { weights, threshold }
    }

    pub fn num_vars(&self) -> usize {
        self.weights.len()
    }

    /// Value of the form on the assignment `index` (bit `i` is `x_i`)
    pub fn evaluate(&self, index: usize) -> bool {
        let sum: i64 = self
            .weights
            .iter()
            .enumerate()
            .filter(|(var, _)| (index >> var) & 1 == 1)
            .map(|(_, &w)| w)
            .sum();
        sum >= self.threshold
    }

    /// First assignment on which the form and `tt` disagree
    pub fn first_mismatch(&self, tt: &TruthTable) -> Option<usize> {
        if self.num_vars() != tt.num_vars() {
            return Some(0);
        }
        (0..tt.num_bits()).find(|&index| self.evaluate(index) != tt.get_bit(index))
    }

    /// Whether the form computes `tt` on every assignment
    pub fn realizes(&self, tt: &TruthTable) -> bool {
        self.first_mismatch(tt).is_none()
    }

    /// The weights followed by the threshold
    pub fn to_vec(&self) -> Vec<i64> {
        let mut values = self.weights.clone();
        values.push(self.threshold);
        values
    }
}

impl fmt::Display for LinearForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", w)?;
        }
        if !self.weights.is_empty() {
            write!(f, "; ")?;
        }
        write!(f, "{}]", self.threshold)
    }
}

/// Identify `tt` with the default configuration and solver
///
/// ```
/// use threshold_logic::{identify, TruthTable};
///
/// let maj = TruthTable::majority(3);
/// let form = identify(&maj).unwrap();
/// assert_eq!(form.to_vec(), vec![1, 1, 1, 2]);
/// ```
pub fn identify(tt: &TruthTable) -> Result<LinearForm, ThresholdError> {
    identify_with(tt, &ThresholdConfig::default(), &MicroLpSolver::default())
}

/// Identify `tt` using `config` and the given solver backend
///
/// Bounds on the weights and the threshold are set on the backend, e.g.
/// [`MicroLpSolver::new`].
pub fn identify_with<S: LinearSolver + ?Sized>(
    tt: &TruthTable,
    config: &ThresholdConfig,
    solver: &S,
) -> Result<LinearForm, ThresholdError> {
    let num_vars = tt.num_vars();

    let polarity = unate::classify(tt)?;
    let normalized = polarity.normalize(tt);

    let onset = isop(&normalized);
    let offset = isop(&normalized.not());
    debug!(
        "{} vars, {} flipped, {} ON cubes, {} OFF cubes",
        num_vars,
        polarity.flipped().count(),
        onset.num_cubes(),
        offset.num_cubes()
    );

    let system = ConstraintSystem::from_covers(num_vars, &onset, &offset);
    let objective = config.objective.coefficients(system.num_columns());
    let values = solver.solve(&system, &objective)?;
    let values = round_solution(&values, system.num_columns())?;
    debug!("normalized solution {:?}", values);

    let threshold = values[num_vars];
    let form = polarity.restore(LinearForm::new(values[..num_vars].to_vec(), threshold));

    if config.verify {
        if let Some(assignment) = form.first_mismatch(tt) {
            debug!("form {} fails on assignment {}", form, assignment);
            return Err(ThresholdError::Verification { assignment });
        }
    }
    Ok(form)
}

/// Boolean surface of [`identify`]
///
/// On success the buffer, if given, is replaced by the `n` weights followed by
/// the threshold; on failure it is left untouched.
///
/// ```
/// use threshold_logic::{is_threshold, TruthTable};
///
/// let mut form = Vec::new();
/// let and = TruthTable::from_hex(2, "8").unwrap();
/// assert!(is_threshold(&and, Some(&mut form)));
/// assert_eq!(form, vec![1, 1, 2]);
///
/// let xor = TruthTable::from_hex(2, "6").unwrap();
/// assert!(!is_threshold(&xor, None));
/// ```
pub fn is_threshold(tt: &TruthTable, linear_form: Option<&mut Vec<i64>>) -> bool {
    match identify(tt) {
        Ok(form) => {
            if let Some(buffer) = linear_form {
                *buffer = form.to_vec();
            }
            true
        }
        Err(err) => {
            debug!("not threshold: {}", err);
            false
        }
    }
}

fn round_solution(values: &[f64], num_columns: usize) -> Result<Vec<i64>, SolveError> {
    const TOLERANCE: f64 = 1e-6;

    if values.len() != num_columns {
        return Err(SolveError::Backend(format!(
            "solver returned {} values for {} columns",
            values.len(),
            num_columns
        )));
    }
    values
        .iter()
        .enumerate()
        .map(|(column, &value)| {
            let rounded = value.round();
            if !value.is_finite() || (value - rounded).abs() > TOLERANCE {
                Err(SolveError::NonIntegral { column })
            } else {
                Ok(rounded as i64)
            }
        })
        .collect()
}
