//! Per-variable unateness classification

use log::debug;

use super::polarity::Polarity;
use crate::error::ThresholdError;
use crate::truth_table::TruthTable;

/// How a function depends on one of its variables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unateness {
    /// Raising the variable never lowers the function
    Positive,
    /// Raising the variable never raises the function
    Negative,
    /// The variable occurs in both polarities
    Binate,
}

/// Classify the function's dependence on variable `var`
///
/// A variable the function does not depend on is reported as
/// [`Unateness::Positive`].
///
/// # Panics
///
/// Panics if `var` is not a variable of `tt`.
pub fn classify_variable(tt: &TruthTable, var: usize) -> Unateness {
    let low = tt.cofactor0(var);
    let high = tt.cofactor1(var);
    if low.implies(&high) {
        Unateness::Positive
    } else if high.implies(&low) {
        Unateness::Negative
    } else {
        Unateness::Binate
    }
}

/// Classify every variable and record which ones need flipping
///
/// Stops at the first binate variable.
pub fn classify(tt: &TruthTable) -> Result<Polarity, ThresholdError> {
    let mut polarity = Polarity::identity(tt.num_vars());
    for var in 0..tt.num_vars() {
        match classify_variable(tt, var) {
            Unateness::Positive => {}
            Unateness::Negative => {
                debug!("x{} is negative unate", var);
                polarity.set_flipped(var);
            }
            Unateness::Binate => {
                debug!("x{} is binate", var);
                return Err(ThresholdError::Binate { variable: var });
            }
        }
    }
    Ok(polarity)
}
