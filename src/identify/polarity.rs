//! Polarity normalization and back-translation

use super::LinearForm;
use crate::truth_table::TruthTable;

/// Which variables were inverted to make a function positive unate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polarity {
    flipped: Vec<bool>,
}

impl Polarity {
    /// No variable flipped
    pub fn identity(num_vars: usize) -> Self {
        Polarity {
            flipped: vec![false; num_vars],
        }
    }

    /// Build from explicit per-variable flags
    pub fn from_flags(flipped: Vec<bool>) -> Self {
        Polarity { flipped }
    }

    pub fn num_vars(&self) -> usize {
        self.flipped.len()
    }

    pub fn is_flipped(&self, var: usize) -> bool {
        self.flipped.get(var).copied().unwrap_or(false)
    }

    pub(crate) fn set_flipped(&mut self, var: usize) {
        self.flipped[var] = true;
    }

    /// Indices of the flipped variables in ascending order
    pub fn flipped(&self) -> impl Iterator<Item = usize> + '_ {
        self.flipped
            .iter()
            .enumerate()
            .filter(|(_, &f)| f)
            .map(|(var, _)| var)
    }

    /// A copy of `tt` with every flipped variable inverted
    ///
    /// `tt` itself is left untouched.
    pub fn normalize(&self, tt: &TruthTable) -> TruthTable {
        let mut normalized = tt.clone();
        for var in self.flipped() {
            normalized.flip_inplace(var);
        }
        normalized
    }

    /// Map a form of the normalized function back to the original polarities
    ///
    /// Substituting `1 - x_i` for a flipped `x_i` turns `w_i·x_i` into
    /// `w_i - w_i·x_i`, so the threshold drops by `w_i` and the weight
    /// changes sign.
    pub fn restore(&self, form: LinearForm) -> LinearForm {
        let LinearForm {
            mut weights,
            mut threshold,
        } = form;
        for var in self.flipped() {
            threshold -= weights[var];
            weights[var] = -weights[var];
        }
        LinearForm { weights, threshold }
    }
}
