//! Cube types for sum-of-products covers
//!
//! This module provides the core cube-related types used in covers:
//! - [`CubeType`]: Distinguishes between ON-set and OFF-set cubes
//! - [`Cube`]: Represents a single cube (product term) over the inputs

use std::fmt;
use std::sync::Arc;

use crate::truth_table::TruthTable;

/// Type of a cube (ON-set or OFF-set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CubeType {
    /// ON-set cube (where the function is 1)
    F,
    /// OFF-set cube (where the function is 0)
    R,
}

/// A product term over the inputs of a single-output function
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    pub(crate) inputs: Arc<[Option<bool>]>,
    pub(crate) cube_type: CubeType,
}

impl Cube {
    /// Create a cube from per-input literals
    ///
    /// # Examples
    ///
    /// ```
    /// use threshold_logic::{Cube, CubeType};
    ///
    /// // x0 AND NOT x2
    /// let cube = Cube::new(&[Some(true), None, Some(false)], CubeType::F);
    /// assert_eq!(cube.num_literals(), 2);
    /// assert_eq!(cube.to_string(), "1-0");
    /// ```
    pub fn new(inputs: &[Option<bool>], cube_type: CubeType) -> Self {
        Cube {
            inputs: inputs.into(),
            cube_type,
        }
    }

    /// Get the inputs of this cube
    ///
    /// Returns a slice where each element represents an input variable:
    /// - `Some(false)` - input must be 0
    /// - `Some(true)` - input must be 1
    /// - `None` - don't care (can be 0 or 1)
    pub fn inputs(&self) -> &[Option<bool>] {
        &self.inputs
    }

    /// Get the type of this cube (F or R)
    pub fn cube_type(&self) -> CubeType {
        self.cube_type
    }

    /// Same literals, different cube type
    pub fn with_type(&self, cube_type: CubeType) -> Self {
        Cube {
            inputs: Arc::clone(&self.inputs),
            cube_type,
        }
    }

    pub fn num_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Number of inputs constrained by this cube
    pub fn num_literals(&self) -> usize {
        self.inputs.iter().filter(|lit| lit.is_some()).count()
    }

    /// Literal on input `var`, `None` if the cube does not mention it
    pub fn literal(&self, var: usize) -> Option<bool> {
        self.inputs.get(var).copied().flatten()
    }

    /// Copy of the cube with the literal on `var` removed
    pub fn without_literal(&self, var: usize) -> Self {
        let mut inputs = self.inputs.to_vec();
        if let Some(lit) = inputs.get_mut(var) {
            *lit = None;
        }
        Cube::new(&inputs, self.cube_type)
    }

    /// The characteristic function of the cube
    ///
    /// # Panics
    ///
    /// Panics if the cube has more than [`TruthTable::MAX_VARS`] inputs.
    pub fn to_truth_table(&self) -> TruthTable {
        let num_vars = self.num_inputs();
        self.inputs
            .iter()
            .enumerate()
            .fold(TruthTable::const1(num_vars), |acc, (var, lit)| match lit {
                Some(true) => acc.and(&TruthTable::nth_var(num_vars, var)),
                Some(false) => acc.and(&TruthTable::nth_var(num_vars, var).not()),
                None => acc,
            })
    }
}

/// PLA-style rendering of the input part: `0`, `1` or `-` per input
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for lit in self.inputs.iter() {
            let ch = match lit {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}
