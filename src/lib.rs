//! # Threshold Logic Identification
//!
//! This crate decides whether a completely specified Boolean function is a
//! *threshold function*, i.e. whether integer weights `w_i` and a threshold
//! `T` exist such that
//!
//! ```text
//! f(x) = 1  <=>  w_0·x_0 + … + w_{n-1}·x_{n-1} >= T
//! ```
//!
//! and, when they do, computes such a linear form.
//!
//! ## Overview
//!
//! Threshold functions are the building blocks of threshold logic gates,
//! which appear in neural-inspired and emerging-technology circuit synthesis.
//! Identification proceeds in four stages:
//!
//! - **Unateness**: a threshold function is unate in every variable, so a
//!   binate variable rejects the function immediately.
//! - **Polarity normalization**: negative unate variables are flipped to make
//!   the function positive unate.
//! - **Constraint building**: the irredundant sum-of-products of the ON-set and
//!   OFF-set turn into one linear inequality per cube.
//! - **Solving**: an integer linear program finds non-negative weights, which
//!   are translated back through the flips.
//!
//! ## Quick Start
//!
//! ```
//! use threshold_logic::{identify, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // x0 AND x1
//! let and = TruthTable::from_hex(2, "8")?;
//! let form = identify(&and)?;
//! assert_eq!(form.weights, vec![1, 1]);
//! assert_eq!(form.threshold, 2);
//! # Ok(())
//! # }
//! ```
//!
//! Functions that are not threshold functions are reported with the reason:
//!
//! ```
//! use threshold_logic::{identify, ThresholdError, TruthTable};
//!
//! let xor = TruthTable::from_hex(2, "6").unwrap();
//! assert_eq!(identify(&xor), Err(ThresholdError::Binate { variable: 0 }));
//! ```
//!
//! ## Configuration and Backends
//!
//! [`identify_with`] takes a [`ThresholdConfig`] and any [`LinearSolver`].
//! The configuration covers the pipeline; bounds on the weights are a
//! property of the backend, e.g. [`MicroLpSolver::new`]:
//!
//! ```
//! use threshold_logic::{identify_with, MicroLpSolver, Objective, ThresholdConfig, TruthTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = ThresholdConfig::new();
//! config.objective = Objective::Feasibility;
//!
//! let maj = TruthTable::majority(5);
//! let form = identify_with(&maj, &config, &MicroLpSolver::new(100))?;
//! assert!(form.realizes(&maj));
//! # Ok(())
//! # }
//! ```
//!
//! ## PLA Files
//!
//! Single-output PLA files are read into a [`Cover`] and converted to a truth
//! table:
//!
//! ```
//! use threshold_logic::{identify, Cover, PLAReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pla = ".i 3\n.o 1\n11- 1\n1-1 1\n-11 1\n.e\n";
//! let cover = Cover::from_pla_string(pla)?;
//! let tt = cover.to_truth_table()?;
//! assert_eq!(identify(&tt)?.to_vec(), vec![1, 1, 1, 2]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: pipeline milestones at
//! `debug` level, individual constraint rows at `trace` level. Install a
//! logger such as `env_logger` to see them.

pub mod cover;
pub mod error;
pub mod identify;
pub mod pla;
pub mod truth_table;

// Public API
pub use cover::{Cover, CoverError, CoverType, Cube, CubeType};
pub use error::{SolveError, ThresholdError};
pub use identify::{
    identify, identify_with, is_threshold, ConstraintSystem, LinearConstraint, LinearForm,
    LinearSolver, MicroLpSolver, Polarity, Relation, Unateness,
};
pub use pla::{PLAError, PLAReadError, PLAReader, PLAWriteError, PLAWriter};
pub use truth_table::{isop, TruthTable, TruthTableError};

/// What the solver minimizes among all valid linear forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Objective {
    /// Minimize the sum of all weights and the threshold
    #[default]
    MinimizeSum,
    /// Accept any valid form
    Feasibility,
}

impl Objective {
    /// One objective coefficient per column
    pub fn coefficients(&self, num_columns: usize) -> Vec<f64> {
        let coefficient = match self {
            Objective::MinimizeSum => 1.0,
            Objective::Feasibility => 0.0,
        };
        vec![coefficient; num_columns]
    }
}

/// Configuration for threshold identification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdConfig {
    /// Objective handed to the solver
    pub objective: Objective,
    /// Check the final form against the function on every assignment
    pub verify: bool,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        ThresholdConfig {
            objective: Objective::MinimizeSum,
            verify: true,
        }
    }
}

impl ThresholdConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}
