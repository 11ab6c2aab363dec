//! Cover types for sum-of-products representations
//!
//! A [`Cover`] is a list of cubes over the inputs of a single-output Boolean
//! function. ON-set (`F`) cubes describe where the function is 1; an `FR`
//! cover additionally carries OFF-set (`R`) cubes describing where it is 0.
//! Covers come out of [`isop`](crate::isop) and PLA files, and convert back to
//! a [`TruthTable`] with [`Cover::to_truth_table`].

mod cubes;
mod error;

pub use cubes::{Cube, CubeType};
pub use error::CoverError;

use std::sync::Arc;

use crate::truth_table::TruthTable;

/// Represents the type of cover (F or FR)
///
/// - F: ON-set only
/// - FR: ON-set + OFF-set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverType {
    /// On-set only (F)
    F,
    /// On-set and off-set (FR)
    FR,
}

impl CoverType {
    /// Check if this type includes R (OFF-set)
    pub fn has_r(&self) -> bool {
        matches!(self, CoverType::FR)
    }
}

/// A single-output cover with dynamic input count
///
/// # Examples
///
/// ```
/// use threshold_logic::{Cover, CoverType};
///
/// let mut cover = Cover::new(CoverType::F);
/// cover.add_cube(&[Some(true), Some(true), None], true);
/// cover.add_cube(&[None, Some(true), Some(true)], true);
/// assert_eq!(cover.num_inputs(), 3);
/// assert_eq!(cover.num_cubes(), 2);
///
/// let tt = cover.to_truth_table().unwrap();
/// assert_eq!(tt.count_ones(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Cover {
    /// Number of input variables
    num_inputs: usize,
    /// Input labels, empty when the cover is unlabeled
    input_labels: Vec<Arc<str>>,
    /// Output label if one was given
    output_label: Option<Arc<str>>,
    /// Cubes with their type (F/R) and literals
    cubes: Vec<Cube>,
    /// Cover type (F or FR)
    cover_type: CoverType,
}

impl Cover {
    /// Create a new empty cover with the specified type
    pub fn new(cover_type: CoverType) -> Self {
        Self::with_num_inputs(0, cover_type)
    }

    /// Create an empty cover over a fixed number of inputs
    pub fn with_num_inputs(num_inputs: usize, cover_type: CoverType) -> Self {
        Cover {
            num_inputs,
            input_labels: Vec::new(),
            output_label: None,
            cubes: Vec::new(),
            cover_type,
        }
    }

    /// Create a new cover with pre-defined input labels
    ///
    /// ```
    /// use threshold_logic::{Cover, CoverType};
    ///
    /// let cover = Cover::with_labels(CoverType::F, &["a", "b", "c"]);
    /// assert_eq!(cover.num_inputs(), 3);
    /// assert_eq!(cover.input_labels()[1].as_ref(), "b");
    /// ```
    pub fn with_labels<S: AsRef<str>>(cover_type: CoverType, input_labels: &[S]) -> Self {
        let labels: Vec<Arc<str>> = input_labels
            .iter()
            .map(|s| Arc::from(s.as_ref()))
            .collect();
        Cover {
            num_inputs: labels.len(),
            input_labels: labels,
            output_label: None,
            cubes: Vec::new(),
            cover_type,
        }
    }

    /// Combine an ON-set cover and an OFF-set cover into one FR cover
    ///
    /// Cubes of `offset` are re-typed as OFF-set cubes. Labels are taken from
    /// `onset`.
    pub fn from_sets(onset: &Cover, offset: &Cover) -> Self {
        let mut cover = Cover {
            num_inputs: onset.num_inputs.max(offset.num_inputs),
            input_labels: onset.input_labels.clone(),
            output_label: onset.output_label.clone(),
            cubes: Vec::with_capacity(onset.cubes.len() + offset.cubes.len()),
            cover_type: CoverType::FR,
        };
        cover
            .cubes
            .extend(onset.cubes.iter().map(|c| c.with_type(CubeType::F)));
        cover
            .cubes
            .extend(offset.cubes.iter().map(|c| c.with_type(CubeType::R)));
        cover
    }

    pub(crate) fn from_parts(
        num_inputs: usize,
        input_labels: Vec<Arc<str>>,
        output_label: Option<Arc<str>>,
        cubes: Vec<Cube>,
        cover_type: CoverType,
    ) -> Self {
        Cover {
            num_inputs,
            input_labels,
            output_label,
            cubes,
            cover_type,
        }
    }

    /// Get the number of inputs
    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    /// Get the number of cubes (for F covers, only counts F cubes)
    pub fn num_cubes(&self) -> usize {
        self.cubes().count()
    }

    /// Get the cover type (F or FR)
    pub fn cover_type(&self) -> CoverType {
        self.cover_type
    }

    /// Get input variable labels (empty for unlabeled covers)
    pub fn input_labels(&self) -> &[Arc<str>] {
        &self.input_labels
    }

    /// Get the output label if one was set
    pub fn output_label(&self) -> Option<&Arc<str>> {
        self.output_label.as_ref()
    }

    /// Iterate over the cubes this cover type includes
    pub fn cubes(&self) -> impl Iterator<Item = &Cube> + '_ {
        let cover_type = self.cover_type;
        self.cubes
            .iter()
            .filter(move |cube| cover_type.has_r() || cube.cube_type() == CubeType::F)
    }

    /// Iterate over ON-set cubes
    pub fn onset(&self) -> impl Iterator<Item = &Cube> + '_ {
        self.cubes
            .iter()
            .filter(|cube| cube.cube_type() == CubeType::F)
    }

    /// Iterate over OFF-set cubes (always empty for F covers)
    pub fn offset(&self) -> impl Iterator<Item = &Cube> + '_ {
        let has_r = self.cover_type.has_r();
        self.cubes
            .iter()
            .filter(move |cube| has_r && cube.cube_type() == CubeType::R)
    }

    /// Add a cube to the cover
    ///
    /// The cover grows if the cube has more inputs; shorter cubes are padded
    /// with absent literals. `output` selects the ON-set (`true`) or the
    /// OFF-set (`false`); OFF-set cubes are dropped by F covers.
    pub fn add_cube(&mut self, inputs: &[Option<bool>], output: bool) {
        self.grow_to_fit(inputs.len());

        let mut padded = inputs.to_vec();
        padded.resize(self.num_inputs, None);

        if output {
            self.cubes.push(Cube::new(&padded, CubeType::F));
        } else if self.cover_type.has_r() {
            self.cubes.push(Cube::new(&padded, CubeType::R));
        }
    }

    /// Append an already-sized cube
    pub(crate) fn push(&mut self, cube: Cube) {
        debug_assert_eq!(cube.num_inputs(), self.num_inputs);
        self.cubes.push(cube);
    }

    /// The completely specified function described by this cover
    ///
    /// The ON-set is the union of the F cubes. For FR covers the R cubes must
    /// describe exactly the remaining assignments; overlaps and gaps are
    /// errors because don't-care assignments are not supported.
    pub fn to_truth_table(&self) -> Result<TruthTable, CoverError> {
        let num_vars = self.num_inputs;
        if num_vars > TruthTable::MAX_VARS {
            return Err(CoverError::TooManyInputs {
                inputs: num_vars,
                max: TruthTable::MAX_VARS,
            });
        }

        let on = union(num_vars, self.onset());
        if !self.cover_type.has_r() {
            return Ok(on);
        }

        let off = union(num_vars, self.offset());
        let overlap = on.and(&off);
        if let Some(assignment) = first_one(&overlap) {
            return Err(CoverError::OverlappingSets { assignment });
        }
        let gap = on.or(&off).not();
        if let Some(assignment) = first_one(&gap) {
            return Err(CoverError::IncompleteFunction { assignment });
        }
        Ok(on)
    }

    /// Grow the cover to fit at least the specified number of inputs
    ///
    /// Existing cubes are extended with absent literals; labels, if present,
    /// are backfilled with `x<i>` names.
    fn grow_to_fit(&mut self, min_inputs: usize) {
        if min_inputs <= self.num_inputs {
            return;
        }
        let old_inputs = self.num_inputs;
        self.num_inputs = min_inputs;

        for cube in &mut self.cubes {
            let mut new_inputs = cube.inputs.to_vec();
            new_inputs.resize(self.num_inputs, None);
            cube.inputs = new_inputs.into();
        }

        if !self.input_labels.is_empty() {
            for i in old_inputs..self.num_inputs {
                self.input_labels
                    .push(Arc::from(format!("x{}", i).as_str()));
            }
        }
    }
}

impl Default for Cover {
    fn default() -> Self {
        Self::new(CoverType::F)
    }
}

fn union<'a>(num_vars: usize, cubes: impl Iterator<Item = &'a Cube>) -> TruthTable {
    cubes.fold(TruthTable::const0(num_vars), |acc, cube| {
        acc.or(&cube.to_truth_table())
    })
}

fn first_one(tt: &TruthTable) -> Option<usize> {
    (0..tt.num_bits()).find(|&index| tt.get_bit(index))
}

#[cfg(test)]
mod tests;
