//! Linear inequalities derived from ON-set and OFF-set cubes
//!
//! Columns `0..n` hold the weights and column `n` the threshold. Each cube of
//! a positive unate function yields one row: an ON-set cube's weakest point
//! must reach the threshold, an OFF-set cube's strongest point must stay
//! below it.

use std::fmt;

use log::trace;

use crate::cover::{Cover, Cube};

/// Comparison between a row's left-hand side and its right-hand side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `lhs >= rhs`
    Ge,
    /// `lhs <= rhs`
    Le,
}

/// A single row `Σ coefficient·column (>=|<=) rhs`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinearConstraint {
    /// Sparse `(column, coefficient)` pairs in ascending column order
    pub terms: Vec<(usize, i64)>,
    pub relation: Relation,
    pub rhs: i64,
}

impl LinearConstraint {
    /// Whether `values` (one per column) satisfies this row
    pub fn is_satisfied_by(&self, values: &[i64]) -> bool {
        let lhs: i64 = self
            .terms
            .iter()
            .map(|&(column, coefficient)| coefficient * values[column])
            .sum();
        match self.relation {
            Relation::Ge => lhs >= self.rhs,
            Relation::Le => lhs <= self.rhs,
        }
    }
}

impl fmt::Display for LinearConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            write!(f, "0")?;
        }
        for (i, &(column, coefficient)) in self.terms.iter().enumerate() {
            let sign = if coefficient < 0 { "-" } else { "+" };
            match (i, coefficient.abs()) {
                (0, 1) if coefficient < 0 => write!(f, "-c{}", column)?,
                (0, 1) => write!(f, "c{}", column)?,
                (0, magnitude) if coefficient < 0 => write!(f, "-{}*c{}", magnitude, column)?,
                (0, magnitude) => write!(f, "{}*c{}", magnitude, column)?,
                (_, 1) => write!(f, " {} c{}", sign, column)?,
                (_, magnitude) => write!(f, " {} {}*c{}", sign, magnitude, column)?,
            }
        }
        let op = match self.relation {
            Relation::Ge => ">=",
            Relation::Le => "<=",
        };
        write!(f, " {} {}", op, self.rhs)
    }
}

/// Row for an ON-set cube: `Σ_{x_i = 1 in cube} w_i - T >= 0`
///
/// Variables absent from the cube contribute nothing.
pub fn onset_row(cube: &Cube, num_vars: usize) -> LinearConstraint {
    let mut terms: Vec<(usize, i64)> = (0..num_vars)
        .filter(|&var| cube.literal(var) == Some(true))
        .map(|var| (var, 1))
        .collect();
    terms.push((num_vars, -1));
    LinearConstraint {
        terms,
        relation: Relation::Ge,
        rhs: 0,
    }
}

/// Row for an OFF-set cube: `Σ_{x_i may be 1 in cube} w_i - T <= -1`
///
/// A variable may be 1 unless the cube holds its negative literal.
pub fn offset_row(cube: &Cube, num_vars: usize) -> LinearConstraint {
    let mut terms: Vec<(usize, i64)> = (0..num_vars)
        .filter(|&var| cube.literal(var) != Some(false))
        .map(|var| (var, 1))
        .collect();
    terms.push((num_vars, -1));
    LinearConstraint {
        terms,
        relation: Relation::Le,
        rhs: -1,
    }
}

/// `c_j >= 0` for every weight and the threshold
pub fn non_negativity_rows(num_vars: usize) -> Vec<LinearConstraint> {
    (0..=num_vars)
        .map(|column| LinearConstraint {
            terms: vec![(column, 1)],
            relation: Relation::Ge,
            rhs: 0,
        })
        .collect()
}

/// All rows of one identification problem over `num_vars + 1` columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSystem {
    num_columns: usize,
    rows: Vec<LinearConstraint>,
}

impl ConstraintSystem {
    /// An empty system over `num_columns` columns
    pub fn new(num_columns: usize) -> Self {
        ConstraintSystem {
            num_columns,
            rows: Vec::new(),
        }
    }

    /// Build the rows for the ON-set cover `onset` and OFF-set cover `offset`
    ///
    /// Every cube of `onset` becomes an [`onset_row`], every cube of `offset`
    /// an [`offset_row`] (cube types are ignored, the argument decides), then
    /// the non-negativity rows are appended.
    pub fn from_covers(num_vars: usize, onset: &Cover, offset: &Cover) -> Self {
        let mut system = ConstraintSystem::new(num_vars + 1);
        for cube in onset.cubes() {
            system.push(onset_row(cube, num_vars));
        }
        for cube in offset.cubes() {
            system.push(offset_row(cube, num_vars));
        }
        for row in non_negativity_rows(num_vars) {
            system.push(row);
        }
        system
    }

    /// Append a row
    ///
    /// # Panics
    ///
    /// Panics if the row references a column outside the system.
    pub fn push(&mut self, row: LinearConstraint) {
        assert!(
            row.terms.iter().all(|&(column, _)| column < self.num_columns),
            "row {} references a column outside 0..{}",
            row,
            self.num_columns
        );
        trace!("row {}", row);
        self.rows.push(row);
    }

    /// Number of unknowns (weights plus threshold)
    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn rows(&self) -> &[LinearConstraint] {
        &self.rows
    }

    /// Whether integer `values` satisfy every row
    pub fn is_satisfied_by(&self, values: &[i64]) -> bool {
        values.len() == self.num_columns && self.rows.iter().all(|row| row.is_satisfied_by(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover::{CoverType, CubeType};
    use crate::truth_table::{isop, TruthTable};

    #[test]
    fn test_onset_row_ignores_absent_variables() {
        let cube = Cube::new(&[Some(true), None, Some(true)], CubeType::F);
        let row = onset_row(&cube, 3);
        assert_eq!(row.terms, vec![(0, 1), (2, 1), (3, -1)]);
        assert_eq!(row.relation, Relation::Ge);
        assert_eq!(row.rhs, 0);
    }

    #[test]
    fn test_offset_row_counts_free_variables() {
        let cube = Cube::new(&[Some(false), None, Some(false)], CubeType::R);
        let row = offset_row(&cube, 3);
        assert_eq!(row.terms, vec![(1, 1), (3, -1)]);
        assert_eq!(row.relation, Relation::Le);
        assert_eq!(row.rhs, -1);
    }

    #[test]
    fn test_offset_row_counts_positive_literals() {
        let cube = Cube::new(&[Some(true), Some(false)], CubeType::R);
        assert_eq!(offset_row(&cube, 2).terms, vec![(0, 1), (2, -1)]);
    }

    #[test]
    fn test_non_negativity_rows() {
        let rows = non_negativity_rows(2);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].terms, vec![(2, 1)]);
        assert!(rows.iter().all(|r| r.relation == Relation::Ge && r.rhs == 0));
    }

    #[test]
    fn test_and2_system() {
        let and = TruthTable::from_hex(2, "8").unwrap();
        let on = isop(&and);
        let off = isop(&and.not());
        let system = ConstraintSystem::from_covers(2, &on, &off);
        // one ON cube, two OFF cubes, three non-negativity rows
        assert_eq!(system.rows().len(), 6);
        assert_eq!(system.num_columns(), 3);
        assert!(system.is_satisfied_by(&[1, 1, 2]));
        assert!(!system.is_satisfied_by(&[1, 1, 1]));
        assert!(!system.is_satisfied_by(&[1, 1]));
    }

    #[test]
    fn test_constant_systems() {
        // const1: the empty cube is an ON cube, so T <= 0
        let one = TruthTable::const1(2);
        let system =
            ConstraintSystem::from_covers(2, &isop(&one), &isop(&one.not()));
        assert!(system.is_satisfied_by(&[0, 0, 0]));
        assert!(!system.is_satisfied_by(&[0, 0, 1]));

        // const0: the full cube is an OFF cube, so w0 + w1 < T
        let zero = TruthTable::const0(2);
        let system =
            ConstraintSystem::from_covers(2, &isop(&zero), &isop(&zero.not()));
        assert!(system.is_satisfied_by(&[0, 0, 1]));
        assert!(!system.is_satisfied_by(&[1, 0, 1]));
    }

    #[test]
    fn test_display() {
        let cube = Cube::new(&[Some(true), Some(true)], CubeType::F);
        assert_eq!(onset_row(&cube, 2).to_string(), "c0 + c1 - c2 >= 0");
        let row = LinearConstraint {
            terms: vec![(0, -2), (1, 3)],
            relation: Relation::Le,
            rhs: -1,
        };
        assert_eq!(row.to_string(), "-2*c0 + 3*c1 <= -1");
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_push_rejects_foreign_columns() {
        let mut system = ConstraintSystem::new(2);
        system.push(LinearConstraint {
            terms: vec![(2, 1)],
            relation: Relation::Ge,
            rhs: 0,
        });
    }

    #[test]
    fn test_covers_are_read_per_argument() {
        let mut off = Cover::with_num_inputs(1, CoverType::F);
        off.add_cube(&[Some(false)], true);
        let on = Cover::with_num_inputs(1, CoverType::F);
        let system = ConstraintSystem::from_covers(1, &on, &off);
        assert_eq!(system.rows()[0].relation, Relation::Le);
    }
}
