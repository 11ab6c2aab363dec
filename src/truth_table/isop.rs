//! Irredundant sum-of-products extraction
//!
//! Implements the Minato–Morreale recursion on an interval `[lower, upper]`
//! of functions: the result is a cover of prime-irredundant cubes whose union
//! contains `lower` and is contained in `upper`. For a completely specified
//! function both bounds are the function itself.

use super::TruthTable;
use crate::cover::{Cover, CoverType, Cube, CubeType};

/// Compute an irredundant sum-of-products cover of the ON-set of `tt`
///
/// Every returned cube is an ON-set (`F`) cube over `tt.num_vars()` inputs.
/// The constant-0 function yields an empty cover and the constant-1 function
/// a single cube without literals.
///
/// ```
/// use threshold_logic::{isop, TruthTable};
///
/// // x0 + x1 over two variables
/// let or = TruthTable::from_hex(2, "e").unwrap();
/// let cover = isop(&or);
/// assert_eq!(cover.num_cubes(), 2);
/// assert!(cover.cubes().all(|cube| cube.num_literals() == 1));
/// ```
pub fn isop(tt: &TruthTable) -> Cover {
    let num_vars = tt.num_vars();
    let mut literals: Vec<Vec<Option<bool>>> = Vec::new();
    isop_rec(tt, tt, num_vars, &mut literals);

    let mut cover = Cover::with_num_inputs(num_vars, CoverType::F);
    for inputs in literals {
        cover.push(Cube::new(&inputs, CubeType::F));
    }
    cover
}

/// Recursive step; only variables below `var_limit` are considered for splitting
fn isop_rec(
    lower: &TruthTable,
    upper: &TruthTable,
    var_limit: usize,
    cubes: &mut Vec<Vec<Option<bool>>>,
) -> TruthTable {
    let num_vars = lower.num_vars();
    if lower.is_const0() {
        return TruthTable::const0(num_vars);
    }
    if upper.is_const1() {
        cubes.push(vec![None; num_vars]);
        return TruthTable::const1(num_vars);
    }

    // lower is non-zero and upper is not constant 1, so one of them depends
    // on some variable below the limit
    let Some(var) = (0..var_limit)
        .rev()
        .find(|&v| lower.has_var(v) || upper.has_var(v))
    else {
        cubes.push(vec![None; num_vars]);
        return TruthTable::const1(num_vars);
    };

    let lower0 = lower.cofactor0(var);
    let lower1 = lower.cofactor1(var);
    let upper0 = upper.cofactor0(var);
    let upper1 = upper.cofactor1(var);

    let begin0 = cubes.len();
    let res0 = isop_rec(&lower0.and(&upper1.not()), &upper0, var, cubes);
    let end0 = cubes.len();
    let res1 = isop_rec(&lower1.and(&upper0.not()), &upper1, var, cubes);
    let end1 = cubes.len();

    let remaining = lower0.and(&res0.not()).or(&lower1.and(&res1.not()));
    let res2 = isop_rec(&remaining, &upper0.and(&upper1), var, cubes);

    for cube in &mut cubes[begin0..end0] {
        cube[var] = Some(false);
    }
    for cube in &mut cubes[end0..end1] {
        cube[var] = Some(true);
    }

    let x = TruthTable::nth_var(num_vars, var);
    res2.or(&x.not().and(&res0)).or(&x.and(&res1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cover_function(cover: &Cover, num_vars: usize) -> TruthTable {
        cover
            .cubes()
            .fold(TruthTable::const0(num_vars), |acc, cube| {
                acc.or(&cube.to_truth_table())
            })
    }

    #[test]
    fn test_isop_constants() {
        assert_eq!(isop(&TruthTable::const0(3)).num_cubes(), 0);

        let cover = isop(&TruthTable::const1(3));
        assert_eq!(cover.num_cubes(), 1);
        assert_eq!(cover.cubes().next().unwrap().num_literals(), 0);
    }

    #[test]
    fn test_isop_xor_needs_two_minterms() {
        let xor = TruthTable::from_hex(2, "6").unwrap();
        let cover = isop(&xor);
        assert_eq!(cover.num_cubes(), 2);
        assert!(cover.cubes().all(|cube| cube.num_literals() == 2));
        assert_eq!(cover_function(&cover, 2), xor);
    }

    #[test]
    fn test_isop_majority_is_three_pairs() {
        let maj = TruthTable::majority(3);
        let cover = isop(&maj);
        assert_eq!(cover.num_cubes(), 3);
        for cube in cover.cubes() {
            assert_eq!(cube.num_literals(), 2);
            assert!(cube.inputs().iter().flatten().all(|&lit| lit));
        }
        assert_eq!(cover_function(&cover, 3), maj);
    }

    #[test]
    fn test_isop_covers_every_three_variable_function() {
        for bits in 0..256usize {
            let tt = TruthTable::from_fn(3, |i| (bits >> i) & 1 == 1);
            let cover = isop(&tt);
            assert_eq!(cover_function(&cover, 3), tt, "function {:02x}", bits);

            // Irredundant: dropping any cube loses part of the ON-set
            let cubes: Vec<_> = cover.cubes().cloned().collect();
            for skip in 0..cubes.len() {
                let partial = cubes
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .fold(TruthTable::const0(3), |acc, (_, c)| {
                        acc.or(&c.to_truth_table())
                    });
                assert_ne!(partial, tt, "cube {} of {:02x} is redundant", skip, bits);
            }
        }
    }

    #[test]
    fn test_isop_of_positive_unate_function_has_only_positive_literals() {
        // x0 x1 + x2 x3 + x6 over seven variables (exercises multi-word tables)
        let tt = TruthTable::from_fn(7, |i| {
            let x = |v: usize| (i >> v) & 1 == 1;
            (x(0) && x(1)) || (x(2) && x(3)) || x(6)
        });
        let cover = isop(&tt);
        assert_eq!(cover.num_cubes(), 3);
        assert!(cover
            .cubes()
            .all(|cube| cube.inputs().iter().flatten().all(|&lit| lit)));
        assert_eq!(cover_function(&cover, 7), tt);
    }
}
