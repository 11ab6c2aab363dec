//! Dynamic truth tables for completely specified Boolean functions
//!
//! A [`TruthTable`] stores one output bit per input assignment. Bit `i` holds
//! the function value on the assignment encoded by `i`, where variable `j` is
//! bit `j` of `i`. Variable 0 is the least-significant selector bit and
//! toggles fastest, so `x0` over two variables is `0b1010`.
//!
//! Bits are packed into 64-bit words. Tables with fewer than six variables use
//! a single word whose bits above `2^n` are kept at zero, so equality and
//! hashing work on the raw words.
//!
//! ```
//! use threshold_logic::TruthTable;
//!
//! let maj = TruthTable::majority(3);
//! assert_eq!(maj.to_hex(), "e8");
//!
//! // Fixing x2 to 1 turns majority into OR of the remaining inputs
//! let or = TruthTable::nth_var(3, 0).or(&TruthTable::nth_var(3, 1));
//! assert_eq!(maj.cofactor1(2), or);
//! ```

mod error;
mod isop;


pub use error::TruthTableError;
pub use isop::isop;

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Assignments (within one word) where variable `i` is 1, for `i < 6`
const PROJECTIONS: [u64; 6] = [
    0xAAAA_AAAA_AAAA_AAAA,
    0xCCCC_CCCC_CCCC_CCCC,
    0xF0F0_F0F0_F0F0_F0F0,
    0xFF00_FF00_FF00_FF00,
    0xFFFF_0000_FFFF_0000,
    0xFFFF_FFFF_0000_0000,
];

/// A completely specified single-output Boolean function of `n` variables
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TruthTable {
    num_vars: usize,
    words: Vec<u64>,
}

impl TruthTable {
    /// Largest supported variable count
    pub const MAX_VARS: usize = 24;

    /// Create the constant-0 function of `num_vars` variables
    ///
    /// # Panics
    ///
    /// Panics if `num_vars` exceeds [`TruthTable::MAX_VARS`]. Use
    /// [`TruthTable::try_new`] for untrusted sizes.
    pub fn new(num_vars: usize) -> Self {
        assert!(
            num_vars <= Self::MAX_VARS,
            "TruthTable supports at most {} variables, got {}",
            Self::MAX_VARS,
            num_vars
        );
        let num_words = if num_vars <= 6 {
            1
        } else {
            1 << (num_vars - 6)
        };
        TruthTable {
            num_vars,
            words: vec![0; num_words],
        }
    }

    /// Create the constant-0 function, rejecting oversized variable counts
    pub fn try_new(num_vars: usize) -> Result<Self, TruthTableError> {
        if num_vars > Self::MAX_VARS {
            return Err(TruthTableError::TooManyVariables {
                requested: num_vars,
                max: Self::MAX_VARS,
            });
        }
        Ok(Self::new(num_vars))
    }

    /// Constant-0 function
    pub fn const0(num_vars: usize) -> Self {
        Self::new(num_vars)
    }

    /// Constant-1 function
    pub fn const1(num_vars: usize) -> Self {
        Self::new(num_vars).not()
    }

    /// Build a table by evaluating `f` on every assignment index
    pub fn from_fn<F: FnMut(usize) -> bool>(num_vars: usize, mut f: F) -> Self {
        let mut tt = Self::new(num_vars);
        for index in 0..tt.num_bits() {
            if f(index) {
                tt.set_bit(index, true);
            }
        }
        tt
    }

    /// Projection function `x_var`
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn nth_var(num_vars: usize, var: usize) -> Self {
        assert!(var < num_vars, "variable {} out of range", var);
        let mut tt = Self::new(num_vars);
        if var < 6 {
            for word in tt.words.iter_mut() {
                *word = PROJECTIONS[var];
            }
        } else {
            let step = 1 << (var - 6);
            for (i, word) in tt.words.iter_mut().enumerate() {
                if (i / step) % 2 == 1 {
                    *word = u64::MAX;
                }
            }
        }
        tt.mask_unused();
        tt
    }

    /// Majority function: 1 iff more than half of the inputs are 1
    pub fn majority(num_vars: usize) -> Self {
        Self::from_fn(num_vars, |index| 2 * index.count_ones() as usize > num_vars)
    }

    /// The function computed by the linear form `Σ weights[i]·x_i ≥ threshold`
    pub fn from_linear_form(weights: &[i64], threshold: i64) -> Self {
        Self::from_fn(weights.len(), |index| {
            let sum: i64 = weights
                .iter()
                .enumerate()
                .filter(|(var, _)| (index >> var) & 1 == 1)
                .map(|(_, &w)| w)
                .sum();
            sum >= threshold
        })
    }

    /// Parse a hexadecimal string, most significant digit first
    ///
    /// The string must have `2^n / 4` digits (one digit when `n < 2`); an
    /// optional `0x` prefix is accepted. Digit bits above `2^n` are ignored.
    ///
    /// ```
    /// use threshold_logic::TruthTable;
    ///
    /// let and = TruthTable::from_hex(2, "8").unwrap();
    /// assert!(and.get_bit(3));
    /// assert_eq!(and.count_ones(), 1);
    /// ```
    pub fn from_hex(num_vars: usize, hex: &str) -> Result<Self, TruthTableError> {
        let mut tt = Self::try_new(num_vars)?;
        let digits = hex
            .strip_prefix("0x")
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        let expected = Self::hex_digits(num_vars);
        if digits.len() != expected {
            return Err(TruthTableError::LengthMismatch {
                num_vars,
                expected,
                actual: digits.len(),
            });
        }

        for (position, ch) in digits.chars().enumerate() {
            let nibble = ch
                .to_digit(16)
                .ok_or(TruthTableError::InvalidCharacter {
                    character: ch,
                    position,
                })? as u64;
            let nibble_index = expected - 1 - position;
            let shift = nibble_index * 4;
            tt.words[shift >> 6] |= nibble << (shift & 63);
        }
        tt.mask_unused();
        Ok(tt)
    }

    /// Parse a binary string of exactly `2^n` characters, most significant first
    pub fn from_binary(num_vars: usize, binary: &str) -> Result<Self, TruthTableError> {
        let mut tt = Self::try_new(num_vars)?;
        let expected = tt.num_bits();
        if binary.len() != expected {
            return Err(TruthTableError::LengthMismatch {
                num_vars,
                expected,
                actual: binary.len(),
            });
        }

        for (position, ch) in binary.chars().enumerate() {
            let value = match ch {
                '0' => false,
                '1' => true,
                _ => {
                    return Err(TruthTableError::InvalidCharacter {
                        character: ch,
                        position,
                    })
                }
            };
            tt.set_bit(expected - 1 - position, value);
        }
        Ok(tt)
    }

    /// Number of hex digits used by [`TruthTable::from_hex`] and [`TruthTable::to_hex`]
    pub fn hex_digits(num_vars: usize) -> usize {
        if num_vars < 2 {
            1
        } else {
            (1 << num_vars) / 4
        }
    }

    /// Get the number of variables
    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    /// Get the number of assignments (`2^n`)
    pub fn num_bits(&self) -> usize {
        1 << self.num_vars
    }

    /// Raw storage words, least-significant assignments first
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Function value on the assignment encoded by `index`
    #[inline]
    pub fn get_bit(&self, index: usize) -> bool {
        debug_assert!(index < self.num_bits());
        (self.words[index >> 6] >> (index & 63)) & 1 != 0
    }

    /// Set the function value on the assignment encoded by `index`
    #[inline]
    pub fn set_bit(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.num_bits());
        let mask = 1u64 << (index & 63);
        if value {
            self.words[index >> 6] |= mask;
        } else {
            self.words[index >> 6] &= !mask;
        }
    }

    /// Number of assignments mapped to 1
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_const0(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn is_const1(&self) -> bool {
        let mask = self.word_mask();
        self.words.iter().all(|&w| w == mask)
    }

    /// Restrict `var` to 0; the result keeps all `n` variables
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn cofactor0(&self, var: usize) -> Self {
        self.check_var(var);
        let mut tt = self.clone();
        if var < 6 {
            let shift = 1 << var;
            for word in tt.words.iter_mut() {
                let low = *word & !PROJECTIONS[var];
                *word = low | (low << shift);
            }
        } else {
            let step = 1 << (var - 6);
            for block in tt.words.chunks_mut(2 * step) {
                let (low, high) = block.split_at_mut(step);
                high.copy_from_slice(low);
            }
        }
        tt
    }

    /// Restrict `var` to 1; the result keeps all `n` variables
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn cofactor1(&self, var: usize) -> Self {
        self.check_var(var);
        let mut tt = self.clone();
        if var < 6 {
            let shift = 1 << var;
            for word in tt.words.iter_mut() {
                let high = *word & PROJECTIONS[var];
                *word = high | (high >> shift);
            }
        } else {
            let step = 1 << (var - 6);
            for block in tt.words.chunks_mut(2 * step) {
                let (low, high) = block.split_at_mut(step);
                low.copy_from_slice(high);
            }
        }
        tt
    }

    /// Whether the function depends on `var`
    pub fn has_var(&self, var: usize) -> bool {
        self.cofactor0(var) != self.cofactor1(var)
    }

    /// Whether every ON-set assignment of `self` is also in the ON-set of `other`
    ///
    /// # Panics
    ///
    /// Panics if the variable counts differ.
    pub fn implies(&self, other: &TruthTable) -> bool {
        self.check_same_size(other);
        self.words
            .iter()
            .zip(other.words.iter())
            .all(|(a, b)| a & !b == 0)
    }

    /// Invert input `var` in place: `f(.., x_var, ..)` becomes `f(.., !x_var, ..)`
    ///
    /// # Panics
    ///
    /// Panics if `var >= num_vars`.
    pub fn flip_inplace(&mut self, var: usize) {
        self.check_var(var);
        if var < 6 {
            let shift = 1 << var;
            let proj = PROJECTIONS[var];
            for word in self.words.iter_mut() {
                *word = ((*word & proj) >> shift) | ((*word << shift) & proj);
            }
        } else {
            let step = 1 << (var - 6);
            for block in self.words.chunks_mut(2 * step) {
                let (low, high) = block.split_at_mut(step);
                low.swap_with_slice(high);
            }
        }
    }

    /// Copy of the table with input `var` inverted
    pub fn flip(&self, var: usize) -> Self {
        let mut tt = self.clone();
        tt.flip_inplace(var);
        tt
    }

    /// Complement of the function
    pub fn not(&self) -> Self {
        let mut tt = self.clone();
        for word in tt.words.iter_mut() {
            *word = !*word;
        }
        tt.mask_unused();
        tt
    }

    pub fn and(&self, other: &TruthTable) -> Self {
        self.zip_with(other, |a, b| a & b)
    }

    pub fn or(&self, other: &TruthTable) -> Self {
        self.zip_with(other, |a, b| a | b)
    }

    pub fn xor(&self, other: &TruthTable) -> Self {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// Hexadecimal rendering, most significant digit first
    pub fn to_hex(&self) -> String {
        let digits = Self::hex_digits(self.num_vars);
        let mut out = String::with_capacity(digits);
        for nibble_index in (0..digits).rev() {
            let shift = nibble_index * 4;
            let nibble = (self.words[shift >> 6] >> (shift & 63)) & 0xF;
            out.push(std::char::from_digit(nibble as u32, 16).unwrap_or('0'));
        }
        out
    }

    /// Binary rendering, most significant bit first
    pub fn to_binary(&self) -> String {
        (0..self.num_bits())
            .rev()
            .map(|index| if self.get_bit(index) { '1' } else { '0' })
            .collect()
    }

    fn zip_with(&self, other: &TruthTable, op: impl Fn(u64, u64) -> u64) -> Self {
        self.check_same_size(other);
        let words = self
            .words
            .iter()
            .zip(other.words.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        TruthTable {
            num_vars: self.num_vars,
            words,
        }
    }

    fn word_mask(&self) -> u64 {
        if self.num_vars >= 6 {
            u64::MAX
        } else {
            (1u64 << (1 << self.num_vars)) - 1
        }
    }

    fn mask_unused(&mut self) {
        if self.num_vars < 6 {
            self.words[0] &= self.word_mask();
        }
    }

    fn check_var(&self, var: usize) {
        assert!(
            var < self.num_vars,
            "variable {} out of range for a {}-variable truth table",
            var,
            self.num_vars
        );
    }

    fn check_same_size(&self, other: &TruthTable) {
        assert_eq!(
            self.num_vars, other.num_vars,
            "truth tables over different variable counts"
        );
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TruthTable({} vars, 0x{})", self.num_vars, self.to_hex())
    }
}

impl Not for &TruthTable {
    type Output = TruthTable;

    fn not(self) -> TruthTable {
        TruthTable::not(self)
    }
}

impl BitAnd for &TruthTable {
    type Output = TruthTable;

    fn bitand(self, rhs: &TruthTable) -> TruthTable {
        self.and(rhs)
    }
}

impl BitOr for &TruthTable {
    type Output = TruthTable;

    fn bitor(self, rhs: &TruthTable) -> TruthTable {
        self.or(rhs)
    }
}

impl BitXor for &TruthTable {
    type Output = TruthTable;

    fn bitxor(self, rhs: &TruthTable) -> TruthTable {
        self.xor(rhs)
    }
}
