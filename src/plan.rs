//! Width planning: picks one radix or one factoradic field width per window so
//! every label in the window has the same length while scrolling.

use crate::alphabet::Alphabet;
use crate::convert::{to_base, to_factoradic};
use crate::error::{invalid, NumeralResult};
use crate::format::left_pad;
use num_bigint::BigInt;
use num_traits::One;

/// Which converter and width rule a render pass uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// Every label has exactly `length` digits; the radix grows with the document.
    FixedLength(u32),
    Factoradic,
}

impl Default for NumeralSystem {
    fn default() -> Self {
        NumeralSystem::FixedLength(3)
    }
}

/// Smallest radix `b` in `[2, alphabet_len]` with `b^length >= max_label`.
///
/// When even `alphabet_len` digits are too few, the largest available radix is
/// returned and the caller's labels get truncated instead of failing.
pub fn fixed_base(max_label: &BigInt, length: u32, alphabet_len: usize) -> NumeralResult<usize> {
    if length == 0 { invalid!("Fixed length must be >= 1."); }
    if alphabet_len < 2 { invalid!("Alphabet length must be >= 2, got {}.", alphabet_len); }

    // 2^length already covers anything with at most `length` bits.
    if u64::from(length) >= max_label.bits() { return Ok(2); }

    let fits = |base: usize| BigInt::from(base).pow(length) >= *max_label;
    if !fits(alphabet_len) { return Ok(alphabet_len); }

    let (mut low, mut high) = (2, alphabet_len);
    while low < high {
        let mid = low + (high - low) / 2;
        if fits(mid) { high = mid; } else { low = mid + 1; }
    }
    Ok(low)
}

/// Smallest `k >= 1` whose factorial is at least `n`.
pub fn inverse_factorial(n: &BigInt) -> NumeralResult<u32> {
    if *n < BigInt::one() { invalid!("Number must be > 0, got {}.", n); }

    let mut k = 1u32;
    let mut factorial = BigInt::one();
    while factorial < *n {
        k += 1;
        factorial *= k;
    }
    Ok(k)
}

/// Field width shared by all factoradic labels up to `max_label`.
///
/// This is `max(2, k - 1)` for the inverse factorial `k`. A value equal to
/// `k!` needs `k` digits and so loses its leading digit; labels keep a stable
/// width instead of growing at that one line.
pub fn factoradic_width(max_label: &BigInt) -> NumeralResult<usize> {
    let k = inverse_factorial(max_label)? as usize;
    Ok(k.saturating_sub(1).max(2))
}

/// The radix/width decision for one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthPlan {
    Fixed { base: usize, width: usize },
    Factoradic { width: usize },
}

impl WidthPlan {
    pub fn for_window(system: NumeralSystem, max_label: &BigInt, alphabet: &Alphabet) -> NumeralResult<WidthPlan> {
        match system {
            NumeralSystem::FixedLength(length) => Ok(WidthPlan::Fixed {
                base: fixed_base(max_label, length, alphabet.len())?,
                width: length as usize,
            }),
            NumeralSystem::Factoradic => Ok(WidthPlan::Factoradic {
                width: factoradic_width(max_label)?,
            }),
        }
    }

    pub fn width(&self) -> usize {
        match *self {
            WidthPlan::Fixed { width, .. } | WidthPlan::Factoradic { width } => width,
        }
    }

    /// Converts `value` and pads or truncates it to the planned width.
    pub fn encode(&self, value: &BigInt, alphabet: &Alphabet) -> NumeralResult<String> {
        let raw = match *self {
            WidthPlan::Fixed { base, .. } => to_base(value, base, alphabet)?,
            WidthPlan::Factoradic { .. } => to_factoradic(value, alphabet)?,
        };
        Ok(left_pad(&raw, alphabet.zero(), self.width()))
    }
}
