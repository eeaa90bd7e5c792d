//! Integer to digit-string conversion: fixed radix and factorial number system.
//!
//! Both converters work on exact `BigInt` arithmetic and emit the most
//! significant digit first.

use crate::alphabet::Alphabet;
use crate::error::{invalid, NumeralResult};
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

fn symbol_for(remainder: &BigInt, alphabet: &Alphabet) -> NumeralResult<char> {
    match remainder.to_usize().and_then(|digit| alphabet.symbol(digit)) {
        Some(symbol) => Ok(symbol),
        None => invalid!("Digit {} has no symbol in an alphabet of {}.", remainder, alphabet.len()),
    }
}

/// Writes `x` in positional notation with the given radix.
pub fn to_base(x: &BigInt, base: usize, alphabet: &Alphabet) -> NumeralResult<String> {
    if x.sign() == Sign::Minus { invalid!("Number must be >= 0, got {}.", x); }
    if base < 2 { invalid!("Radix must be >= 2, got {}.", base); }
    if base > alphabet.len() {
        invalid!("Radix {} exceeds the alphabet length {}.", base, alphabet.len());
    }

    if x.is_zero() { return Ok(alphabet.zero().to_string()); }

    let radix = BigInt::from(base);
    let mut digits = Vec::new();
    let mut rest = x.clone();
    while !rest.is_zero() {
        digits.push(symbol_for(&(&rest % &radix), alphabet)?);
        rest /= &radix;
    }
    Ok(digits.iter().rev().collect())
}

/// Writes `x` in the factorial number system.
///
/// Place `i` (counting from the least significant, starting at radix 2) holds
/// `(x mod i) mod alphabet.len()`. When the alphabet is shorter than a place's
/// natural range the digit wraps around, so small alphabets give lossy labels.
/// That trade keeps every label inside the configured symbol set.
pub fn to_factoradic(x: &BigInt, alphabet: &Alphabet) -> NumeralResult<String> {
    if x.sign() == Sign::Minus { invalid!("Number must be >= 0, got {}.", x); }

    if x.is_zero() { return Ok(alphabet.zero().to_string()); }

    let symbol_count = BigInt::from(alphabet.len());
    let mut digits = Vec::new();
    let mut rest = x.clone();
    let mut radix = BigInt::from(2);
    while !rest.is_zero() {
        let digit = (&rest % &radix) % &symbol_count;
        digits.push(symbol_for(&digit, alphabet)?);
        rest /= &radix;
        radix += 1;
    }
    Ok(digits.iter().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    fn decimal() -> Alphabet {
        Alphabet::decimal()
    }

    fn decode(text: &str, base: usize, alphabet: &Alphabet) -> BigInt {
        let symbols: Vec<char> = alphabet.as_string().chars().collect();
        text.chars().fold(BigInt::zero(), |acc, c| {
            let digit = symbols.iter().position(|&s| s == c).unwrap();
            acc * BigInt::from(base) + BigInt::from(digit)
        })
    }

    #[test]
    fn zero_is_the_zero_symbol() {
        let alphabet = Alphabet::parse("ab").unwrap();
        assert_eq!(to_base(&BigInt::zero(), 2, &alphabet).unwrap(), "a");
        assert_eq!(to_base(&BigInt::zero(), 10, &decimal()).unwrap(), "0");
        assert_eq!(to_factoradic(&BigInt::zero(), &alphabet).unwrap(), "a");
    }

    #[test]
    fn to_base_matches_std_formatting() {
        let alphabet = Alphabet::parse("0123456789abcdef").unwrap();
        for x in [1u64, 7, 8, 255, 256, 4095, 65_535, 1_000_003] {
            let value = BigInt::from(x);
            assert_eq!(to_base(&value, 2, &alphabet).unwrap(), format!("{:b}", x));
            assert_eq!(to_base(&value, 8, &alphabet).unwrap(), format!("{:o}", x));
            assert_eq!(to_base(&value, 10, &alphabet).unwrap(), x.to_string());
            assert_eq!(to_base(&value, 16, &alphabet).unwrap(), format!("{:x}", x));
        }
    }

    #[test]
    fn to_base_decodes_back_for_custom_alphabets() {
        let alphabet = Alphabet::parse("xyzw").unwrap();
        for x in 0..200u32 {
            for base in 2..=4 {
                let text = to_base(&BigInt::from(x), base, &alphabet).unwrap();
                assert!(text.chars().all(|c| "xyzw".contains(c)));
                assert_eq!(decode(&text, base, &alphabet), BigInt::from(x));
            }
        }
    }

    #[test]
    fn to_base_is_exact_beyond_float_precision() {
        let x: BigInt = (BigInt::one() << 80u32) + 1;
        let text = to_base(&x, 2, &decimal()).unwrap();
        assert_eq!(text.len(), 81);
        assert!(text.starts_with('1') && text.ends_with('1'));
        assert_eq!(decode(&text, 2, &decimal()), x);
    }

    #[test]
    fn to_base_rejects_invalid_arguments() {
        let alphabet = decimal();
        assert!(to_base(&BigInt::from(-1), 10, &alphabet).is_err());
        assert!(to_base(&BigInt::from(5), 1, &alphabet).is_err());
        assert!(to_base(&BigInt::from(5), 0, &alphabet).is_err());
        assert!(matches!(
            to_base(&BigInt::from(5), 11, &alphabet),
            Err(crate::error::NumeralError::InvalidArgument(_))
        ));
    }

    #[test]
    fn factoradic_known_values() {
        let alphabet = decimal();
        let cases = [(1, "1"), (2, "10"), (5, "21"), (6, "100"), (7, "101"), (23, "321"), (24, "1000"), (463, "34101")];
        for (x, expected) in cases {
            assert_eq!(to_factoradic(&BigInt::from(x), &alphabet).unwrap(), expected, "x = {}", x);
        }
    }

    #[test]
    fn factoradic_wraps_digits_for_small_alphabets() {
        // 23 is 3:2:1 in factoradic; with two symbols the digits 3 and 2 wrap to 1 and 0.
        let alphabet = Alphabet::parse("01").unwrap();
        assert_eq!(to_factoradic(&BigInt::from(23), &alphabet).unwrap(), "101");
    }

    #[test]
    fn factoradic_length_never_decreases() {
        let alphabet = decimal();
        let mut previous = 0;
        for x in 0..5_000u32 {
            let len = to_factoradic(&BigInt::from(x), &alphabet).unwrap().chars().count();
            assert!(len >= previous, "length dropped at {}", x);
            previous = len;
        }
    }

    #[test]
    fn factoradic_rejects_negative_input() {
        assert!(to_factoradic(&BigInt::from(-3), &decimal()).is_err());
    }
}
