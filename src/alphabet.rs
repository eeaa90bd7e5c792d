use crate::error::{invalid, NumeralResult};
use lazy_static::lazy_static;
use std::collections::HashSet;

pub const DECIMAL_DIGITS: &str = "0123456789";

lazy_static! {
    static ref DECIMAL: Alphabet = Alphabet {
        symbols: DECIMAL_DIGITS.chars().collect(),
    };
}

/// Ordered digit symbols. `symbols[0]` doubles as the zero digit and the pad character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from its configured text.
    ///
    /// Repeated symbols are kept in place; only the number of distinct symbols
    /// is checked, and it must be at least two.
    pub fn parse(text: &str) -> NumeralResult<Alphabet> {
        let symbols: Vec<char> = text.chars().collect();
        let distinct = symbols.iter().collect::<HashSet<_>>().len();
        if distinct < 2 {
            invalid!("Alphabet {:?} has {} distinct symbols, at least 2 are required.", text, distinct);
        }
        Ok(Alphabet { symbols })
    }

    /// The ten decimal digits.
    pub fn decimal() -> Alphabet {
        DECIMAL.clone()
    }

    /// Parses a configured value, falling back to decimal digits when it is absent or unusable.
    pub fn from_config(text: Option<&str>) -> Alphabet {
        text.and_then(|t| Alphabet::parse(t).ok())
            .unwrap_or_else(Alphabet::decimal)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false: construction guarantees at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_symbol_order() {
        let alphabet = Alphabet::parse("abc").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.zero(), 'a');
        assert_eq!(alphabet.symbol(2), Some('c'));
        assert_eq!(alphabet.symbol(3), None);
    }

    #[test]
    fn parse_counts_unicode_scalars() {
        let alphabet = Alphabet::parse("←↑→↓").unwrap();
        assert_eq!(alphabet.len(), 4);
        assert_eq!(alphabet.symbol(1), Some('↑'));
        assert_eq!(alphabet.as_string(), "←↑→↓");
    }

    #[test]
    fn parse_rejects_fewer_than_two_distinct_symbols() {
        assert!(Alphabet::parse("").is_err());
        assert!(Alphabet::parse("x").is_err());
        assert!(Alphabet::parse("xxxx").is_err());
        assert!(Alphabet::parse("xxy").is_ok());
    }

    #[test]
    fn from_config_falls_back_to_decimal() {
        assert_eq!(Alphabet::from_config(None), Alphabet::decimal());
        assert_eq!(Alphabet::from_config(Some("7")), Alphabet::decimal());
        assert_eq!(Alphabet::from_config(Some("01")).as_string(), "01");
        assert_eq!(Alphabet::default().as_string(), DECIMAL_DIGITS);
    }
}
