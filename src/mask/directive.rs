//! Per-position character-class directives.

use std::fmt;

/// The class a single password position must draw from.
///
/// One directive per mask character, created during compilation and
/// immutable afterwards. Every variant maps to a non-empty pool in a
/// validated universe, so a compiled mask can always be sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskDirective {
    /// Any symbol from the full universe (`*`, or its alias `a`).
    Any,
    /// A lowercase letter (`l`).
    Lowercase,
    /// An uppercase letter (`L`).
    Uppercase,
    /// A decimal digit (`d`).
    Digit,
    /// A symbol, whitespace excluded (`s`).
    SymbolNoWhitespace,
    /// A symbol, whitespace included (`?`).
    SymbolAny,
}

impl MaskDirective {
    /// Maps a mask character to its directive, `None` when invalid.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '*' | 'a' => Some(Self::Any),
            'l' => Some(Self::Lowercase),
            'L' => Some(Self::Uppercase),
            'd' => Some(Self::Digit),
            's' => Some(Self::SymbolNoWhitespace),
            '?' => Some(Self::SymbolAny),
            _ => None,
        }
    }

    /// The canonical mask character for this directive.
    pub fn symbol(self) -> char {
        match self {
            Self::Any => '*',
            Self::Lowercase => 'l',
            Self::Uppercase => 'L',
            Self::Digit => 'd',
            Self::SymbolNoWhitespace => 's',
            Self::SymbolAny => '?',
        }
    }
}

impl fmt::Display for MaskDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "any",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digit => "digit",
            Self::SymbolNoWhitespace => "symbol",
            Self::SymbolAny => "symbol-any",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_grammar_symbol_maps() {
        assert_eq!(MaskDirective::from_symbol('*'), Some(MaskDirective::Any));
        assert_eq!(MaskDirective::from_symbol('a'), Some(MaskDirective::Any));
        assert_eq!(
            MaskDirective::from_symbol('l'),
            Some(MaskDirective::Lowercase)
        );
        assert_eq!(
            MaskDirective::from_symbol('L'),
            Some(MaskDirective::Uppercase)
        );
        assert_eq!(MaskDirective::from_symbol('d'), Some(MaskDirective::Digit));
        assert_eq!(
            MaskDirective::from_symbol('s'),
            Some(MaskDirective::SymbolNoWhitespace)
        );
        assert_eq!(
            MaskDirective::from_symbol('?'),
            Some(MaskDirective::SymbolAny)
        );
    }

    #[test]
    fn test_invalid_symbols_rejected() {
        for symbol in ['9', 'x', 'D', ' ', '!'] {
            assert_eq!(MaskDirective::from_symbol(symbol), None);
        }
    }

    #[test]
    fn test_canonical_symbol_round_trips() {
        for directive in [
            MaskDirective::Any,
            MaskDirective::Lowercase,
            MaskDirective::Uppercase,
            MaskDirective::Digit,
            MaskDirective::SymbolNoWhitespace,
            MaskDirective::SymbolAny,
        ] {
            assert_eq!(
                MaskDirective::from_symbol(directive.symbol()),
                Some(directive)
            );
        }
    }
}
