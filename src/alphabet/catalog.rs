//! Symbol catalog and class partition.
//!
//! The default catalog is the 95 printable ASCII symbols, split into the
//! four named classes. Custom catalogs go through a validating
//! constructor; the default is known-good and built infallibly.

use crate::mask::MaskDirective;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

const DEFAULT_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DEFAULT_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DEFAULT_DIGITS: &str = "1234567890";
const DEFAULT_SYMBOLS: &str = "!@#$%^&*()`~-_=+[{]}\\|;:'\",<.>/? ";

/// Errors for corrupt custom catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A named class was supplied with no members.
    #[error("character class {0} has no members")]
    EmptyClass(CharClass),
    /// The same symbol appears twice, within or across classes.
    #[error("symbol {0:?} appears in more than one class")]
    DuplicateSymbol(char),
    /// The symbol class holds only whitespace, leaving the
    /// no-whitespace pool empty.
    #[error("symbol class contains only whitespace")]
    WhitespaceOnlySymbols,
}

/// The four disjoint partitions of the universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Lowercase letters.
    Lowercase,
    /// Uppercase letters.
    Uppercase,
    /// Decimal digits.
    Digit,
    /// Punctuation and whitespace symbols.
    Symbol,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Digit => "digit",
            Self::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// The ordered alphabet of all usable symbols, partitioned into classes.
///
/// Invariants, enforced at construction: every class is non-empty,
/// classes are disjoint, their union is the universe, and the symbol
/// class keeps at least one non-whitespace member (so the no-whitespace
/// pool is never empty). Immutable once built; build it once per process
/// and share it.
#[derive(Debug, Clone)]
pub struct CharacterUniverse {
    lowercase: Vec<char>,
    uppercase: Vec<char>,
    digits: Vec<char>,
    symbols: Vec<char>,
    /// Derived: `symbols` minus whitespace.
    symbols_no_whitespace: Vec<char>,
    /// Derived: union of the four classes, in catalog order.
    all: Vec<char>,
}

impl Default for CharacterUniverse {
    fn default() -> Self {
        Self::build(
            DEFAULT_LOWERCASE,
            DEFAULT_UPPERCASE,
            DEFAULT_DIGITS,
            DEFAULT_SYMBOLS,
        )
    }
}

impl CharacterUniverse {
    /// Builds a universe from a custom catalog, validating the class
    /// invariants.
    pub fn new(
        lowercase: &str,
        uppercase: &str,
        digits: &str,
        symbols: &str,
    ) -> Result<Self, CatalogError> {
        let classes = [
            (CharClass::Lowercase, lowercase),
            (CharClass::Uppercase, uppercase),
            (CharClass::Digit, digits),
            (CharClass::Symbol, symbols),
        ];

        let mut seen = HashSet::new();
        for (class, members) in classes {
            if members.is_empty() {
                return Err(CatalogError::EmptyClass(class));
            }
            for symbol in members.chars() {
                if !seen.insert(symbol) {
                    return Err(CatalogError::DuplicateSymbol(symbol));
                }
            }
        }

        if symbols.chars().all(char::is_whitespace) {
            return Err(CatalogError::WhitespaceOnlySymbols);
        }

        Ok(Self::build(lowercase, uppercase, digits, symbols))
    }

    /// Assembles the pools without validation; callers guarantee the
    /// catalog invariants.
    fn build(lowercase: &str, uppercase: &str, digits: &str, symbols: &str) -> Self {
        let lowercase: Vec<char> = lowercase.chars().collect();
        let uppercase: Vec<char> = uppercase.chars().collect();
        let digits: Vec<char> = digits.chars().collect();
        let symbols: Vec<char> = symbols.chars().collect();

        let symbols_no_whitespace: Vec<char> = symbols
            .iter()
            .copied()
            .filter(|symbol| !symbol.is_whitespace())
            .collect();

        let mut all =
            Vec::with_capacity(lowercase.len() + uppercase.len() + digits.len() + symbols.len());
        all.extend_from_slice(&lowercase);
        all.extend_from_slice(&uppercase);
        all.extend_from_slice(&digits);
        all.extend_from_slice(&symbols);

        Self {
            lowercase,
            uppercase,
            digits,
            symbols,
            symbols_no_whitespace,
            all,
        }
    }

    /// Members of one named class, in catalog order.
    pub fn class_members(&self, class: CharClass) -> &[char] {
        match class {
            CharClass::Lowercase => &self.lowercase,
            CharClass::Uppercase => &self.uppercase,
            CharClass::Digit => &self.digits,
            CharClass::Symbol => &self.symbols,
        }
    }

    /// The whole universe, in catalog order.
    pub fn all_members(&self) -> &[char] {
        &self.all
    }

    /// The sampling pool for a mask directive.
    ///
    /// Never empty for a validated universe.
    pub fn members(&self, directive: MaskDirective) -> &[char] {
        match directive {
            MaskDirective::Any => &self.all,
            MaskDirective::Lowercase => &self.lowercase,
            MaskDirective::Uppercase => &self.uppercase,
            MaskDirective::Digit => &self.digits,
            MaskDirective::SymbolNoWhitespace => &self.symbols_no_whitespace,
            MaskDirective::SymbolAny => &self.symbols,
        }
    }

    /// Whether the symbol is part of the universe.
    pub fn contains(&self, symbol: char) -> bool {
        self.all.contains(&symbol)
    }

    /// Number of symbols in the universe.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// True for a universe with no symbols (unreachable when validated).
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
