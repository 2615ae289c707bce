//! Exclusion set and pre-sampling validation.

use crate::alphabet::CharacterUniverse;
use crate::mask::{Mask, MaskDirective};
use std::collections::HashSet;
use thiserror::Error;

/// Errors raised when a restriction set conflicts with the universe.
#[derive(Debug, Error)]
pub enum RestrictionError {
    /// Every member of a class the mask references is excluded.
    #[error("restriction excludes every {class} character")]
    EmptyClass {
        /// The emptied class, named by the directive referencing it.
        class: MaskDirective,
    },
}

/// A set of symbols excluded from generated output.
///
/// Doubles as the membership filter: sampling asks `is_allowed` per
/// draw. An empty set allows everything.
#[derive(Debug, Clone, Default)]
pub struct RestrictionSet {
    excluded: HashSet<char>,
}

impl RestrictionSet {
    /// An empty set allowing every symbol.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from a string of excluded characters.
    pub fn from_excluded(excluded: &str) -> Self {
        Self {
            excluded: excluded.chars().collect(),
        }
    }

    /// Whether the symbol may appear in generated output.
    pub fn is_allowed(&self, symbol: char) -> bool {
        !self.excluded.contains(&symbol)
    }

    /// Number of excluded symbols.
    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    /// True when nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// Checks that every class the mask references keeps at least one
    /// allowed member.
    ///
    /// Must run before sampling: a fully excluded class would otherwise
    /// only surface as retry exhaustion. Classes the mask never
    /// references are not checked, and excluded characters outside the
    /// universe are harmless.
    pub fn validate_against(
        &self,
        universe: &CharacterUniverse,
        mask: &Mask,
    ) -> Result<(), RestrictionError> {
        for stray in self.excluded.iter().filter(|&&s| !universe.contains(s)) {
            tracing::debug!(symbol = %stray, "restricted character is not in the universe");
        }

        let mut checked: Vec<MaskDirective> = Vec::new();
        for &directive in mask.directives() {
            if checked.contains(&directive) {
                continue;
            }
            checked.push(directive);

            let allowed = universe
                .members(directive)
                .iter()
                .filter(|&&symbol| self.is_allowed(symbol))
                .count();
            if allowed == 0 {
                return Err(RestrictionError::EmptyClass { class: directive });
            }
        }

        Ok(())
    }
}
