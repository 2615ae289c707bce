//! The character universe and its named classes.
//!
//! This module owns the catalog of usable symbols: the full ordered
//! alphabet, its partition into disjoint classes (lowercase, uppercase,
//! digit, symbol), and the derived pools sampling draws from.

mod catalog;

pub use catalog::{CatalogError, CharClass, CharacterUniverse};
