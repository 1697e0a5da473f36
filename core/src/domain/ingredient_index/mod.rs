//! Prefix index over ingredient names.
//!
//! The classifier does not read from it; it backs keyword suggestions.

pub mod keywords;
pub mod trie;

pub use keywords::{KeywordLevel, KeywordSource, KeywordSuggestion};
pub use trie::IngredientTrie;
