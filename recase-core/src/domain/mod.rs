//! Conversion algorithms
//!
//! The tokenizing styles run [`tokenize`] then [`Recombiner::recombine`];
//! sentence case runs [`sentence::segment`] over the raw characters.

pub mod character_class;
pub mod recombiner;
pub mod sentence;
pub mod tokenizer;

pub use character_class::CharacterClass;
pub use recombiner::{LetterCase, Recombiner};
pub use tokenizer::{tokenize, BoundaryRule, Fragments};
