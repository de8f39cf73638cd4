//! Word tokenization for the tokenizing case styles

use smallvec::SmallVec;

use super::character_class::CharacterClass;
use crate::CaseKind;

/// Word fragments of one input, borrowed from it, in source order
pub type Fragments<'a> = SmallVec<[&'a str; 8]>;

/// Where the tokenizer splits its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    /// Split on runs of characters that are neither ASCII letters nor ASCII
    /// digits, and between a lowercase letter and a following uppercase one
    Delimiter,
    /// Split on the space character only
    Space,
}

impl BoundaryRule {
    /// Boundary rule used by a tokenizing case style
    ///
    /// Start case splits on spaces; every other style splits on delimiters.
    pub fn for_kind(kind: CaseKind) -> Self {
        match kind {
            CaseKind::StartCase => BoundaryRule::Space,
            _ => BoundaryRule::Delimiter,
        }
    }
}

/// Split `text` into trimmed, non-empty fragments
pub fn tokenize(text: &str, rule: BoundaryRule) -> Fragments<'_> {
    let raw = match rule {
        BoundaryRule::Delimiter => split_on_delimiters(text),
        BoundaryRule::Space => text.split(' ').collect(),
    };

    raw.into_iter()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Scan adjacent character pairs, cutting at delimiter runs and case humps
fn split_on_delimiters(text: &str) -> Fragments<'_> {
    let mut fragments = Fragments::new();
    let mut start: Option<usize> = None;
    let mut prev = CharacterClass::Other;

    for (offset, ch) in text.char_indices() {
        let class = CharacterClass::of(ch);

        if !class.is_word() {
            if let Some(begin) = start.take() {
                fragments.push(&text[begin..offset]);
            }
        } else {
            match start {
                Some(begin) if prev.is_hump(class) => {
                    fragments.push(&text[begin..offset]);
                    start = Some(offset);
                }
                Some(_) => {}
                None => start = Some(offset),
            }
        }

        prev = class;
    }

    if let Some(begin) = start {
        fragments.push(&text[begin..]);
    }

    fragments
}
