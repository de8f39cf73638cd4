//! Sentence case over the raw character stream
//!
//! Sentence case does not go through the tokenizer: terminal marks have to
//! stay where they are, while the tokenizer throws delimiters away. The
//! segmenter makes one left-to-right pass and only ever changes three things:
//!
//! - the first ASCII letter of each sentence is uppercased,
//! - the run of spaces after a terminal mark becomes exactly one space
//!   (one is inserted when the next sentence starts right after the mark),
//! - trailing whitespace is dropped.
//!
//! Every other character, including the interior casing of words, is copied
//! through unchanged.

use std::iter::Peekable;
use std::str::Chars;

use super::character_class::CharacterClass;

/// Apply sentence case to `text`
///
/// The result may be empty when `text` holds nothing but whitespace.
pub fn segment(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 16);
    let mut chars = text.chars().peekable();
    let mut capitalize_next = true;

    while let Some(ch) = chars.next() {
        if capitalize_next && ch.is_ascii_alphabetic() {
            out.push(ch.to_ascii_uppercase());
            capitalize_next = false;
            continue;
        }

        out.push(ch);

        if CharacterClass::of(ch) == CharacterClass::TerminalMark {
            capitalize_next = true;
            collapse_spaces(&mut chars, &mut out);
        }
    }

    out.truncate(out.trim_end().len());
    out
}

/// Replace the spaces following a terminal mark with a single space
///
/// Nothing is written when the mark ends the input.
fn collapse_spaces(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    while chars.next_if_eq(&' ').is_some() {}

    if chars.peek().is_some() {
        out.push(' ');
    }
}
