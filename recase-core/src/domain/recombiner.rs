//! Per-fragment casing and joining

use crate::CaseKind;

/// Letter case applied to a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Lower,
    Upper,
}

impl LetterCase {
    #[inline]
    fn push(self, ch: char, out: &mut String) {
        match self {
            LetterCase::Lower => out.extend(ch.to_lowercase()),
            LetterCase::Upper => out.extend(ch.to_uppercase()),
        }
    }
}

/// Casing rules and separator of one tokenizing case style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recombiner {
    /// Case of the first character of the first fragment
    pub leading: LetterCase,
    /// Case of the first character of every later fragment
    pub word_start: LetterCase,
    /// Case of every other character
    pub remainder: LetterCase,
    /// Inserted between fragments
    pub separator: &'static str,
}

impl Recombiner {
    /// Rules for a tokenizing case style, `None` for the others
    pub fn for_kind(kind: CaseKind) -> Option<Self> {
        use LetterCase::{Lower, Upper};

        let (leading, word_start, remainder, separator) = match kind {
            CaseKind::PascalCase => (Upper, Upper, Lower, ""),
            CaseKind::CamelCase => (Lower, Upper, Lower, ""),
            CaseKind::SnakeCase => (Lower, Lower, Lower, "_"),
            CaseKind::KebabCase => (Lower, Lower, Lower, "-"),
            CaseKind::ConstantCase => (Upper, Upper, Upper, "_"),
            CaseKind::StartCase => (Upper, Upper, Lower, " "),
            CaseKind::Uppercase | CaseKind::LowerCase | CaseKind::SentenceCase => return None,
        };

        Some(Self {
            leading,
            word_start,
            remainder,
            separator,
        })
    }

    /// Case every fragment and join them with the separator
    pub fn recombine(&self, fragments: &[&str]) -> String {
        let capacity = fragments.iter().map(|f| f.len()).sum::<usize>()
            + self.separator.len() * fragments.len().saturating_sub(1);
        let mut out = String::with_capacity(capacity);

        for (index, fragment) in fragments.iter().enumerate() {
            if index > 0 {
                out.push_str(self.separator);
            }

            let first_case = if index == 0 {
                self.leading
            } else {
                self.word_start
            };

            let mut chars = fragment.chars();
            if let Some(first) = chars.next() {
                first_case.push(first, &mut out);
            }
            for ch in chars {
                self.remainder.push(ch, &mut out);
            }
        }

        out
    }
}
