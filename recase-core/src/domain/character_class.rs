//! Character classification for word and sentence boundaries

/// Classification of characters for boundary detection
///
/// Only ASCII letters and digits count as word characters. Everything else,
/// including non-ASCII letters, is a delimiter for the tokenizing styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
    /// ASCII lowercase letter
    Lowercase,
    /// ASCII uppercase letter
    Uppercase,
    /// ASCII digit
    Digit,
    /// Sentence-ending punctuation (`.`, `!`, `?`)
    TerminalMark,
    /// The space character
    Space,
    /// Any other character
    Other,
}

impl CharacterClass {
    /// Classify a character
    #[inline]
    pub fn of(ch: char) -> Self {
        match ch {
            'a'..='z' => CharacterClass::Lowercase,
            'A'..='Z' => CharacterClass::Uppercase,
            '0'..='9' => CharacterClass::Digit,
            '.' | '!' | '?' => CharacterClass::TerminalMark,
            ' ' => CharacterClass::Space,
            _ => CharacterClass::Other,
        }
    }

    /// Letters and digits; the characters a fragment is made of
    #[inline]
    pub fn is_word(self) -> bool {
        matches!(
            self,
            CharacterClass::Lowercase | CharacterClass::Uppercase | CharacterClass::Digit
        )
    }

    /// Whether a split falls between `self` and a directly following `next`
    /// with no delimiter in between (the hump in `myVariable`)
    #[inline]
    pub fn is_hump(self, next: CharacterClass) -> bool {
        self == CharacterClass::Lowercase && next == CharacterClass::Uppercase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ascii() {
        assert_eq!(CharacterClass::of('a'), CharacterClass::Lowercase);
        assert_eq!(CharacterClass::of('Z'), CharacterClass::Uppercase);
        assert_eq!(CharacterClass::of('7'), CharacterClass::Digit);
        assert_eq!(CharacterClass::of('!'), CharacterClass::TerminalMark);
        assert_eq!(CharacterClass::of(' '), CharacterClass::Space);
        assert_eq!(CharacterClass::of('_'), CharacterClass::Other);
        assert_eq!(CharacterClass::of('\t'), CharacterClass::Other);
    }

    #[test]
    fn test_non_ascii_letters_are_not_word_characters() {
        assert!(!CharacterClass::of('é').is_word());
        assert!(!CharacterClass::of('日').is_word());
    }

    #[test]
    fn test_hump_detection() {
        let lower = CharacterClass::Lowercase;
        let upper = CharacterClass::Uppercase;
        let digit = CharacterClass::Digit;

        assert!(lower.is_hump(upper));
        assert!(!upper.is_hump(upper));
        assert!(!upper.is_hump(lower));
        assert!(!digit.is_hump(upper));
    }
}
