//! Character classification rules shared by the normalizer and tokenizer.

use unicode_general_category::{get_general_category, GeneralCategory};

/// U+2019 RIGHT SINGLE QUOTATION MARK, accepted inside words for contractions
/// such as `don’t`.
pub const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

/// Delimiters that close the open sentence.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// How the tokenizer treats a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CharClass {
    /// Extends the open word.
    Word = 0,
    /// Becomes a punctuation element.
    Delimiter = 1,
    /// Becomes a punctuation element and closes the open sentence.
    Terminator = 2,
}

impl CharClass {
    /// Classifies `ch`.
    #[inline(always)]
    pub fn of(ch: char) -> Self {
        if is_word_char(ch) {
            CharClass::Word
        } else if is_sentence_terminator(ch) {
            CharClass::Terminator
        } else {
            CharClass::Delimiter
        }
    }
}

/// Letters (`L*`), decimal digits (`Nd`), the ASCII apostrophe and
/// [`RIGHT_SINGLE_QUOTE`].
///
/// Other numerics (`²`, `½`, `Ⅻ`) and combining marks are delimiters.
#[inline(always)]
pub fn is_word_char(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '\'';
    }
    ch == RIGHT_SINGLE_QUOTE
        || matches!(
            get_general_category(ch),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::DecimalNumber
        )
}

/// One of [`SENTENCE_TERMINATORS`].
#[inline(always)]
pub fn is_sentence_terminator(ch: char) -> bool {
    SENTENCE_TERMINATORS.contains(&ch)
}

/// Characters removed from both ends of the input: every code point up to
/// and including U+0020, which covers ASCII controls but not U+00A0.
#[inline(always)]
pub const fn is_edge_trimmable(ch: char) -> bool {
    ch <= ' '
}

/// Whitespace for the blank-input check.
///
/// Space, line and paragraph separators except the no-break spaces
/// (U+00A0, U+2007, U+202F), plus `\t`..=`\r` and U+001C..=U+001F. U+0085 is
/// not included.
#[inline]
pub fn is_blank_char(ch: char) -> bool {
    match ch {
        '\t'..='\r' | '\u{1C}'..='\u{1F}' => true,
        '\u{A0}' | '\u{2007}' | '\u{202F}' => false,
        _ => matches!(
            get_general_category(ch),
            GeneralCategory::SpaceSeparator
                | GeneralCategory::LineSeparator
                | GeneralCategory::ParagraphSeparator
        ),
    }
}

/// Space or horizontal tab. Newlines are deliberately excluded.
#[inline(always)]
pub const fn is_horizontal_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_class_is_1_byte() {
        assert_eq!(size_of::<CharClass>(), 1);
    }

    #[test]
    fn letters_and_digits_are_word_chars() {
        for ch in ['a', 'Z', 'é', 'ß', 'Я', 'ǅ', 'ʰ', '中', '0', '9', '٣'] {
            assert!(is_word_char(ch), "{ch:?} should be a word char");
        }
    }

    #[test]
    fn non_decimal_numbers_and_marks_are_delimiters() {
        for ch in ['²', '½', 'Ⅻ', '\u{093F}', '\u{0301}'] {
            assert!(!is_word_char(ch), "{ch:?} should not be a word char");
            assert_eq!(CharClass::of(ch), CharClass::Delimiter, "{ch:?}");
        }
    }

    #[test]
    fn apostrophes_are_word_chars() {
        assert!(is_word_char('\''));
        assert!(is_word_char('’'));
    }

    #[test]
    fn other_quotes_are_delimiters() {
        for ch in ['‘', '"', '“', '”', '`', '´'] {
            assert_eq!(CharClass::of(ch), CharClass::Delimiter, "{ch:?}");
        }
    }

    #[test]
    fn terminators() {
        for ch in SENTENCE_TERMINATORS {
            assert_eq!(CharClass::of(ch), CharClass::Terminator);
        }
        assert_eq!(CharClass::of(';'), CharClass::Delimiter);
        assert_eq!(CharClass::of('…'), CharClass::Delimiter);
    }

    #[test]
    fn whitespace_is_delimiter() {
        assert_eq!(CharClass::of(' '), CharClass::Delimiter);
        assert_eq!(CharClass::of('\n'), CharClass::Delimiter);
        assert_eq!(CharClass::of('\t'), CharClass::Delimiter);
    }

    #[test]
    fn edge_trim_stops_above_space() {
        for ch in ['\0', '\u{1}', '\t', '\n', '\r', ' '] {
            assert!(is_edge_trimmable(ch), "{ch:?}");
        }
        for ch in ['!', '\u{85}', '\u{A0}', '\u{3000}'] {
            assert!(!is_edge_trimmable(ch), "{ch:?}");
        }
    }

    #[test]
    fn blank_chars_exclude_no_break_spaces() {
        let blank = [
            ' ', '\t', '\n', '\u{B}', '\u{C}', '\r', '\u{1F}', '\u{2003}', '\u{2028}', '\u{3000}',
        ];
        for ch in blank {
            assert!(is_blank_char(ch), "{ch:?} should be blank");
        }
        for ch in ['\u{A0}', '\u{2007}', '\u{202F}', '\u{85}', '\u{1}', 'a'] {
            assert!(!is_blank_char(ch), "{ch:?} should not be blank");
        }
    }

    #[test]
    fn horizontal_ws_excludes_newlines() {
        assert!(is_horizontal_ws(b' '));
        assert!(is_horizontal_ws(b'\t'));
        assert!(!is_horizontal_ws(b'\n'));
        assert!(!is_horizontal_ws(b'\r'));
    }
}
