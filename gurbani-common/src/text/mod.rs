//! Text pipeline: annotation stripping, larivaar reflow, candidate selection

pub mod translation;
pub mod transliteration;

pub use translation::{
    select_translation, ENGLISH_SOURCES, PUNJABI_SOURCES, SPANISH_SOURCES,
};
pub use transliteration::select_transliteration;

/// Remove vishraam pause marks from scripture text
///
/// The corpus embeds its pause annotations as the ASCII characters `;` `,`
/// and `.`; everything else, spacing included, is preserved exactly.
pub fn strip_vishraams(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, ';' | ',' | '.')).collect()
}

/// Reflow word-spaced text into the continuous larivaar rendering
///
/// Only literal word-separating spaces are removed; structural tokens such
/// as the danda survive unchanged.
pub fn to_larivaar(text: &str) -> String {
    text.chars().filter(|c| *c != ' ').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_three_vishraam_marks() {
        assert_eq!(strip_vishraams("so dru; kyhw. so Gru,"), "so dru kyhw so Gru");
    }

    #[test]
    fn strip_preserves_spacing_and_danda() {
        assert_eq!(strip_vishraams("siq; nwmu ]"), "siq nwmu ]");
    }

    #[test]
    fn strip_is_idempotent() {
        let once = strip_vishraams("gwvY, ko; jwpY.");
        assert_eq!(strip_vishraams(&once), once);
    }

    #[test]
    fn strip_passes_clean_text_through() {
        assert_eq!(strip_vishraams("siq nwmu"), "siq nwmu");
        assert_eq!(strip_vishraams(""), "");
    }

    #[test]
    fn larivaar_removes_every_word_space() {
        let out = to_larivaar("siq nwmu krqw purKu");
        assert!(!out.contains(' '));
        assert_eq!(out, "siqnwmukrqwpurKu");
    }

    #[test]
    fn larivaar_keeps_non_space_tokens() {
        assert_eq!(to_larivaar("siq nwmu ]"), "siqnwmu]");
    }

    #[test]
    fn larivaar_preserves_non_space_character_count() {
        let input = "gur prswid ]";
        let expected: usize = input.chars().filter(|c| *c != ' ').count();
        assert_eq!(to_larivaar(input).chars().count(), expected);
    }

    #[test]
    fn larivaar_applies_to_unicode_text_as_well() {
        assert_eq!(to_larivaar("ਸਤਿ ਨਾਮੁ ॥"), "ਸਤਿਨਾਮੁ॥");
    }
}
