//! # Gurmukhi Script Conversion
//!
//! Conversion between the ASCII font encoding used by the scripture corpus
//! ("akhar" text, one keystroke per glyph) and Unicode Gurmukhi, plus the
//! reverse direction used to render Unicode Punjabi prose in the font
//! encoding.
//!
//! Both conversions are pure and total: characters outside the mapping pass
//! through unchanged, so mixed or already-converted input degrades gracefully
//! instead of failing.

mod ascii;
mod unicode;

pub use ascii::to_ascii;
pub use unicode::to_unicode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_simple_words() {
        let akhar = "nwnku";
        assert_eq!(to_ascii(&to_unicode(akhar)), akhar);
    }

    #[test]
    fn round_trips_sihari_reordering() {
        let akhar = "siqgur";
        assert_eq!(to_ascii(&to_unicode(akhar)), akhar);
    }

    #[test]
    fn round_trips_subjoined_cluster() {
        let akhar = "pRswid";
        assert_eq!(to_ascii(&to_unicode(akhar)), akhar);
    }
}
