//! ASCII font encoding to Unicode Gurmukhi.
//!
//! The font encoding is glyph-ordered: the sihari vowel sign is typed
//! *before* the consonant it attaches to, while Unicode places every
//! dependent vowel after its base. Independent vowels are typed as a
//! bearer-plus-sign pair and collapse to the dedicated Unicode codepoints.

/// Convert ASCII font-encoded Gurmukhi to Unicode.
///
/// Characters with no mapping (spaces, vishraam marks, Latin digits in
/// mixed annotations, anything already Unicode) pass through unchanged.
pub fn to_unicode(akhar: &str) -> String {
    let mut out = String::with_capacity(akhar.len() * 3);
    let mut chars = akhar.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // Pre-base sihari: emit the base consonant (and any subjoined
            // letters attached to it) first, then the vowel sign.
            'i' => match chars.peek().copied() {
                Some('e') => {
                    chars.next();
                    out.push('ਇ');
                }
                Some(n) if consonant(n).is_some() => {
                    chars.next();
                    out.push(consonant(n).unwrap());
                    while let Some(sub) = chars.peek().copied().and_then(subjoined) {
                        chars.next();
                        out.push_str(sub);
                    }
                    out.push('ਿ');
                }
                _ => out.push('ਿ'),
            },

            // Bearer + sign pairs for the independent vowels.
            'a' => match chars.peek().copied() {
                Some('u') => {
                    chars.next();
                    out.push('ਉ');
                }
                Some('U') => {
                    chars.next();
                    out.push('ਊ');
                }
                _ => out.push('ੳ'),
            },
            'A' => match chars.peek().copied() {
                Some('w') => {
                    chars.next();
                    out.push('ਆ');
                }
                Some('Y') => {
                    chars.next();
                    out.push('ਐ');
                }
                Some('O') => {
                    chars.next();
                    out.push('ਔ');
                }
                _ => out.push('ਅ'),
            },
            'e' => match chars.peek().copied() {
                Some('y') => {
                    chars.next();
                    out.push('ਏ');
                }
                Some('I') => {
                    chars.next();
                    out.push('ਈ');
                }
                _ => out.push('ੲ'),
            },

            '<' => {
                if chars.peek() == Some(&'>') {
                    chars.next();
                    out.push('ੴ');
                } else {
                    out.push('<');
                }
            }

            // Ligature key for nanna + dulainkar + tippi
            'ƒ' => out.push_str("ਨੂੰ"),

            c => {
                if let Some(k) = consonant(c) {
                    out.push(k);
                } else if let Some(sub) = subjoined(c) {
                    out.push_str(sub);
                } else if let Some(m) = sign(c) {
                    out.push(m);
                } else {
                    out.push(c);
                }
            }
        }
    }

    out
}

fn consonant(c: char) -> Option<char> {
    match c {
        's' => Some('ਸ'),
        'h' => Some('ਹ'),
        'k' => Some('ਕ'),
        'K' => Some('ਖ'),
        'g' => Some('ਗ'),
        'G' => Some('ਘ'),
        '|' => Some('ਙ'),
        'c' => Some('ਚ'),
        'C' => Some('ਛ'),
        'j' => Some('ਜ'),
        'J' => Some('ਝ'),
        '\\' => Some('ਞ'),
        't' => Some('ਟ'),
        'T' => Some('ਠ'),
        'f' => Some('ਡ'),
        'F' => Some('ਢ'),
        'x' => Some('ਣ'),
        'q' => Some('ਤ'),
        'Q' => Some('ਥ'),
        'd' => Some('ਦ'),
        'D' => Some('ਧ'),
        'n' => Some('ਨ'),
        'p' => Some('ਪ'),
        'P' => Some('ਫ'),
        'b' => Some('ਬ'),
        'B' => Some('ਭ'),
        'm' => Some('ਮ'),
        'X' => Some('ਯ'),
        'r' => Some('ਰ'),
        'l' => Some('ਲ'),
        'v' => Some('ਵ'),
        'V' => Some('ੜ'),
        // Nukta (Persianized) consonants
        'S' => Some('\u{0A36}'),
        'z' => Some('\u{0A5B}'),
        'Z' => Some('\u{0A5A}'),
        'L' => Some('\u{0A33}'),
        '^' => Some('\u{0A59}'),
        '&' => Some('\u{0A5E}'),
        _ => None,
    }
}

fn subjoined(c: char) -> Option<&'static str> {
    match c {
        'R' => Some("\u{0A4D}ਰ"),
        'H' => Some("\u{0A4D}ਹ"),
        _ => None,
    }
}

fn sign(c: char) -> Option<char> {
    match c {
        'w' => Some('ਾ'),
        'I' => Some('ੀ'),
        'u' => Some('ੁ'),
        'U' => Some('ੂ'),
        'y' => Some('ੇ'),
        'Y' => Some('ੈ'),
        'o' => Some('ੋ'),
        'O' => Some('ੌ'),
        'M' => Some('ੰ'),
        'N' => Some('ਂ'),
        '~' | '`' => Some('ੱ'),
        'E' => Some('ਓ'),
        '0' => Some('੦'),
        '1' => Some('੧'),
        '2' => Some('੨'),
        '3' => Some('੩'),
        '4' => Some('੪'),
        '5' => Some('੫'),
        '6' => Some('੬'),
        '7' => Some('੭'),
        '8' => Some('੮'),
        '9' => Some('੯'),
        ']' => Some('॥'),
        '[' => Some('।'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_plain_consonants_and_vowel_signs() {
        assert_eq!(to_unicode("sq nwmu"), "ਸਤ ਨਾਮੁ");
    }

    #[test]
    fn reorders_sihari_after_its_consonant() {
        assert_eq!(to_unicode("siqgur"), "ਸਤਿਗੁਰ");
    }

    #[test]
    fn sihari_skips_past_subjoined_letters() {
        // ASCII key order is i-k-R; Unicode order is ka, virama, ra, sihari
        assert_eq!(to_unicode("ikRpw"), "ਕ੍ਰਿਪਾ");
    }

    #[test]
    fn converts_subjoined_cluster() {
        assert_eq!(to_unicode("pRswid"), "ਪ੍ਰਸਾਦਿ");
    }

    #[test]
    fn composes_independent_vowels() {
        assert_eq!(to_unicode("Awieau"), "ਆਇਉ");
        assert_eq!(to_unicode("eyk"), "ਏਕ");
    }

    #[test]
    fn converts_dandas_and_digits() {
        assert_eq!(to_unicode("]1]"), "॥੧॥");
    }

    #[test]
    fn converts_ik_onkar_ligature() {
        assert_eq!(to_unicode("<> siq"), "ੴ ਸਤਿ");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(to_unicode("sq; nwmu"), "ਸਤ; ਨਾਮੁ");
        assert_eq!(to_unicode(""), "");
    }

    #[test]
    fn trailing_sihari_is_kept() {
        assert_eq!(to_unicode("si"), "ਸਿ");
    }
}
