//! Unicode Gurmukhi to the ASCII font encoding.
//!
//! Used for the akhar rendering of Unicode Punjabi prose (translations are
//! stored in Unicode). Inverts the character map, moves the sihari back in
//! front of its base, and collapses virama clusters to their single-key
//! subjoined forms.

/// Convert Unicode Gurmukhi to the ASCII font encoding.
///
/// Unmapped characters pass through unchanged. Normalizing rather than
/// exact: bearer-composed vowels and virama clusters come back as their
/// multi-key spellings, which render identically in the font.
pub fn to_ascii(unicode: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(unicode.len());
    let mut chars = unicode.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // Sihari attaches to the preceding base plus any subjoined
            // letter; in the font encoding it is typed before both.
            'ਿ' => {
                let mut at = out.len();
                if at > 0 && matches!(out[at - 1], 'R' | 'H') {
                    at -= 1;
                }
                at = at.saturating_sub(1);
                out.insert(at, 'i');
            }

            // Virama clusters become single subjoined keys.
            '\u{0A4D}' => match chars.peek().copied() {
                Some('ਰ') => {
                    chars.next();
                    out.push('R');
                }
                Some('ਹ') => {
                    chars.next();
                    out.push('H');
                }
                _ => {}
            },

            // Independent vowels expand to bearer + sign keys.
            'ਇ' => out.extend(['i', 'e']),
            'ਆ' => out.extend(['A', 'w']),
            'ਈ' => out.extend(['e', 'I']),
            'ਉ' => out.extend(['a', 'u']),
            'ਊ' => out.extend(['a', 'U']),
            'ਏ' => out.extend(['e', 'y']),
            'ਐ' => out.extend(['A', 'Y']),
            'ਔ' => out.extend(['A', 'O']),

            'ੴ' => out.extend(['<', '>']),

            c => out.push(letter(c).unwrap_or(c)),
        }
    }

    out.into_iter().collect()
}

fn letter(c: char) -> Option<char> {
    match c {
        'ਸ' => Some('s'),
        'ਹ' => Some('h'),
        'ਕ' => Some('k'),
        'ਖ' => Some('K'),
        'ਗ' => Some('g'),
        'ਘ' => Some('G'),
        'ਙ' => Some('|'),
        'ਚ' => Some('c'),
        'ਛ' => Some('C'),
        'ਜ' => Some('j'),
        'ਝ' => Some('J'),
        'ਞ' => Some('\\'),
        'ਟ' => Some('t'),
        'ਠ' => Some('T'),
        'ਡ' => Some('f'),
        'ਢ' => Some('F'),
        'ਣ' => Some('x'),
        'ਤ' => Some('q'),
        'ਥ' => Some('Q'),
        'ਦ' => Some('d'),
        'ਧ' => Some('D'),
        'ਨ' => Some('n'),
        'ਪ' => Some('p'),
        'ਫ' => Some('P'),
        'ਬ' => Some('b'),
        'ਭ' => Some('B'),
        'ਮ' => Some('m'),
        'ਯ' => Some('X'),
        'ਰ' => Some('r'),
        'ਲ' => Some('l'),
        'ਵ' => Some('v'),
        'ੜ' => Some('V'),
        '\u{0A36}' => Some('S'),
        '\u{0A5B}' => Some('z'),
        '\u{0A5A}' => Some('Z'),
        '\u{0A33}' => Some('L'),
        '\u{0A59}' => Some('^'),
        '\u{0A5E}' => Some('&'),
        'ੳ' => Some('a'),
        'ਅ' => Some('A'),
        'ੲ' => Some('e'),
        'ਓ' => Some('E'),
        'ਾ' => Some('w'),
        'ੀ' => Some('I'),
        'ੁ' => Some('u'),
        'ੂ' => Some('U'),
        'ੇ' => Some('y'),
        'ੈ' => Some('Y'),
        'ੋ' => Some('o'),
        'ੌ' => Some('O'),
        'ੰ' => Some('M'),
        'ਂ' => Some('N'),
        'ੱ' => Some('~'),
        '੦' => Some('0'),
        '੧' => Some('1'),
        '੨' => Some('2'),
        '੩' => Some('3'),
        '੪' => Some('4'),
        '੫' => Some('5'),
        '੬' => Some('6'),
        '੭' => Some('7'),
        '੮' => Some('8'),
        '੯' => Some('9'),
        '॥' => Some(']'),
        '।' => Some('['),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_plain_word() {
        assert_eq!(to_ascii("ਨਾਮੁ"), "nwmu");
    }

    #[test]
    fn moves_sihari_before_its_base() {
        assert_eq!(to_ascii("ਸਤਿਗੁਰ"), "siqgur");
    }

    #[test]
    fn sihari_steps_over_subjoined_letter() {
        assert_eq!(to_ascii("ਕ੍ਰਿਪਾ"), "ikRpw");
    }

    #[test]
    fn collapses_virama_clusters() {
        assert_eq!(to_ascii("ਪ੍ਰਸਾਦਿ"), "pRswid");
    }

    #[test]
    fn expands_independent_vowels() {
        assert_eq!(to_ascii("ਆਇਉ"), "Awieau");
    }

    #[test]
    fn leading_sihari_stays_in_place() {
        assert_eq!(to_ascii("ਿ"), "i");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(to_ascii("ਸਤ - ਨਾਮੁ"), "sq - nwmu");
    }
}
