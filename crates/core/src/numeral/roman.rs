//! Arabic <-> Roman numeral conversion.

/// Greedy conversion table. Descending order is required by [`to_roman`].
pub const ROMAN_VALUES: [(u32, &str); 12] = [
    (900, "cm"),
    (500, "d"),
    (400, "cd"),
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// Largest value written as a Roman numeral. Anything above stays decimal.
pub const MAX_ROMAN: u32 = 999;

const SUBTRACTIVE_PAIRS: [(&[u8; 2], u32); 6] = [
    (b"iv", 4),
    (b"ix", 9),
    (b"xl", 40),
    (b"xc", 90),
    (b"cd", 400),
    (b"cm", 900),
];

const LETTER_VALUES: [(u8, u32); 7] = [
    (b'i', 1),
    (b'v', 5),
    (b'x', 10),
    (b'l', 50),
    (b'c', 100),
    (b'd', 500),
    (b'm', 1000),
];

/// Convert a number into a lowercase Roman numeral.
///
/// Only `1..=999` is converted; any other value is returned as decimal text.
pub fn to_roman(n: u32) -> String {
    if !(1..=MAX_ROMAN).contains(&n) {
        return n.to_string();
    }

    let mut remaining = n;
    let mut roman = String::new();
    for (value, symbol) in ROMAN_VALUES {
        while remaining >= value {
            roman.push_str(symbol);
            remaining -= value;
        }
        if remaining == 0 {
            break;
        }
    }
    roman
}

/// Convert a Roman numeral into a number.
///
/// Scans left to right, preferring a subtractive pair over a single letter.
/// Well-formedness is not checked: `"iiii"` is 4 and `"vx"` is 15.
///
/// Returns `None` for the empty string (nothing to convert) and for input
/// containing anything other than Roman numeral letters. Letters are
/// matched case-insensitively.
pub fn to_integer(roman: &str) -> Option<u32> {
    if roman.is_empty() {
        return None;
    }

    let bytes: Vec<u8> = roman.bytes().map(|b| b.to_ascii_lowercase()).collect();
    let mut total: u32 = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        if let Some(value) = bytes.get(pos..pos + 2).and_then(pair_value) {
            total = total.saturating_add(value);
            pos += 2;
        } else {
            total = total.saturating_add(letter_value(bytes[pos])?);
            pos += 1;
        }
    }

    Some(total)
}

fn pair_value(pair: &[u8]) -> Option<u32> {
    SUBTRACTIVE_PAIRS
        .iter()
        .find(|(p, _)| p.as_slice() == pair)
        .map(|(_, v)| *v)
}

fn letter_value(letter: u8) -> Option<u32> {
    LETTER_VALUES
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, v)| *v)
}

/// Replacement text for a standalone integer token.
///
/// Tokens too large for `u32` pass through unchanged.
pub fn roman_token_replacement(digits: &str) -> String {
    match digits.parse::<u32>() {
        Ok(n) => to_roman(n),
        Err(_) => digits.to_string(),
    }
}

/// Replacement text for a standalone Roman numeral token.
///
/// The empty token maps to the empty string.
pub fn integer_token_replacement(roman: &str) -> String {
    match to_integer(roman) {
        Some(n) => n.to_string(),
        None => roman.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_roman_known_values() {
        assert_eq!(to_roman(1), "i");
        assert_eq!(to_roman(4), "iv");
        assert_eq!(to_roman(6), "vi");
        assert_eq!(to_roman(9), "ix");
        assert_eq!(to_roman(14), "xiv");
        assert_eq!(to_roman(40), "xl");
        assert_eq!(to_roman(90), "xc");
        assert_eq!(to_roman(400), "cd");
        assert_eq!(to_roman(888), "dccclxxxviii");
        assert_eq!(to_roman(999), "cmxcix");
    }

    #[test]
    fn test_to_roman_out_of_range_stays_decimal() {
        assert_eq!(to_roman(0), "0");
        assert_eq!(to_roman(1000), "1000");
        assert_eq!(to_roman(2077), "2077");
    }

    #[test]
    fn test_round_trip_full_range() {
        for n in 1..=MAX_ROMAN {
            let roman = to_roman(n);
            assert_eq!(to_integer(&roman), Some(n), "round trip failed for {}", n);
        }
    }

    #[test]
    fn test_to_roman_alphabet_and_length() {
        for n in 1..=MAX_ROMAN {
            let roman = to_roman(n);
            assert!(roman.len() <= 15, "{} is too long: {}", n, roman);
            assert!(
                roman.chars().all(|c| "ivxlcdm".contains(c)),
                "{} has unexpected letters: {}",
                n,
                roman
            );
        }
    }

    #[test]
    fn test_to_integer_malformed_is_arithmetic() {
        assert_eq!(to_integer("iiii"), Some(4));
        assert_eq!(to_integer("vx"), Some(15));
        assert_eq!(to_integer("ivi"), Some(5));
        assert_eq!(to_integer("mm"), Some(2000));
    }

    #[test]
    fn test_to_integer_empty_is_sentinel() {
        assert_eq!(to_integer(""), None);
    }

    #[test]
    fn test_to_integer_rejects_foreign_letters() {
        assert_eq!(to_integer("xyz"), None);
        assert_eq!(to_integer("v1"), None);
    }

    #[test]
    fn test_to_integer_uppercase() {
        assert_eq!(to_integer("XIV"), Some(14));
        assert_eq!(to_integer("CmXcIx"), Some(999));
    }

    #[test]
    fn test_token_replacements() {
        assert_eq!(roman_token_replacement("6"), "vi");
        assert_eq!(roman_token_replacement("007"), "vii");
        assert_eq!(roman_token_replacement("1000"), "1000");
        assert_eq!(roman_token_replacement("99999999999"), "99999999999");

        assert_eq!(integer_token_replacement("vi"), "6");
        assert_eq!(integer_token_replacement(""), "");
    }
}
