//! Numeral transliteration between small integers and Roman numerals.
//!
//! Used by the resolver so that "Game 3" and "Game III" compare as the same
//! title. Conversion is limited to `1..=999`; larger numbers are left alone.

mod roman;

pub use roman::{
    integer_token_replacement, roman_token_replacement, to_integer, to_roman, MAX_ROMAN,
    ROMAN_VALUES,
};
