//! Numeral variants of a canonical query.

use once_cell::sync::Lazy;
use regex_lite::{Captures, Regex};

use crate::numeral::{integer_token_replacement, roman_token_replacement};
use crate::resolver::canonical::CanonicalTitle;
use crate::resolver::types::QueryForm;

static INTEGER_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+\b").unwrap());

// Also matches the empty string at every word boundary; those matches
// substitute to nothing.
static ROMAN_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(cm|cd|d?c{0,3})(xc|xl|l?x{0,3})(ix|iv|v?i{0,3})\b").unwrap()
});

/// Rewrite standalone integers as Roman numerals ("civilization 6" -> "civilization vi").
pub fn roman_variant(canonical: &str) -> String {
    INTEGER_TOKEN
        .replace_all(canonical, |caps: &Captures<'_>| roman_token_replacement(&caps[0]))
        .into_owned()
}

/// Rewrite standalone Roman numerals as integers ("civilization vi" -> "civilization 6").
pub fn number_variant(canonical: &str) -> String {
    ROMAN_TOKEN
        .replace_all(canonical, |caps: &Captures<'_>| integer_token_replacement(&caps[0]))
        .into_owned()
}

/// The literal canonical query plus its two numeral variants, in the order
/// the resolver tries them.
#[derive(Debug, Clone)]
pub struct QueryForms {
    literal: CanonicalTitle,
    roman: CanonicalTitle,
    number: CanonicalTitle,
}

impl QueryForms {
    /// Build all forms from raw query text.
    pub fn new(query: &str) -> Self {
        let literal = CanonicalTitle::new(query);
        let roman = CanonicalTitle::from_canonical(roman_variant(literal.as_str()));
        let number = CanonicalTitle::from_canonical(number_variant(literal.as_str()));
        Self {
            literal,
            roman,
            number,
        }
    }

    pub fn literal(&self) -> &CanonicalTitle {
        &self.literal
    }

    pub fn get(&self, form: QueryForm) -> &CanonicalTitle {
        match form {
            QueryForm::Literal => &self.literal,
            QueryForm::Roman => &self.roman,
            QueryForm::Number => &self.number,
        }
    }

    /// Forms in trial order: literal, Roman, number.
    pub fn iter(&self) -> impl Iterator<Item = (QueryForm, &CanonicalTitle)> {
        QueryForm::ALL.into_iter().map(move |form| (form, self.get(form)))
    }
}
