//! Numeral conversion API handlers.

use axum::{extract::Path, Json};
use serde::Serialize;
use titlelink_core::{to_integer, to_roman};

#[derive(Debug, Serialize)]
pub struct NumeralResponse {
    pub roman: String,
    /// `None` when the input holds no numeral letters to convert.
    pub value: Option<u32>,
}

/// GET /api/v1/numerals/roman/{value}
///
/// Values outside 1..=999 come back as decimal text.
pub async fn roman(Path(value): Path<u32>) -> Json<NumeralResponse> {
    Json(NumeralResponse {
        roman: to_roman(value),
        value: Some(value),
    })
}

/// GET /api/v1/numerals/integer/{roman}
pub async fn integer(Path(roman): Path<String>) -> Json<NumeralResponse> {
    let value = to_integer(&roman);
    Json(NumeralResponse { roman, value })
}
