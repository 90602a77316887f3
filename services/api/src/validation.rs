//! Input validation utilities

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;
use std::{str::FromStr, sync::OnceLock};

/// Largest price a `DECIMAL(10,2)` column can hold, in hundredths.
const MAX_PRICE_CENTS: i64 = 9_999_999_999;

pub const INVALID_PRICE: &str = "Please enter a valid price";
pub const INVALID_STOCK: &str = "Stock must be a whole number";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Return the value of a required text field, unchanged.
///
/// A missing value and a blank one are treated the same way.
pub fn require_text<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(format!("{field} is required")),
    }
}

/// Optional free text; a blank value is stored as `NULL`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Validate email
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("email is required".to_string());
    }

    if email.len() > 254 {
        return Err(INVALID_EMAIL.to_string());
    }

    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(INVALID_EMAIL.to_string());
    }

    Ok(())
}

/// Parse a price given as a JSON number or numeric string.
///
/// The result is rounded half away from zero to two decimal places and
/// rendered with exactly two fractional digits, e.g. `10` becomes `"10.00"`.
pub fn parse_price(value: &Value) -> Result<String, String> {
    let text = match value {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.trim().to_string(),
        _ => return Err(INVALID_PRICE.to_string()),
    };

    let price = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| INVALID_PRICE.to_string())?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(INVALID_PRICE.to_string());
    }

    let mut price = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if price > Decimal::new(MAX_PRICE_CENTS, 2) {
        return Err(INVALID_PRICE.to_string());
    }

    price.set_sign_positive(true);
    price.rescale(2);
    Ok(price.to_string())
}

/// Parse a stock level given as a JSON integer or integral string.
pub fn parse_stock(value: &Value) -> Result<i64, String> {
    match value {
        Value::Number(number) => number.as_i64().ok_or_else(|| INVALID_STOCK.to_string()),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| INVALID_STOCK.to_string()),
        _ => Err(INVALID_STOCK.to_string()),
    }
}
