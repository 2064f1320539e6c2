//! Input rules for game records.
//!
//! The HTTP layer attaches these to its request DTOs so malformed input is
//! rejected before any handler touches the store.

use std::borrow::Cow;

use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::types::Price;

/// Maximum length of a game name, in characters.
pub const NAME_MAX_LEN: u64 = 50;

/// Lowest accepted price (inclusive).
pub const PRICE_MIN: Decimal = Decimal::ONE;

/// Highest accepted price (inclusive).
pub const PRICE_MAX: Decimal = Decimal::ONE_HUNDRED;

/// Reject names that are blank or longer than [`NAME_MAX_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count() as u64;
    if name.trim().is_empty() || len > NAME_MAX_LEN {
        let mut err = ValidationError::new("length");
        err.message = Some(Cow::Owned(format!(
            "name must be between 1 and {NAME_MAX_LEN} characters"
        )));
        return Err(err);
    }
    Ok(())
}

/// Reject prices outside `[PRICE_MIN, PRICE_MAX]`.
pub fn validate_price(price: &Price) -> Result<(), ValidationError> {
    if *price < PRICE_MIN || *price > PRICE_MAX {
        let mut err = ValidationError::new("range");
        err.message = Some(Cow::Owned(format!(
            "price must be between {PRICE_MIN} and {PRICE_MAX}"
        )));
        return Err(err);
    }
    Ok(())
}

/// Flatten validator output into a single stable, human-readable line.
///
/// Fields are sorted so the message does not depend on hash order.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| match e.message.as_deref() {
                    Some(msg) => msg.to_string(),
                    None => e.code.to_string(),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .map(|(field, messages)| format!("{field}: {}", messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
