//! String normalization shared by the lifecycle services.

use crate::error::{DeskError, Result};

/// Returns `true` when `value` is empty or only whitespace.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Returns the trimmed value when it is present and not blank.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trims a required field, failing with `InvalidArgument` when missing or blank.
///
/// # Errors
///
/// Returns [`DeskError::InvalidArgument`] naming `field`.
pub fn required(field: &str, value: Option<&str>) -> Result<String> {
    non_blank(value)
        .map(str::to_owned)
        .ok_or_else(|| DeskError::invalid(format!("{field} is required")))
}

/// Capitalizes every whitespace-delimited word and lowercases the rest.
///
/// Words are re-joined with a single space.
///
/// ```
/// use helpdesk_core::text::title_case;
///
/// assert_eq!(title_case("redes"), "Redes");
/// assert_eq!(title_case("  base   de DATOS "), "Base De Datos");
/// ```
#[must_use]
pub fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
