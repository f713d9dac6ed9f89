//! # Text Normalization
//!
//! Accent- and case-insensitive comparison of catalog labels.
//!
//! Category names in discount rules are typed by hand in a spreadsheet, so
//! `"Vehiculos Aislados"`, `"vehículos aislados"` and `"Vehículos Aislados"`
//! must all name the same category.

use rust_decimal::Decimal;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Strips diacritics and lowercases a label.
///
/// The label is decomposed (NFD) and combining marks are dropped, so `"Bebé"`
/// becomes `"bebe"`.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::value_objects::text::normalize_label;
///
/// assert_eq!(normalize_label("Estética Vehicular"), "estetica vehicular");
/// assert_eq!(normalize_label("GENERAL"), "general");
/// ```
#[must_use]
pub fn normalize_label(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Returns true if both labels are equal after [`normalize_label`].
#[must_use]
pub fn labels_match(a: &str, b: &str) -> bool {
    normalize_label(a) == normalize_label(b)
}

/// Parses the leading decimal digits of `raw` as an integer.
///
/// Leading whitespace is skipped and anything after the first non-digit is
/// ignored, so `"1414 "` and `"1414B"` both read as `1414`. Returns `None`
/// when no digit leads the string.
///
/// Signs are not accepted (`"-12"` is `None`) and a digit run too long for
/// `u64` is `None` rather than a saturated value.
#[must_use]
pub fn leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(trimmed.len(), |(idx, _)| idx);
    trimmed.get(..end)?.parse().ok()
}

/// Renders a discount fraction as a percentage without trailing zeros.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::value_objects::text::percent_label;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percent_label(Decimal::new(10, 2)), "10");
/// assert_eq!(percent_label(Decimal::new(125, 3)), "12.5");
/// ```
#[must_use]
pub fn percent_label(fraction: Decimal) -> String {
    fraction
        .checked_mul(Decimal::ONE_HUNDRED)
        .unwrap_or(fraction)
        .normalize()
        .to_string()
}
