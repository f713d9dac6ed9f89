//! # Quote Summary
//!
//! Customer-facing text of a quote: the one-line summary and advisory notes.

use crate::domain::entities::{AppliedDiscount, LineItem, Zone};
use crate::domain::value_objects::{Currency, DiscountKind, ServiceCategory};
use rust_decimal::{Decimal, RoundingStrategy};

/// Drying time advisory.
pub const NOTE_DRYING_TIME: &str =
    "El tiempo de secado varía entre 4 y 8 horas según el material y la ventilación.";

/// Pre-existing stains advisory.
pub const NOTE_PREEXISTING_STAINS: &str =
    "Las manchas preexistentes o de larga data pueden no salir por completo.";

/// On-site confirmation advisory.
pub const NOTE_ON_SITE_CONFIRMATION: &str =
    "El valor final se confirma in situ según el estado de cada artículo.";

/// Formats `amount` with no decimals and `separator` between digit groups.
///
/// Halves round away from zero.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::services::quote_summary::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(3799950, 2), "."), "38.000");
/// assert_eq!(format_amount(Decimal::new(140, 0), "."), "140");
/// ```
#[must_use]
pub fn format_amount(amount: Decimal, separator: &str) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Builds the summary line.
///
/// `Cotización para <items> en <location>: <currency> <amount>. Valor final
/// sujeto a confirmación in situ.`
#[must_use]
pub fn build_summary(
    lines: &[LineItem],
    zone: &Zone,
    currency: Currency,
    final_price: Decimal,
    separator: &str,
) -> String {
    let services = lines
        .iter()
        .map(|line| line.service.sub_name())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Cotización para {services} en {}: {} {}. Valor final sujeto a confirmación in situ.",
        zone.location_label(),
        currency.label(),
        format_amount(final_price, separator),
    )
}

/// Builds the advisory notes.
///
/// The fixed notes always come first, followed by the minimum charge note
/// when the floor applied and the aesthetics note when a zone discount left
/// vehicle aesthetics lines at full price.
#[must_use]
pub fn build_notes(
    lines: &[LineItem],
    discount: Option<&AppliedDiscount>,
    minimum_charge_adjustment: Decimal,
    minimum_charge: Decimal,
    currency: Currency,
    separator: &str,
) -> Vec<String> {
    let mut notes = vec![
        NOTE_DRYING_TIME.to_string(),
        NOTE_PREEXISTING_STAINS.to_string(),
        NOTE_ON_SITE_CONFIRMATION.to_string(),
    ];

    if minimum_charge_adjustment > Decimal::ZERO {
        notes.push(format!(
            "Se aplicó el mínimo de servicio de {} {}.",
            currency.label(),
            format_amount(minimum_charge, separator),
        ));
    }

    let zone_discounted = discount.is_some_and(|d| d.kind == DiscountKind::ZoneGeneral);
    let has_aesthetics = lines
        .iter()
        .any(|line| line.service.category() == ServiceCategory::VehicleAesthetics);
    if zone_discounted && has_aesthetics {
        notes.push(format!(
            "Los servicios de {} no participan del descuento de zona.",
            ServiceCategory::VehicleAesthetics.label()
        ));
    }

    notes
}
