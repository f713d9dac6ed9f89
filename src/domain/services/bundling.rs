//! # Isolated Item Bundling
//!
//! Two or more isolated vehicle items are charged as one job: the most
//! expensive item plus a flat differential surcharge.
//!
//! The differential is the service referenced by the first isolated line
//! that carries a `differential_id`. Differentials are looked up regardless
//! of their active flag since they are never sold on their own.
//!
//! # Examples
//!
//! ```
//! use tutto_quote::domain::entities::{Catalog, LineItem, Service};
//! use tutto_quote::domain::services::bundling::bundle_isolated_items;
//! use tutto_quote::domain::value_objects::{Country, PricingUnit, ServiceCategory};
//! use rust_decimal::Decimal;
//!
//! let seat = Service::new(
//!     "aislado_butaca_delantera_ar", Country::Argentina, "Aislados", "Butacas delanteras",
//!     ServiceCategory::IsolatedVehicleItems, PricingUnit::Unit, Decimal::new(34000, 0),
//! ).with_differential("dif_std_ar");
//! let floor = seat.renamed("Piso (Auto/SUV)");
//! let dif = Service::new(
//!     "dif_std_ar", Country::Argentina, "Diferencial", "Estándar",
//!     ServiceCategory::Other, PricingUnit::Unit, Decimal::new(9000, 0),
//! ).with_active(false);
//! let catalog = Catalog::default().with_services(vec![dif]);
//!
//! let lines = vec![
//!     LineItem::new(seat, Decimal::ONE, Decimal::new(34000, 0)),
//!     LineItem::new(floor, Decimal::ONE, Decimal::new(26000, 0)),
//! ];
//! let bundled = bundle_isolated_items(lines, &catalog, Country::Argentina).unwrap();
//! assert_eq!(bundled.len(), 1);
//! assert_eq!(bundled[0].base_price, Decimal::new(43000, 0));
//! assert_eq!(bundled[0].service.sub_name(), "Butacas delanteras + Piso (Auto/SUV)");
//! ```

use crate::domain::entities::{Catalog, LineItem};
use crate::domain::value_objects::{ArithmeticResult, CheckedArithmetic, Country, checked_sum};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Separator between the sub-names of a bundled line.
pub const BUNDLE_NAME_SEPARATOR: &str = " + ";

/// Minimum number of isolated lines that triggers bundling.
pub const BUNDLE_THRESHOLD: usize = 2;

/// Merges the isolated vehicle lines of `lines` into a single line.
///
/// Non-isolated lines keep their relative order; the bundled line is
/// appended after them. Lines are returned unchanged when fewer than
/// [`BUNDLE_THRESHOLD`] isolated lines are present or no differential
/// service can be found.
///
/// # Errors
///
/// Returns an arithmetic error on decimal overflow.
pub fn bundle_isolated_items(
    lines: Vec<LineItem>,
    catalog: &Catalog,
    country: Country,
) -> ArithmeticResult<Vec<LineItem>> {
    let (isolated, mut rest): (Vec<LineItem>, Vec<LineItem>) = lines
        .iter()
        .cloned()
        .partition(|line| line.service.category().is_isolated_vehicle_item());

    if isolated.len() < BUNDLE_THRESHOLD {
        return Ok(lines);
    }

    let differential = isolated
        .iter()
        .find_map(|line| line.service.differential_id())
        .and_then(|id| catalog.find_service(country, id));
    let (Some(first), Some(differential)) = (isolated.first(), differential) else {
        warn!(
            isolated = isolated.len(),
            "no differential service for isolated items, bundling skipped"
        );
        return Ok(lines);
    };

    let max_price = isolated
        .iter()
        .map(|line| line.base_price)
        .max()
        .unwrap_or(Decimal::ZERO);
    let combined = max_price.safe_add(differential.base_price())?;
    let name = isolated
        .iter()
        .map(|line| line.service.sub_name())
        .collect::<Vec<_>>()
        .join(BUNDLE_NAME_SEPARATOR);

    debug!(
        items = isolated.len(),
        differential = %differential.id(),
        %combined,
        "bundled isolated items"
    );

    rest.push(LineItem::new(
        first.service.renamed(name),
        Decimal::ONE,
        combined,
    ));
    Ok(rest)
}

/// Sum of the base prices of `lines`.
///
/// # Errors
///
/// Returns an arithmetic error on decimal overflow.
pub fn workload_subtotal(lines: &[LineItem]) -> ArithmeticResult<Decimal> {
    checked_sum(lines.iter().map(|line| line.base_price))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::Service;
    use crate::domain::value_objects::{PricingUnit, ServiceCategory};

    fn isolated(id: &str, name: &str, price: i64, dif: Option<&str>) -> LineItem {
        let mut service = Service::new(
            id,
            Country::Argentina,
            "Aislados",
            name,
            ServiceCategory::IsolatedVehicleItems,
            PricingUnit::Unit,
            Decimal::new(price, 0),
        );
        if let Some(dif) = dif {
            service = service.with_differential(dif);
        }
        LineItem::new(service, Decimal::ONE, Decimal::new(price, 0))
    }

    fn mattress() -> LineItem {
        let service = Service::new(
            "colchon_1p_ar",
            Country::Argentina,
            "Colchones",
            "1 plaza",
            ServiceCategory::Mattresses,
            PricingUnit::Piece,
            Decimal::new(31999, 0),
        );
        LineItem::new(service, Decimal::ONE, Decimal::new(31999, 0))
    }

    fn catalog() -> Catalog {
        let dif = |id: &str, price: i64| {
            Service::new(
                id,
                Country::Argentina,
                "Diferencial",
                id,
                ServiceCategory::Other,
                PricingUnit::Unit,
                Decimal::new(price, 0),
            )
            .with_active(false)
        };
        Catalog::default().with_services(vec![
            dif("dif_std_ar", 9000),
            dif("dif_7asientos_ar", 11000),
        ])
    }

    #[test]
    fn single_isolated_item_is_untouched() {
        let lines = vec![isolated("a", "Butacas", 34000, Some("dif_std_ar")), mattress()];
        let out = bundle_isolated_items(lines.clone(), &catalog(), Country::Argentina).unwrap();
        assert_eq!(out, lines);
    }

    #[test]
    fn bundle_is_appended_after_other_lines() {
        let lines = vec![
            isolated("a", "Butacas", 34000, Some("dif_std_ar")),
            mattress(),
            isolated("b", "Piso", 26000, Some("dif_std_ar")),
        ];
        let out = bundle_isolated_items(lines, &catalog(), Country::Argentina).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].service.id().as_str(), "colchon_1p_ar");
        assert_eq!(out[1].service.id().as_str(), "a");
        assert_eq!(out[1].service.sub_name(), "Butacas + Piso");
        assert_eq!(out[1].quantity, Decimal::ONE);
        assert_eq!(out[1].base_price, Decimal::new(43000, 0));
    }

    #[test]
    fn first_line_with_differential_selects_it() {
        let lines = vec![
            isolated("a", "Techo", 28000, None),
            isolated("b", "Piso 7", 30000, Some("dif_7asientos_ar")),
            isolated("c", "Butacas", 34000, Some("dif_std_ar")),
        ];
        let out = bundle_isolated_items(lines, &catalog(), Country::Argentina).unwrap();
        assert_eq!(out[0].base_price, Decimal::new(45000, 0));
        assert_eq!(out[0].service.id().as_str(), "a");
    }

    #[test]
    fn missing_differential_skips_bundling() {
        let lines = vec![
            isolated("a", "Butacas", 34000, Some("dif_unknown")),
            isolated("b", "Piso", 26000, None),
        ];
        let out = bundle_isolated_items(lines.clone(), &catalog(), Country::Argentina).unwrap();
        assert_eq!(out, lines);
    }

    #[test]
    fn subtotal_sums_lines() {
        let lines = vec![mattress(), mattress()];
        assert_eq!(workload_subtotal(&lines).unwrap(), Decimal::new(63998, 0));
        assert_eq!(workload_subtotal(&[]).unwrap(), Decimal::ZERO);
    }
}
