//! # Line-Item Pricer
//!
//! Prices each requested item by its service's pricing unit.

use crate::domain::entities::{Catalog, LineItem, QuoteItem, Service};
use crate::domain::errors::{PricingError, PricingResult};
use crate::domain::value_objects::{ArithmeticResult, CheckedArithmetic, Country};
use rust_decimal::Decimal;

/// Base price of `quantity` units of `service`.
///
/// Area services charge `rate_per_m2 * quantity`, floored at the service's
/// own minimum charge. Everything else charges `base_price * quantity`.
///
/// # Errors
///
/// Returns an arithmetic error on decimal overflow.
pub fn price_line(service: &Service, quantity: Decimal) -> ArithmeticResult<Decimal> {
    if service.unit().is_area() {
        let by_area = service
            .rate_per_m2()
            .unwrap_or(Decimal::ZERO)
            .safe_mul(quantity)?;
        Ok(by_area.max(service.min_charge().unwrap_or(Decimal::ZERO)))
    } else {
        service.base_price().safe_mul(quantity)
    }
}

/// Prices `items` in order against the active services of `country`.
///
/// # Errors
///
/// - [`PricingError::ServiceNotFound`] for the first id that is unknown,
///   inactive or sold in another country.
/// - [`PricingError::Arithmetic`] on decimal overflow.
pub fn price_items(
    items: &[QuoteItem],
    catalog: &Catalog,
    country: Country,
) -> PricingResult<Vec<LineItem>> {
    items
        .iter()
        .map(|item| {
            let service = catalog
                .find_service(country, &item.service_id)
                .filter(|s| s.is_active())
                .ok_or_else(|| PricingError::service_not_found(item.service_id.clone()))?;
            let base_price = price_line(service, item.quantity)?;
            Ok(LineItem::new(service.clone(), item.quantity, base_price))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{PricingUnit, ServiceCategory};

    fn carpet() -> Service {
        Service::new(
            "alfombra_corto_ar",
            Country::Argentina,
            "Alfombras",
            "Pelo corto",
            ServiceCategory::Carpets,
            PricingUnit::SquareMeter,
            Decimal::ZERO,
        )
        .with_rate_per_m2(Decimal::new(8000, 0))
        .with_min_charge(Decimal::new(30000, 0))
    }

    fn mattress() -> Service {
        Service::new(
            "colchon_2p_ar",
            Country::Argentina,
            "Colchones",
            "2 plazas",
            ServiceCategory::Mattresses,
            PricingUnit::Piece,
            Decimal::new(41999, 0),
        )
    }

    mod price_line {
        use super::*;

        #[test]
        fn per_unit() {
            assert_eq!(
                price_line(&mattress(), Decimal::TWO).unwrap(),
                Decimal::new(83998, 0)
            );
        }

        #[test]
        fn area_above_minimum() {
            assert_eq!(
                price_line(&carpet(), Decimal::new(55, 1)).unwrap(),
                Decimal::new(44000, 0)
            );
        }

        #[test]
        fn area_below_minimum_is_floored() {
            assert_eq!(
                price_line(&carpet(), Decimal::TWO).unwrap(),
                Decimal::new(30000, 0)
            );
        }

        #[test]
        fn area_without_rate_charges_minimum() {
            let service = Service::new(
                "alfombra_x",
                Country::Argentina,
                "Alfombras",
                "Sin tarifa",
                ServiceCategory::Carpets,
                PricingUnit::SquareMeter,
                Decimal::new(99999, 0),
            );
            assert_eq!(price_line(&service, Decimal::TEN).unwrap(), Decimal::ZERO);
        }

        #[test]
        fn overflow_is_reported() {
            let service = mattress().renamed("huge");
            assert!(price_line(&service, Decimal::MAX).is_err());
        }
    }

    mod price_items {
        use super::*;

        fn catalog() -> Catalog {
            Catalog::default().with_services(vec![
                carpet(),
                mattress(),
                mattress().renamed("retired").with_active(false),
            ])
        }

        #[test]
        fn preserves_order() {
            let items = vec![
                QuoteItem::new(0, "colchon_2p_ar", Decimal::ONE),
                QuoteItem::new(1, "alfombra_corto_ar", Decimal::new(4, 0)),
            ];
            let lines = price_items(&items, &catalog(), Country::Argentina).unwrap();
            let ids: Vec<&str> = lines.iter().map(|l| l.service.id().as_str()).collect();
            assert_eq!(ids, vec!["colchon_2p_ar", "alfombra_corto_ar"]);
            assert_eq!(lines[1].base_price, Decimal::new(32000, 0));
        }

        #[test]
        fn unknown_service_fails() {
            let items = vec![QuoteItem::new(0, "nope", Decimal::ONE)];
            assert_eq!(
                price_items(&items, &catalog(), Country::Argentina),
                Err(PricingError::service_not_found("nope"))
            );
        }

        #[test]
        fn service_of_other_country_fails() {
            let items = vec![QuoteItem::new(0, "colchon_2p_ar", Decimal::ONE)];
            assert!(price_items(&items, &catalog(), Country::Bolivia).is_err());
        }

        #[test]
        fn inactive_service_fails() {
            let catalog = Catalog::default()
                .with_services(vec![mattress().with_active(false)]);
            let items = vec![QuoteItem::new(0, "colchon_2p_ar", Decimal::ONE)];
            assert!(
                price_items(&items, &catalog, Country::Argentina)
                    .unwrap_err()
                    .is_not_found()
            );
        }
    }
}
