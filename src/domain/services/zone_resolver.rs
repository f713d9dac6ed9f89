//! # Zone Resolver
//!
//! Maps the location of a request to a pricing [`Zone`].
//!
//! Resolution order:
//!
//! 1. Postal code: the first range of the country containing the code,
//!    provided its zone exists in the same country.
//! 2. Province and city: the first zone matching both, case-insensitively.
//! 3. Bolivia only: the synthetic [`Zone::bolivia_general`].
//!
//! A resolved zone that is inactive fails with
//! [`PricingError::ZoneInactive`].

use crate::domain::entities::{Catalog, QuoteInput, Zone};
use crate::domain::errors::{PricingError, PricingResult};
use crate::domain::value_objects::Country;
use crate::domain::value_objects::text::leading_integer;

/// Resolves the zone of `input` against `catalog`.
///
/// # Errors
///
/// - [`PricingError::ZoneNotFound`] if nothing matches outside Bolivia.
/// - [`PricingError::ZoneInactive`] if the matched zone is disabled.
///
/// # Examples
///
/// ```
/// use tutto_quote::domain::entities::{Catalog, PostalCodeRange, QuoteInput, Zone};
/// use tutto_quote::domain::services::zone_resolver::resolve_zone;
/// use tutto_quote::domain::value_objects::Country;
///
/// let catalog = Catalog::default()
///     .with_zones(vec![Zone::new("CABA", Country::Argentina, "Buenos Aires", "CABA")])
///     .with_postal_codes(vec![PostalCodeRange::new(Country::Argentina, "1000", "1499", "CABA")]);
///
/// let input = QuoteInput::new(Country::Argentina).with_postal_code("1414");
/// let zone = resolve_zone(&input, &catalog).unwrap();
/// assert_eq!(zone.zone_id().as_str(), "CABA");
/// ```
pub fn resolve_zone(input: &QuoteInput, catalog: &Catalog) -> PricingResult<Zone> {
    let zone = by_postal_code(input, catalog)
        .or_else(|| by_location(input, catalog))
        .cloned()
        .or_else(|| (input.country == Country::Bolivia).then(Zone::bolivia_general))
        .ok_or(PricingError::ZoneNotFound)?;

    if !zone.is_active() {
        return Err(PricingError::zone_inactive(zone.zone_id().clone()));
    }
    Ok(zone)
}

fn by_postal_code<'a>(input: &QuoteInput, catalog: &'a Catalog) -> Option<&'a Zone> {
    if input.postal_code.is_empty() {
        return None;
    }
    let code = leading_integer(&input.postal_code)?;
    let range = catalog
        .postal_codes_in(input.country)
        .find(|range| range.contains(code))?;
    catalog.find_zone(input.country, range.zone_id())
}

fn by_location<'a>(input: &QuoteInput, catalog: &'a Catalog) -> Option<&'a Zone> {
    if input.province.is_empty() || input.city.is_empty() {
        return None;
    }
    catalog
        .zones_in(input.country)
        .find(|zone| zone.matches_location(&input.province, &input.city))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::PostalCodeRange;
    use crate::domain::entities::zone::BOLIVIA_GENERAL_ZONE_ID;

    fn catalog() -> Catalog {
        Catalog::default()
            .with_zones(vec![
                Zone::new("CABA", Country::Argentina, "Buenos Aires", "CABA"),
                Zone::new("CORDOBA", Country::Argentina, "Córdoba", "Córdoba"),
                Zone::new("TANDIL", Country::Argentina, "Buenos Aires", "Tandil")
                    .with_active(false),
                Zone::new("LA_PAZ_BO", Country::Bolivia, "La Paz", "La Paz (Bolivia)"),
            ])
            .with_postal_codes(vec![
                PostalCodeRange::new(Country::Argentina, "1000", "1499", "CABA"),
                PostalCodeRange::new(Country::Argentina, "1400", "1499", "CORDOBA"),
                PostalCodeRange::new(Country::Argentina, "5000", "5099", "CORDOBA"),
                PostalCodeRange::new(Country::Argentina, "7000", "7099", "MISSING"),
                PostalCodeRange::new(Country::Bolivia, "2000", "2999", "LA_PAZ_BO"),
            ])
    }

    mod postal_code {
        use super::*;

        #[test]
        fn first_range_wins() {
            let input = QuoteInput::new(Country::Argentina).with_postal_code("1414");
            let zone = resolve_zone(&input, &catalog()).unwrap();
            assert_eq!(zone.zone_id().as_str(), "CABA");
        }

        #[test]
        fn leading_digits_are_parsed() {
            let input = QuoteInput::new(Country::Argentina).with_postal_code("5000abc");
            let zone = resolve_zone(&input, &catalog()).unwrap();
            assert_eq!(zone.zone_id().as_str(), "CORDOBA");
        }

        #[test]
        fn takes_precedence_over_location() {
            let input = QuoteInput::new(Country::Argentina)
                .with_postal_code("5010")
                .with_location("Buenos Aires", "CABA");
            let zone = resolve_zone(&input, &catalog()).unwrap();
            assert_eq!(zone.zone_id().as_str(), "CORDOBA");
        }

        #[test]
        fn dangling_zone_falls_through_to_location() {
            let input = QuoteInput::new(Country::Argentina)
                .with_postal_code("7050")
                .with_location("buenos aires", "caba");
            let zone = resolve_zone(&input, &catalog()).unwrap();
            assert_eq!(zone.zone_id().as_str(), "CABA");
        }

        #[test]
        fn ranges_of_other_countries_are_ignored() {
            let input = QuoteInput::new(Country::Argentina).with_postal_code("2500");
            assert_eq!(resolve_zone(&input, &catalog()), Err(PricingError::ZoneNotFound));
        }
    }

    mod location {
        use super::*;

        #[test]
        fn case_insensitive_match() {
            let input = QuoteInput::new(Country::Argentina).with_location("CÓRDOBA", "córdoba");
            let zone = resolve_zone(&input, &catalog()).unwrap();
            assert_eq!(zone.zone_id().as_str(), "CORDOBA");
        }

        #[test]
        fn requires_both_fields() {
            let input = QuoteInput::new(Country::Argentina).with_location("Córdoba", "");
            assert_eq!(resolve_zone(&input, &catalog()), Err(PricingError::ZoneNotFound));
        }

        #[test]
        fn inactive_zone_is_rejected() {
            let input = QuoteInput::new(Country::Argentina).with_location("Buenos Aires", "Tandil");
            assert_eq!(
                resolve_zone(&input, &catalog()),
                Err(PricingError::zone_inactive("TANDIL"))
            );
        }
    }

    mod bolivia {
        use super::*;

        #[test]
        fn unresolved_uses_general_zone() {
            let input = QuoteInput::new(Country::Bolivia);
            let zone = resolve_zone(&input, &catalog()).unwrap();
            assert_eq!(zone.zone_id().as_str(), BOLIVIA_GENERAL_ZONE_ID);
        }

        #[test]
        fn postal_code_still_resolves() {
            let input = QuoteInput::new(Country::Bolivia).with_postal_code("2100");
            let zone = resolve_zone(&input, &catalog()).unwrap();
            assert_eq!(zone.zone_id().as_str(), "LA_PAZ_BO");
        }
    }
}
