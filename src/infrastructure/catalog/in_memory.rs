//! # In-Memory Catalog Source
//!
//! [`CatalogSource`] backed by a catalog held in memory.
//!
//! [`InMemoryCatalogSource::seed`] carries the reference tables for
//! Argentina and Bolivia so the engine works without any external data.

use crate::domain::entities::{Catalog, DiscountRule, PostalCodeRange, Service, Zone};
use crate::domain::value_objects::{Country, PricingUnit, ServiceCategory};
use crate::infrastructure::catalog::traits::{CatalogResult, CatalogSource};
use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;

/// In-memory implementation of [`CatalogSource`].
///
/// Clones share the same snapshot; [`replace`](Self::replace) is visible to
/// every clone.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogSource {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryCatalogSource {
    /// Creates a source serving `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Creates a source serving the built-in reference tables.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(seed_catalog())
    }

    /// Replaces the served catalog.
    pub fn replace(&self, catalog: Catalog) {
        *self.catalog.write() = catalog;
    }

    /// Returns a copy of the served catalog.
    #[must_use]
    pub fn snapshot(&self) -> Catalog {
        self.catalog.read().clone()
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalogSource {
    async fn load(&self) -> CatalogResult<Catalog> {
        Ok(self.snapshot())
    }

    fn name(&self) -> &str {
        "in_memory"
    }
}

/// Built-in reference tables.
#[must_use]
pub fn seed_catalog() -> Catalog {
    Catalog::new(seed_services(), seed_zones(), seed_postal_codes(), seed_rules())
}

const AR_ZONES: &[(&str, &str, &str, bool)] = &[
    ("CABA", "Buenos Aires", "CABA", false),
    ("BUENOS_AIRES_ZONA_SUR", "Buenos Aires", "Buenos Aires zona sur", false),
    ("BUENOS_AIRES_ZONA_NORTE", "Buenos Aires", "Buenos Aires zona norte", false),
    ("BUENOS_AIRES_ZONA_OESTE", "Buenos Aires", "Buenos Aires zona oeste", false),
    ("BARDA_DEL_MEDIO", "Río Negro", "Barda del Medio", false),
    ("RIO_NEGRO", "Río Negro", "Río Negro", false),
    ("RIO_GALLEGOS", "Santa Cruz", "Río Gallegos", false),
    ("ZARATE_Y_CAMPANA", "Buenos Aires", "Zárate y Campana", false),
    ("GENERAL_ROCA", "Río Negro", "General Roca", false),
    ("NEUQUEN", "Neuquén", "Neuquén", false),
    ("BARILOCHE", "Río Negro", "Bariloche", false),
    ("TANDIL", "Buenos Aires", "Tandil", false),
    ("PARTIDO_DE_LA_COSTA", "Buenos Aires", "Partido de la Costa", false),
    ("NECOCHEA_Y_QUEQUEN", "Buenos Aires", "Necochea y Quequén", false),
    ("VIEDMA_Y_CARMEN_DE_PATAGONES", "Río Negro", "Viedma y Carmen de Patagones", false),
    ("SAN_NICOLAS_DE_LOS_ARROYOS", "Buenos Aires", "San Nicolás de los Arroyos", false),
    ("EL_CALAFATE", "Santa Cruz", "El Calafate", false),
    ("COMODORO_RIVADAVIA", "Chubut", "Comodoro Rivadavia", false),
    ("PUERTO_MADRYN", "Chubut", "Puerto Madryn", false),
    ("LOBERIA", "Buenos Aires", "Lobería", false),
    ("VILLA_GESELL_Y_PINAMAR", "Buenos Aires", "Villa Gesell y Pinamar", false),
    ("MAR_DEL_PLATA", "Buenos Aires", "Mar del Plata", true),
    ("CORRIENTES", "Corrientes", "Corrientes", true),
    ("SALTA", "Salta", "Salta", true),
    ("MENDOZA", "Mendoza", "Mendoza", true),
    ("TUCUMAN", "Tucumán", "Tucumán", true),
    ("BAHIA_BLANCA", "Buenos Aires", "Bahía Blanca", true),
    ("LA_PLATA", "Buenos Aires", "La Plata", true),
    ("RESISTENCIA", "Chaco", "Resistencia", true),
    ("CORDOBA", "Córdoba", "Córdoba", true),
    ("RIO_CUARTO", "Córdoba", "Río Cuarto", true),
    ("PARANA", "Entre Ríos", "Paraná", true),
    ("SANTA_FE", "Santa Fe", "Santa Fe", true),
    ("POSADAS", "Misiones", "Posadas", true),
    ("SANTIAGO_DEL_ESTERO", "Santiago del Estero", "Santiago del Estero", true),
    ("TRELEW_Y_RAWSON", "Chubut", "Trelew y Rawson", true),
    ("SAN_JUAN", "San Juan", "San Juan", true),
    ("SAN_SALVADOR_DE_JUJUY", "Jujuy", "San Salvador de Jujuy", true),
    ("SAN_LUIS", "San Luis", "San Luis", true),
    ("FORMOSA", "Formosa", "Formosa", true),
    ("SAN_RAFAEL", "Mendoza", "San Rafael", true),
    ("LA_RIOJA", "La Rioja", "La Rioja", true),
    ("CARLOS_PAZ", "Córdoba", "Carlos Paz", true),
    ("VALLE_DE_PUNILLA", "Córdoba", "Valle de Punilla", true),
    ("CONCEPCION_DEL_URUGUAY", "Entre Ríos", "Concepción del Uruguay", true),
    (
        "SAN_FERNANDO_DEL_VALLE_DE_CATAMARCA",
        "Catamarca",
        "San Fernando del Valle de Catamarca",
        true,
    ),
    (
        "LAGUNA_LARGA_PILAR_RIO_SEGUNDO",
        "Córdoba",
        "Laguna Larga, Pilar y Río Segundo",
        true,
    ),
    (
        "URDINARRAIN_GUALEGUAY_GUALEGUAYCHU_ROSARIO_DEL_TALA",
        "Entre Ríos",
        "Urdinarrain, Gualeguay, Gualeguaychú, Rosario del Talá",
        true,
    ),
    ("BALCARCE", "Buenos Aires", "Balcarce", true),
    ("FUNES_Y_ROSARIO", "Santa Fe", "Funes y Rosario", true),
];

const BO_ZONES: &[(&str, &str, &str, bool)] = &[("LA_PAZ_BO", "La Paz", "La Paz (Bolivia)", true)];

fn seed_zones() -> Vec<Zone> {
    let general = Decimal::new(10, 2);
    [(Country::Argentina, AR_ZONES), (Country::Bolivia, BO_ZONES)]
        .into_iter()
        .flat_map(|(country, rows)| {
            rows.iter().map(move |&(id, province, city, discounted)| {
                let zone = Zone::new(id, country, province, city);
                if discounted {
                    zone.with_general_discount(general)
                } else {
                    zone
                }
            })
        })
        .collect()
}

fn seed_postal_codes() -> Vec<PostalCodeRange> {
    vec![
        PostalCodeRange::new(Country::Argentina, "1000", "1499", "CABA"),
        PostalCodeRange::new(Country::Argentina, "1800", "1999", "BUENOS_AIRES_ZONA_SUR"),
        PostalCodeRange::new(Country::Argentina, "1900", "1999", "LA_PLATA"),
        PostalCodeRange::new(Country::Argentina, "7600", "7699", "MAR_DEL_PLATA"),
        PostalCodeRange::new(Country::Argentina, "5000", "5099", "CORDOBA"),
        PostalCodeRange::new(Country::Bolivia, "2000", "2999", "LA_PAZ_BO"),
    ]
}

fn seed_rules() -> Vec<DiscountRule> {
    vec![
        DiscountRule::new(
            Country::Argentina,
            ServiceCategory::Upholstery.label(),
            Decimal::TWO,
            Decimal::new(15, 2),
        )
        .with_description("Promo Juego de Sillones"),
        DiscountRule::new(
            Country::Argentina,
            ServiceCategory::Baby.label(),
            Decimal::TWO,
            Decimal::new(20, 2),
        )
        .with_description("Promo 2+ artículos de bebé"),
    ]
}

struct Row {
    id: &'static str,
    group: &'static str,
    sub_name: &'static str,
    category: ServiceCategory,
    unit: PricingUnit,
    price: i64,
}

const fn row(
    id: &'static str,
    group: &'static str,
    sub_name: &'static str,
    category: ServiceCategory,
    unit: PricingUnit,
    price: i64,
) -> Row {
    Row {
        id,
        group,
        sub_name,
        category,
        unit,
        price,
    }
}

impl Row {
    fn into_service(self, country: Country) -> Service {
        Service::new(
            self.id,
            country,
            self.group,
            self.sub_name,
            self.category,
            self.unit,
            Decimal::new(self.price, 0),
        )
    }
}

fn seed_services() -> Vec<Service> {
    use PricingUnit::{Piece, Unit};
    use ServiceCategory::{
        Baby, IsolatedVehicleItems, Mattresses, Other, Upholstery, VehicleAesthetics, Vehicles,
    };

    const ISOLATED: &str = "Ítems Aislados Vehículo";

    let ar = Country::Argentina;
    let bo = Country::Bolivia;
    let carpet = |id: &str, country: Country, sub_name: &str, rate: i64| {
        Service::new(
            id,
            country,
            "Alfombras",
            sub_name,
            ServiceCategory::Carpets,
            PricingUnit::SquareMeter,
            Decimal::ZERO,
        )
        .with_rate_per_m2(Decimal::new(rate, 0))
        .with_min_charge(Decimal::ZERO)
    };

    let mut services = vec![
        row("veh_std_basico_ar", "Auto Standard", "Plan Básico", Vehicles, Unit, 37999).into_service(ar),
        row(
            "veh_std_promo_a_ar",
            "Auto Standard",
            "Promo A (butacas+traseras+techo/baúl)",
            Vehicles,
            Unit,
            46999,
        )
        .into_service(ar)
        .with_notes("Es PROMO. No combinar con descuento de zona."),
        row("veh_std_tutto_ar", "Auto Standard", "Plan Tutto", Vehicles, Unit, 73999).into_service(ar),
        row("veh_suv_basico_ar", "SUV hasta 5pax", "Plan Básico", Vehicles, Unit, 40999).into_service(ar),
        row("veh_suv_tutto_ar", "SUV hasta 5pax", "Plan Tutto", Vehicles, Unit, 76999).into_service(ar),
        row("aislado_butaca_delantera_ar", ISOLATED, "Butacas delanteras", IsolatedVehicleItems, Unit, 34000)
            .into_service(ar)
            .with_differential("dif_std_ar"),
        row("aislado_asiento_trasero_ar", ISOLATED, "Asiento trasero", IsolatedVehicleItems, Unit, 32000)
            .into_service(ar)
            .with_differential("dif_std_ar"),
        row("aislado_piso_std_suv_ar", ISOLATED, "Piso (Auto/SUV)", IsolatedVehicleItems, Unit, 26000)
            .into_service(ar)
            .with_differential("dif_std_ar"),
        row("aislado_piso_7asientos_ar", ISOLATED, "Piso (7 asientos)", IsolatedVehicleItems, Unit, 30000)
            .into_service(ar)
            .with_differential("dif_7asientos_ar"),
        row("aislado_techo_std_suv_ar", ISOLATED, "Techo (Auto/SUV)", IsolatedVehicleItems, Unit, 28000)
            .into_service(ar)
            .with_differential("dif_std_ar"),
        row("dif_std_ar", "Diferencial", "Estándar/SUV/Cab. doble", Other, Unit, 9000)
            .into_service(ar)
            .with_active(false),
        row("dif_7asientos_ar", "Diferencial", "7 asientos", Other, Unit, 11000)
            .into_service(ar)
            .with_active(false),
        row("dif_8a12asientos_ar", "Diferencial", "8 a 12 asientos", Other, Unit, 15000)
            .into_service(ar)
            .with_active(false),
        row("sillon_1c_ar", "Sillones", "1 cuerpo", Upholstery, Piece, 34999).into_service(ar),
        row("sillon_2c_ar", "Sillones", "2 cuerpos", Upholstery, Piece, 49999).into_service(ar),
        row("sillon_3c_ar", "Sillones", "3 cuerpos", Upholstery, Piece, 54999).into_service(ar),
        row("colchon_1p_ar", "Colchones", "1 plaza", Mattresses, Piece, 31999).into_service(ar),
        row("colchon_2p_ar", "Colchones", "2 plazas", Mattresses, Piece, 41999).into_service(ar),
        row("colchon_base_ar", "Colchones", "Adicional Base de sommier", Mattresses, Piece, 25000)
            .into_service(ar),
        carpet("alfombra_corto_ar", ar, "Pelo Corto", 8000),
        carpet("alfombra_largo_ar", ar, "Pelo Largo", 9000),
        row("bebe_coche_ar", "Artículos de Bebé", "Coche de bebé", Baby, Piece, 29999).into_service(ar),
        row("bebe_huevito_ar", "Artículos de Bebé", "Huevito de bebé", Baby, Piece, 26999).into_service(ar),
        row("estetica_motor_vapor_ar", "Lavado de Motor a Vapor", "Auto standard", VehicleAesthetics, Unit, 39999)
            .into_service(ar),
        row("estetica_pulido_opticas_ar", "Pulido de Ópticas", "El par", VehicleAesthetics, Unit, 39999)
            .into_service(ar),
    ];

    services.extend([
        row("veh_std_basico_bo", "Auto Standard", "Plan Básico", Vehicles, Unit, 204).into_service(bo),
        row("veh_std_tutto_bo", "Auto Standard", "Plan Tutto", Vehicles, Unit, 372).into_service(bo),
        row("sillon_1c_bo", "Sillones", "1 cuerpo", Upholstery, Piece, 156).into_service(bo),
        row("sillon_2c_bo", "Sillones", "2 cuerpos", Upholstery, Piece, 234).into_service(bo),
        row("colchon_1p_bo", "Colchones", "1 plaza", Mattresses, Piece, 140).into_service(bo),
        row("colchon_2p_bo", "Colchones", "2 plazas", Mattresses, Piece, 193).into_service(bo),
        row("colchon_base_bo", "Colchones", "Adicional Base de sommier", Mattresses, Piece, 114)
            .into_service(bo),
        carpet("alfombra_corto_bo", bo, "Pelo Corto", 36),
        row("bebe_coche_bo", "Artículos de Bebé", "Coche de bebé", Baby, Piece, 146).into_service(bo),
        row("bebe_huevito_bo", "Artículos de Bebé", "Huevito de bebé", Baby, Piece, 125).into_service(bo),
        row("estetica_lavado_motor_bo", "Lavado de Motor", "Auto standard", VehicleAesthetics, Unit, 182)
            .into_service(bo),
    ]);

    services
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ServiceId;

    #[tokio::test]
    async fn seed_loads_both_countries() {
        let catalog = InMemoryCatalogSource::seed().load().await.unwrap();
        assert_eq!(catalog.zones_in(Country::Argentina).count(), 50);
        assert_eq!(catalog.zones_in(Country::Bolivia).count(), 1);
        assert!(catalog.services_in(Country::Bolivia).count() > 0);
    }

    #[test]
    fn differentials_are_inactive() {
        let catalog = seed_catalog();
        let dif = catalog
            .find_service(Country::Argentina, &ServiceId::new("dif_std_ar"))
            .unwrap();
        assert!(!dif.is_active());
        assert_eq!(dif.base_price(), Decimal::new(9000, 0));
    }

    #[test]
    fn zone_ids_are_unique_per_country() {
        let catalog = seed_catalog();
        let mut ids: Vec<&str> = catalog.zones().iter().map(|z| z.zone_id().as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[tokio::test]
    async fn replace_is_visible_to_clones() {
        let source = InMemoryCatalogSource::seed();
        let clone = source.clone();
        source.replace(Catalog::default());
        assert!(clone.load().await.unwrap().is_empty());
    }
}
