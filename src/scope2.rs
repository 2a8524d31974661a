//! Scope 2: indirect emissions from purchased electricity, steam, heating and cooling.
//!
//! The GHG Protocol requires dual reporting: [`location_based`] uses grid-average factors of
//! the place of consumption, [`market_based`] uses contractual factors (supplier or residual mix).

use serde::{Deserialize, Serialize};

use crate::{table::FactorTable, CalculationResult, EmissionFactor, Metadata, Method};

/// Grid-average factors (kg CO2e/kWh) by country, used when no country-specific factor exists
pub static DEFAULT_GRID_FACTORS: FactorTable = FactorTable::new(
    &[
        ("FR", 0.0569),
        ("DE", 0.366),
        ("UK", 0.233),
        ("ES", 0.259),
        ("IT", 0.315),
        ("EU", 0.276),
    ],
    0.276,
);

/// Residual-mix factors (kg CO2e/kWh) by country: the grid without tracked renewables
/// (green tariffs, guarantees of origin), hence higher than the grid average.
pub static RESIDUAL_MIX_FACTORS: FactorTable = FactorTable::new(
    &[("FR", 0.0876), ("DE", 0.498), ("UK", 0.312), ("EU", 0.380)],
    0.380,
);

/// Average electricity prices (EUR/kWh, 2024)
pub static ELECTRICITY_PRICES: FactorTable =
    FactorTable::new(&[("FR", 0.2276), ("DE", 0.4351)], 0.30);

/// Fixed conversion rates to EUR
static EUR_RATES: FactorTable =
    FactorTable::new(&[("EUR", 1.0), ("USD", 0.92), ("GBP", 1.17), ("CHF", 1.06)], 1.0);

pub const KWH_PER_MWH: f64 = 1000.0;
pub const KWH_PER_GJ: f64 = 277.78;
pub const MJ_PER_GJ: f64 = 1000.0;

/// A source of country-specific electricity factors (e.g. a factor repository).
pub trait GridFactorProvider {
    /// kg CO2e/kWh of electricity in `country` (ISO 3166) according to `method`, if known
    fn electricity_factor(&self, country: &str, method: Method) -> Option<f64>;
}

/// Where the factor of a [`GridEmissions`] came from
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FactorSource {
    /// a [`GridFactorProvider`]
    Provider,
    /// [`DEFAULT_GRID_FACTORS`]
    GridAverage,
    /// [`RESIDUAL_MIX_FACTORS`]
    ResidualMix,
    /// the energy supplier
    Supplier,
}

/// Emissions of electricity consumption under one of the two Scope 2 methods
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridEmissions {
    pub co2e_kg: f64,
    /// [`Method::Location`] or [`Method::Market`]
    pub method: Method,
    /// kg CO2e/kWh
    pub factor_used: f64,
    pub factor_source: FactorSource,
    pub renewable_percentage: f64,
    pub country: String,
}

/// The kind of energy the unit of a factor measures
#[derive(Debug, Clone, Copy, PartialEq)]
enum Energy {
    /// in kWh
    Electricity(f64),
    /// in GJ
    Heat(f64),
    Other,
}

impl Energy {
    fn resolve(unit: &str, quantity: f64) -> Self {
        match unit {
            "kwh" => Energy::Electricity(quantity),
            "mwh" => Energy::Electricity(quantity * KWH_PER_MWH),
            "gj" => Energy::Heat(quantity),
            "mj" => Energy::Heat(quantity / MJ_PER_GJ),
            _ => Energy::Other,
        }
    }
}

/// Returns the Scope 2 emissions of `quantity` units of `factor.unit`.
///
/// Electricity (kWh, MWh) is reduced by `metadata.renewable_percentage`. Under
/// [`Method::Market`] a `metadata.supplier_factor` replaces `factor.factor_kg_co2e`;
/// otherwise the factor is used as is, whatever the method.
pub fn calculate(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    match Energy::resolve(&factor.unit(), quantity) {
        Energy::Electricity(kwh) => electricity(kwh, factor, metadata),
        Energy::Heat(gj) => heat(gj, factor),
        Energy::Other => CalculationResult::multiplied(quantity * factor.factor_kg_co2e, quantity, factor),
    }
}

fn electricity(kwh: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let method = metadata.method.unwrap_or(Method::Location);
    let renewable_percentage = metadata.renewable_percentage();
    let effective_kwh = kwh * (1.0 - renewable_percentage / 100.0);

    let factor_value = match (method, metadata.supplier_factor) {
        (Method::Market, Some(supplier_factor)) => supplier_factor,
        _ => factor.factor_kg_co2e,
    };

    let mut notes = format!("Electricity: {kwh} kWh, method: {method}");
    if renewable_percentage > 0.0 {
        notes.push_str(&format!(", renewable: {renewable_percentage}%"));
    }

    CalculationResult::multiplied(effective_kwh * factor_value, effective_kwh, factor).with_notes(notes)
}

fn heat(gj: f64, factor: &EmissionFactor) -> CalculationResult {
    let mut result = CalculationResult::multiplied(gj * factor.factor_kg_co2e, gj, factor);
    result.ch4_kg = None;
    result.n2o_kg = None;
    result.with_notes(format!("Heat: {gj} GJ (~{:.2} kWh)", gj * KWH_PER_GJ))
}

fn grid_factor(country: &str, provider: Option<&dyn GridFactorProvider>) -> (f64, FactorSource) {
    provider
        .and_then(|provider| provider.electricity_factor(country, Method::Location))
        .map(|factor| (factor, FactorSource::Provider))
        .unwrap_or_else(|| {
            (
                DEFAULT_GRID_FACTORS.get_or_default(country),
                FactorSource::GridAverage,
            )
        })
}

/// Location-based emissions of `kwh` consumed in `country`, using the default grid factors.
pub fn location_based(kwh: f64, country: &str) -> GridEmissions {
    location_based_with(kwh, country, None)
}

/// Location-based emissions of `kwh` consumed in `country`. A factor from `provider`
/// takes priority over the default grid factors.
pub fn location_based_with(
    kwh: f64,
    country: &str,
    provider: Option<&dyn GridFactorProvider>,
) -> GridEmissions {
    let (factor_used, factor_source) = grid_factor(country, provider);
    GridEmissions {
        co2e_kg: kwh * factor_used,
        method: Method::Location,
        factor_used,
        factor_source,
        renewable_percentage: 0.0,
        country: country.to_string(),
    }
}

/// Market-based emissions of `kwh` consumed in `country`.
///
/// The supplier factor takes priority over the residual mix of the country.
/// The consumption is reduced by `renewable_percentage` (0-100) before multiplying.
pub fn market_based(
    kwh: f64,
    country: &str,
    supplier_factor: Option<f64>,
    renewable_percentage: f64,
) -> GridEmissions {
    let (factor_used, factor_source) = match supplier_factor {
        Some(factor) => (factor, FactorSource::Supplier),
        None => (
            RESIDUAL_MIX_FACTORS.get_or_default(country),
            FactorSource::ResidualMix,
        ),
    };
    let effective_kwh = kwh * (1.0 - renewable_percentage / 100.0);

    GridEmissions {
        co2e_kg: effective_kwh * factor_used,
        method: Method::Market,
        factor_used,
        factor_source,
        renewable_percentage,
        country: country.to_string(),
    }
}

/// Estimates the kWh consumed from the `amount` of an electricity bill in `currency`,
/// using average prices of `country`. An estimation, not suitable for audited reporting.
pub fn estimate_from_bill(amount: f64, currency: &str, country: &str) -> f64 {
    let amount_eur = amount * EUR_RATES.get_or_default(&currency.to_uppercase());
    amount_eur / ELECTRICITY_PRICES.get_or_default(&country.to_uppercase())
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn electricity_factor() -> EmissionFactor {
        EmissionFactor::new("Electricity DE", "kWh", 0.366)
    }

    #[test]
    fn kwh() {
        let result = calculate(1000.0, &electricity_factor(), &Metadata::default());
        assert!(close(result.co2e_kg, 366.0));
        assert_eq!(
            result.notes.as_deref(),
            Some("Electricity: 1000 kWh, method: location")
        );
    }

    #[test]
    fn mwh() {
        let factor = EmissionFactor::new("Electricity", "MWh", 0.1);
        let result = calculate(2.0, &factor, &Metadata::default());
        assert!(close(result.co2e_kg, 200.0));
    }

    #[test]
    fn renewable() {
        let metadata = Metadata {
            renewable_percentage: Some(100.0),
            ..Default::default()
        };
        let factor = electricity_factor().with_gases(Some(0.36), None, None);
        let result = calculate(1000.0, &factor, &metadata);
        assert_eq!(result.co2e_kg, 0.0);
        assert_eq!(result.co2_kg, Some(0.0));
        assert!(result.notes.unwrap().ends_with("renewable: 100%"));

        let metadata = Metadata {
            renewable_percentage: Some(50.0),
            ..Default::default()
        };
        let result = calculate(1000.0, &electricity_factor(), &metadata);
        assert!(close(result.co2e_kg, 183.0));
    }

    #[test]
    fn market_without_supplier() {
        let location = calculate(1000.0, &electricity_factor(), &Metadata::default());
        let market = calculate(
            1000.0,
            &electricity_factor(),
            &Metadata {
                method: Some(Method::Market),
                ..Default::default()
            },
        );
        assert_eq!(location.co2e_kg, market.co2e_kg);
    }

    #[test]
    fn market_with_supplier() {
        let metadata = Metadata {
            method: Some(Method::Market),
            supplier_factor: Some(0.05),
            ..Default::default()
        };
        let result = calculate(1000.0, &electricity_factor(), &metadata);
        assert!(close(result.co2e_kg, 50.0));

        // the supplier factor is ignored by the location-based method
        let metadata = Metadata {
            supplier_factor: Some(0.05),
            ..Default::default()
        };
        let result = calculate(1000.0, &electricity_factor(), &metadata);
        assert!(close(result.co2e_kg, 366.0));
    }

    #[test]
    fn heat() {
        let factor = EmissionFactor::new("Steam", "GJ", 60.0).with_gases(Some(59.0), Some(0.5), Some(0.5));
        let result = calculate(2.0, &factor, &Metadata::default());
        assert_eq!(result.co2e_kg, 120.0);
        assert_eq!(result.co2_kg, Some(118.0));
        assert_eq!(result.ch4_kg, None);
        assert_eq!(result.n2o_kg, None);
        assert_eq!(result.notes.as_deref(), Some("Heat: 2 GJ (~555.56 kWh)"));

        let factor = EmissionFactor::new("Steam", "MJ", 60.0);
        let result = calculate(2000.0, &factor, &Metadata::default());
        assert_eq!(result.co2e_kg, 120.0);
    }

    #[test]
    fn other_units() {
        let factor = EmissionFactor::new("Cooling", "ton-hour", 1.5);
        let result = calculate(100.0, &factor, &Metadata::default());
        assert_eq!(result.co2e_kg, 150.0);
        assert_eq!(result.notes, None);
    }

    #[test]
    fn location() {
        let result = location_based(1000.0, "DE");
        assert!(close(result.co2e_kg, 366.0));
        assert_eq!(result.factor_source, FactorSource::GridAverage);
        assert_eq!(result.method, Method::Location);

        // unknown countries use the EU average
        assert_eq!(location_based(1000.0, "PT").factor_used, 0.276);
    }

    struct Repository;

    impl GridFactorProvider for Repository {
        fn electricity_factor(&self, country: &str, _: Method) -> Option<f64> {
            (country == "PT").then_some(0.1)
        }
    }

    #[test]
    fn location_with_provider() {
        let result = location_based_with(1000.0, "PT", Some(&Repository));
        assert_eq!(result.factor_used, 0.1);
        assert_eq!(result.factor_source, FactorSource::Provider);

        let result = location_based_with(1000.0, "FR", Some(&Repository));
        assert_eq!(result.factor_used, 0.0569);
        assert_eq!(result.factor_source, FactorSource::GridAverage);
    }

    #[test]
    fn market() {
        let result = market_based(1000.0, "DE", None, 0.0);
        assert!(close(result.co2e_kg, 498.0));
        assert_eq!(result.factor_source, FactorSource::ResidualMix);
        assert!(result.co2e_kg > location_based(1000.0, "DE").co2e_kg);

        let result = market_based(1000.0, "DE", Some(0.45), 0.0);
        assert!(close(result.co2e_kg, 450.0));
        assert_eq!(result.factor_source, FactorSource::Supplier);

        let result = market_based(1000.0, "DE", Some(0.45), 100.0);
        assert_eq!(result.co2e_kg, 0.0);
    }

    #[test]
    fn bill() {
        assert!(close(estimate_from_bill(227.6, "EUR", "FR"), 1000.0));
        assert!(close(estimate_from_bill(300.0, "USD", "IT"), 920.0));
        assert!(close(estimate_from_bill(300.0, "XYZ", "IT"), 1000.0));
    }
}
