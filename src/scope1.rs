//! Scope 1: direct emissions from sources owned or controlled by the organization
//! (company vehicles, boilers, generators, process and fugitive emissions).

use crate::{metadata::or, table::FactorTable, CalculationResult, EmissionFactor, Metadata};

/// Fuel densities (kg/L)
pub static FUEL_DENSITIES: FactorTable = FactorTable::new(
    &[
        ("diesel", 0.835),
        ("petrol", 0.745),
        ("gasoline", 0.745),
        ("lpg", 0.51),
        ("natural_gas", 0.717),
        ("heating_oil", 0.84),
    ],
    0.8,
);

/// Energy content of natural gas, kWh per m3 (higher heating value)
pub const NATURAL_GAS_KWH_PER_M3: f64 = 10.55;

/// Keywords (in English, French and German) identifying a fuel in a factor name
static FUEL_KEYWORDS: [(&str, &[&str]); 5] = [
    ("diesel", &["diesel", "gazole"]),
    ("petrol", &["petrol", "essence", "gasoline", "benzin"]),
    ("lpg", &["lpg", "gpl"]),
    ("natural_gas", &["natural gas", "gaz naturel", "erdgas"]),
    ("heating_oil", &["heating oil", "fioul", "heizol"]),
];

/// The kind of activity the unit of a factor measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Fuel,
    Energy,
    Gas,
    Mass,
    Distance,
    Other,
}

impl Activity {
    fn resolve(unit: &str) -> Self {
        match unit {
            "liters" | "l" | "litres" => Activity::Fuel,
            "kwh" => Activity::Energy,
            "m3" | "m³" | "cubic_meters" => Activity::Gas,
            "kg" => Activity::Mass,
            "km" | "miles" => Activity::Distance,
            _ => Activity::Other,
        }
    }
}

/// Returns the fuel named in `name` (e.g. `Gazole routier` is `diesel`). Defaults to `diesel`.
pub fn detect_fuel_type(name: &str) -> &'static str {
    let name = name.to_lowercase();
    FUEL_KEYWORDS
        .iter()
        .find_map(|(fuel, keywords)| keywords.iter().any(|k| name.contains(k)).then_some(*fuel))
        .unwrap_or("diesel")
}

/// Returns the Scope 1 emissions of `quantity` units of `factor.unit`.
///
/// CO2e is always `quantity * factor.factor_kg_co2e`; the unit only decides which
/// equivalents (mass of fuel, energy of gas) are reported in the notes.
/// Each gas published by the factor is multiplied by `quantity` independently.
pub fn calculate(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let co2e_kg = quantity * factor.factor_kg_co2e;
    let result = CalculationResult::multiplied(co2e_kg, quantity, factor);

    match Activity::resolve(&factor.unit()) {
        Activity::Fuel => {
            let fuel_type = metadata
                .fuel_type
                .as_deref()
                .unwrap_or_else(|| detect_fuel_type(&factor.name));
            let density = FUEL_DENSITIES.get_or_default(fuel_type);
            result.with_notes(format!(
                "Fuel: {fuel_type}, {quantity}L (~{:.2} kg)",
                quantity * density
            ))
        }
        Activity::Energy => result.with_notes(format!("Energy: {quantity} kWh")),
        Activity::Gas => result.with_notes(format!(
            "Gas: {quantity} m3 (~{:.2} kWh)",
            quantity * NATURAL_GAS_KWH_PER_M3
        )),
        Activity::Mass => result,
        Activity::Distance => result.with_notes(format!(
            "Distance: {quantity} {}, vehicle: {}",
            factor.unit(),
            or(&metadata.vehicle_type, "average")
        )),
        Activity::Other => {
            log::debug!("unit \"{}\" multiplied directly", factor.unit);
            result
        }
    }
}
