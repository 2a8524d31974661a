use serde::{Deserialize, Serialize};

use crate::Category;

/// Method used to compute an emission
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Scope 2, grid-average factors of the place of consumption
    Location,
    /// Scope 2, contractual (supplier or residual mix) factors
    Market,
    /// Scope 3, money spent times an industry-average factor
    SpendBased,
    /// Scope 3, a factor provided by the supplier
    SupplierSpecific,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Method::Location => "location",
            Method::Market => "market",
            Method::SpendBased => "spend_based",
            Method::SupplierSpecific => "supplier_specific",
        })
    }
}

/// Class of travel of a passenger
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    /// Multiplier of the per passenger-km factor, accounting for the space taken by the seat
    pub fn multiplier(&self) -> f64 {
        match self {
            TravelClass::Economy => 1.0,
            TravelClass::PremiumEconomy => 1.5,
            TravelClass::Business => 2.0,
            TravelClass::First => 3.0,
        }
    }

    /// Multiplier of generic passenger-km factors, which only distinguish business and first
    pub fn passenger_km_multiplier(&self) -> f64 {
        match self {
            TravelClass::Business => 2.0,
            TravelClass::First => 3.0,
            TravelClass::Economy | TravelClass::PremiumEconomy => 1.0,
        }
    }
}

impl std::fmt::Display for TravelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TravelClass::Economy => "economy",
            TravelClass::PremiumEconomy => "premium_economy",
            TravelClass::Business => "business",
            TravelClass::First => "first",
        })
    }
}

/// Context of a calculation. Every field is optional; each calculator reads the fields
/// it recognizes and substitutes the documented default for missing ones.
///
/// Keys of the static factor tables (fuel, waste, product, asset, ...) are free strings:
/// unknown keys fall back to the default entry of the table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Metadata {
    /// Scope 2 (default `location`) or Scope 3 category 1 (default `spend_based`)
    pub method: Option<Method>,
    /// Scope 2 market-based factor (kg CO2e/kWh) from the energy supplier
    pub supplier_factor: Option<f64>,
    /// Share of renewable energy, 0-100 (default 0)
    pub renewable_percentage: Option<f64>,
    /// ISO 3166 country (Scope 3 category 3, default `EU`)
    pub country: Option<String>,

    /// Scope 1 fuel (detected from the factor name) or Scope 3 category 3 fuel (default `electricity`)
    pub fuel_type: Option<String>,
    /// Scope 1 vehicle (default `average`)
    pub vehicle_type: Option<String>,

    /// Scope 3 category (1-15). Anything else, including numbers beyond a `u8`, routes by unit.
    #[serde(deserialize_with = "crate::serde::lenient_u8")]
    pub scope_3_category: Option<u8>,
    /// Purchase category of spend-based factors (default `default`)
    pub category_type: Option<String>,
    pub asset_type: Option<String>,
    /// Amortization period of capital goods (default 1)
    pub depreciation_years: Option<f64>,
    pub transport_mode: Option<String>,
    pub waste_type: Option<String>,
    pub treatment: Option<String>,
    /// Business travel mode (default `flight_average`)
    pub travel_type: Option<String>,
    pub travel_class: Option<TravelClass>,
    /// Hotel category (default `average`)
    pub hotel_type: Option<String>,
    /// Passengers sharing a vehicle (default 1)
    pub passengers: Option<f64>,
    /// Energy consumed by a leased asset
    pub energy_kwh: Option<f64>,
    /// Floor area of a leased asset
    pub area_m2: Option<f64>,
    pub process_type: Option<String>,
    pub product_type: Option<String>,
    /// Lifetime of a sold product (default 1)
    pub lifetime_years: Option<f64>,
    /// Units sold (default: the quantity)
    pub units_sold: Option<f64>,
    pub franchise_type: Option<String>,
    /// Number of franchises (default 1)
    pub franchise_count: Option<f64>,
    pub investment_type: Option<String>,
    /// Share owned of an investment, 0-100 (default 100)
    pub share_percentage: Option<f64>,
}

impl Metadata {
    /// The Scope 3 category to route to, if `scope_3_category` is one of 1-15
    pub fn category(&self) -> Option<Category> {
        self.scope_3_category
            .and_then(|number| Category::try_from(number).ok())
    }

    pub fn renewable_percentage(&self) -> f64 {
        self.renewable_percentage.unwrap_or(0.0)
    }

    pub fn travel_class(&self) -> TravelClass {
        self.travel_class.unwrap_or_default()
    }
}

/// Returns `value` or `default` when missing
pub(crate) fn or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}
