//! Scope 3: other indirect emissions of the value chain, in the 15 categories of the
//! GHG Protocol. Categories 1-8 are upstream, 9-15 downstream.
//!
//! All results are rounded to 6 decimal places and their per-gas breakdown is derived
//! from the CO2e by the ratios of the factor (see [`CalculationResult`]).

use serde::{Deserialize, Serialize};

use crate::{
    metadata::or, scope3_factors::*, serde::round, table::FactorTable, CalculationResult,
    Category, EmissionFactor, Metadata, Method,
};

/// The kind of activity the unit of a factor measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Activity {
    Spend,
    Distance { miles: bool },
    PassengerKm,
    TonneKm,
    Nights,
    Mass { tonnes: bool },
    Energy { mwh: bool },
    Volume,
    Other,
}

impl Activity {
    fn resolve(unit: &str) -> Self {
        match unit {
            "eur" | "usd" | "gbp" | "chf" => Activity::Spend,
            "km" => Activity::Distance { miles: false },
            "miles" => Activity::Distance { miles: true },
            "passenger-km" | "pkm" => Activity::PassengerKm,
            "tonne-km" | "tkm" => Activity::TonneKm,
            "nights" => Activity::Nights,
            "kg" => Activity::Mass { tonnes: false },
            "t" | "tonne" => Activity::Mass { tonnes: true },
            "kwh" => Activity::Energy { mwh: false },
            "mwh" => Activity::Energy { mwh: true },
            "litre" | "l" | "m3" => Activity::Volume,
            _ => Activity::Other,
        }
    }
}

/// `factor.factor_kg_co2e` when positive, else `fallback`
fn positive_or(factor: &EmissionFactor, fallback: impl FnOnce() -> f64) -> f64 {
    if factor.factor_kg_co2e > 0.0 {
        factor.factor_kg_co2e
    } else {
        fallback()
    }
}

/// `factor.factor_kg_co2e` when non-zero, else `default`
fn non_zero_or(factor: &EmissionFactor, default: f64) -> f64 {
    if factor.factor_kg_co2e != 0.0 {
        factor.factor_kg_co2e
    } else {
        default
    }
}

/// Passenger transport factor of `mode`, or of `fallback` when `mode` is unknown
fn travel_factor(mode: &str, fallback: &str) -> f64 {
    TRAVEL
        .get(mode)
        .unwrap_or_else(|| TRAVEL.get_or_default(fallback))
}

/// Returns the Scope 3 emissions of `quantity`.
///
/// Routes to the formula of `metadata.scope_3_category` when it is one of 1-15, and to a
/// formula chosen from `factor.unit` otherwise.
pub fn calculate(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    match metadata.category() {
        Some(category) => calculate_by_category(category, quantity, factor, metadata),
        None => {
            log::debug!(
                "no Scope 3 category in {:?}; routing by unit \"{}\"",
                metadata.scope_3_category,
                factor.unit
            );
            calculate_by_unit(quantity, factor, metadata)
        }
    }
}

/// Returns the emissions of `quantity` in `category`.
pub fn calculate_by_category(
    category: Category,
    quantity: f64,
    factor: &EmissionFactor,
    metadata: &Metadata,
) -> CalculationResult {
    let result = match category {
        Category::PurchasedGoods => purchased_goods(quantity, factor, metadata),
        Category::CapitalGoods => capital_goods(quantity, factor, metadata),
        Category::FuelAndEnergy => fuel_and_energy(quantity, factor, metadata),
        Category::UpstreamTransport => upstream_transport(quantity, factor, metadata),
        Category::Waste => waste(quantity, factor, metadata),
        Category::BusinessTravel => business_travel(quantity, factor, metadata),
        Category::EmployeeCommuting => employee_commuting(quantity, factor, metadata),
        Category::UpstreamLeasedAssets => leased_assets(
            quantity,
            factor,
            metadata,
            &UPSTREAM_LEASED_AREA,
            "office_space",
        ),
        Category::DownstreamTransport => downstream_transport(quantity, factor, metadata),
        Category::Processing => processing(quantity, factor, metadata),
        Category::UseOfSoldProducts => use_of_sold_products(quantity, factor, metadata),
        Category::EndOfLife => end_of_life(quantity, factor, metadata),
        Category::DownstreamLeasedAssets => leased_assets(
            quantity,
            factor,
            metadata,
            &DOWNSTREAM_LEASED_AREA,
            "building",
        ),
        Category::Franchises => franchises(quantity, factor, metadata),
        Category::Investments => investments(quantity, factor, metadata),
    };
    result.in_category(category)
}

/// Category 1: supplier-specific factor when `method` is `supplier_specific` and the factor is
/// positive; otherwise the absolute amount spent times the factor of `category_type`.
fn purchased_goods(amount: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    if metadata.method == Some(Method::SupplierSpecific) && factor.factor_kg_co2e > 0.0 {
        return CalculationResult::by_ratio(amount * factor.factor_kg_co2e, factor)
            .with_notes("Supplier-specific factor");
    }

    let category_type = or(&metadata.category_type, "default");
    let factor_value = SPEND_BASED.get_or_default(category_type);
    CalculationResult::by_ratio(amount.abs() * factor_value, factor)
        .with_notes(format!(
            "Spend-based: {category_type}, factor: {factor_value} kg/EUR"
        ))
        .estimated(true)
}

/// Category 2: amount spent, amortized over `depreciation_years`
fn capital_goods(amount: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let asset_type = or(&metadata.asset_type, "default");
    let depreciation_years = metadata.depreciation_years.unwrap_or(1.0).max(1.0);

    let factor_value = positive_or(factor, || CAPITAL_GOODS.get_or_default(asset_type));
    let annual_amount = amount / depreciation_years;

    CalculationResult::by_ratio(annual_amount * factor_value, factor)
        .with_notes(format!(
            "Asset: {asset_type}, depreciation: {depreciation_years} years"
        ))
        .estimated(factor.factor_kg_co2e <= 0.0)
}

/// Category 3: well-to-tank emissions of the kWh consumed
fn fuel_and_energy(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let fuel_type = or(&metadata.fuel_type, "electricity");
    let country = or(&metadata.country, "EU");

    let wtt_factor = FUEL_UPSTREAM
        .get(&format!("{fuel_type}_{country}"))
        .unwrap_or_else(|| FUEL_UPSTREAM.get_or_default(fuel_type));

    CalculationResult::by_ratio(quantity * wtt_factor, factor)
        .with_notes(format!("WTT emissions for {fuel_type}: {quantity} kWh"))
        .estimated(true)
}

/// Category 4: freight by mode for tonne-km, logistics spend otherwise
fn upstream_transport(
    quantity: f64,
    factor: &EmissionFactor,
    metadata: &Metadata,
) -> CalculationResult {
    let transport_mode = or(&metadata.transport_mode, "default");

    let co2e = match Activity::resolve(&factor.unit()) {
        Activity::TonneKm => quantity * FREIGHT.get_or_default(transport_mode),
        _ => quantity * SPEND_FALLBACK,
    };

    CalculationResult::by_ratio(co2e, factor).with_notes(format!("Mode: {transport_mode}"))
}

/// Category 5: mass of waste by type and treatment. Tonnes are converted to kg.
fn waste(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let waste_type = or(&metadata.waste_type, "mixed");
    let treatment = or(&metadata.treatment, "landfill");

    let factor_value = positive_or(factor, || {
        WASTE.get_or_default(&format!("{waste_type}_{treatment}"))
    });
    let kg = match Activity::resolve(&factor.unit()) {
        Activity::Mass { tonnes: true } => quantity * KG_PER_TONNE,
        _ => quantity,
    };

    CalculationResult::by_ratio(kg * factor_value, factor)
        .with_notes(format!("Waste: {waste_type}, treatment: {treatment}"))
}

/// Category 6: hotel nights, distance travelled (by class), or travel spend
fn business_travel(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let travel_type = or(&metadata.travel_type, "flight_average");
    let class = metadata.travel_class();

    let (co2e, notes) = match Activity::resolve(&factor.unit()) {
        Activity::Nights => {
            let hotel_type = or(&metadata.hotel_type, "average");
            (
                quantity * HOTEL.get_or_default(hotel_type),
                format!("Hotel: {hotel_type}, {quantity} nights"),
            )
        }
        activity @ (Activity::Distance { .. } | Activity::PassengerKm) => {
            let factor_value = positive_or(factor, || travel_factor(travel_type, "flight_average"));
            let km = match activity {
                Activity::Distance { miles: true } => quantity * KM_PER_MILE,
                _ => quantity,
            };
            (
                km * factor_value * class.multiplier(),
                format!("Travel: {travel_type}, class: {class}"),
            )
        }
        _ => (
            quantity * SPEND_FALLBACK,
            "Spend-based estimation".to_string(),
        ),
    };

    CalculationResult::by_ratio(co2e, factor).with_notes(notes)
}

/// Category 7: distance commuted by mode. See [`crate::commuting`] for the aggregate estimate.
fn employee_commuting(
    quantity: f64,
    factor: &EmissionFactor,
    metadata: &Metadata,
) -> CalculationResult {
    let transport_mode = or(&metadata.transport_mode, "car_average");
    let factor_value = positive_or(factor, || travel_factor(transport_mode, "car_average"));

    CalculationResult::by_ratio(quantity * factor_value, factor)
        .with_notes(format!("Mode: {transport_mode}"))
}

/// Categories 8 and 13: energy used by the asset, else its area, else the quantity
fn leased_assets(
    quantity: f64,
    factor: &EmissionFactor,
    metadata: &Metadata,
    area_factors: &FactorTable,
    default_asset: &str,
) -> CalculationResult {
    let asset_type = or(&metadata.asset_type, default_asset);

    let co2e = match (metadata.energy_kwh, metadata.area_m2) {
        (Some(energy_kwh), _) => energy_kwh * non_zero_or(factor, LEASED_ENERGY_DEFAULT),
        (None, Some(area_m2)) => area_m2 * area_factors.get_or_default(asset_type),
        (None, None) => quantity * non_zero_or(factor, LEASED_QUANTITY_DEFAULT),
    };

    CalculationResult::by_ratio(co2e, factor).with_notes(format!("Asset type: {asset_type}"))
}

/// Category 9: freight by mode, road by default
fn downstream_transport(
    quantity: f64,
    factor: &EmissionFactor,
    metadata: &Metadata,
) -> CalculationResult {
    let transport_mode = or(&metadata.transport_mode, "road_truck_articulated");
    let factor_value = positive_or(factor, || FREIGHT.get_or_default(transport_mode));

    CalculationResult::by_ratio(quantity * factor_value, factor)
        .with_notes(format!("Mode: {transport_mode}"))
}

/// Category 10
fn processing(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let process_type = or(&metadata.process_type, "default");

    CalculationResult::by_ratio(quantity * non_zero_or(factor, PROCESSING_DEFAULT), factor)
        .with_notes(format!("Process: {process_type}"))
}

/// Category 11: units sold times their annual use-phase emissions over their lifetime
fn use_of_sold_products(
    quantity: f64,
    factor: &EmissionFactor,
    metadata: &Metadata,
) -> CalculationResult {
    let product_type = or(&metadata.product_type, "default");
    let lifetime_years = metadata.lifetime_years.unwrap_or(1.0);
    let units_sold = metadata.units_sold.unwrap_or(quantity);

    let annual_factor = PRODUCT_USE.get_or_default(product_type);

    CalculationResult::by_ratio(units_sold * annual_factor * lifetime_years, factor).with_notes(
        format!("Product: {product_type}, lifetime: {lifetime_years} years, units: {units_sold}"),
    )
}

/// Category 12: mass of sold products by type and treatment
fn end_of_life(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let product_type = or(&metadata.product_type, "default");
    let treatment = or(&metadata.treatment, "recycling");

    let factor_value = positive_or(factor, || {
        END_OF_LIFE.get_or_default(&format!("{product_type}_{treatment}"))
    });

    CalculationResult::by_ratio(quantity * factor_value, factor)
        .with_notes(format!("Product: {product_type}, treatment: {treatment}"))
}

/// Category 14: `quantity` is the percentage of the franchises' emissions to report
fn franchises(quantity: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let franchise_type = or(&metadata.franchise_type, "default");
    let franchise_count = metadata.franchise_count.unwrap_or(1.0);

    let per_franchise = FRANCHISES.get_or_default(franchise_type);

    CalculationResult::by_ratio(franchise_count * per_franchise * (quantity / 100.0), factor)
        .with_notes(format!("Type: {franchise_type}, count: {franchise_count}"))
}

/// Category 15: amount invested times the share owned
fn investments(amount: f64, factor: &EmissionFactor, metadata: &Metadata) -> CalculationResult {
    let investment_type = or(&metadata.investment_type, "default");
    let share_percentage = metadata.share_percentage.unwrap_or(100.0);

    let factor_value = positive_or(factor, || INVESTMENTS.get_or_default(investment_type));
    let effective_amount = amount * (share_percentage / 100.0);

    CalculationResult::by_ratio(effective_amount * factor_value, factor).with_notes(format!(
        "Type: {investment_type}, share: {share_percentage}%"
    ))
}

/// Returns the emissions of `quantity` by the unit of the factor alone.
pub fn calculate_by_unit(
    quantity: f64,
    factor: &EmissionFactor,
    metadata: &Metadata,
) -> CalculationResult {
    match Activity::resolve(&factor.unit()) {
        Activity::Spend => {
            let category_type = or(&metadata.category_type, "default");
            let factor_value = positive_or(factor, || SPEND_BASED.get_or_default(category_type));
            CalculationResult::by_ratio(quantity.abs() * factor_value, factor)
                .with_notes(format!("Spend-based: {category_type}"))
                .estimated(factor.factor_kg_co2e <= 0.0)
        }
        Activity::Distance { .. } => {
            let transport_mode = or(&metadata.transport_mode, "car_average");
            let passengers = metadata.passengers.unwrap_or(1.0).max(1.0);
            let factor_value = positive_or(factor, || travel_factor(transport_mode, "car_average"));
            CalculationResult::by_ratio(quantity / passengers * factor_value, factor).with_notes(
                format!("Distance: {quantity} {}, mode: {transport_mode}", factor.unit()),
            )
        }
        Activity::PassengerKm => {
            let class = metadata.travel_class();
            CalculationResult::by_ratio(
                quantity * factor.factor_kg_co2e * class.passenger_km_multiplier(),
                factor,
            )
            .with_notes(format!("Travel: {quantity} pkm, class: {class}"))
        }
        Activity::TonneKm => {
            let transport_mode = or(&metadata.transport_mode, "road_truck_articulated");
            let factor_value = positive_or(factor, || FREIGHT.get_or_default(transport_mode));
            CalculationResult::by_ratio(quantity * factor_value, factor)
                .with_notes(format!("Freight: {quantity} tkm, mode: {transport_mode}"))
        }
        Activity::Nights => {
            let hotel_type = or(&metadata.hotel_type, "average");
            let factor_value = positive_or(factor, || HOTEL.get_or_default(hotel_type));
            CalculationResult::by_ratio(quantity * factor_value, factor)
                .with_notes(format!("Hotel: {quantity} nights, type: {hotel_type}"))
        }
        Activity::Mass { tonnes } => {
            let kg = if tonnes { quantity * KG_PER_TONNE } else { quantity };
            CalculationResult::by_ratio(kg * factor.factor_kg_co2e, factor)
                .with_notes(format!("Mass: {quantity} {}", factor.unit))
        }
        Activity::Energy { mwh } => {
            let kwh = if mwh { quantity * 1000.0 } else { quantity };
            CalculationResult::by_ratio(kwh * factor.factor_kg_co2e, factor)
                .with_notes(format!("Energy: {quantity} {}", factor.unit))
        }
        Activity::Volume => CalculationResult::by_ratio(quantity * factor.factor_kg_co2e, factor)
            .with_notes(format!("Volume: {quantity} {}", factor.unit)),
        Activity::Other => CalculationResult::by_ratio(quantity * factor.factor_kg_co2e, factor),
    }
}

/// Length of a flight
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Haul {
    /// less than 1500 km
    Short,
    /// 1500 to 4000 km
    Medium,
    /// more than 4000 km
    Long,
}

impl Haul {
    pub fn from_distance(km: f64) -> Self {
        if km < 1500.0 {
            Haul::Short
        } else if km < 4000.0 {
            Haul::Medium
        } else {
            Haul::Long
        }
    }

    fn travel_type(&self) -> &'static str {
        match self {
            Haul::Short => "flight_short",
            Haul::Medium => "flight_medium",
            Haul::Long => "flight_long",
        }
    }
}

/// Flight distance and emissions estimated from a ticket price
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FlightEstimate {
    pub estimated_km: f64,
    pub haul: Haul,
    pub co2e_kg: f64,
}

/// Estimates the flight behind a ticket of `amount` EUR from an average price per km.
/// Values are rounded to 2 decimal places.
pub fn estimate_flight_from_spend(amount: f64) -> FlightEstimate {
    let estimated_km = amount / FLIGHT_PRICE_PER_KM;
    let haul = Haul::from_distance(estimated_km);

    FlightEstimate {
        estimated_km: round(estimated_km, 2),
        haul,
        co2e_kg: round(estimated_km * TRAVEL.get_or_default(haul.travel_type()), 2),
    }
}
