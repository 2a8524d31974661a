use std::error::Error;

use ghg::commuting::{default_modal_split, ModalSplit};
use ghg::scope2::FactorSource;
use ghg::{Category, EmissionFactor, Metadata, Method, Scope};

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

fn in_category(category: u8, metadata: Metadata) -> Metadata {
    Metadata {
        scope_3_category: Some(category),
        ..metadata
    }
}

/// Calculations hold no state: the same inputs always yield the same result
#[test]
fn calculations_are_pure() {
    let factor = EmissionFactor::new("Diesel", "liters", 2.51).with_gases(Some(2.4), Some(0.01), None);
    let metadata = Metadata {
        renewable_percentage: Some(30.0),
        scope_3_category: Some(6),
        ..Default::default()
    };

    for scope in [Scope::One, Scope::Two, Scope::Three] {
        let first = ghg::calculate(scope, 42.0, &factor, &metadata);
        let second = ghg::calculate(scope, 42.0, &factor, &metadata);
        assert_eq!(first, second);
    }
}

/// Units no calculator recognizes are multiplied by the factor
#[test]
fn unrecognized_units_multiply() {
    let factor = EmissionFactor::new("Refrigerant", "unit", 0.5);
    let metadata = Metadata::default();

    for scope in [Scope::One, Scope::Two, Scope::Three] {
        let result = ghg::calculate(scope, 3.0, &factor, &metadata);
        assert_eq!(result.co2e_kg, 1.5);
        assert!(!result.is_estimated);
    }
}

/// 50 L of diesel at 2.51 kg CO2e/L
#[test]
fn scope_1_fuel() {
    let factor = EmissionFactor::new("Gazole routier", "L", 2.51);
    let result = ghg::calculate(Scope::One, 50.0, &factor, &Metadata::default());

    assert!(abs_difference(result.co2e_kg, 125.5) < 1e-9);
    assert!(result.notes.unwrap().starts_with("Fuel: diesel, 50L"));
}

#[test]
fn scope_2_fully_renewable() {
    let factor = EmissionFactor::new("Electricity", "kWh", 0.366);
    let metadata = Metadata {
        renewable_percentage: Some(100.0),
        ..Default::default()
    };
    let result = ghg::calculate(Scope::Two, 1000.0, &factor, &metadata);
    assert_eq!(result.co2e_kg, 0.0);
}

/// Without a supplier factor, the market-based method falls back to the published factor
#[test]
fn scope_2_market_without_supplier() {
    let factor = EmissionFactor::new("Electricity", "kWh", 0.366);
    let location = ghg::calculate(Scope::Two, 1000.0, &factor, &Metadata::default());
    let market = ghg::calculate(
        Scope::Two,
        1000.0,
        &factor,
        &Metadata {
            method: Some(Method::Market),
            ..Default::default()
        },
    );
    assert_eq!(location.co2e_kg, market.co2e_kg);

    let market = ghg::scope2::market_based(1000.0, "FR", None, 0.0);
    assert_eq!(market.factor_source, FactorSource::ResidualMix);
    assert!(abs_difference(market.co2e_kg, 87.6) < 1e-9);

    let location = ghg::scope2::location_based(1000.0, "FR");
    assert_eq!(location.factor_source, FactorSource::GridAverage);
    assert!(market.co2e_kg > location.co2e_kg);
}

/// Anaerobic digestion of organic waste avoids emissions
#[test]
fn scope_3_negative_emissions() {
    let factor = EmissionFactor::new("Food waste", "kg", 0.0);
    let metadata = in_category(
        5,
        Metadata {
            waste_type: Some("organic".to_string()),
            treatment: Some("anaerobic".to_string()),
            ..Default::default()
        },
    );
    let result = ghg::calculate(Scope::Three, 100.0, &factor, &metadata);
    assert_eq!(result.co2e_kg, -4.0);
    assert_eq!(result.category, Some(Category::Waste));
    assert_eq!(result.category_name.as_deref(), Some("Waste generated in operations"));
}

/// 10 laptops used 3 years at 45 kg CO2e per year
#[test]
fn scope_3_use_of_sold_products() {
    let factor = EmissionFactor::new("Laptop", "unit", 0.0);
    let metadata = in_category(
        11,
        Metadata {
            product_type: Some("laptop".to_string()),
            lifetime_years: Some(3.0),
            units_sold: Some(10.0),
            ..Default::default()
        },
    );
    let result = ghg::calculate(Scope::Three, 1.0, &factor, &metadata);
    assert_eq!(result.co2e_kg, 1350.0);
    assert_eq!(result.category, Some(Category::UseOfSoldProducts));
}

#[test]
fn scope_3_purchased_goods_estimation() {
    let supplier = Metadata {
        method: Some(Method::SupplierSpecific),
        ..Default::default()
    };

    let factor = EmissionFactor::new("Supplier", "EUR", 0.1);
    let result = ghg::calculate(Scope::Three, 1000.0, &factor, &in_category(1, supplier.clone()));
    assert!(!result.is_estimated);

    let factor = EmissionFactor::new("Supplier", "EUR", 0.0);
    let result = ghg::calculate(Scope::Three, 1000.0, &factor, &in_category(1, supplier));
    assert!(result.is_estimated);

    let result = ghg::calculate(Scope::Three, 1000.0, &factor, &in_category(1, Metadata::default()));
    assert!(result.is_estimated);
}

#[test]
fn scope_3_rounds() {
    let factor = EmissionFactor::new("Item", "unit", 0.1234567);
    let result = ghg::calculate(Scope::Three, 1.0, &factor, &Metadata::default());
    assert_eq!(result.co2e_kg, 0.123457);
}

#[test]
fn scope_3_result_to_json() -> Result<(), Box<dyn Error>> {
    let factor = EmissionFactor::new("Food waste", "kg", 0.0);
    let metadata = in_category(
        5,
        Metadata {
            waste_type: Some("organic".to_string()),
            treatment: Some("anaerobic".to_string()),
            ..Default::default()
        },
    );
    let result = ghg::calculate(Scope::Three, 100.0, &factor, &metadata);

    let json = serde_json::to_string(&result)?;
    assert!(json.contains("\"category\":5"));
    assert_eq!(serde_json::from_str::<ghg::CalculationResult>(&json)?, result);
    Ok(())
}

#[test]
fn commuting() {
    let estimate = ghg::calculate_commuting(120, 15.0, 220, ModalSplit::new(), 0.3);

    assert_eq!(estimate.assumptions.modal_split, default_modal_split());
    assert_eq!(estimate.breakdown["bike_walk"].co2e_kg, 0.0);

    let sum: f64 = estimate.breakdown.values().map(|mode| mode.co2e_kg).sum();
    assert!(abs_difference(sum, estimate.total_co2e_kg) < 0.01);
    assert!(abs_difference(estimate.per_employee_kg * 120.0, estimate.total_co2e_kg) < 120.0 * 0.01);
}

#[test]
fn batch() -> Result<(), Box<dyn Error>> {
    let data = b"id,scope,quantity,factor_name,unit,factor_kg_co2e,factor_kg_co2,factor_kg_ch4,factor_kg_n2o,factor_source,metadata
fuel,1,50,Diesel,L,2.51,,,,ademe,
power,2,1000,Electricity,kWh,0.366,,,,,\"{\"\"renewable_percentage\"\": 100}\"
waste,3,100,Food waste,kg,0,,,,,\"{\"\"scope_3_category\"\": 5, \"\"waste_type\"\": \"\"organic\"\", \"\"treatment\"\": \"\"anaerobic\"\"}\"
bad,4,1,Unknown,kg,1,,,,,
empty,1,,Diesel,L,2.51,,,,,
";
    // the unknown scope and the empty quantity are skipped; the other rows are calculated
    let batch = ghg::record::calculate_csv(data);
    assert_eq!(batch.skipped, 2);

    let results = batch.results;
    assert_eq!(results.len(), 3);
    assert!(abs_difference(results[0].co2e_kg, 125.5) < 1e-9);
    assert_eq!(results[1].co2e_kg, 0.0);
    assert_eq!(results[2].co2e_kg, -4.0);
    assert_eq!(results[2].category(), Some(Category::Waste));

    let output = ghg::csv::serialize(results.iter())?;
    let output = String::from_utf8(output)?;
    assert!(output.starts_with("id,scope,co2e_kg,"));
    assert_eq!(output.lines().count(), 4);
    Ok(())
}
