use serde::{Deserialize, Serialize};

use crate::{serde::round, Category, EmissionFactor};

/// Decimal places of Scope 3 results
pub const SCOPE_3_DECIMALS: i32 = 6;

/// The outcome of a calculation, in kg.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// kg CO2e. Negative for avoided emissions (e.g. anaerobic digestion).
    pub co2e_kg: f64,
    pub co2_kg: Option<f64>,
    pub ch4_kg: Option<f64>,
    pub n2o_kg: Option<f64>,
    /// whether a default or spend-based table value was used instead of a specific factor
    pub is_estimated: bool,
    /// trace of the branch and assumptions applied
    pub notes: Option<String>,
    /// Scope 3 only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Scope 3 only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

impl CalculationResult {
    /// Returns the result of applying `factor` to `quantity` units. `co2e_kg` is computed by the caller;
    /// each gas present in the factor is multiplied independently by `quantity`.
    pub(crate) fn multiplied(co2e_kg: f64, quantity: f64, factor: &EmissionFactor) -> Self {
        Self {
            co2e_kg,
            co2_kg: factor.co2().map(|f| quantity * f),
            ch4_kg: factor.ch4().map(|f| quantity * f),
            n2o_kg: factor.n2o().map(|f| quantity * f),
            is_estimated: false,
            notes: None,
            category: None,
            category_name: None,
        }
    }

    /// Returns a Scope 3 result: each gas present in the factor is derived from `co2e_kg`
    /// by its ratio to `factor.factor_kg_co2e`, and all values are rounded to
    /// [`SCOPE_3_DECIMALS`]. No gas is derived when `factor.factor_kg_co2e` is zero.
    pub(crate) fn by_ratio(co2e_kg: f64, factor: &EmissionFactor) -> Self {
        let ratio = |gas: Option<f64>| {
            gas.filter(|_| factor.factor_kg_co2e != 0.0)
                .map(|gas| round(co2e_kg * (gas / factor.factor_kg_co2e), SCOPE_3_DECIMALS))
        };
        Self {
            co2e_kg: round(co2e_kg, SCOPE_3_DECIMALS),
            co2_kg: ratio(factor.co2()),
            ch4_kg: ratio(factor.ch4()),
            n2o_kg: ratio(factor.n2o()),
            is_estimated: false,
            notes: None,
            category: None,
            category_name: None,
        }
    }

    pub(crate) fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub(crate) fn estimated(mut self, is_estimated: bool) -> Self {
        self.is_estimated = is_estimated;
        self
    }

    pub(crate) fn in_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self.category_name = Some(category.name().to_string());
        self
    }

    /// co2e in tonnes
    pub fn co2e_tonnes(&self) -> f64 {
        self.co2e_kg / 1000.0
    }
}
