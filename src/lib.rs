#![forbid(unsafe_code)]
//! Calculation engine of greenhouse gas emissions under the GHG Protocol.
//!
//! Each calculator turns an activity quantity (liters of fuel, kWh, km, EUR spent, kg of waste, ...)
//! and an [`EmissionFactor`] into a [`CalculationResult`] in kg of CO2e:
//! * [`scope1`]: direct emissions
//! * [`scope2`]: purchased energy, location- and market-based
//! * [`scope3`]: the 15 categories of the value chain, and [`commuting`] estimates
//!
//! All calculations are pure: no I/O, no shared state, no failure on malformed input.
mod category;
pub mod commuting;
pub mod csv;
mod factor;
mod metadata;
mod model;
pub mod record;
pub mod scope1;
pub mod scope2;
pub mod scope3;
pub mod scope3_factors;
pub mod serde;
mod table;

pub use category::*;
pub use commuting::calculate_commuting;
pub use factor::*;
pub use metadata::{Metadata, Method, TravelClass};
pub use model::*;
pub use table::FactorTable;

/// A scope of the GHG Protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Scope {
    /// direct emissions
    One,
    /// indirect emissions of purchased energy
    Two,
    /// other indirect emissions of the value chain
    Three,
}

impl Scope {
    pub fn number(&self) -> u8 {
        match self {
            Scope::One => 1,
            Scope::Two => 2,
            Scope::Three => 3,
        }
    }
}

impl TryFrom<u8> for Scope {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Scope::One),
            2 => Ok(Scope::Two),
            3 => Ok(Scope::Three),
            _ => Err(format!("{number} is not a scope (1-3)")),
        }
    }
}

impl From<Scope> for u8 {
    fn from(scope: Scope) -> Self {
        scope.number()
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scope {}", self.number())
    }
}

/// Returns the emissions of `quantity` units of `factor.unit` with the calculator of `scope`.
pub fn calculate(
    scope: Scope,
    quantity: f64,
    factor: &EmissionFactor,
    metadata: &Metadata,
) -> CalculationResult {
    match scope {
        Scope::One => scope1::calculate(quantity, factor, metadata),
        Scope::Two => scope2::calculate(quantity, factor, metadata),
        Scope::Three => scope3::calculate(quantity, factor, metadata),
    }
}
