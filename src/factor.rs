use serde::{Deserialize, Serialize};

/// The in-memory representation of an emission factor, as supplied by a factor repository
/// (e.g. ADEME Base Carbone, DEFRA). Read-only for the calculators.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct EmissionFactor {
    /// the name of the factor (e.g. `Gazole routier`)
    pub name: String,
    /// the unit the factor applies to (e.g. `liters`, `kWh`, `tkm`). Compared case-insensitively.
    pub unit: String,
    /// kg of CO2e per unit
    pub factor_kg_co2e: f64,
    /// kg of CO2 per unit
    #[serde(default)]
    pub factor_kg_co2: Option<f64>,
    /// kg of CH4 per unit
    #[serde(default)]
    pub factor_kg_ch4: Option<f64>,
    /// kg of N2O per unit
    #[serde(default)]
    pub factor_kg_n2o: Option<f64>,
    /// the GHG Protocol scope the factor was published for
    #[serde(default)]
    pub scope: Option<u8>,
    /// the publisher of the factor (e.g. `ademe`, `defra`, `meter_reading`)
    #[serde(default)]
    pub source: Option<String>,
    /// the country (ISO 3166) the factor applies to
    #[serde(default)]
    pub country: Option<String>,
    /// uncertainty of the factor, in percent
    #[serde(default)]
    pub uncertainty_percent: Option<f64>,
    #[serde(default, with = "crate::serde::optional_date")]
    pub valid_from: Option<time::Date>,
    #[serde(default, with = "crate::serde::optional_date")]
    pub valid_until: Option<time::Date>,
    #[serde(default = "active")]
    pub is_active: bool,
}

fn active() -> bool {
    true
}

/// Origin of the activity quantity a factor is applied to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// a bank transaction (an amount of money)
    Transaction,
    /// a physical activity (fuel, energy, distance, ...)
    Activity,
}

/// Data quality tier of a calculation, from the origin of its activity data and factor
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    Primary,
    Secondary,
    Tertiary,
}

const PRIMARY_SOURCES: [&str; 2] = ["direct_measurement", "meter_reading"];
const SECONDARY_SOURCES: [&str; 4] = ["ademe", "uba", "defra", "epa"];

impl EmissionFactor {
    /// Returns a new active [`EmissionFactor`] without per-gas breakdown
    pub fn new(name: impl Into<String>, unit: impl Into<String>, factor_kg_co2e: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            factor_kg_co2e,
            is_active: true,
            ..Default::default()
        }
    }

    /// Returns this factor with the per-gas components set
    pub fn with_gases(mut self, co2: Option<f64>, ch4: Option<f64>, n2o: Option<f64>) -> Self {
        self.factor_kg_co2 = co2;
        self.factor_kg_ch4 = ch4;
        self.factor_kg_n2o = n2o;
        self
    }

    /// The unit, lowercased
    pub fn unit(&self) -> String {
        self.unit.to_lowercase()
    }

    /// kg CO2 per unit, when published and non-zero
    pub fn co2(&self) -> Option<f64> {
        self.factor_kg_co2.filter(|x| *x != 0.0)
    }

    /// kg CH4 per unit, when published and non-zero
    pub fn ch4(&self) -> Option<f64> {
        self.factor_kg_ch4.filter(|x| *x != 0.0)
    }

    /// kg N2O per unit, when published and non-zero
    pub fn n2o(&self) -> Option<f64> {
        self.factor_kg_n2o.filter(|x| *x != 0.0)
    }

    /// Whether the factor is active and `date` is within its validity period.
    /// Missing bounds are open.
    pub fn is_valid_at(&self, date: time::Date) -> bool {
        self.is_active
            && self.valid_from.map_or(true, |from| from <= date)
            && self.valid_until.map_or(true, |until| date <= until)
    }

    /// Returns the [`DataQuality`] of applying this factor to data of type `source_type`.
    pub fn data_quality(&self, source_type: SourceType) -> DataQuality {
        let source = self.source.as_deref().unwrap_or_default();
        if source_type == SourceType::Activity && PRIMARY_SOURCES.contains(&source) {
            DataQuality::Primary
        } else if SECONDARY_SOURCES.contains(&source) {
            DataQuality::Secondary
        } else {
            DataQuality::Tertiary
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::date;

    #[test]
    fn validity() {
        let mut factor = EmissionFactor::new("Electricity FR", "kWh", 0.0569);
        assert!(factor.is_valid_at(date!(2024 - 06 - 01)));

        factor.valid_from = Some(date!(2024 - 01 - 01));
        factor.valid_until = Some(date!(2024 - 12 - 31));
        assert!(factor.is_valid_at(date!(2024 - 01 - 01)));
        assert!(factor.is_valid_at(date!(2024 - 12 - 31)));
        assert!(!factor.is_valid_at(date!(2023 - 12 - 31)));
        assert!(!factor.is_valid_at(date!(2025 - 01 - 01)));

        factor.is_active = false;
        assert!(!factor.is_valid_at(date!(2024 - 06 - 01)));
    }

    #[test]
    fn quality() {
        let mut factor = EmissionFactor::new("Meter", "kWh", 0.1);
        factor.source = Some("meter_reading".to_string());
        assert_eq!(factor.data_quality(SourceType::Activity), DataQuality::Primary);
        assert_eq!(factor.data_quality(SourceType::Transaction), DataQuality::Tertiary);

        factor.source = Some("ademe".to_string());
        assert_eq!(factor.data_quality(SourceType::Activity), DataQuality::Secondary);

        factor.source = None;
        assert_eq!(factor.data_quality(SourceType::Activity), DataQuality::Tertiary);
    }

    #[test]
    fn zero_gas_is_absent() {
        let factor = EmissionFactor::new("x", "kg", 1.0).with_gases(Some(0.0), Some(0.1), None);
        assert_eq!(factor.co2(), None);
        assert_eq!(factor.ch4(), Some(0.1));
        assert_eq!(factor.n2o(), None);
    }

    #[test]
    fn deserializes_dates() {
        let factor: EmissionFactor = serde_json::from_str(
            r#"{"name": "Diesel", "unit": "L", "factor_kg_co2e": 2.51, "valid_from": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(factor.valid_from, Some(date!(2024 - 01 - 01)));
        assert_eq!(factor.valid_until, None);
        assert!(factor.is_active);
    }
}
