use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CalculationResult, Category, EmissionFactor, Metadata, Scope};

/// Errors of a malformed [`ActivityRecord`]. Calculations themselves never fail.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("record {id}: scope must be 1, 2 or 3, got {scope}")]
    UnknownScope { id: String, scope: u8 },
    #[error("record {id}: invalid metadata: {source}")]
    InvalidMetadata {
        id: String,
        source: serde_json::Error,
    },
    #[error("malformed row: {0}")]
    Csv(#[from] csv::Error),
}

/// An activity quantity with its emission factor, as a flat row of a CSV file.
/// `metadata` is a JSON object with the fields of [`Metadata`] (empty for none).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub id: String,
    pub scope: u8,
    pub quantity: f64,
    pub factor_name: String,
    pub unit: String,
    pub factor_kg_co2e: f64,
    #[serde(default)]
    pub factor_kg_co2: Option<f64>,
    #[serde(default)]
    pub factor_kg_ch4: Option<f64>,
    #[serde(default)]
    pub factor_kg_n2o: Option<f64>,
    #[serde(default)]
    pub factor_source: Option<String>,
    #[serde(default)]
    pub metadata: String,
}

/// A [`CalculationResult`] as a flat row of a CSV file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub id: String,
    pub scope: u8,
    pub co2e_kg: f64,
    pub co2_kg: Option<f64>,
    pub ch4_kg: Option<f64>,
    pub n2o_kg: Option<f64>,
    pub is_estimated: bool,
    pub notes: Option<String>,
    pub category: Option<u8>,
    pub category_name: Option<String>,
}

impl ActivityRecord {
    /// The emission factor of this record
    pub fn factor(&self) -> EmissionFactor {
        let mut factor = EmissionFactor::new(&self.factor_name, &self.unit, self.factor_kg_co2e)
            .with_gases(self.factor_kg_co2, self.factor_kg_ch4, self.factor_kg_n2o);
        factor.scope = Some(self.scope);
        factor.source = self.factor_source.clone();
        factor
    }

    /// The metadata of this record
    /// # Error
    /// Errors if the metadata is not a JSON object of [`Metadata`]
    pub fn metadata(&self) -> Result<Metadata, RecordError> {
        if self.metadata.trim().is_empty() {
            return Ok(Metadata::default());
        }
        serde_json::from_str(&self.metadata).map_err(|source| RecordError::InvalidMetadata {
            id: self.id.clone(),
            source,
        })
    }
}

impl ResultRecord {
    pub fn new(id: String, scope: Scope, result: CalculationResult) -> Self {
        Self {
            id,
            scope: scope.number(),
            co2e_kg: result.co2e_kg,
            co2_kg: result.co2_kg,
            ch4_kg: result.ch4_kg,
            n2o_kg: result.n2o_kg,
            is_estimated: result.is_estimated,
            notes: result.notes,
            category: result.category.map(|c| c.number()),
            category_name: result.category_name,
        }
    }

    pub fn category(&self) -> Option<Category> {
        self.category.and_then(|c| Category::try_from(c).ok())
    }
}

/// Calculates the emissions of an [`ActivityRecord`]
/// # Error
/// Errors if the scope or the metadata of the record are invalid
pub fn calculate_record(record: &ActivityRecord) -> Result<ResultRecord, RecordError> {
    let scope = Scope::try_from(record.scope).map_err(|_| RecordError::UnknownScope {
        id: record.id.clone(),
        scope: record.scope,
    })?;
    let metadata = record.metadata()?;

    let result = crate::calculate(scope, record.quantity, &record.factor(), &metadata);
    Ok(ResultRecord::new(record.id.clone(), scope, result))
}

/// The results of a CSV of [`ActivityRecord`]s
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub results: Vec<ResultRecord>,
    /// number of rows that could not be read or calculated
    pub skipped: usize,
}

/// Calculates every row of a CSV of [`ActivityRecord`]s. Rows that cannot be read or
/// calculated are logged and skipped.
pub fn calculate_csv(data: &[u8]) -> Batch {
    let mut skipped = 0;
    let results = crate::csv::deserialize::<ActivityRecord>(data)
        .filter_map(|row| {
            match row
                .map_err(RecordError::from)
                .and_then(|record| calculate_record(&record))
            {
                Ok(result) => Some(result),
                Err(e) => {
                    log::error!("{e}");
                    skipped += 1;
                    None
                }
            }
        })
        .collect();
    Batch { results, skipped }
}
