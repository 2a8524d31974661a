//! Aggregate estimate of Scope 3 category 7 (employee commuting) for a whole workforce.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{scope3_factors::TRAVEL, serde::round, Category};

/// Share of employees (0-1) using each transport mode (keys of the travel table)
pub type ModalSplit = BTreeMap<String, f64>;

/// Mode that never emits
pub const BIKE_WALK: &str = "bike_walk";

pub const DEFAULT_WORK_DAYS_PER_YEAR: u32 = 220;

/// Modal split used when none is given
pub fn default_modal_split() -> ModalSplit {
    [
        ("car_average", 0.55),
        ("car_electric", 0.05),
        ("bus_urban", 0.10),
        ("metro", 0.10),
        ("train_ter", 0.05),
        (BIKE_WALK, 0.15),
    ]
    .into_iter()
    .map(|(mode, share)| (mode.to_string(), share))
    .collect()
}

/// Distance and emissions of one transport mode, rounded to 2 decimal places
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ModeEmissions {
    pub distance_km: f64,
    pub co2e_kg: f64,
}

/// The inputs of a [`CommutingEstimate`]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommutingAssumptions {
    pub employee_count: u32,
    /// work days after remote work
    pub work_days_per_year: f64,
    /// one way
    pub avg_distance_km: f64,
    /// 0-100
    pub remote_work_percentage: f64,
    pub modal_split: ModalSplit,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommutingEstimate {
    pub category: Category,
    pub category_name: String,
    /// sum of the emissions of all modes
    pub total_co2e_kg: f64,
    pub per_employee_kg: f64,
    pub breakdown: BTreeMap<String, ModeEmissions>,
    pub assumptions: CommutingAssumptions,
}

/// Estimates the annual commuting emissions of `employee_count` employees living on average
/// `avg_distance_km` (one way) from work.
///
/// * `modal_split`: share of employees per mode; [`default_modal_split`] when empty.
///   A non-empty split replaces the default entirely; it is not merged into it.
///   Modes missing from the travel table emit nothing.
/// * `remote_work_fraction`: fraction (0-1) of work days worked remotely.
///
/// Each mode contributes `avg_distance_km * 2 * effective_work_days * share * employee_count`
/// km times its factor; [`BIKE_WALK`] contributes nothing.
pub fn calculate_commuting(
    employee_count: u32,
    avg_distance_km: f64,
    work_days_per_year: u32,
    modal_split: ModalSplit,
    remote_work_fraction: f64,
) -> CommutingEstimate {
    let modal_split = if modal_split.is_empty() {
        default_modal_split()
    } else {
        modal_split
    };
    let effective_work_days = work_days_per_year as f64 * (1.0 - remote_work_fraction);

    let breakdown = modal_split
        .iter()
        .map(|(mode, share)| {
            if mode == BIKE_WALK {
                return (mode.clone(), ModeEmissions::default());
            }
            let factor = TRAVEL.get(mode).unwrap_or_else(|| {
                log::warn!("commuting mode \"{mode}\" has no factor; counted as zero");
                0.0
            });
            let distance_km =
                avg_distance_km * 2.0 * effective_work_days * share * employee_count as f64;
            let emissions = ModeEmissions {
                distance_km: round(distance_km, 2),
                co2e_kg: round(distance_km * factor, 2),
            };
            (mode.clone(), emissions)
        })
        .collect::<BTreeMap<_, _>>();

    let total_co2e_kg = round(breakdown.values().map(|mode| mode.co2e_kg).sum(), 2);

    CommutingEstimate {
        category: Category::EmployeeCommuting,
        category_name: Category::EmployeeCommuting.name().to_string(),
        total_co2e_kg,
        per_employee_kg: round(total_co2e_kg / employee_count.max(1) as f64, 2),
        breakdown,
        assumptions: CommutingAssumptions {
            employee_count,
            work_days_per_year: effective_work_days,
            avg_distance_km,
            remote_work_percentage: remote_work_fraction * 100.0,
            modal_split,
        },
    }
}
