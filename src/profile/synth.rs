//! Deterministic location profile synthesizer
//!
//! Produces a fully populated environmental safety profile from nothing but a
//! coordinate pair and a display name. All variation comes from an integer
//! seed derived from the scaled coordinates; there is no PRNG, no I/O, and no
//! state. Two calls with the same coordinates in the same calendar month
//! produce identical output.
//!
//! Sign conventions for the southern/western hemispheres: the seed floors
//! toward negative infinity and every modulo is normalized into `[0, m)`
//! with `rem_euclid`, so negative seeds never select out-of-catalog indices
//! or negative magnitudes.

use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

use super::{
    AirPollution, Coordinates, Deforestation, GasPlumes, HistoryPoint, LocationProfile,
    PredictionPoint, SafetyLevel, Trend, WaterQuality, WaterStatus,
};

/// Number of monthly entries in the historical series
const HISTORY_MONTHS: usize = 12;

/// Number of monthly entries in the prediction series
const PREDICTION_MONTHS: usize = 6;

/// Amplitude of the sinusoidal perturbation on the air series
const AIR_AMPLITUDE: f64 = 10.0;

/// Amplitude of the cosinusoidal perturbation on the water series
const WATER_AMPLITUDE: f64 = 5.0;

/// Ordered catalog of air pollution source labels; profiles carry a prefix
/// slice of 2-4 entries
const AIR_SOURCES: [&str; 5] = [
    "Vehicle emissions",
    "Industrial activity",
    "Construction dust",
    "Biomass burning",
    "Power generation",
];

/// Fixed contaminant list alternatives, selected by seed
const CONTAMINANT_SETS: [&[&str]; 3] = [
    &["Nitrates", "Phosphates"],
    &["Heavy metals", "Industrial effluent"],
    &["Microplastics", "Sewage discharge"],
];

/// Gas plume source label alternatives, selected by seed
const PLUME_SOURCES: [&str; 2] = ["Industrial facility", "Landfill site"];

/// Errors that can occur when synthesizing a profile
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// Latitude or longitude was NaN or infinite
    #[error("coordinates must be finite numbers (got lat={lat}, lng={lng})")]
    NonFiniteCoordinate { lat: f64, lng: f64 },
}

/// Derives the integer seed from a coordinate pair
///
/// `floor(lat*1000 + lng*1000)`, flooring toward negative infinity.
pub fn coordinate_seed(lat: f64, lng: f64) -> i64 {
    (lat * 1000.0 + lng * 1000.0).floor() as i64
}

/// Normalized modulo with a result in `[0, m)` for seeds of either sign
fn pick(seed: i64, m: i64) -> i64 {
    seed.rem_euclid(m)
}

/// Synthesizes the environmental safety profile for a location
///
/// # Arguments
/// * `lat` - Latitude in decimal degrees (any finite value is accepted)
/// * `lng` - Longitude in decimal degrees (any finite value is accepted)
/// * `name` - Display name, stored verbatim
///
/// # Returns
/// * `Ok(LocationProfile)` - The synthesized profile
/// * `Err(SynthesisError)` - If either coordinate is NaN or infinite
///
/// History and prediction entries are labeled relative to the current local
/// calendar month; everything else depends only on the coordinates.
pub fn synthesize(
    lat: f64,
    lng: f64,
    name: impl Into<String>,
) -> Result<LocationProfile, SynthesisError> {
    synthesize_at(lat, lng, name, current_month_start())
}

/// Synthesizes a profile with an explicit anchor month
///
/// `month` is the first day of the month the historical series ends at.
/// `synthesize` passes the current local month; tests pass a fixed date to
/// pin the series labels.
pub fn synthesize_at(
    lat: f64,
    lng: f64,
    name: impl Into<String>,
    month: NaiveDate,
) -> Result<LocationProfile, SynthesisError> {
    if !lat.is_finite() || !lng.is_finite() {
        return Err(SynthesisError::NonFiniteCoordinate { lat, lng });
    }

    let seed = coordinate_seed(lat, lng);

    let safety_level = match pick(seed, 3) {
        0 => SafetyLevel::Safe,
        1 => SafetyLevel::Moderate,
        _ => SafetyLevel::Unsafe,
    };
    let confidence = (70 + pick(seed, 30)) as u8;

    let air_level = (30 + pick(seed, 50)) as u8;
    let source_count = (2 + pick(seed, 3)) as usize;
    let air_pollution = AirPollution {
        level: air_level,
        trend: trend_for(seed),
        sources: AIR_SOURCES[..source_count]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    };

    let water_score = (60 + pick(seed, 40)) as u8;
    let water_quality = WaterQuality {
        score: water_score,
        contaminants: CONTAMINANT_SETS[pick(seed, 3) as usize]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        status: WaterStatus::from_score(water_score),
    };

    let deforestation = Deforestation {
        risk: (10 + pick(seed, 60)) as u8,
        trend: trend_for(seed),
        affected_area: format!("{}.1 km²", pick(seed, 500) + 50),
    };

    let gas_plumes = GasPlumes {
        detected: pick(seed, 3) != 0,
        intensity: pick(seed, 100) as u8,
        source: PLUME_SOURCES[pick(seed, 2) as usize].to_string(),
    };

    let wobble = pick(seed, 10) as f64;
    let historical_data = (0..HISTORY_MONTHS)
        .map(|i| HistoryPoint {
            date: shift_month(month, i as i32 - (HISTORY_MONTHS as i32 - 1)),
            air_quality: series_value(air_level, AIR_AMPLITUDE, f64::sin, i, wobble),
            water_quality: series_value(water_score, WATER_AMPLITUDE, f64::cos, i, wobble),
        })
        .collect();

    let base_risk = 20 + pick(seed, 40);
    let predictions = (0..PREDICTION_MONTHS)
        .map(|i| PredictionPoint {
            date: shift_month(month, i as i32 + 1),
            air_quality: series_value(air_level, AIR_AMPLITUDE, f64::sin, HISTORY_MONTHS + i, wobble),
            water_quality: series_value(water_score, WATER_AMPLITUDE, f64::cos, HISTORY_MONTHS + i, wobble),
            risk: (base_risk + 2 * i as i64) as u8,
        })
        .collect();

    Ok(LocationProfile {
        name: name.into(),
        coordinates: Coordinates { lat, lng },
        safety_level,
        confidence,
        air_pollution,
        water_quality,
        deforestation,
        gas_plumes,
        historical_data,
        predictions,
    })
}

/// Three-way trend selection shared by the air and deforestation fields
fn trend_for(seed: i64) -> Trend {
    match pick(seed, 3) {
        0 => Trend::Improving,
        1 => Trend::Stable,
        _ => Trend::Worsening,
    }
}

/// One point of the perturbed series: base + amplitude * wave(phase) + wobble
fn series_value(base: u8, amplitude: f64, wave: fn(f64) -> f64, phase: usize, wobble: f64) -> f64 {
    base as f64 + amplitude * wave(phase as f64) + wobble
}

/// First day of the current local calendar month
fn current_month_start() -> NaiveDate {
    let today = Local::now().date_naive();
    NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap_or(today)
}

/// Shifts a first-of-month anchor by a signed number of months
fn shift_month(anchor: NaiveDate, offset: i32) -> NaiveDate {
    let months = anchor.year() * 12 + anchor.month0() as i32 + offset;
    let year = months.div_euclid(12);
    let month0 = months.rem_euclid(12) as u32;
    NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(anchor)
}
