//! Core profile data model for Envsafe CLI
//!
//! This module contains the data types used throughout the application for
//! representing a location's environmental safety profile: the overall
//! verdict, air pollution, water quality, deforestation, gas plumes, and the
//! historical/prediction series rendered in charts.

pub mod synth;

pub use synth::{synthesize, synthesize_at, SynthesisError};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Overall safety verdict for a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyLevel {
    Safe,
    Moderate,
    Unsafe,
}

impl SafetyLevel {
    /// Uppercase display label used in badges (e.g. "UNSAFE")
    pub fn label(&self) -> &'static str {
        match self {
            SafetyLevel::Safe => "SAFE",
            SafetyLevel::Moderate => "MODERATE",
            SafetyLevel::Unsafe => "UNSAFE",
        }
    }
}

/// Direction a metric is moving over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

impl Trend {
    /// Short arrow-prefixed label for list and detail views
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improving => "↓ improving",
            Trend::Stable => "→ stable",
            Trend::Worsening => "↑ worsening",
        }
    }
}

/// Water quality status derived from the score thresholds
///
/// Not an independent field: always computed from the score
/// (`>80` → Excellent, `>60` → Good, else Fair).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterStatus {
    Excellent,
    Good,
    Fair,
}

impl WaterStatus {
    /// Maps a water quality score to its status label
    pub fn from_score(score: u8) -> Self {
        if score > 80 {
            WaterStatus::Excellent
        } else if score > 60 {
            WaterStatus::Good
        } else {
            WaterStatus::Fair
        }
    }
}

/// Coordinate pair, passed through from the caller unchanged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Air pollution metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPollution {
    /// Pollution level index (30-79)
    pub level: u8,
    /// Direction the level is moving
    pub trend: Trend,
    /// Contributing source labels (2-4 entries from a fixed catalog)
    pub sources: Vec<String>,
}

/// Water quality metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterQuality {
    /// Quality score (60-99), higher is better
    pub score: u8,
    /// Detected contaminant labels
    pub contaminants: Vec<String>,
    /// Status label derived from the score
    pub status: WaterStatus,
}

/// Deforestation metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deforestation {
    /// Risk index (10-69)
    pub risk: u8,
    /// Direction the risk is moving
    pub trend: Trend,
    /// Formatted affected area, e.g. "116.1 km²"
    pub affected_area: String,
}

/// Gas plume detection summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GasPlumes {
    /// Whether a plume was detected near the location
    pub detected: bool,
    /// Plume intensity (0-99)
    pub intensity: u8,
    /// Estimated source label
    pub source: String,
}

/// One month of historical series data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    /// First day of the month this entry covers
    pub date: NaiveDate,
    /// Air quality series value
    pub air_quality: f64,
    /// Water quality series value
    pub water_quality: f64,
}

/// One month of forward prediction data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPoint {
    /// First day of the predicted month
    pub date: NaiveDate,
    /// Predicted air quality series value
    pub air_quality: f64,
    /// Predicted water quality series value
    pub water_quality: f64,
    /// Predicted risk index, increasing by 2 per month
    pub risk: u8,
}

/// Full environmental safety profile for one location
///
/// Immutable once constructed; every derived field is a pure function of the
/// coordinate seed and the anchor month used for date labeling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationProfile {
    /// Display name, passed through unchanged
    pub name: String,
    /// Input coordinates, passed through unchanged
    pub coordinates: Coordinates,
    /// Overall safety verdict
    pub safety_level: SafetyLevel,
    /// Verdict confidence percentage (70-99)
    pub confidence: u8,
    pub air_pollution: AirPollution,
    pub water_quality: WaterQuality,
    pub deforestation: Deforestation,
    pub gas_plumes: GasPlumes,
    /// 12 entries, one per month, ending at the current month (oldest first)
    pub historical_data: Vec<HistoryPoint>,
    /// 6 entries, one per month, starting the month after current
    pub predictions: Vec<PredictionPoint>,
}
