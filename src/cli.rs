//! Command-line interface parsing for Envsafe CLI
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --at coordinate flag, the --search query flag, and the one-shot --json
//! output mode.

use clap::Parser;
use thiserror::Error;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The coordinate argument could not be parsed into finite lat/lng
    #[error("Invalid coordinate: '{0}'. Expected decimal degrees as LAT,LNG (e.g. 12.9716,77.5946)")]
    InvalidCoordinate(String),

    /// --json was given without a target location
    #[error("--json requires a target location: pass --at LAT,LNG or --search QUERY")]
    MissingTarget,
}

/// Envsafe CLI - View environmental safety profiles for any location
#[derive(Parser, Debug)]
#[command(name = "envsafe")]
#[command(about = "Environmental safety profiles: air, water, deforestation, and gas plumes")]
#[command(version)]
pub struct Cli {
    /// Open directly at a coordinate, given as LAT,LNG in decimal degrees
    ///
    /// Examples:
    ///   envsafe --at 12.9716,77.5946
    ///   envsafe --at 12.9716,77.5946 --name Bangalore
    #[arg(long, value_name = "LAT,LNG", conflicts_with = "search", allow_hyphen_values = true)]
    pub at: Option<String>,

    /// Display name for the --at coordinate (defaults to "Location (lat, lng)");
    /// ignored without --at
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Geocode a free-text query and list the matching places
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Print the profile as JSON instead of opening the TUI
    ///
    /// Requires --at or --search; with --search the top result is used.
    #[arg(long)]
    pub json: bool,
}

/// Where the application should look first on startup
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// An explicit coordinate from --at, with an optional display name
    Coordinate {
        lat: f64,
        lng: f64,
        name: Option<String>,
    },
    /// A free-text query from --search, to be geocoded
    Search(String),
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StartupConfig {
    /// The startup target, or None for the built-in watchlist
    pub target: Option<Target>,
    /// Whether to print JSON and exit instead of opening the TUI
    pub json_output: bool,
}

/// Parses a "LAT,LNG" coordinate argument into a finite (lat, lng) pair.
///
/// # Arguments
/// * `s` - The coordinate string from CLI, e.g. "12.9716,77.5946"
///
/// # Returns
/// * `Ok((lat, lng))` if both parts parse to finite numbers
/// * `Err(CliError::InvalidCoordinate)` otherwise
pub fn parse_coordinate_arg(s: &str) -> Result<(f64, f64), CliError> {
    let invalid = || CliError::InvalidCoordinate(s.to_string());

    let (lat_str, lng_str) = s.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat_str.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng_str.trim().parse().map_err(|_| invalid())?;

    if !lat.is_finite() || !lng.is_finite() {
        return Err(invalid());
    }

    Ok((lat, lng))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if a coordinate is malformed or --json has no target
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let target = match (&cli.at, &cli.search) {
            (Some(coordinate), _) => {
                let (lat, lng) = parse_coordinate_arg(coordinate)?;
                Some(Target::Coordinate {
                    lat,
                    lng,
                    name: cli.name.clone(),
                })
            }
            (None, Some(query)) => Some(Target::Search(query.clone())),
            (None, None) => None,
        };

        if cli.json && target.is_none() {
            return Err(CliError::MissingTarget);
        }

        Ok(StartupConfig {
            target,
            json_output: cli.json,
        })
    }
}
