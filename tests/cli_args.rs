//! Integration tests for CLI argument handling and one-shot JSON output
//!
//! Tests the --at, --search, --name, and --json flags from the command line.
//! Network-dependent behavior (--search) is covered by unit tests against
//! response fixtures; these tests only exercise offline paths.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_envsafe"))
        .args(args)
        .output()
        .expect("Failed to execute envsafe")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("envsafe"), "Help should mention envsafe");
    assert!(stdout.contains("--at"), "Help should mention --at flag");
    assert!(stdout.contains("--search"), "Help should mention --search flag");
    assert!(stdout.contains("--json"), "Help should mention --json flag");
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(output.status.success());
}

#[test]
fn test_invalid_coordinate_prints_error_and_exits() {
    let output = run_cli(&["--at", "somewhere-warm"]);
    assert!(
        !output.status.success(),
        "Expected invalid coordinate to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid coordinate"),
        "Should print error message about invalid coordinate: {}",
        stderr
    );
}

#[test]
fn test_json_without_target_prints_error_and_exits() {
    let output = run_cli(&["--json"]);
    assert!(!output.status.success(), "Expected --json alone to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--json requires"),
        "Should explain that --json needs a target: {}",
        stderr
    );
}

#[test]
fn test_at_conflicts_with_search() {
    let output = run_cli(&["--at", "1,2", "--search", "bangalore"]);
    assert!(!output.status.success());
}

#[test]
fn test_json_at_bangalore_emits_exact_derived_values() {
    let output = run_cli(&["--json", "--at", "12.9716,77.5946", "--name", "Bangalore"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let profile: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    // seed = floor(12971.6 + 77594.6) = 90566
    assert_eq!(profile["name"], "Bangalore");
    assert_eq!(profile["coordinates"]["lat"], 12.9716);
    assert_eq!(profile["coordinates"]["lng"], 77.5946);
    assert_eq!(profile["safetyLevel"], "unsafe");
    assert_eq!(profile["confidence"], 96);
    assert_eq!(profile["airPollution"]["level"], 46);
    assert_eq!(profile["airPollution"]["trend"], "worsening");
    assert_eq!(profile["airPollution"]["sources"].as_array().unwrap().len(), 4);
    assert_eq!(profile["waterQuality"]["score"], 66);
    assert_eq!(profile["waterQuality"]["status"], "Good");
    assert_eq!(profile["deforestation"]["risk"], 36);
    assert_eq!(profile["deforestation"]["affectedArea"], "116.1 km²");
    assert_eq!(profile["gasPlumes"]["detected"], true);
    assert_eq!(profile["gasPlumes"]["intensity"], 66);

    let history = profile["historicalData"].as_array().unwrap();
    assert_eq!(history.len(), 12);
    let predictions = profile["predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 6);

    // Risk ramps from 26 by 2 per month
    for (i, point) in predictions.iter().enumerate() {
        assert_eq!(point["risk"], 26 + 2 * i as u64);
    }
}

#[test]
fn test_json_at_without_name_uses_fallback() {
    let output = run_cli(&["--json", "--at", "12.9716,77.5946"]);
    assert!(output.status.success());

    let profile: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(profile["name"], "Location (12.9716, 77.5946)");
}

#[test]
fn test_json_output_is_deterministic() {
    let first = run_cli(&["--json", "--at", "-33.8688,151.2093", "--name", "Sydney"]);
    let second = run_cli(&["--json", "--at", "-33.8688,151.2093", "--name", "Sydney"]);
    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(
        first.stdout, second.stdout,
        "Same coordinates must produce identical output"
    );
}

#[test]
fn test_json_southern_hemisphere_values_stay_in_bounds() {
    let output = run_cli(&["--json", "--at", "-54.8019,-68.3030", "--name", "Ushuaia"]);
    assert!(output.status.success());

    let profile: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");

    let confidence = profile["confidence"].as_u64().unwrap();
    assert!((70..=99).contains(&confidence));
    let level = profile["airPollution"]["level"].as_u64().unwrap();
    assert!((30..=79).contains(&level));
    let score = profile["waterQuality"]["score"].as_u64().unwrap();
    assert!((60..=99).contains(&score));
    let risk = profile["deforestation"]["risk"].as_u64().unwrap();
    assert!((10..=69).contains(&risk));
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use envsafe::cli::{parse_coordinate_arg, Cli, StartupConfig, Target};

    #[test]
    fn test_cli_no_args_has_no_target() {
        let cli = Cli::parse_from(["envsafe"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(config.target.is_none());
        assert!(!config.json_output);
    }

    #[test]
    fn test_cli_at_flag_parses_coordinate() {
        let cli = Cli::parse_from(["envsafe", "--at", "49.2827,-123.1207"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        match config.target {
            Some(Target::Coordinate { lat, lng, name }) => {
                assert!((lat - 49.2827).abs() < 1e-9);
                assert!((lng - (-123.1207)).abs() < 1e-9);
                assert!(name.is_none());
            }
            other => panic!("Expected coordinate target, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_search_flag_becomes_search_target() {
        let cli = Cli::parse_from(["envsafe", "--search", "mexico city"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.target, Some(Target::Search("mexico city".to_string())));
    }

    #[test]
    fn test_parse_coordinate_arg_rejects_garbage() {
        assert!(parse_coordinate_arg("garbage").is_err());
        assert!(parse_coordinate_arg("1;2").is_err());
        assert!(parse_coordinate_arg("").is_err());
    }

    #[test]
    fn test_parse_coordinate_arg_accepts_integer_degrees() {
        let (lat, lng) = parse_coordinate_arg("0,0").unwrap();
        assert_eq!(lat, 0.0);
        assert_eq!(lng, 0.0);
    }
}
