//! Integration tests for the `pilc` binary.
//!
//! Every invocation passes `--config` pointing at a temporary settings file so
//! a settings file in the user's config directory cannot change the output.

use std::process::{Command, Output};
use tempfile::TempDir;

struct Pilc {
    _dir: TempDir,
    config: std::path::PathBuf,
}

impl Pilc {
    fn new() -> Self {
        Self::with_settings("")
    }

    fn with_settings(toml: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("settings.toml");
        std::fs::write(&config, toml).unwrap();
        Self { _dir: dir, config }
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pilc"))
            .args(args)
            .arg("--config")
            .arg(&self.config)
            .output()
            .expect("failed to run pilc")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ---------------------------------------------------------------------------
// pilc design
// ---------------------------------------------------------------------------

#[test]
fn design_prints_table() {
    let out = Pilc::new().run(&["design", "-t", "bw", "-f", "10MHz", "-n", "3"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("Butterworth Pi Low Pass Filter"));
    assert!(text.contains("Cutoff Frequency:    10 MHz"));
    assert!(text.contains("C1: 318.31 pF"));
    assert!(text.contains("L1: 1.59 uH"));
    assert!(text.contains("GND"));
}

#[test]
fn design_json_is_machine_readable() {
    let out = Pilc::new().run(&[
        "design", "-t", "chebyshev", "-f", "7MHz", "-r", "0.5", "-n", "5", "--format", "json",
    ]);
    assert!(out.status.success(), "{}", stderr(&out));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["filter_type"], "chebyshev");
    assert_eq!(v["order"], 5);
    assert_eq!(v["ripple_db"], 0.5);
    assert_eq!(v["components"].as_array().unwrap().len(), 5);
}

#[test]
fn design_csv_rows() {
    let out = Pilc::new().run(&["design", "-t", "bessel", "-f", "1MHz", "-n", "4", "--format", "csv"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "component,kind,value,unit");
    assert_eq!(lines.len(), 5);
}

#[test]
fn design_even_chebyshev_is_raised_by_default() {
    let out = Pilc::new().run(&["design", "-t", "ch", "-f", "7MHz", "-n", "4"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("order 4 raised to 5"));
}

#[test]
fn design_even_chebyshev_can_be_rejected() {
    let out = Pilc::new().run(&[
        "design", "-t", "ch", "-f", "7MHz", "-n", "4", "--even-order", "reject",
    ]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("odd order"));
}

#[test]
fn design_policy_from_settings() {
    let pilc = Pilc::with_settings("even_order = \"reject\"\n");
    let out = pilc.run(&["design", "-t", "ch", "-f", "7MHz", "-n", "4"]);
    assert!(!out.status.success());
}

#[test]
fn design_from_factory_preset() {
    let out = Pilc::new().run(&["design", "--preset", "lpf-40m"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("Chebyshev Pi Low Pass Filter"));
    assert!(text.contains("Cutoff Frequency:    8 MHz"));
}

#[test]
fn design_with_standard_values() {
    let out = Pilc::new().run(&["design", "-t", "bw", "-f", "10MHz", "--eseries", "E12"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("Standard Values (E12)"));
}

#[test]
fn design_rejects_bad_frequency() {
    let out = Pilc::new().run(&["design", "-t", "bw", "-f", "fast"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("fast"));
}

#[test]
fn design_requires_type() {
    let out = Pilc::new().run(&["design", "-f", "1MHz"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("-t/--type"));
}

#[test]
fn design_order_out_of_range() {
    let out = Pilc::new().run(&["design", "-t", "bw", "-f", "1MHz", "-n", "12"]);
    assert!(!out.status.success());
}

// ---------------------------------------------------------------------------
// pilc response
// ---------------------------------------------------------------------------

#[test]
fn response_csv_header_and_points() {
    let out = Pilc::new().run(&[
        "response", "-t", "bw", "-f", "1MHz", "--points", "11", "--format", "csv",
    ]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "frequency_hz,magnitude_db");
    assert_eq!(lines.len(), 12);
}

#[test]
fn response_plot_uses_settings_size() {
    let pilc = Pilc::with_settings("[plot]\nwidth = 50\nheight = 10\n");
    let out = pilc.run(&["response", "-t", "bessel", "-f", "455kHz"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("Frequency Response (dB)"));
    assert!(text.contains("-3 dB at"));
}

// ---------------------------------------------------------------------------
// pilc match / explain / designs
// ---------------------------------------------------------------------------

#[test]
fn match_finds_nearest_value() {
    let out = Pilc::new().run(&["match", "1530", "--series", "E24"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("E24:      1500"));
}

#[test]
fn match_json() {
    let out = Pilc::new().run(&["match", "4.7e-9", "--json"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).unwrap();
    assert_eq!(v["series"], "E24");
    assert!(v["error_percent"].as_f64().unwrap().abs() < 0.01);
}

#[test]
fn match_rejects_non_positive() {
    let out = Pilc::new().run(&["match", "-5"]);
    assert!(!out.status.success());
}

#[test]
fn explain_family() {
    let out = Pilc::new().run(&["explain", "bessel"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).contains("group delay"));
}

#[test]
fn designs_lists_factory_entries() {
    let out = Pilc::new().run(&["designs", "--factory"]);
    assert!(out.status.success(), "{}", stderr(&out));

    let text = stdout(&out);
    assert!(text.contains("Factory Designs"));
    assert!(text.contains("lpf-40m"));
    assert!(!text.contains("User Designs"));
}

#[test]
fn malformed_settings_fail() {
    let pilc = Pilc::with_settings("points = \"many\"\n");
    let out = pilc.run(&["response", "-t", "bw", "-f", "1MHz"]);
    assert!(!out.status.success());
}
