use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;


/// A command isolated from the user's config and home directories.
fn secdash(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("secdash").unwrap();
    cmd.env_remove("SECDASH_DATA")
        .env_remove("RUST_LOG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"));
    cmd
}


#[test]
fn list_prints_views_in_order() {
    let home = TempDir::new().unwrap();
    let output = secdash(&home).arg("list").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();

    let names: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split_whitespace().nth(1))
        .collect();
    assert_eq!(
        names,
        vec![
            "Dashboard",
            "Vulnerabilities",
            "Phishing",
            "MFA",
            "Incidents",
            "Tool",
            "Culture",
            "Compliance",
        ]
    );
    assert!(text.contains("metrics_and_charts"));
}

#[test]
fn show_incidents_prints_table() {
    let home = TempDir::new().unwrap();
    secdash(&home)
        .args(["show", "Incidents", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ransomware Attempt"))
        .stdout(predicate::str::contains("Mitigated"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn show_defaults_to_first_view() {
    let home = TempDir::new().unwrap();
    secdash(&home)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Cybersecurity Executive Dashboard"));
}

#[test]
fn show_unknown_view_fails() {
    let home = TempDir::new().unwrap();
    secdash(&home)
        .args(["show", "Payroll"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown view 'Payroll'"));
}

#[test]
fn show_json_is_structured() {
    let home = TempDir::new().unwrap();
    let output = secdash(&home)
        .args(["show", "Incidents", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["view"], "Incidents");
    assert_eq!(value["kind"], "table");
    assert_eq!(value["body"]["type"], "table");
    assert_eq!(value["body"]["rows"].as_array().unwrap().len(), 3);
}

#[test]
fn show_all_json_covers_every_view() {
    let home = TempDir::new().unwrap();
    let output = secdash(&home)
        .args(["show", "--all", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 8);
}

#[test]
fn check_passes_on_builtin_data() {
    let home = TempDir::new().unwrap();
    secdash(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All 8 views render."));
}

#[test]
fn data_file_overrides_one_view() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("datasets.json");
    fs::write(
        &path,
        r#"{"Incidents": {"type": "table", "columns": ["Date", "Type"], "rows": [["2025-06-01", "Insider Threat"]]}}"#,
    )
    .unwrap();

    secdash(&home)
        .args(["show", "Incidents", "--no-color", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Insider Threat"))
        .stdout(predicate::str::contains("Ransomware Attempt").not());

    // Views missing from the file fall back to the built-ins.
    secdash(&home)
        .args(["show", "Compliance", "--no-color"])
        .env("SECDASH_DATA", &path)
        .assert()
        .success()
        .stdout(predicate::str::contains("NIST CSF"));
}

#[test]
fn check_reports_invalid_data_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("datasets.json");
    fs::write(
        &path,
        r##"{"Phishing": {"type": "series", "labels": ["Jan", "Feb"], "values": [820], "y_label": "Blocked", "color": "#ff7f0e"}}"##,
    )
    .unwrap();

    secdash(&home)
        .arg("check")
        .arg("--data")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Phishing"))
        .stdout(predicate::str::contains("2 labels"))
        .stderr(predicate::str::contains("1 view(s) failed to render"));
}

#[test]
fn unreadable_data_file_is_an_error() {
    let home = TempDir::new().unwrap();
    secdash(&home)
        .args(["list", "--data"])
        .arg(home.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read datasets file"));
}

#[test]
fn export_svg_to_explicit_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("mfa.svg");

    secdash(&home)
        .args(["export", "MFA Adoption", "--svg", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.starts_with("<svg") || svg.starts_with("<?xml"));
    assert!(svg.contains("MFA Adoption"));
}

#[test]
fn export_defaults_to_home_exports_dir() {
    let home = TempDir::new().unwrap();
    secdash(&home).args(["export", "Incidents", "--svg"]).assert().success();
    assert!(home.path().join(".secdash/exports/incidents.svg").exists());
}

#[test]
fn no_subcommand_prints_help() {
    let home = TempDir::new().unwrap();
    secdash(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn data_file_with_unknown_view_is_rejected() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("datasets.json");
    fs::write(
        &path,
        r##"{"phishing": {"type": "series", "labels": ["Jan"], "values": [820], "y_label": "Blocked", "color": "#ff7f0e"}}"##,
    )
    .unwrap();

    secdash(&home)
        .arg("check")
        .arg("--data")
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown view 'phishing' in datasets file"))
        .stdout(predicate::str::contains("All 8 views render.").not());
}

#[test]
fn default_data_file_in_config_dir_is_used() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config").join("secdash");
    fs::create_dir_all(&config).unwrap();
    fs::write(
        config.join("datasets.json"),
        r#"{"Incidents": {"type": "table", "columns": ["Date", "Type"], "rows": [["2025-07-04", "Insider Threat"]]}}"#,
    )
    .unwrap();

    secdash(&home)
        .args(["show", "Incidents", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Insider Threat"))
        .stdout(predicate::str::contains("Ransomware Attempt").not());

    // An explicit file wins over the default.
    let explicit = home.path().join("other.json");
    fs::write(&explicit, "{}").unwrap();
    secdash(&home)
        .args(["show", "Incidents", "--no-color", "--data"])
        .arg(&explicit)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ransomware Attempt"));
}

#[test]
fn views_option_restricts_navigation() {
    let home = TempDir::new().unwrap();
    secdash(&home)
        .args(["list", "--views", "Incidents,Dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incidents"))
        .stdout(predicate::str::contains("Phishing").not());

    secdash(&home)
        .args(["show", "Phishing", "--views", "Incidents,Dashboard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown view 'Phishing'"));

    secdash(&home)
        .args(["list", "--views", "Incidents,Incidents"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("view 'Incidents' is registered twice"));
}

#[test]
fn check_output_has_no_escapes_when_piped() {
    let home = TempDir::new().unwrap();
    secdash(&home)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("ok    Dashboard"))
        .stdout(predicate::str::contains("\x1b[").not());
}
