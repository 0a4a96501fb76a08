//! End-to-end tests for the claimpulse binary

use assert_cmd::Command;
use predicates::prelude::*;

fn claimpulse() -> Command {
    Command::cargo_bin("claimpulse").expect("binary built")
}

#[test]
fn help_names_the_subcommands() {
    claimpulse()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scenarios"))
        .stdout(predicate::str::contains("glossary"));
}

#[test]
fn scenarios_lists_three_treatment_checker_entries() {
    claimpulse()
        .args(["scenarios", "--area", "treatment-checker"])
        .assert()
        .success()
        .stdout(predicate::str::contains("treatment-checker (3 scenarios)"))
        .stdout(predicate::str::contains("1. Physical Therapy Treatment"))
        .stdout(predicate::str::contains("2. MRI Scan Diagnostic"))
        .stdout(predicate::str::contains("3. Specialist Consultation"));
}

#[test]
fn scenarios_json_is_parseable() {
    let output = claimpulse()
        .args(["scenarios", "--area", "treatment-checker", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let scenarios = parsed.as_array().expect("array of scenarios");
    assert_eq!(scenarios.len(), 3);
    assert_eq!(scenarios[0]["id"], 1);
    assert_eq!(scenarios[0]["name"], "Physical Therapy Treatment");
}

#[test]
fn scenarios_unknown_area_lists_known_areas() {
    claimpulse()
        .args(["scenarios", "--area", "time-travel"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No scenarios for area 'time-travel'"))
        .stdout(predicate::str::contains("upload-policy"))
        .stdout(predicate::str::contains("persona-eob"));
}

#[test]
fn scenarios_without_area_covers_every_feature() {
    claimpulse()
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload-policy (3 scenarios)"))
        .stdout(predicate::str::contains("treatment-checker (3 scenarios)"))
        .stdout(predicate::str::contains("documentation (3 scenarios)"))
        .stdout(predicate::str::contains("claim-predictor (3 scenarios)"))
        .stdout(predicate::str::contains("persona-eob (3 scenarios)"));
}

#[test]
fn glossary_search_finds_deductible() {
    claimpulse()
        .args(["glossary", "--search", "deductible"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deductible [Costs & Payments]"));
}

#[test]
fn glossary_category_filter_is_validated() {
    claimpulse()
        .args(["glossary", "--category", "astrology"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'astrology'"));
}

#[test]
fn glossary_json_lists_all_terms() {
    let output = claimpulse()
        .args(["glossary", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(parsed.as_array().expect("array of terms").len(), 18);
}
