use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{prt, setup_test_db, temp_out};

fn dump_json(db_path: &str) -> serde_json::Value {
    let out = prt()
        .args(["--db", db_path, "dump"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("dump is JSON")
}

#[test]
fn test_init_creates_table() {
    let db_path = setup_test_db("cli_init");

    prt()
        .args(["--db", &db_path, "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // idempotent
    prt().args(["--db", &db_path, "init"]).assert().success();

    assert_eq!(dump_json(&db_path), serde_json::json!([]));
}

#[test]
fn test_every_button_records_its_duration() {
    let db_path = setup_test_db("cli_buttons");
    prt().args(["--db", &db_path, "init"]).assert().success();

    for id in ["0", "1", "2", "3", "4"] {
        prt()
            .args(["--db", &db_path, "press", id, "--location", "lab"])
            .assert()
            .success()
            .stdout(contains("Recorded press"));
    }

    let rows = dump_json(&db_path);
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 5);

    let minutes: Vec<u64> = rows
        .iter()
        .map(|r| r["duration_minutes"].as_u64().unwrap())
        .collect();
    assert_eq!(minutes, vec![5, 10, 15, 20, 25]);
    assert!(rows.iter().all(|r| r["location"] == "lab"));
}

#[test]
fn test_unknown_button_writes_nothing() {
    let db_path = setup_test_db("cli_unknown");
    prt().args(["--db", &db_path, "init"]).assert().success();

    prt()
        .args(["--db", &db_path, "press", "7"])
        .assert()
        .failure()
        .stderr(contains("Unknown button identifier: 7"));

    assert_eq!(dump_json(&db_path), serde_json::json!([]));
}

#[test]
fn test_press_without_location_is_unknown() {
    let db_path = setup_test_db("cli_default_location");
    prt().args(["--db", &db_path, "init"]).assert().success();

    prt()
        .args(["--db", &db_path, "press", "2"])
        .assert()
        .success()
        .stdout(contains("'unknown'"));

    assert_eq!(dump_json(&db_path)[0]["location"], "unknown");
}

#[test]
fn test_estimate_reports_missing_history() {
    let db_path = setup_test_db("cli_estimate_empty");
    prt().args(["--db", &db_path, "init"]).assert().success();

    prt()
        .args(["--db", &db_path, "estimate"])
        .assert()
        .success()
        .stdout(contains("No presses recorded yet."));

    prt()
        .args(["--db", &db_path, "estimate", "lab"])
        .assert()
        .success()
        .stdout(contains("lab: no estimate"));
}

#[test]
fn test_estimate_after_single_press() {
    let db_path = setup_test_db("cli_estimate_one");
    prt().args(["--db", &db_path, "init"]).assert().success();
    prt()
        .args(["--db", &db_path, "press", "1", "-l", "lab"])
        .assert()
        .success();
    prt()
        .args(["--db", &db_path, "press", "4", "-l", "hall"])
        .assert()
        .success();

    prt()
        .args(["--db", &db_path, "estimate", "lab"])
        .assert()
        .success()
        .stdout(contains("lab: 10.00 min (± 0.00)"));

    prt()
        .args(["--db", &db_path, "estimate"])
        .assert()
        .success()
        .stdout(contains("hall"))
        .stdout(contains("25.00 min"))
        .stdout(contains("lab"))
        .stdout(contains("10.00 min"));
}

#[test]
fn test_dump_csv_to_file() {
    let db_path = setup_test_db("cli_dump_csv");
    let out = temp_out("cli_dump_csv", "csv");
    prt().args(["--db", &db_path, "init"]).assert().success();
    prt()
        .args(["--db", &db_path, "press", "3", "-l", "front desk"])
        .assert()
        .success();

    prt()
        .args(["--db", &db_path, "dump", "--format", "csv", "--output", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed: 1 rows"));

    let text = fs::read_to_string(&out).expect("csv written");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("id,duration_minutes,location,recorded_at"));
    assert!(lines.next().unwrap().starts_with("1,20,front desk,"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_config_file_supplies_database() {
    let db_path = setup_test_db("cli_config_file");
    let cfg_path = temp_out("cli_config_file", "yaml");
    fs::write(&cfg_path, format!("database: \"sqlite://{db_path}\"\n")).unwrap();

    prt()
        .args(["--config", &cfg_path, "init"])
        .assert()
        .success()
        .stdout(contains(db_path.as_str()));

    prt()
        .args(["--config", &cfg_path, "press", "0", "-l", "yard"])
        .assert()
        .success();

    assert_eq!(dump_json(&db_path)[0]["duration_minutes"], 5);
}

#[test]
fn test_bad_config_file_fails() {
    let cfg_path = temp_out("cli_bad_config", "yaml");
    fs::write(&cfg_path, "database: [unterminated\n").unwrap();

    prt()
        .args(["--config", &cfg_path, "estimate"])
        .assert()
        .failure()
        .stderr(contains("Configuration error").and(contains("invalid YAML")));
}
