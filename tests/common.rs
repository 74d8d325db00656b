#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Utc};
use pressrate::db::initialize::init_db;
use pressrate::db::queries::insert_press;
use pressrate::models::button::Button;
use pressrate::models::press::NewPress;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary, isolated from any DATABASE_URL in the caller's environment.
pub fn prt() -> Command {
    let mut cmd = cargo_bin_cmd!("pressrate");
    cmd.env_remove("DATABASE_URL")
        .env_remove("PRESSRATE_BIND")
        .env_remove("PRESSRATE_STATIC_DIR")
        .env("RUST_LOG", "warn");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pressrate.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique output file path inside the temp dir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema directly through the library
pub fn init_schema(db_path: &str) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    init_db(&conn).expect("init db");
}

/// Insert presses with explicit timestamps, bypassing the server clock
pub fn seed(db_path: &str, rows: &[(Button, &str, DateTime<Utc>)]) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    init_db(&conn).expect("init db");
    for (button, location, at) in rows {
        insert_press(&conn, &NewPress::at(*button, Some(location.to_string()), *at))
            .expect("insert press");
    }
}
