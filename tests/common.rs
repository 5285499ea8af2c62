#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tb() -> Command {
    cargo_bin_cmd!("timebank")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timebank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB and seed one company (id 1, geofence 100 m around
/// 45.0,9.0) with one employee (id 1, expected 480 min/day).
pub fn init_db_with_roster(db_path: &str) {
    tb()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tb()
        .args([
            "--db", db_path, "company", "add", "--name", "HQ", "--lat", "45.0", "--lon", "9.0",
            "--radius", "100",
        ])
        .assert()
        .success();

    tb()
        .args([
            "--db",
            db_path,
            "employee",
            "add",
            "--company",
            "1",
            "--name",
            "Ada",
            "--expected",
            "480",
        ])
        .assert()
        .success();
}

/// Record a clock event at an explicit instant, at the company site.
pub fn clock_at(db_path: &str, employee: &str, company: &str, at: &str) {
    tb()
        .args([
            "--db", db_path, "clock", "--employee", employee, "--company", company, "--lat",
            "45.0", "--lon", "9.0", "--at", at,
        ])
        .assert()
        .success();
}
