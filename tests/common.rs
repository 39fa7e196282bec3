#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use huskyhours::models::{ActivityKind, NewShift, ShiftRow};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hh() -> Command {
    cargo_bin_cmd!("huskyhours")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_huskyhours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB through the CLI
pub fn init_db(db_path: &str) {
    hh().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Log one shift through the CLI
pub fn add_shift(db_path: &str, date: &str, time: &str, activity: &str, hours: &str) {
    hh().args([
        "--db", db_path, "add", date, time, "--activity", activity, "--hours", hours,
    ])
    .assert()
    .success();
}

/// Initialize DB and add a small dataset spanning three semesters
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    add_shift(db_path, "2024-02-01", "9:00", "tour", "3");
    add_shift(db_path, "2024-06-01", "14:30", "training", "5");
    add_shift(db_path, "2024-10-15", "10", "registration", "2.5");
}

pub fn row(date: &str, time: &str, activity: ActivityKind, hours: f64) -> ShiftRow {
    ShiftRow {
        date: date.to_string(),
        time: time.to_string(),
        activity,
        hours,
    }
}

pub fn submit(date: &str, raw_time: &str, activity: ActivityKind, hours: f64) -> NewShift {
    NewShift {
        date: date.to_string(),
        raw_time: raw_time.to_string(),
        activity,
        hours,
    }
}
