#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tk() -> Command {
    cargo_bin_cmd!("tankerlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tankerlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a small fake photo inside the temp dir and return its path
pub fn temp_image(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tankerlog.jpg", name));
    fs::write(&path, b"\xFF\xD8\xFF\xE0 fake jpeg").expect("write temp image");
    path.to_string_lossy().to_string()
}

/// Initialize DB (schema + sample records) in test mode
pub fn init_db(db_path: &str) {
    tk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn login(db_path: &str, username: &str) {
    tk().args(["--db", db_path, "login", username, "1234"])
        .assert()
        .success();
}

/// Fixed wall-clock instant used by the library-level tests
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(h, min, 0))
        .expect("valid test date")
}
