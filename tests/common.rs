#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn vibelog() -> Command {
    cargo_bin_cmd!("vibelog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_vibelog.sqlite", name));
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

/// Initialize the store and log a few shifts inside the journey
pub fn init_db_with_data(db_path: &str) {
    vibelog()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_shift(db_path, "2026-03-01", "12", true, Some("night patrol"));
    add_shift(db_path, "2026-03-15", "8", false, None);
}

pub fn add_shift(db_path: &str, date: &str, hours: &str, sleepover: bool, notes: Option<&str>) {
    let mut args = vec!["--db", db_path, "add", "--date", date, "--hours", hours];
    if sleepover {
        args.push("--sleepover");
    }
    if let Some(n) = notes {
        args.push("--notes");
        args.push(n);
    }
    vibelog().args(&args).assert().success();
}

/// Raw value stored under `key`, read straight from SQLite.
pub fn stored_value(db_path: &str, key: &str) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    vibelog::db::storage::get(&conn, key).expect("read key")
}
