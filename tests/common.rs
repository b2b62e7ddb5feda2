#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use ludoview::models::Snapshot;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Reference date of the fixture.
pub const TODAY: &str = "2024-06-30";

pub const FIXTURE: &str = r#"{
  "items": [
    {"id": 1, "name": "Carcassonne", "enabled": true, "status": "in", "age": 8, "players_min": 2, "players_max": 5, "loanstop": "2024-02-10"},
    {"id": 5, "name": "Dixit", "enabled": false, "status": "in", "age": 8, "players_min": 3, "players_max": 8},
    {"id": 3, "name": "Jungle Speed", "enabled": true, "status": "out", "age": 6, "players_min": 2, "players_max": 8, "loanstop": "2024-06-01"},
    {"id": 12, "name": "Mölkky", "enabled": true, "status": "out", "age": 6, "outside": true, "players_min": 2, "players_max": 99},
    {"id": 20, "name": "Jenga Géant", "enabled": true, "status": "in", "age": 4, "big": true, "players_min": 1, "players_max": 99},
    {"id": 7, "name": "Petit Ours Brun", "enabled": true, "status": "in", "age": 2, "players_min": 1, "players_max": 1},
    {"id": 31, "name": "Boîte sans âge"}
  ],
  "users": [
    {"id": 1, "name": "Alice Martin", "role": "admin", "enabled": true, "credit": 12.5,
     "emails": ["alice@example.org"], "loans": 2, "oldest_loan": "2023-05-22", "subscription": "2025-01-01"},
    {"id": 2, "name": "Bruno Petit", "role": "user", "enabled": false, "emails": ["bruno@example.org"]},
    {"id": 3, "name": "Chloé Durand", "role": "benevole", "enabled": true,
     "emails": ["Chloe.D@mail.fr"], "loans": 1, "subscription": "2024-01-01"},
    {"id": 4, "name": "Bernard Roux", "enabled": false},
    {"id": 7, "name": "Gaston Lefèvre", "role": "user", "enabled": true, "emails": []}
  ],
  "loans": [
    {"id": 100, "item": 3, "user": 1, "start": "2024-05-20", "stop": "2024-06-20", "status": "out"},
    {"id": 101, "item": 1, "user": 1, "start": "2023-05-01", "stop": "2023-05-22", "status": "out"},
    {"id": 102, "item": 12, "user": 3, "start": "2024-06-10", "stop": "2024-07-01", "status": "out"},
    {"id": 103, "item": 7, "user": 3, "start": "2024-06-06", "stop": "2024-06-27", "status": "out"},
    {"id": 104, "item": 20, "user": 1, "start": "2024-03-01", "stop": "2024-03-22", "status": "in"},
    {"id": 105, "item": 5, "user": 3, "start": "2024-03-15", "stop": "2024-04-05", "status": "in"}
  ],
  "ledger": [
    {"day": "2024-01-01", "user": 7, "item_id": -1, "money": 40},
    {"day": "2024-01-01", "user": 7, "item_id": 3, "money": 5},
    {"day": "2024-01-01", "user": 1, "item_id": -2, "money": 10},
    {"day": "2024-01-02", "user": 1, "item_id": 3, "money": 0.5},
    {"day": "2024-01-02", "user": 3, "item_id": 12, "money": 0},
    {"day": "2024-01-02", "user": 1, "item_id": 1, "money": 0.5}
  ]
}"#;

pub fn today() -> NaiveDate {
    NaiveDate::parse_from_str(TODAY, "%Y-%m-%d").expect("fixture date")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub fn fixture() -> Snapshot {
    Snapshot::from_json(FIXTURE).expect("fixture parses")
}

/// Fresh directory inside the system temp dir, used as HOME for one test.
pub fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("ludoview_{}_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp home");
    path
}

/// Write the fixture snapshot and return its path.
pub fn write_fixture(name: &str) -> String {
    write_snapshot(name, FIXTURE)
}

pub fn write_snapshot(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("ludoview_{}_snapshot.json", name));
    fs::write(&path, content).expect("write snapshot");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("ludoview_{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// The binary, isolated in its own HOME, reading the fixture as of TODAY.
pub fn lv(name: &str) -> Command {
    let home = temp_home(name);
    let data = write_fixture(name);
    let mut cmd = cargo_bin_cmd!("ludoview");
    cmd.env("HOME", &home)
        .env_remove("LUDOVIEW_LOG")
        .args(["--data", &data, "--today", TODAY]);
    cmd
}

/// Same binary, same HOME across calls (session tests).
pub fn lv_in(home: &PathBuf, data: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("ludoview");
    cmd.env("HOME", home)
        .env_remove("LUDOVIEW_LOG")
        .args(["--data", data, "--today", TODAY]);
    cmd
}
