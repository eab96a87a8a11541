#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wp() -> Command {
    cargo_bin_cmd!("weekplan")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weekplan.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize schema + default subscriptions in the given DB
pub fn init_db(db_path: &str) {
    wp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Open the test DB directly through the library API, with schema guaranteed
pub fn open_initialized(db_path: &str) -> rusqlite::Connection {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    weekplan::db::initialize::init_db(&conn).expect("init db");
    conn
}
