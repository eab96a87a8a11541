use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, wp};

#[test]
fn test_window_upsert_overwrites_existing_day() {
    let db_path = setup_test_db("window_upsert");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "sleep"])
        .assert()
        .success();

    wp().args([
        "--db", &db_path, "window", "sleep", "monday", "--start", "22:00", "--end", "07:00",
    ])
    .assert()
    .success();

    wp().args(["--db", &db_path, "window", "sleep"])
        .assert()
        .success()
        .stdout(contains("22:00"));

    // second edit for the same day must replace, not add a row
    wp().args([
        "--db", &db_path, "window", "sleep", "monday", "--start", "21:30", "--end", "07:00",
    ])
    .assert()
    .success();

    wp().args(["--db", &db_path, "window", "sleep"])
        .assert()
        .success()
        .stdout(contains("21:30"))
        .stdout(contains("22:00").not());
}

#[test]
fn test_window_rejects_unpadded_time() {
    let db_path = setup_test_db("window_unpadded");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "sleep"])
        .assert()
        .success();

    wp().args([
        "--db", &db_path, "window", "sleep", "monday", "--start", "8:00", "--end", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Malformed time"));
}

#[test]
fn test_window_rejects_unknown_day() {
    let db_path = setup_test_db("window_bad_day");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "sleep"])
        .assert()
        .success();

    wp().args([
        "--db", &db_path, "window", "sleep", "funday", "--start", "08:00", "--end", "17:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid day"));
}

#[test]
fn test_window_requires_both_times_for_edit() {
    let db_path = setup_test_db("window_half_edit");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "sleep"])
        .assert()
        .success();

    wp().args(["--db", &db_path, "window", "sleep", "monday", "--start", "22:00"])
        .assert()
        .failure()
        .stderr(contains("--start and --end"));
}

#[test]
fn test_three_letter_day_abbreviations_accepted() {
    let db_path = setup_test_db("window_abbrev");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "work"])
        .assert()
        .success();

    wp().args([
        "--db", &db_path, "window", "work", "wed", "--start", "10:00", "--end", "16:00",
    ])
    .assert()
    .success()
    .stdout(contains("Wednesday"));
}
