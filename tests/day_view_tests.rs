use predicates::str::contains;

mod common;
use common::{init_db, open_initialized, setup_test_db, wp};
use weekplan::db::subscriptions::{find_subscription, set_active};
use weekplan::db::windows::upsert_window;
use weekplan::models::weekday::Weekday;

// 2025-09-01 is a Monday, 2025-09-03 a Wednesday.

#[test]
fn test_overnight_end_pulled_from_next_day_window() {
    let db_path = setup_test_db("overnight_next_day");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "sleep"])
        .assert()
        .success();

    wp().args([
        "--db", &db_path, "window", "sleep", "monday", "--start", "22:00", "--end", "07:00",
    ])
    .assert()
    .success();

    wp().args([
        "--db", &db_path, "window", "sleep", "tuesday", "--start", "23:00", "--end", "06:30",
    ])
    .assert()
    .success();

    // Tuesday's wake time wins over the 07:00 default
    wp().args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("sleep"))
        .stdout(contains("2025-09-01 22:00"))
        .stdout(contains("2025-09-02 06:30"));
}

#[test]
fn test_overnight_end_falls_back_to_seven_am() {
    let db_path = setup_test_db("overnight_fallback");

    // Seed through the library API: a Monday window with no Tuesday row,
    // which the CLI's activation (seeding all seven days) cannot produce.
    {
        let conn = open_initialized(&db_path);
        let sub = find_subscription(&conn, "sleep").expect("default subscription");
        set_active(&conn, sub.id, true).expect("set active");
        upsert_window(&conn, sub.id, Weekday::Monday, "22:00", "07:00").expect("upsert");
    }

    wp().args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("sleep"))
        .stdout(contains("2025-09-02 07:00"));
}

#[test]
fn test_day_view_merges_ad_hoc_and_generated() {
    let db_path = setup_test_db("merge");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "exercise"])
        .assert()
        .success();

    wp().args([
        "--db",
        &db_path,
        "add",
        "Dentist",
        "--start",
        "2025-09-03 09:00",
        "--end",
        "2025-09-03 10:00",
        "--desc",
        "Yearly checkup",
    ])
    .assert()
    .success();

    wp().args(["--db", &db_path, "day", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("Dentist"))
        .stdout(contains("exercise"));
}

#[test]
fn test_day_view_sorted_by_start_instant() {
    let db_path = setup_test_db("sorted");
    init_db(&db_path);

    // generated occurrence starts 08:00; the ad-hoc one later the same day
    wp().args(["--db", &db_path, "activate", "work"])
        .assert()
        .success();

    wp().args([
        "--db",
        &db_path,
        "add",
        "Standup",
        "--start",
        "2025-09-03 11:30",
        "--end",
        "2025-09-03 11:45",
    ])
    .assert()
    .success();

    let output = wp()
        .args(["--db", &db_path, "day", "2025-09-03"])
        .output()
        .expect("run day command");
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");

    let work_pos = stdout.find("work").expect("work occurrence missing");
    let standup_pos = stdout.find("Standup").expect("ad-hoc event missing");
    assert!(
        work_pos < standup_pos,
        "expected 08:00 occurrence before 11:30 event:\n{}",
        stdout
    );
}

#[test]
fn test_event_keyed_by_start_date_only() {
    let db_path = setup_test_db("start_date_key");
    init_db(&db_path);

    // spills past midnight but must appear (once) on its start date
    wp().args([
        "--db",
        &db_path,
        "add",
        "Night flight",
        "--start",
        "2025-09-03 23:30",
        "--end",
        "2025-09-04 02:10",
    ])
    .assert()
    .success();

    wp().args(["--db", &db_path, "day", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("Night flight"));

    wp().args(["--db", &db_path, "day", "2025-09-04"])
        .assert()
        .success()
        .stdout(contains("Nothing scheduled"));
}

#[test]
fn test_empty_day_prints_placeholder() {
    let db_path = setup_test_db("empty_day");
    init_db(&db_path);

    wp().args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Nothing scheduled"));
}

#[test]
fn test_day_json_output_tags_provenance() {
    let db_path = setup_test_db("json_day");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "pomodoro"])
        .assert()
        .success();

    wp().args([
        "--db",
        &db_path,
        "add",
        "Lunch",
        "--start",
        "2025-09-03 12:00",
        "--end",
        "2025-09-03 13:00",
    ])
    .assert()
    .success();

    wp().args(["--db", &db_path, "day", "2025-09-03", "--json"])
        .assert()
        .success()
        .stdout(contains("\"generated\""))
        .stdout(contains("\"adhoc\""))
        .stdout(contains("\"Lunch\""));
}

#[test]
fn test_malformed_window_skipped_with_warning() {
    let db_path = setup_test_db("malformed_window");

    {
        let conn = open_initialized(&db_path);
        let sleep = find_subscription(&conn, "sleep").expect("sleep");
        set_active(&conn, sleep.id, true).expect("set active");
        // bypasses CLI validation; simulates a corrupted row
        upsert_window(&conn, sleep.id, Weekday::Wednesday, "8pm", "17:00").expect("upsert");

        let work = find_subscription(&conn, "work").expect("work");
        set_active(&conn, work.id, true).expect("set active");
        upsert_window(&conn, work.id, Weekday::Wednesday, "09:00", "17:00").expect("upsert");
    }

    // the healthy window still materializes; the bad one is reported
    wp().args(["--db", &db_path, "day", "2025-09-03"])
        .assert()
        .success()
        .stdout(contains("work"))
        .stdout(contains("skipped"));
}

#[test]
fn test_deactivated_subscription_gone_from_day_view() {
    let db_path = setup_test_db("deactivated_gone");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "exercise"])
        .assert()
        .success();

    wp().args(["--db", &db_path, "deactivate", "exercise"])
        .assert()
        .success();

    wp().args(["--db", &db_path, "day", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Nothing scheduled"));
}
