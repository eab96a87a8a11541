use predicates::str::contains;

mod common;
use common::{init_db, setup_test_db, wp};

#[test]
fn test_init_seeds_default_subscriptions() {
    let db_path = setup_test_db("init_defaults");
    init_db(&db_path);

    wp().args(["--db", &db_path, "subs"])
        .assert()
        .success()
        .stdout(contains("work"))
        .stdout(contains("sleep"))
        .stdout(contains("exercise"))
        .stdout(contains("pomodoro"))
        .stdout(contains("inactive"));
}

#[test]
fn test_activate_seeds_seven_default_windows() {
    let db_path = setup_test_db("activate_seeds");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "sleep"])
        .assert()
        .success();

    let mut assert = wp()
        .args(["--db", &db_path, "window", "sleep"])
        .assert()
        .success()
        .stdout(contains("08:00"))
        .stdout(contains("17:00"));

    for day in [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ] {
        assert = assert.stdout(contains(day));
    }
}

#[test]
fn test_activation_round_trip_leaves_zero_windows() {
    let db_path = setup_test_db("round_trip");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "exercise"])
        .assert()
        .success();

    wp().args(["--db", &db_path, "deactivate", "exercise"])
        .assert()
        .success();

    wp().args(["--db", &db_path, "window", "exercise"])
        .assert()
        .success()
        .stdout(contains("No windows"));
}

#[test]
fn test_activate_unknown_subscription_fails() {
    let db_path = setup_test_db("activate_unknown");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "gardening"])
        .assert()
        .failure()
        .stderr(contains("No subscription found"));
}

#[test]
fn test_subs_add_creates_user_defined_subscription() {
    let db_path = setup_test_db("subs_add");
    init_db(&db_path);

    wp().args(["--db", &db_path, "subs", "--add", "reading"])
        .assert()
        .success();

    wp().args(["--db", &db_path, "subs"])
        .assert()
        .success()
        .stdout(contains("reading"));

    // names are unique
    wp().args(["--db", &db_path, "subs", "--add", "reading"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_activate_twice_is_a_no_op() {
    let db_path = setup_test_db("activate_twice");
    init_db(&db_path);

    wp().args(["--db", &db_path, "activate", "work"])
        .assert()
        .success();

    wp().args(["--db", &db_path, "activate", "work"])
        .assert()
        .success()
        .stdout(contains("already active"));
}
