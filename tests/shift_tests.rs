use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use vibelog::core::store::AppStore;

mod common;
use common::{add_shift, init_db_with_data, setup_test_db, stored_value, vibelog};

#[test]
fn test_add_and_list_shifts() {
    let db_path = setup_test_db("add_and_list_shifts");
    init_db_with_data(&db_path);

    vibelog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2026-03-01"))
        .stdout(contains("2026-03-15"))
        // 400 + 2h overtime * 56 + 80 sleepover
        .stdout(contains("₪592"))
        .stdout(contains("2 shifts, ₪992 total"));
}

#[test]
fn test_shifts_are_stored_under_trips_key() {
    let db_path = setup_test_db("shifts_stored_under_trips");
    init_db_with_data(&db_path);

    let raw = stored_value(&db_path, "myGrowthApp_trips").expect("trips key present");
    assert!(raw.contains("\"isSleepover\":true"));
    assert!(raw.contains("\"date\":\"2026-03-01\""));
    assert!(raw.contains("night patrol"));
}

#[test]
fn test_list_hides_shifts_before_start_date() {
    let db_path = setup_test_db("list_hides_pre_journey");
    init_db_with_data(&db_path);
    add_shift(&db_path, "2026-01-20", "8", false, None);

    vibelog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2026-01-20").not());

    vibelog()
        .args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("2026-01-20"));
}

#[test]
fn test_vacation_day_is_rejected() {
    let db_path = setup_test_db("vacation_day_rejected");

    vibelog()
        .args(["--db", &db_path, "add", "--date", "2026-05-10", "--hours", "8"])
        .assert()
        .failure()
        .stderr(contains("Vacation"));

    assert_eq!(stored_value(&db_path, "myGrowthApp_trips"), None);
}

#[test]
fn test_course_week_defaults_to_zero_hours() {
    let db_path = setup_test_db("course_week_defaults");

    vibelog()
        .args(["--db", &db_path, "add", "--date", "2026-02-10"])
        .assert()
        .success();

    let raw = stored_value(&db_path, "myGrowthApp_trips").expect("trips key present");
    assert!(raw.contains("\"hours\":0"));
    assert!(raw.contains("קורס הכשרה"));

    vibelog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("₪0"));
}

#[test]
fn test_hours_required_outside_course_week() {
    let db_path = setup_test_db("hours_required");

    vibelog()
        .args(["--db", &db_path, "add", "--date", "2026-03-02"])
        .assert()
        .failure()
        .stderr(contains("hours are required"));
}

#[test]
fn test_negative_hours_rejected() {
    let db_path = setup_test_db("negative_hours");

    vibelog()
        .args(["--db", &db_path, "add", "--date", "2026-03-02", "--hours=-3"])
        .assert()
        .failure()
        .stderr(contains("Invalid hours"));
}

#[test]
fn test_edit_and_delete_shift() {
    let db_path = setup_test_db("edit_and_delete_shift");
    add_shift(&db_path, "2026-03-03", "8", false, None);

    let id = {
        let store = AppStore::open(&db_path).expect("open store");
        store.load_ledger().expect("ledger").records()[0].id.to_string()
    };

    vibelog()
        .args(["--db", &db_path, "edit", &id, "--hours", "11", "--sleepover"])
        .assert()
        .success()
        .stdout(contains("updated"));

    vibelog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        // 400 + 56 + 80
        .stdout(contains("₪536"));

    vibelog()
        .args(["--db", &db_path, "del", &id, "--force"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    vibelog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No shifts logged yet."));

    // deleting again is not an error
    vibelog()
        .args(["--db", &db_path, "del", &id, "--force"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));
}

#[test]
fn test_edit_unknown_shift_fails() {
    let db_path = setup_test_db("edit_unknown_shift");

    vibelog()
        .args(["--db", &db_path, "edit", "42", "--hours", "9"])
        .assert()
        .failure()
        .stderr(contains("Shift #42 not found"));
}
