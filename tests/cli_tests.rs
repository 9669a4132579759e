use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_shift, init_db_with_data, setup_test_db, stored_value, vibelog};

#[test]
fn test_init_creates_store() {
    let db_path = setup_test_db("init_creates_store");

    vibelog()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Store initialized"));

    assert!(std::path::Path::new(&db_path).exists());

    vibelog()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}

#[test]
fn test_summary_applies_goal_cutoff() {
    let db_path = setup_test_db("summary_goal_cutoff");
    // journey shift before the goal start date
    add_shift(&db_path, "2026-02-03", "10", false, None);
    add_shift(&db_path, "2026-03-01", "12", false, None);

    vibelog()
        .args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("₪512 / ₪50,000"))
        .stdout(contains("Earned    : ₪912"))
        .stdout(contains("2 (1 with overtime)"));
}

#[test]
fn test_summary_week_and_badges() {
    let db_path = setup_test_db("summary_week_badges");
    init_db_with_data(&db_path);

    vibelog()
        .args(["--db", &db_path, "summary", "--week", "--badges"])
        .assert()
        .success()
        .stdout(contains("Weekly recap"))
        .stdout(contains("Achievements"));
}

#[test]
fn test_settings_update_and_show() {
    let db_path = setup_test_db("settings_update_show");

    vibelog()
        .args([
            "--db", &db_path, "settings", "--name", "Dana Levi", "--rate", "500", "--goal",
            "60000", "--workout-time", "18:30",
        ])
        .assert()
        .success()
        .stdout(contains("Settings saved."))
        .stdout(contains("Dana Levi"))
        .stdout(contains("₪60,000"))
        .stdout(contains("18:30"));

    assert_eq!(
        stored_value(&db_path, "myGrowthApp_shiftRate").as_deref(),
        Some("500")
    );

    vibelog()
        .args(["--db", &db_path, "settings", "--rate=-1"])
        .assert()
        .failure()
        .stderr(contains("non-negative"));
}

#[test]
fn test_event_add_list_and_share() {
    let db_path = setup_test_db("event_add_list_share");

    for (time, text) in [("09:15", "checkpoint"), ("08:00", "briefing")] {
        vibelog()
            .args([
                "--db", &db_path, "event", text, "--date", "2026-03-02", "--time", time,
            ])
            .assert()
            .success();
    }

    vibelog()
        .args(["--db", &db_path, "event", "--list"])
        .assert()
        .success()
        .stdout(contains("02.03.2026"))
        .stdout(contains("checkpoint"));

    // share text follows insertion order, oldest first
    vibelog()
        .args(["--db", &db_path, "event", "--share", "--date", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("[09:15] - checkpoint\n[08:00] - briefing"));

    vibelog()
        .args(["--db", &db_path, "event", "   ", "--date", "2026-03-02"])
        .assert()
        .failure()
        .stderr(contains("must not be empty"));
}

#[test]
fn test_training_checklist_and_completion() {
    let db_path = setup_test_db("training_checklist");

    // 2026-03-01 is a Sunday: strength day
    vibelog()
        .args([
            "--db", &db_path, "settings", "--sound", "false",
        ])
        .assert()
        .success();

    vibelog()
        .args(["--db", &db_path, "training", "--date", "2026-03-01", "--check", "squat"])
        .assert()
        .success()
        .stdout(contains("Strength"));

    vibelog()
        .args(["--db", &db_path, "training", "--date", "2026-03-01", "--done"])
        .assert()
        .success()
        .stdout(contains("Workout completed"));

    let checklist = stored_value(&db_path, "myGrowthApp_training_checklist_01/03/2026")
        .expect("checklist stored");
    assert!(checklist.contains("\"squat\":true"));
    assert_eq!(
        stored_value(&db_path, "myGrowthApp_training_complete_01/03/2026").as_deref(),
        Some("true")
    );

    vibelog()
        .args(["--db", &db_path, "training", "--date", "2026-03-01", "--check", "burpees"])
        .assert()
        .failure()
        .stderr(contains("Unknown checklist item"));
}

#[test]
fn test_gear_toggle_and_readiness() {
    let db_path = setup_test_db("gear_toggle_readiness");

    vibelog()
        .args(["--db", &db_path, "gear", "--toggle", "gun"])
        .assert()
        .success()
        .stdout(contains("נשק אישי"));

    vibelog()
        .args(["--db", &db_path, "gear", "--check"])
        .assert()
        .failure()
        .stderr(contains("missing"))
        .stderr(contains("ammo"))
        .stderr(contains("gun,").not());

    vibelog()
        .args(["--db", &db_path, "gear", "--reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Equipment list reset."));
}

#[test]
fn test_reset_clears_everything() {
    let db_path = setup_test_db("reset_clears_everything");
    init_db_with_data(&db_path);

    vibelog()
        .args(["--db", &db_path, "reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Store cleared"));

    assert_eq!(stored_value(&db_path, "myGrowthApp_trips"), None);

    vibelog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No shifts logged yet."));

    vibelog()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("reset"));
}
