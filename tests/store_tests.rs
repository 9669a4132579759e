use chrono::NaiveDate;
use vibelog::core::store::AppStore;
use vibelog::db::migrate::migrate_legacy_keys;
use vibelog::db::storage;
use vibelog::models::shift::ShiftRecord;

mod common;
use common::setup_test_db;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_legacy_keys_are_copied_once_and_kept() {
    let db_path = setup_test_db("legacy_keys_copied");

    {
        let store = AppStore::open(&db_path).expect("open store");
        storage::set(store.conn(), "userName", "Old Name").unwrap();
        storage::set(store.conn(), "shiftRate", "450").unwrap();
        storage::set(
            store.conn(),
            "dailyEvents",
            r#"[{"id":1,"date":"2026-03-01","time":"08:00","text":"legacy"}]"#,
        )
        .unwrap();
        // already migrated: must not be overwritten
        storage::set(store.conn(), "myGrowthApp_shiftRate", "500").unwrap();
    }

    let store = AppStore::open(&db_path).expect("reopen store");
    let conn = store.conn();

    assert_eq!(
        storage::get(conn, "myGrowthApp_userName").unwrap().as_deref(),
        Some("Old Name")
    );
    assert_eq!(
        storage::get(conn, "myGrowthApp_shiftRate").unwrap().as_deref(),
        Some("500")
    );
    assert!(storage::get(conn, "userName").unwrap().is_some());
    assert!(storage::get(conn, "dailyEvents").unwrap().is_some());

    let events = store.load_events().unwrap();
    assert_eq!(events.events().len(), 1);
    assert_eq!(events.events()[0].text, "legacy");

    // second pass changes nothing
    let keys_before = storage::keys(conn).unwrap();
    assert!(migrate_legacy_keys(conn).unwrap().is_empty());
    assert_eq!(storage::keys(conn).unwrap(), keys_before);
}

#[test]
fn test_ledger_survives_reopen() {
    let db_path = setup_test_db("ledger_survives_reopen");

    let original = {
        let store = AppStore::open(&db_path).expect("open store");
        let mut ledger = store.load_ledger().unwrap();
        ledger
            .add_at(ShiftRecord::new(d(2026, 3, 4), 10.5, true, "long one"), 1_000)
            .unwrap();
        ledger
            .add_at(ShiftRecord::new(d(2026, 2, 9), 0.0, false, "קורס הכשרה"), 1_000)
            .unwrap();
        ledger
            .add_at(ShiftRecord::new(d(2026, 3, 1), 7.25, false, ""), 5_000)
            .unwrap();
        store.save_ledger(&ledger).unwrap();
        ledger
    };

    let store = AppStore::open(&db_path).expect("reopen store");
    let reloaded = store.load_ledger().unwrap();

    assert_eq!(reloaded.records(), original.records());
    let ids: Vec<i64> = reloaded.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1_000, 1_001, 5_000]);
}

#[test]
fn test_event_log_survives_reopen_newest_first() {
    let db_path = setup_test_db("event_log_survives_reopen");

    let original = {
        let store = AppStore::open(&db_path).expect("open store");
        let mut events = store.load_events().unwrap();
        events.add_at(d(2026, 3, 1), "08:00", "patrol", 10).unwrap();
        events.add_at(d(2026, 2, 27), "21:30", "handover", 20).unwrap();
        events.add_at(d(2026, 3, 1), "12:15", "lunch", 30).unwrap();
        store.save_events(&events).unwrap();
        events
    };

    let store = AppStore::open(&db_path).expect("reopen store");
    let reloaded = store.load_events().unwrap();

    assert_eq!(reloaded.events(), original.events());
    let texts: Vec<&str> = reloaded.events().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["lunch", "handover", "patrol"]);
}

#[test]
fn test_settings_round_trip_and_reset() {
    let db_path = setup_test_db("settings_round_trip_reset");
    let store = AppStore::open(&db_path).expect("open store");

    let mut s = store.load_settings().unwrap();
    assert_eq!(s.user_name, "עמית שני");
    assert_eq!(s.savings_goal, 50_000.0);
    assert_eq!(s.shift_rate, 400.0);

    s.user_name = "Dana Levi".into();
    s.shift_rate = 520.0;
    store.save_settings(&s).unwrap();
    assert_eq!(store.load_settings().unwrap(), s);

    let removed = store.reset().unwrap();
    assert!(removed >= 7);
    assert!(storage::keys(store.conn()).unwrap().is_empty());
    assert_eq!(store.load_settings().unwrap().user_name, "עמית שני");
}
