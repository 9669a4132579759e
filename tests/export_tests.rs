use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_data, setup_test_db, temp_out, vibelog};

#[test]
fn test_export_csv_merges_events_into_notes() {
    let db_path = setup_test_db("export_csv_merges_events");
    init_db_with_data(&db_path);

    vibelog()
        .args([
            "--db", &db_path, "event", "briefing", "--date", "2026-03-01", "--time", "20:00",
        ])
        .assert()
        .success();

    let out = temp_out("export_csv_merges_events", "csv");

    vibelog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with('\u{feff}'));
    assert!(content.contains("תאריך"));
    assert!(content.contains("הערות ואירועים"));
    assert!(content.contains("2026-03-01"));
    assert!(content.contains("2026-03-15"));
    assert!(content.contains("משמרת"));
    assert!(content.contains("night patrol\n• briefing"));
}

#[test]
fn test_export_json_with_range() {
    let db_path = setup_test_db("export_json_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_range", "json");

    vibelog()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range",
            "2026-03-10:2026-03-20",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["תאריך"], "2026-03-15");
    assert_eq!(rows[0]["הכנסה (ברוטו)"], 400.0);
}

#[test]
fn test_export_course_day_with_sleepover_earns_nothing() {
    let db_path = setup_test_db("export_course_sleepover");
    init_db_with_data(&db_path);

    vibelog()
        .args(["--db", &db_path, "add", "--date", "2026-02-09", "--sleepover"])
        .assert()
        .success();

    let out = temp_out("export_course_sleepover", "json");

    vibelog()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--range",
            "2026-02",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["תאריך"], "2026-02-09");
    assert_eq!(rows[0]["הכנסה (ברוטו)"], 0.0);

    // the course day adds nothing to the running total
    vibelog()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("3 shifts, ₪992 total"));
}

#[test]
fn test_export_xlsx_writes_workbook() {
    let db_path = setup_test_db("export_xlsx_workbook");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx_workbook", "xlsx");

    vibelog()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_pdf_writes_document() {
    let db_path = setup_test_db("export_pdf_document");
    init_db_with_data(&db_path);

    let out = temp_out("export_pdf_document", "pdf");

    vibelog()
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Activity Report - VIBE"));
}

#[test]
fn test_export_pdf_replaces_unprintable_name() {
    let db_path = setup_test_db("export_pdf_unprintable_name");
    init_db_with_data(&db_path);

    vibelog()
        .args(["--db", &db_path, "settings", "--employee-id", "4711"])
        .assert()
        .success();

    let out = temp_out("export_pdf_unprintable_name", "pdf");

    vibelog()
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Employee 4711"));

    let bytes = fs::read(&out).expect("read exported pdf");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Name: Employee 4711"));
    assert!(!text.contains("Name: ????"));
}

#[test]
fn test_export_without_shifts_writes_nothing() {
    let db_path = setup_test_db("export_without_shifts");
    let out = temp_out("export_without_shifts", "csv");

    vibelog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No shifts found"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_force_overwrites_existing_file() {
    let db_path = setup_test_db("export_force_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_force_overwrite", "csv");
    fs::write(&out, "old content").expect("seed file");

    vibelog()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("old content"));
    assert!(content.contains("2026-03-15"));
}

#[test]
fn test_export_rejects_bad_range() {
    let db_path = setup_test_db("export_bad_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_bad_range", "csv");

    vibelog()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2026-3",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}
