use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{hh, init_db, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_all_semesters() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv", "csv");

    hh().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "date,time,activity,hours,semester");
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("2024-02-01,09:00,Tour,3"));
    assert!(lines[1].ends_with("Spring 2024"));
    assert!(lines[3].starts_with("2024-10-15,10:00,Registration,2.5"));
}

#[test]
fn test_export_json_single_semester() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);
    let out = temp_out("export_json", "json");

    hh().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--semester", "Summer 2024",
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let items = parsed.as_array().expect("json array");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["date"], "2024-06-01");
    assert_eq!(items[0]["time"], "14:30");
    assert_eq!(items[0]["activity"], "Training");
    assert_eq!(items[0]["hours"], 5.0);
    assert_eq!(items[0]["semester"], "Summer 2024");
}

#[test]
fn test_export_xlsx_writes_file() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_data(&db_path);
    let out = temp_out("export_xlsx", "xlsx");

    hh().args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx files are zip archives
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db_with_data(&db_path);
    let out = temp_out("export_empty", "csv");

    hh().args([
        "--db", &db_path, "export", "--file", &out, "--semester", "Fall 2030",
    ])
    .assert()
    .success()
    .stdout(contains("No shifts found"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_rejects_relative_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);

    hh().args(["--db", &db_path, "export", "--file", "shifts.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_overwrite_needs_confirmation() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed file");

    hh().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    hh().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("already exists").not());
    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}
