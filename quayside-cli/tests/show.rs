//! Tests for loading files and rendering with `show`.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use quayside_cli::args::ShowArgs;
use quayside_cli::args::TableArgs;
use quayside_cli::config::CliConfig;
use quayside_cli::error::CliError;
use quayside_cli::show;

const RECORDS: &str = r#"[
    {"id": "c-1", "containerNo": "MSCU1234567", "status": "gate in", "arrival": "2026-03-07", "fee": 120},
    {"id": "c-2", "containerNo": "MAEU7654321", "status": "on vessel", "arrival": "2026-02-11", "fee": 80.5},
    {"id": "c-3", "containerNo": "CMAU0000001", "status": "gate out", "arrival": "2026-01-30", "fee": 45}
]"#;

const COLUMNS: &str = r#"[
    {"key": "containerNo", "header": "Container", "sortable": true},
    {"key": "status", "header": "Status", "format": "upper"},
    {"key": "arrival", "header": "Arrival", "sortable": true, "format": "date"},
    {"key": "fee", "header": "Fee", "format": "currency"}
]"#;

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn args(records: PathBuf, columns: Option<PathBuf>) -> ShowArgs {
    ShowArgs {
        table: TableArgs {
            records,
            columns,
            page_size: None,
        },
        query: None,
        sort: None,
        desc: false,
        page: 1,
    }
}

#[test]
fn test_show_with_column_file() {
    let dir = tempfile::tempdir().unwrap();
    let records = write(dir.path(), "yard.json", RECORDS);
    let columns = write(dir.path(), "columns.json", COLUMNS);

    let mut show_args = args(records, Some(columns));
    show_args.sort = Some("arrival".to_string());
    show_args.desc = true;

    let text = show(&show_args, &CliConfig::default()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Search: (Search...)");
    assert!(lines[1].starts_with("Container"));
    assert!(lines[1].contains("Arrival ▼"));
    assert!(lines[3].starts_with("MSCU1234567  GATE IN"));
    assert!(lines[3].contains("07/03/2026"));
    assert!(lines[3].ends_with("$120.00"));
    assert!(lines[4].ends_with("$80.50"));
    assert_eq!(lines[6], "Showing 1 to 3 of 3 entries · Page 1 of 1");
}

#[test]
fn test_show_query_and_page() {
    let dir = tempfile::tempdir().unwrap();
    let records = write(dir.path(), "yard.json", RECORDS);

    let mut show_args = args(records, None);
    show_args.query = Some("gate".to_string());
    show_args.table.page_size = Some(1);
    show_args.page = 9;

    let text = show(&show_args, &CliConfig::default()).unwrap();
    assert!(text.contains("CMAU0000001"));
    assert!(!text.contains("MSCU1234567"));
    assert!(text.ends_with("Showing 2 to 2 of 2 entries · Page 2 of 2"));
}

#[test]
fn test_show_empty_result_uses_configured_message() {
    let dir = tempfile::tempdir().unwrap();
    let records = write(dir.path(), "yard.json", RECORDS);

    let mut config = CliConfig::default();
    config.table.empty_message = "No containers".to_string();
    let mut show_args = args(records, None);
    show_args.query = Some("zzz".to_string());

    let text = show(&show_args, &config).unwrap();
    assert!(text.contains("\nNo containers\n"));
}

#[test]
fn test_show_rejects_unknown_column() {
    let dir = tempfile::tempdir().unwrap();
    let records = write(dir.path(), "yard.json", RECORDS);
    let columns = write(
        dir.path(),
        "columns.json",
        r#"[{"key": "vessel.name", "header": "Vessel"}]"#,
    );

    let err = show(&args(records, Some(columns)), &CliConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::Table(_)));
}

#[test]
fn test_show_rejects_unsortable_sort_key() {
    let dir = tempfile::tempdir().unwrap();
    let records = write(dir.path(), "yard.json", RECORDS);
    let columns = write(dir.path(), "columns.json", COLUMNS);

    // status is shown but not sortable
    let mut show_args = args(records.clone(), Some(columns));
    show_args.sort = Some("status".to_string());
    let err = show(&show_args, &CliConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::UnsortableColumn { ref key } if key == "status"));

    let mut show_args = args(records, None);
    show_args.sort = Some("vessel".to_string());
    let err = show(&show_args, &CliConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::UnsortableColumn { .. }));
    assert!(err.to_string().contains("'vessel'"));
}

#[test]
fn test_show_reports_bad_records() {
    let dir = tempfile::tempdir().unwrap();
    let records = write(dir.path(), "yard.json", r#"[{"containerNo": "MSCU1234567"}]"#);

    let err = show(&args(records, None), &CliConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::Records { .. }));
    assert!(err.to_string().contains("yard.json"));
}

#[test]
fn test_show_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = show(&args(dir.path().join("nope.json"), None), &CliConfig::default()).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}
