mod common;
use common::{setup_test_dir, ts, write_log, write_sample_logs};
use rshoptrace::config::Config;
use rshoptrace::core::Pipeline;
use rshoptrace::errors::AppError;
use rshoptrace::ingest::{discover_logs, load_logs, read_log, resolve_inputs};
use rshoptrace::models::RawTimestamp;

#[test]
fn test_read_log_parses_rows() {
    let dir = setup_test_dir("ingest_read");
    let p = write_log(
        &dir,
        "wednesday.csv",
        "timestamp;customer_no;location\n\
         2019-09-04 07:00:00;1;fruit\n\
         2019-09-04 07:01:00;2;\n",
    );

    let events = read_log(&p, &Config::default()).expect("read");
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].customer_no, "1");
    assert_eq!(
        events[0].timestamp,
        RawTimestamp::DateTime(ts("2019-09-04 07:00"))
    );
    assert_eq!(events[0].location.as_deref(), Some("fruit"));
    assert_eq!(events[1].location, None);
}

#[test]
fn test_extra_columns_are_ignored() {
    let dir = setup_test_dir("ingest_extra");
    let p = write_log(
        &dir,
        "thursday.csv",
        "timestamp;customer_no;location;store\n\
         2019-09-05 07:00:00;1;dairy;north\n",
    );

    let events = read_log(&p, &Config::default()).expect("read");
    assert_eq!(events[0].location.as_deref(), Some("dairy"));
}

#[test]
fn test_unparsed_timestamp_stays_text() {
    let dir = setup_test_dir("ingest_text_ts");
    let p = write_log(
        &dir,
        "friday.csv",
        "timestamp;customer_no;location\n\
         Friday morning;1;dairy\n",
    );

    let events = read_log(&p, &Config::default()).expect("read");
    assert_eq!(events[0].timestamp.kind(), "text");

    assert!(matches!(
        Pipeline::run(&events),
        Err(AppError::Schema { found: "text", .. })
    ));
}

#[test]
fn test_custom_separator() {
    let dir = setup_test_dir("ingest_sep");
    let p = write_log(
        &dir,
        "monday.csv",
        "timestamp,customer_no,location\n2019-09-02 07:00:00,1,drinks\n",
    );

    let cfg = Config {
        separator_char: ",".to_string(),
        ..Config::default()
    };
    let events = read_log(&p, &cfg).expect("read");
    assert_eq!(events[0].location.as_deref(), Some("drinks"));

    let bad = Config {
        separator_char: "::".to_string(),
        ..Config::default()
    };
    assert!(matches!(read_log(&p, &bad), Err(AppError::Config(_))));
}

#[test]
fn test_missing_column_is_a_csv_error() {
    let dir = setup_test_dir("ingest_missing_col");
    let p = write_log(&dir, "monday.csv", "timestamp;location\n2019-09-02 07:00:00;dairy\n");

    assert!(matches!(
        read_log(&p, &Config::default()),
        Err(AppError::Csv { .. })
    ));
}

#[test]
fn test_discover_and_concatenate() {
    let dir = setup_test_dir("ingest_discover");
    write_sample_logs(&dir);
    write_log(&dir, "notes.txt", "not a log");

    let files = discover_logs(&dir).expect("discover");
    let names: Vec<String> = files
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .collect();
    assert_eq!(names, vec!["monday.csv", "tuesday.csv"]);

    let events = load_logs(&files, &Config::default()).expect("load");
    assert_eq!(events.len(), 5);
}

#[test]
fn test_resolve_inputs_without_logs_fails() {
    let dir = setup_test_dir("ingest_empty_dir");

    assert!(matches!(
        resolve_inputs(&[dir], &Config::default()),
        Err(AppError::NoInput(_))
    ));
}
