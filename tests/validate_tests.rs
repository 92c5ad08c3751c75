mod common;
use common::{raw, ts};
use rshoptrace::core::identify::identify_visits;
use rshoptrace::core::validate::validate;
use rshoptrace::errors::AppError;
use rshoptrace::models::{Location, RawEvent, RawTimestamp};

#[test]
fn test_datetime_batch_passes() {
    let events = vec![
        raw("1", "2019-09-02 07:03:00", "dairy"),
        raw("2", "2019-09-02 07:04:00", "spices"),
    ];

    let obs = validate(&events).expect("valid batch");
    assert_eq!(obs.len(), 2);
    assert_eq!(obs[1].timestamp, ts("2019-09-02 07:04"));
}

#[test]
fn test_revalidation_never_fails() {
    let events = vec![
        raw("1", "2019-09-02 07:03:00", "dairy"),
        raw("1", "2019-09-02 07:05:00", "checkout"),
    ];

    let once = validate(&events).expect("first validation");
    let back: Vec<RawEvent> = once.iter().cloned().map(RawEvent::from).collect();
    let twice = validate(&back).expect("second validation");

    assert_eq!(once, twice);
}

#[test]
fn test_numeric_surrogate_is_rejected() {
    let events = vec![
        RawEvent::new("1", RawTimestamp::Numeric(1567407780), Some("dairy")),
        raw("1", "2019-09-02 07:05:00", "fruit"),
    ];

    match validate(&events) {
        Err(AppError::Schema { row, found, value }) => {
            assert_eq!(row, 0);
            assert_eq!(found, "numeric");
            assert_eq!(value, "1567407780");
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_raw_timestamp_parsing() {
    let formats = vec!["%Y-%m-%d %H:%M:%S".to_string(), "%d/%m/%Y %H:%M".to_string()];

    assert_eq!(
        RawTimestamp::parse("02/09/2019 07:03", &formats),
        RawTimestamp::DateTime(ts("2019-09-02 07:03"))
    );
    assert_eq!(RawTimestamp::parse(" 42 ", &formats), RawTimestamp::Numeric(42));
    assert_eq!(
        RawTimestamp::parse("Monday 7am", &formats).kind(),
        "text"
    );
}

#[test]
fn test_identify_groups_by_customer_and_weekday() {
    let obs = validate(&[
        raw("2", "2019-09-03 08:00:00", "fruit"),
        raw("1", "2019-09-02 08:00:00", "dairy"),
        raw("2", "2019-09-03 08:04:00", "checkout"),
        raw("1", "2019-09-03 09:00:00", "dairy"),
    ])
    .expect("valid");

    let visits = identify_visits(obs).expect("identify");
    let summary: Vec<(String, usize)> = visits
        .iter()
        .map(|v| (v.id.to_string(), v.len()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("1_0".to_string(), 1),
            ("1_1".to_string(), 1),
            ("2_1".to_string(), 2),
        ]
    );
}

#[test]
fn test_identify_matches_reserved_locations_exactly() {
    let obs = validate(&[
        raw("1", "2019-09-02 08:00:00", "entrance"),
        raw("1", "2019-09-02 08:01:00", "Checkout"),
        raw("1", "2019-09-02 08:02:00", "checkout"),
    ])
    .expect("valid");

    let visits = identify_visits(obs).expect("identify");
    let locs: Vec<&Location> = visits[0].events().iter().map(|e| &e.location).collect();
    assert_eq!(
        locs,
        vec![
            &Location::Entrance,
            &Location::Section("Checkout".to_string()),
            &Location::Checkout,
        ]
    );
}

#[test]
fn test_blank_location_is_missing() {
    let obs = validate(&[RawEvent::new(
        "9",
        RawTimestamp::DateTime(ts("2019-09-02 08:00")),
        Some("   "),
    )])
    .expect("valid");

    assert!(matches!(
        identify_visits(obs),
        Err(AppError::MissingLocation { .. })
    ));
}
