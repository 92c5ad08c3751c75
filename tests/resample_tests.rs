mod common;
use chrono::Weekday;
use common::ts;
use rshoptrace::core::boundary::synthesize;
use rshoptrace::core::resample::resample;
use rshoptrace::core::transition::label;
use rshoptrace::models::{Event, Location, Origin, Visit, VisitId};

fn visit(events: &[(&str, &str)]) -> Visit {
    let id = VisitId::new("1", Weekday::Thu);
    let evs = events
        .iter()
        .map(|(at, loc)| {
            Event::observed(id.clone(), ts(at), Location::parse(loc).expect("location"))
        })
        .collect();
    Visit::new(id, evs)
}

fn locations(v: &Visit) -> Vec<String> {
    v.events()
        .iter()
        .map(|e| format!("{} {}", e.time_str(), e.location))
        .collect()
}

#[test]
fn test_resample_spans_entrance_to_checkout() {
    let framed = synthesize(&visit(&[
        ("2019-09-05 16:00", "drinks"),
        ("2019-09-05 16:03", "spices"),
    ]))
    .expect("synthesize");

    let minutes = resample(&framed).expect("resample");

    assert_eq!(
        locations(&minutes),
        vec![
            "15:59 entrance",
            "16:00 drinks",
            "16:01 drinks",
            "16:02 drinks",
            "16:03 spices",
            "16:04 checkout",
        ]
    );
    assert_eq!(minutes.events()[2].origin, Origin::Filled);
    assert_eq!(minutes.duration_minutes(), 5);
}

#[test]
fn test_seconds_are_truncated_to_the_minute() {
    let framed = synthesize(&visit(&[
        ("2019-09-05 16:00:40", "drinks"),
        ("2019-09-05 16:02:10", "fruit"),
    ]))
    .expect("synthesize");

    let minutes = resample(&framed).expect("resample");
    let stamps: Vec<String> = minutes
        .events()
        .iter()
        .map(|e| e.timestamp.format("%H:%M:%S").to_string())
        .collect();

    assert_eq!(
        stamps,
        vec!["15:59:00", "16:00:00", "16:01:00", "16:02:00", "16:03:00"]
    );
}

#[test]
fn test_latest_event_in_a_minute_wins() {
    let framed = synthesize(&visit(&[
        ("2019-09-05 10:00:05", "dairy"),
        ("2019-09-05 10:00:50", "fruit"),
        ("2019-09-05 10:02:00", "checkout"),
    ]))
    .expect("synthesize");

    let minutes = resample(&framed).expect("resample");

    assert_eq!(
        locations(&minutes),
        vec![
            "09:59 entrance",
            "10:00 fruit",
            "10:01 fruit",
            "10:02 checkout",
        ]
    );
}

#[test]
fn test_checkout_minute_keeps_checkout() {
    let framed = synthesize(&visit(&[
        ("2019-09-05 10:00", "dairy"),
        ("2019-09-05 10:10", "checkout"),
    ]))
    .expect("synthesize");

    let minutes = resample(&framed).expect("resample");
    let last = minutes.last().expect("last minute");

    assert_eq!(last.location, Location::Checkout);
    assert_eq!(last.origin, Origin::Observed);
    assert_eq!(minutes.len(), 12);
}

#[test]
fn test_resample_keeps_visit_identity() {
    let framed = synthesize(&visit(&[("2019-09-05 10:00", "dairy"), ("2019-09-05 10:05", "fruit")]))
        .expect("synthesize");
    let minutes = resample(&framed).expect("resample");

    assert!(minutes.events().iter().all(|e| e.visit_id == framed.id));
    assert!(minutes.events().iter().all(|e| e.customer_no() == "1"));
}

#[test]
fn test_label_points_to_next_minute() {
    let framed = synthesize(&visit(&[("2019-09-05 10:00", "dairy"), ("2019-09-05 10:02", "fruit")]))
        .expect("synthesize");
    let rows = label(&resample(&framed).expect("resample"));

    let pairs: Vec<(String, String)> = rows
        .iter()
        .map(|r| (r.location.to_string(), r.location_next.to_string()))
        .collect();

    assert_eq!(
        pairs,
        vec![
            ("entrance".to_string(), "dairy".to_string()),
            ("dairy".to_string(), "dairy".to_string()),
            ("dairy".to_string(), "fruit".to_string()),
            ("fruit".to_string(), "checkout".to_string()),
            ("checkout".to_string(), "checkout".to_string()),
        ]
    );
    assert!(rows.iter().all(|r| r.visit_id == "1_3" && r.dayname == "Thursday"));
}
