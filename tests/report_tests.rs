use chrono::{TimeZone, Utc};
use logspike::detector::Anomaly;
use logspike::loader::LoadOutcome;
use logspike::parser::LogEvent;
use logspike::report::build_report;

fn outcome() -> LoadOutcome {
    LoadOutcome {
        events: vec![LogEvent {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 29, 14, 23, 45).unwrap(),
            level: "ERROR".to_string(),
            message: "a".to_string(),
        }],
        total_lines: 3,
        skipped_lines: 2,
    }
}

#[test]
fn report_echoes_parameters_and_accounting() {
    let anomalies = vec![Anomaly {
        bucket_start: Utc.with_ymd_and_hms(2025, 3, 29, 14, 23, 30).unwrap(),
        count: 4,
    }];
    let report = build_report("app.log", "ERROR", 3, 30, &outcome(), &anomalies, false);
    let v = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(v["file"], "app.log");
    assert_eq!(v["level"], "ERROR");
    assert_eq!(v["threshold"], 3);
    assert_eq!(v["interval_seconds"], 30);
    assert_eq!(v["total_lines"], 3);
    assert_eq!(v["skipped_lines"], 2);
    assert_eq!(v["event_count"], 1);
    assert_eq!(v["anomalies"][0]["bucket_start"], "2025-03-29T14:23:30Z");
    assert_eq!(v["anomalies"][0]["count"], 4);
    // events stay out of the payload unless asked for
    assert!(v.get("events").is_none());
}

#[test]
fn report_includes_events_on_request() {
    let report = build_report("app.log", "ERROR", 3, 30, &outcome(), &[], true);
    let v = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(v["events"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(v["events"][0]["level"], "ERROR");
}

#[test]
fn empty_anomaly_list_is_an_explicit_outcome() {
    let report = build_report("app.log", "ERROR", 3, 30, &outcome(), &[], false);
    assert!(report.anomalies.is_empty());
    let v = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(v["anomalies"].as_array().map(|a| a.len()), Some(0));
}
