use crate::parser::LogEvent;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::BTreeMap;

/// A bucket whose count of target-level events strictly exceeded the
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    pub bucket_start: DateTime<Utc>,
    pub count: usize,
}

/// Floor a timestamp to the start of its bucket.
///
/// Buckets are multiples of `bucket` measured from the Unix epoch, so the
/// same instant lands in the same bucket on every run and across files.
/// Idempotent: a bucket start floors to itself. Callers must validate that
/// the width is positive; a non-positive width returns the input unchanged.
pub fn floor_to_bucket(t: DateTime<Utc>, bucket: Duration) -> DateTime<Utc> {
    let secs = bucket.num_seconds();
    if secs <= 0 {
        return t;
    }
    let ts = t.timestamp();
    let floored = ts - ts.rem_euclid(secs);
    Utc.timestamp_opt(floored, 0).unwrap()
}

/// Count target-level events per bucket and report every bucket whose
/// count strictly exceeds `threshold`.
///
/// Level matching is exact and case-sensitive. The result is ordered by
/// bucket start, though the reported set does not depend on enumeration
/// order. Never fails: an empty collection simply yields no anomalies.
pub fn detect_frequency_anomalies(
    events: &[LogEvent],
    level: &str,
    threshold: usize,
    interval: Duration,
) -> Vec<Anomaly> {
    let mut counts: BTreeMap<DateTime<Utc>, usize> = BTreeMap::new();
    for event in events.iter().filter(|e| e.level == level) {
        let bucket = floor_to_bucket(event.timestamp, interval);
        *counts.entry(bucket).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > threshold)
        .map(|(bucket_start, count)| Anomaly {
            bucket_start,
            count,
        })
        .collect()
}
