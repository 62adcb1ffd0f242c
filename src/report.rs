use crate::detector::Anomaly;
use crate::loader::LoadOutcome;
use crate::parser::LogEvent;
use chrono::SecondsFormat;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AnomalyOut {
    pub bucket_start: String,
    pub count: usize,
}

/// The whole outcome of one run: the analysis parameters echoed back, line
/// accounting from the loader, and the anomaly list. An empty `anomalies`
/// list is the explicit "no anomalies" result, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub file: String,
    pub level: String,
    pub threshold: usize,
    pub interval_seconds: i64,
    pub total_lines: usize,
    pub skipped_lines: usize,
    pub event_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<LogEvent>>,
    pub anomalies: Vec<AnomalyOut>,
}

pub fn format_timestamp(t: chrono::DateTime<chrono::Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn build_report(
    file: &str,
    level: &str,
    threshold: usize,
    interval_seconds: i64,
    outcome: &LoadOutcome,
    anomalies: &[Anomaly],
    include_events: bool,
) -> AnalysisReport {
    AnalysisReport {
        file: file.to_string(),
        level: level.to_string(),
        threshold,
        interval_seconds,
        total_lines: outcome.total_lines,
        skipped_lines: outcome.skipped_lines,
        event_count: outcome.events.len(),
        events: include_events.then(|| outcome.events.clone()),
        anomalies: anomalies
            .iter()
            .map(|a| AnomalyOut {
                bucket_start: format_timestamp(a.bucket_start),
                count: a.count,
            })
            .collect(),
    }
}
