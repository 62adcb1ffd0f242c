use chrono::Duration;
use clap::Parser;
use logspike::report::format_timestamp;
use std::path::PathBuf;
use std::sync::Once;

fn init_parallelism() {
    static START: Once = Once::new();
    START.call_once(|| {
        let n = num_cpus::get();
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    });
}

#[derive(Parser, Debug)]
#[command(name = "logspike", version, about = "Frequency-based log anomaly detection")]
struct Cli {
    /// Path to the log file
    log_file: PathBuf,

    /// Log level to analyze
    #[arg(long, default_value = "ERROR")]
    level: String,

    /// Count threshold; a bucket is anomalous only when its count strictly exceeds this
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..))]
    threshold: u32,

    /// Bucket width in seconds
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..))]
    interval: u32,

    /// Output format: text | json
    #[arg(long, default_value = "text")]
    format: String,

    /// Include the full parsed event collection in the output
    #[arg(long, default_value_t = false)]
    events: bool,
}

fn main() -> anyhow::Result<()> {
    init_parallelism();
    let cli = Cli::parse();

    let outcome = logspike::loader::load_events(&cli.log_file)?;
    if outcome.is_empty() {
        eprintln!(
            "warning: no valid log entries in '{}'",
            cli.log_file.display()
        );
    }

    let interval = Duration::seconds(i64::from(cli.interval));
    let anomalies = logspike::detector::detect_frequency_anomalies(
        &outcome.events,
        &cli.level,
        cli.threshold as usize,
        interval,
    );

    if cli.format == "json" {
        let report = logspike::report::build_report(
            &cli.log_file.display().to_string(),
            &cli.level,
            cli.threshold as usize,
            i64::from(cli.interval),
            &outcome,
            &anomalies,
            cli.events,
        );
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cli.events {
        for e in &outcome.events {
            println!("{} {} {}", format_timestamp(e.timestamp), e.level, e.message);
        }
    }
    if anomalies.is_empty() {
        println!(
            "No anomalies detected for {} logs over a {}-second interval (threshold: {}).",
            cli.level, cli.interval, cli.threshold
        );
    } else {
        for a in &anomalies {
            println!(
                "Anomaly detected: {} {} logs in {} seconds at {}",
                a.count,
                cli.level,
                cli.interval,
                format_timestamp(a.bucket_start)
            );
        }
    }
    Ok(())
}
