use std::path::PathBuf;

use clap::Parser;
use jobsift_core::Dataset;

#[derive(Parser)]
#[command(name = "jobsift", about = "Terminal dashboard for job-listing CSVs")]
struct Cli {
    /// Path to the listings CSV (Glassdoor export shape).
    #[arg(default_value = "glassdoor_jobs.csv")]
    csv: PathBuf,

    /// Write debug logs to /tmp/jobsift-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/jobsift-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("jobsift debug log started — tail -f /tmp/jobsift-debug.log");
    }

    let rows = jobsift_data::load_csv(&cli.csv)?;
    let dataset = Dataset::from_raw(&rows);
    tracing::info!(
        rows = dataset.len(),
        categories = dataset.category_counts().len(),
        "dataset normalised"
    );

    jobsift_tui::run(dataset)
}
