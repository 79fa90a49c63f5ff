//! planview - Monthly Publishing Schedule Renderer
//!
//! Drives the schedule lifecycle from the command line: fetch (or read a saved
//! response), render, and write the HTML fragment to stdout or a file.

use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::path::PathBuf;
use std::sync::Arc;

use planview::schedule::MonthAnchor;
use planview::{BufferSink, HttpScheduleSource, ScheduleApp, ScheduleSource, StaticScheduleSource, ViewPhase};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("planview")
        .version(planview::VERSION)
        .about("Render a monthly publishing schedule as an HTML calendar fragment")
        .long_about(
            "planview fetches the monthly publishing schedule from a dashboard \
             endpoint (or a saved JSON response), normalizes it, and writes the \
             rendered modal fragment. On failure it writes the error panel and \
             exits with status 1.",
        )
        .arg(
            Arg::new("endpoint")
                .long("endpoint")
                .value_name("URL")
                .help("Base URL of the dashboard serving /api/schedule/monthly")
                .default_value("http://127.0.0.1:8000"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .value_name("FILE")
                .help("Render from a saved JSON response instead of the network"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .value_name("FILE")
                .help("Write the fragment to a file instead of stdout"),
        )
        .arg(
            Arg::new("month")
                .long("month")
                .value_name("YYYY-MM")
                .help("Month anchor for responses keyed by day-of-month"),
        )
        .get_matches();

    let anchor = match matches.get_one::<String>("month") {
        Some(text) => MonthAnchor::parse(text)?,
        None => MonthAnchor::default(),
    };

    let source: Arc<dyn ScheduleSource> = match matches.get_one::<String>("input") {
        Some(path) => {
            let path = PathBuf::from(path);
            let body = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read input file: {}", path.display()))?;
            Arc::new(StaticScheduleSource::new(body))
        }
        None => {
            let endpoint = matches
                .get_one::<String>("endpoint")
                .expect("endpoint has a default value");
            Arc::new(HttpScheduleSource::new(endpoint))
        }
    };

    let sink = BufferSink::new();
    let mut app = ScheduleApp::with_anchor(source, Box::new(sink.clone()), anchor);
    app.show_schedule().await?;

    let markup = sink.content();
    match matches.get_one::<String>("output") {
        Some(path) => {
            let path = PathBuf::from(path);
            std::fs::write(&path, &markup)
                .with_context(|| format!("failed to write output file: {}", path.display()))?;
        }
        None => println!("{markup}"),
    }

    if app.phase() == ViewPhase::Errored {
        // The error panel has already been written; signal failure to callers.
        std::process::exit(1);
    }

    Ok(())
}
