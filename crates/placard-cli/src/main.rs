//! Placard CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use placard_cli::{Args, error_adapter::to_reportables};

fn main() {
    // Install miette's panic hook before anything can panic
    miette::set_panic_hook();

    // Parse arguments first; the log level comes from them
    let args = Args::parse();

    // Initialize the logger with the requested level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Placard");
    debug!(args:?; "Parsed arguments");

    // Render the diagram
    if let Err(err) = placard_cli::run(&args) {
        let reporter = miette::GraphicalReportHandler::new();

        // Each validation problem gets its own report
        for reportable in to_reportables(&err) {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, &reportable)
                .expect("Writing to String buffer is infallible");

            error!("{writer}");
        }

        process::exit(1);
    }

    info!("Completed successfully");
}
