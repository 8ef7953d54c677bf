use cable_splitter::app::{render_json, render_text, SplitRunner};
use cable_splitter::utils::{logger, validation::Validate};
use cable_splitter::{CliConfig, OutputFormat};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    match config.format {
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
        OutputFormat::Json => logger::init_json_logger(),
    }

    tracing::info!("Starting cable-splitter");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let jobs = match config.jobs() {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::error!("❌ Failed to load jobs: {} (Kind: {:?})", e, e.kind());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let summary = SplitRunner::new().run_all(&jobs);

    match config.format {
        OutputFormat::Text => {
            for report in &summary.reports {
                print!("{}", render_text(report));
            }
        }
        OutputFormat::Json => println!("{}", render_json(&summary.reports)?),
    }

    for (job, e) in &summary.failures {
        eprintln!(
            "❌ length {}, times {}: {}",
            job.length,
            job.times,
            e.user_friendly_message()
        );
    }

    if !summary.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
