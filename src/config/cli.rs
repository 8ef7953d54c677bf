use crate::config::toml_config::{JobsConfig, SplitJob};
use crate::utils::error::{Result, SplitError};
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cable-splitter")]
#[command(about = "Split a cable into evenly sized, sortable pieces")]
pub struct CliConfig {
    /// Length of the cable to split
    #[arg(long, requires = "times", allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Number of cuts to make
    #[arg(long, requires = "length", allow_negative_numbers = true)]
    pub times: Option<i64>,

    /// Name of the input cable
    #[arg(long, default_value = "coconuts")]
    pub name: String,

    /// TOML file with [[jobs]] entries
    #[arg(short, long, conflicts_with_all = ["length", "times"])]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Jobs to run: the single cable from the command line, the job file,
    /// or the built-in demonstration set.
    pub fn jobs(&self) -> Result<Vec<SplitJob>> {
        if let (Some(length), Some(times)) = (self.length, self.times) {
            return Ok(vec![SplitJob {
                length,
                times,
                name: self.name.clone(),
            }]);
        }

        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading jobs from: {}", path);
                let config = JobsConfig::from_file(path)?;
                config.validate()?;
                Ok(config.jobs)
            }
            None => Ok(SplitJob::demo_jobs()),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("name", &self.name)?;
        if self.length.is_some() != self.times.is_some() {
            return Err(SplitError::InvalidConfigValueError {
                field: "length/times".to_string(),
                value: format!("{:?}/{:?}", self.length, self.times),
                reason: "--length and --times must be given together".to_string(),
            });
        }
        Ok(())
    }
}
