use crate::core::splitter::Splitter;
use crate::utils::error::{Result, SplitError};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsConfig {
    pub jobs: Vec<SplitJob>,
}

/// One cable and the number of cuts to make in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitJob {
    pub length: i64,
    pub times: i64,
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    Splitter::NAME_PREFIX.to_string()
}

impl SplitJob {
    pub fn new(length: i64, times: i64) -> Self {
        Self {
            length,
            times,
            name: default_name(),
        }
    }

    /// The four jobs run when neither a cable nor a job file is given.
    pub fn demo_jobs() -> Vec<SplitJob> {
        vec![
            SplitJob::new(10, 1),
            SplitJob::new(5, 2),
            SplitJob::new(14, 3),
            SplitJob::new(1000, 50),
        ]
    }
}

impl JobsConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SplitError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SplitError::ConfigParseError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

// Length and cut ranges are left to Splitter::split so every job reports them the same way.
impl Validate for JobsConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("jobs", &self.jobs)?;
        for job in &self.jobs {
            validate_non_empty_string("jobs.name", &job.name)?;
        }
        Ok(())
    }
}
