use crate::config::toml_config::SplitJob;
use crate::core::splitter::Splitter;
use crate::domain::model::Cable;
use crate::utils::error::{Result, SplitError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    pub input: Cable,
    pub times: i64,
    pub pieces: Vec<Cable>,
}

/// Outcome of a batch run. Failed jobs do not stop the ones after them.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<SplitReport>,
    pub failures: Vec<(SplitJob, SplitError)>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct SplitRunner {
    splitter: Splitter,
}

impl SplitRunner {
    pub fn new() -> Self {
        Self {
            splitter: Splitter::new(),
        }
    }

    pub fn run_job(&self, job: &SplitJob) -> Result<SplitReport> {
        let input = Cable::new(job.length, job.name.clone());
        tracing::info!(
            "✂️  Splitting '{}' (length {}) with {} cuts",
            input.name,
            input.length,
            job.times
        );

        let pieces = self.splitter.split(&input, job.times)?;
        for piece in &pieces {
            tracing::debug!("{} -> {}", piece.name, piece.length);
        }
        tracing::info!("Produced {} pieces", pieces.len());

        Ok(SplitReport {
            input,
            times: job.times,
            pieces,
        })
    }

    pub fn run_all(&self, jobs: &[SplitJob]) -> RunSummary {
        let mut summary = RunSummary::default();
        for job in jobs {
            match self.run_job(job) {
                Ok(report) => summary.reports.push(report),
                Err(e) => {
                    tracing::error!(
                        "❌ Job failed (length {}, times {}): {}",
                        job.length,
                        job.times,
                        e
                    );
                    summary.failures.push((job.clone(), e));
                }
            }
        }
        summary
    }
}

impl Default for SplitRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// One `"<name> <length>"` line per piece.
pub fn render_text(report: &SplitReport) -> String {
    report
        .pieces
        .iter()
        .map(|piece| format!("{} {}\n", piece.name, piece.length))
        .collect()
}

pub fn render_json(reports: &[SplitReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_job() {
        let report = SplitRunner::new().run_job(&SplitJob::new(10, 1)).unwrap();
        assert_eq!(report.input, Cable::new(10, "coconuts"));
        assert_eq!(report.times, 1);
        assert_eq!(report.pieces.len(), 2);
    }

    #[test]
    fn test_run_all_continues_after_failure() {
        let jobs = vec![SplitJob::new(10, 1), SplitJob::new(3, 5), SplitJob::new(5, 2)];
        let summary = SplitRunner::new().run_all(&jobs);

        assert!(!summary.is_success());
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, SplitJob::new(3, 5));
        assert!(matches!(
            summary.failures[0].1,
            SplitError::CutCountOutOfRange { .. } | SplitError::TooManyCuts { .. }
        ));
    }

    #[test]
    fn test_render_text() {
        let report = SplitRunner::new().run_job(&SplitJob::new(14, 3)).unwrap();
        assert_eq!(
            render_text(&report),
            "coconuts-0 3\ncoconuts-1 3\ncoconuts-2 3\ncoconuts-3 3\ncoconuts-4 2\n"
        );
    }

    #[test]
    fn test_render_json() {
        let report = SplitRunner::new().run_job(&SplitJob::new(10, 1)).unwrap();
        let json = render_json(&[report.clone()]).unwrap();
        let parsed: Vec<SplitReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![report]);
        assert!(json.contains("\"coconuts-1\""));
    }
}
