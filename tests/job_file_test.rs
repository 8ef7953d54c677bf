use cable_splitter::app::{render_json, render_text, SplitReport};
use cable_splitter::utils::validation::Validate;
use cable_splitter::{Cable, JobsConfig, SplitError, SplitJob, SplitRunner};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_job_file_end_to_end() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[[jobs]]
length = 10
times = 1

[[jobs]]
length = 1025
times = 2

[[jobs]]
length = 20
times = 9
name = "copper"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = JobsConfig::from_file(temp_file.path()).unwrap();
    assert!(config.validate().is_ok());

    let summary = SplitRunner::new().run_all(&config.jobs);
    assert_eq!(summary.reports.len(), 2);
    assert_eq!(summary.failures.len(), 1);
    assert!(matches!(
        summary.failures[0].1,
        SplitError::CableLengthOutOfRange { length: 1025, .. }
    ));

    assert_eq!(render_text(&summary.reports[0]), "coconuts-0 5\ncoconuts-1 5\n");

    let copper = &summary.reports[1];
    assert_eq!(copper.input, Cable::new(20, "copper"));
    assert_eq!(copper.pieces[0].name, "coconuts-00");
    assert_eq!(copper.pieces[9].name, "coconuts-09");
}

#[test]
fn test_demo_jobs_all_succeed() {
    let summary = SplitRunner::new().run_all(&SplitJob::demo_jobs());
    assert!(summary.is_success());

    let counts: Vec<usize> = summary.reports.iter().map(|r| r.pieces.len()).collect();
    assert_eq!(counts, vec![2, 5, 5, 53]);

    let json = render_json(&summary.reports).unwrap();
    let parsed: Vec<SplitReport> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, summary.reports);
}
