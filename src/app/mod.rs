pub mod runner;

pub use runner::{render_json, render_text, RunSummary, SplitReport, SplitRunner};
