pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use app::{SplitReport, SplitRunner};
pub use config::{JobsConfig, SplitJob};
pub use core::splitter::Splitter;
pub use domain::model::Cable;
pub use utils::error::{ErrorKind, Result, SplitError};
