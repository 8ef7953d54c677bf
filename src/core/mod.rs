pub mod splitter;

pub use crate::domain::model::Cable;
pub use crate::utils::error::Result;
