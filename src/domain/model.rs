use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cable {
    pub length: i64,
    pub name: String,
}

impl Cable {
    pub fn new(length: i64, name: impl Into<String>) -> Self {
        Self {
            length,
            name: name.into(),
        }
    }
}
