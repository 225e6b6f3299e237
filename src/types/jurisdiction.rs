use serde::{Deserialize, Serialize};

/// A jurisdiction taking part in apportionment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub name: String,
    pub population: u64,
}

impl Jurisdiction {
    pub fn new(name: impl Into<String>, population: u64) -> Self {
        Self { name: name.into(), population }
    }
}
