// src/types.rs
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scraped instrument page: the page heading plus every indicator block
/// found on it, in document order. A duplicate label keeps its first position
/// but takes the value of the later block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: String,
    pub indicators: IndexMap<String, String>,
}
