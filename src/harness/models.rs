use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One endpoint's outcome for one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRecord {
    /// Transport round-trip in whole milliseconds, excluding the artifact
    /// write. The misspelled wire name is the canonical field name that
    /// downstream diff tooling already depends on.
    #[serde(rename = "elasped_millis")]
    pub elapsed_millis: i64,
    pub status_code: u16,
    /// Repeated headers keep every value, in arrival order.
    pub response_headers: BTreeMap<String, Vec<String>>,
    pub image_type: String,
    pub height: i64,
    pub width: i64,
}

/// One comparison unit: the zero-based case index plus both endpoints'
/// fetch records. Written once per case, never re-read by this tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_no: usize,
    pub result1: FetchRecord,
    pub result2: FetchRecord,
}
