//! Wire types for the internal data API

use serde::{Deserialize, Serialize};

/// Response envelope returned by the data API's GET endpoint
///
/// On failure the API omits `success` and `data` and carries an `error`
/// message instead; missing fields deserialize to their defaults so both
/// shapes fit one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetEnvelope {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub data: Vec<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// POST body for appending one row
#[derive(Debug, Clone, Serialize)]
pub struct AppendRequest<'a> {
    pub sheet: &'a str,
    pub data: &'a [String],
}

/// PUT body for updating one row in place
#[derive(Debug, Clone, Serialize)]
pub struct UpdateRequest<'a> {
    pub sheet: &'a str,
    #[serde(rename = "rowIndex")]
    pub row_index: u32,
    pub values: &'a [String],
}
