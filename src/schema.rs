//! Named-column schemas for positional sheet rows
//!
//! Sheet rows arrive as ordered arrays of strings with no header metadata
//! attached. Each entity kind declares an explicit column schema (name, kind,
//! default) and decodes rows through it, so column meaning lives in one place
//! instead of bare index arithmetic. Decoding is lenient by default: missing
//! or malformed cells resolve to the column default rather than failing the
//! whole page. A strict mode turns rows wider than the schema into errors,
//! which is how silent column drift gets caught.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Error;

/// Image URL substituted when a row has no image of its own
pub const DEFAULT_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1550697851-920b181d8ca8?w=800&h=600&fit=crop";

/// How a column's raw cell is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Row identifier; empty cells resolve through [`IdFallback`]
    Id,
    /// Free text with a fixed default
    Text,
    /// Image URL, defaulting to the canonical placeholder image
    Image,
    /// Boolean flag; true iff the cell is exactly `"Yes"`
    Flag,
    /// Integer; parse failures resolve to 0
    Int,
    /// Float; parse failures resolve to 0.0
    Float,
    /// Comma-separated list, each element trimmed
    List,
    /// Date string passed through as-is; empty cells resolve to now
    Date,
    /// Date string validated on the way through; unparseable cells resolve to now
    DateChecked,
}

/// One named column of an entity schema
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: &'static str,
}

impl Column {
    pub const fn id() -> Self {
        Self { name: "id", kind: FieldKind::Id, default: "" }
    }

    pub const fn text(name: &'static str, default: &'static str) -> Self {
        Self { name, kind: FieldKind::Text, default }
    }

    pub const fn image(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Image, default: "" }
    }

    pub const fn flag(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Flag, default: "" }
    }

    pub const fn int(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Int, default: "0" }
    }

    pub const fn float(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Float, default: "0" }
    }

    pub const fn list(name: &'static str) -> Self {
        Self { name, kind: FieldKind::List, default: "" }
    }

    pub const fn date(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Date, default: "" }
    }

    pub const fn date_checked(name: &'static str) -> Self {
        Self { name, kind: FieldKind::DateChecked, default: "" }
    }
}

/// Fallback used when a row's id cell is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFallback {
    /// Stringified current Unix timestamp in milliseconds. This is what the
    /// site has always done; the id changes on every decode of the same row.
    Timestamp,
    /// Digest of the row's remaining fields. Stable across decodes.
    RowHash,
}

/// Decoding policy shared by all entity schemas
#[derive(Debug, Clone)]
pub struct RowPolicy {
    /// Substitute for empty image columns
    pub default_image_url: String,

    /// Fallback for empty id columns
    pub id_fallback: IdFallback,

    /// When true, a row wider than its schema is an error instead of being
    /// silently truncated
    pub strict_width: bool,
}

impl Default for RowPolicy {
    fn default() -> Self {
        Self {
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
            id_fallback: IdFallback::Timestamp,
            strict_width: false,
        }
    }
}

impl RowPolicy {
    /// Set the substitute for empty image columns
    pub fn with_default_image_url(mut self, value: &str) -> Self {
        self.default_image_url = value.to_string();
        self
    }

    /// Set the fallback for empty id columns
    pub fn with_id_fallback(mut self, value: IdFallback) -> Self {
        self.id_fallback = value;
        self
    }

    /// Set whether over-wide rows are an error
    pub fn with_strict_width(mut self, value: bool) -> Self {
        self.strict_width = value;
        self
    }
}

/// Ordered column schema for one entity kind
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub sheet: &'static str,
    pub columns: &'static [Column],
}

impl Schema {
    /// Start decoding one raw row under the given policy
    pub fn decode<'a>(
        &'a self,
        row: &'a [String],
        policy: &'a RowPolicy,
    ) -> Result<RowDecoder<'a>, Error> {
        if policy.strict_width && row.len() > self.columns.len() {
            return Err(Error::row(format!(
                "{} row has {} columns but the schema defines {}",
                self.sheet,
                row.len(),
                self.columns.len()
            )));
        }
        Ok(RowDecoder { schema: self, row, policy })
    }
}

/// Typed access to one raw row through its schema
pub struct RowDecoder<'a> {
    schema: &'a Schema,
    row: &'a [String],
    policy: &'a RowPolicy,
}

impl<'a> RowDecoder<'a> {
    fn find(&self, name: &str) -> Option<(usize, &'a Column)> {
        self.schema
            .columns
            .iter()
            .enumerate()
            .find(|(_, column)| column.name == name)
    }

    /// Raw cell at a schema position; absent cells read as empty
    fn raw(&self, index: usize) -> &str {
        self.row.get(index).map(String::as_str).unwrap_or("")
    }

    fn cell(&self, name: &str) -> (&str, &'static str) {
        match self.find(name) {
            Some((index, column)) => (self.raw(index), column.default),
            None => ("", ""),
        }
    }

    /// Text column: empty cells resolve to the column default
    pub fn text(&self, name: &str) -> String {
        let (value, default) = self.cell(name);
        if value.is_empty() {
            default.to_string()
        } else {
            value.to_string()
        }
    }

    /// Image column: empty cells resolve to the policy's default image
    pub fn image(&self, name: &str) -> String {
        let (value, _) = self.cell(name);
        if value.is_empty() {
            self.policy.default_image_url.clone()
        } else {
            value.to_string()
        }
    }

    /// Flag column: true iff the cell is exactly `"Yes"`
    pub fn flag(&self, name: &str) -> bool {
        let (value, _) = self.cell(name);
        value == "Yes"
    }

    /// Integer column: parse failures resolve to 0
    pub fn int(&self, name: &str) -> i64 {
        let (value, _) = self.cell(name);
        value.trim().parse().unwrap_or(0)
    }

    /// Non-negative integer column: parse failures and negatives resolve to 0
    pub fn uint(&self, name: &str) -> u32 {
        let (value, _) = self.cell(name);
        value.trim().parse().unwrap_or(0)
    }

    /// Float column: parse failures resolve to 0.0
    pub fn float(&self, name: &str) -> f64 {
        let (value, _) = self.cell(name);
        value.trim().parse().unwrap_or(0.0)
    }

    /// List column: comma-split with each element trimmed; empty cells
    /// resolve to an empty list
    pub fn list(&self, name: &str) -> Vec<String> {
        let (value, _) = self.cell(name);
        if value.is_empty() {
            Vec::new()
        } else {
            value.split(',').map(|item| item.trim().to_string()).collect()
        }
    }

    /// Date column passed through as-is; empty cells resolve to now
    pub fn date(&self, name: &str) -> String {
        let (value, _) = self.cell(name);
        if value.is_empty() {
            now_iso()
        } else {
            value.to_string()
        }
    }

    /// Date column validated on the way through; empty or unparseable cells
    /// resolve to now
    pub fn date_checked(&self, name: &str) -> String {
        let (value, _) = self.cell(name);
        if parses_as_date(value) {
            value.to_string()
        } else {
            now_iso()
        }
    }

    /// Row id: empty cells resolve through the policy's [`IdFallback`]
    pub fn id(&self) -> String {
        let index = self
            .schema
            .columns
            .iter()
            .position(|column| column.kind == FieldKind::Id)
            .unwrap_or(0);
        let value = self.raw(index);
        if !value.is_empty() {
            return value.to_string();
        }
        match self.policy.id_fallback {
            IdFallback::Timestamp => now_millis(),
            IdFallback::RowHash => row_digest(self.row, index),
        }
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%B %d, %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S"];

fn parses_as_date(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    DateTime::parse_from_rfc3339(value).is_ok()
        || DATE_FORMATS
            .iter()
            .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(value, format).is_ok())
}

/// Current time as an ISO 8601 UTC string
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn now_millis() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis().to_string())
        .unwrap_or_else(|_| "0".to_string())
}

fn row_digest(row: &[String], id_index: usize) -> String {
    let mut hasher = Sha256::new();
    for (index, cell) in row.iter().enumerate() {
        if index == id_index {
            continue;
        }
        hasher.update(cell.as_bytes());
        hasher.update([0x1f]);
    }
    let digest = format!("{:x}", hasher.finalize());
    digest[..16].to_string()
}
