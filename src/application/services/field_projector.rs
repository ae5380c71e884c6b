//! Projection of records into uniform table rows.
//!
//! Every record family has a fixed set of common columns. On top of those,
//! each record variant contributes extra columns (a visit resolved to a short
//! URL adds its short code, an orphan visit adds its type, ...). The extra
//! columns of a render session are taken from the first record projected;
//! later records are laid out against that column set.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::entities::{Record, RecordKind, Visit};
use crate::error::ReportError;
use crate::utils::camel_case_to_human_friendly;

const UNKNOWN_LOCATION: &str = "Unknown";

static VISIT_COLUMNS: [(&str, &str); 5] = [
    ("referer", "Referer"),
    ("date", "Date"),
    ("userAgent", "User agent"),
    ("country", "Country"),
    ("city", "City"),
];

static SHORT_URL_COLUMNS: [(&str, &str); 4] = [
    ("shortCode", "Short code"),
    ("originalUrl", "Original URL"),
    ("dateCreated", "Date created"),
    ("visitsCount", "Visits count"),
];

/// Projected record: column key to display value, in column order.
pub type Row = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub label: String,
}

/// Ordered columns of one render session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<Column>,
    common_len: usize,
}

impl ColumnSet {
    /// Columns every record of `kind` has.
    pub fn common(kind: RecordKind) -> Self {
        let columns: Vec<Column> = common_columns(kind)
            .iter()
            .map(|(key, label)| Column {
                key: (*key).to_string(),
                label: (*label).to_string(),
            })
            .collect();
        let common_len = columns.len();

        Self {
            columns,
            common_len,
        }
    }

    /// Common columns followed by `extra_keys`, labelled from their key names.
    pub fn with_extra_keys(kind: RecordKind, extra_keys: &[String]) -> Self {
        let mut set = Self::common(kind);
        set.columns.extend(extra_keys.iter().map(|key| Column {
            key: key.clone(),
            label: camel_case_to_human_friendly(key),
        }));
        set
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }

    pub fn labels(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    fn extra_keys(&self) -> impl Iterator<Item = &str> {
        self.columns[self.common_len..].iter().map(|c| c.key.as_str())
    }
}

fn common_columns(kind: RecordKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        RecordKind::Visit => &VISIT_COLUMNS,
        RecordKind::ShortUrl => &SHORT_URL_COLUMNS,
    }
}

/// Switches for optional columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Adds a `tags` column to short URL listings.
    pub show_tags: bool,
}

/// Turns records of one family into rows.
#[derive(Debug, Clone)]
pub struct FieldProjector {
    kind: RecordKind,
    options: ProjectionOptions,
}

impl FieldProjector {
    pub fn new(kind: RecordKind, options: ProjectionOptions) -> Self {
        Self { kind, options }
    }

    /// Projects one record.
    ///
    /// Returns the row (common columns first, then the variant's extra
    /// columns) and the extra keys this record contributed. Fields that are
    /// neither common nor extra, such as free-form metadata, are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ProjectionMismatch`] if the record is not of the
    /// projector's family.
    pub fn project(&self, record: &Record) -> Result<(Row, Vec<String>), ReportError> {
        if record.kind() != self.kind {
            return Err(ReportError::ProjectionMismatch {
                expected: self.kind,
                found: record.kind(),
            });
        }

        let mut fields = match record {
            Record::Visit(visit) => visit_fields(visit)?,
            Record::ShortUrl(short_url) => serialized_fields(short_url)?,
        };
        let extras = self.extra_fields(record);
        let extra_keys: Vec<String> = extras.keys().cloned().collect();
        fields.extend(extras.into_iter().map(|(k, v)| (k, Value::String(v))));

        let row = common_columns(self.kind)
            .iter()
            .map(|(key, _)| *key)
            .chain(extra_keys.iter().map(String::as_str))
            .map(|key| {
                let value = fields.get(key).map(display_value).unwrap_or_default();
                (key.to_string(), value)
            })
            .collect();

        Ok((row, extra_keys))
    }

    /// Starts a render session whose columns are fixed by its first record.
    pub fn session(&self) -> ProjectionSession<'_> {
        ProjectionSession {
            projector: self,
            columns: None,
            rows: Vec::new(),
        }
    }

    fn extra_fields(&self, record: &Record) -> IndexMap<String, String> {
        let mut extras = IndexMap::new();
        match record {
            Record::Visit(visit) => match &visit.short_code {
                Some(code) => {
                    extras.insert("shortCode".to_string(), code.clone());
                }
                None => {
                    extras.insert("type".to_string(), visit.visit_type.as_str().to_string());
                }
            },
            Record::ShortUrl(short_url) => {
                if self.options.show_tags {
                    extras.insert("tags".to_string(), short_url.tags.join(", "));
                }
            }
        }
        extras
    }
}

fn serialized_fields<T: serde::Serialize>(value: &T) -> Result<Map<String, Value>, ReportError> {
    match serde_json::to_value(value).map_err(std::io::Error::from)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn visit_fields(visit: &Visit) -> Result<Map<String, Value>, ReportError> {
    let mut fields = serialized_fields(visit)?;
    let (country, city) = match &visit.visit_location {
        Some(location) => (location.country_name.clone(), location.city_name.clone()),
        None => (UNKNOWN_LOCATION.to_string(), UNKNOWN_LOCATION.to_string()),
    };
    fields.insert("country".to_string(), Value::String(country));
    fields.insert("city".to_string(), Value::String(city));
    Ok(fields)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// Accumulates rows for a single table render.
pub struct ProjectionSession<'a> {
    projector: &'a FieldProjector,
    columns: Option<ColumnSet>,
    rows: Vec<Vec<String>>,
}

impl ProjectionSession<'_> {
    /// Projects `record` and appends it as a row.
    ///
    /// The first record fixes the session's columns. Later records with other
    /// extra keys lose the unknown ones and get empty cells for missing ones.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ProjectionMismatch`] for a record of another family.
    pub fn push(&mut self, record: &Record) -> Result<(), ReportError> {
        let kind = self.projector.kind;
        let (row, extra_keys) = self.projector.project(record)?;
        let columns = self
            .columns
            .get_or_insert_with(|| ColumnSet::with_extra_keys(kind, &extra_keys));

        if !columns.extra_keys().eq(extra_keys.iter().map(String::as_str)) {
            tracing::debug!(
                expected = ?columns.extra_keys().collect::<Vec<_>>(),
                found = ?extra_keys,
                "Record extra columns differ from the session columns"
            );
        }

        self.rows.push(
            columns
                .keys()
                .map(|key| row.get(key).cloned().unwrap_or_default())
                .collect(),
        );
        Ok(())
    }

    /// Returns the headers and rows to render.
    ///
    /// A session that saw no record renders the common columns only.
    pub fn finish(self) -> (Vec<String>, Vec<Vec<String>>) {
        let columns = self
            .columns
            .unwrap_or_else(|| ColumnSet::common(self.projector.kind));
        (columns.labels(), self.rows)
    }
}
