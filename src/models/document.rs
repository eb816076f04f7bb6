use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::{timestamp, Person, Relationship};

/// Title given to new documents.
pub const DEFAULT_TITLE: &str = "Family Tree";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Read `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn title_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_title))
}

/// The full persisted family tree record.
///
/// `people` and `relationships` are required when reading a document; they are
/// the minimum structure a file must have. `meta` and its timestamps are
/// backfilled when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Meta,
    pub people: Vec<Person>,
    pub relationships: Vec<Relationship>,
}

impl Document {
    /// An empty document stamped with the current time.
    pub fn new() -> Self {
        Self {
            meta: Meta::default(),
            people: Vec::new(),
            relationships: Vec::new(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default = "default_title", deserialize_with = "title_or_default")]
    pub title: String,
    /// Starting point for rendering. May be stale in imported documents.
    #[serde(default)]
    pub root_person_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "Utc::now", with = "timestamp")]
    pub created: DateTime<Utc>,
    #[serde(default = "Utc::now", with = "timestamp")]
    pub modified: DateTime<Utc>,
}

impl Default for Meta {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            title: default_title(),
            root_person_id: None,
            notes: None,
            created: now,
            modified: now,
        }
    }
}

/// Input for editing metadata. `None` keeps the current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetaUpdate {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub root_person_id: Option<String>,
}
