//! Link Data Structures
//!
//! Represents a saved bookmark and the bodies of the `/api/links` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// A saved link, owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Unique link ID
    #[serde(alias = "_id")]
    pub id: Uuid,
    /// Owner's user ID
    pub user: Uuid,
    pub title: String,
    pub url: String,
    /// Free-form notes (empty when none were given)
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Visit counter; nothing increments it yet
    #[serde(default)]
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/links`
///
/// `tags` is kept as raw JSON because any non-list value is accepted and
/// treated as "no tags". Numeric and boolean `title`/`url` values are
/// stringified; other non-string values read as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default, deserialize_with = "scalar_as_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "scalar_as_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(&value))
}

impl CreateLinkRequest {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = tags.into_iter().map(|t| Value::String(t.into())).collect();
        self.tags = Some(Value::Array(tags));
        self
    }

    /// Tags as a list of strings.
    ///
    /// Strings are kept, numbers and booleans are stringified, anything else
    /// inside the list is dropped. A missing or non-list value yields `[]`.
    pub fn normalized_tags(&self) -> Vec<String> {
        match &self.tags {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_to_string).collect(),
            _ => Vec::new(),
        }
    }
}

/// Response of `POST /api/links`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCreatedResponse {
    pub message: String,
    pub link: Link,
}

/// Response of `DELETE /api/links/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDeletedResponse {
    pub message: String,
    pub id: Uuid,
}

/// Response of `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub status: u16,
}
