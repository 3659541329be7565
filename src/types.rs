use serde::{Deserialize, Serialize};

/// One submitted sign-up. Created by the registration form, immutable and
/// read-only afterwards. Records carry no identity beyond their position in
/// the loaded snapshot; duplicates are indistinguishable.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRecord {
    pub affiliation: String,
    pub employee_id: String,
    pub name: String,
    pub position: String,
    /// RFC 3339 string as stored in the remote document.
    pub timestamp: String,
    /// Epoch milliseconds parsed from `timestamp`; the sort key.
    pub timestamp_ms: f64,
}

/// Webinar descriptive settings. Single global instance, last-write-wins.
/// `schedule` holds one session entry per line; `speaker` is the name on the
/// first line with the bio on the remaining lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct WebinarTopic {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub schedule: String,
    pub speaker: String,
}

/// Connection parameters for the remote document store. Persisted as one JSON
/// record; all fields default to empty until the admin fills them in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BackendSettings {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}
