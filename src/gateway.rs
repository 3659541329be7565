//! REST client for the remote document store holding sign-ups. The gateway is
//! a plain value built from [`BackendSettings`]; changing connection
//! parameters tears it down and constructs a fresh one, no reload needed.

use std::collections::HashMap;

use gloo::console::log;
use serde::Deserialize;

use crate::constants::REGISTRATIONS_COLLECTION;
use crate::types::{BackendSettings, RegistrationRecord};

const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationGateway {
    settings: BackendSettings,
}

#[derive(Deserialize, Default)]
struct ListResponse {
    #[serde(default)]
    documents: Vec<StoredDocument>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

/// One page of the listing plus the token for the next one, if any.
#[derive(Debug, PartialEq)]
struct Page {
    records: Vec<RegistrationRecord>,
    next_page_token: Option<String>,
}

#[derive(Deserialize)]
struct StoredDocument {
    #[serde(default)]
    fields: HashMap<String, FieldValue>,
}

#[derive(Deserialize, Default)]
struct FieldValue {
    #[serde(rename = "stringValue")]
    string_value: Option<String>,
    #[serde(rename = "timestampValue")]
    timestamp_value: Option<String>,
}

impl RegistrationGateway {
    pub fn new(settings: BackendSettings) -> Self {
        Self { settings }
    }

    pub fn is_configured(&self) -> bool {
        !self.settings.project_id.trim().is_empty() && !self.settings.api_key.trim().is_empty()
    }

    fn collection_url(&self) -> String {
        format!(
            "{FIRESTORE_BASE}/projects/{}/databases/(default)/documents/{REGISTRATIONS_COLLECTION}",
            self.settings.project_id.trim()
        )
    }

    /// Fetches the complete current snapshot, following `nextPageToken`
    /// until the store stops handing one out. No retry; any transport or
    /// parse failure degrades to an empty list so the report view shows
    /// zero rows instead of crashing.
    pub async fn fetch_all_registrations(&self) -> Vec<RegistrationRecord> {
        if !self.is_configured() {
            log!("registrations fetch skipped: backend settings incomplete");
            return Vec::new();
        }

        let base = format!(
            "{}?key={}&pageSize=1000",
            self.collection_url(),
            self.settings.api_key.trim()
        );

        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let url = match &page_token {
                Some(token) => format!("{base}&pageToken={token}"),
                None => base.clone(),
            };

            let resp = match gloo_net::http::Request::get(&url).send().await {
                Ok(r) if r.ok() => r,
                Ok(r) => {
                    log!(format!("registrations fetch: HTTP {}", r.status()));
                    return Vec::new();
                }
                Err(e) => {
                    log!(format!("registrations fetch failed: {e}"));
                    return Vec::new();
                }
            };

            let body = match resp.text().await {
                Ok(b) => b,
                Err(e) => {
                    log!(format!("registrations body read failed: {e}"));
                    return Vec::new();
                }
            };

            let page = parse_listing(&body, &|ts| js_sys::Date::parse(ts));
            records.extend(page.records);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        records
    }

    /// Appends one sign-up document. Used by the landing registration form.
    pub async fn submit_registration(
        &self,
        affiliation: &str,
        employee_id: &str,
        name: &str,
        position: &str,
        timestamp: &str,
    ) -> Result<(), String> {
        if !self.is_configured() {
            return Err("접수처가 아직 설정되지 않았습니다.".to_string());
        }

        let body = serde_json::json!({
            "fields": {
                "affiliation": { "stringValue": affiliation },
                "employeeId": { "stringValue": employee_id },
                "name": { "stringValue": name },
                "position": { "stringValue": position },
                "timestamp": { "timestampValue": timestamp },
            }
        });

        let url = format!("{}?key={}", self.collection_url(), self.settings.api_key.trim());
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| format!("요청 생성 실패: {e}"))?
            .send()
            .await
            .map_err(|e| format!("네트워크 오류: {e}"))?;

        if resp.ok() {
            Ok(())
        } else {
            Err(format!("HTTP {}", resp.status()))
        }
    }
}

/// Maps one page of the store's listing response onto registration records.
/// `to_millis` converts the stored RFC 3339 timestamp into epoch
/// milliseconds (the browser `Date` parser in production). Malformed bodies
/// yield an empty page; documents missing a field get empty strings.
fn parse_listing(body: &str, to_millis: &dyn Fn(&str) -> f64) -> Page {
    let listing: ListResponse = serde_json::from_str(body).unwrap_or_default();

    let records = listing
        .documents
        .into_iter()
        .map(|doc| {
            let text = |key: &str| {
                doc.fields
                    .get(key)
                    .and_then(|f| f.string_value.clone())
                    .unwrap_or_default()
            };
            let timestamp = doc
                .fields
                .get("timestamp")
                .and_then(|f| f.timestamp_value.clone().or_else(|| f.string_value.clone()))
                .unwrap_or_default();
            let timestamp_ms = to_millis(&timestamp);
            RegistrationRecord {
                affiliation: text("affiliation"),
                employee_id: text("employeeId"),
                name: text("name"),
                position: text("position"),
                timestamp,
                timestamp_ms,
            }
        })
        .collect();

    Page {
        records,
        next_page_token: listing.next_page_token,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"{
        "documents": [
            {
                "name": "projects/p/databases/(default)/documents/registrations/a1",
                "fields": {
                    "affiliation": { "stringValue": "Eng" },
                    "employeeId": { "stringValue": "E1" },
                    "name": { "stringValue": "Kim" },
                    "position": { "stringValue": "Lead" },
                    "timestamp": { "timestampValue": "2026-08-01T05:00:00Z" }
                }
            },
            {
                "name": "projects/p/databases/(default)/documents/registrations/a2",
                "fields": {
                    "name": { "stringValue": "Lee" },
                    "timestamp": { "timestampValue": "2026-08-02T05:00:00Z" }
                }
            }
        ]
    }"#;

    fn fake_millis(ts: &str) -> f64 {
        ts.len() as f64
    }

    #[test]
    fn listing_maps_onto_records() {
        let page = parse_listing(LISTING, &fake_millis);
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.records[0].affiliation, "Eng");
        assert_eq!(page.records[0].employee_id, "E1");
        assert_eq!(page.records[0].name, "Kim");
        assert_eq!(page.records[0].position, "Lead");
        assert_eq!(page.records[0].timestamp, "2026-08-01T05:00:00Z");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let page = parse_listing(LISTING, &fake_millis);
        assert_eq!(page.records[1].affiliation, "");
        assert_eq!(page.records[1].position, "");
        assert_eq!(page.records[1].name, "Lee");
    }

    #[test]
    fn parsing_is_idempotent_for_an_unchanged_snapshot() {
        let first = parse_listing(LISTING, &fake_millis);
        let second = parse_listing(LISTING, &fake_millis);
        assert_eq!(first, second);
    }

    #[test]
    fn malformed_body_degrades_to_empty() {
        assert!(parse_listing("not json", &fake_millis).records.is_empty());
        assert!(parse_listing("{}", &fake_millis).records.is_empty());
    }

    #[test]
    fn a_partial_page_surfaces_its_follow_up_token() {
        let body = r#"{
            "documents": [
                { "fields": { "name": { "stringValue": "Kim" } } }
            ],
            "nextPageToken": "AbCdEf"
        }"#;
        let page = parse_listing(body, &fake_millis);
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.next_page_token.as_deref(), Some("AbCdEf"));
    }

    #[test]
    fn the_final_page_carries_no_token() {
        let page = parse_listing(LISTING, &fake_millis);
        assert_eq!(page.next_page_token, None);
    }

    #[test]
    fn unconfigured_gateway_reports_it() {
        let gw = RegistrationGateway::new(Default::default());
        assert!(!gw.is_configured());
    }

    #[test]
    fn collection_url_embeds_the_project() {
        let gw = RegistrationGateway::new(crate::types::BackendSettings {
            api_key: "k".into(),
            project_id: " xclass-now ".into(),
            ..Default::default()
        });
        assert!(gw.is_configured());
        assert_eq!(
            gw.collection_url(),
            "https://firestore.googleapis.com/v1/projects/xclass-now/databases/(default)/documents/registrations"
        );
    }
}
