//! CSV export for the registrant report. The text is UTF-8 with a leading
//! BOM so spreadsheet tools pick up the Korean headers; the download goes
//! through a Blob object URL and a temporary anchor.

use gloo::console::log;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::types::RegistrationRecord;

const BOM: char = '\u{feff}';
const CSV_HEADER: &str = "소속,사번,성함,직책,참여시간";

/// Builds the export text: header row, then one row per record in display
/// order. `localize` renders the timestamp column. Field values are not
/// escaped; a value containing a comma shifts the rest of its row (known
/// limitation, kept as-is).
pub fn build_csv(
    records: &[RegistrationRecord],
    localize: impl Fn(&RegistrationRecord) -> String,
) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(CSV_HEADER);
    for r in records {
        out.push('\n');
        out.push_str(&format!(
            "{},{},{},{},{}",
            r.affiliation,
            r.employee_id,
            r.name,
            r.position,
            localize(r)
        ));
    }
    out
}

pub fn csv_filename(date_ymd: &str) -> String {
    format!("xClass_NOW_참가자명단_{date_ymd}.csv")
}

/// Timestamp column rendering, Korean locale.
pub fn locale_timestamp(ms: f64) -> String {
    js_sys::Date::new(&JsValue::from_f64(ms))
        .to_locale_string("ko-KR", &JsValue::UNDEFINED)
        .into()
}

/// Today as YYYY-MM-DD in UTC, for the export filename.
pub fn today_ymd() -> String {
    let iso: String = js_sys::Date::new_0().to_iso_string().into();
    date_part(&iso).to_string()
}

/// The date half of an ISO 8601 string.
fn date_part(iso: &str) -> &str {
    iso.split('T').next().unwrap_or(iso)
}

pub fn download_csv(filename: &str, content: &str) -> Result<(), String> {
    let mut bag = BlobPropertyBag::new();
    bag.type_("text/csv;charset=utf-8;");

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));

    let blob = Blob::new_with_str_sequence_and_options(&parts, &bag)
        .map_err(|_| "Could not create Blob".to_string())?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Could not create object URL".to_string())?;

    let window = web_sys::window().ok_or("No window".to_string())?;
    let document = window.document().ok_or("No document".to_string())?;
    let a = document
        .create_element("a")
        .map_err(|_| "Could not create <a> element".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "Could not cast to HtmlAnchorElement".to_string())?;

    a.set_href(&url);
    a.set_download(filename);
    a.style().set_property("display", "none").ok();

    let body = document.body().ok_or("No body".to_string())?;
    body.append_child(&a)
        .map_err(|_| "Could not append link".to_string())?;
    a.click();
    body.remove_child(&a).ok();

    Url::revoke_object_url(&url).ok();
    log!(format!("Downloaded file: {filename}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, ms: f64) -> RegistrationRecord {
        RegistrationRecord {
            affiliation: "Eng".into(),
            employee_id: "E1".into(),
            name: name.into(),
            position: "Lead".into(),
            timestamp: "2026-08-01T05:00:00Z".into(),
            timestamp_ms: ms,
        }
    }

    #[test]
    fn csv_starts_with_a_utf8_bom() {
        let csv = build_csv(&[record("Kim", 1.0)], |_| "T".into());
        assert_eq!(&csv.as_bytes()[..3], &[0xEF, 0xBB, 0xBF]);
    }

    #[test]
    fn header_then_one_row_per_record() {
        let csv = build_csv(&[record("Kim", 1.0)], |_| "2026. 8. 1. 오후 2:00:00".into());
        let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "소속,사번,성함,직책,참여시간");
        assert_eq!(lines[1], "Eng,E1,Kim,Lead,2026. 8. 1. 오후 2:00:00");
    }

    #[test]
    fn rows_follow_display_order() {
        let csv = build_csv(&[record("Kim", 2.0), record("Lee", 1.0)], |r| {
            r.timestamp_ms.to_string()
        });
        let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').lines().collect();
        assert!(lines[1].starts_with("Eng,E1,Kim,"));
        assert!(lines[2].starts_with("Eng,E1,Lee,"));
    }

    #[test]
    fn empty_set_is_just_the_header() {
        let csv = build_csv(&[], |_| String::new());
        assert_eq!(csv.trim_start_matches('\u{feff}'), "소속,사번,성함,직책,참여시간");
    }

    #[test]
    fn filename_embeds_the_date() {
        assert_eq!(csv_filename("2026-08-29"), "xClass_NOW_참가자명단_2026-08-29.csv");
    }

    #[test]
    fn filename_date_is_the_utc_date_half_of_the_iso_instant() {
        assert_eq!(date_part("2026-08-29T23:59:59.000Z"), "2026-08-29");
        assert_eq!(date_part("2026-08-29"), "2026-08-29");
    }
}
