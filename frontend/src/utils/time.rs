//! Locale rendering for the `request_date` timestamps the API hands back.
//! Values that do not parse are shown as-is.

#[cfg(target_arch = "wasm32")]
pub fn format_request_date(raw: &str) -> String {
    let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
    if parsed.get_time().is_nan() {
        return raw.to_string();
    }
    parsed
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn format_request_date(raw: &str) -> String {
    use chrono::Datelike;

    parse_timestamp(raw)
        .map(|date| format!("{}/{}/{}", date.month(), date.day(), date.year()))
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_timestamp(raw: &str) -> Option<chrono::NaiveDate> {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(format_request_date("2024-01-01T00:00:00Z"), "1/1/2024");
        assert_eq!(format_request_date("2025-11-30T23:59:59+00:00"), "11/30/2025");
    }

    #[test]
    fn formats_naive_timestamps_and_plain_dates() {
        assert_eq!(format_request_date("2024-03-05T09:30:00"), "3/5/2024");
        assert_eq!(format_request_date("2024-03-05"), "3/5/2024");
    }

    #[test]
    fn unparseable_values_pass_through() {
        assert_eq!(format_request_date("not a date"), "not a date");
        assert_eq!(format_request_date(""), "");
    }
}
