use serde_json::Value;

/// Display projection of one cash-advance record. The collection endpoint's
/// record shape is not validated, so fields are extracted leniently: numbers
/// and strings both render, anything else shows as empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestRow {
    pub id: String,
    pub amount: String,
    pub purpose: String,
    pub status: String,
    pub request_date: Option<String>,
}

impl RequestRow {
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: display_field(value, "id"),
            amount: display_field(value, "amount"),
            purpose: display_field(value, "purpose"),
            status: display_field(value, "status"),
            request_date: value
                .get("request_date")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string()),
        }
    }
}

pub fn project_rows(records: &[Value]) -> Vec<RequestRow> {
    records.iter().map(RequestRow::from_value).collect()
}

fn display_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Badge class for a status cell. Statuses are assigned by the upstream
/// system; unrecognized values get the neutral style.
pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_ascii_lowercase().as_str() {
        "pending" => "bg-yellow-100 text-yellow-800",
        "approved" | "approved by approver" | "payment requested" => {
            "bg-green-100 text-green-800"
        }
        "rejected" | "returned to officer" => "bg-red-100 text-red-800",
        _ => "bg-gray-100 text-gray-800",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn projects_numeric_and_string_fields() {
        let record = json!({
            "id": 1,
            "amount": 50,
            "purpose": "Food",
            "status": "pending",
            "request_date": "2024-01-01T00:00:00Z"
        });
        let row = RequestRow::from_value(&record);
        assert_eq!(row.id, "1");
        assert_eq!(row.amount, "50");
        assert_eq!(row.purpose, "Food");
        assert_eq!(row.status, "pending");
        assert_eq!(row.request_date.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn string_amounts_render_verbatim() {
        let record = json!({ "id": "ca-2", "amount": "120.50" });
        let row = RequestRow::from_value(&record);
        assert_eq!(row.id, "ca-2");
        assert_eq!(row.amount, "120.50");
    }

    #[test]
    fn missing_fields_render_empty() {
        let row = RequestRow::from_value(&json!({}));
        assert_eq!(row.id, "");
        assert_eq!(row.status, "");
        assert!(row.request_date.is_none());
    }

    #[test]
    fn projects_every_record() {
        let records = vec![json!({ "id": 1 }), json!({ "id": 2 })];
        let rows = project_rows(&records);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].id, "2");
    }

    #[test]
    fn status_badges_cover_upstream_statuses() {
        assert!(status_badge_class("Pending").contains("yellow"));
        assert!(status_badge_class("approved").contains("green"));
        assert!(status_badge_class("Returned to Officer").contains("red"));
        assert!(status_badge_class("something else").contains("gray"));
    }
}
