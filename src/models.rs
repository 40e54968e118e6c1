use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::money::{Amount, FALLBACK_SYMBOL};

/// Creation time of a receipt, always held in UTC.
///
/// The backend writes naive ISO timestamps (`2026-03-01T09:15:00.123456`);
/// RFC 3339 strings with an offset are accepted too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Timestamp(dt.with_timezone(&Utc)));
        }
        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| Timestamp(naive.and_utc()))
    }

    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    pub fn date_label(&self) -> String {
        self.0.format("%b %-d, %Y").to_string()
    }

    pub fn datetime_label(&self) -> String {
        self.0.format("%b %-d, %Y %H:%M").to_string()
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}

pub const UNKNOWN_DATE: &str = "Unknown date";

/// Reads `created_at` without failing the whole document: a missing, null or
/// unreadable value becomes `None`.
fn lenient_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Timestamp>, D::Error> {
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(Timestamp::parse))
}

pub fn date_label(at: Option<Timestamp>) -> String {
    at.map_or_else(|| UNKNOWN_DATE.to_string(), |t| t.date_label())
}

pub fn datetime_label(at: Option<Timestamp>) -> String {
    at.map_or_else(|| UNKNOWN_DATE.to_string(), |t| t.datetime_label())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub item_name: String,
    #[serde(default)]
    pub amount: Amount,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptSummary {
    pub id: i64,
    pub receipt_number: String,
    pub student_name: String,
    #[serde(default)]
    pub student_class: String,
    #[serde(default)]
    pub total: Amount,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub pdf_exists: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: i64,
    pub receipt_number: String,
    pub student_name: String,
    #[serde(default)]
    pub student_class: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub total: Amount,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub items: Vec<ReceiptItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedReceipt {
    #[serde(default)]
    pub message: String,
    pub receipt: Receipt,
    pub pdf_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewReceiptItem {
    pub item_name: String,
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewReceipt {
    pub student_name: String,
    pub student_class: String,
    pub department: String,
    pub items: Vec<NewReceiptItem>,
}

fn default_currency_symbol() -> String {
    FALLBACK_SYMBOL.to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub school_contact: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub school_address: String,
    #[serde(default)]
    pub footer_text: String,
    #[serde(default)]
    pub default_pdf_folder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            school_name: String::new(),
            school_contact: String::new(),
            currency_symbol: default_currency_symbol(),
            school_address: String::new(),
            footer_text: String::new(),
            default_pdf_folder: String::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Health {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn parses_backend_list_row() {
        let raw = r#"{
            "id": 7,
            "receipt_number": "RCPT-2026-0007",
            "student_name": "Ada Obi",
            "student_class": "JSS2",
            "total_cents": 150000,
            "total": "1,500.00",
            "created_at": "2026-03-01T09:15:00.123456",
            "pdf_exists": true
        }"#;
        let row: ReceiptSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(row.total.value(), Decimal::new(1500, 0));
        assert_eq!(row.created_at.unwrap().to_iso(), "2026-03-01T09:15:00.123Z");
        assert!(row.pdf_exists);
    }

    #[test]
    fn unreadable_created_at_keeps_the_row() {
        let raw = r#"[
            {"id": 1, "receipt_number": "R1", "student_name": "A", "created_at": "last week"},
            {"id": 2, "receipt_number": "R2", "student_name": "B", "created_at": null},
            {"id": 3, "receipt_number": "R3", "student_name": "C"}
        ]"#;
        let rows: Vec<ReceiptSummary> = serde_json::from_str(raw).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.created_at.is_none()));
        assert_eq!(date_label(rows[0].created_at), UNKNOWN_DATE);
        assert_eq!(datetime_label(rows[1].created_at), UNKNOWN_DATE);
    }

    #[test]
    fn timestamps_accept_offsets() {
        let ts = Timestamp::parse("2026-03-01T10:15:00+01:00").unwrap();
        assert_eq!(ts.to_iso(), "2026-03-01T09:15:00.000Z");
        assert_eq!(ts.date_label(), "Mar 1, 2026");
        assert_eq!(ts.datetime_label(), "Mar 1, 2026 09:15");
        assert!(Timestamp::parse("yesterday").is_none());
    }

    #[test]
    fn settings_fill_missing_fields() {
        let settings: Settings = serde_json::from_str(r#"{"id": 1, "school_name": "Hill"}"#).unwrap();
        assert_eq!(settings.school_name, "Hill");
        assert_eq!(settings.currency_symbol, "₦");
        assert_eq!(settings.footer_text, "");
    }
}
