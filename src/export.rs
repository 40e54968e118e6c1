use serde_json::Value;

use crate::error::ExportError;
use crate::models::ReceiptSummary;
use crate::money::round_cents;

pub const CSV_FILENAME: &str = "receipt-history.csv";
pub const CSV_MIME: &str = "text/csv;charset=utf-8";
pub const JSON_MIME: &str = "application/json";

const CSV_HEADER: [&str; 5] = ["Receipt Number", "Student Name", "Class", "Total", "Created At"];

/// Every cell quoted, lines joined with `\n`, no trailing newline.
pub fn history_csv(rows: &[ReceiptSummary]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for row in rows {
        let total = format!("{:.2}", round_cents(row.total.value()));
        let created = row.created_at.map(|t| t.to_iso()).unwrap_or_default();
        writer.write_record([
            row.receipt_number.as_str(),
            row.student_name.as_str(),
            row.student_class.as_str(),
            total.as_str(),
            created.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

pub fn json_filename(document: &Value) -> String {
    let number = document
        .get("receipt_number")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or("receipt");
    format!("{}.json", number)
}

pub fn pretty_json(document: &Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_else(|_| document.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::summary;
    use serde_json::json;

    #[test]
    fn quotes_comma_names() {
        let csv = history_csv(&[summary(1, "R1", "Jane, A", 10)]).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "\"Receipt Number\",\"Student Name\",\"Class\",\"Total\",\"Created At\""
        );
        assert_eq!(
            lines[1],
            "\"R1\",\"Jane, A\",\"5B\",\"10.00\",\"2026-03-01T09:15:00.000Z\""
        );
    }

    #[test]
    fn doubles_embedded_quotes() {
        let csv = history_csv(&[summary(1, "R1", "Ada \"Ace\" Obi", 10)]).unwrap();
        assert!(csv.contains("\"Ada \"\"Ace\"\" Obi\""));
    }

    #[test]
    fn unknown_created_at_is_an_empty_cell() {
        let mut row = summary(1, "R1", "Jane", 10);
        row.created_at = None;
        let csv = history_csv(&[row]).unwrap();
        assert!(csv.ends_with("\"10.00\",\"\""));
    }

    #[test]
    fn header_only_for_no_rows() {
        let csv = history_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn json_export_naming() {
        let doc = json!({"receipt_number": "RCPT-2026-0001", "total": "10.00"});
        assert_eq!(json_filename(&doc), "RCPT-2026-0001.json");
        assert_eq!(json_filename(&json!({})), "receipt.json");
        assert!(pretty_json(&doc).contains("\n  \"receipt_number\""));
    }
}
