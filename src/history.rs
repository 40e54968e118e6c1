use rust_decimal::Decimal;

use crate::api::ReceiptFilter;
use crate::models::{date_label, datetime_label, Receipt, ReceiptSummary};
use crate::money::{format_money, Currency};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Search,
    DateFrom,
    DateTo,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HistoryState {
    pub filter: ReceiptFilter,
    rows: Vec<ReceiptSummary>,
    detail: Option<Receipt>,
    issued: u64,
    applied: u64,
}

impl HistoryState {
    pub fn set_filter(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Search => self.filter.search = value,
            FilterField::DateFrom => self.filter.date_from = value,
            FilterField::DateTo => self.filter.date_to = value,
        }
    }

    pub fn begin_load(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Installs rows from the request identified by `ticket`.
    ///
    /// Returns false and changes nothing when a newer request has already
    /// been applied.
    pub fn apply(&mut self, ticket: u64, rows: Vec<ReceiptSummary>) -> bool {
        if ticket <= self.applied {
            log::debug!("dropping stale history response {} (have {})", ticket, self.applied);
            return false;
        }
        self.applied = ticket;
        self.rows = rows;
        self.detail = None;
        true
    }

    pub fn rows(&self) -> &[ReceiptSummary] {
        &self.rows
    }

    pub fn show_detail(&mut self, receipt: Receipt) {
        self.detail = Some(receipt);
    }

    pub fn total(&self) -> Decimal {
        self.rows
            .iter()
            .map(|r| r.total.value())
            .fold(Decimal::ZERO, |acc, n| acc + n)
    }

    pub fn footer(&self, currency: &Currency) -> HistoryFooter {
        let count = self.rows.len();
        HistoryFooter {
            summary: format!("Showing {} receipt{}", count, if count == 1 { "" } else { "s" }),
            count: count.to_string(),
            total: format_money(self.total(), currency),
        }
    }

    pub fn row_views(&self, currency: &Currency) -> Vec<HistoryRowView> {
        self.rows
            .iter()
            .map(|r| HistoryRowView::new(r, currency))
            .collect()
    }

    pub fn detail_view(&self, currency: &Currency) -> Option<DetailView> {
        self.detail.as_ref().map(|r| DetailView::new(r, currency))
    }
}

pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "ST".to_string()
    } else {
        letters
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryRowView {
    pub id: i64,
    pub receipt_label: String,
    pub initials: String,
    pub student_name: String,
    pub student_class: String,
    pub total: String,
    pub issued: String,
}

impl HistoryRowView {
    pub fn new(row: &ReceiptSummary, currency: &Currency) -> Self {
        HistoryRowView {
            id: row.id,
            receipt_label: format!("#{}", row.receipt_number),
            initials: initials(&row.student_name),
            student_name: row.student_name.clone(),
            student_class: row.student_class.clone(),
            total: format_money(row.total.value(), currency),
            issued: date_label(row.created_at),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryFooter {
    pub summary: String,
    pub count: String,
    pub total: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub id: i64,
    pub heading: String,
    pub subheading: String,
    pub items: Vec<(String, String)>,
    pub total: String,
}

impl DetailView {
    pub fn new(receipt: &Receipt, currency: &Currency) -> Self {
        DetailView {
            id: receipt.id,
            heading: format!("Receipt Details - {}", receipt.receipt_number),
            subheading: format!(
                "{} | {} ({})",
                datetime_label(receipt.created_at),
                receipt.student_name,
                receipt.student_class
            ),
            items: receipt
                .items
                .iter()
                .map(|i| (i.item_name.clone(), format_money(i.amount.value(), currency)))
                .collect(),
            total: format!("Total: {}", format_money(receipt.total.value(), currency)),
        }
    }
}
