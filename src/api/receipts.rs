use gloo_net::http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use super::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Ack, CreatedReceipt, NewReceipt, Receipt, ReceiptSummary};

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReceiptFilter {
    pub search: String,
    pub date_from: String,
    pub date_to: String,
}

impl ReceiptFilter {
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", self.search.trim()),
            ("date_from", self.date_from.trim()),
            ("date_to", self.date_to.trim()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }

    pub fn query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn list_path(&self) -> String {
        let query = self.query_string();
        if query.is_empty() {
            "/api/receipts".to_string()
        } else {
            format!("/api/receipts?{}", query)
        }
    }
}

pub fn receipt_path(id: i64) -> String {
    format!("/api/receipts/{}", id)
}

pub fn pdf_path(id: i64) -> String {
    format!("/api/receipts/{}/pdf", id)
}

pub fn regenerate_path(id: i64) -> String {
    format!("/api/receipts/{}/regenerate", id)
}

pub fn export_path(id: i64) -> String {
    format!("/api/receipts/{}/export", id)
}

impl ApiClient {
    pub async fn create_receipt(&self, payload: &NewReceipt) -> ApiResult<CreatedReceipt> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request_json(Method::POST, "/api/receipts", Some(&body)).await
    }

    pub async fn list_receipts(&self, filter: &ReceiptFilter) -> ApiResult<Vec<ReceiptSummary>> {
        self.request_json(Method::GET, &filter.list_path(), None).await
    }

    pub async fn get_receipt(&self, id: i64) -> ApiResult<Receipt> {
        self.request_json(Method::GET, &receipt_path(id), None).await
    }

    pub async fn regenerate_pdf(&self, id: i64) -> ApiResult<Ack> {
        self.request_json(Method::POST, &regenerate_path(id), None).await
    }

    pub async fn export_receipt(&self, id: i64) -> ApiResult<Value> {
        self.request_json(Method::GET, &export_path(id), None).await
    }

    pub async fn delete_receipt(&self, id: i64) -> ApiResult<Ack> {
        self.request_json(Method::DELETE, &receipt_path(id), None).await
    }
}
