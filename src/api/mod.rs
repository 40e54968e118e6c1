mod receipts;
mod settings;

pub use receipts::*;
pub use settings::*;

use gloo_net::http::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::rc::Rc;

use crate::error::{ApiError, ApiResult};
use crate::models::Health;

const DEFAULT_FAILURE: &str = "Request failed";

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: Rc<str>,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        ApiClient {
            base: Rc::from(base.trim_end_matches('/')),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn request(&self, method: Method, path: &str, body: Option<&Value>) -> ApiResult<Body> {
        let url = self.url(path);
        let verb = method.to_string();
        log::debug!("{} {}", verb, url);

        let builder = RequestBuilder::new(&url)
            .method(method)
            .header("Content-Type", "application/json");
        let request = match body {
            Some(json) => builder.json(json).map_err(|e| ApiError::Encode(e.to_string()))?,
            None => builder.build()?,
        };

        let response = request.send().await?;
        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = failure_message(&text);
            log::warn!("{} {} failed with {}: {}", verb, url, status, message);
            return Err(ApiError::Status { status, message });
        }
        read_body(response).await
    }

    pub async fn request_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ApiResult<T> {
        match self.request(method, path, body).await? {
            Body::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
            }
            Body::Text(text) => {
                serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
            }
        }
    }

    pub async fn health(&self) -> ApiResult<Health> {
        self.request_json(Method::GET, "/api/health", None).await
    }
}

async fn read_body(response: Response) -> ApiResult<Body> {
    let is_json = response
        .headers()
        .get("content-type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);
    if is_json {
        Ok(Body::Json(response.json::<Value>().await?))
    } else {
        Ok(Body::Text(response.text().await?))
    }
}

/// Turns an error response body into the one message shown to the user.
///
/// JSON bodies contribute their `detail` field (a string, or a list of
/// validation entries each carrying `msg`). Anything else falls back to the
/// raw body text.
pub fn failure_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => json
            .get("detail")
            .and_then(detail_text)
            .unwrap_or_else(|| DEFAULT_FAILURE.to_string()),
        Err(_) => {
            let text = body.trim();
            if text.is_empty() {
                DEFAULT_FAILURE.to_string()
            } else {
                text.to_string()
            }
        }
    }
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(entries) => {
            let parts: Vec<String> = entries.iter().filter_map(detail_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        Value::Object(map) => map.get("msg").and_then(detail_text),
        _ => None,
    }
}
