use gloo_net::http::Method;

use super::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::models::Settings;

impl ApiClient {
    pub async fn get_settings(&self) -> ApiResult<Settings> {
        self.request_json(Method::GET, "/api/settings", None).await
    }

    pub async fn save_settings(&self, settings: &Settings) -> ApiResult<Settings> {
        let body = serde_json::to_value(settings).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request_json(Method::PUT, "/api/settings", Some(&body)).await
    }
}
