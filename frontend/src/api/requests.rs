use serde_json::Value;

use super::{client::ApiClient, types::ApiError, types::CreateCashAdvanceRequest};

// The upstream API leaves status codes and response shapes unspecified, so
// neither operation inspects the status: whatever comes back is parsed as
// JSON, and only transport or parse failures surface as errors.
impl ApiClient {
    pub async fn list_requests(&self) -> Result<Vec<Value>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/requests", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        response
            .json()
            .await
            .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
    }

    pub async fn create_request(
        &self,
        payload: &CreateCashAdvanceRequest,
    ) -> Result<Value, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/requests", base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        response
            .json()
            .await
            .map_err(|e| ApiError::parse_failed(format!("Failed to parse response: {}", e)))
    }
}
