use super::client::ApiClient;
use super::types::{ApiError, CreateAccessRequest, CreateFeedback};

impl ApiClient {
    /// Public endpoint; the visitor has no session yet.
    pub async fn create_access_request(
        &self,
        request: CreateAccessRequest,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/access-requests", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::read_ok(response).await
    }

    pub async fn submit_feedback(&self, request: CreateFeedback) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/feedback", base_url))
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::read_ok(response).await
    }
}
