use super::client::{encode_path_segment, ApiClient};
use super::types::{
    AccessDecision, AccessRequest, AccessRequestStatus, ApiError, ApprovedUser, Feedback,
};

impl ApiClient {
    pub async fn list_access_requests(
        &self,
        status: AccessRequestStatus,
    ) -> Result<Vec<AccessRequest>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/api/access-requests", base_url))
            .query(&[("status", status.as_str())])
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::read_json(response).await
    }

    pub async fn list_approved_users(&self) -> Result<Vec<ApprovedUser>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/api/approved-users", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::read_json(response).await
    }

    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/api/feedback", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::read_json(response).await
    }

    /// Remote transition on a pending request. The caller refetches the
    /// affected collections afterwards; nothing is mutated locally.
    pub async fn decide_access_request(
        &self,
        username: &str,
        decision: AccessDecision,
    ) -> Result<(), ApiError> {
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let url = format!(
            "{}/api/access-requests/{}/{}",
            base_url,
            encode_path_segment(username),
            decision.action()
        );
        let response = self
            .http_client()
            .post(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        Self::read_ok(response).await
    }
}
