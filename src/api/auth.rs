use reqwest::StatusCode;

use super::client::{clear_auth_session, persist_session, stored_access_token, ApiClient};
use super::types::{ApiError, LoginRequest, LoginResponse, UserResponse};

impl ApiClient {
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/api/auth/login", base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let login_response: LoginResponse = response
                .json()
                .await
                .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))?;
            persist_session(&login_response)?;
            Ok(login_response)
        } else {
            Err(Self::decode_error_body(status, response).await)
        }
    }

    /// Startup identity probe. A 401 here only clears the stored session and
    /// never redirects, otherwise the public routes would be unreachable for
    /// visitors with an expired token.
    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        if stored_access_token().is_none() {
            return Err(ApiError::unauthenticated());
        }
        let headers = self.get_auth_headers()?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!("{}/api/auth/me", base_url))
            .headers(headers)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            clear_auth_session();
        }
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::decode_error_body(status, response).await)
        }
    }

    /// The stored session is dropped even when the backend call fails; a
    /// client that cannot reach the server must still be able to sign out.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = match self.get_auth_headers() {
            Ok(headers) => {
                let base_url = self.resolved_base_url().await;
                match self
                    .http_client()
                    .post(format!("{}/api/auth/logout", base_url))
                    .headers(headers)
                    .json(&serde_json::json!({}))
                    .send()
                    .await
                {
                    Ok(response) => Self::read_ok(response).await,
                    Err(e) => Err(ApiError::request_failed(format!("Request failed: {}", e))),
                }
            }
            Err(error) => Err(error),
        };
        clear_auth_session();
        result
    }
}
