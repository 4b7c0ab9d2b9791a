use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::types::{ApiError, LoginResponse};
use crate::config;
use crate::utils::{nav, storage};

pub(crate) const ACCESS_TOKEN_KEY: &str = "access_token";
pub(crate) const CURRENT_USER_KEY: &str = "current_user";

// Characters escaped when a username becomes a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

pub(crate) fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_backend_url().await
        }
    }

    pub(crate) fn get_auth_headers(&self) -> Result<header::HeaderMap, ApiError> {
        let token = stored_access_token().ok_or_else(ApiError::unauthenticated)?;
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unknown("Invalid token format"))?,
        );
        Ok(headers)
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            clear_auth_session();
            redirect_to_login_if_needed();
        }
    }

    /// Shared tail of every data call: expire the session on 401, decode the
    /// body on success, decode the error payload otherwise.
    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::invalid_response(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::decode_error_body(status, response).await)
        }
    }

    /// Like [`read_json`] for endpoints whose success body carries nothing.
    pub(crate) async fn read_ok(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::decode_error_body(status, response).await)
        }
    }

    pub(crate) async fn decode_error_body(status: StatusCode, response: Response) -> ApiError {
        match response.json::<ApiError>().await {
            Ok(error) => error,
            Err(_) => ApiError::request_failed(format!("Request failed with status {}", status)),
        }
    }
}

pub(crate) fn persist_session(response: &LoginResponse) -> Result<(), ApiError> {
    if !storage::set_item(ACCESS_TOKEN_KEY, &response.access_token) {
        return Err(ApiError::unknown("Failed to store session token"));
    }
    let user_json = serde_json::to_string(&response.user)
        .map_err(|_| ApiError::unknown("Failed to serialize user profile"))?;
    if !storage::set_item(CURRENT_USER_KEY, &user_json) {
        return Err(ApiError::unknown("Failed to store user profile"));
    }
    Ok(())
}

pub(crate) fn clear_auth_session() {
    storage::remove_item(ACCESS_TOKEN_KEY);
    storage::remove_item(CURRENT_USER_KEY);
}

pub(crate) fn stored_access_token() -> Option<String> {
    storage::get_item(ACCESS_TOKEN_KEY)
}

fn redirect_to_login_if_needed() {
    if nav::current_path().as_deref() == Some("/login") {
        return;
    }
    nav::redirect_to("/login");
}
