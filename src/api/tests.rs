use super::client::{clear_auth_session, ACCESS_TOKEN_KEY, CURRENT_USER_KEY};
use super::*;
use crate::utils::storage;
use httpmock::prelude::*;
use serde_json::json;

fn sign_in() {
    storage::set_item(ACCESS_TOKEN_KEY, "test-token");
}

fn access_request_json(username: &str) -> serde_json::Value {
    json!({
        "username": username,
        "email": format!("{}@example.com", username),
        "createdAt": "2025-06-01T12:30:00Z",
        "status": "pending"
    })
}

#[tokio::test]
async fn login_persists_session() {
    clear_auth_session();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(200).json_body(json!({
                "user": { "username": "alice", "role": "admin" },
                "accessToken": "tok-1"
            }));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    let response = api
        .login(LoginRequest {
            username: "alice".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.user.username, "alice");
    assert_eq!(storage::get_item(ACCESS_TOKEN_KEY).as_deref(), Some("tok-1"));
    let stored_user = storage::get_item(CURRENT_USER_KEY).unwrap();
    assert!(stored_user.contains("alice"));
}

#[tokio::test]
async fn login_surfaces_backend_error() {
    clear_auth_session();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/auth/login");
            then.status(401).json_body(json!({
                "error": "Invalid username or password",
                "code": "INVALID_CREDENTIALS"
            }));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    let error = api
        .login(LoginRequest {
            username: "alice".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(error.code, "INVALID_CREDENTIALS");
    assert!(storage::get_item(ACCESS_TOKEN_KEY).is_none());
}

#[tokio::test]
async fn get_me_without_token_skips_network() {
    clear_auth_session();
    // Unroutable base URL: the call must fail before any request is issued.
    let api = ApiClient::new_with_base_url("http://127.0.0.1:1");
    let error = api.get_me().await.unwrap_err();
    assert_eq!(error.code, "UNAUTHENTICATED");
}

#[tokio::test]
async fn get_me_clears_session_on_401() {
    sign_in();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/auth/me");
            then.status(401).json_body(json!({
                "error": "Session expired",
                "code": "TOKEN_EXPIRED"
            }));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    let error = api.get_me().await.unwrap_err();

    assert_eq!(error.code, "TOKEN_EXPIRED");
    assert!(storage::get_item(ACCESS_TOKEN_KEY).is_none());
}

#[tokio::test]
async fn pending_requests_hit_the_status_filtered_endpoint() {
    sign_in();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/access-requests")
                .query_param("status", "pending")
                .header("authorization", "Bearer test-token");
            then.status(200)
                .json_body(json!([access_request_json("alice")]));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    let requests = api
        .list_access_requests(AccessRequestStatus::Pending)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].username, "alice");
    assert_eq!(requests[0].status, AccessRequestStatus::Pending);
}

#[tokio::test]
async fn empty_collections_decode_to_empty_vecs() {
    sign_in();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/approved-users");
            then.status(200).json_body(json!([]));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    let users = api.list_approved_users().await.unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn malformed_body_maps_to_invalid_response() {
    sign_in();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/feedback");
            then.status(200).json_body(json!({ "unexpected": "shape" }));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    let error = api.list_feedback().await.unwrap_err();
    assert_eq!(error.code, "INVALID_RESPONSE");
}

#[tokio::test]
async fn undecodable_error_body_maps_to_request_failed() {
    sign_in();
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/feedback");
            then.status(500).body("boom");
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    let error = api.list_feedback().await.unwrap_err();
    assert_eq!(error.code, "REQUEST_FAILED");
    assert!(error.error.contains("500"));
}

#[tokio::test]
async fn approve_posts_to_the_approve_transition() {
    sign_in();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/access-requests/alice/approve")
                .header("authorization", "Bearer test-token");
            then.status(200).json_body(json!({}));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    api.decide_access_request("alice", AccessDecision::Approve)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn deny_posts_to_the_deny_transition() {
    sign_in();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/access-requests/bob/deny");
            then.status(200).json_body(json!({}));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    api.decide_access_request("bob", AccessDecision::Deny)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn decision_usernames_are_percent_encoded() {
    sign_in();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/access-requests/alice%20smith/approve");
            then.status(200).json_body(json!({}));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    api.decide_access_request("alice smith", AccessDecision::Approve)
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn access_request_submission_posts_the_payload() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/access-requests").json_body(json!({
                "username": "carol",
                "email": "carol@example.com"
            }));
            then.status(201).json_body(json!({}));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    api.create_access_request(CreateAccessRequest {
        username: "carol".into(),
        email: "carol@example.com".into(),
    })
    .await
    .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn feedback_submission_is_authenticated() {
    sign_in();
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/feedback")
                .header("authorization", "Bearer test-token")
                .json_body(json!({
                    "username": "alice",
                    "rating": 4,
                    "comments": "solid"
                }));
            then.status(201).json_body(json!({}));
        })
        .await;

    let api = ApiClient::new_with_base_url(server.base_url());
    api.submit_feedback(CreateFeedback {
        username: Some("alice".into()),
        email: None,
        rating: 4,
        comments: "solid".into(),
    })
    .await
    .unwrap();
    mock.assert_async().await;
}
