pub mod ssr;

pub mod helpers {
    use crate::api::{AccessRequest, AccessRequestStatus, Feedback, Role, UserResponse};
    use crate::state::auth::AuthState;
    use chrono::{TimeZone, Utc};
    use leptos::*;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            username: "admin".into(),
            role: Role::Admin,
            email: Some("admin@example.com".into()),
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            username: "member".into(),
            role: Role::User,
            email: None,
        }
    }

    pub fn provide_auth_state(user: Option<UserResponse>, loading: bool) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading,
        });
        provide_context((auth, set_auth));
    }

    pub fn pending_request(username: &str) -> AccessRequest {
        AccessRequest {
            username: username.into(),
            email: format!("{}@example.com", username),
            created_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap(),
            status: AccessRequestStatus::Pending,
        }
    }

    pub fn feedback_entry(rating: u8) -> Feedback {
        Feedback {
            username: Some("alice".into()),
            email: Some("alice@example.com".into()),
            rating,
            comments: "solid".into(),
            created_at: Some(Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()),
        }
    }
}
