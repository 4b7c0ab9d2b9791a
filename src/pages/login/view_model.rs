use super::utils::{validate_credentials, LoginFormState};
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::nav;
use leptos::*;

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    nav::redirect_to("/dashboard");
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

impl LoginViewModel {
    /// Client-side validation first; the backend is only asked about
    /// credentials that are at least present.
    pub fn submit(&self) {
        let username = self.form.username.get_untracked();
        let password = self.form.password.get_untracked();
        if let Err(message) = validate_credentials(&username, &password) {
            self.error.set(Some(ApiError::validation(message)));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest { username, password });
    }
}
