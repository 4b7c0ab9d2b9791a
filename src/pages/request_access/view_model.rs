use super::repository::AccessRequestRepository;
use super::utils::{validate_access_request, RequestAccessFormState};
use crate::api::{ApiClient, ApiError, CreateAccessRequest};
use crate::utils::messages::MessageState;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct RequestAccessViewModel {
    pub form: RequestAccessFormState,
    pub messages: RwSignal<MessageState>,
    pub submit_action: Action<CreateAccessRequest, Result<(), ApiError>>,
}

pub fn use_request_access_view_model() -> RequestAccessViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = AccessRequestRepository::new_with_client(Rc::new(api));

    let form = RequestAccessFormState::default();
    let messages = create_rw_signal(MessageState::default());

    let submit_action = create_action(move |payload: &CreateAccessRequest| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.submit(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => {
                    messages.update(|state| {
                        state.set_success(
                            "Access request submitted. You will be notified once it is reviewed.",
                        );
                    });
                    form.reset();
                }
                Err(err) => messages.update(|state| state.set_error(err.error)),
            }
        }
    });

    RequestAccessViewModel {
        form,
        messages,
        submit_action,
    }
}

impl RequestAccessViewModel {
    pub fn submit(&self) {
        let username = self.form.username.get_untracked();
        let email = self.form.email.get_untracked();
        if let Err(message) = validate_access_request(&username, &email) {
            self.messages.update(|state| state.set_error(message));
            return;
        }
        self.messages.update(|state| state.clear());
        self.submit_action
            .dispatch(CreateAccessRequest { username, email });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn invalid_email_is_rejected_before_dispatch() {
        with_runtime(|| {
            let vm = use_request_access_view_model();
            vm.form.username.set_untracked("carol".into());
            vm.form.email.set_untracked("nope".into());
            vm.submit();
            let state = vm.messages.get_untracked();
            assert!(state.error.is_some());
            assert!(!vm.submit_action.pending().get_untracked());
        });
    }
}
