use super::repository::FeedbackRepository;
use super::utils::{validate_feedback, FeedbackFormState};
use crate::api::{ApiClient, ApiError, CreateFeedback};
use crate::state::auth::use_auth;
use crate::utils::messages::MessageState;
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct FeedbackViewModel {
    pub form: FeedbackFormState,
    pub messages: RwSignal<MessageState>,
    pub submit_action: Action<CreateFeedback, Result<(), ApiError>>,
    identity: Memo<(Option<String>, Option<String>)>,
}

pub fn use_feedback_view_model() -> FeedbackViewModel {
    let (auth, _set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = FeedbackRepository::new_with_client(Rc::new(api));

    // Submissions are attributed to the signed-in identity when present.
    let identity = create_memo(move |_| {
        let state = auth.get();
        match state.user {
            Some(user) => (Some(user.username), user.email),
            None => (None, None),
        }
    });

    let form = FeedbackFormState::default();
    let messages = create_rw_signal(MessageState::default());

    let submit_action = create_action(move |payload: &CreateFeedback| {
        let repo = repo.clone();
        let payload = payload.clone();
        async move { repo.submit(payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => {
                    messages.update(|state| state.set_success("Thanks for the feedback!"));
                    form.reset();
                }
                Err(err) => messages.update(|state| state.set_error(err.error)),
            }
        }
    });

    FeedbackViewModel {
        form,
        messages,
        submit_action,
        identity,
    }
}

impl FeedbackViewModel {
    pub fn submit(&self) {
        let rating = self.form.rating.get_untracked();
        if let Err(message) = validate_feedback(rating) {
            self.messages.update(|state| state.set_error(message));
            return;
        }
        let (username, email) = self.identity.get_untracked();
        self.messages.update(|state| state.clear());
        self.submit_action.dispatch(CreateFeedback {
            username,
            email,
            rating,
            comments: self.form.comments.get_untracked(),
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn missing_rating_is_rejected_before_dispatch() {
        with_runtime(|| {
            let vm = use_feedback_view_model();
            vm.form.comments.set_untracked("great".into());
            vm.submit();
            assert!(vm.messages.get_untracked().error.is_some());
            assert!(!vm.submit_action.pending().get_untracked());
        });
    }
}
