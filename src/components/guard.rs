use crate::components::layout::LoadingSpinner;
use crate::state::auth::{use_auth, AuthState};
use crate::utils::nav;
use leptos::*;

/// Outcome of evaluating a protected route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Loading,
    RedirectToLogin,
    RedirectToDashboard,
    Render,
}

/// First match wins: an unresolved session always shows the placeholder, a
/// missing identity goes to the login form, and an authenticated non-admin
/// asking for an admin route lands on the regular dashboard.
pub fn route_decision(state: &AuthState, require_admin: bool) -> GuardDecision {
    if state.loading {
        return GuardDecision::Loading;
    }
    match &state.user {
        None => GuardDecision::RedirectToLogin,
        Some(user) if require_admin && !user.role.is_admin() => GuardDecision::RedirectToDashboard,
        Some(_) => GuardDecision::Render,
    }
}

fn guarded(require_admin: bool, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let decision = create_memo(move |_| route_decision(&auth.get(), require_admin));
    create_effect(move |_| match decision.get() {
        GuardDecision::RedirectToLogin => nav::redirect_to("/login"),
        GuardDecision::RedirectToDashboard => nav::redirect_to("/dashboard"),
        GuardDecision::Loading | GuardDecision::Render => {}
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(false, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(true, children)
}
