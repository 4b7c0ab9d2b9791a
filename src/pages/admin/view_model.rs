use super::repository::AdminRepository;
use super::utils::AdminTab;
use crate::api::{
    AccessDecision, AccessRequest, ApiClient, ApiError, ApprovedUser, Feedback, UserResponse,
};
use crate::state::auth::use_auth;
use leptos::*;
use std::rc::Rc;

fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.map(|user| user.role.is_admin()).unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionPayload {
    pub username: String,
    pub decision: AccessDecision,
}

/// State for the admin console. The three collections are independent: each
/// has its own reload counter and resource, so refreshing one never touches
/// the others and no cross-collection consistency is implied.
#[derive(Clone)]
pub struct AdminViewModel {
    pub active_tab: RwSignal<AdminTab>,
    pub reload_pending: RwSignal<u32>,
    pub reload_approved: RwSignal<u32>,
    pub reload_feedback: RwSignal<u32>,
    pub pending_resource: Resource<(bool, u32), Vec<AccessRequest>>,
    pub approved_resource: Resource<(bool, u32), Vec<ApprovedUser>>,
    pub feedback_resource: Resource<(bool, u32), Vec<Feedback>>,
    pub decision_action: Action<DecisionPayload, Result<AccessDecision, ApiError>>,
}

pub fn use_admin_view_model() -> AdminViewModel {
    let (auth, _set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = AdminRepository::new_with_client(Rc::new(api));

    // The route guard already gates /admin; this only keeps the resources
    // quiet until the session has actually resolved to an admin.
    let admin_allowed = create_memo(move |_| is_admin_user(auth.get().user.as_ref()));

    let active_tab = create_rw_signal(AdminTab::default());
    let reload_pending = create_rw_signal(0u32);
    let reload_approved = create_rw_signal(0u32);
    let reload_feedback = create_rw_signal(0u32);

    let repo_pending = repo.clone();
    let pending_resource = create_resource(
        move || (admin_allowed.get(), reload_pending.get()),
        move |(allowed, _reload)| {
            let repo = repo_pending.clone();
            async move {
                if !allowed {
                    return Vec::new();
                }
                repo.pending_requests().await.unwrap_or_else(|err| {
                    log::error!("failed to load pending access requests: {}", err);
                    Vec::new()
                })
            }
        },
    );

    let repo_approved = repo.clone();
    let approved_resource = create_resource(
        move || (admin_allowed.get(), reload_approved.get()),
        move |(allowed, _reload)| {
            let repo = repo_approved.clone();
            async move {
                if !allowed {
                    return Vec::new();
                }
                repo.approved_users().await.unwrap_or_else(|err| {
                    log::error!("failed to load approved users: {}", err);
                    Vec::new()
                })
            }
        },
    );

    let repo_feedback = repo.clone();
    let feedback_resource = create_resource(
        move || (admin_allowed.get(), reload_feedback.get()),
        move |(allowed, _reload)| {
            let repo = repo_feedback.clone();
            async move {
                if !allowed {
                    return Vec::new();
                }
                repo.feedback().await.unwrap_or_else(|err| {
                    log::error!("failed to load feedback: {}", err);
                    Vec::new()
                })
            }
        },
    );

    let repo_decision = repo.clone();
    let decision_action = create_action(move |payload: &DecisionPayload| {
        let repo = repo_decision.clone();
        let payload = payload.clone();
        async move {
            repo.decide(&payload.username, payload.decision).await?;
            Ok(payload.decision)
        }
    });

    create_effect(move |_| {
        if let Some(result) = decision_action.value().get() {
            match result {
                Ok(decision) => apply_decision_reloads(decision, reload_pending, reload_approved),
                Err(err) => log::error!("access request decision failed: {}", err),
            }
        }
    });

    AdminViewModel {
        active_tab,
        reload_pending,
        reload_approved,
        reload_feedback,
        pending_resource,
        approved_resource,
        feedback_resource,
        decision_action,
    }
}

/// An approval changes both the pending and approved collections, a denial
/// only the pending one. Each bump triggers exactly one refetch of the
/// matching resource; the two approve refetches run concurrently.
pub(crate) fn apply_decision_reloads(
    decision: AccessDecision,
    reload_pending: RwSignal<u32>,
    reload_approved: RwSignal<u32>,
) {
    reload_pending.update(|value| *value = value.wrapping_add(1));
    if decision == AccessDecision::Approve {
        reload_approved.update(|value| *value = value.wrapping_add(1));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn approve_refreshes_pending_and_approved() {
        with_runtime(|| {
            let reload_pending = create_rw_signal(0u32);
            let reload_approved = create_rw_signal(0u32);
            apply_decision_reloads(AccessDecision::Approve, reload_pending, reload_approved);
            assert_eq!(reload_pending.get_untracked(), 1);
            assert_eq!(reload_approved.get_untracked(), 1);
        });
    }

    #[test]
    fn deny_refreshes_only_pending() {
        with_runtime(|| {
            let reload_pending = create_rw_signal(0u32);
            let reload_approved = create_rw_signal(0u32);
            apply_decision_reloads(AccessDecision::Deny, reload_pending, reload_approved);
            assert_eq!(reload_pending.get_untracked(), 1);
            assert_eq!(reload_approved.get_untracked(), 0);
        });
    }

    #[test]
    fn switching_tabs_leaves_reload_counters_untouched() {
        leptos_reactive::suppress_resource_load(true);
        with_runtime(|| {
            let vm = use_admin_view_model();
            assert_eq!(vm.active_tab.get_untracked(), AdminTab::Pending);

            vm.active_tab.set(AdminTab::Feedback);
            vm.active_tab.set(AdminTab::Approved);
            vm.active_tab.set(AdminTab::Pending);

            assert_eq!(vm.reload_pending.get_untracked(), 0);
            assert_eq!(vm.reload_approved.get_untracked(), 0);
            assert_eq!(vm.reload_feedback.get_untracked(), 0);
        });
        leptos_reactive::suppress_resource_load(false);
    }
}
