use crate::api::{AccessDecision, AccessRequest, ApiError};
use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use crate::pages::admin::view_model::DecisionPayload;
use crate::utils::time::format_timestamp;
use leptos::*;

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-slate-400 uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-slate-300";

#[component]
pub fn PendingRequestsSection(
    rows: Signal<Option<Vec<AccessRequest>>>,
    action: Action<DecisionPayload, Result<AccessDecision, ApiError>>,
) -> impl IntoView {
    let action_pending = action.pending();
    let loaded = Signal::derive(move || rows.get().unwrap_or_default());

    view! {
        <Show when=move || rows.get().is_some() fallback=move || view! { <LoadingSpinner/> }>
            <Show
                when=move || !loaded.get().is_empty()
                fallback=move || view! {
                    <EmptyState
                        title="No pending requests"
                        description="New access requests will show up here."
                    />
                }
            >
                <div class="rounded-md border border-slate-800 bg-slate-900/50 overflow-hidden">
                    <table class="min-w-full divide-y divide-slate-800">
                        <thead>
                            <tr>
                                <th class=TH_CLASS>"Username"</th>
                                <th class=TH_CLASS>"Email"</th>
                                <th class=TH_CLASS>"Requested At"</th>
                                <th class=TH_CLASS>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-800">
                            <For
                                each=move || loaded.get()
                                key=|request| request.username.clone()
                                children=move |request: AccessRequest| {
                                    let approve_username = request.username.clone();
                                    let deny_username = request.username.clone();
                                    view! {
                                        <tr>
                                            <td class=TD_CLASS>{request.username.clone()}</td>
                                            <td class=TD_CLASS>{request.email.clone()}</td>
                                            <td class=TD_CLASS>{format_timestamp(&request.created_at)}</td>
                                            <td class="px-6 py-4 whitespace-nowrap space-x-2">
                                                <button
                                                    class="rounded-md bg-green-600 hover:bg-green-700 px-3 py-1 text-sm font-medium text-white disabled:opacity-50"
                                                    disabled=move || action_pending.get()
                                                    on:click=move |_| action.dispatch(DecisionPayload {
                                                        username: approve_username.clone(),
                                                        decision: AccessDecision::Approve,
                                                    })
                                                >
                                                    "Approve"
                                                </button>
                                                <button
                                                    class="rounded-md bg-red-600 hover:bg-red-700 px-3 py-1 text-sm font-medium text-white disabled:opacity-50"
                                                    disabled=move || action_pending.get()
                                                    on:click=move |_| action.dispatch(DecisionPayload {
                                                        username: deny_username.clone(),
                                                        decision: AccessDecision::Deny,
                                                    })
                                                >
                                                    "Deny"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::pending_request;
    use crate::test_support::ssr::render_to_string;

    fn dummy_action() -> Action<DecisionPayload, Result<AccessDecision, ApiError>> {
        create_action(|payload: &DecisionPayload| {
            let decision = payload.decision;
            async move { Ok::<_, ApiError>(decision) }
        })
    }

    #[test]
    fn empty_collection_renders_empty_state_not_an_error() {
        let html = render_to_string(|| {
            let rows = Signal::derive(|| Some(Vec::new()));
            view! { <PendingRequestsSection rows=rows action=dummy_action()/> }
        });
        assert!(html.contains("No pending requests"));
    }

    #[test]
    fn unresolved_fetch_renders_the_spinner() {
        let html = render_to_string(|| {
            let rows = Signal::derive(|| None::<Vec<AccessRequest>>);
            view! { <PendingRequestsSection rows=rows action=dummy_action()/> }
        });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn loaded_rows_render_with_both_decision_buttons() {
        let html = render_to_string(|| {
            let rows = Signal::derive(|| Some(vec![pending_request("alice")]));
            view! { <PendingRequestsSection rows=rows action=dummy_action()/> }
        });
        assert!(html.contains("alice"));
        assert!(html.contains("alice@example.com"));
        assert!(html.contains("Approve"));
        assert!(html.contains("Deny"));
    }
}
