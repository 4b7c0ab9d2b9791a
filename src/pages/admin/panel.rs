use super::components::approved::ApprovedUsersSection;
use super::components::feedback::FeedbackSection;
use super::components::pending::PendingRequestsSection;
use super::utils::AdminTab;
use super::view_model::use_admin_view_model;
use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    let vm = use_admin_view_model();
    let active_tab = vm.active_tab;
    let pending_resource = vm.pending_resource;
    let approved_resource = vm.approved_resource;
    let feedback_resource = vm.feedback_resource;
    let decision_action = vm.decision_action;

    let pending_rows = Signal::derive(move || pending_resource.get());
    let approved_rows = Signal::derive(move || approved_resource.get());
    let feedback_rows = Signal::derive(move || feedback_resource.get());

    view! {
        <Layout>
            <div class="flex justify-between items-center mb-8">
                <h2 class="text-3xl font-bold text-white">"Admin Dashboard"</h2>
            </div>
            <div class="mb-6">
                <div class="flex space-x-2 border-b border-slate-800">
                    {AdminTab::all().into_iter().map(|tab| {
                        view! {
                            <button
                                class=move || if active_tab.get() == tab {
                                    "px-4 py-2 font-medium text-cyan-400 border-b-2 border-cyan-400"
                                } else {
                                    "px-4 py-2 font-medium text-slate-400 hover:text-slate-300"
                                }
                                on:click=move |_| active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
            <Show when=move || active_tab.get() == AdminTab::Pending>
                <PendingRequestsSection rows=pending_rows action=decision_action/>
            </Show>
            <Show when=move || active_tab.get() == AdminTab::Approved>
                <ApprovedUsersSection rows=approved_rows/>
            </Show>
            <Show when=move || active_tab.get() == AdminTab::Feedback>
                <FeedbackSection rows=feedback_rows/>
            </Show>
        </Layout>
    }
}
