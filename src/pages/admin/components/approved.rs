use crate::api::ApprovedUser;
use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use leptos::*;

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-slate-400 uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-slate-300";

#[component]
pub fn ApprovedUsersSection(rows: Signal<Option<Vec<ApprovedUser>>>) -> impl IntoView {
    let loaded = Signal::derive(move || rows.get().unwrap_or_default());

    view! {
        <Show when=move || rows.get().is_some() fallback=move || view! { <LoadingSpinner/> }>
            <Show
                when=move || !loaded.get().is_empty()
                fallback=move || view! {
                    <EmptyState title="No approved users found"/>
                }
            >
                <div class="rounded-md border border-slate-800 bg-slate-900/50 overflow-hidden">
                    <table class="min-w-full divide-y divide-slate-800">
                        <thead>
                            <tr>
                                <th class=TH_CLASS>"Username"</th>
                                <th class=TH_CLASS>"Email"</th>
                                <th class=TH_CLASS>"Role"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-800">
                            <For
                                each=move || loaded.get()
                                key=|user| user.username.clone()
                                children=move |user: ApprovedUser| {
                                    view! {
                                        <tr>
                                            <td class=TD_CLASS>{user.username.clone()}</td>
                                            <td class=TD_CLASS>{user.email.clone()}</td>
                                            <td class=TD_CLASS>{user.role.as_str()}</td>
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
