use crate::api::Feedback;
use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use crate::components::rating::RatingStars;
use crate::utils::time::format_optional_timestamp;
use leptos::*;

const TH_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-slate-400 uppercase tracking-wider";
const TD_CLASS: &str = "px-6 py-4 whitespace-nowrap text-sm text-slate-300";

fn display_username(entry: &Feedback) -> String {
    entry.username.clone().unwrap_or_else(|| "Anonymous".into())
}

fn display_email(entry: &Feedback) -> String {
    entry.email.clone().unwrap_or_else(|| "N/A".into())
}

#[component]
pub fn FeedbackSection(rows: Signal<Option<Vec<Feedback>>>) -> impl IntoView {
    let loaded = Signal::derive(move || rows.get().unwrap_or_default());

    view! {
        <Show when=move || rows.get().is_some() fallback=move || view! { <LoadingSpinner/> }>
            <Show
                when=move || !loaded.get().is_empty()
                fallback=move || view! {
                    <EmptyState title="No feedback available"/>
                }
            >
                <div class="rounded-md border border-slate-800 bg-slate-900/50 overflow-hidden">
                    <table class="min-w-full divide-y divide-slate-800">
                        <thead>
                            <tr>
                                <th class=TH_CLASS>"Username"</th>
                                <th class=TH_CLASS>"Email"</th>
                                <th class=TH_CLASS>"Rating"</th>
                                <th class=TH_CLASS>"Comments"</th>
                                <th class=TH_CLASS>"Date"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-slate-800">
                            <For
                                each={move || loaded.get().into_iter().enumerate().collect::<Vec<_>>()}
                                key=|(index, _)| *index
                                children=move |(_, entry): (usize, Feedback)| {
                                    view! {
                                        <tr>
                                            <td class=TD_CLASS>{display_username(&entry)}</td>
                                            <td class=TD_CLASS>{display_email(&entry)}</td>
                                            <td class=TD_CLASS>
                                                <RatingStars rating=entry.rating/>
                                            </td>
                                            <td class="px-6 py-4 text-sm text-slate-300 max-w-xs overflow-hidden text-ellipsis">
                                                {entry.comments.clone()}
                                            </td>
                                            <td class=TD_CLASS>
                                                {format_optional_timestamp(entry.created_at.as_ref())}
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
