use super::view_model::use_feedback_view_model;
use crate::components::layout::Layout;
use crate::components::messages::MessageBanner;
use crate::components::rating::RatingInput;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let vm = use_feedback_view_model();
    let form = vm.form;
    let messages = vm.messages;
    let pending = vm.submit_action.pending();
    let on_submit = {
        let vm = vm.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        }
    };

    view! {
        <Layout>
            <div class="max-w-xl mx-auto rounded-lg border border-slate-800 bg-slate-900/50 p-8">
                <h2 class="text-2xl font-bold text-white">"Share feedback"</h2>
                <p class="mt-2 text-sm text-slate-400">
                    "How is Aegis working for you? Your rating goes straight to the team."
                </p>
                <MessageBanner messages={messages.into()} />
                <form class="mt-6 space-y-4" on:submit=on_submit>
                    <div>
                        <span class="block text-sm font-medium text-slate-300 mb-1">"Rating"</span>
                        <RatingInput value=form.rating />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-300" for="comments">"Comments"</label>
                        <textarea
                            id="comments"
                            rows=4
                            class="mt-1 w-full rounded-md border border-slate-700 bg-slate-950 px-3 py-2 text-slate-200"
                            prop:value=move || form.comments.get()
                            on:input=move |ev| form.comments.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button
                        type="submit"
                        class="rounded-md bg-cyan-600 hover:bg-cyan-500 px-4 py-2 text-sm font-medium text-white disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Sending..." } else { "Send feedback" }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
