use super::view_model::use_request_access_view_model;
use crate::components::messages::MessageBanner;
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn RequestAccessPage() -> impl IntoView {
    let vm = use_request_access_view_model();
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
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950 p-4">
            <div class="w-full max-w-md rounded-lg border border-slate-800 bg-slate-900/50 p-8">
                <h1 class="text-3xl font-bold text-white text-center">"Request access"</h1>
                <p class="mt-2 text-sm text-slate-400 text-center">
                    "An administrator reviews every request before an account is created."
                </p>
                <MessageBanner messages={messages.into()} />
                <form class="mt-6 space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-slate-300" for="username">"Username"</label>
                        <input
                            id="username"
                            type="text"
                            class="mt-1 w-full rounded-md border border-slate-700 bg-slate-950 px-3 py-2 text-slate-200"
                            prop:value=move || form.username.get()
                            on:input=move |ev| form.username.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-slate-300" for="email">"Email"</label>
                        <input
                            id="email"
                            type="email"
                            class="mt-1 w-full rounded-md border border-slate-700 bg-slate-950 px-3 py-2 text-slate-200"
                            prop:value=move || form.email.get()
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        class="w-full rounded-md bg-cyan-600 hover:bg-cyan-500 px-4 py-2 text-sm font-medium text-white disabled:opacity-50"
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                    </button>
                </form>
                <p class="mt-6 text-sm text-slate-400 text-center">
                    "Already approved? "
                    <a href="/login" class="text-cyan-400 hover:text-cyan-300">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
