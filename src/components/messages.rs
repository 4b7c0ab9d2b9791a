use crate::utils::messages::MessageState;
use leptos::*;

/// Success/error banner pair driven by a [`MessageState`].
#[component]
pub fn MessageBanner(messages: Signal<MessageState>) -> impl IntoView {
    view! {
        <Show when=move || messages.get().success.is_some() fallback=|| ()>
            <div class="bg-emerald-950/50 border border-emerald-800 text-emerald-300 px-4 py-3 rounded my-2">
                {move || messages.get().success.unwrap_or_default()}
            </div>
        </Show>
        <Show when=move || messages.get().error.is_some() fallback=|| ()>
            <div class="bg-red-950/50 border border-red-800 text-red-300 px-4 py-3 rounded my-2">
                {move || messages.get().error.unwrap_or_default()}
            </div>
        </Show>
    }
}
