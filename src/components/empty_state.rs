use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-slate-800 bg-slate-900/50">
            <h3 class="text-sm font-semibold text-slate-300">{title}</h3>
            <Show when={
                let description = description.clone();
                move || !description.is_empty()
            }>
                <p class="mt-1 text-sm text-slate-500">{description.clone()}</p>
            </Show>
        </div>
    }
}
