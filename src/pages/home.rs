use leptos::*;
use leptos_router::Redirect;

/// The root path has no content of its own.
#[component]
pub fn HomePage() -> impl IntoView {
    view! { <Redirect path="/dashboard"/> }
}
