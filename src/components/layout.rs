use crate::state::auth::{self, use_auth};
use crate::utils::nav;
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let can_access_admin = move || {
        auth.get()
            .user
            .map(|user| user.role.is_admin())
            .unwrap_or(false)
    };
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            nav::redirect_to("/login");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };
    view! {
        <header class="bg-slate-900/80 border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-8">
                        <h1 class="text-xl font-semibold text-white">"Aegis"</h1>
                        <nav class="flex space-x-4">
                            <a href="/dashboard" class="text-slate-400 hover:text-white px-3 py-2 rounded-md text-sm font-medium">
                                "Dashboard"
                            </a>
                            <a href="/feedback" class="text-slate-400 hover:text-white px-3 py-2 rounded-md text-sm font-medium">
                                "Feedback"
                            </a>
                            <Show when=can_access_admin>
                                <a href="/admin" class="text-slate-400 hover:text-white px-3 py-2 rounded-md text-sm font-medium">
                                    "Admin"
                                </a>
                            </Show>
                        </nav>
                    </div>
                    <button
                        on:click=on_logout
                        class="text-slate-400 hover:text-white px-3 py-2 rounded-md text-sm font-medium border border-slate-700 disabled:opacity-50"
                        disabled=move || logout_pending.get()
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-cyan-500"></div>
        </div>
    }
}
