use crate::components::layout::Layout;
use crate::state::auth::use_auth;
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let username = create_memo(move |_| {
        auth.get()
            .user
            .map(|user| user.username)
            .unwrap_or_default()
    });
    let is_admin = create_memo(move |_| {
        auth.get()
            .user
            .map(|user| user.role.is_admin())
            .unwrap_or(false)
    });

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h2 class="text-3xl font-bold text-white">
                        {move || format!("Welcome back, {}", username.get())}
                    </h2>
                    <p class="mt-2 text-slate-400">
                        "Aegis keeps the fraud screening platform behind an approval gate."
                    </p>
                </div>
                <div class="grid gap-4 sm:grid-cols-2">
                    <a href="/feedback" class="block rounded-lg border border-slate-800 bg-slate-900/50 p-6 hover:border-slate-700">
                        <h3 class="text-lg font-semibold text-white">"Share feedback"</h3>
                        <p class="mt-1 text-sm text-slate-400">"Tell the team how the platform is working for you."</p>
                    </a>
                    <Show when=move || is_admin.get()>
                        <a href="/admin" class="block rounded-lg border border-slate-800 bg-slate-900/50 p-6 hover:border-slate-700">
                            <h3 class="text-lg font-semibold text-white">"Admin console"</h3>
                            <p class="mt-1 text-sm text-slate-400">"Review access requests, approved users and feedback."</p>
                        </a>
                    </Show>
                </div>
            </div>
        </Layout>
    }
}
