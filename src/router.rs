use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        admin::AdminPage, dashboard::DashboardPage, feedback::FeedbackPage, home::HomePage,
        login::LoginPage, request_access::RequestAccessPage,
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/request-access",
    "/dashboard",
    "/feedback",
    "/admin",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login", "/request-access"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard", "/feedback", "/admin"];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/request-access" view=RequestAccessPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/feedback" view=ProtectedFeedback/>
                    <Route path="/admin" view=ProtectedAdmin/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedFeedback() -> impl IntoView {
    view! { <RequireAuth><FeedbackPage/></RequireAuth> }
}

#[component]
fn ProtectedAdmin() -> impl IntoView {
    view! { <RequireAdmin><AdminPage/></RequireAdmin> }
}
