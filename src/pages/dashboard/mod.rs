pub mod panel;

pub use panel::DashboardPage;
