/// Which collection the admin console is showing. Purely presentational:
/// switching tabs never refetches and never discards loaded data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Pending,
    Approved,
    Feedback,
}

impl AdminTab {
    pub fn all() -> [AdminTab; 3] {
        [AdminTab::Pending, AdminTab::Approved, AdminTab::Feedback]
    }

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Pending => "Pending Requests",
            AdminTab::Approved => "Approved Users",
            AdminTab::Feedback => "User Feedback",
        }
    }
}
