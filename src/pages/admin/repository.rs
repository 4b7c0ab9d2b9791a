use crate::api::{
    AccessDecision, AccessRequest, AccessRequestStatus, ApiClient, ApiError, ApprovedUser, Feedback,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn pending_requests(&self) -> Result<Vec<AccessRequest>, ApiError> {
        self.client
            .list_access_requests(AccessRequestStatus::Pending)
            .await
    }

    pub async fn approved_users(&self) -> Result<Vec<ApprovedUser>, ApiError> {
        self.client.list_approved_users().await
    }

    pub async fn feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        self.client.list_feedback().await
    }

    pub async fn decide(
        &self,
        username: &str,
        decision: AccessDecision,
    ) -> Result<(), ApiError> {
        self.client.decide_access_request(username, decision).await
    }
}
