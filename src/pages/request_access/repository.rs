use crate::api::{ApiClient, ApiError, CreateAccessRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AccessRequestRepository {
    client: Rc<ApiClient>,
}

impl AccessRequestRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, request: CreateAccessRequest) -> Result<(), ApiError> {
        self.client.create_access_request(request).await
    }
}
