use crate::api::{ApiClient, ApiError, CreateFeedback};
use std::rc::Rc;

#[derive(Clone)]
pub struct FeedbackRepository {
    client: Rc<ApiClient>,
}

impl FeedbackRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn submit(&self, request: CreateFeedback) -> Result<(), ApiError> {
        self.client.submit_feedback(request).await
    }
}
