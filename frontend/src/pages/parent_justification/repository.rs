use crate::api::{
    ApiClient, ApiError, CreateJustificationRequest, Justification, ParentEmailValidation,
};
use std::rc::Rc;

/// Both calls are public; no session is attached.
#[derive(Clone)]
pub struct ParentJustificationRepository {
    client: Rc<ApiClient>,
}

impl ParentJustificationRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn validate_email(&self, email: &str) -> Result<ParentEmailValidation, ApiError> {
        self.client.validate_parent_email(email).await
    }

    pub async fn submit(
        &self,
        request: CreateJustificationRequest,
    ) -> Result<Justification, ApiError> {
        self.client.create_justification(&request).await
    }
}
