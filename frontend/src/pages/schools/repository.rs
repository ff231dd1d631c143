use crate::api::{ApiClient, ApiError, School, SchoolRequest};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(School),
    Updated(School),
}

#[derive(Clone)]
pub struct SchoolsRepository {
    client: Rc<ApiClient>,
}

impl SchoolsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_schools(&self) -> Result<Vec<School>, ApiError> {
        self.client.get_schools().await
    }

    pub async fn fetch_school(&self, id: i64) -> Result<School, ApiError> {
        self.client.get_school(id).await
    }

    /// Creates without an id, updates with one.
    pub async fn save(&self, id: Option<i64>, request: SchoolRequest) -> Result<SaveOutcome, ApiError> {
        match id {
            Some(id) => self
                .client
                .update_school(id, &request)
                .await
                .map(SaveOutcome::Updated),
            None => self
                .client
                .create_school(&request)
                .await
                .map(SaveOutcome::Created),
        }
    }
}
