use crate::api::{ApiClient, ApiError, CreateStudentRequest, School, Student};
use std::rc::Rc;

#[derive(Clone)]
pub struct StudentsRepository {
    client: Rc<ApiClient>,
}

impl StudentsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_students(&self) -> Result<Vec<Student>, ApiError> {
        self.client.list_students().await
    }

    pub async fn create_student(&self, request: CreateStudentRequest) -> Result<Student, ApiError> {
        self.client.create_student(&request).await
    }

    pub async fn delete_student(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete_student(id).await
    }

    /// School choices for administrators; an empty list hides nothing else.
    pub async fn fetch_schools(&self) -> Vec<School> {
        self.client.get_schools().await.unwrap_or_else(|err| {
            log::warn!("Could not load schools: {}", err);
            Vec::new()
        })
    }
}
