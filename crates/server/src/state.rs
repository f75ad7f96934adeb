use sea_orm::DatabaseConnection;
use service::student::{repo::seaorm::SeaOrmStudentRepository, StudentService};
use std::sync::Arc;

/// Shared handler state; cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub students: StudentService,
}

impl ServerState {
    pub fn new(students: StudentService) -> Self { Self { students } }

    /// State backed by the SeaORM repository over `db`.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmStudentRepository::new(db));
        Self::new(StudentService::new(repo))
    }
}
