use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::student::domain::{NewStudent, Student, StudentPatch};
use crate::student::repository::StudentRepository;

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
        let rows = models::student::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, ServiceError> {
        Ok(models::student::find_by_id(&self.db, id).await?.map(Student::from))
    }

    async fn insert(&self, new: &NewStudent) -> Result<Student, ServiceError> {
        let created = models::student::create(&self.db, &new.name, &new.email, &new.course).await?;
        Ok(created.into())
    }

    async fn update_fields(&self, id: i32, patch: &StudentPatch) -> Result<Option<Student>, ServiceError> {
        let updated = models::student::update_fields(
            &self.db,
            id,
            patch.name.as_deref(),
            patch.email.as_deref(),
            patch.course.as_deref(),
        )
        .await?;
        Ok(updated.map(Student::from))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(models::student::delete(&self.db, id).await?)
    }
}
