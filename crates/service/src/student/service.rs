use std::sync::Arc;
use std::time::Instant;

use common::metrics::observe_student_op;
use tracing::{debug, info, instrument, warn};

use super::domain::{NewStudentInput, Student, StudentPatch};
use super::repository::StudentRepository;
use crate::errors::ServiceError;

/// Student business service independent of web framework.
///
/// Every operation is counted in `student_operations_total` with its outcome.
#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

fn observe<T>(op: &str, started: Instant, res: &Result<T, ServiceError>) {
    let outcome = match res {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    };
    observe_student_op(op, outcome, started.elapsed().as_secs_f64());
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self { Self { repo } }

    /// All records in insertion order.
    pub async fn list(&self) -> Result<Vec<Student>, ServiceError> {
        let started = Instant::now();
        let res = self.repo.find_all().await;
        observe("list", started, &res);
        res
    }

    pub async fn get(&self, id: i32) -> Result<Student, ServiceError> {
        let started = Instant::now();
        let res = match self.repo.find_by_id(id).await {
            Ok(Some(s)) => Ok(s),
            Ok(None) => Err(ServiceError::not_found("student")),
            Err(e) => Err(e),
        };
        observe("get", started, &res);
        res
    }

    /// Validate and persist a new record.
    ///
    /// # Examples
    /// ```
    /// use service::student::{repository::mock::MockStudentRepository, NewStudentInput, StudentService};
    /// use std::sync::Arc;
    /// let svc = StudentService::new(Arc::new(MockStudentRepository::default()));
    /// let input = NewStudentInput { name: Some("Ada".into()), email: Some("ada@example.com".into()), course: Some("CS".into()) };
    /// let created = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(email = ?input.email))]
    pub async fn create(&self, input: NewStudentInput) -> Result<Student, ServiceError> {
        let started = Instant::now();
        debug!(name = ?input.name, course = ?input.course, "student_create_received");
        let res = match input.validate() {
            Ok(new) => self.repo.insert(&new).await,
            Err(e) => Err(e),
        };
        match &res {
            Ok(s) => info!(id = s.id, "student_created"),
            Err(e) => warn!(kind = e.kind(), error = %e, "student_create_rejected"),
        }
        observe("create", started, &res);
        res
    }

    /// Merge the supplied fields into record `id`.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: StudentPatch) -> Result<Student, ServiceError> {
        let started = Instant::now();
        debug!(?patch, "student_update_received");
        let res = match patch.validate() {
            Ok(()) => match self.repo.update_fields(id, &patch).await {
                Ok(Some(s)) => Ok(s),
                Ok(None) => Err(ServiceError::not_found("student")),
                Err(e) => Err(e),
            },
            Err(e) => Err(e),
        };
        match &res {
            Ok(_) => info!("student_updated"),
            Err(e) => warn!(kind = e.kind(), error = %e, "student_update_rejected"),
        }
        observe("update", started, &res);
        res
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let started = Instant::now();
        let res = match self.repo.delete(id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(ServiceError::not_found("student")),
            Err(e) => Err(e),
        };
        if res.is_ok() { info!("student_deleted"); }
        observe("delete", started, &res);
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::repo::seaorm::SeaOrmStudentRepository;
    use crate::student::repository::mock::MockStudentRepository;
    use crate::test_support::get_db;

    fn input(name: &str, email: &str, course: &str) -> NewStudentInput {
        NewStudentInput { name: Some(name.into()), email: Some(email.into()), course: Some(course.into()) }
    }

    fn mock_service() -> (Arc<MockStudentRepository>, StudentService) {
        let repo = Arc::new(MockStudentRepository::default());
        (repo.clone(), StudentService::new(repo))
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_lists() -> Result<(), anyhow::Error> {
        let (_, svc) = mock_service();
        let a = svc.create(input("Ada", "ada@example.com", "CS")).await?;
        let b = svc.create(input("Bob", "bob@example.com", "Math")).await?;
        assert_ne!(a.id, b.id);
        let all = svc.list().await?;
        assert_eq!(all, vec![a, b]);
        Ok(())
    }

    #[tokio::test]
    async fn create_with_missing_field_stores_nothing() {
        let (repo, svc) = mock_service();
        let err = svc
            .create(NewStudentInput { name: Some("Ada".into()), email: None, course: Some("CS".into()) })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingFields(_)));
        let err = svc.create(input("", "ada@example.com", "CS")).await.unwrap_err();
        assert!(matches!(err, ServiceError::MissingFields(_)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts_without_new_row() -> Result<(), anyhow::Error> {
        let (repo, svc) = mock_service();
        svc.create(input("Ada", "ada@example.com", "CS")).await?;
        let err = svc.create(input("Bob", "ada@example.com", "Math")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(repo.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let (repo, svc) = mock_service();
        let patch = StudentPatch { course: Some("Math".into()), ..Default::default() };
        let err = svc.update(99, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn update_only_course_keeps_other_fields() -> Result<(), anyhow::Error> {
        let (_, svc) = mock_service();
        let ada = svc.create(input("Ada", "ada@example.com", "CS")).await?;
        let patch = StudentPatch { course: Some("Math".into()), ..Default::default() };
        let updated = svc.update(ada.id, patch).await?;
        assert_eq!(updated, Student { course: "Math".into(), ..ada });
        Ok(())
    }

    #[tokio::test]
    async fn update_email_clash_keeps_previous_state() -> Result<(), anyhow::Error> {
        let (_, svc) = mock_service();
        svc.create(input("Ada", "ada@example.com", "CS")).await?;
        let bob = svc.create(input("Bob", "bob@example.com", "Math")).await?;
        let patch = StudentPatch { name: Some("Robert".into()), email: Some("ada@example.com".into()), course: None };
        let err = svc.update(bob.id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(svc.get(bob.id).await?, bob);
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() -> Result<(), anyhow::Error> {
        let (_, svc) = mock_service();
        let ada = svc.create(input("Ada", "ada@example.com", "CS")).await?;
        svc.delete(ada.id).await?;
        assert!(svc.list().await?.iter().all(|s| s.id != ada.id));
        let err = svc.delete(ada.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn ada_bob_scenario_on_sqlite() -> Result<(), anyhow::Error> {
        let repo = Arc::new(SeaOrmStudentRepository::new(get_db().await?));
        let svc = StudentService::new(repo);

        let ada = svc.create(input("Ada", "ada@example.com", "CS")).await?;
        assert_eq!(ada.id, 1);

        let err = svc.create(input("Bob", "ada@example.com", "Math")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(svc.list().await?.len(), 1);

        let patch = StudentPatch { course: Some("Math".into()), ..Default::default() };
        let updated = svc.update(1, patch).await?;
        assert_eq!(updated.course, "Math");
        assert_eq!(updated.name, "Ada");
        assert_eq!(updated.email, "ada@example.com");

        svc.delete(1).await?;
        assert!(svc.list().await?.is_empty());
        Ok(())
    }
}
