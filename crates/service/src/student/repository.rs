use async_trait::async_trait;

use super::domain::{NewStudent, Student, StudentPatch};
use crate::errors::ServiceError;

/// Repository abstraction for student persistence.
///
/// Implementations must enforce email uniqueness atomically with the write
/// and report a clash as `ServiceError::Conflict`.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Student>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, ServiceError>;
    async fn insert(&self, new: &NewStudent) -> Result<Student, ServiceError>;
    /// `Ok(None)` when no row has `id`.
    async fn update_fields(&self, id: i32, patch: &StudentPatch) -> Result<Option<Student>, ServiceError>;
    /// `Ok(false)` when no row has `id`.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    struct Inner {
        rows: BTreeMap<i32, Student>, // key: id
        last_id: i32,
    }

    #[derive(Default)]
    pub struct MockStudentRepository {
        inner: Mutex<Inner>,
    }

    impl MockStudentRepository {
        fn lock(&self) -> MutexGuard<'_, Inner> {
            self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
        }

        pub fn len(&self) -> usize { self.lock().rows.len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    fn email_taken(inner: &Inner, email: &str, except: Option<i32>) -> bool {
        inner.rows.values().any(|s| s.email == email && Some(s.id) != except)
    }

    #[async_trait]
    impl StudentRepository for MockStudentRepository {
        async fn find_all(&self) -> Result<Vec<Student>, ServiceError> {
            Ok(self.lock().rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Student>, ServiceError> {
            Ok(self.lock().rows.get(&id).cloned())
        }

        async fn insert(&self, new: &NewStudent) -> Result<Student, ServiceError> {
            let mut inner = self.lock();
            if email_taken(&inner, &new.email, None) {
                return Err(ServiceError::email_taken());
            }
            inner.last_id += 1;
            let student = Student { id: inner.last_id, name: new.name.clone(), email: new.email.clone(), course: new.course.clone() };
            inner.rows.insert(student.id, student.clone());
            Ok(student)
        }

        async fn update_fields(&self, id: i32, patch: &StudentPatch) -> Result<Option<Student>, ServiceError> {
            let mut inner = self.lock();
            let Some(current) = inner.rows.get(&id) else { return Ok(None) };
            let merged = patch.apply_to(current);
            if email_taken(&inner, &merged.email, Some(id)) {
                return Err(ServiceError::email_taken());
            }
            inner.rows.insert(id, merged.clone());
            Ok(Some(merged))
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.lock().rows.remove(&id).is_some())
        }
    }
}
