use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field was absent or blank.
    #[error("missing field(s): {0}")]
    MissingFields(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn email_taken() -> Self { Self::Conflict("Email already exists".into()) }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::MissingFields(_) | ServiceError::Validation(_) => "validation",
            ServiceError::Conflict(_) => "conflict",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Db(_) => "storage",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            // email is the only unique column besides the primary key
            ModelError::Conflict(_) => ServiceError::email_taken(),
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_translate() {
        let e: ServiceError = ModelError::Conflict("UNIQUE constraint failed: student.email".into()).into();
        assert!(matches!(e, ServiceError::Conflict(ref m) if m == "Email already exists"));
        let e: ServiceError = ModelError::Validation("name required".into()).into();
        assert_eq!(e.kind(), "validation");
        let e: ServiceError = ModelError::Db("disk I/O error".into()).into();
        assert_eq!(e.to_string(), "database error: disk I/O error");
    }

    #[test]
    fn missing_fields_count_as_validation() {
        let e = ServiceError::MissingFields("email, course".into());
        assert_eq!(e.kind(), "validation");
        assert_eq!(e.to_string(), "missing field(s): email, course");
    }

    #[test]
    fn not_found_message() {
        assert_eq!(ServiceError::not_found("student").to_string(), "not found: student not found");
    }
}
