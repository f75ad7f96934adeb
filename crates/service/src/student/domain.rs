use serde::{Deserialize, Serialize};

use models::student as model;

use crate::errors::ServiceError;

/// Domain student (wire view): `{id, name, email, course}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub course: String,
}

impl From<model::Model> for Student {
    fn from(m: model::Model) -> Self {
        Self { id: m.id, name: m.name, email: m.email, course: m.course }
    }
}

/// Create payload as received; every field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStudentInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
}

/// Create payload that passed `NewStudentInput::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub course: String,
}

fn present(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

impl NewStudentInput {
    /// Presence check for all three fields, then the per-column rules.
    pub fn validate(self) -> Result<NewStudent, ServiceError> {
        let missing: Vec<&str> = [("name", &self.name), ("email", &self.email), ("course", &self.course)]
            .into_iter()
            .filter(|(_, v)| present(v).is_none())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(ServiceError::MissingFields(missing.join(", ")));
        }
        let (Some(name), Some(email), Some(course)) = (self.name, self.email, self.course) else {
            return Err(ServiceError::MissingFields("name, email, course".into()));
        };
        model::validate_name(&name)?;
        model::validate_email(&email)?;
        model::validate_course(&course)?;
        Ok(NewStudent { name, email, course })
    }
}

/// Partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.course.is_none()
    }

    /// Supplied fields must still satisfy the column rules.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if let Some(n) = &self.name { model::validate_name(n)?; }
        if let Some(e) = &self.email { model::validate_email(e)?; }
        if let Some(c) = &self.course { model::validate_course(c)?; }
        Ok(())
    }

    /// Merge onto `current`, leaving unsupplied fields untouched.
    pub fn apply_to(&self, current: &Student) -> Student {
        Student {
            id: current.id,
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            email: self.email.clone().unwrap_or_else(|| current.email.clone()),
            course: self.course.clone().unwrap_or_else(|| current.course.clone()),
        }
    }
}
