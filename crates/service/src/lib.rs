//! Service layer providing the student record lifecycle on top of models.
//! - Separates business rules (presence checks, conflict translation) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Storage sits behind `StudentRepository` so it can be swapped for a fake.

pub mod errors;
pub mod student;
#[cfg(test)]
pub mod test_support;
