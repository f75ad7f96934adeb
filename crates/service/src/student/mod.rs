//! Student module: three-layer architecture (domain, repository, service).
//!
//! Record lifecycle: created by `create`, mutated in place by `update`
//! (merge semantics), removed for good by `delete`.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{NewStudent, NewStudentInput, Student, StudentPatch};
pub use repository::StudentRepository;
pub use service::StudentService;
