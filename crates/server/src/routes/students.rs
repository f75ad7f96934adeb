use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use service::student::{NewStudentInput, Student, StudentPatch};
use tracing::info;

use crate::{errors::JsonApiError, state::ServerState};

fn bad_body(rejection: JsonRejection) -> JsonApiError {
    JsonApiError::new(StatusCode::BAD_REQUEST, "Invalid JSON body", Some(rejection.body_text()))
}

/// An id that is not an integer names no student.
fn bad_id(rejection: PathRejection) -> JsonApiError {
    JsonApiError::new(StatusCode::NOT_FOUND, "Student not found", Some(rejection.body_text()))
}

#[utoipa::path(
    get, path = "/students", tag = "students",
    responses(
        (status = 200, description = "All students", body = [crate::openapi::StudentDoc]),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Student>>, JsonApiError> {
    let list = state.students.list().await.map_err(JsonApiError::from_service)?;
    info!(count = list.len(), "list students");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/students", tag = "students",
    request_body = crate::openapi::CreateStudentRequest,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StudentDoc),
        (status = 400, description = "Missing field, invalid field or duplicate email", body = crate::openapi::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<NewStudentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), JsonApiError> {
    let Json(input) = payload.map_err(bad_body)?;
    info!(name = ?input.name, email = ?input.email, course = ?input.course, "student_create_request");
    let created = state
        .students
        .create(input)
        .await
        .map_err(JsonApiError::from_service)?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::StudentDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Student>, JsonApiError> {
    let Path(id) = id.map_err(bad_id)?;
    state
        .students
        .get(id)
        .await
        .map(Json)
        .map_err(JsonApiError::from_service)
}

#[utoipa::path(
    put, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    request_body = crate::openapi::UpdateStudentRequest,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::StudentDoc),
        (status = 400, description = "Empty field or duplicate email", body = crate::openapi::ErrorBody),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<StudentPatch>, JsonRejection>,
) -> Result<Json<Student>, JsonApiError> {
    let Path(id) = id.map_err(bad_id)?;
    let Json(patch) = payload.map_err(bad_body)?;
    info!(id, ?patch, "student_update_request");
    state
        .students
        .update(id, patch)
        .await
        .map(Json)
        .map_err(JsonApiError::from_service)
}

#[utoipa::path(
    delete, path = "/students/{id}", tag = "students",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::openapi::ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, JsonApiError> {
    let Path(id) = id.map_err(bad_id)?;
    state
        .students
        .delete(id)
        .await
        .map_err(JsonApiError::from_service)?;
    Ok(StatusCode::NO_CONTENT)
}
