use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StudentDoc { pub id: i32, pub name: String, pub email: String, pub course: String }

#[derive(ToSchema)]
pub struct CreateStudentRequest { pub name: String, pub email: String, pub course: String }

#[derive(ToSchema)]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub course: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorBody { pub error: String, pub detail: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::students::list,
        crate::routes::students::create,
        crate::routes::students::get,
        crate::routes::students::update,
        crate::routes::students::delete,
    ),
    components(
        schemas(
            HealthResponse,
            StudentDoc,
            CreateStudentRequest,
            UpdateStudentRequest,
            ErrorBody,
        )
    ),
    tags(
        (name = "health"),
        (name = "students")
    )
)]
pub struct ApiDoc;
