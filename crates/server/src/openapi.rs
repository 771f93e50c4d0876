use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct ChangePasswordRequest {
    pub password: String,
}

#[derive(ToSchema)]
pub struct RegisterAdminRequest {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct EventRequest {
    pub title: String,
    pub date: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct AttendeeRequest {
    pub name: String,
    pub phone: Option<String>,
    pub parent_phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::auth::change_password,
        crate::routes::events::list,
        crate::routes::events::create,
        crate::routes::events::detail,
        crate::routes::events::update,
        crate::routes::events::remove,
        crate::routes::attendees::create,
        crate::routes::attendees::update,
        crate::routes::attendees::remove,
        crate::routes::admins::list,
        crate::routes::admins::register,
        crate::routes::exports::excel,
        crate::routes::exports::pdf,
    ),
    components(
        schemas(
            HealthResponse,
            LoginRequest,
            ChangePasswordRequest,
            RegisterAdminRequest,
            EventRequest,
            AttendeeRequest,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "events"),
        (name = "attendees"),
        (name = "admins"),
        (name = "exports")
    )
)]
pub struct ApiDoc;
