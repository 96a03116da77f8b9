//! User handlers.

use axum::{
    extract::{Extension, Path, State},
    middleware,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{NewUser, UserResponse};

use crate::extractors::ValidatedJson;
use crate::middleware::{admin_middleware, basic_auth_middleware, CurrentUser};
use crate::state::AppState;

/// User create / replace request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "email must have a value!"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "username must have a value!"))]
    #[schema(example = "testuser")]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password must have a value!"))]
    #[schema(example = "password")]
    pub password: String,
    #[serde(default)]
    pub admin: bool,
}

impl From<UserRequest> for NewUser {
    fn from(request: UserRequest) -> Self {
        Self {
            email: request.email,
            username: request.username,
            password: request.password,
            admin: request.admin,
        }
    }
}

/// Identifier of a newly created user
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserIdResponse {
    pub id: Uuid,
}

/// Acknowledgement for updates and deletes
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Create user routes
///
/// Reads need any valid credentials; writes need an administrator.
pub fn user_routes(state: AppState) -> Router<AppState> {
    let reads = Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            basic_auth_middleware,
        ));

    let writes = Router::new()
        .route("/", post(create_user))
        .route("/:id", put(update_user).delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state, admin_middleware));

    reads.merge(writes)
}

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::bad_request("invalid id"))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    security(("basic_auth" = [])),
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("basic_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserResponse),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_id(&id)?;
    let user = state.user_service.get_user(id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Create user (admin only)
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    security(("basic_auth" = [])),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = UserIdResponse),
        (status = 400, description = "Validation error or username taken"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<UserIdResponse>> {
    let id = state.user_service.create_user(payload.into()).await?;

    tracing::info!(%id, created_by = %current_user.username, "User created via API");
    Ok(Json(UserIdResponse { id }))
}

/// Replace user (admin only)
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("basic_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = SuccessResponse),
        (status = 400, description = "Validation error, invalid id or username taken"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_id(&id)?;
    state.user_service.update_user(id, payload.into()).await?;
    Ok(SuccessResponse::ok())
}

/// Delete user (admin only)
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    security(("basic_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted (or already absent)", body = SuccessResponse),
        (status = 400, description = "Invalid id"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    let id = parse_id(&id)?;
    state.user_service.delete_user(id).await?;
    Ok(SuccessResponse::ok())
}
