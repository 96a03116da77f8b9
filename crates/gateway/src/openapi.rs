//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::health_handler::HealthResponse;
use crate::handlers::user_handler::{SuccessResponse, UserIdResponse, UserRequest};
use domain::UserResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "Users API", description = "User directory with HTTP Basic authentication"),
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            HealthResponse,
            UserRequest,
            UserResponse,
            UserIdResponse,
            SuccessResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness endpoint"),
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}
