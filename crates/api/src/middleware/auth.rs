//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use initrack_core::error::CoreError;
use initrack_core::policy::Actor;
use initrack_db::repositories::EmployeeRepo;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated employee extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// The token carries only the employee id; the employee row is loaded from
/// the database on every request, so a deleted employee's token stops
/// working immediately and role changes take effect without re-login.
///
/// ```ignore
/// async fn my_handler(AuthEmployee(actor): AuthEmployee) -> AppResult<Json<()>> {
///     tracing::info!(employee_id = actor.employee_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthEmployee(pub Actor);

impl FromRequestParts<AppState> for AuthEmployee {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized(
                "Could not validate credentials".into(),
            ))
        })?;

        let employee = EmployeeRepo::find_by_id(&state.pool, claims.employee_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Could not validate credentials".into(),
                ))
            })?;

        Ok(AuthEmployee(Actor {
            employee_id: employee.employee_id,
            employee_type_id: employee.employee_type_id,
        }))
    }
}
