//! Login handler issuing JWT access tokens.

use axum::extract::State;
use axum::Json;
use initrack_core::error::CoreError;
use initrack_db::repositories::EmployeeRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Login request payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Rejection message for both unknown email and wrong password, so a caller
/// cannot probe which addresses are registered.
const INVALID_CREDENTIALS: &str = "Invalid Credentials !!!";

/// POST /login
///
/// Verify email/password and issue an access token. Both failure modes
/// (unknown email, wrong password) return 403 with the same message.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let employee = EmployeeRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Forbidden(INVALID_CREDENTIALS.into())))?;

    let verified = verify_password(&input.password, &employee.password)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(AppError::Core(CoreError::Forbidden(
            INVALID_CREDENTIALS.into(),
        )));
    }

    let access_token = generate_access_token(employee.employee_id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(employee_id = employee.employee_id, "Employee logged in");

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
