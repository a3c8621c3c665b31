//! Role-based access control extractors.
//!
//! [`RequireAdmin`] wraps [`AuthEmployee`] and rejects non-administrators
//! before the handler body runs, so admin-only routes enforce their gate at
//! the type level. Owner-gated routes cannot be expressed as an extractor
//! (the owner is only known after loading the row) and call
//! [`initrack_core::policy::authorize`] directly instead.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use initrack_core::policy::{self, Access, Actor};

use super::auth::AuthEmployee;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the Administrator employee type. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(actor): RequireAdmin) -> AppResult<Json<()>> {
///     // actor is guaranteed to be an administrator here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub Actor);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthEmployee(actor) = AuthEmployee::from_request_parts(parts, state).await?;
        policy::authorize(&actor, Access::AdminOnly)?;
        Ok(RequireAdmin(actor))
    }
}
