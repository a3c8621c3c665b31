//! The authorization decision function.
//!
//! Every handler consults [`authorize`] with the acting employee and the
//! access level the operation demands. The decision is pure: no I/O, no
//! logging, and the denial reason is always reported to the caller.

use crate::error::CoreError;
use crate::roles::ADMIN_EMPLOYEE_TYPE_ID;
use crate::types::DbId;

/// Denial message shared by every role and ownership rejection.
pub const NOT_AUTHORIZED: &str = "Not Authorized to perform requested action!";

/// The authenticated employee performing an operation.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub employee_id: DbId,
    pub employee_type_id: DbId,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.employee_type_id == ADMIN_EMPLOYEE_TYPE_ID
    }
}

/// Access level an operation demands.
///
/// `OwnerOnly` carries the id recorded on the target row (`created_by`,
/// `given_by`, `logged_by`, or `subscribed_by`). Admins get no override on
/// owner-gated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    AdminOnly,
    OwnerOnly { owner: DbId },
    Authenticated,
}

/// Decide whether `actor` may perform an operation requiring `access`.
pub fn authorize(actor: &Actor, access: Access) -> Result<(), CoreError> {
    let allowed = match access {
        Access::AdminOnly => actor.is_admin(),
        Access::OwnerOnly { owner } => actor.employee_id == owner,
        Access::Authenticated => true,
    };

    if allowed {
        Ok(())
    } else {
        Err(CoreError::Forbidden(NOT_AUTHORIZED.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::DEFAULT_EMPLOYEE_TYPE_ID;

    fn admin() -> Actor {
        Actor {
            employee_id: 10,
            employee_type_id: ADMIN_EMPLOYEE_TYPE_ID,
        }
    }

    fn employee(id: DbId) -> Actor {
        Actor {
            employee_id: id,
            employee_type_id: DEFAULT_EMPLOYEE_TYPE_ID,
        }
    }

    #[test]
    fn admin_passes_admin_gate() {
        assert!(authorize(&admin(), Access::AdminOnly).is_ok());
    }

    #[test]
    fn non_admin_fails_admin_gate() {
        let err = authorize(&employee(7), Access::AdminOnly).unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(msg) if msg == NOT_AUTHORIZED));
    }

    #[test]
    fn owner_passes_owner_gate() {
        assert!(authorize(&employee(7), Access::OwnerOnly { owner: 7 }).is_ok());
    }

    #[test]
    fn non_owner_fails_owner_gate() {
        let err = authorize(&employee(7), Access::OwnerOnly { owner: 8 }).unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[test]
    fn admin_gets_no_override_on_owner_gate() {
        // Ownership is checked against the recorded owner id only; an admin
        // who does not own the row is rejected like anyone else.
        let err = authorize(&admin(), Access::OwnerOnly { owner: 8 }).unwrap_err();
        assert!(matches!(err, CoreError::Forbidden(_)));
    }

    #[test]
    fn any_actor_passes_authenticated_gate() {
        assert!(authorize(&employee(1), Access::Authenticated).is_ok());
        assert!(authorize(&admin(), Access::Authenticated).is_ok());
    }
}
