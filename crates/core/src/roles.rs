//! Well-known employee-type ids and entity field defaults.
//!
//! These must match the seed data in
//! `crates/db/migrations/20260829000001_create_tables.sql` and the reference
//! rows operators are expected to create before the service is useful.

use crate::types::DbId;

/// Employee type granting unrestricted access to admin-gated endpoints.
pub const ADMIN_EMPLOYEE_TYPE_ID: DbId = 1;

/// Employee type assigned at registration when none is supplied ("Normal User").
pub const DEFAULT_EMPLOYEE_TYPE_ID: DbId = 4;

/// Initiative type applied when a create/update payload omits one ("Meetup").
pub const DEFAULT_INITIATIVE_TYPE_ID: DbId = 2;

/// Status applied when a create/update payload omits one ("In Discussion").
pub const DEFAULT_STATUS_ID: DbId = 3;
