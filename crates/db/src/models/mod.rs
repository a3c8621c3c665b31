//! Entity model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the database table
//! - A `Deserialize` create DTO (also used for full-replace updates)
//! - `Serialize` response shapes embedding the related objects the API
//!   returns (summary shapes for list/create, detail shapes for info/update)

pub mod employee;
pub mod employee_type;
pub mod initiative;
pub mod initiative_type;
pub mod rating;
pub mod review;
pub mod status_code;
pub mod subscription;
pub mod task_log;
