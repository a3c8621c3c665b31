//! Request handlers, grouped by resource.

pub mod auth;
pub mod employee;
pub mod employee_type;
pub mod initiative;
pub mod initiative_type;
pub mod rating;
pub mod review;
pub mod status_code;
pub mod subscription;
pub mod task_log;
