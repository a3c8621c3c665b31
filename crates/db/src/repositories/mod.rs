//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Lifecycle rules live here: audit
//! stamping on create/update, full-replace update semantics, and the ordered
//! cascade deletes in [`cascade`].

mod cascade;

pub mod employee_repo;
pub mod employee_type_repo;
pub mod initiative_repo;
pub mod initiative_type_repo;
pub mod rating_repo;
pub mod review_repo;
pub mod status_code_repo;
pub mod subscription_repo;
pub mod task_log_repo;

pub use employee_repo::EmployeeRepo;
pub use employee_type_repo::EmployeeTypeRepo;
pub use initiative_repo::InitiativeRepo;
pub use initiative_type_repo::InitiativeTypeRepo;
pub use rating_repo::RatingRepo;
pub use review_repo::ReviewRepo;
pub use status_code_repo::StatusCodeRepo;
pub use subscription_repo::SubscriptionRepo;
pub use task_log_repo::TaskLogRepo;
