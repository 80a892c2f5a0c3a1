pub mod assignments;

pub mod auth;

pub mod backup;

pub mod dashboard;

pub mod students;

pub mod writers;

pub use assignments::configure_assignment_routes;
pub use auth::configure_auth_routes;
pub use backup::configure_backup_routes;
pub use dashboard::configure_dashboard_routes;
pub use students::configure_student_routes;
pub use writers::configure_writer_routes;
