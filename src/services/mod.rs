pub mod assignments;
pub mod auth;
pub mod backup;
pub mod dashboard;
pub mod students;
pub mod writers;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use backup::BackupService;
pub use dashboard::DashboardService;
pub use students::StudentService;
pub use writers::WriterService;
