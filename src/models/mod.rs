pub mod assignments;
pub mod auth;
pub mod backup;
pub mod common;
pub mod dashboard;
pub mod students;
pub mod users;
pub mod writers;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 程序启动时间（用于启动耗时统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码（HTTP 响应 code 字段）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 4xx 客户端错误
    BadRequest = 40000,
    ValidationFailed = 40001,
    ImportFileInvalid = 40002,
    NothingDue = 40003,
    NoWriterAssigned = 40004,
    Unauthorized = 40100,
    AuthFailed = 40101,
    NotFound = 40400,
    StudentNotFound = 40401,
    WriterNotFound = 40402,
    AssignmentNotFound = 40403,
    UserNotFound = 40404,
    ReferencedByAssignments = 40900,
    RateLimitExceeded = 42900,

    // 5xx 服务端错误
    InternalServerError = 50000,
}
