use serde::Serialize;
use ts_rs::TS;

use super::entities::User;

// 操作员资料响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserResponse {
    pub user: User,
}
