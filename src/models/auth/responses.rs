use serde::Serialize;
use ts_rs::TS;

use crate::models::users::entities::User;

// 登录响应
//
// 刷新令牌经 HttpOnly Cookie 下发，不出现在响应体中。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    /// 访问令牌有效期（秒）
    pub expires_in: i64,
    pub user: User,
}

// 令牌刷新响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
}

// 令牌校验响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct VerifyTokenResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}
