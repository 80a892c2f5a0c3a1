use serde::Deserialize;
use ts_rs::TS;

/// 登录请求：用户名 + 数字 PIN
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub pin: String,
    /// 是否延长刷新令牌有效期
    #[serde(default)]
    pub remember_me: bool,
}
