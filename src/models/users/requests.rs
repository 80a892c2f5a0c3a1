use serde::Deserialize;

/// 创建操作员请求（仅限启动期播种与内部调用）
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub pin: String,
    pub name: String,
    pub email: String,
}
