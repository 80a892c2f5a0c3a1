use actix_web::{FromRequest, HttpRequest, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 路径 ID 提取器：只接受正整数，非法值直接以统一响应拒绝，
/// 处理函数拿到的 ID 一定有效。
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let parsed = req
            .match_info()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
            .filter(|id| *id > 0);

        ready(match parsed {
            Some(id) => Ok(SafeIDI64(id)),
            None => {
                let response = actix_web::HttpResponse::BadRequest().json(
                    ApiResponse::error_empty(ErrorCode::BadRequest, "Invalid ID in path"),
                );
                Err(InternalError::from_response("Invalid ID in path", response).into())
            }
        })
    }
}
