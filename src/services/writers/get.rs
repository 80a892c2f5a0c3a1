use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::writers::responses::WriterResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::WriterService;

pub async fn get_writer(
    service: &WriterService,
    writer_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_writer_by_id(writer_id).await {
        Ok(Some(writer)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            WriterResponse { writer },
            "查询成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::WriterNotFound,
            format!("写手不存在: {writer_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询写手失败: {e}"),
            )),
        ),
    }
}
