use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::writers::{requests::CreateWriterRequest, responses::WriterResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::WriterService;

pub async fn create_writer(
    service: &WriterService,
    writer_data: CreateWriterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if writer_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "写手姓名不能为空",
        )));
    }
    if writer_data.contact.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "联系方式不能为空",
        )));
    }

    match storage.create_writer(writer_data).await {
        Ok(writer) => {
            tracing::info!("Writer created: {} (id={})", writer.name, writer.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                WriterResponse { writer },
                "写手创建成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建写手失败: {e}"),
            )),
        ),
    }
}
