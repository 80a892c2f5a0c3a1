use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::writers::{requests::UpdateWriterRequest, responses::WriterResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::WriterService;

pub async fn update_writer(
    service: &WriterService,
    writer_id: i64,
    update_data: UpdateWriterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "写手姓名不能为空",
        )));
    }
    if let Some(ref contact) = update_data.contact
        && contact.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "联系方式不能为空",
        )));
    }

    match storage.update_writer(writer_id, update_data).await {
        Ok(Some(writer)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            WriterResponse { writer },
            "写手更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::WriterNotFound,
            format!("写手不存在: {writer_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新写手失败: {e}"),
            )),
        ),
    }
}
