use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::WriterService;

// 引用完整性策略：仍有任务在做的写手禁止删除，
// 需要先完成任务或走换手流程解绑。
pub async fn delete_writer(
    service: &WriterService,
    writer_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_assignments_for_writer(writer_id).await {
        Ok(count) if count > 0 => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ReferencedByAssignments,
                format!("写手还有 {count} 个在任任务，无法删除"),
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("检查写手任务失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_writer(writer_id).await {
        Ok(true) => {
            tracing::info!("Writer deleted: id={}", writer_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("写手删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::WriterNotFound,
            format!("写手不存在: {writer_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除写手失败: {e}"),
            )),
        ),
    }
}
