use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::assignments::requests::BulkDeleteRequest;
use crate::models::assignments::responses::BulkDeleteResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

/// 批量删除。每个 ID 独立删除，单条失败不影响其余。
pub async fn bulk_delete(
    service: &AssignmentService,
    data: BulkDeleteRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if data.ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "ID 列表不能为空",
        )));
    }

    let attempted = data.ids.len();
    let mut deleted = 0usize;
    let mut failed_ids = Vec::new();

    for id in data.ids {
        match storage.delete_assignment(id).await {
            Ok(true) => deleted += 1,
            Ok(false) => failed_ids.push(id),
            Err(e) => {
                tracing::warn!("Bulk delete failed for assignment {}: {}", id, e);
                failed_ids.push(id);
            }
        }
    }

    tracing::info!("Bulk delete: attempted={}, deleted={}", attempted, deleted);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        BulkDeleteResponse {
            attempted,
            deleted,
            failed_ids,
        },
        "批量删除完成",
    )))
}
