use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::ledger::settlement;
use crate::models::assignments::responses::AssignmentResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

/// 一键结清：把客户已付金额补齐到总价。
///
/// 欠款不为正（已结清或已多付）时拒绝，避免把多付冲回去。
pub async fn settle_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let mut assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                format!("任务不存在: {assignment_id}"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询任务失败: {e}"),
                )),
            );
        }
    };

    if !settlement::quick_settle(&mut assignment) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NothingDue,
            "无待收欠款",
        )));
    }

    match storage.update_assignment(assignment_id, assignment).await {
        Ok(Some(assignment)) => {
            tracing::info!("Assignment settled: id={}", assignment_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignmentResponse::new(assignment),
                "欠款已结清",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            format!("任务不存在: {assignment_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("结清任务失败: {e}"),
            )),
        ),
    }
}
