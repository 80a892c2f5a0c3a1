use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::assignments::entities::{Assignment, AssignmentStatus};
use crate::models::assignments::responses::AssignmentResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::{AssignmentService, update};

/// 状态阶梯前进一格。pending → in_progress → under_review → completed。
///
/// 已完成无法再前进；cancelled 不在阶梯上，前进后退都拒绝。
/// 前进到 completed 且有写手在任时，响应携带 rating_due 提示评分。
pub async fn advance_status(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match load(&*storage, assignment_id).await {
        Ok(assignment) => assignment,
        Err(response) => return Ok(response),
    };

    let Some(next) = assignment.status.next() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("状态 {} 无法前进", assignment.status),
        )));
    };

    let rating_due = update::rating_due(assignment.status, next, assignment.writer_id);

    persist(&*storage, assignment_id, assignment, next, rating_due).await
}

/// 状态阶梯后退一格。completed → under_review → in_progress → pending。
pub async fn regress_status(
    service: &AssignmentService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignment = match load(&*storage, assignment_id).await {
        Ok(assignment) => assignment,
        Err(response) => return Ok(response),
    };

    let Some(previous) = assignment.status.previous() else {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("状态 {} 无法后退", assignment.status),
        )));
    };

    persist(&*storage, assignment_id, assignment, previous, None).await
}

async fn load(storage: &dyn Storage, assignment_id: i64) -> Result<Assignment, HttpResponse> {
    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => Ok(assignment),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            format!("任务不存在: {assignment_id}"),
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询任务失败: {e}"),
            )),
        ),
    }
}

async fn persist(
    storage: &dyn Storage,
    assignment_id: i64,
    mut assignment: Assignment,
    status: AssignmentStatus,
    rating_due: Option<i64>,
) -> ActixResult<HttpResponse> {
    let from = assignment.status;
    assignment.status = status;

    match storage.update_assignment(assignment_id, assignment).await {
        Ok(Some(assignment)) => {
            tracing::info!(
                "Assignment status changed: id={}, {} -> {}",
                assignment_id,
                from,
                status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignmentResponse {
                    assignment,
                    rating_due,
                },
                "状态更新成功",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            format!("任务不存在: {assignment_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新状态失败: {e}"),
            )),
        ),
    }
}
