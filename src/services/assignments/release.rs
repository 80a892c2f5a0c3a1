use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::ledger::settlement;
use crate::models::assignments::responses::AssignmentResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

/// 解约当前写手：已付写手款转入沉没成本，清空写手侧字段。
///
/// 沉没成本累加与字段清空必须同时落库，整条记录一次 UPDATE 写回。
pub async fn release_writer(
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

    let released_writer = assignment.writer_id;
    if !settlement::release_writer(&mut assignment) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::NoWriterAssigned,
            "任务当前没有指派写手",
        )));
    }

    match storage.update_assignment(assignment_id, assignment).await {
        Ok(Some(assignment)) => {
            tracing::info!(
                "Writer released from assignment: id={}, writer_id={:?}, sunk_costs={}",
                assignment_id,
                released_writer,
                assignment.sunk_costs
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignmentResponse::new(assignment),
                "写手已解约",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            format!("任务不存在: {assignment_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("解约写手失败: {e}"),
            )),
        ),
    }
}
