use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::StudentService;

// 引用完整性策略：仍有任务挂在名下的学生禁止删除，
// 调用方需要先删除或转移任务。
pub async fn delete_student(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.count_assignments_for_student(student_id).await {
        Ok(count) if count > 0 => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ReferencedByAssignments,
                format!("学生名下还有 {count} 个任务，无法删除"),
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("检查学生任务失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_student(student_id).await {
        Ok(true) => {
            tracing::info!("Student deleted: id={}", student_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("学生删除成功")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            format!("学生不存在: {student_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除学生失败: {e}"),
            )),
        ),
    }
}
