use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::backup::entities::{BACKUP_VERSION, BackupArchive};
use crate::models::{ApiResponse, ErrorCode};

use super::BackupService;

/// 导出全部业务数据为一份带版本号的档案（不含操作员账户）。
pub async fn export_backup(
    service: &BackupService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let students = match storage.list_all_students().await {
        Ok(students) => students,
        Err(e) => return Ok(internal_error(format!("导出学生失败: {e}"))),
    };
    let writers = match storage.list_all_writers().await {
        Ok(writers) => writers,
        Err(e) => return Ok(internal_error(format!("导出写手失败: {e}"))),
    };
    let assignments = match storage.list_all_assignments().await {
        Ok(assignments) => assignments,
        Err(e) => return Ok(internal_error(format!("导出任务失败: {e}"))),
    };

    tracing::info!(
        "Backup exported: {} students, {} writers, {} assignments",
        students.len(),
        writers.len(),
        assignments.len()
    );

    let archive = BackupArchive {
        students,
        writers,
        assignments,
        timestamp: chrono::Utc::now(),
        version: BACKUP_VERSION.to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(archive, "导出成功")))
}

fn internal_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .json(ApiResponse::error_empty(ErrorCode::InternalServerError, message))
}
