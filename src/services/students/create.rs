use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::{requests::CreateStudentRequest, responses::StudentResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_phone};

use super::StudentService;

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 本地校验，任何失败都不触发存储调用
    if student_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "学生姓名不能为空",
        )));
    }
    if let Err(msg) = validate_email(&student_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Err(msg) = validate_phone(&student_data.phone) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 2. 介绍人必须真实存在
    if let Some(referrer_id) = student_data.referred_by {
        match storage.get_student_by_id(referrer_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::StudentNotFound,
                    format!("介绍人不存在: {referrer_id}"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询介绍人失败: {e}"),
                    )),
                );
            }
        }
    }

    // 3. 落库
    match storage.create_student(student_data).await {
        Ok(student) => {
            tracing::info!("Student created: {} (id={})", student.name, student.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudentResponse { student },
                "学生创建成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建学生失败: {e}"),
            )),
        ),
    }
}
