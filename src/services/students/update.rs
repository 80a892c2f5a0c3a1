use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::{requests::UpdateStudentRequest, responses::StudentResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{validate_email, validate_phone};

use super::StudentService;

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 本地校验
    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "学生姓名不能为空",
        )));
    }
    if let Some(ref email) = update_data.email
        && let Err(msg) = validate_email(email)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    if let Some(ref phone) = update_data.phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }

    // 2. 不允许自我介绍（referred_by 指向自己），介绍人必须存在
    if is_self_referral(student_id, update_data.referred_by) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "介绍人不能是学生本人",
        )));
    }
    if let Some(referrer_id) = update_data.referred_by {
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
    match storage.update_student(student_id, update_data).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentResponse { student },
            "学生更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            format!("学生不存在: {student_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新学生失败: {e}"),
            )),
        ),
    }
}

// 介绍人不能指向学生本人
fn is_self_referral(student_id: i64, referred_by: Option<i64>) -> bool {
    referred_by == Some(student_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_referral_is_rejected() {
        assert!(is_self_referral(7, Some(7)));
    }

    #[test]
    fn test_other_referrer_is_allowed() {
        assert!(!is_self_referral(7, Some(8)));
        assert!(!is_self_referral(7, None));
    }
}
