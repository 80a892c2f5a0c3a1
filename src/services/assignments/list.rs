use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::assignments::requests::{AssignmentListParams, AssignmentListQuery};
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

pub async fn list_assignments(
    service: &AssignmentService,
    params: AssignmentListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = AssignmentListQuery::from(params);

    match storage.list_assignments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询任务列表失败: {e}"),
            )),
        ),
    }
}
