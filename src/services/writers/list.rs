use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::writers::requests::{WriterListParams, WriterListQuery};
use crate::models::{ApiResponse, ErrorCode};

use super::WriterService;

pub async fn list_writers(
    service: &WriterService,
    params: WriterListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = WriterListQuery::from(params);

    match storage.list_writers_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询写手列表失败: {e}"),
            )),
        ),
    }
}
