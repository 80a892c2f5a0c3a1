use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::ledger::rating;
use crate::models::writers::{requests::RateWriterRequest, responses::WriterResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::WriterService;

/// 把一次 (quality, punctuality) 评分并入写手的累计评分。
///
/// 写手可能已被并发删除，查不到时按查找失败报告给调用方，
/// 不做静默跳过。
pub async fn rate_writer(
    service: &WriterService,
    writer_id: i64,
    rating_data: RateWriterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 评分范围校验
    if !rating::is_valid_score(rating_data.quality) || !rating::is_valid_score(rating_data.punctuality)
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "评分必须是 1 到 5 的整数",
        )));
    }

    // 2. 取当前累计评分
    let writer = match storage.get_writer_by_id(writer_id).await {
        Ok(Some(writer)) => writer,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::WriterNotFound,
                format!("写手不存在: {writer_id}"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询写手失败: {e}"),
                )),
            );
        }
    };

    // 3. 折算新的加权平均
    let folded = rating::fold_rating(writer.rating, rating_data.quality, rating_data.punctuality);

    // 4. 落库并返回更新后的写手
    match storage.update_writer_rating(writer_id, folded).await {
        Ok(true) => {
            tracing::info!(
                "Writer {} rated: quality={}, punctuality={}, count={}",
                writer_id,
                folded.quality,
                folded.punctuality,
                folded.count
            );
            match storage.get_writer_by_id(writer_id).await {
                Ok(Some(writer)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
                    WriterResponse { writer },
                    "评分成功",
                ))),
                _ => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("评分成功"))),
            }
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::WriterNotFound,
            format!("写手不存在: {writer_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新写手评分失败: {e}"),
            )),
        ),
    }
}
