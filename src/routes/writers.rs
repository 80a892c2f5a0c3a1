use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::writers::requests::{
    CreateWriterRequest, RateWriterRequest, UpdateWriterRequest, WriterListParams,
};
use crate::services::WriterService;
use crate::utils::SafeIDI64;

// 懒加载的全局 WriterService 实例
static WRITER_SERVICE: Lazy<WriterService> = Lazy::new(WriterService::new_lazy);

// HTTP处理程序
pub async fn list_writers(
    req: HttpRequest,
    query: web::Query<WriterListParams>,
) -> ActixResult<HttpResponse> {
    WRITER_SERVICE.list_writers(query.into_inner(), &req).await
}

pub async fn create_writer(
    req: HttpRequest,
    writer_data: web::Json<CreateWriterRequest>,
) -> ActixResult<HttpResponse> {
    WRITER_SERVICE
        .create_writer(writer_data.into_inner(), &req)
        .await
}

pub async fn get_writer(req: HttpRequest, writer_id: SafeIDI64) -> ActixResult<HttpResponse> {
    WRITER_SERVICE.get_writer(writer_id.0, &req).await
}

pub async fn update_writer(
    req: HttpRequest,
    writer_id: SafeIDI64,
    update_data: web::Json<UpdateWriterRequest>,
) -> ActixResult<HttpResponse> {
    WRITER_SERVICE
        .update_writer(writer_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_writer(req: HttpRequest, writer_id: SafeIDI64) -> ActixResult<HttpResponse> {
    WRITER_SERVICE.delete_writer(writer_id.0, &req).await
}

pub async fn rate_writer(
    req: HttpRequest,
    writer_id: SafeIDI64,
    rating_data: web::Json<RateWriterRequest>,
) -> ActixResult<HttpResponse> {
    WRITER_SERVICE
        .rate_writer(writer_id.0, rating_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_writer_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/writers")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_writers))
            .route("", web::post().to(create_writer))
            .route("/{id}", web::get().to(get_writer))
            .route("/{id}", web::put().to(update_writer))
            .route("/{id}", web::delete().to(delete_writer))
            .route("/{id}/rate", web::post().to(rate_writer)),
    );
}
