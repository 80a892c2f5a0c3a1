use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::backup::requests::ImportBackupRequest;
use crate::services::BackupService;

// 懒加载的全局 BackupService 实例
static BACKUP_SERVICE: Lazy<BackupService> = Lazy::new(BackupService::new_lazy);

pub async fn export_backup(request: HttpRequest) -> ActixResult<HttpResponse> {
    BACKUP_SERVICE.export_backup(&request).await
}

pub async fn import_backup(
    req: HttpRequest,
    import_data: web::Json<ImportBackupRequest>,
) -> ActixResult<HttpResponse> {
    BACKUP_SERVICE
        .import_backup(import_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_backup_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/backup")
            .wrap(middlewares::RequireJWT)
            .route("/export", web::get().to(export_backup))
            .service(
                web::resource("/import")
                    .wrap(middlewares::RateLimit::backup_import())
                    .route(web::post().to(import_backup)),
            ),
    );
}
