pub mod export;
pub mod import;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::backup::requests::ImportBackupRequest;
use crate::storage::Storage;

pub struct BackupService {
    storage: Option<Arc<dyn Storage>>,
}

impl BackupService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 导出备份档案
    pub async fn export_backup(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        export::export_backup(self, request).await
    }

    // 导入备份档案
    pub async fn import_backup(
        &self,
        import_data: ImportBackupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_backup(self, import_data, request).await
    }
}
