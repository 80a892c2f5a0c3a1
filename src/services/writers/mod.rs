pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod rate;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::writers::requests::{
    CreateWriterRequest, RateWriterRequest, UpdateWriterRequest, WriterListParams,
};
use crate::storage::Storage;

pub struct WriterService {
    storage: Option<Arc<dyn Storage>>,
}

impl WriterService {
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

    // 获取写手列表
    pub async fn list_writers(
        &self,
        query: WriterListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_writers(self, query, request).await
    }

    // 创建写手
    pub async fn create_writer(
        &self,
        writer_data: CreateWriterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_writer(self, writer_data, request).await
    }

    // 根据ID获取写手
    pub async fn get_writer(
        &self,
        writer_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_writer(self, writer_id, request).await
    }

    // 更新写手信息
    pub async fn update_writer(
        &self,
        writer_id: i64,
        update_data: UpdateWriterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_writer(self, writer_id, update_data, request).await
    }

    // 删除写手
    pub async fn delete_writer(
        &self,
        writer_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_writer(self, writer_id, request).await
    }

    // 提交评分
    pub async fn rate_writer(
        &self,
        writer_id: i64,
        rating_data: RateWriterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        rate::rate_writer(self, writer_id, rating_data, request).await
    }
}
