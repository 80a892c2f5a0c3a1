use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

/// 创建写手请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/writer.ts")]
pub struct CreateWriterRequest {
    pub name: String,
    pub contact: String,
    pub specialty: Option<String>,
    pub is_flagged: Option<bool>,
}

/// 更新写手请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/writer.ts")]
pub struct UpdateWriterRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub specialty: Option<String>,
    pub is_flagged: Option<bool>,
}

/// 写手评分请求，两个维度均为 1..=5 的整数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/writer.ts")]
pub struct RateWriterRequest {
    pub quality: i64,
    pub punctuality: i64,
}

/// 写手列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/writer.ts")]
pub struct WriterListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub flagged: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct WriterListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub flagged: Option<bool>,
}

impl From<WriterListParams> for WriterListQuery {
    fn from(params: WriterListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
            flagged: params.flagged,
        }
    }
}
