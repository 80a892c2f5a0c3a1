use serde::Serialize;
use ts_rs::TS;

use super::entities::Writer;
use crate::models::common::pagination::PaginationInfo;

// 写手响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/writer.ts")]
pub struct WriterResponse {
    pub writer: Writer,
}

// 写手列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/writer.ts")]
pub struct WriterListResponse {
    pub items: Vec<Writer>,
    pub pagination: PaginationInfo,
}
