use serde::Serialize;
use ts_rs::TS;

use super::entities::Assignment;
use crate::models::common::pagination::PaginationInfo;

// 任务响应
//
// rating_due 仅在一次保存令任务首次进入 completed 且有写手在任时出现，
// 携带应被评分的写手 ID；重复保存 completed 不会再次出现（防止重复计分）。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentResponse {
    pub assignment: Assignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_due: Option<i64>,
}

impl AssignmentResponse {
    pub fn new(assignment: Assignment) -> Self {
        Self {
            assignment,
            rating_due: None,
        }
    }
}

// 任务列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

// 批量删除响应：每项独立删除，报告尝试数与确认成功数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct BulkDeleteResponse {
    pub attempted: usize,
    pub deleted: usize,
    pub failed_ids: Vec<i64>,
}
