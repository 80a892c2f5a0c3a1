use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use super::entities::{AssignmentKind, AssignmentPriority, AssignmentStatus, ChapterProgress};
use crate::models::common::pagination::PaginationQuery;

/// 创建任务请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub student_id: i64,
    pub writer_id: Option<i64>,
    pub title: String,
    pub kind: AssignmentKind,
    pub subject: String,
    pub level: String,
    pub priority: Option<AssignmentPriority>,
    pub status: Option<AssignmentStatus>,
    pub deadline: DateTime<Utc>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    pub document_link: Option<String>,
    pub description: Option<String>,
    pub word_count: Option<i64>,
    pub cost_per_word: Option<f64>,
    pub writer_cost_per_word: Option<f64>,
    pub price: Option<f64>,
    pub paid_amount: Option<f64>,
    pub writer_price: Option<f64>,
    pub writer_paid_amount: Option<f64>,
    pub total_chapters: Option<i32>,
}

/// 更新任务请求（None 表示不修改该字段）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub writer_id: Option<i64>,
    pub title: Option<String>,
    pub kind: Option<AssignmentKind>,
    pub subject: Option<String>,
    pub level: Option<String>,
    pub priority: Option<AssignmentPriority>,
    pub status: Option<AssignmentStatus>,
    pub deadline: Option<DateTime<Utc>>,
    pub document_link: Option<String>,
    pub description: Option<String>,
    pub word_count: Option<i64>,
    pub cost_per_word: Option<f64>,
    pub writer_cost_per_word: Option<f64>,
    pub price: Option<f64>,
    pub paid_amount: Option<f64>,
    pub writer_price: Option<f64>,
    pub writer_paid_amount: Option<f64>,
    pub sunk_costs: Option<f64>,
    pub total_chapters: Option<i32>,
    pub chapters: Option<Vec<ChapterProgress>>,
}

/// 任务列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub status: Option<AssignmentStatus>,
    pub student_id: Option<i64>,
    pub writer_id: Option<i64>,
    pub search: Option<String>,
    /// 仅显示已逾期（deadline 已过且未完成）的任务
    pub overdue_only: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub status: Option<AssignmentStatus>,
    pub student_id: Option<i64>,
    pub writer_id: Option<i64>,
    pub search: Option<String>,
    pub overdue_only: Option<bool>,
}

impl From<AssignmentListParams> for AssignmentListQuery {
    fn from(params: AssignmentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            status: params.status,
            student_id: params.student_id,
            writer_id: params.writer_id,
            search: params.search,
            overdue_only: params.overdue_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_convert_to_storage_query() {
        let params = AssignmentListParams {
            pagination: PaginationQuery { page: 3, size: 20 },
            status: Some(AssignmentStatus::InProgress),
            student_id: Some(7),
            writer_id: None,
            search: None,
            overdue_only: Some(true),
        };
        let query = AssignmentListQuery::from(params);
        assert_eq!(query.page, Some(3));
        assert_eq!(query.size, Some(20));
        assert_eq!(query.status, Some(AssignmentStatus::InProgress));
        assert_eq!(query.student_id, Some(7));
        assert_eq!(query.overdue_only, Some(true));
    }
}

/// 批量删除请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}
