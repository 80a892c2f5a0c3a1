use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::pagination::PaginationQuery;

/// 创建学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub university: Option<String>,
    pub remarks: Option<String>,
    pub is_flagged: Option<bool>,
    pub referred_by: Option<i64>,
}

/// 更新学生请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub remarks: Option<String>,
    pub is_flagged: Option<bool>,
    pub referred_by: Option<i64>,
}

/// 学生列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub flagged: Option<bool>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub flagged: Option<bool>,
}

impl From<StudentListParams> for StudentListQuery {
    fn from(params: StudentListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
            flagged: params.flagged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_convert_to_storage_query() {
        let params = StudentListParams {
            pagination: PaginationQuery { page: 2, size: 50 },
            search: Some("alice".to_string()),
            flagged: Some(true),
        };
        let query = StudentListQuery::from(params);
        assert_eq!(query.page, Some(2));
        assert_eq!(query.size, Some(50));
        assert_eq!(query.search.as_deref(), Some("alice"));
        assert_eq!(query.flagged, Some(true));
    }
}
