use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生（客户）实体
//
// is_flagged 标记欠款/难缠客户；referred_by 指向介绍人（不允许指向自己）。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub university: Option<String>,
    pub remarks: Option<String>,
    pub is_flagged: bool,
    pub referred_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
