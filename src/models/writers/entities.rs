use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 写手实体
//
// rating 在第一次评分前为 None；quality / punctuality 为累计加权平均，
// 保留一位小数，count 为已计入的评分次数。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/writer.ts")]
pub struct Writer {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub specialty: Option<String>,
    pub is_flagged: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<WriterRating>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 写手累计评分
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/writer.ts")]
pub struct WriterRating {
    pub quality: f64,
    pub punctuality: f64,
    pub count: i64,
}
