use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assignments::entities::Assignment;
use crate::models::students::entities::Student;
use crate::models::writers::entities::Writer;

/// 备份档案版本号，导入时仅接受已知版本
pub const BACKUP_VERSION: &str = "1.0";

// 备份档案
//
// 导出时记录携带原 ID；导入时原 ID 仅用于重建引用关系
// （referred_by / student_id / writer_id），实际落库 ID 由数据库重新分配。
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/backup.ts")]
pub struct BackupArchive {
    pub students: Vec<Student>,
    pub writers: Vec<Writer>,
    pub assignments: Vec<Assignment>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}
