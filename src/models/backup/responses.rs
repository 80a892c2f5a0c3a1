use serde::Serialize;
use ts_rs::TS;

// 单个集合的导入计数
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/backup.ts")]
pub struct ImportCollectionResult {
    pub attempted: usize,
    pub created: usize,
}

// 导入备份响应
#[derive(Debug, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/backup.ts")]
pub struct ImportBackupResponse {
    pub students: ImportCollectionResult,
    pub writers: ImportCollectionResult,
    pub assignments: ImportCollectionResult,
    pub replaced: bool,
}
