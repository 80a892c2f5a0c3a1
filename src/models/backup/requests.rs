use serde::Deserialize;
use ts_rs::TS;

use super::entities::BackupArchive;

/// 导入备份请求
///
/// replace 为 true 时先清空现有业务数据再写入；默认追加导入。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/backup.ts")]
pub struct ImportBackupRequest {
    #[serde(default)]
    pub replace: bool,
    pub archive: BackupArchive,
}
