use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::{HashMap, HashSet};

use crate::models::backup::entities::{BACKUP_VERSION, BackupArchive};
use crate::models::backup::requests::ImportBackupRequest;
use crate::models::backup::responses::{ImportBackupResponse, ImportCollectionResult};
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};
use crate::models::writers::requests::CreateWriterRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

use super::BackupService;

/// 导入备份档案。
///
/// 档案里的原 ID 只用于重建引用关系，落库 ID 由数据库重新分配，
/// 因此追加导入不会与现有数据冲突。校验在任何写入之前完成，
/// 引用关系不完整的档案整体拒绝。
pub async fn import_backup(
    service: &BackupService,
    data: ImportBackupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let archive = data.archive;

    // 1. 版本与引用完整性校验，不通过则一条数据都不写
    if archive.version != BACKUP_VERSION {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileInvalid,
            format!(
                "不支持的备份版本: {} (当前支持 {})",
                archive.version, BACKUP_VERSION
            ),
        )));
    }
    if let Err(reason) = validate_references(&archive) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileInvalid,
            reason,
        )));
    }

    // 2. 替换模式：先清空业务数据（操作员账户保留）
    if data.replace {
        if let Err(e) = storage.purge_business_data().await {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("清空现有数据失败: {e}"),
                )),
            );
        }
        tracing::warn!("Backup import: existing business data purged");
    }

    // 3. 学生两轮写入：先建档并记录旧 ID 到新 ID 的映射，
    //    再回填介绍人（介绍人可能排在被介绍人之后，一轮写不完整）
    let mut student_ids: HashMap<i64, i64> = HashMap::new();
    let mut students = ImportCollectionResult {
        attempted: archive.students.len(),
        created: 0,
    };
    let mut referrals: Vec<(i64, i64)> = Vec::new();

    for student in archive.students {
        let old_id = student.id;
        if let Some(referrer) = student.referred_by {
            referrals.push((old_id, referrer));
        }
        let create = CreateStudentRequest {
            name: student.name,
            email: student.email,
            phone: student.phone,
            university: student.university,
            remarks: student.remarks,
            is_flagged: Some(student.is_flagged),
            referred_by: None,
        };
        match storage.create_student(create).await {
            Ok(created) => {
                student_ids.insert(old_id, created.id);
                students.created += 1;
            }
            Err(e) => tracing::warn!("Import: failed to create student {}: {}", old_id, e),
        }
    }

    for (old_id, old_referrer) in referrals {
        let (Some(&new_id), Some(&new_referrer)) =
            (student_ids.get(&old_id), student_ids.get(&old_referrer))
        else {
            continue;
        };
        let update = UpdateStudentRequest {
            name: None,
            email: None,
            phone: None,
            university: None,
            remarks: None,
            is_flagged: None,
            referred_by: Some(new_referrer),
        };
        if let Err(e) = storage.update_student(new_id, update).await {
            tracing::warn!("Import: failed to restore referrer for student {}: {}", new_id, e);
        }
    }

    // 4. 写手：建档后单独回写累计评分
    let mut writer_ids: HashMap<i64, i64> = HashMap::new();
    let mut writers = ImportCollectionResult {
        attempted: archive.writers.len(),
        created: 0,
    };

    for writer in archive.writers {
        let old_id = writer.id;
        let rating = writer.rating;
        let create = CreateWriterRequest {
            name: writer.name,
            contact: writer.contact,
            specialty: writer.specialty,
            is_flagged: Some(writer.is_flagged),
        };
        match storage.create_writer(create).await {
            Ok(created) => {
                writer_ids.insert(old_id, created.id);
                writers.created += 1;
                if let Some(rating) = rating
                    && let Err(e) = storage.update_writer_rating(created.id, rating).await
                {
                    tracing::warn!("Import: failed to restore rating for writer {}: {}", created.id, e);
                }
            }
            Err(e) => tracing::warn!("Import: failed to create writer {}: {}", old_id, e),
        }
    }

    // 5. 任务：归属 ID 换成新分配的值后整条写入
    let mut assignments = ImportCollectionResult {
        attempted: archive.assignments.len(),
        created: 0,
    };

    for mut assignment in archive.assignments {
        let old_id = assignment.id;
        let Some(&student_id) = student_ids.get(&assignment.student_id) else {
            // 归属学生建档失败，任务跟着跳过
            tracing::warn!("Import: skipping assignment {} (student missing)", old_id);
            continue;
        };
        assignment.student_id = student_id;
        if let Some(writer_id) = assignment.writer_id {
            assignment.writer_id = writer_ids.get(&writer_id).copied();
        }
        match storage.create_assignment(assignment).await {
            Ok(_) => assignments.created += 1,
            Err(e) => tracing::warn!("Import: failed to create assignment {}: {}", old_id, e),
        }
    }

    tracing::info!(
        "Backup imported: {}/{} students, {}/{} writers, {}/{} assignments (replace={})",
        students.created,
        students.attempted,
        writers.created,
        writers.attempted,
        assignments.created,
        assignments.attempted,
        data.replace
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ImportBackupResponse {
            students,
            writers,
            assignments,
            replaced: data.replace,
        },
        "导入完成",
    )))
}

// 引用完整性：档案内的 referred_by / student_id / writer_id 都必须
// 指向档案内的记录
fn validate_references(archive: &BackupArchive) -> Result<(), String> {
    let student_ids: HashSet<i64> = archive.students.iter().map(|s| s.id).collect();
    let writer_ids: HashSet<i64> = archive.writers.iter().map(|w| w.id).collect();

    for student in &archive.students {
        if let Some(referrer) = student.referred_by
            && !student_ids.contains(&referrer)
        {
            return Err(format!(
                "学生 {} 的介绍人 {} 不在档案中",
                student.id, referrer
            ));
        }
    }
    for assignment in &archive.assignments {
        if !student_ids.contains(&assignment.student_id) {
            return Err(format!(
                "任务 {} 的学生 {} 不在档案中",
                assignment.id, assignment.student_id
            ));
        }
        if let Some(writer_id) = assignment.writer_id
            && !writer_ids.contains(&writer_id)
        {
            return Err(format!(
                "任务 {} 的写手 {} 不在档案中",
                assignment.id, writer_id
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::{
        Assignment, AssignmentKind, AssignmentPriority, AssignmentStatus,
    };
    use crate::models::students::entities::Student;
    use crate::models::writers::entities::Writer;

    fn student(id: i64, referred_by: Option<i64>) -> Student {
        Student {
            id,
            name: format!("Student {id}"),
            email: format!("s{id}@example.com"),
            phone: "+44 100".to_string(),
            university: None,
            remarks: None,
            is_flagged: false,
            referred_by,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn writer(id: i64) -> Writer {
        Writer {
            id,
            name: format!("Writer {id}"),
            contact: "tg:@w".to_string(),
            specialty: None,
            is_flagged: false,
            rating: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn assignment(id: i64, student_id: i64, writer_id: Option<i64>) -> Assignment {
        Assignment {
            id,
            student_id,
            writer_id,
            title: "Essay".to_string(),
            kind: AssignmentKind::Essay,
            subject: "History".to_string(),
            level: "BA".to_string(),
            priority: AssignmentPriority::Medium,
            status: AssignmentStatus::Pending,
            deadline: chrono::Utc::now(),
            document_link: None,
            description: None,
            word_count: None,
            cost_per_word: None,
            writer_cost_per_word: None,
            price: 0.0,
            paid_amount: 0.0,
            writer_price: 0.0,
            writer_paid_amount: 0.0,
            sunk_costs: 0.0,
            is_dissertation: false,
            total_chapters: None,
            chapters: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn archive(
        students: Vec<Student>,
        writers: Vec<Writer>,
        assignments: Vec<Assignment>,
    ) -> BackupArchive {
        BackupArchive {
            students,
            writers,
            assignments,
            timestamp: chrono::Utc::now(),
            version: BACKUP_VERSION.to_string(),
        }
    }

    #[test]
    fn test_valid_archive_passes() {
        let a = archive(
            vec![student(1, None), student(2, Some(1))],
            vec![writer(10)],
            vec![assignment(100, 1, Some(10)), assignment(101, 2, None)],
        );
        assert!(validate_references(&a).is_ok());
    }

    #[test]
    fn test_dangling_referrer_rejected() {
        let a = archive(vec![student(1, Some(99))], vec![], vec![]);
        assert!(validate_references(&a).is_err());
    }

    #[test]
    fn test_dangling_student_rejected() {
        let a = archive(vec![student(1, None)], vec![], vec![assignment(100, 2, None)]);
        assert!(validate_references(&a).is_err());
    }

    #[test]
    fn test_dangling_writer_rejected() {
        let a = archive(
            vec![student(1, None)],
            vec![],
            vec![assignment(100, 1, Some(10))],
        );
        assert!(validate_references(&a).is_err());
    }
}
