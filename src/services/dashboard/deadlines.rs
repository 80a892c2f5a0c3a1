use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::ledger::schedule;
use crate::models::dashboard::responses::{DeadlineEntry, DeadlineListResponse};
use crate::models::{ApiResponse, ErrorCode};

use super::DashboardService;

// 已提醒登记表。进入 24 小时告警窗的任务只提醒一次，进程重启后重新计。
static ALERTED: Lazy<DashMap<i64, ()>> = Lazy::new(DashMap::new);

/// 临近截止列表：仅进行中（非完成/取消）的任务，按截止时间升序。
pub async fn list_deadlines(
    service: &DashboardService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let assignments = match storage.list_all_assignments().await {
        Ok(assignments) => assignments,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询任务失败: {e}"),
                )),
            );
        }
    };

    let students = match storage.list_all_students().await {
        Ok(students) => students,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    };
    let student_names: HashMap<i64, String> =
        students.into_iter().map(|s| (s.id, s.name)).collect();

    let now = chrono::Utc::now();
    let open_ids: HashSet<i64> = assignments
        .iter()
        .filter(|a| a.status.is_open())
        .map(|a| a.id)
        .collect();
    prune_alert_registry(&open_ids);

    let mut items: Vec<DeadlineEntry> = assignments
        .into_iter()
        .filter(|a| a.status.is_open())
        .map(|a| {
            let status = schedule::classify(a.deadline, a.status, now);
            // 一次性提醒：首次进入告警窗时 true，之后登记表拦下
            let should_alert = schedule::in_alert_window(&status)
                && ALERTED.insert(a.id, ()).is_none();
            DeadlineEntry {
                assignment_id: a.id,
                title: a.title,
                student_name: student_names
                    .get(&a.student_id)
                    .cloned()
                    .unwrap_or_default(),
                deadline: a.deadline,
                hours_left: status.hours_left,
                days_left: status.days_left,
                is_overdue: status.is_overdue,
                is_urgent: status.is_urgent,
                should_alert,
            }
        })
        .collect();

    items.sort_by_key(|e| e.deadline);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        DeadlineListResponse { items },
        "查询成功",
    )))
}

// 清掉已删除或已完结任务的登记项，登记表不随历史任务无限增长
fn prune_alert_registry(open_ids: &HashSet<i64>) {
    ALERTED.retain(|id, _| open_ids.contains(id));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_drops_closed_assignments() {
        ALERTED.insert(9001, ());
        ALERTED.insert(9002, ());

        let open_ids: HashSet<i64> = [9001].into_iter().collect();
        prune_alert_registry(&open_ids);

        assert!(ALERTED.contains_key(&9001));
        assert!(!ALERTED.contains_key(&9002));
    }
}
