//! 截止期分类
//!
//! (deadline, status, now) 的纯函数。逾期定义为已过截止且未完成，
//! 取消的任务同样会被算作逾期（与完成不同，取消不豁免）只要其仍挂着
//! 过期的截止时间；列表过滤由服务层决定是否排除。

use crate::models::assignments::entities::AssignmentStatus;

/// 一条任务的截止期派生状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadlineStatus {
    pub is_overdue: bool,
    /// 距截止的整小时数，向上取整；已过期为非正数
    pub hours_left: i64,
    /// 距截止的整天数，向上取整
    pub days_left: i64,
    /// 0 < hours_left < 6，驱动界面醒目提示
    pub is_urgent: bool,
}

/// 根据当前时刻对截止期做分类。
pub fn classify(
    deadline: chrono::DateTime<chrono::Utc>,
    status: AssignmentStatus,
    now: chrono::DateTime<chrono::Utc>,
) -> DeadlineStatus {
    let remaining = deadline.signed_duration_since(now);
    let secs = remaining.num_seconds();
    let hours_left = (secs as f64 / 3600.0).ceil() as i64;
    let days_left = (secs as f64 / 86400.0).ceil() as i64;
    DeadlineStatus {
        is_overdue: deadline < now && status != AssignmentStatus::Completed,
        hours_left,
        days_left,
        is_urgent: hours_left > 0 && hours_left < 6,
    }
}

/// 是否处于一次性到期提醒窗口（0 < hours_left < 24）。
///
/// 去重（每个任务每次会话至多提醒一次）由调用方的登记表负责。
pub fn in_alert_window(status: &DeadlineStatus) -> bool {
    status.hours_left > 0 && status.hours_left < 24
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn test_past_deadline_in_progress_is_overdue() {
        let now = Utc::now();
        let s = classify(now - Duration::days(1), AssignmentStatus::InProgress, now);
        assert!(s.is_overdue);
        assert!(s.hours_left <= 0);
        assert!(!s.is_urgent);
    }

    #[test]
    fn test_completed_is_never_overdue() {
        let now = Utc::now();
        let s = classify(now - Duration::days(1), AssignmentStatus::Completed, now);
        assert!(!s.is_overdue);
    }

    #[test]
    fn test_urgent_window() {
        let now = Utc::now();
        let s = classify(now + Duration::hours(3), AssignmentStatus::Pending, now);
        assert!(s.is_urgent);
        assert!(!s.is_overdue);
        assert!(in_alert_window(&s));

        let s = classify(now + Duration::hours(10), AssignmentStatus::Pending, now);
        assert!(!s.is_urgent);
        assert!(in_alert_window(&s));

        let s = classify(now + Duration::hours(30), AssignmentStatus::Pending, now);
        assert!(!s.is_urgent);
        assert!(!in_alert_window(&s));
    }

    #[test]
    fn test_hours_round_up() {
        let now = Utc::now();
        let s = classify(
            now + Duration::minutes(90),
            AssignmentStatus::Pending,
            now,
        );
        assert_eq!(s.hours_left, 2);
        assert_eq!(s.days_left, 1);
    }

    #[test]
    fn test_alert_window_excludes_expired() {
        let now = Utc::now();
        let s = classify(now - Duration::hours(1), AssignmentStatus::Pending, now);
        assert!(!in_alert_window(&s));
    }
}
