//! 仪表盘聚合
//!
//! 对全量任务做单次遍历。金额为逐单差额直接求和，不截断负数：
//! 超付的单以负差额抵扣总额，口径刻意保留（见 DashboardStats 注释）。

use super::schedule;
use crate::models::assignments::entities::{Assignment, AssignmentStatus};
use crate::models::dashboard::responses::{DashboardStats, StatusDistribution};

/// 汇总全量任务的仪表盘统计。
pub fn summarize(assignments: &[Assignment], now: chrono::DateTime<chrono::Utc>) -> DashboardStats {
    let mut stats = DashboardStats {
        total_pending: 0,
        total_overdue: 0,
        pending_amount: 0.0,
        pending_writer_pay: 0.0,
        active_dissertations: 0,
        status_distribution: StatusDistribution::default(),
    };

    for a in assignments {
        if a.status.is_open() {
            stats.total_pending += 1;
        }
        if schedule::classify(a.deadline, a.status, now).is_overdue {
            stats.total_overdue += 1;
        }
        stats.pending_amount += a.price - a.paid_amount;
        stats.pending_writer_pay += a.writer_price - a.writer_paid_amount;
        if a.is_dissertation && a.status != AssignmentStatus::Completed {
            stats.active_dissertations += 1;
        }
        match a.status {
            AssignmentStatus::Pending => stats.status_distribution.pending += 1,
            AssignmentStatus::InProgress => stats.status_distribution.in_progress += 1,
            AssignmentStatus::UnderReview => stats.status_distribution.under_review += 1,
            AssignmentStatus::Completed => stats.status_distribution.completed += 1,
            AssignmentStatus::Cancelled => stats.status_distribution.cancelled += 1,
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::{AssignmentKind, AssignmentPriority};
    use chrono::{Duration, Utc};

    fn sample(price: f64, paid: f64, status: AssignmentStatus) -> Assignment {
        Assignment {
            id: 1,
            student_id: 1,
            writer_id: None,
            title: "Essay".to_string(),
            kind: AssignmentKind::Essay,
            subject: "History".to_string(),
            level: "Undergraduate".to_string(),
            priority: AssignmentPriority::Low,
            status,
            deadline: Utc::now() + Duration::days(7),
            document_link: None,
            description: None,
            word_count: None,
            cost_per_word: None,
            writer_cost_per_word: None,
            price,
            paid_amount: paid,
            writer_price: 0.0,
            writer_paid_amount: 0.0,
            sunk_costs: 0.0,
            is_dissertation: false,
            total_chapters: None,
            chapters: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_pending_amount_sums_raw_differences() {
        let list = vec![
            sample(5000.0, 2000.0, AssignmentStatus::InProgress),
            sample(20000.0, 5000.0, AssignmentStatus::Pending),
        ];
        let stats = summarize(&list, Utc::now());
        assert_eq!(stats.pending_amount, 18000.0);
        assert_eq!(stats.total_pending, 2);
    }

    #[test]
    fn test_overpaid_reduces_total() {
        let list = vec![
            sample(1000.0, 1500.0, AssignmentStatus::Completed),
            sample(2000.0, 0.0, AssignmentStatus::Pending),
        ];
        let stats = summarize(&list, Utc::now());
        assert_eq!(stats.pending_amount, 1500.0);
    }

    #[test]
    fn test_overdue_counts_cancelled_but_not_completed() {
        let now = Utc::now();
        let mut overdue_cancelled = sample(0.0, 0.0, AssignmentStatus::Cancelled);
        overdue_cancelled.deadline = now - Duration::days(1);
        let mut overdue_completed = sample(0.0, 0.0, AssignmentStatus::Completed);
        overdue_completed.deadline = now - Duration::days(1);

        let stats = summarize(&[overdue_cancelled, overdue_completed], now);
        assert_eq!(stats.total_overdue, 1);
        assert_eq!(stats.total_pending, 0);
    }

    #[test]
    fn test_dissertation_and_distribution() {
        let mut d1 = sample(0.0, 0.0, AssignmentStatus::InProgress);
        d1.is_dissertation = true;
        let mut d2 = sample(0.0, 0.0, AssignmentStatus::Completed);
        d2.is_dissertation = true;
        let mut d3 = sample(0.0, 0.0, AssignmentStatus::Cancelled);
        d3.is_dissertation = true;

        let stats = summarize(&[d1, d2, d3], Utc::now());
        // 只排除 completed，已取消的论文仍计入
        assert_eq!(stats.active_dissertations, 2);
        assert_eq!(stats.status_distribution.in_progress, 1);
        assert_eq!(stats.status_distribution.completed, 1);
        assert_eq!(stats.status_distribution.cancelled, 1);
    }

    #[test]
    fn test_writer_pay_side() {
        let mut a = sample(0.0, 0.0, AssignmentStatus::InProgress);
        a.writer_price = 3000.0;
        a.writer_paid_amount = 1200.0;
        let stats = summarize(&[a], Utc::now());
        assert_eq!(stats.pending_writer_pay, 1800.0);
    }
}
