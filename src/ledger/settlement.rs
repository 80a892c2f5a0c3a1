//! 结算与换手
//!
//! due 口径见词汇表：客户侧 price - paid_amount，写手侧
//! writer_price - writer_paid_amount。两侧互不影响。

use crate::models::assignments::entities::Assignment;

/// 客户侧待收余额
pub fn client_due(assignment: &Assignment) -> f64 {
    assignment.price - assignment.paid_amount
}

/// 写手侧待付余额
pub fn writer_due(assignment: &Assignment) -> f64 {
    assignment.writer_price - assignment.writer_paid_amount
}

/// 一键结清客户欠款：把 paid_amount 抬到 price，due 归零。
///
/// 仅在 due > 0 时生效；已结清或超付时拒绝执行，返回 false。
pub fn quick_settle(assignment: &mut Assignment) -> bool {
    if client_due(assignment) <= 0.0 {
        return false;
    }
    assignment.paid_amount = assignment.price;
    true
}

/// 解约当前写手，任务回到待指派状态。
///
/// 已付给该写手的钱不可回收，累加进 sunk_costs；写手侧价格、
/// 已付与单价全部清零，供重新报价。没有在任写手时返回 false。
pub fn release_writer(assignment: &mut Assignment) -> bool {
    if assignment.writer_id.is_none() {
        return false;
    }
    assignment.sunk_costs += assignment.writer_paid_amount;
    assignment.writer_id = None;
    assignment.writer_paid_amount = 0.0;
    assignment.writer_price = 0.0;
    assignment.writer_cost_per_word = None;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::{
        AssignmentKind, AssignmentPriority, AssignmentStatus,
    };

    fn sample() -> Assignment {
        Assignment {
            id: 1,
            student_id: 1,
            writer_id: None,
            title: "Nursing report".to_string(),
            kind: AssignmentKind::Report,
            subject: "Nursing".to_string(),
            level: "Undergraduate".to_string(),
            priority: AssignmentPriority::High,
            status: AssignmentStatus::InProgress,
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

    #[test]
    fn test_quick_settle_clears_due() {
        let mut a = sample();
        a.price = 5000.0;
        a.paid_amount = 2000.0;
        assert!(quick_settle(&mut a));
        assert_eq!(a.paid_amount, 5000.0);
        assert_eq!(client_due(&a), 0.0);
    }

    #[test]
    fn test_quick_settle_refuses_when_nothing_due() {
        let mut a = sample();
        a.price = 3000.0;
        a.paid_amount = 3000.0;
        assert!(!quick_settle(&mut a));
        assert_eq!(a.paid_amount, 3000.0);

        // 超付同样拒绝，不回退多收的钱
        a.paid_amount = 3500.0;
        assert!(!quick_settle(&mut a));
        assert_eq!(a.paid_amount, 3500.0);
    }

    #[test]
    fn test_release_writer_moves_paid_to_sunk() {
        let mut a = sample();
        a.writer_id = Some(7);
        a.writer_price = 2000.0;
        a.writer_paid_amount = 1000.0;
        a.writer_cost_per_word = Some(0.5);
        assert!(release_writer(&mut a));
        assert_eq!(a.sunk_costs, 1000.0);
        assert_eq!(a.writer_paid_amount, 0.0);
        assert_eq!(a.writer_price, 0.0);
        assert_eq!(a.writer_cost_per_word, None);
        assert_eq!(a.writer_id, None);
    }

    #[test]
    fn test_repeated_release_accumulates_sunk_costs() {
        let mut a = sample();

        a.writer_id = Some(7);
        a.writer_paid_amount = 1000.0;
        assert!(release_writer(&mut a));

        a.writer_id = Some(8);
        a.writer_paid_amount = 400.0;
        assert!(release_writer(&mut a));

        // 总沉没成本 = 历次弃用写手时已付金额之和
        assert_eq!(a.sunk_costs, 1400.0);
    }

    #[test]
    fn test_release_without_writer_is_rejected() {
        let mut a = sample();
        a.writer_paid_amount = 500.0;
        assert!(!release_writer(&mut a));
        assert_eq!(a.sunk_costs, 0.0);
        assert_eq!(a.writer_paid_amount, 500.0);
    }
}
