//! 按字数计价
//!
//! 派生价是推荐值而非强制值：只有当字数与单价同时给出（且非零）时
//! 才覆盖对应价格；缺失任何输入则保留手工录入的价格不动。

use crate::models::assignments::entities::Assignment;

/// 根据字数与单价重算客户价 / 写手价，幂等。
pub fn apply_word_pricing(assignment: &mut Assignment) {
    let Some(word_count) = assignment.word_count else {
        return;
    };
    if word_count <= 0 {
        return;
    }

    if let Some(rate) = assignment.cost_per_word
        && rate > 0.0
    {
        assignment.price = word_count as f64 * rate;
    }
    if let Some(rate) = assignment.writer_cost_per_word
        && rate > 0.0
    {
        assignment.writer_price = word_count as f64 * rate;
    }
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
            title: "Econometrics essay".to_string(),
            kind: AssignmentKind::Essay,
            subject: "Economics".to_string(),
            level: "Masters".to_string(),
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

    #[test]
    fn test_derives_both_prices() {
        let mut a = sample();
        a.word_count = Some(2000);
        a.cost_per_word = Some(2.5);
        a.writer_cost_per_word = Some(1.0);
        apply_word_pricing(&mut a);
        assert_eq!(a.price, 5000.0);
        assert_eq!(a.writer_price, 2000.0);
    }

    #[test]
    fn test_idempotent() {
        let mut a = sample();
        a.word_count = Some(1500);
        a.cost_per_word = Some(3.0);
        apply_word_pricing(&mut a);
        let first = a.price;
        apply_word_pricing(&mut a);
        assert_eq!(a.price, first);
        assert_eq!(a.price, 4500.0);
    }

    #[test]
    fn test_missing_input_keeps_manual_price() {
        let mut a = sample();
        a.price = 8000.0;
        a.word_count = Some(1000);
        apply_word_pricing(&mut a);
        assert_eq!(a.price, 8000.0);
    }

    #[test]
    fn test_zero_inputs_skip_derivation() {
        let mut a = sample();
        a.price = 600.0;
        a.word_count = Some(0);
        a.cost_per_word = Some(2.0);
        apply_word_pricing(&mut a);
        assert_eq!(a.price, 600.0);

        let mut b = sample();
        b.price = 600.0;
        b.word_count = Some(1000);
        b.cost_per_word = Some(0.0);
        apply_word_pricing(&mut b);
        assert_eq!(b.price, 600.0);
    }
}
