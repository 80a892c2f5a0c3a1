//! 写手评分聚合
//!
//! 累计加权平均，保留一位小数。触发时机由服务层把关：
//! 一次保存首次把任务推进到 completed 且有在任写手时提示一次，
//! 重复保存 completed 不再提示（防止重复计分）。

use crate::models::writers::entities::WriterRating;

pub const RATING_MIN: i64 = 1;
pub const RATING_MAX: i64 = 5;

/// 评分是否落在 1..=5
pub fn is_valid_score(score: i64) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&score)
}

/// 把一次 (quality, punctuality) 评分并入现有累计评分。
///
/// current 为 None 时视作 {0, 0, 0} 起步。
pub fn fold_rating(current: Option<WriterRating>, quality: i64, punctuality: i64) -> WriterRating {
    let current = current.unwrap_or(WriterRating {
        quality: 0.0,
        punctuality: 0.0,
        count: 0,
    });
    let count = current.count + 1;
    WriterRating {
        quality: round1((current.quality * current.count as f64 + quality as f64) / count as f64),
        punctuality: round1(
            (current.punctuality * current.count as f64 + punctuality as f64) / count as f64,
        ),
        count,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rating_sets_average() {
        let r = fold_rating(None, 5, 4);
        assert_eq!(r.count, 1);
        assert_eq!(r.quality, 5.0);
        assert_eq!(r.punctuality, 4.0);
    }

    #[test]
    fn test_ratings_converge_to_mean() {
        let r1 = fold_rating(None, 5, 5);
        let r2 = fold_rating(Some(r1), 1, 1);
        assert_eq!(r2.count, 2);
        assert_eq!(r2.quality, 3.0);
        assert_eq!(r2.punctuality, 3.0);
    }

    #[test]
    fn test_rounds_to_one_decimal() {
        // (5 + 4 + 4) / 3 = 4.333... -> 4.3
        let r = fold_rating(
            Some(fold_rating(Some(fold_rating(None, 5, 5)), 4, 4)),
            4,
            4,
        );
        assert_eq!(r.count, 3);
        assert_eq!(r.quality, 4.3);
    }

    #[test]
    fn test_score_range() {
        assert!(is_valid_score(1));
        assert!(is_valid_score(5));
        assert!(!is_valid_score(0));
        assert!(!is_valid_score(6));
    }
}
