use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 任务状态
//
// 看板视图假定 pending < in_progress < under_review < completed 的线性推进，
// 通过 next()/previous() 暴露；cancelled 在阶梯之外，任意状态都可以直接设置。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentStatus {
    Pending,
    InProgress,
    UnderReview,
    Completed,
    Cancelled,
}

impl AssignmentStatus {
    pub const PENDING: &'static str = "pending";
    pub const IN_PROGRESS: &'static str = "in_progress";
    pub const UNDER_REVIEW: &'static str = "under_review";
    pub const COMPLETED: &'static str = "completed";
    pub const CANCELLED: &'static str = "cancelled";

    /// 阶梯上的下一个状态（cancelled / completed 没有后继）
    pub fn next(self) -> Option<Self> {
        match self {
            AssignmentStatus::Pending => Some(AssignmentStatus::InProgress),
            AssignmentStatus::InProgress => Some(AssignmentStatus::UnderReview),
            AssignmentStatus::UnderReview => Some(AssignmentStatus::Completed),
            AssignmentStatus::Completed | AssignmentStatus::Cancelled => None,
        }
    }

    /// 阶梯上的上一个状态（pending / cancelled 没有前驱）
    pub fn previous(self) -> Option<Self> {
        match self {
            AssignmentStatus::Pending | AssignmentStatus::Cancelled => None,
            AssignmentStatus::InProgress => Some(AssignmentStatus::Pending),
            AssignmentStatus::UnderReview => Some(AssignmentStatus::InProgress),
            AssignmentStatus::Completed => Some(AssignmentStatus::UnderReview),
        }
    }

    /// 是否处于进行中（既非完成也非取消）
    pub fn is_open(self) -> bool {
        !matches!(
            self,
            AssignmentStatus::Completed | AssignmentStatus::Cancelled
        )
    }
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AssignmentStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的任务状态: '{s}'. 支持: pending, in_progress, under_review, completed, cancelled"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AssignmentStatus::Pending => Self::PENDING,
            AssignmentStatus::InProgress => Self::IN_PROGRESS,
            AssignmentStatus::UnderReview => Self::UNDER_REVIEW,
            AssignmentStatus::Completed => Self::COMPLETED,
            AssignmentStatus::Cancelled => Self::CANCELLED,
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PENDING => Ok(AssignmentStatus::Pending),
            Self::IN_PROGRESS => Ok(AssignmentStatus::InProgress),
            Self::UNDER_REVIEW => Ok(AssignmentStatus::UnderReview),
            Self::COMPLETED => Ok(AssignmentStatus::Completed),
            Self::CANCELLED => Ok(AssignmentStatus::Cancelled),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

// 任务类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentKind {
    Essay,
    Dissertation,
    Report,
    Presentation,
    Other,
}

impl<'de> Deserialize<'de> for AssignmentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AssignmentKind>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的任务类型: '{s}'. 支持: essay, dissertation, report, presentation, other"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AssignmentKind::Essay => "essay",
            AssignmentKind::Dissertation => "dissertation",
            AssignmentKind::Report => "report",
            AssignmentKind::Presentation => "presentation",
            AssignmentKind::Other => "other",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AssignmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "essay" => Ok(AssignmentKind::Essay),
            "dissertation" => Ok(AssignmentKind::Dissertation),
            "report" => Ok(AssignmentKind::Report),
            "presentation" => Ok(AssignmentKind::Presentation),
            "other" => Ok(AssignmentKind::Other),
            _ => Err(format!("Invalid assignment kind: {s}")),
        }
    }
}

// 任务优先级
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentPriority {
    High,
    Medium,
    Low,
}

impl<'de> Deserialize<'de> for AssignmentPriority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AssignmentPriority>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的优先级: '{s}'. 支持: high, medium, low"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            AssignmentPriority::High => "high",
            AssignmentPriority::Medium => "medium",
            AssignmentPriority::Low => "low",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for AssignmentPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(AssignmentPriority::High),
            "medium" => Ok(AssignmentPriority::Medium),
            "low" => Ok(AssignmentPriority::Low),
            _ => Err(format!("Invalid assignment priority: {s}")),
        }
    }
}

// 论文章节进度
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct ChapterProgress {
    pub chapter_number: i32,
    pub title: String,
    pub is_completed: bool,
    pub remarks: String,
}

impl ChapterProgress {
    /// 创建时生成的空白章节
    pub fn blank(chapter_number: i32) -> Self {
        Self {
            chapter_number,
            title: format!("Chapter {chapter_number}"),
            is_completed: false,
            remarks: String::new(),
        }
    }
}

// 任务实体
//
// 资金字段约定：price/paid_amount 为客户侧（收入），writer_price/
// writer_paid_amount 为写手侧（支出），sunk_costs 为付给已换掉写手的
// 不可回收金额。可选字段在存储边界统一补默认值，业务层不再散落兜底。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub student_id: i64,
    pub writer_id: Option<i64>,
    pub title: String,
    pub kind: AssignmentKind,
    pub subject: String,
    pub level: String,
    pub priority: AssignmentPriority,
    pub status: AssignmentStatus,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub document_link: Option<String>,
    pub description: Option<String>,

    // 按字数计价的输入
    pub word_count: Option<i64>,
    pub cost_per_word: Option<f64>,
    pub writer_cost_per_word: Option<f64>,

    // 客户侧资金
    pub price: f64,
    pub paid_amount: f64,

    // 写手侧资金
    pub writer_price: f64,
    pub writer_paid_amount: f64,
    pub sunk_costs: f64,

    // 论文扩展
    pub is_dissertation: bool,
    pub total_chapters: Option<i32>,
    pub chapters: Option<Vec<ChapterProgress>>,

    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ladder_forward() {
        assert_eq!(
            AssignmentStatus::Pending.next(),
            Some(AssignmentStatus::InProgress)
        );
        assert_eq!(
            AssignmentStatus::InProgress.next(),
            Some(AssignmentStatus::UnderReview)
        );
        assert_eq!(
            AssignmentStatus::UnderReview.next(),
            Some(AssignmentStatus::Completed)
        );
        assert_eq!(AssignmentStatus::Completed.next(), None);
        assert_eq!(AssignmentStatus::Cancelled.next(), None);
    }

    #[test]
    fn test_status_ladder_backward() {
        assert_eq!(AssignmentStatus::Pending.previous(), None);
        assert_eq!(
            AssignmentStatus::Completed.previous(),
            Some(AssignmentStatus::UnderReview)
        );
        assert_eq!(AssignmentStatus::Cancelled.previous(), None);
    }

    #[test]
    fn test_status_roundtrip() {
        for s in [
            AssignmentStatus::Pending,
            AssignmentStatus::InProgress,
            AssignmentStatus::UnderReview,
            AssignmentStatus::Completed,
            AssignmentStatus::Cancelled,
        ] {
            assert_eq!(s.to_string().parse::<AssignmentStatus>(), Ok(s));
        }
    }

    #[test]
    fn test_is_open() {
        assert!(AssignmentStatus::Pending.is_open());
        assert!(AssignmentStatus::UnderReview.is_open());
        assert!(!AssignmentStatus::Completed.is_open());
        assert!(!AssignmentStatus::Cancelled.is_open());
    }

    #[test]
    fn test_blank_chapter() {
        let ch = ChapterProgress::blank(3);
        assert_eq!(ch.chapter_number, 3);
        assert_eq!(ch.title, "Chapter 3");
        assert!(!ch.is_completed);
        assert!(ch.remarks.is_empty());
    }
}
