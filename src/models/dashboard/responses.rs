use serde::Serialize;
use ts_rs::TS;

// 仪表盘统计
//
// 金额字段为逐单差额的直接求和，不做下限截断：超付的单会以负差额
// 抵扣总额，这是有意保留的口径（总额反映真实净应收/净应付）。
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardStats {
    /// 未完结（非 completed / cancelled）任务数
    pub total_pending: i64,
    /// 已过截止且未完成的任务数（含已取消）
    pub total_overdue: i64,
    /// 全部任务的客户应收净额
    pub pending_amount: f64,
    /// 全部任务的写手应付净额
    pub pending_writer_pay: f64,
    /// 未完成的毕业论文数（含已取消）
    pub active_dissertations: i64,
    /// 各状态任务数
    pub status_distribution: StatusDistribution,
}

#[derive(Debug, Clone, Default, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StatusDistribution {
    pub pending: i64,
    pub in_progress: i64,
    pub under_review: i64,
    pub completed: i64,
    pub cancelled: i64,
}

// 仪表盘统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardStatsResponse {
    pub stats: DashboardStats,
    /// 统计生成时刻（秒级时间戳），命中缓存时早于请求时刻
    pub generated_at: i64,
}

// 临近截止条目
//
// should_alert 对每个任务在进入 24 小时告警窗后只为 true 一次，
// 之后的轮询不再重复提醒。
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DeadlineEntry {
    pub assignment_id: i64,
    pub title: String,
    pub student_name: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    pub hours_left: i64,
    pub days_left: i64,
    pub is_overdue: bool,
    pub is_urgent: bool,
    pub should_alert: bool,
}

// 临近截止列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DeadlineListResponse {
    pub items: Vec<DeadlineEntry>,
}
