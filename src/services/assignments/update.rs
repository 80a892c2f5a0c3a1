use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::ledger::pricing;
use crate::models::assignments::{
    entities::{Assignment, AssignmentKind, AssignmentStatus, ChapterProgress},
    requests::UpdateAssignmentRequest,
    responses::AssignmentResponse,
};
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

/// 把编辑请求合并进已加载的任务，跑完账本规则后整体写回。
///
/// 评分提示只在本次保存令任务首次进入 completed 且有在任写手时下发，
/// 对已完成任务重复保存 completed 不会再次提示。
pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    data: UpdateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 本地校验
    if let Some(ref title) = data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "任务标题不能为空",
        )));
    }

    // 2. 加载现有任务
    let mut assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                format!("任务不存在: {assignment_id}"),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询任务失败: {e}"),
                )),
            );
        }
    };

    let previous_status = assignment.status;

    // 3. 新指派的写手必须存在
    if let Some(writer_id) = data.writer_id
        && assignment.writer_id != Some(writer_id)
    {
        match storage.get_writer_by_id(writer_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::WriterNotFound,
                    format!("写手不存在: {writer_id}"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询写手失败: {e}"),
                    )),
                );
            }
        }
    }

    // 4. 合并请求字段
    let reprice = touches_pricing_inputs(&data);
    merge_update(&mut assignment, data);

    // 5. 字数计价重算。派生价只是推荐价，仅在本次请求动过计价输入时
    //    才重算，手工录入的价格不会被无关编辑冲掉
    if reprice {
        pricing::apply_word_pricing(&mut assignment);
    }

    // 6. 评分提示：首次进入 completed 且有在任写手
    let rating_due = rating_due(previous_status, assignment.status, assignment.writer_id);

    // 7. 整体写回
    match storage.update_assignment(assignment_id, assignment).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AssignmentResponse {
                assignment,
                rating_due,
            },
            "任务更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            format!("任务不存在: {assignment_id}"),
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新任务失败: {e}"),
            )),
        ),
    }
}

// 请求是否动过按字数计价的输入
fn touches_pricing_inputs(data: &UpdateAssignmentRequest) -> bool {
    data.word_count.is_some() || data.cost_per_word.is_some() || data.writer_cost_per_word.is_some()
}

/// 本次状态变化是否应提示给写手评分。
///
/// 只在首次进入 completed 且有在任写手时返回写手 ID；
/// 对已完成任务重复保存 completed 不会再次提示（防止重复计分）。
pub(super) fn rating_due(
    previous: AssignmentStatus,
    current: AssignmentStatus,
    writer_id: Option<i64>,
) -> Option<i64> {
    (current == AssignmentStatus::Completed && previous != AssignmentStatus::Completed)
        .then_some(writer_id)
        .flatten()
}

// 合并编辑请求。writer_id 只能换人不能清空，解绑走换手接口。
fn merge_update(assignment: &mut Assignment, data: UpdateAssignmentRequest) {
    if let Some(writer_id) = data.writer_id {
        assignment.writer_id = Some(writer_id);
    }
    if let Some(title) = data.title {
        assignment.title = title;
    }
    if let Some(kind) = data.kind {
        assignment.kind = kind;
        // 每次保存都维持 is_dissertation == (kind == Dissertation)
        assignment.is_dissertation = kind == AssignmentKind::Dissertation;
    }
    if let Some(subject) = data.subject {
        assignment.subject = subject;
    }
    if let Some(level) = data.level {
        assignment.level = level;
    }
    if let Some(priority) = data.priority {
        assignment.priority = priority;
    }
    if let Some(status) = data.status {
        assignment.status = status;
    }
    if let Some(deadline) = data.deadline {
        assignment.deadline = deadline;
    }
    if let Some(document_link) = data.document_link {
        assignment.document_link = Some(document_link);
    }
    if let Some(description) = data.description {
        assignment.description = Some(description);
    }
    if let Some(word_count) = data.word_count {
        assignment.word_count = Some(word_count);
    }
    if let Some(cost_per_word) = data.cost_per_word {
        assignment.cost_per_word = Some(cost_per_word);
    }
    if let Some(writer_cost_per_word) = data.writer_cost_per_word {
        assignment.writer_cost_per_word = Some(writer_cost_per_word);
    }
    if let Some(price) = data.price {
        assignment.price = price;
    }
    if let Some(paid_amount) = data.paid_amount {
        assignment.paid_amount = paid_amount;
    }
    if let Some(writer_price) = data.writer_price {
        assignment.writer_price = writer_price;
    }
    if let Some(writer_paid_amount) = data.writer_paid_amount {
        assignment.writer_paid_amount = writer_paid_amount;
    }
    if let Some(sunk_costs) = data.sunk_costs {
        // 手工修正入口，正常累加只走换手流程
        assignment.sunk_costs = sunk_costs;
    }

    // 章节：显式提交的列表优先；否则章节数变化时同步增删
    if let Some(chapters) = data.chapters {
        assignment.total_chapters = data.total_chapters.or(assignment.total_chapters);
        assignment.chapters = Some(chapters);
    } else if let Some(total) = data.total_chapters {
        assignment.total_chapters = Some(total);
        resize_chapters(assignment, total);
    }
}

// 章节数被编辑后同步章节列表：扩张补空白章节，收缩截断尾部
fn resize_chapters(assignment: &mut Assignment, total: i32) {
    if total <= 0 {
        assignment.chapters = None;
        return;
    }
    let mut chapters = assignment.chapters.take().unwrap_or_default();
    let current = chapters.len() as i32;
    if total > current {
        chapters.extend((current + 1..=total).map(ChapterProgress::blank));
    } else {
        chapters.truncate(total as usize);
    }
    assignment.chapters = Some(chapters);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assignments::entities::{AssignmentPriority, AssignmentStatus};

    fn empty_update() -> UpdateAssignmentRequest {
        UpdateAssignmentRequest {
            writer_id: None,
            title: None,
            kind: None,
            subject: None,
            level: None,
            priority: None,
            status: None,
            deadline: None,
            document_link: None,
            description: None,
            word_count: None,
            cost_per_word: None,
            writer_cost_per_word: None,
            price: None,
            paid_amount: None,
            writer_price: None,
            writer_paid_amount: None,
            sunk_costs: None,
            total_chapters: None,
            chapters: None,
        }
    }

    fn dissertation(total: i32) -> Assignment {
        Assignment {
            id: 1,
            student_id: 1,
            writer_id: None,
            title: "PhD thesis".to_string(),
            kind: AssignmentKind::Dissertation,
            subject: "Physics".to_string(),
            level: "PhD".to_string(),
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
            is_dissertation: true,
            total_chapters: Some(total),
            chapters: Some((1..=total).map(ChapterProgress::blank).collect()),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_resize_grows_with_blank_chapters() {
        let mut a = dissertation(3);
        if let Some(chs) = a.chapters.as_mut() {
            chs[0].is_completed = true;
            chs[0].title = "Introduction".to_string();
        }
        resize_chapters(&mut a, 5);
        let chs = a.chapters.as_ref().unwrap();
        assert_eq!(chs.len(), 5);
        // 已有章节保持不变
        assert!(chs[0].is_completed);
        assert_eq!(chs[0].title, "Introduction");
        // 新章节是空白的
        assert_eq!(chs[4].chapter_number, 5);
        assert!(!chs[4].is_completed);
    }

    #[test]
    fn test_resize_shrinks_from_tail() {
        let mut a = dissertation(5);
        resize_chapters(&mut a, 2);
        let chs = a.chapters.as_ref().unwrap();
        assert_eq!(chs.len(), 2);
        assert_eq!(chs[1].chapter_number, 2);
    }

    #[test]
    fn test_resize_to_zero_clears_chapters() {
        let mut a = dissertation(3);
        resize_chapters(&mut a, 0);
        assert!(a.chapters.is_none());
    }

    #[test]
    fn test_kind_change_keeps_dissertation_flag_in_sync() {
        let mut a = dissertation(3);
        let update = UpdateAssignmentRequest {
            kind: Some(AssignmentKind::Essay),
            ..empty_update()
        };
        merge_update(&mut a, update);
        assert!(!a.is_dissertation);
        assert_eq!(a.kind, AssignmentKind::Essay);
    }

    #[test]
    fn test_manual_price_survives_unrelated_update() {
        // 库里存着计价输入，但本次请求只改手工价格
        let mut a = dissertation(3);
        a.word_count = Some(1000);
        a.cost_per_word = Some(2.0);
        a.price = 2000.0;

        let update = UpdateAssignmentRequest {
            price: Some(2500.0),
            ..empty_update()
        };
        let reprice = touches_pricing_inputs(&update);
        merge_update(&mut a, update);
        if reprice {
            crate::ledger::pricing::apply_word_pricing(&mut a);
        }
        // 手工价格保留，不被字数派生价冲掉
        assert_eq!(a.price, 2500.0);
    }

    #[test]
    fn test_touched_word_count_rederives_price() {
        let mut a = dissertation(3);
        a.cost_per_word = Some(2.0);
        a.price = 2500.0;

        let update = UpdateAssignmentRequest {
            word_count: Some(1500),
            ..empty_update()
        };
        assert!(touches_pricing_inputs(&update));
        merge_update(&mut a, update);
        crate::ledger::pricing::apply_word_pricing(&mut a);
        assert_eq!(a.price, 3000.0);
    }

    #[test]
    fn test_rating_due_only_on_first_completion() {
        use AssignmentStatus::{Completed, UnderReview};

        // 首次进入 completed 且有写手在任
        assert_eq!(rating_due(UnderReview, Completed, Some(9)), Some(9));
        // 已完成任务重复保存 completed 不再提示
        assert_eq!(rating_due(Completed, Completed, Some(9)), None);
        // 没有写手在任时不提示
        assert_eq!(rating_due(UnderReview, Completed, None), None);
        // 没进入 completed 不提示
        assert_eq!(rating_due(UnderReview, UnderReview, Some(9)), None);
    }
}
