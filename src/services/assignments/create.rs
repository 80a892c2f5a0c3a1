use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::ledger::pricing;
use crate::models::assignments::{
    entities::{Assignment, AssignmentKind, AssignmentPriority, AssignmentStatus, ChapterProgress},
    requests::CreateAssignmentRequest,
    responses::AssignmentResponse,
};
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

pub async fn create_assignment(
    service: &AssignmentService,
    data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 1. 本地校验，失败时不触发任何存储调用
    if data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "任务标题不能为空",
        )));
    }

    // 2. 归属学生必须存在
    match storage.get_student_by_id(data.student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("学生不存在: {}", data.student_id),
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生失败: {e}"),
                )),
            );
        }
    }

    // 3. 指派的写手（如果有）必须存在
    if let Some(writer_id) = data.writer_id {
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

    // 4. 组装任务实体
    let is_dissertation = data.kind == AssignmentKind::Dissertation;

    // 章节只在创建时根据 total_chapters 生成一次
    let chapters = match (is_dissertation, data.total_chapters) {
        (true, Some(n)) if n > 0 => Some((1..=n).map(ChapterProgress::blank).collect()),
        _ => None,
    };

    let now = chrono::Utc::now();
    let mut assignment = Assignment {
        id: 0, // 由存储分配
        student_id: data.student_id,
        writer_id: data.writer_id,
        title: data.title,
        kind: data.kind,
        subject: data.subject,
        level: data.level,
        priority: data.priority.unwrap_or(AssignmentPriority::Medium),
        status: data.status.unwrap_or(AssignmentStatus::Pending),
        deadline: data.deadline,
        document_link: data.document_link,
        description: data.description,
        word_count: data.word_count,
        cost_per_word: data.cost_per_word,
        writer_cost_per_word: data.writer_cost_per_word,
        price: data.price.unwrap_or_default(),
        paid_amount: data.paid_amount.unwrap_or_default(),
        writer_price: data.writer_price.unwrap_or_default(),
        writer_paid_amount: data.writer_paid_amount.unwrap_or_default(),
        sunk_costs: 0.0,
        is_dissertation,
        total_chapters: data.total_chapters,
        chapters,
        created_at: now,
        updated_at: now,
    };

    // 5. 字数计价：给出字数与单价时派生推荐价
    pricing::apply_word_pricing(&mut assignment);

    // 6. 落库
    match storage.create_assignment(assignment).await {
        Ok(assignment) => {
            tracing::info!(
                "Assignment created: {} (id={})",
                assignment.title,
                assignment.id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignmentResponse::new(assignment),
                "任务创建成功",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建任务失败: {e}"),
            )),
        ),
    }
}
