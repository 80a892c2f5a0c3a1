use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::students::Entity as Students;
use crate::entity::writers::Entity as Writers;
use crate::errors::{Result, TaskmasterError};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::{Assignment, AssignmentStatus},
        requests::AssignmentListQuery,
        responses::AssignmentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    fn serialize_chapters(assignment: &Assignment) -> Result<Option<String>> {
        assignment
            .chapters
            .as_ref()
            .map(|chs| serde_json::to_string(chs))
            .transpose()
            .map_err(|e| TaskmasterError::serialization(format!("章节序列化失败: {e}")))
    }

    /// 创建任务（ID 与时间戳由数据库分配）
    pub async fn create_assignment_impl(&self, assignment: Assignment) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();
        let chapters = Self::serialize_chapters(&assignment)?;

        let model = ActiveModel {
            student_id: Set(assignment.student_id),
            writer_id: Set(assignment.writer_id),
            title: Set(assignment.title),
            kind: Set(assignment.kind.to_string()),
            subject: Set(assignment.subject),
            level: Set(assignment.level),
            priority: Set(assignment.priority.to_string()),
            status: Set(assignment.status.to_string()),
            deadline: Set(assignment.deadline.timestamp()),
            document_link: Set(assignment.document_link),
            description: Set(assignment.description),
            word_count: Set(assignment.word_count),
            cost_per_word: Set(assignment.cost_per_word),
            writer_cost_per_word: Set(assignment.writer_cost_per_word),
            price: Set(assignment.price),
            paid_amount: Set(assignment.paid_amount),
            writer_price: Set(Some(assignment.writer_price)),
            writer_paid_amount: Set(Some(assignment.writer_paid_amount)),
            sunk_costs: Set(Some(assignment.sunk_costs)),
            is_dissertation: Set(assignment.is_dissertation),
            total_chapters: Set(assignment.total_chapters),
            chapters: Set(chapters),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("创建任务失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取任务
    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询任务失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出任务
    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Subject.contains(&escaped))
                    .add(Column::Level.contains(&escaped)),
            );
        }

        // 状态筛选
        if let Some(status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        // 归属筛选
        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }
        if let Some(writer_id) = query.writer_id {
            select = select.filter(Column::WriterId.eq(writer_id));
        }

        // 逾期筛选：截止已过且未完成
        if query.overdue_only.unwrap_or(false) {
            let now = chrono::Utc::now().timestamp();
            select = select.filter(
                Condition::all()
                    .add(Column::Deadline.lt(now))
                    .add(Column::Status.ne(AssignmentStatus::COMPLETED)),
            );
        }

        // 排序：先截止的在前
        select = select.order_by_asc(Column::Deadline);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询任务总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询任务页数失败: {e}")))?;

        let assignments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询任务列表失败: {e}")))?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 全量列出任务
    pub async fn list_all_assignments_impl(&self) -> Result<Vec<Assignment>> {
        let assignments = Assignments::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询任务列表失败: {e}")))?;

        Ok(assignments
            .into_iter()
            .map(|m| m.into_assignment())
            .collect())
    }

    /// 某学生名下的全部任务
    pub async fn list_assignments_for_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Assignment>> {
        let assignments = Assignments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Deadline)
            .all(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询学生任务失败: {e}")))?;

        Ok(assignments
            .into_iter()
            .map(|m| m.into_assignment())
            .collect())
    }

    /// 整体替换式更新任务
    ///
    /// 服务层把请求合并进已加载的任务并跑完账本规则后整体写回，
    /// 结算/换手等多字段变更因此在一条 UPDATE 里落库。
    pub async fn update_assignment_impl(
        &self,
        id: i64,
        assignment: Assignment,
    ) -> Result<Option<Assignment>> {
        // 先检查任务是否存在
        let existing = self.get_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();
        let chapters = Self::serialize_chapters(&assignment)?;

        let model = ActiveModel {
            id: Set(id),
            student_id: Set(assignment.student_id),
            writer_id: Set(assignment.writer_id),
            title: Set(assignment.title),
            kind: Set(assignment.kind.to_string()),
            subject: Set(assignment.subject),
            level: Set(assignment.level),
            priority: Set(assignment.priority.to_string()),
            status: Set(assignment.status.to_string()),
            deadline: Set(assignment.deadline.timestamp()),
            document_link: Set(assignment.document_link),
            description: Set(assignment.description),
            word_count: Set(assignment.word_count),
            cost_per_word: Set(assignment.cost_per_word),
            writer_cost_per_word: Set(assignment.writer_cost_per_word),
            price: Set(assignment.price),
            paid_amount: Set(assignment.paid_amount),
            writer_price: Set(Some(assignment.writer_price)),
            writer_paid_amount: Set(Some(assignment.writer_paid_amount)),
            sunk_costs: Set(Some(assignment.sunk_costs)),
            is_dissertation: Set(assignment.is_dissertation),
            total_chapters: Set(assignment.total_chapters),
            chapters: Set(chapters),
            updated_at: Set(now),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("更新任务失败: {e}")))?;

        self.get_assignment_by_id_impl(id).await
    }

    /// 删除任务
    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("删除任务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 清空业务数据（替换式还原用），按外键依赖顺序删除
    pub async fn purge_business_data_impl(&self) -> Result<()> {
        Assignments::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("清空任务失败: {e}")))?;

        Students::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("清空学生失败: {e}")))?;

        Writers::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("清空写手失败: {e}")))?;

        Ok(())
    }
}
