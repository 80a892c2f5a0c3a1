use super::SeaOrmStorage;
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::writers::{ActiveModel, Column, Entity as Writers};
use crate::errors::{Result, TaskmasterError};
use crate::models::{
    PaginationInfo,
    writers::{
        entities::{Writer, WriterRating},
        requests::{CreateWriterRequest, UpdateWriterRequest, WriterListQuery},
        responses::WriterListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建写手
    pub async fn create_writer_impl(&self, req: CreateWriterRequest) -> Result<Writer> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            contact: Set(req.contact),
            specialty: Set(req.specialty),
            is_flagged: Set(req.is_flagged.unwrap_or(false)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("创建写手失败: {e}")))?;

        Ok(result.into_writer())
    }

    /// 通过 ID 获取写手
    pub async fn get_writer_by_id_impl(&self, id: i64) -> Result<Option<Writer>> {
        let result = Writers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询写手失败: {e}")))?;

        Ok(result.map(|m| m.into_writer()))
    }

    /// 分页列出写手
    pub async fn list_writers_with_pagination_impl(
        &self,
        query: WriterListQuery,
    ) -> Result<WriterListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Writers::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::Contact.contains(&escaped))
                    .add(Column::Specialty.contains(&escaped)),
            );
        }

        // 标记筛选
        if let Some(flagged) = query.flagged {
            select = select.filter(Column::IsFlagged.eq(flagged));
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询写手总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询写手页数失败: {e}")))?;

        let writers = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询写手列表失败: {e}")))?;

        Ok(WriterListResponse {
            items: writers.into_iter().map(|m| m.into_writer()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 全量列出写手
    pub async fn list_all_writers_impl(&self) -> Result<Vec<Writer>> {
        let writers = Writers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("查询写手列表失败: {e}")))?;

        Ok(writers.into_iter().map(|m| m.into_writer()).collect())
    }

    /// 更新写手信息
    pub async fn update_writer_impl(
        &self,
        id: i64,
        update: UpdateWriterRequest,
    ) -> Result<Option<Writer>> {
        // 先检查写手是否存在
        let existing = self.get_writer_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(contact) = update.contact {
            model.contact = Set(contact);
        }

        if let Some(specialty) = update.specialty {
            model.specialty = Set(Some(specialty));
        }

        if let Some(is_flagged) = update.is_flagged {
            model.is_flagged = Set(is_flagged);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("更新写手失败: {e}")))?;

        self.get_writer_by_id_impl(id).await
    }

    /// 写入累计评分（三列一起更新）
    pub async fn update_writer_rating_impl(&self, id: i64, rating: WriterRating) -> Result<bool> {
        use sea_orm::sea_query::Expr;

        let now = chrono::Utc::now().timestamp();

        let result = Writers::update_many()
            .col_expr(Column::RatingQuality, Expr::value(rating.quality))
            .col_expr(Column::RatingPunctuality, Expr::value(rating.punctuality))
            .col_expr(Column::RatingCount, Expr::value(rating.count))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("更新写手评分失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除写手
    pub async fn delete_writer_impl(&self, id: i64) -> Result<bool> {
        let result = Writers::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("删除写手失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写手当前在任的任务数
    pub async fn count_assignments_for_writer_impl(&self, writer_id: i64) -> Result<i64> {
        let count = Assignments::find()
            .filter(AssignmentColumn::WriterId.eq(writer_id))
            .count(&self.db)
            .await
            .map_err(|e| TaskmasterError::database_operation(format!("统计写手任务失败: {e}")))?;

        Ok(count as i64)
    }
}
