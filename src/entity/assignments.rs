//! 任务实体

use sea_orm::entity::prelude::*;

use crate::models::assignments::entities::{
    AssignmentKind, AssignmentPriority, AssignmentStatus, ChapterProgress,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub writer_id: Option<i64>,
    pub title: String,
    pub kind: String,
    pub subject: String,
    pub level: String,
    pub priority: String,
    pub status: String,
    pub deadline: i64,
    pub document_link: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub word_count: Option<i64>,
    pub cost_per_word: Option<f64>,
    pub writer_cost_per_word: Option<f64>,
    pub price: f64,
    pub paid_amount: f64,
    pub writer_price: Option<f64>,
    pub writer_paid_amount: Option<f64>,
    pub sunk_costs: Option<f64>,
    pub is_dissertation: bool,
    pub total_chapters: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub chapters: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::writers::Entity",
        from = "Column::WriterId",
        to = "super::writers::Column::Id"
    )]
    Writer,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::writers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Writer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
//
// 可空资金列在这里统一补 0，业务层拿到的 Assignment 永远是完整形状；
// 章节 JSON 解析失败按无章节处理，不让一条坏数据拖垮整个列表。
impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use chrono::{DateTime, Utc};

        let chapters = self
            .chapters
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<ChapterProgress>>(raw).ok());

        crate::models::assignments::entities::Assignment {
            id: self.id,
            student_id: self.student_id,
            writer_id: self.writer_id,
            title: self.title,
            kind: self
                .kind
                .parse::<AssignmentKind>()
                .unwrap_or(AssignmentKind::Other),
            subject: self.subject,
            level: self.level,
            priority: self
                .priority
                .parse::<AssignmentPriority>()
                .unwrap_or(AssignmentPriority::Medium),
            status: self
                .status
                .parse::<AssignmentStatus>()
                .unwrap_or(AssignmentStatus::Pending),
            deadline: DateTime::<Utc>::from_timestamp(self.deadline, 0).unwrap_or_default(),
            document_link: self.document_link,
            description: self.description,
            word_count: self.word_count,
            cost_per_word: self.cost_per_word,
            writer_cost_per_word: self.writer_cost_per_word,
            price: self.price,
            paid_amount: self.paid_amount,
            writer_price: self.writer_price.unwrap_or_default(),
            writer_paid_amount: self.writer_paid_amount.unwrap_or_default(),
            sunk_costs: self.sunk_costs.unwrap_or_default(),
            is_dissertation: self.is_dissertation,
            total_chapters: self.total_chapters,
            chapters,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
