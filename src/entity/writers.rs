//! 写手实体

use sea_orm::entity::prelude::*;

use crate::models::writers::entities::WriterRating;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "writers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub specialty: Option<String>,
    pub is_flagged: bool,
    // 三列要么全空（从未评分），要么全有
    pub rating_quality: Option<f64>,
    pub rating_punctuality: Option<f64>,
    pub rating_count: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_writer(self) -> crate::models::writers::entities::Writer {
        use chrono::{DateTime, Utc};

        let rating = match (self.rating_quality, self.rating_punctuality, self.rating_count) {
            (Some(quality), Some(punctuality), Some(count)) if count > 0 => Some(WriterRating {
                quality,
                punctuality,
                count,
            }),
            _ => None,
        };

        crate::models::writers::entities::Writer {
            id: self.id,
            name: self.name,
            contact: self.contact,
            specialty: self.specialty,
            is_flagged: self.is_flagged,
            rating,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
