//! 评分记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "criterion_marks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub work_id: i64,
    pub criterion_id: i64,
    pub mark: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::works::Entity",
        from = "Column::WorkId",
        to = "super::works::Column::Id"
    )]
    Work,
    #[sea_orm(
        belongs_to = "super::criteria::Entity",
        from = "Column::CriterionId",
        to = "super::criteria::Column::Id"
    )]
    Criterion,
}

impl Related<super::works::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Work.def()
    }
}

impl Related<super::criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Criterion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_mark(self) -> crate::models::marks::entities::CriterionMark {
        use chrono::{DateTime, Utc};

        crate::models::marks::entities::CriterionMark {
            work_id: self.work_id,
            criterion_id: self.criterion_id,
            mark: self.mark,
            comment: self.comment,
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
