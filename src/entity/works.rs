//! 提交实体

use sea_orm::entity::prelude::*;

use crate::models::works::entities::{Work, WorkStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "works")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub task_id: i64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content_ref: Option<String>,
    pub seminarist_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tasks::Entity",
        from = "Column::TaskId",
        to = "super::tasks::Column::Id"
    )]
    Task,
    #[sea_orm(has_many = "super::criterion_marks::Entity")]
    Marks,
}

impl Related<super::tasks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Task.def()
    }
}

impl Related<super::criterion_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_work(self) -> Work {
        use chrono::{DateTime, Utc};

        Work {
            id: self.id,
            student_id: self.student_id,
            task_id: self.task_id,
            // 未知状态按已提交处理，保证评分人仍能看到该提交
            status: self.status.parse().unwrap_or(WorkStatus::Submitted),
            content_ref: self.content_ref,
            seminarist_id: self.seminarist_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
