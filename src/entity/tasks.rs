//! 任务实体（由作业管理模块写入）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub discipline_id: i64,
    pub group_id: i64,
    pub name: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::criteria_groups::Entity")]
    CriteriaGroups,
    #[sea_orm(has_many = "super::works::Entity")]
    Works,
}

impl Related<super::criteria_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CriteriaGroups.def()
    }
}

impl Related<super::works::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Works.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_task(self) -> crate::models::tasks::entities::Task {
        crate::models::tasks::entities::Task {
            id: self.id,
            discipline_id: self.discipline_id,
            group_id: self.group_id,
            name: self.name,
        }
    }
}
