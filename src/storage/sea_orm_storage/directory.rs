//! 任务目录查询
//!
//! 任务与小组负责人由作业管理模块维护，评分引擎只读。
//! 写入方法仅用于初始化数据与测试。

use super::SeaOrmStorage;
use crate::entity::group_seminarists::{
    ActiveModel as GroupSeminaristActiveModel, Column as GroupSeminaristColumn,
    Entity as GroupSeminarists,
};
use crate::entity::tasks::{ActiveModel as TaskActiveModel, Entity as Tasks};
use crate::errors::{Result, RubricError};
use crate::models::tasks::entities::Task;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, sea_query::OnConflict};

impl SeaOrmStorage {
    /// 通过 ID 获取任务
    pub async fn get_task_impl(&self, task_id: i64) -> Result<Option<Task>> {
        let result = Tasks::find_by_id(task_id)
            .one(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询任务失败", e))?;

        Ok(result.map(|m| m.into_task()))
    }

    /// 获取小组负责的研讨课教师
    pub async fn get_group_seminarist_impl(&self, group_id: i64) -> Result<Option<i64>> {
        let result = GroupSeminarists::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询小组负责人失败", e))?;

        Ok(result.map(|m| m.seminarist_id))
    }

    /// 写入任务（作业管理模块同步数据用）
    pub async fn insert_task(&self, discipline_id: i64, group_id: i64, name: &str) -> Result<Task> {
        let model = TaskActiveModel {
            discipline_id: Set(discipline_id),
            group_id: Set(group_id),
            name: Set(name.to_string()),
            created_at: Set(Self::now()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RubricError::storage("创建任务失败", e))?;

        Ok(result.into_task())
    }

    /// 指定小组负责的研讨课教师（已存在则覆盖）
    pub async fn assign_group_seminarist(&self, group_id: i64, seminarist_id: i64) -> Result<()> {
        let model = GroupSeminaristActiveModel {
            group_id: Set(group_id),
            seminarist_id: Set(seminarist_id),
        };

        GroupSeminarists::insert(model)
            .on_conflict(
                OnConflict::column(GroupSeminaristColumn::GroupId)
                    .update_column(GroupSeminaristColumn::SeminaristId)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| RubricError::storage("设置小组负责人失败", e))?;

        Ok(())
    }
}
