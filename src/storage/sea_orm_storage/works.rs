//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::tasks::{Column as TaskColumn, Entity as Tasks};
use crate::entity::works::{ActiveModel as WorkActiveModel, Column as WorkColumn, Entity as Works};
use crate::errors::{Result, RubricError};
use crate::models::works::entities::{Work, WorkStatus};
use sea_orm::{
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    sea_query::{Expr, OnConflict},
};

impl SeaOrmStorage {
    /// 通过 ID 获取提交
    pub async fn get_work_impl(&self, work_id: i64) -> Result<Option<Work>> {
        let result = Works::find_by_id(work_id)
            .one(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询提交失败", e))?;

        Ok(result.map(|m| m.into_work()))
    }

    /// 获取学生在某任务下的提交
    pub async fn find_work_impl(&self, student_id: i64, task_id: i64) -> Result<Option<Work>> {
        let result = Works::find()
            .filter(WorkColumn::StudentId.eq(student_id))
            .filter(WorkColumn::TaskId.eq(task_id))
            .one(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询提交失败", e))?;

        Ok(result.map(|m| m.into_work()))
    }

    /// 提交或重新提交
    ///
    /// 同一学生同一任务只保留一条记录，重新提交会覆盖内容引用与负责教师，
    /// 并把状态重置为 `submitted`。
    pub async fn upsert_submission_impl(
        &self,
        student_id: i64,
        task_id: i64,
        content_ref: Option<String>,
        seminarist_id: i64,
    ) -> Result<Work> {
        let now = Self::now();
        let model = WorkActiveModel {
            student_id: Set(student_id),
            task_id: Set(task_id),
            status: Set(WorkStatus::Submitted.to_string()),
            content_ref: Set(content_ref),
            seminarist_id: Set(seminarist_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Works::insert(model)
            .on_conflict(
                OnConflict::columns([WorkColumn::StudentId, WorkColumn::TaskId])
                    .update_columns([
                        WorkColumn::Status,
                        WorkColumn::ContentRef,
                        WorkColumn::SeminaristId,
                        WorkColumn::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| RubricError::storage("保存提交失败", e))?;

        self.find_work_impl(student_id, task_id)
            .await?
            .ok_or_else(|| RubricError::database_operation("保存提交后未能读取记录"))
    }

    /// 条件更新提交状态
    ///
    /// `expected` 不为空时仅在当前状态匹配时更新，返回是否有记录被修改。
    pub async fn transition_work_status_impl(
        &self,
        work_id: i64,
        expected: Option<WorkStatus>,
        next: WorkStatus,
    ) -> Result<bool> {
        let mut query = Works::update_many()
            .col_expr(WorkColumn::Status, Expr::value(next.to_string()))
            .col_expr(WorkColumn::UpdatedAt, Expr::value(Self::now()))
            .filter(WorkColumn::Id.eq(work_id));

        if let Some(expected) = expected {
            query = query.filter(WorkColumn::Status.eq(expected.as_str()));
        }

        let result = query
            .exec(&self.db)
            .await
            .map_err(|e| RubricError::storage("更新提交状态失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出学生在某学科下的全部提交
    pub async fn list_student_works_in_discipline_impl(
        &self,
        student_id: i64,
        discipline_id: i64,
    ) -> Result<Vec<Work>> {
        let works = Works::find()
            .inner_join(Tasks)
            .filter(TaskColumn::DisciplineId.eq(discipline_id))
            .filter(WorkColumn::StudentId.eq(student_id))
            .order_by_asc(WorkColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询学科提交失败", e))?;

        Ok(works.into_iter().map(|m| m.into_work()).collect())
    }
}
