//! 评分记录存储操作

use super::SeaOrmStorage;
use crate::entity::criterion_marks::{
    ActiveModel as MarkActiveModel, Column as MarkColumn, Entity as CriterionMarks,
};
use crate::errors::{Result, RubricError};
use crate::models::marks::entities::CriterionMark;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, sea_query::OnConflict};

impl SeaOrmStorage {
    /// 写入评分，(work_id, criterion_id) 已存在时覆盖分值与评语
    pub async fn upsert_mark_impl(
        &self,
        work_id: i64,
        criterion_id: i64,
        mark: f64,
        comment: Option<String>,
    ) -> Result<CriterionMark> {
        let model = MarkActiveModel {
            work_id: Set(work_id),
            criterion_id: Set(criterion_id),
            mark: Set(mark),
            comment: Set(comment),
            updated_at: Set(Self::now()),
            ..Default::default()
        };

        CriterionMarks::insert(model)
            .on_conflict(
                OnConflict::columns([MarkColumn::WorkId, MarkColumn::CriterionId])
                    .update_columns([MarkColumn::Mark, MarkColumn::Comment, MarkColumn::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| RubricError::storage("写入评分失败", e))?;

        let saved = CriterionMarks::find()
            .filter(MarkColumn::WorkId.eq(work_id))
            .filter(MarkColumn::CriterionId.eq(criterion_id))
            .one(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询评分失败", e))?
            .ok_or_else(|| RubricError::database_operation("写入评分后未能读取记录"))?;

        Ok(saved.into_mark())
    }

    /// 列出提交的全部评分
    pub async fn list_marks_impl(&self, work_id: i64) -> Result<Vec<CriterionMark>> {
        let marks = CriterionMarks::find()
            .filter(MarkColumn::WorkId.eq(work_id))
            .order_by_asc(MarkColumn::CriterionId)
            .all(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询评分失败", e))?;

        Ok(marks.into_iter().map(|m| m.into_mark()).collect())
    }
}
