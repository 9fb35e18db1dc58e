//! 评分标准存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::criteria::{
    ActiveModel as CriterionActiveModel, Column as CriterionColumn, Entity as Criteria,
    score_comment_column,
};
use crate::entity::criteria_groups::{
    ActiveModel as GroupActiveModel, Column as GroupColumn, Entity as CriteriaGroups,
    Model as GroupModel,
};
use crate::entity::criterion_marks::{Column as MarkColumn, Entity as CriterionMarks};
use crate::errors::{Result, RubricError};
use crate::models::criteria::{
    entities::{
        BLOCKING_GROUP_NAME, BlockingCriteria, BlockingCriterion, CriteriaGroup, Criterion,
        DEFAULT_CRITERION_WEIGHT, MainCriteriaGroup, MainCriterion, Score,
    },
    requests::{CreateBlockingCriterionRequest, UpdateCriterionRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait, Value,
    sea_query::{Expr, OnConflict},
};
use tracing::debug;

impl SeaOrmStorage {
    /// 通过 ID 获取分组
    pub async fn get_group_impl(&self, group_id: i64) -> Result<Option<CriteriaGroup>> {
        let result = CriteriaGroups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询分组失败", e))?;

        Ok(result.map(|m| m.into_group()))
    }

    /// 创建阻断评分标准，阻断分组不存在时在同一事务中创建
    pub async fn create_blocking_criterion_impl(
        &self,
        task_id: i64,
        req: CreateBlockingCriterionRequest,
    ) -> Result<(CriteriaGroup, BlockingCriterion)> {
        self.create_blocking_criterion_tx(task_id, &req)
            .await
            .map_err(|e| RubricError::storage("创建阻断评分标准失败", e))
    }

    /// 先插入分组（已存在则忽略）再读取，事务以写语句开始，
    /// SQLite 下并发调用按 busy_timeout 排队获取写锁。
    async fn create_blocking_criterion_tx(
        &self,
        task_id: i64,
        req: &CreateBlockingCriterionRequest,
    ) -> std::result::Result<(CriteriaGroup, BlockingCriterion), DbErr> {
        let now = Self::now();
        let txn = self.db.begin().await?;

        let inserted = CriteriaGroups::insert(GroupActiveModel {
            task_id: Set(task_id),
            name: Set(BLOCKING_GROUP_NAME.to_string()),
            is_blocking: Set(true),
            blocking_task_id: Set(Some(task_id)),
            created_at: Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(GroupColumn::BlockingTaskId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;
        if inserted > 0 {
            debug!("任务 {} 的阻断分组已创建", task_id);
        }

        let group = Self::find_blocking_group(&txn, task_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("任务 {task_id} 的阻断分组")))?;

        let criterion = CriterionActiveModel {
            group_id: Set(group.id),
            name: Set(req.name.clone()),
            description: Set(req.description.clone()),
            comment: Set(req.comment.clone()),
            final_mark: Set(Some(req.final_mark)),
            weight: Set(DEFAULT_CRITERION_WEIGHT),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok((group.into_group(), criterion.into_blocking()))
    }

    async fn find_blocking_group(
        txn: &DatabaseTransaction,
        task_id: i64,
    ) -> std::result::Result<Option<GroupModel>, DbErr> {
        CriteriaGroups::find()
            .filter(GroupColumn::TaskId.eq(task_id))
            .filter(GroupColumn::IsBlocking.eq(true))
            .one(txn)
            .await
    }

    /// 创建主要评分标准分组
    pub async fn create_main_group_impl(&self, task_id: i64, name: &str) -> Result<CriteriaGroup> {
        let model = GroupActiveModel {
            task_id: Set(task_id),
            name: Set(name.to_string()),
            is_blocking: Set(false),
            blocking_task_id: Set(None),
            created_at: Set(Self::now()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RubricError::storage("创建分组失败", e))?;

        Ok(result.into_group())
    }

    /// 创建主要评分标准（默认权重，无档位评语）
    pub async fn create_main_criterion_impl(
        &self,
        group_id: i64,
        name: &str,
    ) -> Result<MainCriterion> {
        let now = Self::now();
        let model = CriterionActiveModel {
            group_id: Set(group_id),
            name: Set(name.to_string()),
            weight: Set(DEFAULT_CRITERION_WEIGHT),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RubricError::storage("创建评分标准失败", e))?;

        Ok(result.into_main())
    }

    /// 重命名分组（阻断分组名称固定，不会被修改）
    pub async fn rename_group_impl(
        &self,
        group_id: i64,
        name: &str,
    ) -> Result<Option<CriteriaGroup>> {
        let result = CriteriaGroups::update_many()
            .col_expr(GroupColumn::Name, Expr::value(name.to_string()))
            .filter(GroupColumn::Id.eq(group_id))
            .filter(GroupColumn::IsBlocking.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| RubricError::storage("重命名分组失败", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_group_impl(group_id).await
    }

    /// 通过 ID 获取评分标准，类型由所属分组决定
    pub async fn get_criterion_impl(&self, criterion_id: i64) -> Result<Option<Criterion>> {
        let result = Criteria::find_by_id(criterion_id)
            .find_also_related(CriteriaGroups)
            .one(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询评分标准失败", e))?;

        Ok(result.and_then(|(criterion, group)| {
            group.map(|g| criterion.into_criterion(g.is_blocking))
        }))
    }

    /// 更新阻断评分标准
    pub async fn update_blocking_criterion_impl(
        &self,
        criterion_id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<BlockingCriterion>> {
        let mut query = Criteria::update_many()
            .col_expr(CriterionColumn::UpdatedAt, Expr::value(Self::now()))
            .filter(CriterionColumn::Id.eq(criterion_id));

        if let Some(name) = update.name {
            query = query.col_expr(CriterionColumn::Name, Expr::value(name));
        }

        if let Some(description) = update.description {
            query = query.col_expr(CriterionColumn::Description, Expr::value(description));
        }

        if let Some(comment) = update.comment {
            query = query.col_expr(CriterionColumn::Comment, Expr::value(comment));
        }

        if let Some(final_mark) = update.final_mark {
            query = query.col_expr(CriterionColumn::FinalMark, Expr::value(final_mark));
        }

        let result = query
            .exec(&self.db)
            .await
            .map_err(|e| RubricError::storage("更新评分标准失败", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        match self.get_criterion_impl(criterion_id).await? {
            Some(Criterion::Blocking(criterion)) => Ok(Some(criterion)),
            _ => Ok(None),
        }
    }

    /// 重命名主要评分标准
    pub async fn rename_main_criterion_impl(
        &self,
        criterion_id: i64,
        name: &str,
    ) -> Result<Option<MainCriterion>> {
        let updated = self
            .update_criterion_column(criterion_id, CriterionColumn::Name, name.to_string())
            .await?;

        if !updated {
            return Ok(None);
        }

        match self.get_criterion_impl(criterion_id).await? {
            Some(Criterion::Main(criterion)) => Ok(Some(criterion)),
            _ => Ok(None),
        }
    }

    /// 设置权重
    pub async fn set_criterion_weight_impl(&self, criterion_id: i64, weight: i32) -> Result<bool> {
        self.update_criterion_column(criterion_id, CriterionColumn::Weight, weight)
            .await
    }

    /// 设置档位评语
    pub async fn set_criterion_score_comment_impl(
        &self,
        criterion_id: i64,
        score: Score,
        comment: Option<String>,
    ) -> Result<bool> {
        self.update_criterion_column(criterion_id, score_comment_column(score), comment)
            .await
    }

    async fn update_criterion_column(
        &self,
        criterion_id: i64,
        column: CriterionColumn,
        value: impl Into<Value>,
    ) -> Result<bool> {
        let result = Criteria::update_many()
            .col_expr(column, Expr::value(value))
            .col_expr(CriterionColumn::UpdatedAt, Expr::value(Self::now()))
            .filter(CriterionColumn::Id.eq(criterion_id))
            .exec(&self.db)
            .await
            .map_err(|e| RubricError::storage("更新评分标准失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除评分标准及其评分记录
    pub async fn delete_criterion_impl(&self, criterion_id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        CriterionMarks::delete_many()
            .filter(MarkColumn::CriterionId.eq(criterion_id))
            .exec(&txn)
            .await
            .map_err(|e| RubricError::storage("删除评分记录失败", e))?;

        let result = Criteria::delete_by_id(criterion_id)
            .exec(&txn)
            .await
            .map_err(|e| RubricError::storage("删除评分标准失败", e))?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// 删除主要评分标准分组（阻断分组不会被删除）
    pub async fn delete_group_impl(&self, group_id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        let group = CriteriaGroups::find_by_id(group_id)
            .filter(GroupColumn::IsBlocking.eq(false))
            .one(&txn)
            .await
            .map_err(|e| RubricError::storage("查询分组失败", e))?;

        let deleted = match group {
            Some(group) => Self::delete_group_cascade(&txn, group.id).await?,
            None => false,
        };

        txn.commit().await?;

        Ok(deleted)
    }

    /// 删除任务的阻断分组及全部阻断评分标准，不存在时返回 false
    pub async fn delete_all_blocking_criteria_impl(&self, task_id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        let group = Self::find_blocking_group(&txn, task_id)
            .await
            .map_err(|e| RubricError::storage("查询阻断分组失败", e))?;

        let deleted = match group {
            Some(group) => Self::delete_group_cascade(&txn, group.id).await?,
            None => false,
        };

        txn.commit().await?;

        Ok(deleted)
    }

    /// 按评分记录 → 评分标准 → 分组的顺序删除
    async fn delete_group_cascade(txn: &DatabaseTransaction, group_id: i64) -> Result<bool> {
        let criterion_ids: Vec<i64> = Criteria::find()
            .select_only()
            .column(CriterionColumn::Id)
            .filter(CriterionColumn::GroupId.eq(group_id))
            .into_tuple()
            .all(txn)
            .await
            .map_err(|e| RubricError::storage("查询评分标准失败", e))?;

        if !criterion_ids.is_empty() {
            CriterionMarks::delete_many()
                .filter(MarkColumn::CriterionId.is_in(criterion_ids))
                .exec(txn)
                .await
                .map_err(|e| RubricError::storage("删除评分记录失败", e))?;
        }

        Criteria::delete_many()
            .filter(CriterionColumn::GroupId.eq(group_id))
            .exec(txn)
            .await
            .map_err(|e| RubricError::storage("删除评分标准失败", e))?;

        let result = CriteriaGroups::delete_by_id(group_id)
            .exec(txn)
            .await
            .map_err(|e| RubricError::storage("删除分组失败", e))?;

        Ok(result.rows_affected > 0)
    }

    /// 加载任务的阻断评分标准
    pub async fn load_blocking_criteria_impl(&self, task_id: i64) -> Result<BlockingCriteria> {
        let group = CriteriaGroups::find()
            .filter(GroupColumn::TaskId.eq(task_id))
            .filter(GroupColumn::IsBlocking.eq(true))
            .one(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询阻断分组失败", e))?;

        let Some(group) = group else {
            return Ok(BlockingCriteria::default());
        };

        let criteria = Criteria::find()
            .filter(CriterionColumn::GroupId.eq(group.id))
            .order_by_asc(CriterionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询阻断评分标准失败", e))?;

        Ok(BlockingCriteria {
            group: Some(group.into_group()),
            criteria: criteria.into_iter().map(|m| m.into_blocking()).collect(),
        })
    }

    /// 加载任务的主要评分标准（按分组聚合）
    pub async fn load_main_criteria_impl(&self, task_id: i64) -> Result<Vec<MainCriteriaGroup>> {
        let groups = CriteriaGroups::find()
            .filter(GroupColumn::TaskId.eq(task_id))
            .filter(GroupColumn::IsBlocking.eq(false))
            .order_by_asc(GroupColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询分组失败", e))?;

        if groups.is_empty() {
            return Ok(vec![]);
        }

        let group_ids: Vec<i64> = groups.iter().map(|g| g.id).collect();
        let criteria = Criteria::find()
            .filter(CriterionColumn::GroupId.is_in(group_ids))
            .order_by_asc(CriterionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RubricError::storage("查询评分标准失败", e))?;

        let mut by_group: HashMap<i64, Vec<MainCriterion>> = HashMap::new();
        for criterion in criteria {
            by_group
                .entry(criterion.group_id)
                .or_default()
                .push(criterion.into_main());
        }

        Ok(groups
            .into_iter()
            .map(|g| MainCriteriaGroup {
                criteria: by_group.remove(&g.id).unwrap_or_default(),
                group: g.into_group(),
            })
            .collect())
    }
}
