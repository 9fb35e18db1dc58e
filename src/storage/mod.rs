use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    criteria::{
        entities::{
            BlockingCriteria, BlockingCriterion, CriteriaGroup, Criterion, MainCriteriaGroup,
            MainCriterion, Score,
        },
        requests::{CreateBlockingCriterionRequest, UpdateCriterionRequest},
    },
    marks::entities::CriterionMark,
    tasks::entities::Task,
    works::entities::{Work, WorkStatus},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 任务目录（作业管理模块提供，只读）
    // 获取任务信息
    async fn get_task(&self, task_id: i64) -> Result<Option<Task>>;
    // 获取小组负责的研讨课教师
    async fn get_group_seminarist(&self, group_id: i64) -> Result<Option<i64>>;

    /// 评分标准目录
    // 通过ID获取分组
    async fn get_group(&self, group_id: i64) -> Result<Option<CriteriaGroup>>;
    // 创建阻断评分标准（阻断分组不存在时自动创建），返回分组与新标准
    async fn create_blocking_criterion(
        &self,
        task_id: i64,
        req: CreateBlockingCriterionRequest,
    ) -> Result<(CriteriaGroup, BlockingCriterion)>;
    // 创建主要评分标准分组
    async fn create_main_group(&self, task_id: i64, name: &str) -> Result<CriteriaGroup>;
    // 创建主要评分标准
    async fn create_main_criterion(&self, group_id: i64, name: &str) -> Result<MainCriterion>;
    // 重命名分组
    async fn rename_group(&self, group_id: i64, name: &str) -> Result<Option<CriteriaGroup>>;
    // 通过ID获取评分标准
    async fn get_criterion(&self, criterion_id: i64) -> Result<Option<Criterion>>;
    // 更新阻断评分标准
    async fn update_blocking_criterion(
        &self,
        criterion_id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<BlockingCriterion>>;
    // 重命名主要评分标准
    async fn rename_main_criterion(
        &self,
        criterion_id: i64,
        name: &str,
    ) -> Result<Option<MainCriterion>>;
    // 设置权重
    async fn set_criterion_weight(&self, criterion_id: i64, weight: i32) -> Result<bool>;
    // 设置档位评语
    async fn set_criterion_score_comment(
        &self,
        criterion_id: i64,
        score: Score,
        comment: Option<String>,
    ) -> Result<bool>;
    // 删除评分标准（连同其评分记录）
    async fn delete_criterion(&self, criterion_id: i64) -> Result<bool>;
    // 删除分组（连同其评分标准与评分记录）
    async fn delete_group(&self, group_id: i64) -> Result<bool>;
    // 删除任务的阻断分组及全部阻断评分标准
    async fn delete_all_blocking_criteria(&self, task_id: i64) -> Result<bool>;
    // 加载任务的阻断评分标准
    async fn load_blocking_criteria(&self, task_id: i64) -> Result<BlockingCriteria>;
    // 加载任务的主要评分标准
    async fn load_main_criteria(&self, task_id: i64) -> Result<Vec<MainCriteriaGroup>>;

    /// 评分记录
    // 写入评分（按 (work_id, criterion_id) 覆盖）
    async fn upsert_mark(
        &self,
        work_id: i64,
        criterion_id: i64,
        mark: f64,
        comment: Option<String>,
    ) -> Result<CriterionMark>;
    // 列出提交的全部评分
    async fn list_marks(&self, work_id: i64) -> Result<Vec<CriterionMark>>;

    /// 提交管理
    // 通过ID获取提交
    async fn get_work(&self, work_id: i64) -> Result<Option<Work>>;
    // 获取学生在某任务下的提交
    async fn find_work(&self, student_id: i64, task_id: i64) -> Result<Option<Work>>;
    // 提交或重新提交（状态重置为 submitted）
    async fn upsert_submission(
        &self,
        student_id: i64,
        task_id: i64,
        content_ref: Option<String>,
        seminarist_id: i64,
    ) -> Result<Work>;
    // 条件更新提交状态，expected 为 None 时不校验当前状态
    async fn transition_work_status(
        &self,
        work_id: i64,
        expected: Option<WorkStatus>,
        next: WorkStatus,
    ) -> Result<bool>;
    // 列出学生在某学科下的全部提交
    async fn list_student_works_in_discipline(
        &self,
        student_id: i64,
        discipline_id: i64,
    ) -> Result<Vec<Work>>;
}

pub async fn create_storage(database: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(database).await?;
    Ok(Arc::new(storage))
}
