pub mod create;
pub mod delete;
pub mod load;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::criteria::{
    entities::{BlockingCriteria, CriteriaGroup, Criterion, MainCriteriaGroup, MainCriterion},
    requests::{CreateBlockingCriterionRequest, SetScoreCommentRequest, UpdateCriterionRequest},
    responses::CreatedBlockingCriterionResponse,
};
use crate::storage::Storage;

/// 评分标准目录：分组与评分标准的增删改查
pub struct CriteriaService {
    storage: Arc<dyn Storage>,
}

impl CriteriaService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 创建阻断评分标准（阻断分组按需创建）
    pub async fn create_blocking_criterion(
        &self,
        task_id: i64,
        req: CreateBlockingCriterionRequest,
    ) -> Result<CreatedBlockingCriterionResponse> {
        create::create_blocking_criterion(self, task_id, req).await
    }

    // 创建主要评分标准分组
    pub async fn create_main_group(&self, task_id: i64, name: &str) -> Result<CriteriaGroup> {
        create::create_main_group(self, task_id, name).await
    }

    // 在分组下创建主要评分标准
    pub async fn create_main_criterion(&self, group_id: i64, name: &str) -> Result<MainCriterion> {
        create::create_main_criterion(self, group_id, name).await
    }

    // 重命名主要评分标准分组
    pub async fn rename_group(&self, group_id: i64, name: &str) -> Result<CriteriaGroup> {
        update::rename_group(self, group_id, name).await
    }

    // 更新评分标准（主要评分标准只能改名）
    pub async fn update_criterion(
        &self,
        criterion_id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Criterion> {
        update::update_criterion(self, criterion_id, update).await
    }

    // 设置主要评分标准权重
    pub async fn set_criterion_weight(&self, criterion_id: i64, weight: i64) -> Result<MainCriterion> {
        update::set_criterion_weight(self, criterion_id, weight).await
    }

    // 设置主要评分标准的档位评语
    pub async fn set_criterion_score_comment(
        &self,
        criterion_id: i64,
        req: SetScoreCommentRequest,
    ) -> Result<MainCriterion> {
        update::set_criterion_score_comment(self, criterion_id, req).await
    }

    // 删除评分标准
    pub async fn delete_criterion(&self, criterion_id: i64) -> Result<()> {
        delete::delete_criterion(self, criterion_id).await
    }

    // 删除主要评分标准分组
    pub async fn delete_group(&self, group_id: i64) -> Result<()> {
        delete::delete_group(self, group_id).await
    }

    // 删除任务的全部阻断评分标准
    pub async fn delete_all_blocking_criteria(&self, task_id: i64) -> Result<bool> {
        delete::delete_all_blocking_criteria(self, task_id).await
    }

    // 获取任务的阻断评分标准
    pub async fn load_blocking_criteria(&self, task_id: i64) -> Result<BlockingCriteria> {
        load::load_blocking_criteria(self, task_id).await
    }

    // 获取任务的主要评分标准
    pub async fn load_main_criteria(&self, task_id: i64) -> Result<Vec<MainCriteriaGroup>> {
        load::load_main_criteria(self, task_id).await
    }
}
