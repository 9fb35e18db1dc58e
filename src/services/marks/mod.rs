pub mod get;
pub mod record;

use std::sync::Arc;

use crate::config::GradingConfig;
use crate::errors::Result;
use crate::models::marks::{
    entities::{CriterionMark, WorkMarks},
    requests::RecordMarkRequest,
};
use crate::storage::Storage;

/// 评分记录：按 (提交, 评分标准) 写入得分，不影响提交状态
pub struct MarkService {
    storage: Arc<dyn Storage>,
    grading: GradingConfig,
}

impl MarkService {
    pub fn new(storage: Arc<dyn Storage>, grading: GradingConfig) -> Self {
        Self { storage, grading }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 记录得分（已存在则覆盖）
    pub async fn record_mark(&self, work_id: i64, req: RecordMarkRequest) -> Result<CriterionMark> {
        record::record_mark(self, work_id, req).await
    }

    // 触发阻断评分标准，得分取该标准的最终分
    pub async fn trigger_blocking_criterion(
        &self,
        work_id: i64,
        criterion_id: i64,
        comment: Option<String>,
    ) -> Result<CriterionMark> {
        record::trigger_blocking_criterion(self, work_id, criterion_id, comment).await
    }

    // 获取提交的全部得分
    pub async fn get_marks(&self, work_id: i64) -> Result<WorkMarks> {
        get::get_marks(self, work_id).await
    }
}
