pub mod grade;
pub mod status;
pub mod submit;

use std::sync::Arc;

use crate::config::GradingConfig;
use crate::errors::Result;
use crate::models::works::{
    entities::{GraderRole, Work, WorkStatus},
    requests::SubmitWorkRequest,
};
use crate::storage::Storage;

/// 提交生命周期：提交、重新提交与评分状态迁移
pub struct WorkService {
    storage: Arc<dyn Storage>,
    grading: GradingConfig,
}

impl WorkService {
    pub fn new(storage: Arc<dyn Storage>, grading: GradingConfig) -> Self {
        Self { storage, grading }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 提交或重新提交作品
    pub async fn submit(&self, req: SubmitWorkRequest) -> Result<Work> {
        submit::submit(self, req).await
    }

    // 查询学生在某任务下的提交
    pub async fn find_work(&self, student_id: i64, task_id: i64) -> Result<Option<Work>> {
        status::find_work(self, student_id, task_id).await
    }

    // 标记为已评分
    pub async fn mark_graded(&self, work_id: i64, role: GraderRole) -> Result<Work> {
        grade::mark_graded(self, work_id, role).await
    }

    // 获取提交状态，不存在时为 pending
    pub async fn current_status(&self, work_id: i64) -> Result<WorkStatus> {
        status::current_status(self, work_id).await
    }

    // 按 (学生, 任务) 获取提交状态
    pub async fn status_for(&self, student_id: i64, task_id: i64) -> Result<WorkStatus> {
        status::status_for(self, student_id, task_id).await
    }
}
