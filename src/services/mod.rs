pub mod criteria;
pub mod grades;
pub mod marks;
pub mod works;

pub use criteria::CriteriaService;
pub use grades::GradeService;
pub use marks::MarkService;
pub use works::WorkService;

use crate::errors::{Result, RubricError};
use crate::models::{criteria::entities::Criterion, tasks::entities::Task, works::entities::Work};
use crate::storage::Storage;

/// 获取任务，不存在时返回 NotFound
pub(crate) async fn require_task(storage: &dyn Storage, task_id: i64) -> Result<Task> {
    storage
        .get_task(task_id)
        .await?
        .ok_or_else(|| RubricError::not_found(format!("任务不存在: {task_id}")))
}

/// 获取提交，不存在时返回 NotFound
pub(crate) async fn require_work(storage: &dyn Storage, work_id: i64) -> Result<Work> {
    storage
        .get_work(work_id)
        .await?
        .ok_or_else(|| RubricError::not_found(format!("提交不存在: {work_id}")))
}

/// 获取评分标准，不存在时返回 NotFound
pub(crate) async fn require_criterion(storage: &dyn Storage, criterion_id: i64) -> Result<Criterion> {
    storage
        .get_criterion(criterion_id)
        .await?
        .ok_or_else(|| RubricError::not_found(format!("评分标准不存在: {criterion_id}")))
}
