use tracing::{info, warn};

use super::WorkService;
use crate::errors::{Result, RubricError};
use crate::models::works::entities::{GraderRole, Work, WorkStatus};
use crate::services::require_work;

/// 标记提交为已评分
///
/// 状态守卫开启时以 `submitted` 为前置条件做条件更新，
/// 并发评分只有一方成功，另一方得到 InvalidOperation。
pub async fn mark_graded(service: &WorkService, work_id: i64, role: GraderRole) -> Result<Work> {
    let storage = service.storage();
    let enforce = service.grading.enforce_transitions;

    let work = require_work(storage, work_id).await?;
    let next = work.status.grade_transition(role, enforce)?;
    let expected = enforce.then_some(WorkStatus::Submitted);

    if !storage
        .transition_work_status(work_id, expected, next)
        .await?
    {
        // 读取后状态被并发修改，或提交已被删除
        let current = require_work(storage, work_id).await?;
        warn!(
            "Work {} status changed concurrently to {}, grading by {} rejected",
            work_id, current.status, role
        );
        return Err(RubricError::invalid_operation(format!(
            "当前状态 {} 不允许评分",
            current.status
        )));
    }

    info!("Work {} marked {} by {}", work_id, next, role);
    require_work(storage, work_id).await
}
