use tracing::info;

use super::WorkService;
use crate::errors::{Result, RubricError};
use crate::models::works::{entities::Work, requests::SubmitWorkRequest};
use crate::services::require_task;

/// 提交作品
///
/// 负责评分的研讨课教师由任务所属小组决定；小组没有负责人时无法路由，
/// 返回 FailedPrecondition。重新提交保留已有得分，状态回到 `submitted`。
pub async fn submit(service: &WorkService, req: SubmitWorkRequest) -> Result<Work> {
    let storage = service.storage();
    let task = require_task(storage, req.task_id).await?;

    let seminarist_id = storage
        .get_group_seminarist(task.group_id)
        .await?
        .ok_or_else(|| {
            RubricError::failed_precondition(format!(
                "任务 {} 所属小组 {} 没有负责的研讨课教师",
                task.id, task.group_id
            ))
        })?;

    let work = storage
        .upsert_submission(req.student_id, task.id, req.content_ref, seminarist_id)
        .await?;
    info!(
        "Work {} submitted by student {} for task {}, routed to seminarist {}",
        work.id, work.student_id, work.task_id, seminarist_id
    );

    Ok(work)
}
