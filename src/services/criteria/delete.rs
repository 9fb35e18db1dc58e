use tracing::info;

use super::CriteriaService;
use crate::errors::{Result, RubricError};
use crate::services::require_task;

pub async fn delete_criterion(service: &CriteriaService, criterion_id: i64) -> Result<()> {
    if !service.storage().delete_criterion(criterion_id).await? {
        return Err(RubricError::not_found(format!("评分标准不存在: {criterion_id}")));
    }

    info!("Criterion {} deleted with its marks", criterion_id);
    Ok(())
}

pub async fn delete_group(service: &CriteriaService, group_id: i64) -> Result<()> {
    let storage = service.storage();
    let group = storage
        .get_group(group_id)
        .await?
        .ok_or_else(|| RubricError::not_found(format!("分组不存在: {group_id}")))?;

    if group.is_blocking {
        return Err(RubricError::invalid_operation(
            "阻断分组只能通过删除全部阻断评分标准接口删除",
        ));
    }

    if !storage.delete_group(group_id).await? {
        return Err(RubricError::not_found(format!("分组不存在: {group_id}")));
    }

    info!("Criteria group {} deleted with its criteria and marks", group_id);
    Ok(())
}

/// 没有阻断分组时返回 false，不视为错误
pub async fn delete_all_blocking_criteria(service: &CriteriaService, task_id: i64) -> Result<bool> {
    let storage = service.storage();
    require_task(storage, task_id).await?;

    let deleted = storage.delete_all_blocking_criteria(task_id).await?;
    if deleted {
        info!("Blocking criteria of task {} deleted", task_id);
    }

    Ok(deleted)
}
