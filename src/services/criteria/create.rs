use tracing::info;

use super::CriteriaService;
use crate::errors::{Result, RubricError};
use crate::models::criteria::{
    entities::{CriteriaGroup, MainCriterion},
    requests::CreateBlockingCriterionRequest,
    responses::CreatedBlockingCriterionResponse,
};
use crate::services::require_task;
use crate::utils::validate::{validate_final_mark, validate_name};

pub async fn create_blocking_criterion(
    service: &CriteriaService,
    task_id: i64,
    mut req: CreateBlockingCriterionRequest,
) -> Result<CreatedBlockingCriterionResponse> {
    req.name = validate_name("评分标准名称", &req.name)?;
    validate_final_mark(req.final_mark)?;

    let storage = service.storage();
    require_task(storage, task_id).await?;

    let (group, criterion) = storage.create_blocking_criterion(task_id, req).await?;
    info!(
        "Blocking criterion {} created in group {} for task {}",
        criterion.id, group.id, task_id
    );

    Ok(CreatedBlockingCriterionResponse {
        group_id: group.id,
        criterion,
    })
}

pub async fn create_main_group(
    service: &CriteriaService,
    task_id: i64,
    name: &str,
) -> Result<CriteriaGroup> {
    let name = validate_name("分组名称", name)?;

    let storage = service.storage();
    require_task(storage, task_id).await?;

    let group = storage.create_main_group(task_id, &name).await?;
    info!("Criteria group {} created for task {}", group.id, task_id);

    Ok(group)
}

pub async fn create_main_criterion(
    service: &CriteriaService,
    group_id: i64,
    name: &str,
) -> Result<MainCriterion> {
    let name = validate_name("评分标准名称", name)?;

    let storage = service.storage();
    let group = storage
        .get_group(group_id)
        .await?
        .ok_or_else(|| RubricError::not_found(format!("分组不存在: {group_id}")))?;

    if group.is_blocking {
        return Err(RubricError::invalid_operation(
            "阻断分组只能通过创建阻断评分标准接口添加",
        ));
    }

    let criterion = storage.create_main_criterion(group_id, &name).await?;
    info!("Main criterion {} created in group {}", criterion.id, group_id);

    Ok(criterion)
}
