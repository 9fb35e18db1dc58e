use super::CriteriaService;
use crate::errors::Result;
use crate::models::criteria::entities::{BlockingCriteria, MainCriteriaGroup};
use crate::services::require_task;

pub async fn load_blocking_criteria(
    service: &CriteriaService,
    task_id: i64,
) -> Result<BlockingCriteria> {
    let storage = service.storage();
    require_task(storage, task_id).await?;

    storage.load_blocking_criteria(task_id).await
}

pub async fn load_main_criteria(
    service: &CriteriaService,
    task_id: i64,
) -> Result<Vec<MainCriteriaGroup>> {
    let storage = service.storage();
    require_task(storage, task_id).await?;

    storage.load_main_criteria(task_id).await
}
