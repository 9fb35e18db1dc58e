use super::MarkService;
use crate::errors::Result;
use crate::models::marks::entities::WorkMarks;
use crate::services::require_work;

pub async fn get_marks(service: &MarkService, work_id: i64) -> Result<WorkMarks> {
    let storage = service.storage();
    let work = require_work(storage, work_id).await?;

    let marks = storage.list_marks(work.id).await?;
    Ok(WorkMarks::new(work.id, marks))
}
