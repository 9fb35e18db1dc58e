use super::WorkService;
use crate::errors::Result;
use crate::models::works::entities::{Work, WorkStatus};

pub async fn find_work(service: &WorkService, student_id: i64, task_id: i64) -> Result<Option<Work>> {
    service.storage().find_work(student_id, task_id).await
}

pub async fn current_status(service: &WorkService, work_id: i64) -> Result<WorkStatus> {
    let work = service.storage().get_work(work_id).await?;
    Ok(status_of(work.as_ref()))
}

pub async fn status_for(service: &WorkService, student_id: i64, task_id: i64) -> Result<WorkStatus> {
    let work = service.storage().find_work(student_id, task_id).await?;
    Ok(status_of(work.as_ref()))
}

/// 没有提交记录即为 pending
fn status_of(work: Option<&Work>) -> WorkStatus {
    work.map_or(WorkStatus::Pending, |w| w.status)
}
