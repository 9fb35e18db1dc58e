use tracing::debug;

use super::{GradeService, evaluate};
use crate::errors::Result;
use crate::models::{
    grades::entities::WorkGrade, marks::entities::WorkMarks, works::entities::Work,
};
use crate::services::require_work;

pub async fn evaluate_work(service: &GradeService, work_id: i64) -> Result<WorkGrade> {
    let work = require_work(service.storage(), work_id).await?;
    grade_of(service, &work).await
}

/// 按提交当前所在任务的评分标准计算成绩
pub(crate) async fn grade_of(service: &GradeService, work: &Work) -> Result<WorkGrade> {
    let storage = service.storage();

    let marks = WorkMarks::new(work.id, storage.list_marks(work.id).await?);
    let blocking = storage.load_blocking_criteria(work.task_id).await?;
    let main = storage.load_main_criteria(work.task_id).await?;

    let grade = evaluate(work.id, &blocking, &main, &marks, service.weighting());
    debug!("Work {} evaluated: {:?}", work.id, grade.outcome);

    Ok(grade)
}
