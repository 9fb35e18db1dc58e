use tracing::{debug, info};

use super::MarkService;
use crate::errors::{Result, RubricError};
use crate::models::{
    criteria::entities::Criterion,
    marks::{entities::CriterionMark, requests::RecordMarkRequest},
    works::entities::Work,
};
use crate::services::{require_criterion, require_work};
use crate::storage::Storage;
use crate::utils::validate::validate_mark;

pub async fn record_mark(
    service: &MarkService,
    work_id: i64,
    req: RecordMarkRequest,
) -> Result<CriterionMark> {
    let storage = service.storage();
    let (work, criterion) = load_target(storage, work_id, req.criterion_id).await?;

    validate_mark(
        req.mark,
        criterion.is_blocking(),
        service.grading.strict_mark_range,
    )?;

    let mark = storage
        .upsert_mark(work.id, criterion.id(), req.mark, req.comment)
        .await?;
    debug!(
        "Mark {} recorded for work {} on criterion {}",
        mark.mark, work.id, mark.criterion_id
    );

    Ok(mark)
}

/// 触发阻断评分标准
///
/// 得分取标准的最终分；未提供评语时沿用标准自带的评语。
pub async fn trigger_blocking_criterion(
    service: &MarkService,
    work_id: i64,
    criterion_id: i64,
    comment: Option<String>,
) -> Result<CriterionMark> {
    let storage = service.storage();
    let (work, criterion) = load_target(storage, work_id, criterion_id).await?;

    let Criterion::Blocking(criterion) = criterion else {
        return Err(RubricError::invalid_operation(format!(
            "评分标准 {criterion_id} 不是阻断评分标准"
        )));
    };

    let comment = comment.or(criterion.comment);
    let mark = storage
        .upsert_mark(work.id, criterion.id, criterion.final_mark, comment)
        .await?;
    info!(
        "Blocking criterion {} triggered for work {} with mark {}",
        criterion.id, work.id, mark.mark
    );

    Ok(mark)
}

/// 加载提交与评分标准，并确认标准属于提交所在的任务
async fn load_target(
    storage: &dyn Storage,
    work_id: i64,
    criterion_id: i64,
) -> Result<(Work, Criterion)> {
    let work = require_work(storage, work_id).await?;
    let criterion = require_criterion(storage, criterion_id).await?;

    let group = storage
        .get_group(criterion.group_id())
        .await?
        .ok_or_else(|| RubricError::not_found(format!("评分标准不存在: {criterion_id}")))?;

    if group.task_id != work.task_id {
        return Err(RubricError::invalid_argument(format!(
            "评分标准 {criterion_id} 不属于提交 {work_id} 所在的任务"
        )));
    }

    Ok((work, criterion))
}
