use tracing::info;

use super::CriteriaService;
use crate::errors::{Result, RubricError};
use crate::models::criteria::{
    entities::{CriteriaGroup, Criterion, MainCriterion},
    requests::{SetScoreCommentRequest, UpdateCriterionRequest},
};
use crate::services::require_criterion;
use crate::storage::Storage;
use crate::utils::validate::{validate_final_mark, validate_name, validate_score, validate_weight};

pub async fn rename_group(
    service: &CriteriaService,
    group_id: i64,
    name: &str,
) -> Result<CriteriaGroup> {
    let name = validate_name("分组名称", name)?;

    let storage = service.storage();
    let group = storage
        .get_group(group_id)
        .await?
        .ok_or_else(|| RubricError::not_found(format!("分组不存在: {group_id}")))?;

    if group.is_blocking {
        return Err(RubricError::invalid_operation("阻断分组名称不可修改"));
    }

    storage
        .rename_group(group_id, &name)
        .await?
        .ok_or_else(|| RubricError::not_found(format!("分组不存在: {group_id}")))
}

/// 更新评分标准
///
/// 阻断评分标准可修改名称、描述、评语与最终分；主要评分标准只能修改名称，
/// 传入其他字段返回 InvalidArgument。
pub async fn update_criterion(
    service: &CriteriaService,
    criterion_id: i64,
    mut update: UpdateCriterionRequest,
) -> Result<Criterion> {
    if let Some(name) = &update.name {
        update.name = Some(validate_name("评分标准名称", name)?);
    }

    let storage = service.storage();
    let criterion = require_criterion(storage, criterion_id).await?;

    match criterion {
        Criterion::Blocking(_) => {
            if let Some(final_mark) = update.final_mark {
                validate_final_mark(final_mark)?;
            }

            let updated = storage
                .update_blocking_criterion(criterion_id, update)
                .await?
                .ok_or_else(|| RubricError::not_found(format!("评分标准不存在: {criterion_id}")))?;
            info!("Blocking criterion {} updated", criterion_id);

            Ok(Criterion::Blocking(updated))
        }
        Criterion::Main(current) => {
            if update.has_blocking_fields() {
                return Err(RubricError::invalid_argument(
                    "主要评分标准只能修改名称，描述、评语与最终分仅适用于阻断评分标准",
                ));
            }

            let Some(name) = update.name else {
                return Ok(Criterion::Main(current));
            };

            let updated = storage
                .rename_main_criterion(criterion_id, &name)
                .await?
                .ok_or_else(|| RubricError::not_found(format!("评分标准不存在: {criterion_id}")))?;
            info!("Main criterion {} renamed", criterion_id);

            Ok(Criterion::Main(updated))
        }
    }
}

pub async fn set_criterion_weight(
    service: &CriteriaService,
    criterion_id: i64,
    weight: i64,
) -> Result<MainCriterion> {
    let weight = validate_weight(weight)?;

    let storage = service.storage();
    require_main_criterion(storage, criterion_id).await?;

    if !storage.set_criterion_weight(criterion_id, weight).await? {
        return Err(RubricError::not_found(format!("评分标准不存在: {criterion_id}")));
    }
    info!("Criterion {} weight set to {}", criterion_id, weight);

    require_main_criterion(storage, criterion_id).await
}

pub async fn set_criterion_score_comment(
    service: &CriteriaService,
    criterion_id: i64,
    req: SetScoreCommentRequest,
) -> Result<MainCriterion> {
    let score = validate_score(req.score)?;

    let storage = service.storage();
    require_main_criterion(storage, criterion_id).await?;

    if !storage
        .set_criterion_score_comment(criterion_id, score, req.comment)
        .await?
    {
        return Err(RubricError::not_found(format!("评分标准不存在: {criterion_id}")));
    }

    require_main_criterion(storage, criterion_id).await
}

/// 权重与档位评语只对主要评分标准有意义
async fn require_main_criterion(storage: &dyn Storage, criterion_id: i64) -> Result<MainCriterion> {
    match require_criterion(storage, criterion_id).await? {
        Criterion::Main(criterion) => Ok(criterion),
        Criterion::Blocking(_) => Err(RubricError::invalid_operation(
            "阻断评分标准没有权重与档位评语",
        )),
    }
}
