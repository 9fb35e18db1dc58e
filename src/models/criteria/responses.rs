use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{BlockingCriterion, MainCriteriaGroup};

// 创建阻断评分标准响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CreatedBlockingCriterionResponse {
    pub group_id: i64,
    pub criterion: BlockingCriterion,
}

// 主要评分标准列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct MainCriteriaResponse {
    pub task_id: i64,
    pub groups: Vec<MainCriteriaGroup>,
}

// 删除全部阻断评分标准响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct DeleteBlockingCriteriaResponse {
    pub task_id: i64,
    pub deleted: bool,
}
