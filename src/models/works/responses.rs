use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{Work, WorkStatus};

// 提交状态响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "work.ts")]
pub struct WorkStatusResponse {
    pub work_id: i64,
    pub status: WorkStatus,
}

// 查询已有提交响应，未提交时 work 为空
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "work.ts")]
pub struct ExistingWorkResponse {
    pub status: WorkStatus,
    pub work: Option<Work>,
}
