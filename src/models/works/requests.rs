use serde::Deserialize;
use ts_rs::TS;

use super::entities::GraderRole;

// 提交作品请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "work.ts")]
pub struct SubmitWorkRequest {
    pub student_id: i64,
    pub task_id: i64,
    pub content_ref: Option<String>,
}

// 查询学生在某任务下的提交
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "work.ts")]
pub struct ExistingWorkQuery {
    pub student_id: i64,
    pub task_id: i64,
}

// 标记已评分请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "work.ts")]
pub struct MarkGradedRequest {
    pub role: GraderRole,
}
