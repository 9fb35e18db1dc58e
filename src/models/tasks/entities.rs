use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 任务（作业），由作业管理模块维护，评分引擎只读引用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "task.ts")]
pub struct Task {
    pub id: i64,
    pub discipline_id: i64,
    // 任务所属的学生小组，用于确定负责的研讨课教师
    pub group_id: i64,
    pub name: String,
}
