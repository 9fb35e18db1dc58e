use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{Result, RubricError};

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "work.ts")]
pub enum WorkStatus {
    Pending,            // 尚未提交（无记录）
    Submitted,          // 已提交，等待评分
    GradedByAssistant,  // 助教已评分
    GradedBySeminarist, // 研讨课教师已评分
}

impl WorkStatus {
    pub const PENDING: &'static str = "pending";
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED_BY_ASSISTANT: &'static str = "graded_by_assistant";
    pub const GRADED_BY_SEMINARIST: &'static str = "graded_by_seminarist";

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkStatus::Pending => Self::PENDING,
            WorkStatus::Submitted => Self::SUBMITTED,
            WorkStatus::GradedByAssistant => Self::GRADED_BY_ASSISTANT,
            WorkStatus::GradedBySeminarist => Self::GRADED_BY_SEMINARIST,
        }
    }

    /// 计算评分后的目标状态
    ///
    /// 启用状态守卫时只允许 `submitted` 迁移到已评分状态；
    /// 兼容模式下任何已存在的提交都可以被标记为已评分。
    pub fn grade_transition(self, role: GraderRole, enforce: bool) -> Result<WorkStatus> {
        if self == WorkStatus::Pending {
            return Err(RubricError::invalid_operation("提交不存在，无法评分"));
        }
        if enforce && self != WorkStatus::Submitted {
            return Err(RubricError::invalid_operation(format!(
                "当前状态 {self} 不允许评分，仅 {} 状态可评分",
                WorkStatus::SUBMITTED
            )));
        }
        Ok(role.graded_status())
    }
}

impl<'de> Deserialize<'de> for WorkStatus {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: pending, submitted, graded_by_assistant, graded_by_seminarist"
            ))
        })
    }
}

impl std::fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            WorkStatus::PENDING => Ok(WorkStatus::Pending),
            WorkStatus::SUBMITTED => Ok(WorkStatus::Submitted),
            WorkStatus::GRADED_BY_ASSISTANT => Ok(WorkStatus::GradedByAssistant),
            WorkStatus::GRADED_BY_SEMINARIST => Ok(WorkStatus::GradedBySeminarist),
            _ => Err(format!("Invalid work status: {s}")),
        }
    }
}

// 评分人角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "work.ts")]
pub enum GraderRole {
    Assistant,  // 助教
    Seminarist, // 研讨课教师
}

impl GraderRole {
    pub fn graded_status(self) -> WorkStatus {
        match self {
            GraderRole::Assistant => WorkStatus::GradedByAssistant,
            GraderRole::Seminarist => WorkStatus::GradedBySeminarist,
        }
    }
}

impl std::fmt::Display for GraderRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraderRole::Assistant => write!(f, "assistant"),
            GraderRole::Seminarist => write!(f, "seminarist"),
        }
    }
}

// 学生提交实体，每个 (学生, 任务) 至多一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "work.ts")]
pub struct Work {
    pub id: i64,
    pub student_id: i64,
    pub task_id: i64,
    pub status: WorkStatus,
    pub content_ref: Option<String>,
    // 负责评分的研讨课教师（提交时根据任务所属小组解析）
    pub seminarist_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
