use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 成绩满分（十分制）
pub const GRADE_SCALE: f64 = 10.0;

// 主要评分标准的计分方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "grade.ts")]
pub enum Weighting {
    Weighted,   // 按权重加权
    Unweighted, // 每项标准计 1 分
}

// 成绩计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "grade.ts")]
pub enum GradeOutcome {
    // 阻断评分标准被触发，成绩取最严重（最低）的触发值
    Blocked { criterion_id: i64, mark: f64 },
    // 按主要评分标准计分
    Scored {
        achieved: f64,
        possible: f64,
        weighting: Weighting,
    },
}

// 单个提交的成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct WorkGrade {
    pub work_id: i64,
    pub grade: f64,
    pub outcome: GradeOutcome,
}

impl WorkGrade {
    pub fn is_blocked(&self) -> bool {
        matches!(self.outcome, GradeOutcome::Blocked { .. })
    }
}

// 学生在某学科的最终成绩（各提交成绩平均）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct DisciplineGrade {
    pub student_id: i64,
    pub discipline_id: i64,
    pub grade: f64,
    pub works_count: i64,
    pub works: Vec<WorkGrade>,
}
