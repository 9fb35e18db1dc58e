//! 成绩计算
//!
//! 纯函数，只依赖已加载的评分标准与得分：
//!
//! 1. 阻断阶段：阻断评分标准上得分大于 0 视为被触发，成绩取所有触发值中的最小值；
//! 2. 主要阶段：没有触发时，对每条已记录的主要评分标准得分累计
//!    `achieved` 与 `possible`，成绩为 `achieved / possible * 10`，`possible` 为 0 时成绩为 0。
//!
//! 不在当前目录中的评分标准（已删除）上的得分被忽略。

use crate::models::{
    criteria::entities::{BlockingCriteria, MainCriteriaGroup},
    grades::entities::{GRADE_SCALE, GradeOutcome, Weighting, WorkGrade},
    marks::entities::WorkMarks,
};

pub fn evaluate(
    work_id: i64,
    blocking: &BlockingCriteria,
    main: &[MainCriteriaGroup],
    marks: &WorkMarks,
    weighting: Weighting,
) -> WorkGrade {
    if let Some((criterion_id, mark)) = most_severe_trigger(blocking, marks) {
        return WorkGrade {
            work_id,
            grade: clamp_grade(mark),
            outcome: GradeOutcome::Blocked { criterion_id, mark },
        };
    }

    let mut achieved = 0.0;
    let mut possible = 0.0;
    for criterion in main.iter().flat_map(|g| g.criteria.iter()) {
        let Some(mark) = marks.get(criterion.id) else {
            continue;
        };
        let weight = match weighting {
            Weighting::Weighted => f64::from(criterion.weight),
            Weighting::Unweighted => 1.0,
        };
        achieved += mark.mark * weight;
        possible += weight;
    }

    let grade = if possible > 0.0 {
        clamp_grade(achieved / possible * GRADE_SCALE)
    } else {
        0.0
    };

    WorkGrade {
        work_id,
        grade,
        outcome: GradeOutcome::Scored {
            achieved,
            possible,
            weighting,
        },
    }
}

/// 最严重（最低）的触发值，相同分值取 ID 最小的评分标准
fn most_severe_trigger(blocking: &BlockingCriteria, marks: &WorkMarks) -> Option<(i64, f64)> {
    blocking
        .criteria
        .iter()
        .filter_map(|c| marks.get(c.id).map(|m| (c.id, m.mark)))
        .filter(|(_, mark)| *mark > 0.0)
        .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
}

fn clamp_grade(grade: f64) -> f64 {
    grade.clamp(0.0, GRADE_SCALE)
}
