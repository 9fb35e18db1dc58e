use super::{GradeService, work::grade_of};
use crate::errors::Result;
use crate::models::grades::entities::DisciplineGrade;

/// 学科成绩为学生在该学科下全部提交成绩的平均值，没有提交时为 0
pub async fn discipline_grade(
    service: &GradeService,
    student_id: i64,
    discipline_id: i64,
) -> Result<DisciplineGrade> {
    let works = service
        .storage()
        .list_student_works_in_discipline(student_id, discipline_id)
        .await?;

    let mut grades = Vec::with_capacity(works.len());
    for work in &works {
        grades.push(grade_of(service, work).await?);
    }

    let grade = if grades.is_empty() {
        0.0
    } else {
        grades.iter().map(|g| g.grade).sum::<f64>() / grades.len() as f64
    };

    Ok(DisciplineGrade {
        student_id,
        discipline_id,
        grade,
        works_count: grades.len() as i64,
        works: grades,
    })
}
