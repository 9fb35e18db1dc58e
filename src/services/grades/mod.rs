pub mod discipline;
pub mod evaluate;
pub mod work;

use std::sync::Arc;

use crate::config::GradingConfig;
use crate::errors::Result;
use crate::models::grades::entities::{DisciplineGrade, Weighting, WorkGrade};
use crate::storage::Storage;

pub use evaluate::evaluate;

/// 成绩计算：按需计算，不缓存、不落库
pub struct GradeService {
    storage: Arc<dyn Storage>,
    grading: GradingConfig,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>, grading: GradingConfig) -> Self {
        Self { storage, grading }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    pub(crate) fn weighting(&self) -> Weighting {
        if self.grading.weighted_main_criteria {
            Weighting::Weighted
        } else {
            Weighting::Unweighted
        }
    }

    // 计算单个提交的成绩
    pub async fn evaluate_work(&self, work_id: i64) -> Result<WorkGrade> {
        work::evaluate_work(self, work_id).await
    }

    // 计算学生在某学科的最终成绩
    pub async fn discipline_grade(
        &self,
        student_id: i64,
        discipline_id: i64,
    ) -> Result<DisciplineGrade> {
        discipline::discipline_grade(self, student_id, discipline_id).await
    }
}
