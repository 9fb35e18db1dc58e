use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 某提交在某评分标准上的得分，(work_id, criterion_id) 唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "mark.ts")]
pub struct CriterionMark {
    pub work_id: i64,
    pub criterion_id: i64,
    pub mark: f64,
    pub comment: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 提交的全部得分，按评分标准 ID 索引
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "mark.ts")]
pub struct WorkMarks {
    pub work_id: i64,
    pub marks: BTreeMap<i64, CriterionMark>,
}

impl WorkMarks {
    pub fn new(work_id: i64, marks: Vec<CriterionMark>) -> Self {
        Self {
            work_id,
            marks: marks.into_iter().map(|m| (m.criterion_id, m)).collect(),
        }
    }

    pub fn get(&self, criterion_id: i64) -> Option<&CriterionMark> {
        self.marks.get(&criterion_id)
    }
}
