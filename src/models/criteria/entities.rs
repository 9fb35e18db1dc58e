use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 阻断分组的固定名称，每个任务至多一个
pub const BLOCKING_GROUP_NAME: &str = "blocking_criterias";

/// 新建主要评分标准的默认权重
pub const DEFAULT_CRITERION_WEIGHT: i32 = 1;

const SCORE_EPSILON: f64 = 1e-9;

// 标准分值档位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "criteria.ts")]
pub enum Score {
    Zero,
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl Score {
    pub const ALL: [Score; 5] = [
        Score::Zero,
        Score::Quarter,
        Score::Half,
        Score::ThreeQuarters,
        Score::Full,
    ];

    pub fn value(self) -> f64 {
        match self {
            Score::Zero => 0.0,
            Score::Quarter => 0.25,
            Score::Half => 0.5,
            Score::ThreeQuarters => 0.75,
            Score::Full => 1.0,
        }
    }

    /// 将数值映射到标准档位，非标准值返回 None
    pub fn from_value(value: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|score| (score.value() - value).abs() < SCORE_EPSILON)
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

// 各档位评语，键为标准分值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct ScoreComments {
    #[serde(rename = "0.00")]
    pub zero: Option<String>,
    #[serde(rename = "0.25")]
    pub quarter: Option<String>,
    #[serde(rename = "0.50")]
    pub half: Option<String>,
    #[serde(rename = "0.75")]
    pub three_quarters: Option<String>,
    #[serde(rename = "1.00")]
    pub full: Option<String>,
}

impl ScoreComments {
    pub fn get(&self, score: Score) -> Option<&str> {
        match score {
            Score::Zero => self.zero.as_deref(),
            Score::Quarter => self.quarter.as_deref(),
            Score::Half => self.half.as_deref(),
            Score::ThreeQuarters => self.three_quarters.as_deref(),
            Score::Full => self.full.as_deref(),
        }
    }

    pub fn set(&mut self, score: Score, comment: Option<String>) {
        let slot = match score {
            Score::Zero => &mut self.zero,
            Score::Quarter => &mut self.quarter,
            Score::Half => &mut self.half,
            Score::ThreeQuarters => &mut self.three_quarters,
            Score::Full => &mut self.full,
        };
        *slot = comment;
    }
}

// 评分标准分组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CriteriaGroup {
    pub id: i64,
    pub task_id: i64,
    pub name: String,
    pub is_blocking: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 阻断评分标准：触发时直接决定最终成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct BlockingCriterion {
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub final_mark: f64,
}

// 主要评分标准：按权重参与加权平均
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct MainCriterion {
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    pub weight: i32,
    pub score_comments: ScoreComments,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export, export_to = "criteria.ts")]
pub enum Criterion {
    Blocking(BlockingCriterion),
    Main(MainCriterion),
}

impl Criterion {
    pub fn id(&self) -> i64 {
        match self {
            Criterion::Blocking(c) => c.id,
            Criterion::Main(c) => c.id,
        }
    }

    pub fn group_id(&self) -> i64 {
        match self {
            Criterion::Blocking(c) => c.group_id,
            Criterion::Main(c) => c.group_id,
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, Criterion::Blocking(_))
    }
}

// 任务的阻断评分标准（分组尚未创建时为空）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct BlockingCriteria {
    pub group: Option<CriteriaGroup>,
    pub criteria: Vec<BlockingCriterion>,
}

// 主要评分标准分组及其下属标准
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct MainCriteriaGroup {
    pub group: CriteriaGroup,
    pub criteria: Vec<MainCriterion>,
}
