use serde::Deserialize;
use ts_rs::TS;

// 记录得分请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "mark.ts")]
pub struct RecordMarkRequest {
    pub criterion_id: i64,
    pub mark: f64,
    pub comment: Option<String>,
}

// 触发阻断评分标准请求
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "mark.ts")]
pub struct TriggerBlockingRequest {
    pub comment: Option<String>,
}
