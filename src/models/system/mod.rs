use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 程序启动时间，注入到 app_data 供健康检查使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
}
