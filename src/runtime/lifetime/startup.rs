use std::sync::Arc;

use tracing::{info, warn};

use crate::config::{AppConfig, GradingConfig};
use crate::errors::Result;
use crate::storage::{Storage, create_storage};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub grading: GradingConfig,
}

/// 输出当前评分策略，兼容开关被打开时给出提示
fn log_grading_policy(grading: &GradingConfig) {
    info!(
        "Grading policy: weighted_main_criteria={}, enforce_transitions={}, strict_mark_range={}",
        grading.weighted_main_criteria, grading.enforce_transitions, grading.strict_mark_range
    );

    if !grading.weighted_main_criteria {
        warn!("Main criteria weights are ignored (unweighted compatibility mode)");
    }
    if !grading.enforce_transitions {
        warn!("Work status guard is disabled, any existing work can be marked graded");
    }
    if !grading.strict_mark_range {
        warn!("Mark range validation is disabled, only non-finite marks are rejected");
    }
}

/// 准备服务器启动的上下文
/// 包括存储连接、数据库迁移与评分策略
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    let storage = create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    log_grading_policy(&config.grading);

    Ok(StartupContext {
        storage,
        grading: config.grading,
    })
}
