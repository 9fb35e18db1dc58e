use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub grading: GradingConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub unix_socket_path: String,
    pub workers: usize,
    pub max_workers: usize,
    pub timeouts: TimeoutConfig,
    pub limits: LimitConfig,
}

/// 超时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub client_request: u64,
    pub client_disconnect: u64,
    pub keep_alive: u64,
}

/// 限制配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    pub max_payload_size: usize,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,    // 数据库连接 URL（从 scheme 自动推断类型）
    pub pool_size: u32, // 连接池大小
    pub timeout: u64,   // 连接超时 (秒)
}

/// CORS 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub max_age: usize,
}

/// 评分策略
///
/// 默认启用加权计分、状态守卫和得分范围校验；
/// 关闭对应开关可获得与旧版行为一致的兼容模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradingConfig {
    pub weighted_main_criteria: bool, // 主要评分标准按权重计分
    pub enforce_transitions: bool,    // 仅允许 submitted 状态被评分
    pub strict_mark_range: bool,      // 记录得分时校验取值范围
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            weighted_main_criteria: true,
            enforce_transitions: true,
            strict_mark_range: true,
        }
    }
}

impl GradingConfig {
    /// 与旧版行为完全一致：不加权、无状态守卫、不校验得分范围
    pub fn compatibility() -> Self {
        Self {
            weighted_main_criteria: false,
            enforce_transitions: false,
            strict_mark_range: false,
        }
    }
}
