//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称、业务错误码与 HTTP 状态码。

use std::fmt;

use actix_web::http::StatusCode;

use crate::models::ErrorCode;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - error_code() / status_code() - 返回 API 错误码与 HTTP 状态码
/// - 便捷构造函数
macro_rules! define_rubric_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $api_code:ident, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum RubricError {
            $($variant(String),)*
        }

        impl RubricError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RubricError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RubricError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RubricError::$variant(msg) => msg,)*
                }
            }

            /// 获取 API 响应中的业务错误码
            pub fn error_code(&self) -> ErrorCode {
                match self {
                    $(RubricError::$variant(_) => ErrorCode::$api_code,)*
                }
            }

            /// 获取对应的 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(RubricError::$variant(_) => StatusCode::$status,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RubricError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RubricError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_rubric_errors! {
    NotFound("E001", "Resource Not Found", NotFound, NOT_FOUND),
    InvalidArgument("E002", "Invalid Argument", InvalidArgument, BAD_REQUEST),
    InvalidOperation("E003", "Invalid Operation", InvalidOperation, CONFLICT),
    FailedPrecondition("E004", "Failed Precondition", FailedPrecondition, PRECONDITION_FAILED),
    Unavailable("E005", "Storage Unavailable", ServiceUnavailable, SERVICE_UNAVAILABLE),
    DatabaseConfig("E006", "Database Configuration Error", InternalServerError, INTERNAL_SERVER_ERROR),
    DatabaseOperation("E007", "Database Operation Error", InternalServerError, INTERNAL_SERVER_ERROR),
    Serialization("E008", "Serialization Error", InternalServerError, INTERNAL_SERVER_ERROR),
}

impl RubricError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 存储层是否不可达（调用方应重新查询状态，不可假定写入成功或失败）
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RubricError::Unavailable(_))
    }
}

impl fmt::Display for RubricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RubricError {}

impl RubricError {
    /// 包装存储层错误并附加上下文
    ///
    /// 连接失败或无法获取连接时为 Unavailable，其余为 DatabaseOperation。
    pub fn storage(context: &str, err: sea_orm::DbErr) -> Self {
        match err {
            sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
                RubricError::Unavailable(format!("{context}: {err}"))
            }
            other => RubricError::DatabaseOperation(format!("{context}: {other}")),
        }
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for RubricError {
    fn from(err: sea_orm::DbErr) -> Self {
        RubricError::storage("数据库操作失败", err)
    }
}

impl From<std::io::Error> for RubricError {
    fn from(err: std::io::Error) -> Self {
        RubricError::Unavailable(err.to_string())
    }
}

impl From<serde_json::Error> for RubricError {
    fn from(err: serde_json::Error) -> Self {
        RubricError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RubricError>;
