use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 业务错误码
///
/// 1xxx 为通用错误，2xxx 为评分标准相关，3xxx 为提交与评分流程相关。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1006,

    // 评分标准
    InvalidArgument = 2000,
    InvalidOperation = 2001,

    // 提交流程
    FailedPrecondition = 3000,
}
