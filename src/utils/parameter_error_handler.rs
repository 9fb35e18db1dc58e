//! 请求参数解析错误处理
//!
//! 将 actix 默认的纯文本错误替换为统一的 `ApiResponse` 结构。

use actix_web::{
    Error, HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request<E>(err: E, kind: &str, request: &HttpRequest) -> Error
where
    E: std::fmt::Display + std::fmt::Debug + 'static,
{
    let message = format!("{kind}参数错误: {err}");
    debug!("{} {} - {}", request.method(), request.path(), message);

    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

pub fn json_error_handler(err: JsonPayloadError, request: &HttpRequest) -> Error {
    bad_request(err, "请求体", request)
}

pub fn query_error_handler(err: QueryPayloadError, request: &HttpRequest) -> Error {
    bad_request(err, "查询", request)
}

pub fn path_error_handler(err: PathError, request: &HttpRequest) -> Error {
    bad_request(err, "路径", request)
}
