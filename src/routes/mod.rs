pub mod criteria;

pub mod grades;

pub mod marks;

pub mod system;

pub mod works;

pub use criteria::configure_criteria_routes;
pub use grades::configure_grades_routes;
pub use system::configure_system_routes;
pub use works::configure_works_routes;

use actix_web::{HttpResponse, http::StatusCode};
use serde::Serialize;
use tracing::{error, warn};
use ts_rs::TS;

use crate::errors::{Result, RubricError};
use crate::models::ApiResponse;

/// 业务错误转换为 HTTP 响应
pub(crate) fn error_response(err: &RubricError) -> HttpResponse {
    if err.status_code().is_server_error() {
        error!("{}", err.format_simple());
    } else {
        warn!("{}", err.format_simple());
    }

    HttpResponse::build(err.status_code()).json(ApiResponse::from_error(err))
}

/// 成功时以指定状态码返回数据，失败时返回错误响应
pub(crate) fn respond<T: Serialize + TS>(
    status: StatusCode,
    result: Result<T>,
    message: &str,
) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::build(status).json(ApiResponse::success(data, message)),
        Err(e) => error_response(&e),
    }
}

/// 无返回数据的操作
pub(crate) fn respond_empty(result: Result<()>, message: &str) -> HttpResponse {
    match result {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success_empty(message)),
        Err(e) => error_response(&e),
    }
}

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.configure(configure_criteria_routes) // 评分标准目录
        .configure(configure_works_routes) // 提交、得分与单个提交成绩
        .configure(configure_grades_routes) // 学科成绩
        .configure(configure_system_routes); // 健康检查
}
