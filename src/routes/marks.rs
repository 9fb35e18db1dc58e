use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, http::StatusCode, web};

use super::respond;
use crate::config::GradingConfig;
use crate::models::marks::requests::{RecordMarkRequest, TriggerBlockingRequest};
use crate::services::MarkService;
use crate::storage::Storage;

fn service(
    storage: &web::Data<Arc<dyn Storage>>,
    grading: &web::Data<GradingConfig>,
) -> MarkService {
    MarkService::new(storage.get_ref().clone(), *grading.get_ref())
}

// HTTP处理程序
pub async fn list_marks(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    work_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage, &grading)
        .get_marks(work_id.into_inner())
        .await;
    Ok(respond(StatusCode::OK, result, "查询成功"))
}

pub async fn record_mark(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    work_id: web::Path<i64>,
    req: web::Json<RecordMarkRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage, &grading)
        .record_mark(work_id.into_inner(), req.into_inner())
        .await;
    Ok(respond(StatusCode::OK, result, "得分已记录"))
}

// 请求体可省略
pub async fn trigger_blocking_criterion(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    path: web::Path<(i64, i64)>,
    req: Option<web::Json<TriggerBlockingRequest>>,
) -> ActixResult<HttpResponse> {
    let (work_id, criterion_id) = path.into_inner();
    let comment = req.and_then(|r| r.into_inner().comment);
    let result = service(&storage, &grading)
        .trigger_blocking_criterion(work_id, criterion_id, comment)
        .await;
    Ok(respond(StatusCode::OK, result, "阻断评分标准已触发"))
}

// 配置路由（挂载在 /api/v1/works 作用域下）
pub fn configure_marks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{work_id}/marks")
            .route(web::get().to(list_marks))
            .route(web::put().to(record_mark)),
    )
    .service(
        web::resource("/{work_id}/marks/{criterion_id}/trigger")
            .route(web::post().to(trigger_blocking_criterion)),
    );
}
