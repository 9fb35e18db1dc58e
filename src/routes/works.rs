use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, http::StatusCode, web};

use super::respond;
use crate::config::GradingConfig;
use crate::models::works::{
    entities::WorkStatus,
    requests::{ExistingWorkQuery, MarkGradedRequest, SubmitWorkRequest},
    responses::{ExistingWorkResponse, WorkStatusResponse},
};
use crate::services::WorkService;
use crate::storage::Storage;

fn service(
    storage: &web::Data<Arc<dyn Storage>>,
    grading: &web::Data<GradingConfig>,
) -> WorkService {
    WorkService::new(storage.get_ref().clone(), *grading.get_ref())
}

// HTTP处理程序
pub async fn submit_work(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    req: web::Json<SubmitWorkRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage, &grading).submit(req.into_inner()).await;
    Ok(respond(StatusCode::CREATED, result, "提交成功"))
}

pub async fn find_existing_work(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    query: web::Query<ExistingWorkQuery>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage, &grading)
        .find_work(query.student_id, query.task_id)
        .await
        .map(|work| ExistingWorkResponse {
            status: work.as_ref().map_or(WorkStatus::Pending, |w| w.status),
            work,
        });
    Ok(respond(StatusCode::OK, result, "查询成功"))
}

pub async fn get_work_status(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    work_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let work_id = work_id.into_inner();
    let result = service(&storage, &grading)
        .current_status(work_id)
        .await
        .map(|status| WorkStatusResponse { work_id, status });
    Ok(respond(StatusCode::OK, result, "查询成功"))
}

pub async fn mark_graded(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    work_id: web::Path<i64>,
    req: web::Json<MarkGradedRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage, &grading)
        .mark_graded(work_id.into_inner(), req.role)
        .await;
    Ok(respond(StatusCode::OK, result, "评分状态已更新"))
}

// 配置路由
pub fn configure_works_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/works")
            .service(
                web::resource("")
                    .route(web::post().to(submit_work))
                    .route(web::get().to(find_existing_work)),
            )
            .service(web::resource("/{work_id}/status").route(web::get().to(get_work_status)))
            .service(web::resource("/{work_id}/graded").route(web::post().to(mark_graded)))
            // 得分与成绩挂在同一作用域下，避免作用域前缀冲突
            .configure(super::marks::configure_marks_routes)
            .configure(super::grades::configure_work_grade_routes),
    );
}
