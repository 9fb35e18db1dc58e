use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, http::StatusCode, web};

use super::respond;
use crate::config::GradingConfig;
use crate::services::GradeService;
use crate::storage::Storage;

fn service(
    storage: &web::Data<Arc<dyn Storage>>,
    grading: &web::Data<GradingConfig>,
) -> GradeService {
    GradeService::new(storage.get_ref().clone(), *grading.get_ref())
}

// HTTP处理程序
pub async fn get_work_grade(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    work_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage, &grading)
        .evaluate_work(work_id.into_inner())
        .await;
    Ok(respond(StatusCode::OK, result, "成绩计算成功"))
}

pub async fn get_discipline_grade(
    storage: web::Data<Arc<dyn Storage>>,
    grading: web::Data<GradingConfig>,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (student_id, discipline_id) = path.into_inner();
    let result = service(&storage, &grading)
        .discipline_grade(student_id, discipline_id)
        .await;
    Ok(respond(StatusCode::OK, result, "成绩计算成功"))
}

// 单个提交的成绩（挂载在 /api/v1/works 作用域下）
pub fn configure_work_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{work_id}/grade").route(web::get().to(get_work_grade)));
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students/{student_id}").service(
            web::resource("/disciplines/{discipline_id}/grade")
                .route(web::get().to(get_discipline_grade)),
        ),
    );
}
