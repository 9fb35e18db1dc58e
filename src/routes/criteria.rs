use std::sync::Arc;

use actix_web::{HttpResponse, Result as ActixResult, http::StatusCode, web};

use super::{respond, respond_empty};
use crate::models::criteria::{
    requests::{
        CreateBlockingCriterionRequest, CreateMainCriterionRequest, CreateMainGroupRequest,
        RenameGroupRequest, SetScoreCommentRequest, SetWeightRequest, UpdateCriterionRequest,
    },
    responses::{DeleteBlockingCriteriaResponse, MainCriteriaResponse},
};
use crate::services::CriteriaService;
use crate::storage::Storage;

fn service(storage: &web::Data<Arc<dyn Storage>>) -> CriteriaService {
    CriteriaService::new(storage.get_ref().clone())
}

// HTTP处理程序
pub async fn list_blocking_criteria(
    storage: web::Data<Arc<dyn Storage>>,
    task_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .load_blocking_criteria(task_id.into_inner())
        .await;
    Ok(respond(StatusCode::OK, result, "查询成功"))
}

pub async fn create_blocking_criterion(
    storage: web::Data<Arc<dyn Storage>>,
    task_id: web::Path<i64>,
    req: web::Json<CreateBlockingCriterionRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .create_blocking_criterion(task_id.into_inner(), req.into_inner())
        .await;
    Ok(respond(StatusCode::CREATED, result, "阻断评分标准创建成功"))
}

pub async fn delete_all_blocking_criteria(
    storage: web::Data<Arc<dyn Storage>>,
    task_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let task_id = task_id.into_inner();
    let result = service(&storage)
        .delete_all_blocking_criteria(task_id)
        .await
        .map(|deleted| DeleteBlockingCriteriaResponse { task_id, deleted });
    Ok(respond(StatusCode::OK, result, "阻断评分标准已删除"))
}

pub async fn list_main_criteria(
    storage: web::Data<Arc<dyn Storage>>,
    task_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let task_id = task_id.into_inner();
    let result = service(&storage)
        .load_main_criteria(task_id)
        .await
        .map(|groups| MainCriteriaResponse { task_id, groups });
    Ok(respond(StatusCode::OK, result, "查询成功"))
}

pub async fn create_main_group(
    storage: web::Data<Arc<dyn Storage>>,
    task_id: web::Path<i64>,
    req: web::Json<CreateMainGroupRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .create_main_group(task_id.into_inner(), &req.name)
        .await;
    Ok(respond(StatusCode::CREATED, result, "分组创建成功"))
}

pub async fn rename_group(
    storage: web::Data<Arc<dyn Storage>>,
    group_id: web::Path<i64>,
    req: web::Json<RenameGroupRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .rename_group(group_id.into_inner(), &req.name)
        .await;
    Ok(respond(StatusCode::OK, result, "分组更新成功"))
}

pub async fn delete_group(
    storage: web::Data<Arc<dyn Storage>>,
    group_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage).delete_group(group_id.into_inner()).await;
    Ok(respond_empty(result, "分组已删除"))
}

pub async fn create_main_criterion(
    storage: web::Data<Arc<dyn Storage>>,
    group_id: web::Path<i64>,
    req: web::Json<CreateMainCriterionRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .create_main_criterion(group_id.into_inner(), &req.name)
        .await;
    Ok(respond(StatusCode::CREATED, result, "评分标准创建成功"))
}

pub async fn update_criterion(
    storage: web::Data<Arc<dyn Storage>>,
    criterion_id: web::Path<i64>,
    req: web::Json<UpdateCriterionRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .update_criterion(criterion_id.into_inner(), req.into_inner())
        .await;
    Ok(respond(StatusCode::OK, result, "评分标准更新成功"))
}

pub async fn delete_criterion(
    storage: web::Data<Arc<dyn Storage>>,
    criterion_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .delete_criterion(criterion_id.into_inner())
        .await;
    Ok(respond_empty(result, "评分标准已删除"))
}

pub async fn set_criterion_weight(
    storage: web::Data<Arc<dyn Storage>>,
    criterion_id: web::Path<i64>,
    req: web::Json<SetWeightRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .set_criterion_weight(criterion_id.into_inner(), req.weight)
        .await;
    Ok(respond(StatusCode::OK, result, "权重设置成功"))
}

pub async fn set_criterion_score_comment(
    storage: web::Data<Arc<dyn Storage>>,
    criterion_id: web::Path<i64>,
    req: web::Json<SetScoreCommentRequest>,
) -> ActixResult<HttpResponse> {
    let result = service(&storage)
        .set_criterion_score_comment(criterion_id.into_inner(), req.into_inner())
        .await;
    Ok(respond(StatusCode::OK, result, "档位评语设置成功"))
}

// 配置路由
pub fn configure_criteria_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tasks/{task_id}")
            .service(
                web::resource("/criteria/blocking")
                    .route(web::get().to(list_blocking_criteria))
                    .route(web::post().to(create_blocking_criterion))
                    .route(web::delete().to(delete_all_blocking_criteria)),
            )
            .service(web::resource("/criteria/main").route(web::get().to(list_main_criteria)))
            .service(web::resource("/groups").route(web::post().to(create_main_group))),
    )
    .service(
        web::scope("/api/v1/groups/{group_id}")
            .service(
                web::resource("")
                    .route(web::put().to(rename_group))
                    .route(web::delete().to(delete_group)),
            )
            .service(web::resource("/criteria").route(web::post().to(create_main_criterion))),
    )
    .service(
        web::scope("/api/v1/criteria/{criterion_id}")
            .service(
                web::resource("")
                    .route(web::put().to(update_criterion))
                    .route(web::delete().to(delete_criterion)),
            )
            .service(web::resource("/weight").route(web::put().to(set_criterion_weight)))
            .service(web::resource("/comments").route(web::put().to(set_criterion_score_comment))),
    );
}
