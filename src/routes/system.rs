use actix_web::{HttpResponse, Result as ActixResult, middleware, web};

use crate::models::{ApiResponse, AppStartTime, system::HealthResponse};

pub async fn health(start_time: web::Data<AppStartTime>) -> ActixResult<HttpResponse> {
    let now = chrono::Utc::now();
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: start_time.start_datetime,
        uptime_seconds: now
            .signed_duration_since(start_time.start_datetime)
            .num_seconds(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "服务运行正常")))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .wrap(middleware::Compress::default())
            .route("/health", web::get().to(health)),
    );
}
