use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::exams::requests::{
    CreateExamConfigRequest, ExamConfigListParams, ExamResultListParams, SubmitExamRequest,
    UpdateExamConfigRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ExamService;
use crate::utils::{SafeAttemptIdI64, SafeIDI64};

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

pub async fn list_configs(
    req: HttpRequest,
    query: web::Query<ExamConfigListParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_configs(query.into_inner(), &req).await
}

pub async fn get_config(req: HttpRequest, config_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_config(config_id.0, &req).await
}

pub async fn create_config(
    req: HttpRequest,
    config_data: web::Json<CreateExamConfigRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_config(config_data.into_inner(), &req).await
}

pub async fn update_config(
    req: HttpRequest,
    config_id: SafeIDI64,
    update_data: web::Json<UpdateExamConfigRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_config(config_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_config(req: HttpRequest, config_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_config(config_id.0, &req).await
}

pub async fn start_exam(req: HttpRequest, config_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.start_exam(config_id.0, &req).await
}

pub async fn submit_exam(
    req: HttpRequest,
    attempt_id: SafeAttemptIdI64,
    submit_data: web::Json<SubmitExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .submit_exam(attempt_id.0, submit_data.into_inner(), &req)
        .await
}

pub async fn abandon_exam(
    req: HttpRequest,
    attempt_id: SafeAttemptIdI64,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.abandon_exam(attempt_id.0, &req).await
}

pub async fn list_results(
    req: HttpRequest,
    query: web::Query<ExamResultListParams>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_results(query.into_inner(), &req).await
}

pub async fn get_result(req: HttpRequest, result_id: SafeIDI64) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.get_result(result_id.0, &req).await
}

// 配置路由
pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/exams")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_configs))
                    .route(
                        web::post()
                            .to(create_config)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 固定路径需在 /{id} 之前注册
            .route("/results", web::get().to(list_results))
            .route("/results/{id}", web::get().to(get_result))
            .route(
                "/attempts/{attempt_id}/submit",
                web::post().to(submit_exam),
            )
            .route(
                "/attempts/{attempt_id}/abandon",
                web::post().to(abandon_exam),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_config))
                    .route(
                        web::put()
                            .to(update_config)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_config)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .route("/{id}/start", web::post().to(start_exam)),
    );
}
