use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::certificates::requests::{
    CertificateListParams, IssueCertificateRequest, LegacyApiQuery,
};
use crate::models::users::entities::UserRole;
use crate::services::CertificateService;
use crate::utils::{SafeCertificateCode, SafeIDI64};

// 懒加载的全局 CertificateService 实例
static CERTIFICATE_SERVICE: Lazy<CertificateService> = Lazy::new(CertificateService::new_lazy);

pub async fn list_certificates(
    req: HttpRequest,
    query: web::Query<CertificateListParams>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .list_certificates(query.into_inner(), &req)
        .await
}

pub async fn get_certificate(
    req: HttpRequest,
    certificate_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .get_certificate(certificate_id.0, &req)
        .await
}

pub async fn issue_certificate(
    req: HttpRequest,
    issue_data: web::Json<IssueCertificateRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .issue_certificate(issue_data.into_inner(), &req)
        .await
}

pub async fn download_pdf(
    req: HttpRequest,
    certificate_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE.download_pdf(certificate_id.0, &req).await
}

pub async fn download_qrcode(
    req: HttpRequest,
    certificate_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .download_qrcode(certificate_id.0, &req)
        .await
}

pub async fn verify_certificate(
    req: HttpRequest,
    code: SafeCertificateCode,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE.verify_certificate(code.0, &req).await
}

pub async fn legacy_api(
    req: HttpRequest,
    query: web::Query<LegacyApiQuery>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE.legacy_query(query.into_inner(), &req).await
}

// 配置路由
pub fn configure_certificate_routes(cfg: &mut web::ServiceConfig) {
    // 公开验证接口，先于需要登录的 scope 注册
    cfg.service(
        web::resource("/api/v1/certificates/verify/{code}")
            .wrap(middlewares::RateLimit::certificate_lookup())
            .route(web::get().to(verify_certificate)),
    );
    cfg.service(
        web::scope("/api/v1/certificates")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_certificates))
            .service(
                web::resource("/issue")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::post().to(issue_certificate)),
            )
            .route("/{id}", web::get().to(get_certificate))
            .route("/{id}/pdf", web::get().to(download_pdf))
            .route("/{id}/qrcode", web::get().to(download_qrcode)),
    );
}

/// 旧版证书查询接口 `GET /api?api=certificado&id=`
pub fn configure_legacy_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api")
            .wrap(middlewares::RateLimit::certificate_lookup())
            .route(web::get().to(legacy_api)),
    );
}
