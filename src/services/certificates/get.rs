use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{CertificateService, can_view};
use crate::artifacts::verify_url;
use crate::middlewares::RequireJWT;
use crate::models::certificates::entities::Certificate;
use crate::models::certificates::responses::CertificateDetail;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};
use crate::storage::Storage;

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::CertificateNotFound,
        "Certificado não encontrado",
    ))
}

/// 读取证书并校验查看权限，无权限时同样返回 404
pub(crate) async fn load_visible_certificate(
    storage: &Arc<dyn Storage>,
    certificate_id: i64,
    viewer: &User,
) -> Result<Certificate, HttpResponse> {
    match storage.get_certificate_by_id(certificate_id).await {
        Ok(Some(certificate)) if can_view(viewer, &certificate) => Ok(certificate),
        Ok(_) => Err(not_found()),
        Err(e) => Err(internal_error(
            ErrorCode::InternalServerError,
            "Failed to get certificate",
            &e,
        )),
    }
}

/// 证书持有人姓名
pub(crate) async fn student_name(
    storage: &Arc<dyn Storage>,
    certificate: &Certificate,
) -> Result<String, HttpResponse> {
    match storage.get_user_by_id(certificate.user_id).await {
        Ok(user) => Ok(user.map(|u| u.name).unwrap_or_default()),
        Err(e) => Err(internal_error(
            ErrorCode::InternalServerError,
            "Failed to get certificate holder",
            &e,
        )),
    }
}

pub async fn get_certificate(
    service: &CertificateService,
    certificate_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let certificate = match load_visible_certificate(&storage, certificate_id, &current_user).await
    {
        Ok(certificate) => certificate,
        Err(response) => return Ok(response),
    };

    let student_name = match student_name(&storage, &certificate).await {
        Ok(name) => name,
        Err(response) => return Ok(response),
    };

    let verify_url = verify_url(&service.get_config().verify_url_template, &certificate.code);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CertificateDetail {
            certificate,
            student_name,
            verify_url,
        },
        "Certificado carregado",
    )))
}
