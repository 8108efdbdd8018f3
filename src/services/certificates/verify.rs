use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use super::get::student_name;
use crate::models::certificates::responses::CertificateVerification;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

/// 公开验证证书编号，无需登录
pub async fn verify_certificate(
    service: &CertificateService,
    code: String,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let certificate = match storage.get_certificate_by_code(&code).await {
        Ok(Some(certificate)) => certificate,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CertificateNotFound,
                "Certificado não encontrado",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to verify certificate",
                &e,
            ));
        }
    };

    let student_name = match student_name(&storage, &certificate).await {
        Ok(name) => name,
        Err(response) => return Ok(response),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CertificateVerification {
            valid: true,
            code: certificate.code,
            student_name,
            belt: certificate.belt,
            issued_at: certificate.issued_at,
        },
        "Certificado válido",
    )))
}
