use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CertificateService, build_document, generate_artifacts};
use crate::artifacts::verify_url;
use crate::errors::DojoSystemError;
use crate::middlewares::RequireJWT;
use crate::models::certificates::entities::NewCertificate;
use crate::models::certificates::requests::IssueCertificateRequest;
use crate::models::certificates::responses::CertificateDetail;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

fn already_certified() -> HttpResponse {
    HttpResponse::Conflict().json(ApiResponse::error_empty(
        ErrorCode::ExamAlreadyCertified,
        "Aluno já possui certificado para este exame",
    ))
}

pub async fn issue_certificate(
    service: &CertificateService,
    issue_request: IssueCertificateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let student = match storage.get_user_by_id(issue_request.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::CertificateIssueFailed,
                "Failed to issue certificate",
                &e,
            ));
        }
    };

    let exam_config = match storage.get_exam_config(issue_request.exam_config_id).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ExamConfigNotFound,
                "Exame não encontrado",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::CertificateIssueFailed,
                "Failed to issue certificate",
                &e,
            ));
        }
    };

    match storage
        .has_certificate_for(student.id, exam_config.id)
        .await
    {
        Ok(false) => {}
        Ok(true) => return Ok(already_certified()),
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::CertificateIssueFailed,
                "Failed to issue certificate",
                &e,
            ));
        }
    }

    let config = service.get_config();
    let new_certificate = NewCertificate {
        user_id: student.id,
        exam_config_id: exam_config.id,
        exam_result_id: None,
        belt: exam_config.belt,
        issued_by: Some(current_user.id),
        code_prefix: config.code_prefix.clone(),
        issued_at: chrono::Utc::now(),
    };

    let certificate = match storage.issue_certificate(new_certificate).await {
        Ok(certificate) => certificate,
        // 与考试提交并发时由存储层拦截
        Err(DojoSystemError::AlreadyCertified(_)) => return Ok(already_certified()),
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::CertificateIssueFailed,
                "Failed to issue certificate",
                &e,
            ));
        }
    };

    info!(
        "Certificate {} issued to user {} by user {}",
        certificate.code, student.id, current_user.id
    );

    generate_artifacts(build_document(&certificate, &student.name, config)).await;

    let verify_url = verify_url(&config.verify_url_template, &certificate.code);
    Ok(HttpResponse::Created().json(ApiResponse::success(
        CertificateDetail {
            certificate,
            student_name: student.name,
            verify_url,
        },
        "Certificado emitido",
    )))
}
