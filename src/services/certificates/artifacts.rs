use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::get::{load_visible_certificate, student_name};
use super::{CertificateService, build_document};
use crate::artifacts::{ArtifactStore, verify_url};
use crate::errors::DojoSystemError;
use crate::middlewares::RequireJWT;
use crate::models::ErrorCode;
use crate::services::{internal_error, unauthorized};

fn artifact_failed(code: &str, err: &DojoSystemError) -> HttpResponse {
    internal_error(
        ErrorCode::CertificateArtifactFailed,
        &format!("Falha ao gerar arquivo do certificado {code}"),
        err,
    )
}

fn attachment(content_type: &str, file_name: String, bytes: Vec<u8>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Inline,
            parameters: vec![DispositionParam::Filename(file_name)],
        })
        .body(bytes)
}

pub async fn download_pdf(
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

    let config = service.get_config();
    let document = build_document(&certificate, &student_name, config);
    let store = ArtifactStore::from_config(config);

    let rendered = web::block(move || store.load_or_render_pdf(&document)).await;
    match rendered {
        Ok(Ok(bytes)) => Ok(attachment(
            "application/pdf",
            format!("{}.pdf", certificate.code),
            bytes,
        )),
        Ok(Err(e)) => Ok(artifact_failed(&certificate.code, &e)),
        Err(e) => Ok(artifact_failed(
            &certificate.code,
            &DojoSystemError::artifact_generation(e.to_string()),
        )),
    }
}

pub async fn download_qrcode(
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

    let config = service.get_config();
    let url = verify_url(&config.verify_url_template, &certificate.code);
    let store = ArtifactStore::from_config(config);
    let code = certificate.code.clone();

    let rendered = web::block(move || store.load_or_render_qr(&code, &url)).await;
    match rendered {
        Ok(Ok(bytes)) => Ok(attachment(
            "image/png",
            format!("{}.png", certificate.code),
            bytes,
        )),
        Ok(Err(e)) => Ok(artifact_failed(&certificate.code, &e)),
        Err(e) => Ok(artifact_failed(
            &certificate.code,
            &DojoSystemError::artifact_generation(e.to_string()),
        )),
    }
}
