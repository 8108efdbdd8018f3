//! 旧版查询接口 `GET /api?api=certificado&id=<int>`
//!
//! 返回扁平 JSON，不使用 `ApiResponse` 包装，字段名保持旧客户端的约定。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CertificateService;
use crate::models::certificates::requests::LegacyApiQuery;
use crate::models::certificates::responses::{LegacyCertificateRecord, LegacyError};

const CERTIFICATE_API: &str = "certificado";

/// 旧接口只接受正整数 ID
fn parse_legacy_id(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|id| *id > 0)
}

pub async fn legacy_query(
    service: &CertificateService,
    query: LegacyApiQuery,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if query.api.as_deref().map(str::trim) != Some(CERTIFICATE_API) {
        return Ok(HttpResponse::NotFound().json(LegacyError::new(LegacyError::UNKNOWN_API)));
    }

    let Some(id) = parse_legacy_id(query.id.as_deref()) else {
        return Ok(HttpResponse::BadRequest().json(LegacyError::new(LegacyError::INVALID_ID)));
    };

    let storage = service.get_storage(request);

    let certificate = match storage.get_certificate_by_id(id).await {
        Ok(Some(certificate)) => certificate,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(LegacyError::new(LegacyError::NOT_FOUND)));
        }
        Err(e) => {
            error!("Legacy certificate lookup failed for {}: {}", id, e);
            return Ok(
                HttpResponse::InternalServerError().json(LegacyError::new(LegacyError::INTERNAL))
            );
        }
    };

    let nome = match storage.get_user_by_id(certificate.user_id).await {
        Ok(user) => user.map(|u| u.name).unwrap_or_default(),
        Err(e) => {
            error!("Legacy certificate lookup failed for {}: {}", id, e);
            return Ok(
                HttpResponse::InternalServerError().json(LegacyError::new(LegacyError::INTERNAL))
            );
        }
    };

    Ok(HttpResponse::Ok().json(LegacyCertificateRecord {
        id: certificate.id,
        codigo: certificate.code,
        nome,
        faixa: certificate.belt.as_str().to_string(),
        data_emissao: certificate.issued_at.format("%Y-%m-%d").to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Belt;
    use crate::models::certificates::entities::NewCertificate;
    use crate::models::exams::requests::ExamConfigInput;
    use crate::models::users::entities::UserRole;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support::{local_user, memory_storage};
    use actix_web::{App, test as actix_test, web};
    use std::sync::Arc;

    async fn legacy(
        query: web::Query<LegacyApiQuery>,
        req: HttpRequest,
    ) -> ActixResult<HttpResponse> {
        CertificateService::new_lazy()
            .legacy_query(query.into_inner(), &req)
            .await
    }

    async fn seeded_storage() -> (Arc<dyn Storage>, i64) {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let user = storage
            .create_user(local_user("ANA LIMA", "ana@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let config = storage
            .create_exam_config(ExamConfigInput {
                belt: Belt::Azul,
                title: "Exame faixa azul".to_string(),
                topics: vec!["historia".to_string()],
                question_count: 5,
                pass_percentage: 70,
                active: true,
            })
            .await
            .unwrap();
        let certificate = storage
            .issue_certificate(NewCertificate {
                user_id: user.id,
                exam_config_id: config.id,
                exam_result_id: None,
                belt: Belt::Azul,
                issued_by: None,
                code_prefix: "CERT".to_string(),
                issued_at: chrono::Utc::now(),
            })
            .await
            .unwrap();
        (storage, certificate.id)
    }

    #[test]
    fn test_parse_legacy_id() {
        assert_eq!(parse_legacy_id(Some("42")), Some(42));
        assert_eq!(parse_legacy_id(Some(" 7 ")), Some(7));
        assert_eq!(parse_legacy_id(Some("abc")), None);
        assert_eq!(parse_legacy_id(Some("0")), None);
        assert_eq!(parse_legacy_id(None), None);
    }

    #[actix_web::test]
    async fn test_legacy_certificate_lookup() {
        let (storage, certificate_id) = seeded_storage().await;
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .route("/api", web::get().to(legacy)),
        )
        .await;

        let req = actix_test::TestRequest::get()
            .uri(&format!("/api?api=certificado&id={certificate_id}"))
            .to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["id"], certificate_id);
        assert_eq!(body["nome"], "ANA LIMA");
        assert_eq!(body["faixa"], "azul");
        assert!(body["codigo"].as_str().unwrap().starts_with("CERT-"));
        assert_eq!(body["data_emissao"].as_str().unwrap().len(), 10);

        let req = actix_test::TestRequest::get()
            .uri("/api?api=certificado&id=abc")
            .to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["error"], LegacyError::INVALID_ID);

        let req = actix_test::TestRequest::get()
            .uri("/api?api=certificado&id=9999")
            .to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["error"], LegacyError::NOT_FOUND);

        let req = actix_test::TestRequest::get()
            .uri("/api?api=alunos&id=1")
            .to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["error"], LegacyError::UNKNOWN_API);
    }
}
