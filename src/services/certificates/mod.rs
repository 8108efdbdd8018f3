pub mod artifacts;
pub mod get;
pub mod issue;
pub mod legacy;
pub mod list;
pub mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::warn;

use crate::artifacts::{ArtifactStore, verify_url};
use crate::config::{AppConfig, CertificateConfig};
use crate::models::certificates::entities::{Certificate, CertificateDocument};
use crate::models::certificates::requests::{
    CertificateListParams, IssueCertificateRequest, LegacyApiQuery,
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub struct CertificateService {
    storage: Option<Arc<dyn Storage>>,
}

/// 证书记录转换为 PDF 渲染所需信息
pub(crate) fn build_document(
    certificate: &Certificate,
    student_name: &str,
    config: &CertificateConfig,
) -> CertificateDocument {
    CertificateDocument {
        code: certificate.code.clone(),
        student_name: student_name.to_string(),
        belt: certificate.belt,
        issued_on: certificate.issued_at.date_naive(),
        verify_url: verify_url(&config.verify_url_template, &certificate.code),
    }
}

/// 证书提交后在阻塞线程池生成附件
pub(crate) async fn generate_artifacts(document: CertificateDocument) {
    let store = ArtifactStore::from_config(&AppConfig::get().certificate);
    let code = document.code.clone();
    if let Err(e) = web::block(move || store.generate_after_commit(&document)).await {
        warn!("证书 {} 附件任务异常: {}", code, e);
    }
}

/// 本人或教师/管理员可以查看证书
pub(crate) fn can_view(user: &User, certificate: &Certificate) -> bool {
    user.role.is_staff() || certificate.user_id == user.id
}

impl CertificateService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &CertificateConfig {
        &AppConfig::get().certificate
    }

    pub async fn list_certificates(
        &self,
        query: CertificateListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_certificates(self, query, request).await
    }

    pub async fn get_certificate(
        &self,
        certificate_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_certificate(self, certificate_id, request).await
    }

    // 教师/管理员手动颁发
    pub async fn issue_certificate(
        &self,
        issue_request: IssueCertificateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        issue::issue_certificate(self, issue_request, request).await
    }

    pub async fn download_pdf(
        &self,
        certificate_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        artifacts::download_pdf(self, certificate_id, request).await
    }

    pub async fn download_qrcode(
        &self,
        certificate_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        artifacts::download_qrcode(self, certificate_id, request).await
    }

    // 公开验证
    pub async fn verify_certificate(
        &self,
        code: String,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        verify::verify_certificate(self, code, request).await
    }

    // 旧版查询接口
    pub async fn legacy_query(
        &self,
        query: LegacyApiQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        legacy::legacy_query(self, query, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Belt;
    use chrono::TimeZone;

    #[test]
    fn test_build_document() {
        let certificate = Certificate {
            id: 3,
            code: "CERT-2025-0003".to_string(),
            user_id: 9,
            exam_config_id: 1,
            exam_result_id: Some(4),
            belt: Belt::Azul,
            issued_by: None,
            issued_at: chrono::Utc.with_ymd_and_hms(2025, 3, 14, 23, 0, 0).unwrap(),
        };
        let config = CertificateConfig {
            code_prefix: "CERT".to_string(),
            verify_url_template: "https://dojo.example/verify/{code}".to_string(),
            artifacts_dir: "artifacts".to_string(),
        };

        let document = build_document(&certificate, "ANA LIMA", &config);
        assert_eq!(document.code, "CERT-2025-0003");
        assert_eq!(document.student_name, "ANA LIMA");
        assert_eq!(document.issued_on, chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(document.verify_url, "https://dojo.example/verify/CERT-2025-0003");
    }
}
