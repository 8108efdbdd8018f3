use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CertificateService;
use crate::middlewares::RequireJWT;
use crate::models::certificates::requests::CertificateListParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

/// 学员只能看到自己的证书，教师和管理员可按用户筛选
pub async fn list_certificates(
    service: &CertificateService,
    query: CertificateListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let user_id = if current_user.role.is_staff() {
        query.user_id
    } else {
        Some(current_user.id)
    };
    let (page, size) = query.pagination.normalized();

    let storage = service.get_storage(request);

    match storage.list_certificates(user_id, page, size).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Certificados carregados")))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to list certificates",
            &e,
        )),
    }
}
