use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::exams::requests::ExamResultListParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

/// 学员只能看到自己的成绩，教师和管理员可按用户筛选
pub async fn list_results(
    service: &ExamService,
    query: ExamResultListParams,
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

    match storage.list_exam_results(user_id, page, size).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Resultados carregados")))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to list exam results",
            &e,
        )),
    }
}

pub async fn get_result(
    service: &ExamService,
    result_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    match storage.get_exam_result(result_id).await {
        Ok(Some(result)) if current_user.role.is_staff() || result.user_id == current_user.id => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(result, "Resultado carregado")))
        }
        Ok(_) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ExamResultNotFound,
            "Resultado não encontrado",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to get exam result",
            &e,
        )),
    }
}
