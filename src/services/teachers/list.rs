use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::teachers::TeacherListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teachers().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherListResponse { items },
            "Professores carregados",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to list teachers",
            &e,
        )),
    }
}
