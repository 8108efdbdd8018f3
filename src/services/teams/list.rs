use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeamService;
use crate::models::teams::TeamListResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

pub async fn list_teams(service: &TeamService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_teams().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeamListResponse { items },
            "Equipes carregadas",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to list teams",
            &e,
        )),
    }
}
