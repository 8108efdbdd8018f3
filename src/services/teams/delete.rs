use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TeamService, can_manage};
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

/// 删除队伍，成员学员保留但移出队伍
pub async fn delete_team(
    service: &TeamService,
    team_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let team = match storage.get_team_by_id(team_id).await {
        Ok(Some(team)) => team,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TeamNotFound,
                "Equipe não encontrada",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to delete team",
                &e,
            ));
        }
    };

    if !can_manage(&current_user, &team) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::TeamPermissionDenied,
            "Apenas o professor responsável pode remover a equipe",
        )));
    }

    match storage.delete_team(team_id).await {
        Ok(true) => {
            info!("Team {} deleted by user {}", team_id, current_user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Equipe removida")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeamNotFound,
            "Equipe não encontrada",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to delete team",
            &e,
        )),
    }
}
