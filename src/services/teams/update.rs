use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{TeamService, can_manage, validate_team_name};
use crate::middlewares::RequireJWT;
use crate::models::teams::UpdateTeamRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, is_unique_violation, unauthorized};

pub async fn update_team(
    service: &TeamService,
    team_id: i64,
    mut update_data: UpdateTeamRequest,
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
                "Failed to update team",
                &e,
            ));
        }
    };

    if !can_manage(&current_user, &team) {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::TeamPermissionDenied,
            "Apenas o professor responsável pode alterar a equipe",
        )));
    }

    // 只有管理员可以移交负责人
    if current_user.role != UserRole::Admin {
        update_data.responsible_teacher_id = None;
    }

    if let Some(name) = update_data.name.take() {
        match validate_team_name(&name) {
            Ok(name) => update_data.name = Some(name),
            Err(msg) => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
        }
    }

    match storage.update_team(team_id, update_data).await {
        Ok(Some(team)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(team, "Equipe atualizada")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TeamNotFound,
            "Equipe não encontrada",
        ))),
        Err(e) if is_unique_violation(&e) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::TeamAlreadyExists,
                "Já existe uma equipe com esse nome",
            )))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to update team",
            &e,
        )),
    }
}
