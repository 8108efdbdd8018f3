use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TeamService, validate_team_name};
use crate::middlewares::RequireJWT;
use crate::models::teams::CreateTeamRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, is_unique_violation, unauthorized};

pub async fn create_team(
    service: &TeamService,
    team_data: CreateTeamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let name = match validate_team_name(&team_data.name) {
        Ok(name) => name,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    };

    let storage = service.get_storage(request);

    // 教师只能为自己创建队伍
    let responsible_teacher_id = match current_user.role {
        UserRole::Admin => team_data.responsible_teacher_id.unwrap_or(current_user.id),
        _ => current_user.id,
    };

    if responsible_teacher_id != current_user.id {
        match storage.get_user_by_id(responsible_teacher_id).await {
            Ok(Some(user)) if user.role.is_staff() => {}
            Ok(_) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeacherNotFound,
                    "Professor responsável não encontrado",
                )));
            }
            Err(e) => {
                return Ok(internal_error(
                    ErrorCode::InternalServerError,
                    "Failed to create team",
                    &e,
                ));
            }
        }
    }

    match storage.get_team_by_name(&name).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::TeamAlreadyExists,
                "Já existe uma equipe com esse nome",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to create team",
                &e,
            ));
        }
    }

    match storage
        .create_team(&name, responsible_teacher_id, team_data.description)
        .await
    {
        Ok(team) => {
            info!("Team {} created by user {}", team.id, current_user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(team, "Equipe criada")))
        }
        Err(e) if is_unique_violation(&e) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::TeamAlreadyExists,
                "Já existe uma equipe com esse nome",
            )))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to create team",
            &e,
        )),
    }
}
