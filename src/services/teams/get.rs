use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeamService;
use crate::models::teams::TeamDetailResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;

/// 队伍成员一次性全部返回
const MEMBER_LIMIT: u64 = 1000;

pub async fn get_team(
    service: &TeamService,
    team_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
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
                "Failed to get team",
                &e,
            ));
        }
    };

    let responsible_teacher_name = match storage.get_user_by_id(team.responsible_teacher_id).await
    {
        Ok(user) => user.map(|u| u.name),
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to get team",
                &e,
            ));
        }
    };

    let members = match storage
        .list_students(Some(team.id), None, 1, MEMBER_LIMIT)
        .await
    {
        Ok(page) => page.items,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to list team members",
                &e,
            ));
        }
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TeamDetailResponse {
            team,
            responsible_teacher_name,
            members,
        },
        "Equipe carregada",
    )))
}
