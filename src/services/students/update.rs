use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{StudentService, ensure_team_exists};
use crate::middlewares::RequireJWT;
use crate::models::students::requests::{StudentProfileUpdate, UpdateStudentRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};
use crate::utils::validate::validate_phone;

/// 学员本人可以修改联系方式和地址，队伍调整仅限教师和管理员
pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let existing = match storage.get_student_by_id(student_id).await {
        Ok(Some(detail)) => detail,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Aluno não encontrado",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to load student",
                &e,
            ));
        }
    };

    let is_staff = current_user.role.is_staff();
    if !is_staff && existing.student.user_id != current_user.id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "权限不足",
        )));
    }

    let changes_team = update_data.clear_team || update_data.team_id.is_some();
    if changes_team && !is_staff {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Somente professores podem alterar a equipe",
        )));
    }

    let team_id = if update_data.clear_team {
        Some(None)
    } else {
        update_data.team_id.map(Some)
    };
    if let Some(Some(id)) = team_id
        && let Err(response) = ensure_team_exists(&storage, Some(id)).await
    {
        return Ok(response);
    }

    let phone = match update_data.phone.map(|p| p.trim().to_string()) {
        Some(p) if p.is_empty() => None,
        Some(p) => {
            if let Err(msg) = validate_phone(&p) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
            }
            Some(p)
        }
        None => None,
    };

    let address = match update_data.address.map(|a| a.into_address()).transpose() {
        Ok(address) => address,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::CepInvalid, msg)));
        }
    };

    let update = StudentProfileUpdate {
        team_id,
        birth_date: update_data.birth_date,
        address,
    };

    match storage.update_student(student_id, update, phone).await {
        Ok(Some(detail)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "Aluno atualizado")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Aluno não encontrado",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to update student",
            &e,
        )),
    }
}
