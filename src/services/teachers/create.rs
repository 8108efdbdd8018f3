use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TeacherService;
use crate::models::teachers::CreateTeacherRequest;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::NewUser;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, is_unique_violation};
use crate::utils::cpf::normalize_cpf;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    normalize_email, normalize_name, validate_email, validate_name, validate_password,
    validate_phone,
};

fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

/// 创建教师账号及其 professores 档案
pub async fn create_teacher(
    service: &TeacherService,
    teacher_data: CreateTeacherRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&teacher_data.name) {
        return Ok(bad_request(ErrorCode::UserNameInvalid, msg));
    }

    let email = normalize_email(&teacher_data.email);
    if let Err(msg) = validate_email(&email) {
        return Ok(bad_request(ErrorCode::UserEmailInvalid, msg));
    }

    let cpf = match teacher_data.cpf.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match normalize_cpf(raw) {
            Some(cpf) => Some(cpf),
            None => return Ok(bad_request(ErrorCode::CpfInvalid, "CPF inválido")),
        },
    };

    let password_check = validate_password(&teacher_data.password);
    if !password_check.is_valid {
        return Ok(bad_request(
            ErrorCode::UserPasswordInvalid,
            password_check.error_message(),
        ));
    }

    let phone = match teacher_data.phone.map(|p| p.trim().to_string()) {
        Some(p) if p.is_empty() => None,
        Some(p) => {
            if let Err(msg) = validate_phone(&p) {
                return Ok(bad_request(ErrorCode::BadRequest, msg));
            }
            Some(p)
        }
        None => None,
    };

    let storage = service.get_storage(request);

    if let Some(team_id) = teacher_data.team_id {
        match storage.get_team_by_id(team_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TeamNotFound,
                    "Equipe não encontrada",
                )));
            }
            Err(e) => {
                return Ok(internal_error(
                    ErrorCode::InternalServerError,
                    "Failed to create teacher",
                    &e,
                ));
            }
        }
    }

    let password_hash = match hash_password(&teacher_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Password hashing failed",
                &e,
            ));
        }
    };

    let mut user = NewUser::local(
        normalize_name(&teacher_data.name),
        email,
        cpf,
        password_hash,
        UserRole::Teacher,
    );
    user.belt = teacher_data.belt.unwrap_or(user.belt);
    user.phone = phone;

    let federation_number = teacher_data
        .federation_number
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    match storage
        .create_teacher(user, teacher_data.team_id, federation_number)
        .await
    {
        Ok(detail) => {
            info!("Teacher account {} created", detail.teacher.user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(detail, "Professor cadastrado")))
        }
        Err(e) if is_unique_violation(&e) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "E-mail ou CPF já cadastrado"),
        )),
        Err(e) => Ok(internal_error(
            ErrorCode::UserCreationFailed,
            "Failed to create teacher",
            &e,
        )),
    }
}
