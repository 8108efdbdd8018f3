use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        requests::{CreateUserRequest, NewUser},
        responses::UserResponse,
    },
};
use crate::services::{internal_error, is_unique_violation};
use crate::utils::cpf::normalize_cpf;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    normalize_email, normalize_name, validate_email, validate_name, validate_password_simple,
};

/// 管理员创建账号（本地密码），学员档案由学员接口负责
pub async fn create_user(
    service: &UserService,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_name(&user_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    let email = normalize_email(&user_data.email);
    if let Err(msg) = validate_email(&email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    let cpf = match user_data.cpf.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match normalize_cpf(raw) {
            Some(cpf) => Some(cpf),
            None => {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::CpfInvalid, "CPF inválido")));
            }
        },
    };

    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    let password_hash = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Password hashing failed",
                &e,
            ));
        }
    };

    let mut new_user = NewUser::local(
        normalize_name(&user_data.name),
        email,
        cpf,
        password_hash,
        user_data.role,
    );
    new_user.belt = user_data.belt.unwrap_or(new_user.belt);
    new_user.phone = user_data.phone.filter(|p| !p.trim().is_empty());

    let storage = service.get_storage(request);

    match storage.create_user(new_user).await {
        Ok(user) => {
            info!("Admin created user {} ({})", user.id, user.role);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(UserResponse { user }, "用户创建成功")))
        }
        Err(e) if is_unique_violation(&e) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "E-mail ou CPF já cadastrado"),
        )),
        Err(e) => Ok(internal_error(
            ErrorCode::UserCreationFailed,
            "User creation failed",
            &e,
        )),
    }
}
