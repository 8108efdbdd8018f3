use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::users::entities::Credential;
use crate::models::users::requests::ResetPasswordRequest;
use crate::models::users::responses::ResetPasswordResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::utils::password::hash_password;
use crate::utils::random_code::generate_temporary_password;
use crate::utils::validate::validate_password_simple;

/// 重置本地账号密码，下次登录必须修改
pub async fn reset_password(
    service: &UserService,
    user_id: i64,
    reset_request: ResetPasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to get user information",
                &e,
            ));
        }
    };

    if let Credential::Federated { .. } = user.credential() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FederatedAccountNotAllowed,
            "Contas Google não possuem senha local",
        )));
    }

    let (password, generated) = match reset_request.new_password {
        Some(password) => {
            if let Err(msg) = validate_password_simple(&password) {
                return Ok(HttpResponse::BadRequest()
                    .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
            }
            (password, false)
        }
        None => (generate_temporary_password(), true),
    };

    let hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Password hashing failed",
                &e,
            ));
        }
    };

    match storage.update_user_password(user.id, &hash, true).await {
        Ok(true) => {
            info!("Password reset for user {}", user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ResetPasswordResponse {
                    user_id: user.id,
                    temporary_password: generated.then_some(password),
                },
                "Senha redefinida",
            )))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::UserUpdateFailed,
            "Failed to reset password",
            &e,
        )),
    }
}
