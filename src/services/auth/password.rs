use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::middlewares::RequireJWT;
use crate::models::auth::requests::ChangePasswordRequest;
use crate::models::users::entities::Credential;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validate::validate_password;

use super::{AuthService, invalidate_cached_user};

pub async fn handle_change_password(
    service: &AuthService,
    change_request: ChangePasswordRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    // 认证来源不可更改，第三方账号没有本地密码
    let hash = match current_user.credential() {
        Credential::Password { hash } => hash,
        Credential::Federated { .. } => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::FederatedAccountNotAllowed,
                "Contas Google não possuem senha local",
            )));
        }
    };

    let storage = service.get_storage(request);

    // 缓存中的用户不含哈希，从存储层读取
    let stored_hash = match storage.get_user_by_id(current_user.id).await {
        Ok(Some(user)) => user.password_hash.unwrap_or(hash),
        Ok(None) => return Ok(unauthorized()),
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Falha ao alterar senha",
                &e,
            ));
        }
    };

    if !verify_password(&change_request.current_password, &stored_hash) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Senha atual incorreta",
        )));
    }

    let check = validate_password(&change_request.new_password);
    if !check.is_valid {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserPasswordInvalid,
            check.error_message(),
        )));
    }

    let new_hash = match hash_password(&change_request.new_password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Falha ao gerar hash da senha",
                &e,
            ));
        }
    };

    match storage
        .update_user_password(current_user.id, &new_hash, false)
        .await
    {
        Ok(true) => {
            invalidate_cached_user(request).await;
            info!("User {} changed password", current_user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Senha alterada com sucesso")))
        }
        Ok(false) => Ok(unauthorized()),
        Err(e) => Ok(internal_error(
            ErrorCode::UserUpdateFailed,
            "Falha ao alterar senha",
            &e,
        )),
    }
}
