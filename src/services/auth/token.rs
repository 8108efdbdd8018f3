use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::middlewares::RequireJWT;
use crate::models::auth::responses::{
    RefreshTokenResponse, TokenVerificationResponse, UserInfoResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::unauthorized;
use crate::utils::jwt::{self, TokenKind};

use super::AuthService;

fn session_expired() -> HttpResponse {
    HttpResponse::Unauthorized()
        .cookie(jwt::expired_refresh_token_cookie())
        .json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Sessão expirada, faça login novamente",
        ))
}

pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = jwt::refresh_token_from_cookie(request) else {
        return Ok(unauthorized());
    };

    let claims = match jwt::verify_refresh_token(&refresh_token) {
        Ok(claims) => claims,
        Err(e) => {
            info!("Refresh token rejected: {}", e);
            return Ok(session_expired());
        }
    };

    let Some(user_id) = claims.user_id() else {
        return Ok(session_expired());
    };

    // 角色以数据库为准，停用账号不能续期
    let storage = service.get_storage(request);
    let user = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) if user.is_active() => user,
        Ok(_) => return Ok(session_expired()),
        Err(e) => {
            error!("Refresh token user lookup failed: {}", e);
            return Ok(session_expired());
        }
    };

    let jwt = jwt::global();
    match jwt.issue(
        user.id,
        &user.role.to_string(),
        TokenKind::Access,
        chrono::Duration::seconds(jwt.access_token_ttl_secs()),
    ) {
        Ok(access_token) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshTokenResponse {
                access_token,
                expires_in: jwt.access_token_ttl_secs(),
            },
            "Token refreshed successfully",
        ))),
        Err(e) => {
            error!("Failed to issue access token: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "无法生成令牌",
            )))
        }
    }
}

pub async fn handle_verify_token(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TokenVerificationResponse { is_valid: true },
        "Token is valid",
    )))
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        None => Ok(unauthorized()),
    }
}
