use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::utils::jwt;

use super::invalidate_cached_user;

/// 清除 refresh token cookie 与当前令牌的用户缓存
pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    invalidate_cached_user(request).await;

    Ok(HttpResponse::Ok()
        .cookie(jwt::expired_refresh_token_cookie())
        .json(ApiResponse::<()>::success_empty("Logout realizado")))
}
