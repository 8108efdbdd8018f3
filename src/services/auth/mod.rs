pub mod google;
pub mod login;
pub mod logout;
pub mod password;
pub mod profile;
pub mod register;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::error;

use crate::cache::ObjectCache;
use crate::config::AppConfig;
use crate::middlewares::require_jwt::user_cache_key;
use crate::models::auth::requests::{
    ChangePasswordRequest, CompleteProfileRequest, GoogleLoginRequest, LoginRequest,
    RegisterRequest,
};
use crate::models::auth::responses::{LoginResponse, SessionUser};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::jwt;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 邮箱或 CPF + 密码登录
    pub async fn login(
        &self,
        login_request: LoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, request).await
    }

    // Google 登录
    pub async fn google_login(
        &self,
        google_request: GoogleLoginRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        google::handle_google_login(self, google_request, request).await
    }

    // 学员自助注册
    pub async fn register(
        &self,
        register_request: RegisterRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, register_request, request).await
    }

    // 刷新令牌
    pub async fn refresh_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, request).await
    }

    // 验证令牌
    pub async fn verify_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_verify_token(self, request).await
    }

    // 当前用户
    pub async fn get_user(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_get_user(self, request).await
    }

    // 登出
    pub async fn logout(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(request).await
    }

    // 修改密码
    pub async fn change_password(
        &self,
        change_request: ChangePasswordRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        password::handle_change_password(self, change_request, request).await
    }

    // 第三方账号补全资料
    pub async fn complete_profile(
        &self,
        profile_request: CompleteProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_complete_profile(self, profile_request, request).await
    }
}

/// 签发令牌对，返回会话信息并写入 refresh token cookie
pub(crate) fn issue_session(user: &User, remember_me: bool, message: &str) -> HttpResponse {
    let jwt = jwt::global();
    let refresh_ttl = jwt.refresh_token_ttl(remember_me);

    match user.generate_token_pair(Some(refresh_ttl)) {
        Ok(token_pair) => {
            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: jwt.access_token_ttl_secs(),
                session: SessionUser::from(user),
                created_at: chrono::Utc::now(),
            };

            HttpResponse::Ok()
                .cookie(jwt::refresh_token_cookie(&token_pair.refresh_token, refresh_ttl))
                .json(ApiResponse::success(response, message))
        }
        Err(e) => {
            error!("Failed to generate JWT token for user {}: {}", user.id, e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "无法生成登录令牌",
            ))
        }
    }
}

/// 清除当前 access token 对应的用户缓存
pub(crate) async fn invalidate_cached_user(request: &HttpRequest) {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));

    if let Some(token) = token
        && let Some(cache) = request.app_data::<web::Data<Arc<dyn ObjectCache>>>()
    {
        cache.remove(&user_cache_key(token)).await;
    }
}
