use crate::config::{AppConfig, JwtConfig};
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

/// 令牌用途
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,     // 用户 ID
    pub role: String,    // 签发时的角色，权限判断以数据库为准
    pub kind: TokenKind, // access / refresh
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}

// Token 响应结构体
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// 签名密钥与有效期
pub struct JwtUtils<'a> {
    config: &'a JwtConfig,
}

impl<'a> JwtUtils<'a> {
    pub fn with_config(config: &'a JwtConfig) -> Self {
        Self { config }
    }

    /// access token 有效期（秒）
    pub fn access_token_ttl_secs(&self) -> i64 {
        self.config.access_token_expiry * 60
    }

    /// refresh token 有效期，记住我时更长
    pub fn refresh_token_ttl(&self, remember_me: bool) -> chrono::Duration {
        if remember_me {
            chrono::Duration::days(self.config.refresh_token_remember_me_expiry)
        } else {
            chrono::Duration::days(self.config.refresh_token_expiry)
        }
    }

    pub fn issue(
        &self,
        user_id: i64,
        role: &str,
        kind: TokenKind,
        ttl: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            kind,
            exp: (now + ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )
    }

    pub fn issue_pair(
        &self,
        user_id: i64,
        role: &str,
        refresh_ttl: chrono::Duration,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        Ok(TokenPair {
            access_token: self.issue(
                user_id,
                role,
                TokenKind::Access,
                chrono::Duration::seconds(self.access_token_ttl_secs()),
            )?,
            refresh_token: self.issue(user_id, role, TokenKind::Refresh, refresh_ttl)?,
        })
    }

    /// 校验签名、过期时间与用途
    pub fn verify(
        &self,
        token: &str,
        expected: TokenKind,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &Validation::default(),
        )?
        .claims;

        if claims.kind != expected {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }
}

/// 使用全局配置的便捷入口
pub fn global() -> JwtUtils<'static> {
    JwtUtils::with_config(&AppConfig::get().jwt)
}

/// 生成 access + refresh 令牌对
pub fn generate_token_pair(
    user_id: i64,
    role: &str,
    refresh_ttl: Option<chrono::Duration>,
) -> Result<TokenPair, jsonwebtoken::errors::Error> {
    let jwt = global();
    let ttl = refresh_ttl.unwrap_or_else(|| jwt.refresh_token_ttl(false));
    jwt.issue_pair(user_id, role, ttl)
}

pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    global().verify(token, TokenKind::Access)
}

pub fn verify_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    global().verify(token, TokenKind::Refresh)
}

/// Refresh Token Cookie，max-age 与令牌有效期一致
pub fn refresh_token_cookie(refresh_token: &str, ttl: chrono::Duration) -> Cookie<'static> {
    let config = AppConfig::get();
    Cookie::build(REFRESH_COOKIE_NAME, refresh_token.to_string())
        .path("/")
        .max_age(actix_web::cookie::time::Duration::seconds(ttl.num_seconds()))
        .same_site(SameSite::Strict)
        .http_only(true)
        .secure(config.is_production())
        .finish()
}

/// 清空 Refresh Token Cookie（注销）
pub fn expired_refresh_token_cookie() -> Cookie<'static> {
    refresh_token_cookie("", chrono::Duration::zero())
}

pub fn refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
    req.cookie(REFRESH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry: 15,
            refresh_token_expiry: 7,
            refresh_token_remember_me_expiry: 30,
        }
    }

    #[test]
    fn test_pair_kinds_are_not_interchangeable() {
        let config = test_config();
        let jwt = JwtUtils::with_config(&config);
        let pair = jwt
            .issue_pair(42, "student", jwt.refresh_token_ttl(false))
            .unwrap();

        let access = jwt.verify(&pair.access_token, TokenKind::Access).unwrap();
        assert_eq!(access.user_id(), Some(42));
        assert_eq!(access.role, "student");

        assert!(jwt.verify(&pair.access_token, TokenKind::Refresh).is_err());
        assert!(jwt.verify(&pair.refresh_token, TokenKind::Access).is_err());
        assert!(jwt.verify(&pair.refresh_token, TokenKind::Refresh).is_ok());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let token = JwtUtils::with_config(&config)
            .issue(1, "admin", TokenKind::Access, chrono::Duration::minutes(5))
            .unwrap();

        let other = JwtConfig {
            secret: "another-secret".to_string(),
            ..test_config()
        };
        assert!(
            JwtUtils::with_config(&other)
                .verify(&token, TokenKind::Access)
                .is_err()
        );
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let jwt = JwtUtils::with_config(&config);
        let token = jwt
            .issue(1, "admin", TokenKind::Access, chrono::Duration::minutes(-10))
            .unwrap();
        assert!(jwt.verify(&token, TokenKind::Access).is_err());
    }

    #[test]
    fn test_remember_me_extends_refresh_ttl() {
        let config = test_config();
        let jwt = JwtUtils::with_config(&config);
        assert_eq!(jwt.refresh_token_ttl(false), chrono::Duration::days(7));
        assert_eq!(jwt.refresh_token_ttl(true), chrono::Duration::days(30));
        assert_eq!(jwt.access_token_ttl_secs(), 900);
    }
}
