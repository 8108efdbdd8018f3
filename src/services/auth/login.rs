use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::auth::requests::LoginRequest;
use crate::models::users::entities::{Credential, User};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::cpf::normalize_cpf;
use crate::utils::password::verify_password;
use crate::utils::validate::normalize_email;

use super::{AuthService, issue_session};

/// 含 @ 视为邮箱（小写），否则按 CPF 取数字
pub(crate) fn normalize_identifier(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.contains('@') {
        Some(normalize_email(raw))
    } else {
        normalize_cpf(raw)
    }
}

// 所有失败都返回同一个响应，不暴露账号是否存在
fn login_failed() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::AuthFailed,
        "Usuário ou senha inválidos",
    ))
}

/// 在候选账号中找到密码匹配的本地账号，第三方账号跳过
fn find_matching_user(candidates: Vec<User>, password: &str) -> Option<User> {
    candidates.into_iter().find(|user| {
        user.is_active()
            && match user.credential() {
                Credential::Password { hash } => verify_password(password, &hash),
                Credential::Federated { .. } => false,
            }
    })
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(identifier) = normalize_identifier(&login_request.identifier) else {
        return Ok(login_failed());
    };

    let candidates = match storage.find_users_by_identifier(&identifier).await {
        Ok(users) => users,
        Err(e) => {
            error!("Login lookup failed: {}", e);
            return Ok(login_failed());
        }
    };

    let Some(user) = find_matching_user(candidates, &login_request.password) else {
        return Ok(login_failed());
    };

    if let Err(e) = storage.update_last_login(user.id).await {
        error!("Failed to update last login for user {}: {}", user.id, e);
    }

    info!("User {} logged in successfully", user.id);
    Ok(issue_session(&user, login_request.remember_me, "Login realizado com sucesso"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Belt;
    use crate::models::users::entities::{AuthProvider, UserRole, UserStatus};
    use crate::utils::password::hash_password_with;

    fn cheap_hash(password: &str) -> String {
        let config = crate::config::Argon2Config {
            memory_cost: 8,
            time_cost: 1,
            parallelism: 1,
        };
        hash_password_with(password, &config).unwrap()
    }

    fn user(id: i64, provider: AuthProvider, hash: Option<String>) -> User {
        User {
            id,
            name: "ANA LIMA".to_string(),
            email: "ana@example.com".to_string(),
            cpf: Some("52998224725".to_string()),
            password_hash: hash,
            auth_provider: provider,
            provider_subject: None,
            role: UserRole::Student,
            status: UserStatus::Active,
            belt: Belt::Branca,
            must_change_password: false,
            profile_complete: true,
            phone: None,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(
            normalize_identifier("  Ana@Example.COM "),
            Some("ana@example.com".to_string())
        );
        assert_eq!(
            normalize_identifier("529.982.247-25"),
            Some("52998224725".to_string())
        );
        assert_eq!(normalize_identifier("111.111.111-11"), None);
        assert_eq!(normalize_identifier("   "), None);
    }

    #[test]
    fn test_federated_accounts_are_skipped() {
        let hash = cheap_hash("Segredo123");
        let federated = user(1, AuthProvider::Google, None);
        let local = user(2, AuthProvider::Local, Some(hash));

        let found = find_matching_user(vec![federated, local], "Segredo123").unwrap();
        assert_eq!(found.id, 2);
    }

    #[test]
    fn test_wrong_password_or_inactive_fails() {
        let hash = cheap_hash("Segredo123");
        let candidates = vec![user(2, AuthProvider::Local, Some(hash.clone()))];
        assert!(find_matching_user(candidates, "errada").is_none());

        let mut suspended = user(3, AuthProvider::Local, Some(hash));
        suspended.status = UserStatus::Suspended;
        assert!(find_matching_user(vec![suspended], "Segredo123").is_none());
    }
}
