use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::models::Belt;
use crate::models::auth::requests::GoogleLoginRequest;
use crate::models::users::entities::{AuthProvider, Credential, User, UserRole};
use crate::models::users::requests::NewUser;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::google::{GoogleIdentity, GoogleVerifier};
use crate::utils::validate::normalize_name;

use super::{AuthService, issue_session};

/// 首次 Google 登录时建立的待补全账号
pub(crate) fn partial_profile(identity: &GoogleIdentity) -> NewUser {
    let display_name = identity
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| identity.email.split('@').next().unwrap_or_default());

    NewUser {
        name: normalize_name(display_name),
        email: identity.email.clone(),
        cpf: None,
        password_hash: None,
        auth_provider: AuthProvider::Google,
        provider_subject: Some(identity.subject.clone()),
        role: UserRole::Student,
        belt: Belt::Branca,
        must_change_password: false,
        profile_complete: false,
        phone: None,
    }
}

enum ExistingAccount {
    SignIn,
    LocalConflict,
    SubjectMismatch,
}

fn classify_existing(user: &User, identity: &GoogleIdentity) -> ExistingAccount {
    match user.credential() {
        Credential::Password { .. } => ExistingAccount::LocalConflict,
        Credential::Federated { subject, .. } => match subject {
            Some(subject) if subject != identity.subject => ExistingAccount::SubjectMismatch,
            _ => ExistingAccount::SignIn,
        },
    }
}

pub async fn handle_google_login(
    service: &AuthService,
    google_request: GoogleLoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    if !config.google_sign_in_enabled() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::GoogleSignInDisabled,
            "Login com Google não está habilitado",
        )));
    }

    let verifier = match GoogleVerifier::from_config(&config.google) {
        Ok(v) => v,
        Err(e) => {
            error!("Failed to build Google verifier: {}", e);
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Falha ao validar login com Google",
            )));
        }
    };

    let identity = match verifier.verify(&google_request.id_token).await {
        Ok(identity) => identity,
        Err(e) => {
            info!("Google sign-in rejected: {}", e);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Token do Google inválido",
            )));
        }
    };

    let storage = service.get_storage(request);

    let user = match storage.get_user_by_email(&identity.email).await {
        Ok(Some(user)) => match classify_existing(&user, &identity) {
            ExistingAccount::SignIn => user,
            ExistingAccount::LocalConflict => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::LocalAccountNotAllowed,
                    "Este e-mail já possui cadastro com senha. Use o login tradicional.",
                )));
            }
            ExistingAccount::SubjectMismatch => {
                info!("Google subject mismatch for user {}", user.id);
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Conta Google não corresponde ao cadastro",
                )));
            }
        },
        Ok(None) => match storage.create_user(partial_profile(&identity)).await {
            Ok(user) => {
                info!("Created partial profile {} from Google sign-in", user.id);
                user
            }
            Err(e) => {
                error!("Failed to create Google account: {}", e);
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "Falha ao criar conta",
                )));
            }
        },
        Err(e) => {
            error!("Google sign-in lookup failed: {}", e);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Falha no login com Google",
            )));
        }
    };

    if !user.is_active() {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Conta desativada",
        )));
    }

    if let Err(e) = storage.update_last_login(user.id).await {
        error!("Failed to update last login for user {}: {}", user.id, e);
    }

    Ok(issue_session(&user, google_request.remember_me, "Login realizado com sucesso"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: Option<&str>) -> GoogleIdentity {
        GoogleIdentity {
            subject: "10987".to_string(),
            email: "paulo.souza@gmail.com".to_string(),
            name: name.map(str::to_string),
        }
    }

    #[test]
    fn test_partial_profile() {
        let user = partial_profile(&identity(Some("Paulo  Souza")));
        assert_eq!(user.name, "PAULO SOUZA");
        assert_eq!(user.auth_provider, AuthProvider::Google);
        assert_eq!(user.role, UserRole::Student);
        assert!(user.password_hash.is_none());
        assert!(!user.profile_complete);
        assert_eq!(user.provider_subject.as_deref(), Some("10987"));
    }

    #[test]
    fn test_partial_profile_falls_back_to_email() {
        assert_eq!(partial_profile(&identity(None)).name, "PAULO.SOUZA");
    }
}
