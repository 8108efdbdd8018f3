use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::middlewares::RequireJWT;
use crate::models::auth::requests::CompleteProfileRequest;
use crate::models::students::requests::NewStudentProfile;
use crate::models::users::entities::Credential;
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, is_unique_violation, unauthorized};
use crate::utils::cpf::normalize_cpf;
use crate::utils::validate::{normalize_name, validate_name, validate_phone};

use super::{AuthService, invalidate_cached_user};

pub async fn handle_complete_profile(
    service: &AuthService,
    profile_request: CompleteProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    if let Credential::Password { .. } = current_user.credential() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::LocalAccountNotAllowed,
            "Apenas contas Google precisam completar o cadastro",
        )));
    }

    if current_user.profile_complete {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ProfileAlreadyComplete,
            "Cadastro já está completo",
        )));
    }

    if let Err(msg) = validate_name(&profile_request.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    let Some(cpf) = normalize_cpf(&profile_request.cpf) else {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CpfInvalid, "CPF inválido")));
    };

    let phone = profile_request
        .phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());
    if let Some(phone) = &phone
        && let Err(msg) = validate_phone(phone)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let address = match profile_request.address.unwrap_or_default().into_address() {
        Ok(address) => address,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::CepInvalid, msg)));
        }
    };

    let storage = service.get_storage(request);

    match storage.get_user_by_cpf(&cpf).await {
        Ok(Some(other)) if other.id != current_user.id => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserCpfAlreadyExists,
                "CPF já cadastrado",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::UserUpdateFailed,
                "Falha ao completar cadastro",
                &e,
            ));
        }
    }

    let profile = NewStudentProfile {
        team_id: None,
        birth_date: profile_request.birth_date,
        address,
    };

    match storage
        .complete_user_profile(
            current_user.id,
            &normalize_name(&profile_request.name),
            &cpf,
            phone,
            profile,
        )
        .await
    {
        Ok(Some(user)) => {
            invalidate_cached_user(request).await;
            info!("User {} completed profile", user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserResponse { user },
                "Cadastro concluído",
            )))
        }
        Ok(None) => Ok(unauthorized()),
        Err(e) if is_unique_violation(&e) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserCpfAlreadyExists, "CPF já cadastrado"),
        )),
        Err(e) => Ok(internal_error(
            ErrorCode::UserUpdateFailed,
            "Falha ao completar cadastro",
            &e,
        )),
    }
}
