use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use crate::models::auth::requests::RegisterRequest;
use crate::models::students::requests::{AddressInput, CreateStudentRequest, NewStudentProfile};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::NewUser;
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, is_unique_violation};
use crate::storage::Storage;
use crate::utils::cpf::normalize_cpf;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    normalize_email, normalize_name, validate_email, validate_name, validate_password,
    validate_phone,
};

use super::AuthService;

/// 学员注册的公共字段（自助注册与教师代为注册共用）
#[derive(Debug, Clone)]
pub(crate) struct StudentRegistration {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub password: String,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub address: Option<AddressInput>,
    pub team_id: Option<i64>,
}

impl From<RegisterRequest> for StudentRegistration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            cpf: req.cpf,
            password: req.password,
            phone: req.phone,
            birth_date: req.birth_date,
            address: req.address,
            team_id: None,
        }
    }
}

impl From<CreateStudentRequest> for StudentRegistration {
    fn from(req: CreateStudentRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            cpf: req.cpf,
            password: req.password,
            phone: req.phone,
            birth_date: req.birth_date,
            address: req.address,
            team_id: req.team_id,
        }
    }
}

fn bad_request(code: ErrorCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(code, message))
}

/// 校验字段并转换为存储层参数，失败时返回可直接响应的错误
pub(crate) async fn prepare_student_registration(
    storage: &Arc<dyn Storage>,
    registration: StudentRegistration,
) -> Result<(NewUser, NewStudentProfile), HttpResponse> {
    validate_name(&registration.name).map_err(|msg| bad_request(ErrorCode::UserNameInvalid, msg))?;

    let email = normalize_email(&registration.email);
    validate_email(&email).map_err(|msg| bad_request(ErrorCode::UserEmailInvalid, msg))?;

    let cpf = normalize_cpf(&registration.cpf)
        .ok_or_else(|| bad_request(ErrorCode::CpfInvalid, "CPF inválido"))?;

    let password_check = validate_password(&registration.password);
    if !password_check.is_valid {
        return Err(bad_request(
            ErrorCode::UserPasswordInvalid,
            password_check.error_message(),
        ));
    }

    let phone = match registration.phone.map(|p| p.trim().to_string()) {
        Some(p) if p.is_empty() => None,
        Some(p) => {
            validate_phone(&p).map_err(|msg| bad_request(ErrorCode::BadRequest, msg))?;
            Some(p)
        }
        None => None,
    };

    let address = registration
        .address
        .unwrap_or_default()
        .into_address()
        .map_err(|msg| bad_request(ErrorCode::CepInvalid, msg))?;

    match storage.get_user_by_email(&email).await {
        Ok(Some(_)) => {
            return Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "E-mail já cadastrado",
            )));
        }
        Ok(None) => {}
        Err(e) => return Err(internal_error(ErrorCode::RegisterFailed, "Falha no cadastro", &e)),
    }

    match storage.get_user_by_cpf(&cpf).await {
        Ok(Some(_)) => {
            return Err(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserCpfAlreadyExists,
                "CPF já cadastrado",
            )));
        }
        Ok(None) => {}
        Err(e) => return Err(internal_error(ErrorCode::RegisterFailed, "Falha no cadastro", &e)),
    }

    let password_hash = hash_password(&registration.password)
        .map_err(|e| {
            internal_error(ErrorCode::RegisterFailed, "Falha ao gerar hash da senha", &e)
        })?;

    let mut user = NewUser::local(
        normalize_name(&registration.name),
        email,
        Some(cpf),
        password_hash,
        UserRole::Student,
    );
    user.phone = phone;

    let profile = NewStudentProfile {
        team_id: registration.team_id,
        birth_date: registration.birth_date,
        address,
    };

    Ok((user, profile))
}

/// 写入账号与学员档案，唯一约束冲突映射为 409
pub(crate) async fn persist_student_registration(
    storage: &Arc<dyn Storage>,
    user: NewUser,
    profile: NewStudentProfile,
) -> Result<crate::models::users::entities::User, HttpResponse> {
    match storage.register_student(user, profile).await {
        Ok((user, _student)) => Ok(user),
        Err(e) if is_unique_violation(&e) => Err(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UserAlreadyExists, "E-mail ou CPF já cadastrado"),
        )),
        Err(e) => Err(internal_error(ErrorCode::RegisterFailed, "Falha no cadastro", &e)),
    }
}

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let prepared = prepare_student_registration(&storage, register_request.into()).await;
    let (user, profile) = match prepared {
        Ok(prepared) => prepared,
        Err(response) => return Ok(response),
    };

    match persist_student_registration(&storage, user, profile).await {
        Ok(user) => {
            info!("Student {} registered", user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                UserResponse { user },
                "Cadastro realizado com sucesso",
            )))
        }
        Err(response) => Ok(response),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::test_support::memory_storage;

    fn registration() -> StudentRegistration {
        StudentRegistration {
            name: "  carla   dias ".to_string(),
            email: "Carla@Example.com".to_string(),
            cpf: "529.982.247-25".to_string(),
            password: "Faixa2025".to_string(),
            phone: Some("(11) 98765-4321".to_string()),
            birth_date: None,
            address: Some(AddressInput {
                cep: Some("01001-000".to_string()),
                ..Default::default()
            }),
            team_id: None,
        }
    }

    #[tokio::test]
    async fn test_prepare_normalizes_fields() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);
        let (user, profile) = prepare_student_registration(&storage, registration())
            .await
            .unwrap();
        assert_eq!(user.name, "CARLA DIAS");
        assert_eq!(user.email, "carla@example.com");
        assert_eq!(user.cpf.as_deref(), Some("52998224725"));
        assert_eq!(user.role, UserRole::Student);
        assert_ne!(user.password_hash.as_deref(), Some("Faixa2025"));
        assert_eq!(profile.address.cep.as_deref(), Some("01001000"));
    }

    #[tokio::test]
    async fn test_prepare_rejects_invalid_cpf_and_duplicates() {
        let storage: Arc<dyn Storage> = Arc::new(memory_storage().await);

        let mut bad_cpf = registration();
        bad_cpf.cpf = "123.456.789-00".to_string();
        let response = prepare_student_registration(&storage, bad_cpf).await.unwrap_err();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let (user, profile) = prepare_student_registration(&storage, registration())
            .await
            .unwrap();
        persist_student_registration(&storage, user, profile).await.unwrap();

        let response = prepare_student_registration(&storage, registration())
            .await
            .unwrap_err();
        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }
}
