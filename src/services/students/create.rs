use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{StudentService, ensure_team_exists};
use crate::models::students::requests::CreateStudentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::auth::register::{
    persist_student_registration, prepare_student_registration,
};
use crate::services::internal_error;

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = ensure_team_exists(&storage, student_data.team_id).await {
        return Ok(response);
    }

    let (user, profile) = match prepare_student_registration(&storage, student_data.into()).await {
        Ok(prepared) => prepared,
        Err(response) => return Ok(response),
    };

    let user = match persist_student_registration(&storage, user, profile).await {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };

    info!("Student account {} created by staff", user.id);

    match storage.get_student_by_user_id(user.id).await {
        Ok(Some(detail)) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(detail, "Aluno cadastrado")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Aluno não encontrado",
        ))),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to load student",
            &e,
        )),
    }
}
