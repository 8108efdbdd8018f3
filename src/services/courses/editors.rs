use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, course_not_found, load_editable_course};
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::UpdateEditorsRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

/// 替换编辑者列表，仅所有者和管理员可操作
pub async fn update_editors(
    service: &CourseService,
    course_id: i64,
    editors: UpdateEditorsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let course = match load_editable_course(&storage, course_id, &current_user).await {
        Ok(course) => course,
        Err(response) => return Ok(response),
    };

    if course.owner_id != current_user.id && current_user.role != UserRole::Admin {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::CoursePermissionDenied,
            "Apenas o autor do curso pode definir editores",
        )));
    }

    let mut editor_ids = editors.editor_ids;
    editor_ids.sort_unstable();
    editor_ids.dedup();
    editor_ids.retain(|id| *id != course.owner_id);

    for editor_id in &editor_ids {
        match storage.get_user_by_id(*editor_id).await {
            Ok(Some(user)) if user.role.is_staff() => {}
            Ok(_) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    format!("Usuário {editor_id} não pode ser editor"),
                )));
            }
            Err(e) => {
                return Ok(internal_error(
                    ErrorCode::InternalServerError,
                    "Failed to update editors",
                    &e,
                ));
            }
        }
    }

    match storage.set_course_editors(course_id, editor_ids).await {
        Ok(Some(course)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Editores atualizados")))
        }
        Ok(None) => Ok(course_not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to update editors",
            &e,
        )),
    }
}
