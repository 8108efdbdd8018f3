use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::modules::load_editable_module;
use super::{CourseService, validate_lesson_content, validate_title};
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::{CreateLessonRequest, UpdateLessonRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

fn lesson_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::LessonNotFound,
        "Aula não encontrada",
    ))
}

pub async fn create_lesson(
    service: &CourseService,
    module_id: i64,
    lesson_data: CreateLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let title = match validate_title(&lesson_data.title) {
        Ok(title) => title,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    if let Err(response) = load_editable_module(&storage, module_id, &current_user).await {
        return Ok(response);
    }

    if let Err(response) = validate_lesson_content(&storage, &lesson_data.content).await {
        return Ok(response);
    }

    match storage
        .create_lesson(module_id, &title, lesson_data.position, lesson_data.content)
        .await
    {
        Ok(lesson) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(lesson, "Aula criada")))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to create lesson",
            &e,
        )),
    }
}

pub async fn update_lesson(
    service: &CourseService,
    lesson_id: i64,
    mut update_data: UpdateLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let lesson = match storage.get_lesson(lesson_id).await {
        Ok(Some(lesson)) => lesson,
        Ok(None) => return Ok(lesson_not_found()),
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to update lesson",
                &e,
            ));
        }
    };

    if let Err(response) = load_editable_module(&storage, lesson.module_id, &current_user).await {
        return Ok(response);
    }

    if let Some(title) = update_data.title.take() {
        match validate_title(&title) {
            Ok(title) => update_data.title = Some(title),
            Err(response) => return Ok(response),
        }
    }

    if let Some(content) = &update_data.content
        && let Err(response) = validate_lesson_content(&storage, content).await
    {
        return Ok(response);
    }

    match storage.update_lesson(lesson_id, update_data).await {
        Ok(Some(lesson)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(lesson, "Aula atualizada")))
        }
        Ok(None) => Ok(lesson_not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to update lesson",
            &e,
        )),
    }
}

pub async fn delete_lesson(
    service: &CourseService,
    lesson_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    let lesson = match storage.get_lesson(lesson_id).await {
        Ok(Some(lesson)) => lesson,
        Ok(None) => return Ok(lesson_not_found()),
        Err(e) => {
            return Ok(internal_error(
                ErrorCode::InternalServerError,
                "Failed to delete lesson",
                &e,
            ));
        }
    };

    if let Err(response) = load_editable_module(&storage, lesson.module_id, &current_user).await {
        return Ok(response);
    }

    match storage.delete_lesson(lesson_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Aula removida"))),
        Ok(false) => Ok(lesson_not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to delete lesson",
            &e,
        )),
    }
}
