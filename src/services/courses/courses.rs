use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{CourseService, course_not_found, load_editable_course, validate_title};
use crate::middlewares::RequireJWT;
use crate::models::courses::requests::{
    CourseListResponse, CreateCourseRequest, UpdateCourseRequest,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};

/// 列出当前用户可见的课程
pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    match storage.list_courses().await {
        Ok(courses) => {
            let items = courses
                .into_iter()
                .filter(|c| c.can_view(&current_user))
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CourseListResponse { items },
                "Cursos carregados",
            )))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to list courses",
            &e,
        )),
    }
}

/// 课程完整结构
pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    match storage.get_course_tree(course_id).await {
        Ok(Some(tree)) if tree.course.can_view(&current_user) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(tree, "Curso carregado")))
        }
        Ok(_) => Ok(course_not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to get course",
            &e,
        )),
    }
}

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let title = match validate_title(&course_data.title) {
        Ok(title) => title,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    match storage
        .create_course(
            current_user.id,
            &title,
            course_data.description,
            course_data.published,
        )
        .await
    {
        Ok(course) => {
            info!("Course {} created by user {}", course.id, current_user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(course, "Curso criado")))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to create course",
            &e,
        )),
    }
}

pub async fn update_course(
    service: &CourseService,
    course_id: i64,
    mut update_data: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    if let Err(response) = load_editable_course(&storage, course_id, &current_user).await {
        return Ok(response);
    }

    if let Some(title) = update_data.title.take() {
        match validate_title(&title) {
            Ok(title) => update_data.title = Some(title),
            Err(response) => return Ok(response),
        }
    }

    match storage.update_course(course_id, update_data).await {
        Ok(Some(course)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Curso atualizado")))
        }
        Ok(None) => Ok(course_not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to update course",
            &e,
        )),
    }
}

/// 删除课程及其模块和课时
pub async fn delete_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    if let Err(response) = load_editable_course(&storage, course_id, &current_user).await {
        return Ok(response);
    }

    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("Course {} deleted by user {}", course_id, current_user.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Curso removido")))
        }
        Ok(false) => Ok(course_not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to delete course",
            &e,
        )),
    }
}
