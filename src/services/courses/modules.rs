use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{CourseService, load_editable_course, validate_title};
use crate::middlewares::RequireJWT;
use crate::models::courses::entities::CourseModule;
use crate::models::courses::requests::{CreateModuleRequest, UpdateModuleRequest};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{internal_error, unauthorized};
use crate::storage::Storage;

pub(crate) fn module_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::ModuleNotFound,
        "Módulo não encontrado",
    ))
}

/// 读取模块并确认其所属课程可编辑
pub(crate) async fn load_editable_module(
    storage: &Arc<dyn Storage>,
    module_id: i64,
    user: &User,
) -> Result<CourseModule, HttpResponse> {
    let module = match storage.get_module(module_id).await {
        Ok(Some(module)) => module,
        Ok(None) => return Err(module_not_found()),
        Err(e) => {
            return Err(internal_error(
                ErrorCode::InternalServerError,
                "Failed to load module",
                &e,
            ));
        }
    };
    load_editable_course(storage, module.course_id, user).await?;
    Ok(module)
}

pub async fn create_module(
    service: &CourseService,
    course_id: i64,
    module_data: CreateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let title = match validate_title(&module_data.title) {
        Ok(title) => title,
        Err(response) => return Ok(response),
    };

    let storage = service.get_storage(request);

    if let Err(response) = load_editable_course(&storage, course_id, &current_user).await {
        return Ok(response);
    }

    match storage
        .create_module(course_id, &title, module_data.position)
        .await
    {
        Ok(module) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(module, "Módulo criado")))
        }
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to create module",
            &e,
        )),
    }
}

pub async fn update_module(
    service: &CourseService,
    module_id: i64,
    mut update_data: UpdateModuleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    if let Err(response) = load_editable_module(&storage, module_id, &current_user).await {
        return Ok(response);
    }

    if let Some(title) = update_data.title.take() {
        match validate_title(&title) {
            Ok(title) => update_data.title = Some(title),
            Err(response) => return Ok(response),
        }
    }

    match storage.update_module(module_id, update_data).await {
        Ok(Some(module)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(module, "Módulo atualizado")))
        }
        Ok(None) => Ok(module_not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to update module",
            &e,
        )),
    }
}

/// 删除模块及其课时
pub async fn delete_module(
    service: &CourseService,
    module_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(unauthorized());
    };

    let storage = service.get_storage(request);

    if let Err(response) = load_editable_module(&storage, module_id, &current_user).await {
        return Ok(response);
    }

    match storage.delete_module(module_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Módulo removido"))),
        Ok(false) => Ok(module_not_found()),
        Err(e) => Ok(internal_error(
            ErrorCode::InternalServerError,
            "Failed to delete module",
            &e,
        )),
    }
}
