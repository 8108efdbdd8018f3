pub mod courses;
pub mod editors;
pub mod lessons;
pub mod modules;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::entities::{Course, LessonContent};
use crate::models::courses::requests::{
    CreateCourseRequest, CreateLessonRequest, CreateModuleRequest, UpdateCourseRequest,
    UpdateEditorsRequest, UpdateLessonRequest, UpdateModuleRequest,
};
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::internal_error;
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

pub(crate) fn course_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::CourseNotFound,
        "Curso não encontrado",
    ))
}

fn permission_denied() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::CoursePermissionDenied,
        "Sem permissão para editar este curso",
    ))
}

pub(crate) fn validate_title(title: &str) -> Result<String, HttpResponse> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > 200 {
        return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Título deve ter entre 1 e 200 caracteres",
        )));
    }
    Ok(title.to_string())
}

/// 读取课程并确认当前用户可编辑
pub(crate) async fn load_editable_course(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    user: &User,
) -> Result<Course, HttpResponse> {
    match storage.get_course(course_id).await {
        Ok(Some(course)) if course.can_edit(user) => Ok(course),
        // 看不到的课程按不存在处理
        Ok(Some(course)) if course.can_view(user) => Err(permission_denied()),
        Ok(_) => Err(course_not_found()),
        Err(e) => Err(internal_error(
            ErrorCode::InternalServerError,
            "Failed to load course",
            &e,
        )),
    }
}

/// 校验课时内容，图片引用的文件令牌必须存在
pub(crate) async fn validate_lesson_content(
    storage: &Arc<dyn Storage>,
    content: &LessonContent,
) -> Result<(), HttpResponse> {
    if let Err(msg) = content.validate() {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::LessonContentInvalid, msg)));
    }

    if let Some(token) = content.file_token() {
        match storage.get_file_by_token(token).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::LessonContentInvalid,
                    "Arquivo referenciado não encontrado",
                )));
            }
            Err(e) => {
                return Err(internal_error(
                    ErrorCode::InternalServerError,
                    "Failed to check lesson file",
                    &e,
                ));
            }
        }
    }

    Ok(())
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 课程
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        courses::list_courses(self, request).await
    }

    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::get_course(self, course_id, request).await
    }

    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::create_course(self, course_data, request).await
    }

    pub async fn update_course(
        &self,
        course_id: i64,
        update_data: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::update_course(self, course_id, update_data, request).await
    }

    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::delete_course(self, course_id, request).await
    }

    pub async fn update_editors(
        &self,
        course_id: i64,
        editors: UpdateEditorsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        editors::update_editors(self, course_id, editors, request).await
    }

    /// 模块
    pub async fn create_module(
        &self,
        course_id: i64,
        module_data: CreateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::create_module(self, course_id, module_data, request).await
    }

    pub async fn update_module(
        &self,
        module_id: i64,
        update_data: UpdateModuleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::update_module(self, module_id, update_data, request).await
    }

    pub async fn delete_module(
        &self,
        module_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        modules::delete_module(self, module_id, request).await
    }

    /// 课时
    pub async fn create_lesson(
        &self,
        module_id: i64,
        lesson_data: CreateLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::create_lesson(self, module_id, lesson_data, request).await
    }

    pub async fn update_lesson(
        &self,
        lesson_id: i64,
        update_data: UpdateLessonRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::update_lesson(self, lesson_id, update_data, request).await
    }

    pub async fn delete_lesson(
        &self,
        lesson_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        lessons::delete_lesson(self, lesson_id, request).await
    }
}
