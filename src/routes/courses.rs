use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::courses::requests::{
    CreateCourseRequest, CreateLessonRequest, CreateModuleRequest, UpdateCourseRequest,
    UpdateEditorsRequest, UpdateLessonRequest, UpdateModuleRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CourseService;
use crate::utils::{SafeIDI64, SafeLessonIdI64, SafeModuleIdI64};

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(course_data.into_inner(), &req).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeIDI64,
    update_data: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(course_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.0, &req).await
}

pub async fn update_editors(
    req: HttpRequest,
    course_id: SafeIDI64,
    editors: web::Json<UpdateEditorsRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_editors(course_id.0, editors.into_inner(), &req)
        .await
}

pub async fn create_module(
    req: HttpRequest,
    course_id: SafeIDI64,
    module_data: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_module(course_id.0, module_data.into_inner(), &req)
        .await
}

pub async fn update_module(
    req: HttpRequest,
    module_id: SafeModuleIdI64,
    update_data: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_module(module_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_module(
    req: HttpRequest,
    module_id: SafeModuleIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_module(module_id.0, &req).await
}

pub async fn create_lesson(
    req: HttpRequest,
    module_id: SafeModuleIdI64,
    lesson_data: web::Json<CreateLessonRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_lesson(module_id.0, lesson_data.into_inner(), &req)
        .await
}

pub async fn update_lesson(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
    update_data: web::Json<UpdateLessonRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_lesson(lesson_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_lesson(
    req: HttpRequest,
    lesson_id: SafeLessonIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_lesson(lesson_id.0, &req).await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 未发布课程在业务层过滤
                    .route(web::get().to(list_courses))
                    .route(
                        web::post()
                            .to(create_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 模块与课时，编辑权限在业务层判断
            .service(
                web::resource("/modules/{module_id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::put().to(update_module))
                    .route(web::delete().to(delete_module)),
            )
            .service(
                web::resource("/modules/{module_id}/lessons")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::post().to(create_lesson)),
            )
            .service(
                web::resource("/lessons/{lesson_id}")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::put().to(update_lesson))
                    .route(web::delete().to(delete_lesson)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_course))
                    .route(
                        web::put()
                            .to(update_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/editors")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::put().to(update_editors)),
            )
            .service(
                web::resource("/{id}/modules")
                    .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
                    .route(web::post().to(create_module)),
            ),
    );
}
