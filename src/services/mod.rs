pub mod address;
pub mod auth;
pub mod certificates;
pub mod courses;
pub mod dashboard;
pub mod exams;
pub mod files;
pub mod students;
pub mod teachers;
pub mod teams;
pub mod users;

pub use address::AddressService;
pub use auth::AuthService;
pub use certificates::CertificateService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use exams::ExamService;
pub use files::FileService;
pub use students::StudentService;
pub use teachers::TeacherService;
pub use teams::TeamService;
pub use users::UserService;

use actix_web::HttpResponse;

use crate::errors::DojoSystemError;
use crate::models::{ApiResponse, ErrorCode};

/// 唯一约束冲突（SQLite / PostgreSQL / MySQL 的报错文本）
pub(crate) fn is_unique_violation(err: &DojoSystemError) -> bool {
    let msg = err.message();
    msg.contains("UNIQUE constraint failed")
        || msg.contains("duplicate key value")
        || msg.contains("Duplicate entry")
}

pub(crate) fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "无法获取用户信息",
    ))
}

/// 记录错误并返回 500
pub(crate) fn internal_error(
    code: ErrorCode,
    context: &str,
    err: &DojoSystemError,
) -> HttpResponse {
    tracing::error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        code,
        format!("{context}: {}", err.message()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_detection() {
        assert!(is_unique_violation(&DojoSystemError::database_operation(
            "创建用户失败: UNIQUE constraint failed: users.email"
        )));
        assert!(!is_unique_violation(&DojoSystemError::database_operation(
            "connection reset"
        )));
    }
}
