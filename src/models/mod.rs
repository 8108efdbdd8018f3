pub mod address;
pub mod auth;
pub mod certificates;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod exams;
pub mod files;
pub mod students;
pub mod teachers;
pub mod teams;
pub mod users;

pub use common::{ApiResponse, Belt, PaginationInfo, PaginationQuery};
pub use dashboard::DashboardStats;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 进程启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用 1xxx
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证 2xxx
    AuthFailed = 2000,
    RegisterFailed = 2001,
    FederatedAccountNotAllowed = 2002,
    LocalAccountNotAllowed = 2003,
    GoogleSignInDisabled = 2004,
    ProfileAlreadyComplete = 2005,

    // 用户 3xxx
    UserNotFound = 3000,
    UserAlreadyExists = 3001,
    UserEmailAlreadyExists = 3002,
    UserCpfAlreadyExists = 3003,
    UserEmailInvalid = 3004,
    UserNameInvalid = 3005,
    UserPasswordInvalid = 3006,
    UserCreationFailed = 3007,
    UserUpdateFailed = 3008,
    UserDeleteFailed = 3009,
    CanNotDeleteCurrentUser = 3010,
    CpfInvalid = 3011,
    CepInvalid = 3012,
    AddressNotFound = 3013,

    // 队伍 / 学员 / 教师 4xxx
    TeamNotFound = 4000,
    TeamAlreadyExists = 4001,
    TeamPermissionDenied = 4002,
    StudentNotFound = 4010,
    TeacherNotFound = 4020,

    // 考试 5xxx
    ExamConfigNotFound = 5000,
    ExamInactive = 5001,
    ExamAttemptInProgress = 5002,
    ExamAlreadyCertified = 5003,
    ExamLockedOut = 5004,
    ExamAttemptNotFound = 5005,
    ExamAttemptClosed = 5006,
    ExamAnswersInvalid = 5007,
    ExamQuestionBankError = 5008,
    ExamResultNotFound = 5009,

    // 证书 6xxx
    CertificateNotFound = 6000,
    CertificateIssueFailed = 6001,
    CertificateArtifactFailed = 6002,

    // 课程 7xxx
    CourseNotFound = 7000,
    CoursePermissionDenied = 7001,
    ModuleNotFound = 7002,
    LessonNotFound = 7003,
    LessonContentInvalid = 7004,

    // 文件 8xxx
    FileNotFound = 8000,
    FileUploadFailed = 8001,
    FileTypeNotAllowed = 8002,
    FileSizeExceeded = 8003,
    MultifileUploadNotAllowed = 8004,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::CpfInvalid as i32, 3011);
        assert_eq!(ErrorCode::CertificateNotFound as i32, 6000);
    }
}
