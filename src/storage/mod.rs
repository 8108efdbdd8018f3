use std::sync::Arc;

use crate::models::{
    Belt, DashboardStats,
    certificates::{
        entities::{Certificate, NewCertificate},
        responses::CertificateListResponse,
    },
    courses::{
        entities::{Course, CourseModule, CourseTree, Lesson, LessonContent},
        requests::{UpdateCourseRequest, UpdateLessonRequest, UpdateModuleRequest},
    },
    exams::{
        entities::{ExamAttempt, ExamConfig, ExamResult, Question, QuestionDetail},
        requests::ExamConfigInput,
        responses::ExamResultListResponse,
    },
    files::entities::File,
    students::{
        entities::{Student, StudentDetail},
        requests::{NewStudentProfile, StudentProfileUpdate},
        responses::StudentListResponse,
    },
    teachers::TeacherDetail,
    teams::{Team, UpdateTeamRequest},
    users::{
        entities::User,
        requests::{NewUser, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 一次完成的考试提交，存储层在同一事务中写入
#[derive(Debug, Clone)]
pub struct ExamSubmission {
    pub attempt_id: i64,
    pub user_id: i64,
    pub exam_config_id: i64,
    pub belt: Belt,
    pub score: i32,
    pub total_questions: i32,
    pub percentage: f64,
    pub passed: bool,
    pub details: Vec<QuestionDetail>,
    /// 及格时颁发证书所用的编号前缀
    pub certificate_prefix: Option<String>,
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过 CPF 获取用户信息
    async fn get_user_by_cpf(&self, cpf: &str) -> Result<Option<User>>;
    // 邮箱或 CPF 匹配的全部用户
    async fn find_users_by_identifier(&self, identifier: &str) -> Result<Vec<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 更新密码哈希
    async fn update_user_password(
        &self,
        id: i64,
        password_hash: &str,
        must_change_password: bool,
    ) -> Result<bool>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数
    async fn count_users(&self) -> Result<u64>;
    // 第三方账号补全资料并建立学员档案
    async fn complete_user_profile(
        &self,
        id: i64,
        name: &str,
        cpf: &str,
        phone: Option<String>,
        profile: NewStudentProfile,
    ) -> Result<Option<User>>;

    /// 学员方法
    // 同一事务中创建账号和学员档案
    async fn register_student(
        &self,
        user: NewUser,
        profile: NewStudentProfile,
    ) -> Result<(User, Student)>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>>;
    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentDetail>>;
    async fn list_students(
        &self,
        team_id: Option<i64>,
        search: Option<String>,
        page: u64,
        size: u64,
    ) -> Result<StudentListResponse>;
    async fn update_student(
        &self,
        id: i64,
        update: StudentProfileUpdate,
        phone: Option<String>,
    ) -> Result<Option<StudentDetail>>;

    /// 教师方法
    async fn create_teacher(
        &self,
        user: NewUser,
        team_id: Option<i64>,
        federation_number: Option<String>,
    ) -> Result<TeacherDetail>;
    async fn list_teachers(&self) -> Result<Vec<TeacherDetail>>;

    /// 队伍方法
    async fn create_team(
        &self,
        name: &str,
        responsible_teacher_id: i64,
        description: Option<String>,
    ) -> Result<Team>;
    async fn get_team_by_id(&self, id: i64) -> Result<Option<Team>>;
    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>>;
    async fn list_teams(&self) -> Result<Vec<Team>>;
    async fn update_team(&self, id: i64, update: UpdateTeamRequest) -> Result<Option<Team>>;
    async fn delete_team(&self, id: i64) -> Result<bool>;

    /// 考试配置方法
    async fn create_exam_config(&self, input: ExamConfigInput) -> Result<ExamConfig>;
    async fn get_exam_config(&self, id: i64) -> Result<Option<ExamConfig>>;
    async fn list_exam_configs(
        &self,
        belt: Option<Belt>,
        active_only: bool,
    ) -> Result<Vec<ExamConfig>>;
    async fn update_exam_config(
        &self,
        id: i64,
        input: ExamConfigInput,
    ) -> Result<Option<ExamConfig>>;
    async fn delete_exam_config(&self, id: i64) -> Result<bool>;
    // 引用该配置的成绩和证书数量
    async fn count_exam_config_usage(&self, id: i64) -> Result<u64>;

    /// 考试流程方法
    async fn create_exam_attempt(
        &self,
        user_id: i64,
        exam_config_id: i64,
        questions: Vec<Question>,
    ) -> Result<ExamAttempt>;
    async fn get_exam_attempt(&self, id: i64) -> Result<Option<ExamAttempt>>;
    async fn get_in_progress_attempt(
        &self,
        user_id: i64,
        exam_config_id: i64,
    ) -> Result<Option<ExamAttempt>>;
    // 最近一次放弃的时间
    async fn last_abandoned_at(
        &self,
        user_id: i64,
        exam_config_id: i64,
    ) -> Result<Option<chrono::DateTime<chrono::Utc>>>;
    // 仅对进行中的尝试生效
    async fn abandon_exam_attempt(&self, id: i64) -> Result<bool>;
    // 标记提交、写入成绩、及格时颁发证书，全部在一个事务内
    async fn submit_exam(
        &self,
        submission: ExamSubmission,
    ) -> Result<(ExamResult, Option<Certificate>)>;
    async fn get_exam_result(&self, id: i64) -> Result<Option<ExamResult>>;
    async fn list_exam_results(
        &self,
        user_id: Option<i64>,
        page: u64,
        size: u64,
    ) -> Result<ExamResultListResponse>;

    /// 证书方法
    async fn issue_certificate(&self, certificate: NewCertificate) -> Result<Certificate>;
    async fn get_certificate_by_id(&self, id: i64) -> Result<Option<Certificate>>;
    async fn get_certificate_by_code(&self, code: &str) -> Result<Option<Certificate>>;
    async fn has_certificate_for(&self, user_id: i64, exam_config_id: i64) -> Result<bool>;
    async fn list_certificates(
        &self,
        user_id: Option<i64>,
        page: u64,
        size: u64,
    ) -> Result<CertificateListResponse>;

    /// 课程方法
    async fn create_course(
        &self,
        owner_id: i64,
        title: &str,
        description: Option<String>,
        published: bool,
    ) -> Result<Course>;
    async fn get_course(&self, id: i64) -> Result<Option<Course>>;
    async fn list_courses(&self) -> Result<Vec<Course>>;
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    async fn set_course_editors(&self, id: i64, editor_ids: Vec<i64>) -> Result<Option<Course>>;
    async fn delete_course(&self, id: i64) -> Result<bool>;
    async fn get_course_tree(&self, id: i64) -> Result<Option<CourseTree>>;
    async fn create_module(
        &self,
        course_id: i64,
        title: &str,
        position: Option<i32>,
    ) -> Result<CourseModule>;
    async fn get_module(&self, id: i64) -> Result<Option<CourseModule>>;
    async fn update_module(
        &self,
        id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>>;
    async fn delete_module(&self, id: i64) -> Result<bool>;
    async fn create_lesson(
        &self,
        module_id: i64,
        title: &str,
        position: Option<i32>,
        content: LessonContent,
    ) -> Result<Lesson>;
    async fn get_lesson(&self, id: i64) -> Result<Option<Lesson>>;
    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>>;
    async fn delete_lesson(&self, id: i64) -> Result<bool>;

    /// 文件管理方法
    async fn create_file(&self, file: File) -> Result<File>;
    // 通过唯一 token 获取文件信息
    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>>;

    /// 统计
    async fn dashboard_stats(&self, year: i32) -> Result<DashboardStats>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
