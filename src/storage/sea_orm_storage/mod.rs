//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 多语句操作在显式事务中执行。

mod certificates;
mod courses;
mod dashboard;
mod exams;
mod files;
mod students;
mod teachers;
mod teams;
mod users;

#[cfg(test)]
pub(crate) mod test_support;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{DojoSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实例
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 连接数据库并执行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| DojoSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size.max(1))
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(config.timeout))
            // 内存数据库随连接关闭而消失，不回收空闲连接
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| DojoSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| DojoSystemError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(DojoSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
        entities::{ExamAttempt, ExamConfig, ExamResult, Question},
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
use crate::storage::{ExamSubmission, Storage};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_cpf(&self, cpf: &str) -> Result<Option<User>> {
        self.get_user_by_cpf_impl(cpf).await
    }

    async fn find_users_by_identifier(&self, identifier: &str) -> Result<Vec<User>> {
        self.find_users_by_identifier_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_user_password(
        &self,
        id: i64,
        password_hash: &str,
        must_change_password: bool,
    ) -> Result<bool> {
        self.update_user_password_impl(id, password_hash, must_change_password)
            .await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn complete_user_profile(
        &self,
        id: i64,
        name: &str,
        cpf: &str,
        phone: Option<String>,
        profile: NewStudentProfile,
    ) -> Result<Option<User>> {
        self.complete_user_profile_impl(id, name, cpf, phone, profile)
            .await
    }

    // 学员模块
    async fn register_student(
        &self,
        user: NewUser,
        profile: NewStudentProfile,
    ) -> Result<(User, Student)> {
        self.register_student_impl(user, profile).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_user_id(&self, user_id: i64) -> Result<Option<StudentDetail>> {
        self.get_student_by_user_id_impl(user_id).await
    }

    async fn list_students(
        &self,
        team_id: Option<i64>,
        search: Option<String>,
        page: u64,
        size: u64,
    ) -> Result<StudentListResponse> {
        self.list_students_impl(team_id, search, page, size).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: StudentProfileUpdate,
        phone: Option<String>,
    ) -> Result<Option<StudentDetail>> {
        self.update_student_impl(id, update, phone).await
    }

    // 教师模块
    async fn create_teacher(
        &self,
        user: NewUser,
        team_id: Option<i64>,
        federation_number: Option<String>,
    ) -> Result<TeacherDetail> {
        self.create_teacher_impl(user, team_id, federation_number)
            .await
    }

    async fn list_teachers(&self) -> Result<Vec<TeacherDetail>> {
        self.list_teachers_impl().await
    }

    // 队伍模块
    async fn create_team(
        &self,
        name: &str,
        responsible_teacher_id: i64,
        description: Option<String>,
    ) -> Result<Team> {
        self.create_team_impl(name, responsible_teacher_id, description)
            .await
    }

    async fn get_team_by_id(&self, id: i64) -> Result<Option<Team>> {
        self.get_team_by_id_impl(id).await
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        self.get_team_by_name_impl(name).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        self.list_teams_impl().await
    }

    async fn update_team(&self, id: i64, update: UpdateTeamRequest) -> Result<Option<Team>> {
        self.update_team_impl(id, update).await
    }

    async fn delete_team(&self, id: i64) -> Result<bool> {
        self.delete_team_impl(id).await
    }

    // 考试模块
    async fn create_exam_config(&self, input: ExamConfigInput) -> Result<ExamConfig> {
        self.create_exam_config_impl(input).await
    }

    async fn get_exam_config(&self, id: i64) -> Result<Option<ExamConfig>> {
        self.get_exam_config_impl(id).await
    }

    async fn list_exam_configs(
        &self,
        belt: Option<Belt>,
        active_only: bool,
    ) -> Result<Vec<ExamConfig>> {
        self.list_exam_configs_impl(belt, active_only).await
    }

    async fn update_exam_config(
        &self,
        id: i64,
        input: ExamConfigInput,
    ) -> Result<Option<ExamConfig>> {
        self.update_exam_config_impl(id, input).await
    }

    async fn delete_exam_config(&self, id: i64) -> Result<bool> {
        self.delete_exam_config_impl(id).await
    }

    async fn count_exam_config_usage(&self, id: i64) -> Result<u64> {
        self.count_exam_config_usage_impl(id).await
    }

    async fn create_exam_attempt(
        &self,
        user_id: i64,
        exam_config_id: i64,
        questions: Vec<Question>,
    ) -> Result<ExamAttempt> {
        self.create_exam_attempt_impl(user_id, exam_config_id, questions)
            .await
    }

    async fn get_exam_attempt(&self, id: i64) -> Result<Option<ExamAttempt>> {
        self.get_exam_attempt_impl(id).await
    }

    async fn get_in_progress_attempt(
        &self,
        user_id: i64,
        exam_config_id: i64,
    ) -> Result<Option<ExamAttempt>> {
        self.get_in_progress_attempt_impl(user_id, exam_config_id)
            .await
    }

    async fn last_abandoned_at(
        &self,
        user_id: i64,
        exam_config_id: i64,
    ) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
        self.last_abandoned_at_impl(user_id, exam_config_id).await
    }

    async fn abandon_exam_attempt(&self, id: i64) -> Result<bool> {
        self.abandon_exam_attempt_impl(id).await
    }

    async fn submit_exam(
        &self,
        submission: ExamSubmission,
    ) -> Result<(ExamResult, Option<Certificate>)> {
        self.submit_exam_impl(submission).await
    }

    async fn get_exam_result(&self, id: i64) -> Result<Option<ExamResult>> {
        self.get_exam_result_impl(id).await
    }

    async fn list_exam_results(
        &self,
        user_id: Option<i64>,
        page: u64,
        size: u64,
    ) -> Result<ExamResultListResponse> {
        self.list_exam_results_impl(user_id, page, size).await
    }

    // 证书模块
    async fn issue_certificate(&self, certificate: NewCertificate) -> Result<Certificate> {
        self.issue_certificate_impl(certificate).await
    }

    async fn get_certificate_by_id(&self, id: i64) -> Result<Option<Certificate>> {
        self.get_certificate_by_id_impl(id).await
    }

    async fn get_certificate_by_code(&self, code: &str) -> Result<Option<Certificate>> {
        self.get_certificate_by_code_impl(code).await
    }

    async fn has_certificate_for(&self, user_id: i64, exam_config_id: i64) -> Result<bool> {
        self.has_certificate_for_impl(user_id, exam_config_id).await
    }

    async fn list_certificates(
        &self,
        user_id: Option<i64>,
        page: u64,
        size: u64,
    ) -> Result<CertificateListResponse> {
        self.list_certificates_impl(user_id, page, size).await
    }

    // 课程模块
    async fn create_course(
        &self,
        owner_id: i64,
        title: &str,
        description: Option<String>,
        published: bool,
    ) -> Result<Course> {
        self.create_course_impl(owner_id, title, description, published)
            .await
    }

    async fn get_course(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_impl(id).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn set_course_editors(&self, id: i64, editor_ids: Vec<i64>) -> Result<Option<Course>> {
        self.set_course_editors_impl(id, editor_ids).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    async fn get_course_tree(&self, id: i64) -> Result<Option<CourseTree>> {
        self.get_course_tree_impl(id).await
    }

    async fn create_module(
        &self,
        course_id: i64,
        title: &str,
        position: Option<i32>,
    ) -> Result<CourseModule> {
        self.create_module_impl(course_id, title, position).await
    }

    async fn get_module(&self, id: i64) -> Result<Option<CourseModule>> {
        self.get_module_impl(id).await
    }

    async fn update_module(
        &self,
        id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>> {
        self.update_module_impl(id, update).await
    }

    async fn delete_module(&self, id: i64) -> Result<bool> {
        self.delete_module_impl(id).await
    }

    async fn create_lesson(
        &self,
        module_id: i64,
        title: &str,
        position: Option<i32>,
        content: LessonContent,
    ) -> Result<Lesson> {
        self.create_lesson_impl(module_id, title, position, content)
            .await
    }

    async fn get_lesson(&self, id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_impl(id).await
    }

    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>> {
        self.update_lesson_impl(id, update).await
    }

    async fn delete_lesson(&self, id: i64) -> Result<bool> {
        self.delete_lesson_impl(id).await
    }

    // 文件模块
    async fn create_file(&self, file: File) -> Result<File> {
        self.create_file_impl(file).await
    }

    async fn get_file_by_token(&self, token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(token).await
    }

    // 统计
    async fn dashboard_stats(&self, year: i32) -> Result<DashboardStats> {
        self.dashboard_stats_impl(year).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("dojo.db").unwrap(),
            "sqlite://dojo.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/dojo").unwrap(),
            "postgres://u:p@localhost/dojo"
        );
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }
}
