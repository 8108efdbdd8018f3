use super::SeaOrmStorage;
use super::certificates::{certificate_exists, insert_certificate};
use crate::entity::certificates::{Column as CertificateColumn, Entity as Certificates};
use crate::entity::exam_attempts::{
    ActiveModel as AttemptActiveModel, Column as AttemptColumn, Entity as ExamAttempts,
};
use crate::entity::exam_configs::{ActiveModel, Column, Entity as ExamConfigs};
use crate::entity::exam_results::{
    ActiveModel as ResultActiveModel, Column as ResultColumn, Entity as ExamResults,
};
use crate::errors::{DojoSystemError, Result};
use crate::models::{
    Belt, PaginationInfo,
    certificates::entities::{Certificate, NewCertificate},
    exams::{
        entities::{ExamAttempt, ExamAttemptStatus, ExamConfig, ExamResult, Question},
        requests::ExamConfigInput,
        responses::ExamResultListResponse,
    },
};
use crate::storage::ExamSubmission;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait, sea_query::Expr,
};

impl SeaOrmStorage {
    pub async fn create_exam_config_impl(&self, input: ExamConfigInput) -> Result<ExamConfig> {
        let now = chrono::Utc::now().timestamp();
        let topics = serde_json::to_string(&input.topics)?;

        let model = ActiveModel {
            belt: Set(input.belt.to_string()),
            title: Set(input.title),
            topics: Set(topics),
            question_count: Set(input.question_count),
            pass_percentage: Set(input.pass_percentage),
            active: Set(input.active),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("创建考试配置失败: {e}")))?;

        Ok(result.into_exam_config())
    }

    pub async fn get_exam_config_impl(&self, id: i64) -> Result<Option<ExamConfig>> {
        let result = ExamConfigs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试配置失败: {e}")))?;

        Ok(result.map(|m| m.into_exam_config()))
    }

    pub async fn list_exam_configs_impl(
        &self,
        belt: Option<Belt>,
        active_only: bool,
    ) -> Result<Vec<ExamConfig>> {
        let mut select = ExamConfigs::find();
        if let Some(belt) = belt {
            select = select.filter(Column::Belt.eq(belt.to_string()));
        }
        if active_only {
            select = select.filter(Column::Active.eq(true));
        }

        let result = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试配置失败: {e}")))?;

        // 按段位等级排序
        let mut configs: Vec<ExamConfig> =
            result.into_iter().map(|m| m.into_exam_config()).collect();
        configs.sort_by_key(|c| c.belt);
        Ok(configs)
    }

    pub async fn update_exam_config_impl(
        &self,
        id: i64,
        input: ExamConfigInput,
    ) -> Result<Option<ExamConfig>> {
        let Some(existing) = ExamConfigs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试配置失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.belt = Set(input.belt.to_string());
        model.title = Set(input.title);
        model.topics = Set(serde_json::to_string(&input.topics)?);
        model.question_count = Set(input.question_count);
        model.pass_percentage = Set(input.pass_percentage);
        model.active = Set(input.active);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新考试配置失败: {e}")))?;

        Ok(Some(result.into_exam_config()))
    }

    pub async fn delete_exam_config_impl(&self, id: i64) -> Result<bool> {
        let result = ExamConfigs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("删除考试配置失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 引用该配置的成绩与证书数量
    pub async fn count_exam_config_usage_impl(&self, id: i64) -> Result<u64> {
        let results = ExamResults::find()
            .filter(ResultColumn::ExamConfigId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("统计考试成绩失败: {e}")))?;

        let certificates = Certificates::find()
            .filter(CertificateColumn::ExamConfigId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("统计证书失败: {e}")))?;

        Ok(results + certificates)
    }

    /// 创建考试尝试，保存抽中的题目快照
    pub async fn create_exam_attempt_impl(
        &self,
        user_id: i64,
        exam_config_id: i64,
        questions: Vec<Question>,
    ) -> Result<ExamAttempt> {
        let model = AttemptActiveModel {
            user_id: Set(user_id),
            exam_config_id: Set(exam_config_id),
            status: Set(ExamAttemptStatus::InProgress.to_string()),
            questions: Set(serde_json::to_string(&questions)?),
            started_at: Set(chrono::Utc::now().timestamp()),
            finished_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("创建考试尝试失败: {e}")))?;

        Ok(result.into_attempt())
    }

    pub async fn get_exam_attempt_impl(&self, id: i64) -> Result<Option<ExamAttempt>> {
        let result = ExamAttempts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试尝试失败: {e}")))?;

        Ok(result.map(|m| m.into_attempt()))
    }

    pub async fn get_in_progress_attempt_impl(
        &self,
        user_id: i64,
        exam_config_id: i64,
    ) -> Result<Option<ExamAttempt>> {
        let result = ExamAttempts::find()
            .filter(AttemptColumn::UserId.eq(user_id))
            .filter(AttemptColumn::ExamConfigId.eq(exam_config_id))
            .filter(AttemptColumn::Status.eq(ExamAttemptStatus::IN_PROGRESS))
            .order_by_desc(AttemptColumn::StartedAt)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试尝试失败: {e}")))?;

        Ok(result.map(|m| m.into_attempt()))
    }

    pub async fn last_abandoned_at_impl(
        &self,
        user_id: i64,
        exam_config_id: i64,
    ) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
        let result = ExamAttempts::find()
            .filter(AttemptColumn::UserId.eq(user_id))
            .filter(AttemptColumn::ExamConfigId.eq(exam_config_id))
            .filter(AttemptColumn::Status.eq(ExamAttemptStatus::ABANDONED))
            .order_by_desc(AttemptColumn::FinishedAt)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试尝试失败: {e}")))?;

        Ok(result
            .and_then(|m| m.finished_at)
            .map(crate::entity::from_timestamp))
    }

    /// 放弃考试，仅对进行中的尝试生效
    pub async fn abandon_exam_attempt_impl(&self, id: i64) -> Result<bool> {
        let result = ExamAttempts::update_many()
            .col_expr(
                AttemptColumn::Status,
                Expr::value(ExamAttemptStatus::ABANDONED),
            )
            .col_expr(
                AttemptColumn::FinishedAt,
                Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(AttemptColumn::Id.eq(id))
            .filter(AttemptColumn::Status.eq(ExamAttemptStatus::IN_PROGRESS))
            .exec(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("放弃考试失败: {e}")))?;

        Ok(result.rows_affected == 1)
    }

    /// 关闭尝试、写入成绩、及格时颁发证书，任一步失败全部回滚
    ///
    /// 并发下另一事务抢先颁发时返回 `AlreadyCertified`，尝试保持进行中。
    pub async fn submit_exam_impl(
        &self,
        submission: ExamSubmission,
    ) -> Result<(ExamResult, Option<Certificate>)> {
        let now = chrono::Utc::now();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("开启事务失败: {e}")))?;

        // 条件更新保证同一尝试只能提交一次
        let closed = ExamAttempts::update_many()
            .col_expr(
                AttemptColumn::Status,
                Expr::value(ExamAttemptStatus::SUBMITTED),
            )
            .col_expr(AttemptColumn::FinishedAt, Expr::value(now.timestamp()))
            .filter(AttemptColumn::Id.eq(submission.attempt_id))
            .filter(AttemptColumn::Status.eq(ExamAttemptStatus::IN_PROGRESS))
            .exec(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("关闭考试尝试失败: {e}")))?;

        if closed.rows_affected != 1 {
            return Err(DojoSystemError::conflict(format!(
                "Exam attempt {} is not in progress",
                submission.attempt_id
            )));
        }

        let details = serde_json::to_string(&submission.details)?;

        let result = ResultActiveModel {
            user_id: Set(submission.user_id),
            exam_config_id: Set(submission.exam_config_id),
            attempt_id: Set(Some(submission.attempt_id)),
            belt: Set(submission.belt.to_string()),
            score: Set(submission.score),
            total_questions: Set(submission.total_questions),
            percentage: Set(submission.percentage),
            passed: Set(submission.passed),
            details: Set(Some(details)),
            taken_at: Set(now.timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("写入考试成绩失败: {e}")))?;

        // 已持有该考试证书时只记录成绩，不再颁发
        let already_certified = submission.passed
            && certificate_exists(&txn, submission.user_id, submission.exam_config_id).await?;

        let certificate = match submission.certificate_prefix {
            Some(prefix) if submission.passed && !already_certified => Some(
                insert_certificate(
                    &txn,
                    NewCertificate {
                        user_id: submission.user_id,
                        exam_config_id: submission.exam_config_id,
                        exam_result_id: Some(result.id),
                        belt: submission.belt,
                        issued_by: None,
                        code_prefix: prefix,
                        issued_at: now,
                    },
                )
                .await?,
            ),
            _ => None,
        };

        txn.commit()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((result.into_exam_result(), certificate))
    }

    pub async fn get_exam_result_impl(&self, id: i64) -> Result<Option<ExamResult>> {
        let result = ExamResults::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试成绩失败: {e}")))?;

        Ok(result.map(|m| m.into_exam_result()))
    }

    pub async fn list_exam_results_impl(
        &self,
        user_id: Option<i64>,
        page: u64,
        size: u64,
    ) -> Result<ExamResultListResponse> {
        let page = page.max(1);
        let size = size.clamp(1, 100);

        let mut select = ExamResults::find();
        if let Some(user_id) = user_id {
            select = select.filter(ResultColumn::UserId.eq(user_id));
        }

        let paginator = select
            .order_by_desc(ResultColumn::TakenAt)
            .order_by_desc(ResultColumn::Id)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试成绩总数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询考试成绩失败: {e}")))?;

        Ok(ExamResultListResponse {
            items: items.into_iter().map(|m| m.into_exam_result()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{local_user, memory_storage};
    use crate::models::Belt;
    use crate::models::exams::entities::{ExamAttemptStatus, Question, QuestionDetail};
    use crate::models::exams::requests::ExamConfigInput;
    use crate::models::users::entities::UserRole;
    use crate::storage::ExamSubmission;

    fn config_input() -> ExamConfigInput {
        ExamConfigInput {
            belt: Belt::Amarela,
            title: "Exame Faixa Amarela".to_string(),
            topics: vec!["historia".to_string()],
            question_count: 2,
            pass_percentage: 50,
            active: true,
        }
    }

    fn questions() -> Vec<Question> {
        vec![Question {
            question: "Onde nasceu o judô?".to_string(),
            options: vec!["Japão".to_string(), "Brasil".to_string()],
            answer: "Japão".to_string(),
        }]
    }

    fn submission(
        attempt_id: i64,
        user_id: i64,
        exam_config_id: i64,
        passed: bool,
    ) -> ExamSubmission {
        ExamSubmission {
            attempt_id,
            user_id,
            exam_config_id,
            belt: Belt::Amarela,
            score: if passed { 1 } else { 0 },
            total_questions: 1,
            percentage: if passed { 100.0 } else { 0.0 },
            passed,
            details: vec![QuestionDetail {
                question: "Onde nasceu o judô?".to_string(),
                selected: Some("Japão".to_string()),
                correct_answer: "Japão".to_string(),
                correct: passed,
            }],
            certificate_prefix: Some("CERT".to_string()),
        }
    }

    #[tokio::test]
    async fn test_submit_passing_exam_issues_certificate_once() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(local_user("ANA", "ana@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let config = storage.create_exam_config_impl(config_input()).await.unwrap();
        let attempt = storage
            .create_exam_attempt_impl(user.id, config.id, questions())
            .await
            .unwrap();
        assert_eq!(attempt.status, ExamAttemptStatus::InProgress);

        let reloaded = storage.get_exam_attempt_impl(attempt.id).await.unwrap().unwrap();
        assert_eq!(reloaded.questions, questions());

        let (result, certificate) = storage
            .submit_exam_impl(submission(attempt.id, user.id, config.id, true))
            .await
            .unwrap();
        assert!(result.passed);
        let certificate = certificate.unwrap();
        assert_eq!(certificate.exam_result_id, Some(result.id));
        assert!(certificate.code.starts_with("CERT-"));
        assert!(certificate.code.ends_with("-0001"));

        // 重复提交被拒绝，且不会多出成绩或证书
        let again = storage
            .submit_exam_impl(submission(attempt.id, user.id, config.id, true))
            .await;
        assert!(again.is_err());
        assert_eq!(storage.count_exam_config_usage_impl(config.id).await.unwrap(), 2);

        let closed = storage.get_exam_attempt_impl(attempt.id).await.unwrap().unwrap();
        assert_eq!(closed.status, ExamAttemptStatus::Submitted);
        assert!(closed.finished_at.is_some());
    }

    #[tokio::test]
    async fn test_parallel_attempts_yield_single_certificate() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(local_user("DANI", "dani@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let config = storage.create_exam_config_impl(config_input()).await.unwrap();
        // 两次开始都通过了“无进行中尝试”的检查
        let first = storage
            .create_exam_attempt_impl(user.id, config.id, questions())
            .await
            .unwrap();
        let second = storage
            .create_exam_attempt_impl(user.id, config.id, questions())
            .await
            .unwrap();

        let (_, certificate) = storage
            .submit_exam_impl(submission(first.id, user.id, config.id, true))
            .await
            .unwrap();
        assert!(certificate.is_some());

        let (result, certificate) = storage
            .submit_exam_impl(submission(second.id, user.id, config.id, true))
            .await
            .unwrap();
        assert!(result.passed);
        assert!(certificate.is_none());

        let certificates = storage
            .list_certificates_impl(Some(user.id), 1, 10)
            .await
            .unwrap();
        assert_eq!(certificates.pagination.total, 1);
    }

    #[tokio::test]
    async fn test_failing_exam_has_no_certificate() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(local_user("BIA", "bia@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let config = storage.create_exam_config_impl(config_input()).await.unwrap();
        let attempt = storage
            .create_exam_attempt_impl(user.id, config.id, questions())
            .await
            .unwrap();

        let (result, certificate) = storage
            .submit_exam_impl(submission(attempt.id, user.id, config.id, false))
            .await
            .unwrap();
        assert!(!result.passed);
        assert!(certificate.is_none());
        assert!(!storage.has_certificate_for_impl(user.id, config.id).await.unwrap());

        let listed = storage.list_exam_results_impl(Some(user.id), 1, 10).await.unwrap();
        assert_eq!(listed.pagination.total, 1);
        assert_eq!(listed.items[0].details.as_ref().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_abandon_only_in_progress() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(local_user("CAIO", "caio@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let config = storage.create_exam_config_impl(config_input()).await.unwrap();
        let attempt = storage
            .create_exam_attempt_impl(user.id, config.id, questions())
            .await
            .unwrap();

        assert!(
            storage
                .get_in_progress_attempt_impl(user.id, config.id)
                .await
                .unwrap()
                .is_some()
        );
        assert!(storage.abandon_exam_attempt_impl(attempt.id).await.unwrap());
        assert!(!storage.abandon_exam_attempt_impl(attempt.id).await.unwrap());
        assert!(
            storage
                .get_in_progress_attempt_impl(user.id, config.id)
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            storage
                .last_abandoned_at_impl(user.id, config.id)
                .await
                .unwrap()
                .is_some()
        );

        // 已放弃的尝试不能再提交
        assert!(
            storage
                .submit_exam_impl(submission(attempt.id, user.id, config.id, true))
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_exam_config_filters() {
        let storage = memory_storage().await;
        storage.create_exam_config_impl(config_input()).await.unwrap();
        storage
            .create_exam_config_impl(ExamConfigInput {
                belt: Belt::Branca,
                active: false,
                ..config_input()
            })
            .await
            .unwrap();

        let all = storage.list_exam_configs_impl(None, false).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].belt, Belt::Branca);

        let active = storage.list_exam_configs_impl(None, true).await.unwrap();
        assert_eq!(active.len(), 1);

        let yellow = storage
            .list_exam_configs_impl(Some(Belt::Amarela), false)
            .await
            .unwrap();
        assert_eq!(yellow[0].topics, vec!["historia".to_string()]);
    }
}
