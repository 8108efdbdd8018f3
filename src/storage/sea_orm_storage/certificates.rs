use chrono::Datelike;

use super::SeaOrmStorage;
use crate::entity::certificates::{ActiveModel, Column, Entity as Certificates};
use crate::errors::{DojoSystemError, Result};
use crate::models::{
    PaginationInfo,
    certificates::{
        entities::{Certificate, NewCertificate},
        responses::CertificateListResponse,
    },
};
use crate::utils::certificate_code::format_certificate_code;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};

/// 用户在该考试配置下是否已持有证书
pub(super) async fn certificate_exists<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    exam_config_id: i64,
) -> Result<bool> {
    let count = Certificates::find()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::ExamConfigId.eq(exam_config_id))
        .count(conn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("查询证书失败: {e}")))?;

    Ok(count > 0)
}

fn already_certified(user_id: i64, exam_config_id: i64) -> DojoSystemError {
    DojoSystemError::already_certified(format!(
        "User {user_id} already holds a certificate for exam config {exam_config_id}"
    ))
}

/// 在给定事务内插入证书
///
/// 先以占位编号插入，再用自增 ID 生成正式编号，编号的序号部分与 ID 一致，
/// 并发颁发不会得到相同编号。
///
/// 同一用户和考试配置已有证书时返回 `AlreadyCertified`，并发插入由唯一索引兜底。
pub(super) async fn insert_certificate<C: ConnectionTrait>(
    conn: &C,
    certificate: NewCertificate,
) -> Result<Certificate> {
    if certificate_exists(conn, certificate.user_id, certificate.exam_config_id).await? {
        return Err(already_certified(
            certificate.user_id,
            certificate.exam_config_id,
        ));
    }

    let placeholder = format!("pending-{}", uuid::Uuid::new_v4());

    let inserted = ActiveModel {
        code: Set(placeholder),
        user_id: Set(certificate.user_id),
        exam_config_id: Set(certificate.exam_config_id),
        exam_result_id: Set(certificate.exam_result_id),
        belt: Set(certificate.belt.to_string()),
        issued_by: Set(certificate.issued_by),
        issued_at: Set(certificate.issued_at.timestamp()),
        ..Default::default()
    }
    .insert(conn)
    .await
    .map_err(|e: DbErr| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            already_certified(certificate.user_id, certificate.exam_config_id)
        }
        _ => DojoSystemError::database_operation(format!("创建证书失败: {e}")),
    })?;

    let code = format_certificate_code(
        &certificate.code_prefix,
        certificate.issued_at.year(),
        inserted.id,
    );

    let mut model = inserted.into_active_model();
    model.code = Set(code);

    let updated = model
        .update(conn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("写入证书编号失败: {e}")))?;

    Ok(updated.into_certificate())
}

impl SeaOrmStorage {
    /// 单独颁发证书（管理员手动颁发）
    pub async fn issue_certificate_impl(&self, certificate: NewCertificate) -> Result<Certificate> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let result = insert_certificate(&txn, certificate).await?;

        txn.commit()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result)
    }

    pub async fn get_certificate_by_id_impl(&self, id: i64) -> Result<Option<Certificate>> {
        let result = Certificates::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    pub async fn get_certificate_by_code_impl(&self, code: &str) -> Result<Option<Certificate>> {
        let result = Certificates::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询证书失败: {e}")))?;

        Ok(result.map(|m| m.into_certificate()))
    }

    pub async fn has_certificate_for_impl(
        &self,
        user_id: i64,
        exam_config_id: i64,
    ) -> Result<bool> {
        certificate_exists(&self.db, user_id, exam_config_id).await
    }

    /// 分页列出证书，新颁发的在前
    pub async fn list_certificates_impl(
        &self,
        user_id: Option<i64>,
        page: u64,
        size: u64,
    ) -> Result<CertificateListResponse> {
        let page = page.max(1);
        let size = size.clamp(1, 100);

        let mut select = Certificates::find();
        if let Some(user_id) = user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        let paginator = select
            .order_by_desc(Column::IssuedAt)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询证书总数失败: {e}")))?;

        let items = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询证书列表失败: {e}")))?;

        Ok(CertificateListResponse {
            items: items.into_iter().map(|m| m.into_certificate()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use sea_orm::{ActiveModelTrait, Set};

    use super::super::SeaOrmStorage;
    use super::super::test_support::{local_user, memory_storage};
    use crate::entity::certificates::ActiveModel;
    use crate::errors::DojoSystemError;
    use crate::models::Belt;
    use crate::models::certificates::entities::NewCertificate;
    use crate::models::exams::requests::ExamConfigInput;
    use crate::models::users::entities::UserRole;

    fn new_certificate(user_id: i64, exam_config_id: i64) -> NewCertificate {
        NewCertificate {
            user_id,
            exam_config_id,
            exam_result_id: None,
            belt: Belt::Azul,
            issued_by: None,
            code_prefix: "CERT".to_string(),
            issued_at: chrono::Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
        }
    }

    async fn blue_belt_exam(storage: &SeaOrmStorage) -> i64 {
        storage
            .create_exam_config_impl(ExamConfigInput {
                belt: Belt::Azul,
                title: "Exame Faixa Azul".to_string(),
                topics: vec!["fundamentos".to_string()],
                question_count: 10,
                pass_percentage: 70,
                active: true,
            })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_codes_follow_insert_order() {
        let storage = memory_storage().await;
        let ana = storage
            .create_user_impl(local_user("ANA", "ana@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let bruno = storage
            .create_user_impl(local_user("BRUNO", "bruno@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let config_id = blue_belt_exam(&storage).await;

        let first = storage
            .issue_certificate_impl(new_certificate(ana.id, config_id))
            .await
            .unwrap();
        let second = storage
            .issue_certificate_impl(new_certificate(bruno.id, config_id))
            .await
            .unwrap();

        assert_eq!(first.code, "CERT-2025-0001");
        assert_eq!(second.code, "CERT-2025-0002");

        let found = storage
            .get_certificate_by_code_impl("CERT-2025-0002")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, second.id);
        assert!(storage.has_certificate_for_impl(ana.id, config_id).await.unwrap());
        assert!(!storage.has_certificate_for_impl(ana.id, config_id + 1).await.unwrap());

        let listed = storage.list_certificates_impl(None, 1, 10).await.unwrap();
        assert_eq!(listed.pagination.total, 2);
        assert_eq!(listed.items[0].id, second.id);
    }

    #[tokio::test]
    async fn test_second_certificate_for_same_exam_is_rejected() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(local_user("ANA", "ana@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let config_id = blue_belt_exam(&storage).await;

        storage
            .issue_certificate_impl(new_certificate(user.id, config_id))
            .await
            .unwrap();
        let err = storage
            .issue_certificate_impl(new_certificate(user.id, config_id))
            .await
            .unwrap_err();
        assert!(matches!(err, DojoSystemError::AlreadyCertified(_)));

        let listed = storage
            .list_certificates_impl(Some(user.id), 1, 10)
            .await
            .unwrap();
        assert_eq!(listed.pagination.total, 1);
    }

    #[tokio::test]
    async fn test_unique_index_blocks_duplicate_rows() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(local_user("ANA", "ana@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let config_id = blue_belt_exam(&storage).await;

        let row = |code: &str| ActiveModel {
            code: Set(code.to_string()),
            user_id: Set(user.id),
            exam_config_id: Set(config_id),
            exam_result_id: Set(None),
            belt: Set(Belt::Azul.to_string()),
            issued_by: Set(None),
            issued_at: Set(0),
            ..Default::default()
        };

        row("CERT-A").insert(&storage.db).await.unwrap();
        assert!(row("CERT-B").insert(&storage.db).await.is_err());
    }
}
