use super::SeaOrmStorage;
use crate::entity::students::ActiveModel as StudentActiveModel;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{DojoSystemError, Result};
use crate::models::{
    PaginationInfo,
    students::requests::NewStudentProfile,
    users::{
        entities::{User, UserStatus},
        requests::{NewUser, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 在给定连接（连接池或事务）上插入用户
pub(super) async fn insert_user<C: ConnectionTrait>(conn: &C, user: NewUser) -> Result<User> {
    let now = chrono::Utc::now().timestamp();

    let model = ActiveModel {
        name: Set(user.name),
        email: Set(user.email),
        cpf: Set(user.cpf),
        password_hash: Set(user.password_hash),
        auth_provider: Set(user.auth_provider.to_string()),
        provider_subject: Set(user.provider_subject),
        role: Set(user.role.to_string()),
        status: Set(UserStatus::Active.to_string()),
        belt: Set(user.belt.to_string()),
        must_change_password: Set(user.must_change_password),
        profile_complete: Set(user.profile_complete),
        phone: Set(user.phone),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = model
        .insert(conn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("创建用户失败: {e}")))?;

    Ok(result.into_user())
}

/// 在给定连接上插入学员档案
pub(super) async fn insert_student_profile<C: ConnectionTrait>(
    conn: &C,
    user_id: i64,
    profile: NewStudentProfile,
) -> Result<crate::entity::students::Model> {
    let now = chrono::Utc::now().timestamp();
    let address = profile.address;

    StudentActiveModel {
        user_id: Set(user_id),
        team_id: Set(profile.team_id),
        birth_date: Set(profile.birth_date.map(|d| d.format("%Y-%m-%d").to_string())),
        cep: Set(address.cep),
        street: Set(address.street),
        address_number: Set(address.number),
        neighborhood: Set(address.neighborhood),
        city: Set(address.city),
        state: Set(address.state),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(conn)
    .await
    .map_err(|e| DojoSystemError::database_operation(format!("创建学员档案失败: {e}")))
}

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, user: NewUser) -> Result<User> {
        insert_user(&self.db, user).await
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过 CPF 获取用户
    pub async fn get_user_by_cpf_impl(&self, cpf: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 邮箱或 CPF 等于标识符的全部用户
    pub async fn find_users_by_identifier_impl(&self, identifier: &str) -> Result<Vec<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Email.eq(identifier))
                    .add(Column::Cpf.eq(identifier)),
            )
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_user()).collect())
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find();

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(Column::Name.like(contains_pattern(search)))
                    .add(Column::Email.like(contains_pattern(search)))
                    .add(Column::Cpf.like(contains_pattern(search))),
            );
        }

        // 角色筛选
        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 状态筛选
        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt).order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询用户总数失败: {e}")))?;

        let users = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                DojoSystemError::database_operation(format!("更新最后登录时间失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户信息
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        if self.get_user_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(belt) = update.belt {
            model.belt = Set(belt.to_string());
        }
        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新用户失败: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    /// 更新密码哈希和强制改密标记
    pub async fn update_user_password_impl(
        &self,
        id: i64,
        password_hash: &str,
        must_change_password: bool,
    ) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(
                Column::PasswordHash,
                sea_orm::sea_query::Expr::value(password_hash.to_string()),
            )
            .col_expr(
                Column::MustChangePassword,
                sea_orm::sea_query::Expr::value(must_change_password),
            )
            .col_expr(
                Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now().timestamp()),
            )
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新密码失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 删除用户
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("统计用户数量失败: {e}")))
    }

    /// 第三方账号补全资料：写入姓名/CPF/电话，必要时建立学员档案
    pub async fn complete_user_profile_impl(
        &self,
        id: i64,
        name: &str,
        cpf: &str,
        phone: Option<String>,
        profile: NewStudentProfile,
    ) -> Result<Option<User>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Users::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询用户失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.name = Set(name.to_string());
        model.cpf = Set(Some(cpf.to_string()));
        if phone.is_some() {
            model.phone = Set(phone);
        }
        model.profile_complete = Set(true);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新用户失败: {e}")))?;

        let has_profile = Students::find()
            .filter(StudentColumn::UserId.eq(id))
            .one(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询学员档案失败: {e}")))?
            .is_some();

        if !has_profile {
            insert_student_profile(&txn, id, profile).await?;
        }

        txn.commit()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(updated.into_user()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{local_user, memory_storage};
    use crate::models::users::entities::{AuthProvider, UserRole};
    use crate::models::users::requests::{NewUser, UpdateUserRequest, UserListQuery};
    use crate::models::{Belt, students::requests::NewStudentProfile};

    #[tokio::test]
    async fn test_find_by_email_or_cpf() {
        let storage = memory_storage().await;
        storage
            .create_user_impl(local_user(
                "ANA",
                "ana@example.com",
                Some("52998224725"),
                UserRole::Student,
            ))
            .await
            .unwrap();

        let by_email = storage
            .find_users_by_identifier_impl("ana@example.com")
            .await
            .unwrap();
        assert_eq!(by_email.len(), 1);

        let by_cpf = storage
            .find_users_by_identifier_impl("52998224725")
            .await
            .unwrap();
        assert_eq!(by_cpf.len(), 1);
        assert_eq!(by_cpf[0].email, "ana@example.com");

        assert!(
            storage
                .find_users_by_identifier_impl("nobody@example.com")
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let storage = memory_storage().await;
        storage
            .create_user_impl(local_user("A", "dup@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let second = storage
            .create_user_impl(local_user("B", "dup@example.com", None, UserRole::Student))
            .await;
        assert!(second.is_err());
    }

    #[tokio::test]
    async fn test_list_filters_by_role_and_search() {
        let storage = memory_storage().await;
        storage
            .create_user_impl(local_user("JOAO", "joao@example.com", None, UserRole::Student))
            .await
            .unwrap();
        storage
            .create_user_impl(local_user("MARIA", "maria@example.com", None, UserRole::Teacher))
            .await
            .unwrap();

        let teachers = storage
            .list_users_with_pagination_impl(UserListQuery {
                role: Some(UserRole::Teacher),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(teachers.pagination.total, 1);
        assert_eq!(teachers.items[0].name, "MARIA");

        let searched = storage
            .list_users_with_pagination_impl(UserListQuery {
                search: Some("joa".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(searched.pagination.total, 1);
        assert_eq!(searched.items[0].email, "joao@example.com");
    }

    #[tokio::test]
    async fn test_update_and_password_reset() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(local_user("ANA", "ana@example.com", None, UserRole::Student))
            .await
            .unwrap();

        let updated = storage
            .update_user_impl(
                user.id,
                UpdateUserRequest {
                    belt: Some(Belt::Azul),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.belt, Belt::Azul);

        assert!(
            storage
                .update_user_password_impl(user.id, "new-hash", true)
                .await
                .unwrap()
        );
        let reloaded = storage.get_user_by_id_impl(user.id).await.unwrap().unwrap();
        assert!(reloaded.must_change_password);
        assert_eq!(reloaded.password_hash.as_deref(), Some("new-hash"));

        assert!(
            storage
                .update_user_impl(9999, UpdateUserRequest::default())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_complete_profile_creates_student_row() {
        let storage = memory_storage().await;
        let federated = storage
            .create_user_impl(NewUser {
                name: "JOANA".to_string(),
                email: "joana@gmail.com".to_string(),
                cpf: None,
                password_hash: None,
                auth_provider: AuthProvider::Google,
                provider_subject: Some("sub-1".to_string()),
                role: UserRole::Student,
                belt: Belt::Branca,
                must_change_password: false,
                profile_complete: false,
                phone: None,
            })
            .await
            .unwrap();
        assert!(!federated.profile_complete);

        let completed = storage
            .complete_user_profile_impl(
                federated.id,
                "JOANA SOUZA",
                "52998224725",
                Some("11999990000".to_string()),
                NewStudentProfile::default(),
            )
            .await
            .unwrap()
            .unwrap();
        assert!(completed.profile_complete);
        assert_eq!(completed.cpf.as_deref(), Some("52998224725"));
        assert!(
            storage
                .get_student_by_user_id_impl(federated.id)
                .await
                .unwrap()
                .is_some()
        );
    }
}
