use std::collections::HashMap;

use super::SeaOrmStorage;
use super::users::{insert_student_profile, insert_user};
use crate::entity::students::{ActiveModel, Column, Entity as Students, Model as StudentModel};
use crate::entity::teams::{Column as TeamColumn, Entity as Teams};
use crate::entity::users::{Column as UserColumn, Entity as Users, Model as UserModel};
use crate::errors::{DojoSystemError, Result};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentDetail},
        requests::{NewStudentProfile, StudentProfileUpdate},
        responses::StudentListResponse,
    },
    users::{entities::User, requests::NewUser},
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

/// 学员档案 + 账号 + 队伍名称
fn compose_detail(
    student: StudentModel,
    user: UserModel,
    team_name: Option<String>,
) -> StudentDetail {
    let user = user.into_user();
    StudentDetail {
        student: student.into_student(),
        name: user.name,
        email: user.email,
        cpf: user.cpf,
        phone: user.phone,
        belt: user.belt,
        team_name,
    }
}

/// 按 ID 批量查询队伍名称
async fn team_names<C: ConnectionTrait>(conn: &C, ids: Vec<i64>) -> Result<HashMap<i64, String>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let teams = Teams::find()
        .filter(TeamColumn::Id.is_in(ids))
        .all(conn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("查询队伍失败: {e}")))?;

    Ok(teams.into_iter().map(|t| (t.id, t.name)).collect())
}

/// 在给定连接上加载学员详情
pub(super) async fn load_student_detail<C: ConnectionTrait>(
    conn: &C,
    condition: Condition,
) -> Result<Option<StudentDetail>> {
    let row = Students::find()
        .find_also_related(Users)
        .filter(condition)
        .one(conn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("查询学员失败: {e}")))?;

    let Some((student, Some(user))) = row else {
        return Ok(None);
    };

    let names = team_names(conn, student.team_id.into_iter().collect()).await?;
    let team_name = student.team_id.and_then(|id| names.get(&id).cloned());

    Ok(Some(compose_detail(student, user, team_name)))
}

impl SeaOrmStorage {
    /// 同一事务内创建账号与学员档案
    pub async fn register_student_impl(
        &self,
        user: NewUser,
        profile: NewStudentProfile,
    ) -> Result<(User, Student)> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let user = insert_user(&txn, user).await?;
        let student = insert_student_profile(&txn, user.id, profile).await?;

        txn.commit()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((user, student.into_student()))
    }

    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<StudentDetail>> {
        load_student_detail(&self.db, Condition::all().add(Column::Id.eq(id))).await
    }

    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<StudentDetail>> {
        load_student_detail(&self.db, Condition::all().add(Column::UserId.eq(user_id))).await
    }

    /// 分页列出学员，可按队伍筛选，按姓名/邮箱/CPF 搜索
    pub async fn list_students_impl(
        &self,
        team_id: Option<i64>,
        search: Option<String>,
        page: u64,
        size: u64,
    ) -> Result<StudentListResponse> {
        let page = page.max(1);
        let size = size.clamp(1, 100);

        let mut select = Students::find().find_also_related(Users);

        if let Some(team_id) = team_id {
            select = select.filter(Column::TeamId.eq(team_id));
        }

        if let Some(ref search) = search
            && !search.trim().is_empty()
        {
            let search = search.trim();
            select = select.filter(
                Condition::any()
                    .add(UserColumn::Name.like(contains_pattern(search)))
                    .add(UserColumn::Email.like(contains_pattern(search)))
                    .add(UserColumn::Cpf.like(contains_pattern(search))),
            );
        }

        let paginator = select
            .order_by_asc(UserColumn::Name)
            .order_by_asc(Column::Id)
            .paginate(&self.db, size);

        let total = paginator
            .num_items()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询学员总数失败: {e}")))?;

        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询学员列表失败: {e}")))?;

        let mut ids: Vec<i64> = rows.iter().filter_map(|(s, _)| s.team_id).collect();
        ids.sort_unstable();
        ids.dedup();
        let names = team_names(&self.db, ids).await?;

        let items = rows
            .into_iter()
            .filter_map(|(student, user)| {
                let team_name = student.team_id.and_then(|id| names.get(&id).cloned());
                user.map(|user| compose_detail(student, user, team_name))
            })
            .collect();

        Ok(StudentListResponse {
            items,
            pagination: PaginationInfo::new(page, size, total),
        })
    }

    /// 更新学员档案，电话写回账号
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: StudentProfileUpdate,
        phone: Option<String>,
    ) -> Result<Option<StudentDetail>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Students::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询学员失败: {e}")))?
        else {
            return Ok(None);
        };
        let user_id = existing.user_id;

        let mut model: ActiveModel = existing.into();
        if let Some(team_id) = update.team_id {
            model.team_id = Set(team_id);
        }
        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(Some(birth_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(address) = update.address {
            model.cep = Set(address.cep);
            model.street = Set(address.street);
            model.address_number = Set(address.number);
            model.neighborhood = Set(address.neighborhood);
            model.city = Set(address.city);
            model.state = Set(address.state);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        model
            .update(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新学员失败: {e}")))?;

        if let Some(phone) = phone {
            Users::update_many()
                .col_expr(UserColumn::Phone, sea_orm::sea_query::Expr::value(phone))
                .filter(UserColumn::Id.eq(user_id))
                .exec(&txn)
                .await
                .map_err(|e| DojoSystemError::database_operation(format!("更新电话失败: {e}")))?;
        }

        let detail = load_student_detail(&txn, Condition::all().add(Column::Id.eq(id))).await?;

        txn.commit()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{local_user, memory_storage};
    use crate::models::students::{
        entities::StudentAddress,
        requests::{NewStudentProfile, StudentProfileUpdate},
    };
    use crate::models::users::entities::UserRole;

    #[tokio::test]
    async fn test_register_student_is_atomic() {
        let storage = memory_storage().await;
        let (user, student) = storage
            .register_student_impl(
                local_user("ANA", "ana@example.com", Some("52998224725"), UserRole::Student),
                NewStudentProfile {
                    birth_date: chrono::NaiveDate::from_ymd_opt(2010, 5, 1),
                    address: StudentAddress {
                        cep: Some("01001000".to_string()),
                        ..Default::default()
                    },
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(student.user_id, user.id);
        assert_eq!(student.address.cep.as_deref(), Some("01001000"));

        // 邮箱冲突时账号和档案都不会留下
        let duplicate = storage
            .register_student_impl(
                local_user("ANA 2", "ana@example.com", Some("11144477735"), UserRole::Student),
                NewStudentProfile::default(),
            )
            .await;
        assert!(duplicate.is_err());
        assert!(storage.get_user_by_cpf_impl("11144477735").await.unwrap().is_none());

        let listed = storage.list_students_impl(None, None, 1, 10).await.unwrap();
        assert_eq!(listed.pagination.total, 1);
    }

    #[tokio::test]
    async fn test_list_students_by_team_and_search() {
        let storage = memory_storage().await;
        let teacher = storage
            .create_user_impl(local_user("SENSEI", "sensei@example.com", None, UserRole::Teacher))
            .await
            .unwrap();
        let team = storage
            .create_team_impl("Equipe A", teacher.id, None)
            .await
            .unwrap();

        storage
            .register_student_impl(
                local_user("BRUNO", "bruno@example.com", None, UserRole::Student),
                NewStudentProfile {
                    team_id: Some(team.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        storage
            .register_student_impl(
                local_user("CARLA", "carla@example.com", None, UserRole::Student),
                NewStudentProfile::default(),
            )
            .await
            .unwrap();

        let in_team = storage
            .list_students_impl(Some(team.id), None, 1, 10)
            .await
            .unwrap();
        assert_eq!(in_team.items.len(), 1);
        assert_eq!(in_team.items[0].name, "BRUNO");
        assert_eq!(in_team.items[0].team_name.as_deref(), Some("Equipe A"));

        let searched = storage
            .list_students_impl(None, Some("carla".to_string()), 1, 10)
            .await
            .unwrap();
        assert_eq!(searched.items.len(), 1);
        assert!(searched.items[0].team_name.is_none());
    }

    #[tokio::test]
    async fn test_update_student_moves_team_and_phone() {
        let storage = memory_storage().await;
        let teacher = storage
            .create_user_impl(local_user("SENSEI", "sensei@example.com", None, UserRole::Teacher))
            .await
            .unwrap();
        let team = storage
            .create_team_impl("Equipe B", teacher.id, None)
            .await
            .unwrap();
        let (_, student) = storage
            .register_student_impl(
                local_user("DIEGO", "diego@example.com", None, UserRole::Student),
                NewStudentProfile::default(),
            )
            .await
            .unwrap();

        let updated = storage
            .update_student_impl(
                student.id,
                StudentProfileUpdate {
                    team_id: Some(Some(team.id)),
                    ..Default::default()
                },
                Some("11988887777".to_string()),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.student.team_id, Some(team.id));
        assert_eq!(updated.phone.as_deref(), Some("11988887777"));

        let cleared = storage
            .update_student_impl(
                student.id,
                StudentProfileUpdate {
                    team_id: Some(None),
                    ..Default::default()
                },
                None,
            )
            .await
            .unwrap()
            .unwrap();
        assert!(cleared.student.team_id.is_none());

        assert!(
            storage
                .update_student_impl(999, StudentProfileUpdate::default(), None)
                .await
                .unwrap()
                .is_none()
        );
    }
}
