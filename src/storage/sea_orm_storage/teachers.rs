use super::SeaOrmStorage;
use super::users::insert_user;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{DojoSystemError, Result};
use crate::models::{
    teachers::TeacherDetail,
    users::{entities::User, requests::NewUser},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

fn compose_detail(teacher: crate::entity::teachers::Model, user: User) -> TeacherDetail {
    TeacherDetail {
        teacher: teacher.into_teacher(),
        name: user.name,
        email: user.email,
        belt: user.belt,
    }
}

impl SeaOrmStorage {
    /// 同一事务内创建教师账号与教师档案
    pub async fn create_teacher_impl(
        &self,
        user: NewUser,
        team_id: Option<i64>,
        federation_number: Option<String>,
    ) -> Result<TeacherDetail> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let user = insert_user(&txn, user).await?;

        let teacher = ActiveModel {
            user_id: Set(user.id),
            team_id: Set(team_id),
            federation_number: Set(federation_number),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("创建教师档案失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(compose_detail(teacher, user))
    }

    /// 按姓名列出教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<TeacherDetail>> {
        let rows = Teachers::find()
            .find_also_related(Users)
            .order_by_asc(UserColumn::Name)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(teacher, user)| user.map(|u| compose_detail(teacher, u.into_user())))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{local_user, memory_storage};
    use crate::models::users::entities::UserRole;

    #[tokio::test]
    async fn test_create_and_list_teachers() {
        let storage = memory_storage().await;
        let detail = storage
            .create_teacher_impl(
                local_user("SENSEI", "sensei@example.com", None, UserRole::Teacher),
                None,
                Some("FED-123".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(detail.name, "SENSEI");
        assert_eq!(detail.teacher.federation_number.as_deref(), Some("FED-123"));

        let teachers = storage.list_teachers_impl().await.unwrap();
        assert_eq!(teachers.len(), 1);
        assert_eq!(teachers[0].email, "sensei@example.com");
    }

    #[tokio::test]
    async fn test_create_teacher_rolls_back_on_conflict() {
        let storage = memory_storage().await;
        storage
            .create_user_impl(local_user("A", "taken@example.com", None, UserRole::Student))
            .await
            .unwrap();
        let result = storage
            .create_teacher_impl(
                local_user("B", "taken@example.com", None, UserRole::Teacher),
                None,
                None,
            )
            .await;
        assert!(result.is_err());
        assert!(storage.list_teachers_impl().await.unwrap().is_empty());
    }
}
