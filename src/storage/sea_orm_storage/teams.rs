use super::SeaOrmStorage;
use crate::entity::teams::{ActiveModel, Column, Entity as Teams};
use crate::errors::{DojoSystemError, Result};
use crate::models::teams::{Team, UpdateTeamRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_team_impl(
        &self,
        name: &str,
        responsible_teacher_id: i64,
        description: Option<String>,
    ) -> Result<Team> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(name.to_string()),
            responsible_teacher_id: Set(responsible_teacher_id),
            description: Set(description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("创建队伍失败: {e}")))?;

        Ok(result.into_team())
    }

    pub async fn get_team_by_id_impl(&self, id: i64) -> Result<Option<Team>> {
        let result = Teams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询队伍失败: {e}")))?;

        Ok(result.map(|m| m.into_team()))
    }

    pub async fn get_team_by_name_impl(&self, name: &str) -> Result<Option<Team>> {
        let result = Teams::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询队伍失败: {e}")))?;

        Ok(result.map(|m| m.into_team()))
    }

    pub async fn list_teams_impl(&self) -> Result<Vec<Team>> {
        let result = Teams::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询队伍列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_team()).collect())
    }

    pub async fn update_team_impl(
        &self,
        id: i64,
        update: UpdateTeamRequest,
    ) -> Result<Option<Team>> {
        let Some(existing) = Teams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询队伍失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(teacher_id) = update.responsible_teacher_id {
            model.responsible_teacher_id = Set(teacher_id);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新队伍失败: {e}")))?;

        Ok(Some(result.into_team()))
    }

    /// 删除队伍，成员的 team_id 由外键置空
    pub async fn delete_team_impl(&self, id: i64) -> Result<bool> {
        let result = Teams::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("删除队伍失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{local_user, memory_storage};
    use crate::models::students::requests::NewStudentProfile;
    use crate::models::teams::UpdateTeamRequest;
    use crate::models::users::entities::UserRole;

    #[tokio::test]
    async fn test_team_crud_and_member_detach() {
        let storage = memory_storage().await;
        let teacher = storage
            .create_user_impl(local_user("SENSEI", "sensei@example.com", None, UserRole::Teacher))
            .await
            .unwrap();

        let team = storage
            .create_team_impl("Equipe Norte", teacher.id, Some("Turma da manhã".to_string()))
            .await
            .unwrap();
        assert!(storage.create_team_impl("Equipe Norte", teacher.id, None).await.is_err());
        assert_eq!(
            storage.get_team_by_name_impl("Equipe Norte").await.unwrap().unwrap().id,
            team.id
        );

        let renamed = storage
            .update_team_impl(
                team.id,
                UpdateTeamRequest {
                    name: Some("Equipe Sul".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "Equipe Sul");

        let (_, student) = storage
            .register_student_impl(
                local_user("ALUNO", "aluno@example.com", None, UserRole::Student),
                NewStudentProfile {
                    team_id: Some(team.id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(storage.delete_team_impl(team.id).await.unwrap());
        assert!(!storage.delete_team_impl(team.id).await.unwrap());
        let detached = storage.get_student_by_id_impl(student.id).await.unwrap().unwrap();
        assert!(detached.student.team_id.is_none());
        assert!(storage.list_teams_impl().await.unwrap().is_empty());
    }
}
