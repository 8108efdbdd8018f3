pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teams::{CreateTeamRequest, Team, UpdateTeamRequest};
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

pub struct TeamService {
    storage: Option<Arc<dyn Storage>>,
}

/// 管理员或负责教师可以修改队伍
pub(crate) fn can_manage(user: &User, team: &Team) -> bool {
    user.role == UserRole::Admin || team.responsible_teacher_id == user.id
}

pub(crate) fn validate_team_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Nome da equipe é obrigatório");
    }
    if name.chars().count() > 100 {
        return Err("Nome da equipe muito longo");
    }
    Ok(name.to_string())
}

impl TeamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn list_teams(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_teams(self, request).await
    }

    pub async fn get_team(&self, team_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_team(self, team_id, request).await
    }

    pub async fn create_team(
        &self,
        team_data: CreateTeamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_team(self, team_data, request).await
    }

    pub async fn update_team(
        &self,
        team_id: i64,
        update_data: UpdateTeamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_team(self, team_id, update_data, request).await
    }

    pub async fn delete_team(
        &self,
        team_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_team(self, team_id, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Belt;
    use crate::models::users::entities::{AuthProvider, UserStatus};

    fn user(id: i64, role: UserRole) -> User {
        let now = chrono::Utc::now();
        User {
            id,
            name: "SENSEI".to_string(),
            email: format!("u{id}@example.com"),
            cpf: None,
            password_hash: None,
            auth_provider: AuthProvider::Local,
            provider_subject: None,
            role,
            status: UserStatus::Active,
            belt: Belt::Preta,
            must_change_password: false,
            profile_complete: true,
            phone: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn team(responsible: i64) -> Team {
        let now = chrono::Utc::now();
        Team {
            id: 1,
            name: "Equipe Norte".to_string(),
            responsible_teacher_id: responsible,
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_can_manage() {
        assert!(can_manage(&user(1, UserRole::Admin), &team(7)));
        assert!(can_manage(&user(7, UserRole::Teacher), &team(7)));
        assert!(!can_manage(&user(8, UserRole::Teacher), &team(7)));
    }

    #[test]
    fn test_validate_team_name() {
        assert_eq!(validate_team_name("  Equipe Sul ").unwrap(), "Equipe Sul");
        assert!(validate_team_name("   ").is_err());
        assert!(validate_team_name(&"x".repeat(101)).is_err());
    }
}
