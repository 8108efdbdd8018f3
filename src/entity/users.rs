//! 用户实体（usuarios）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub cpf: Option<String>,
    pub password_hash: Option<String>,
    pub auth_provider: String,
    pub provider_subject: Option<String>,
    pub role: String,
    pub status: String,
    pub belt: String,
    pub must_change_password: bool,
    pub profile_complete: bool,
    pub phone: Option<String>,
    pub last_login: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::students::Entity")]
    Student,
    #[sea_orm(has_one = "super::teachers::Entity")]
    Teacher,
    #[sea_orm(has_many = "super::exam_results::Entity")]
    ExamResults,
    #[sea_orm(has_many = "super::certificates::Entity")]
    Certificates,
    #[sea_orm(has_many = "super::files::Entity")]
    Files,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::exam_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamResults.def()
    }
}

impl Related<super::certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificates.def()
    }
}

impl Related<super::files::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Files.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::models::Belt;
        use crate::models::users::entities::{AuthProvider, User, UserRole, UserStatus};

        User {
            id: self.id,
            name: self.name,
            email: self.email,
            cpf: self.cpf,
            password_hash: self.password_hash,
            auth_provider: self
                .auth_provider
                .parse::<AuthProvider>()
                .unwrap_or(AuthProvider::Local),
            provider_subject: self.provider_subject,
            role: self.role.parse::<UserRole>().unwrap_or(UserRole::Student),
            status: self
                .status
                .parse::<UserStatus>()
                .unwrap_or(UserStatus::Active),
            belt: self.belt.parse::<Belt>().unwrap_or(Belt::Branca),
            must_change_password: self.must_change_password,
            profile_complete: self.profile_complete,
            phone: self.phone,
            last_login: self.last_login.map(super::from_timestamp),
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
