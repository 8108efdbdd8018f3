use super::entities::{AuthProvider, UserRole, UserStatus};
use crate::models::{Belt, common::PaginationQuery};
use serde::Deserialize;
use ts_rs::TS;

// 用户查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub search: Option<String>,
}

// 管理员创建用户请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub cpf: Option<String>,
    pub password: String,
    pub role: UserRole,
    pub belt: Option<Belt>,
    pub phone: Option<String>,
}

// 用户更新请求
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub belt: Option<Belt>,
    pub phone: Option<String>,
}

// 管理员重置密码请求，未提供密码时自动生成临时密码
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct ResetPasswordRequest {
    pub new_password: Option<String>,
}

// 用户列表查询参数（用于存储层）
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub search: Option<String>,
}

/// 存储层新建用户参数，密码已哈希
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub cpf: Option<String>,
    pub password_hash: Option<String>,
    pub auth_provider: AuthProvider,
    pub provider_subject: Option<String>,
    pub role: UserRole,
    pub belt: Belt,
    pub must_change_password: bool,
    pub profile_complete: bool,
    pub phone: Option<String>,
}

impl NewUser {
    /// 本地密码账号
    pub fn local(
        name: String,
        email: String,
        cpf: Option<String>,
        password_hash: String,
        role: UserRole,
    ) -> Self {
        Self {
            name,
            email,
            cpf,
            password_hash: Some(password_hash),
            auth_provider: AuthProvider::Local,
            provider_subject: None,
            role,
            belt: Belt::Branca,
            must_change_password: false,
            profile_complete: true,
            phone: None,
        }
    }
}
