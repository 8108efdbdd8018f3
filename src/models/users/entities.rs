use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Belt;

// 用户角色
#[derive(Debug, Clone, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Student, // 学员
    Teacher, // 教师
    Admin,   // 管理员
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const ADMIN: &'static str = "admin";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher, &Self::Admin]
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, UserRole::Teacher | UserRole::Admin)
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: student, teacher, admin"
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::ADMIN => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户状态
#[derive(Debug, Clone, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserStatus {
    Active,    // 活跃
    Inactive,  // 非活跃
    Suspended, // 暂停
}

impl<'de> Deserialize<'de> for UserStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户状态: '{s}'. 支持的状态: active, inactive, suspended"
            ))
        })
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Inactive => write!(f, "inactive"),
            UserStatus::Suspended => write!(f, "suspended"),
        }
    }
}

impl std::str::FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            "suspended" => Ok(UserStatus::Suspended),
            _ => Err(format!("Invalid user status: {s}")),
        }
    }
}

// 认证来源，创建后不可更改
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum AuthProvider {
    Local,
    Google,
}

impl std::fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthProvider::Local => write!(f, "local"),
            AuthProvider::Google => write!(f, "google"),
        }
    }
}

impl std::str::FromStr for AuthProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            _ => Err(format!("Invalid auth provider: {s}")),
        }
    }
}

/// 用户凭据，按认证来源区分
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// 本地账号：Argon2 哈希
    Password { hash: String },
    /// 第三方账号：没有本地密码
    Federated {
        provider: AuthProvider,
        subject: Option<String>,
    },
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub cpf: Option<String>,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: Option<String>,
    pub auth_provider: AuthProvider,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub provider_subject: Option<String>,
    pub role: UserRole,
    pub status: UserStatus,
    pub belt: Belt,
    pub must_change_password: bool,
    pub profile_complete: bool,
    pub phone: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn credential(&self) -> Credential {
        match self.auth_provider {
            AuthProvider::Local => Credential::Password {
                hash: self.password_hash.clone().unwrap_or_default(),
            },
            provider => Credential::Federated {
                provider,
                subject: self.provider_subject.clone(),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        let role = self.role.to_string();
        crate::utils::jwt::generate_token_pair(self.id, &role, refresh_token_expiry)
            .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(provider: AuthProvider) -> User {
        User {
            id: 7,
            name: "JOANA SILVA".to_string(),
            email: "joana@example.com".to_string(),
            cpf: Some("52998224725".to_string()),
            password_hash: Some("$argon2id$fake".to_string()),
            auth_provider: provider,
            provider_subject: Some("google-sub".to_string()),
            role: UserRole::Student,
            status: UserStatus::Active,
            belt: Belt::Branca,
            must_change_password: false,
            profile_complete: true,
            phone: None,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_credential_dispatch() {
        assert_eq!(
            sample_user(AuthProvider::Local).credential(),
            Credential::Password {
                hash: "$argon2id$fake".to_string()
            }
        );
        assert_eq!(
            sample_user(AuthProvider::Google).credential(),
            Credential::Federated {
                provider: AuthProvider::Google,
                subject: Some("google-sub".to_string()),
            }
        );
    }

    #[test]
    fn test_secrets_not_serialized() {
        let json = serde_json::to_value(sample_user(AuthProvider::Local)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("provider_subject").is_none());
        assert_eq!(json["role"], "student");
        assert_eq!(json["auth_provider"], "local");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("teacher".parse::<UserRole>().unwrap(), UserRole::Teacher);
        assert!("user".parse::<UserRole>().is_err());
        assert!(UserRole::Admin.is_staff());
        assert!(!UserRole::Student.is_staff());
    }

    #[test]
    fn test_route_role_groups() {
        assert_eq!(UserRole::admin_roles(), &[&UserRole::Admin]);
        assert_eq!(
            UserRole::teacher_roles(),
            &[&UserRole::Teacher, &UserRole::Admin]
        );
        // 学员不属于任何受限路由组
        assert!(!UserRole::teacher_roles().contains(&&UserRole::Student));
    }
}
