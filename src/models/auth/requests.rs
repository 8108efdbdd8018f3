use serde::Deserialize;
use ts_rs::TS;

use crate::models::students::requests::AddressInput;

// 用户登录请求（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 邮箱或 CPF
    pub identifier: String,
    /// 密码
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}

// Google 登录请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct GoogleLoginRequest {
    pub id_token: String,
    #[serde(default)]
    pub remember_me: bool,
}

// 学员自助注册请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub password: String,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub address: Option<AddressInput>,
}

// 修改密码请求（仅本地账号）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

// 补全资料请求（仅第三方账号）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct CompleteProfileRequest {
    pub name: String,
    pub cpf: String,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub address: Option<AddressInput>,
}
