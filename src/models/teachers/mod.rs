use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Belt;

// 教师档案（professores）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub user_id: i64,
    pub team_id: Option<i64>,
    pub federation_number: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherDetail {
    pub teacher: Teacher,
    pub name: String,
    pub email: String,
    pub belt: Belt,
}

// 管理员创建教师账号
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateTeacherRequest {
    pub name: String,
    pub email: String,
    pub cpf: Option<String>,
    pub password: String,
    pub belt: Option<Belt>,
    pub phone: Option<String>,
    pub team_id: Option<i64>,
    pub federation_number: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherListResponse {
    pub items: Vec<TeacherDetail>,
}
