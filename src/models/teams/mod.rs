use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::students::entities::StudentDetail;

// 队伍（equipes）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/team.ts")]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub responsible_teacher_id: i64,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/team.ts")]
pub struct CreateTeamRequest {
    pub name: String,
    /// 教师创建时忽略，固定为本人
    pub responsible_teacher_id: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/team.ts")]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub responsible_teacher_id: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/team.ts")]
pub struct TeamListResponse {
    pub items: Vec<Team>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/team.ts")]
pub struct TeamDetailResponse {
    pub team: Team,
    pub responsible_teacher_name: Option<String>,
    pub members: Vec<StudentDetail>,
}
