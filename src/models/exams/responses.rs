use serde::Serialize;
use ts_rs::TS;

use super::entities::{ExamConfig, ExamResult, PublicQuestion};
use crate::models::{Belt, certificates::entities::Certificate, common::PaginationInfo};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamConfigListResponse {
    pub items: Vec<ExamConfig>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct StartExamResponse {
    pub attempt_id: i64,
    pub exam_config_id: i64,
    pub belt: Belt,
    pub title: String,
    pub pass_percentage: i32,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub questions: Vec<PublicQuestion>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct SubmitExamResponse {
    pub result: ExamResult,
    pub certificate: Option<Certificate>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamResultListResponse {
    pub items: Vec<ExamResult>,
    pub pagination: PaginationInfo,
}
