use serde::Deserialize;
use ts_rs::TS;

use crate::models::{Belt, common::PaginationQuery};

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct CreateExamConfigRequest {
    pub belt: Belt,
    pub title: String,
    pub topics: Vec<String>,
    pub question_count: i32,
    /// 缺省时使用配置中的默认及格线
    pub pass_percentage: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct UpdateExamConfigRequest {
    pub belt: Option<Belt>,
    pub title: Option<String>,
    pub topics: Option<Vec<String>>,
    pub question_count: Option<i32>,
    pub pass_percentage: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamConfigListParams {
    pub belt: Option<Belt>,
    #[serde(default)]
    pub active_only: bool,
}

/// 提交答案，按题目顺序，未作答为 null
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct SubmitExamRequest {
    pub answers: Vec<Option<String>>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamResultListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub user_id: Option<i64>,
}

/// 存储层考试配置写入参数
#[derive(Debug, Clone)]
pub struct ExamConfigInput {
    pub belt: Belt,
    pub title: String,
    pub topics: Vec<String>,
    pub question_count: i32,
    pub pass_percentage: i32,
    pub active: bool,
}
