use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Belt;

// 考试配置（exames_config）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamConfig {
    pub id: i64,
    pub belt: Belt,
    pub title: String,
    pub topics: Vec<String>,
    pub question_count: i32,
    pub pass_percentage: i32,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 题库中的一道题
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// 发给考生的题目，不含答案
#[derive(Debug, Clone, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct PublicQuestion {
    pub index: usize,
    pub question: String,
    pub options: Vec<String>,
}

impl Question {
    pub fn to_public(&self, index: usize) -> PublicQuestion {
        PublicQuestion {
            index,
            question: self.question.clone(),
            options: self.options.clone(),
        }
    }
}

// 考试尝试状态，未开始即不存在记录
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub enum ExamAttemptStatus {
    InProgress,
    Submitted,
    Abandoned,
}

impl ExamAttemptStatus {
    pub const IN_PROGRESS: &'static str = "in_progress";
    pub const SUBMITTED: &'static str = "submitted";
    pub const ABANDONED: &'static str = "abandoned";

    /// 只有进行中的尝试可以转移到其他状态
    pub fn can_transition_to(&self, next: ExamAttemptStatus) -> bool {
        matches!(
            (self, next),
            (
                ExamAttemptStatus::InProgress,
                ExamAttemptStatus::Submitted | ExamAttemptStatus::Abandoned
            )
        )
    }
}

impl<'de> Deserialize<'de> for ExamAttemptStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for ExamAttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExamAttemptStatus::InProgress => write!(f, "{}", Self::IN_PROGRESS),
            ExamAttemptStatus::Submitted => write!(f, "{}", Self::SUBMITTED),
            ExamAttemptStatus::Abandoned => write!(f, "{}", Self::ABANDONED),
        }
    }
}

impl std::str::FromStr for ExamAttemptStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::IN_PROGRESS => Ok(ExamAttemptStatus::InProgress),
            Self::SUBMITTED => Ok(ExamAttemptStatus::Submitted),
            Self::ABANDONED => Ok(ExamAttemptStatus::Abandoned),
            _ => Err(format!("Invalid exam attempt status: {s}")),
        }
    }
}

// 考试尝试（exames_tentativas），保存抽中的题目快照
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamAttempt {
    pub id: i64,
    pub user_id: i64,
    pub exam_config_id: i64,
    pub status: ExamAttemptStatus,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub questions: Vec<Question>,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// 单题判分明细
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct QuestionDetail {
    pub question: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub correct: bool,
}

// 考试成绩（exames），创建后不可修改
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamResult {
    pub id: i64,
    pub user_id: i64,
    pub exam_config_id: i64,
    pub attempt_id: Option<i64>,
    pub belt: Belt,
    pub score: i32,
    pub total_questions: i32,
    pub percentage: f64,
    pub passed: bool,
    pub details: Option<Vec<QuestionDetail>>,
    pub taken_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_transitions() {
        use ExamAttemptStatus::*;
        assert!(InProgress.can_transition_to(Submitted));
        assert!(InProgress.can_transition_to(Abandoned));
        assert!(!Submitted.can_transition_to(Abandoned));
        assert!(!Abandoned.can_transition_to(Submitted));
        assert!(!InProgress.can_transition_to(InProgress));
    }

    #[test]
    fn test_status_round_trip_through_str() {
        for status in [
            ExamAttemptStatus::InProgress,
            ExamAttemptStatus::Submitted,
            ExamAttemptStatus::Abandoned,
        ] {
            assert_eq!(status.to_string().parse::<ExamAttemptStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_public_question_hides_answer() {
        let question = Question {
            question: "Quantas faixas?".to_string(),
            options: vec!["7".to_string(), "9".to_string()],
            answer: "9".to_string(),
        };
        let json = serde_json::to_value(question.to_public(0)).unwrap();
        assert!(json.get("answer").is_none());
        assert_eq!(json["index"], 0);
    }
}
