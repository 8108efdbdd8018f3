//! 考试尝试实体（exames_tentativas）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exames_tentativas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub exam_config_id: i64,
    pub status: String,
    /// 题目快照（含答案），JSON
    #[sea_orm(column_type = "Text")]
    pub questions: String,
    pub started_at: i64,
    pub finished_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exam_configs::Entity",
        from = "Column::ExamConfigId",
        to = "super::exam_configs::Column::Id"
    )]
    ExamConfig,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::exam_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamConfig.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attempt(self) -> crate::models::exams::entities::ExamAttempt {
        use crate::models::exams::entities::{ExamAttempt, ExamAttemptStatus};

        ExamAttempt {
            id: self.id,
            user_id: self.user_id,
            exam_config_id: self.exam_config_id,
            status: self
                .status
                .parse::<ExamAttemptStatus>()
                .unwrap_or(ExamAttemptStatus::Abandoned),
            questions: serde_json::from_str(&self.questions).unwrap_or_default(),
            started_at: super::from_timestamp(self.started_at),
            finished_at: self.finished_at.map(super::from_timestamp),
        }
    }
}
