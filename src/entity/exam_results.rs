//! 考试成绩实体（exames）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exames")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub exam_config_id: i64,
    pub attempt_id: Option<i64>,
    pub belt: String,
    pub score: i32,
    pub total_questions: i32,
    #[sea_orm(column_type = "Double")]
    pub percentage: f64,
    pub passed: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub taken_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::exam_configs::Entity",
        from = "Column::ExamConfigId",
        to = "super::exam_configs::Column::Id"
    )]
    ExamConfig,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::exam_configs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExamConfig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam_result(self) -> crate::models::exams::entities::ExamResult {
        use crate::models::Belt;
        use crate::models::exams::entities::ExamResult;

        ExamResult {
            id: self.id,
            user_id: self.user_id,
            exam_config_id: self.exam_config_id,
            attempt_id: self.attempt_id,
            belt: self.belt.parse::<Belt>().unwrap_or(Belt::Branca),
            score: self.score,
            total_questions: self.total_questions,
            percentage: self.percentage,
            passed: self.passed,
            details: self
                .details
                .as_deref()
                .and_then(|d| serde_json::from_str(d).ok()),
            taken_at: super::from_timestamp(self.taken_at),
        }
    }
}
