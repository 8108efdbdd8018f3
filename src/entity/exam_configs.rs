//! 考试配置实体（exames_config）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exames_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub belt: String,
    pub title: String,
    /// JSON 字符串数组
    #[sea_orm(column_type = "Text")]
    pub topics: String,
    pub question_count: i32,
    pub pass_percentage: i32,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::exam_attempts::Entity")]
    Attempts,
    #[sea_orm(has_many = "super::exam_results::Entity")]
    Results,
    #[sea_orm(has_many = "super::certificates::Entity")]
    Certificates,
}

impl Related<super::exam_attempts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attempts.def()
    }
}

impl Related<super::exam_results::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Results.def()
    }
}

impl Related<super::certificates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Certificates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_exam_config(self) -> crate::models::exams::entities::ExamConfig {
        use crate::models::Belt;
        use crate::models::exams::entities::ExamConfig;

        ExamConfig {
            id: self.id,
            belt: self.belt.parse::<Belt>().unwrap_or(Belt::Branca),
            title: self.title,
            topics: serde_json::from_str(&self.topics).unwrap_or_default(),
            question_count: self.question_count,
            pass_percentage: self.pass_percentage,
            active: self.active,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
