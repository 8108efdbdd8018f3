//! 课时实体（aulas）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "aulas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub position: i32,
    /// video / image / text
    pub lesson_type: String,
    /// LessonContent 的 JSON
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course_modules::Entity",
        from = "Column::ModuleId",
        to = "super::course_modules::Column::Id"
    )]
    Module,
}

impl Related<super::course_modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 内容无法解析时退化为空文本课时
    pub fn into_lesson(self) -> crate::models::courses::entities::Lesson {
        use crate::models::courses::entities::{Lesson, LessonContent};

        let content = serde_json::from_str::<LessonContent>(&self.content).unwrap_or_else(|e| {
            tracing::warn!("Lesson {} has malformed content: {}", self.id, e);
            LessonContent::Text {
                body: String::new(),
            }
        });

        Lesson {
            id: self.id,
            module_id: self.module_id,
            title: self.title,
            position: self.position,
            content,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
