//! 课程、模块与课时存储

use super::SeaOrmStorage;
use crate::entity::course_modules::{
    ActiveModel as ModuleActiveModel, Column as ModuleColumn, Entity as CourseModules,
};
use crate::entity::courses::{ActiveModel, Entity as Courses};
use crate::entity::lessons::{
    ActiveModel as LessonActiveModel, Column as LessonColumn, Entity as Lessons,
};
use crate::errors::{DojoSystemError, Result};
use crate::models::courses::{
    entities::{Course, CourseModule, CourseTree, Lesson, LessonContent, ModuleTree},
    requests::{UpdateCourseRequest, UpdateLessonRequest, UpdateModuleRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

/// 同级最后一个位置之后
async fn next_module_position<C: ConnectionTrait>(conn: &C, course_id: i64) -> Result<i32> {
    let last = CourseModules::find()
        .filter(ModuleColumn::CourseId.eq(course_id))
        .order_by_desc(ModuleColumn::Position)
        .one(conn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("查询模块失败: {e}")))?;

    Ok(last.map(|m| m.position + 1).unwrap_or(1))
}

async fn next_lesson_position<C: ConnectionTrait>(conn: &C, module_id: i64) -> Result<i32> {
    let last = Lessons::find()
        .filter(LessonColumn::ModuleId.eq(module_id))
        .order_by_desc(LessonColumn::Position)
        .one(conn)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("查询课时失败: {e}")))?;

    Ok(last.map(|l| l.position + 1).unwrap_or(1))
}

impl SeaOrmStorage {
    pub async fn create_course_impl(
        &self,
        owner_id: i64,
        title: &str,
        description: Option<String>,
        published: bool,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(title.to_string()),
            description: Set(description),
            owner_id: Set(owner_id),
            editor_ids: Set("[]".to_string()),
            published: Set(published),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    pub async fn get_course_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let result = Courses::find()
            .order_by_desc(crate::entity::courses::Column::CreatedAt)
            .order_by_desc(crate::entity::courses::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_course()).collect())
    }

    pub async fn update_course_impl(
        &self,
        id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let Some(existing) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(published) = update.published {
            model.published = Set(published);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(result.into_course()))
    }

    /// 整体替换编辑者列表，去重后按 ID 排序
    pub async fn set_course_editors_impl(
        &self,
        id: i64,
        mut editor_ids: Vec<i64>,
    ) -> Result<Option<Course>> {
        let Some(existing) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        editor_ids.retain(|editor| *editor != existing.owner_id);
        editor_ids.sort_unstable();
        editor_ids.dedup();

        let mut model: ActiveModel = existing.into();
        model.editor_ids = Set(serde_json::to_string(&editor_ids)?);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新课程编辑者失败: {e}")))?;

        Ok(Some(result.into_course()))
    }

    /// 依次删除课时、模块和课程
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("开启事务失败: {e}")))?;

        let module_ids: Vec<i64> = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(id))
            .all(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询模块失败: {e}")))?
            .into_iter()
            .map(|m| m.id)
            .collect();

        if !module_ids.is_empty() {
            Lessons::delete_many()
                .filter(LessonColumn::ModuleId.is_in(module_ids))
                .exec(&txn)
                .await
                .map_err(|e| DojoSystemError::database_operation(format!("删除课时失败: {e}")))?;

            CourseModules::delete_many()
                .filter(ModuleColumn::CourseId.eq(id))
                .exec(&txn)
                .await
                .map_err(|e| DojoSystemError::database_operation(format!("删除模块失败: {e}")))?;
        }

        let result = Courses::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("删除课程失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程 → 模块 → 课时，按位置排序
    pub async fn get_course_tree_impl(&self, id: i64) -> Result<Option<CourseTree>> {
        let Some(course) = self.get_course_impl(id).await? else {
            return Ok(None);
        };

        let modules = CourseModules::find()
            .filter(ModuleColumn::CourseId.eq(id))
            .order_by_asc(ModuleColumn::Position)
            .order_by_asc(ModuleColumn::Id)
            .find_with_related(Lessons)
            .order_by_asc(LessonColumn::Position)
            .order_by_asc(LessonColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询课程结构失败: {e}")))?;

        let modules = modules
            .into_iter()
            .map(|(module, lessons)| ModuleTree {
                module: module.into_module(),
                lessons: lessons.into_iter().map(|l| l.into_lesson()).collect(),
            })
            .collect();

        Ok(Some(CourseTree { course, modules }))
    }

    pub async fn create_module_impl(
        &self,
        course_id: i64,
        title: &str,
        position: Option<i32>,
    ) -> Result<CourseModule> {
        let position = match position {
            Some(p) => p,
            None => next_module_position(&self.db, course_id).await?,
        };
        let now = chrono::Utc::now().timestamp();

        let result = ModuleActiveModel {
            course_id: Set(course_id),
            title: Set(title.to_string()),
            position: Set(position),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("创建模块失败: {e}")))?;

        Ok(result.into_module())
    }

    pub async fn get_module_impl(&self, id: i64) -> Result<Option<CourseModule>> {
        let result = CourseModules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询模块失败: {e}")))?;

        Ok(result.map(|m| m.into_module()))
    }

    pub async fn update_module_impl(
        &self,
        id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<CourseModule>> {
        let Some(existing) = CourseModules::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询模块失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ModuleActiveModel = existing.into();
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(position) = update.position {
            model.position = Set(position);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新模块失败: {e}")))?;

        Ok(Some(result.into_module()))
    }

    pub async fn delete_module_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("开启事务失败: {e}")))?;

        Lessons::delete_many()
            .filter(LessonColumn::ModuleId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("删除课时失败: {e}")))?;

        let result = CourseModules::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("删除模块失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_lesson_impl(
        &self,
        module_id: i64,
        title: &str,
        position: Option<i32>,
        content: LessonContent,
    ) -> Result<Lesson> {
        let position = match position {
            Some(p) => p,
            None => next_lesson_position(&self.db, module_id).await?,
        };
        let now = chrono::Utc::now().timestamp();

        let result = LessonActiveModel {
            module_id: Set(module_id),
            title: Set(title.to_string()),
            position: Set(position),
            lesson_type: Set(content.kind().to_string()),
            content: Set(serde_json::to_string(&content)?),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| DojoSystemError::database_operation(format!("创建课时失败: {e}")))?;

        Ok(result.into_lesson())
    }

    pub async fn get_lesson_impl(&self, id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询课时失败: {e}")))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    pub async fn update_lesson_impl(
        &self,
        id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        let Some(existing) = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询课时失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: LessonActiveModel = existing.into();
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(position) = update.position {
            model.position = Set(position);
        }
        if let Some(content) = update.content {
            model.lesson_type = Set(content.kind().to_string());
            model.content = Set(serde_json::to_string(&content)?);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("更新课时失败: {e}")))?;

        Ok(Some(result.into_lesson()))
    }

    pub async fn delete_lesson_impl(&self, id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("删除课时失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{local_user, memory_storage};
    use crate::models::courses::entities::LessonContent;
    use crate::models::users::entities::UserRole;

    #[tokio::test]
    async fn test_course_tree_orders_by_position() {
        let storage = memory_storage().await;
        let owner = storage
            .create_user_impl(local_user("SENSEI", "sensei@example.com", None, UserRole::Teacher))
            .await
            .unwrap();
        let course = storage
            .create_course_impl(owner.id, "Karatê Básico", None, false)
            .await
            .unwrap();

        let second = storage
            .create_module_impl(course.id, "Katas", Some(2))
            .await
            .unwrap();
        let first = storage
            .create_module_impl(course.id, "Kihon", Some(1))
            .await
            .unwrap();
        let appended = storage
            .create_module_impl(course.id, "Kumite", None)
            .await
            .unwrap();
        assert_eq!(appended.position, 3);

        storage
            .create_lesson_impl(
                first.id,
                "Postura",
                None,
                LessonContent::Text {
                    body: "Zenkutsu dachi".to_string(),
                },
            )
            .await
            .unwrap();
        storage
            .create_lesson_impl(
                first.id,
                "Vídeo",
                None,
                LessonContent::Video {
                    url: "https://videos.example.com/kihon".to_string(),
                },
            )
            .await
            .unwrap();

        let tree = storage.get_course_tree_impl(course.id).await.unwrap().unwrap();
        let ids: Vec<i64> = tree.modules.iter().map(|m| m.module.id).collect();
        assert_eq!(ids, vec![first.id, second.id, appended.id]);
        assert_eq!(tree.modules[0].lessons.len(), 2);
        assert_eq!(tree.modules[0].lessons[0].title, "Postura");
        assert_eq!(tree.modules[0].lessons[1].position, 2);
        assert!(tree.modules[1].lessons.is_empty());
    }

    #[tokio::test]
    async fn test_editors_and_delete_cascade() {
        let storage = memory_storage().await;
        let owner = storage
            .create_user_impl(local_user("SENSEI", "sensei@example.com", None, UserRole::Teacher))
            .await
            .unwrap();
        let course = storage
            .create_course_impl(owner.id, "Judô", Some("Projeções".to_string()), true)
            .await
            .unwrap();

        let updated = storage
            .set_course_editors_impl(course.id, vec![5, owner.id, 3, 5])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.editor_ids, vec![3, 5]);

        let module = storage
            .create_module_impl(course.id, "Ukemi", None)
            .await
            .unwrap();
        let lesson = storage
            .create_lesson_impl(
                module.id,
                "Rolamento",
                None,
                LessonContent::Text {
                    body: "Mae ukemi".to_string(),
                },
            )
            .await
            .unwrap();

        assert!(storage.delete_course_impl(course.id).await.unwrap());
        assert!(storage.get_course_impl(course.id).await.unwrap().is_none());
        assert!(storage.get_module_impl(module.id).await.unwrap().is_none());
        assert!(storage.get_lesson_impl(lesson.id).await.unwrap().is_none());
        assert!(!storage.delete_course_impl(course.id).await.unwrap());
    }
}
