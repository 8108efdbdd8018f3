//! 文件存储操作

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Entity as Files};
use crate::errors::{DojoSystemError, Result};
use crate::models::files::entities::File;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 上传文件（创建文件记录）
    pub async fn create_file_impl(&self, file: File) -> Result<File> {
        let model = ActiveModel {
            token: Set(file.token),
            original_name: Set(file.original_name),
            stored_name: Set(file.stored_name),
            file_size: Set(file.file_size),
            file_type: Set(file.file_type),
            user_id: Set(file.user_id),
            uploaded_at: Set(file.uploaded_at.timestamp()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("上传文件记录失败: {e}")))?;

        Ok(result.into_file())
    }

    /// 通过 token 获取文件
    pub async fn get_file_by_token_impl(&self, token: &str) -> Result<Option<File>> {
        let result = Files::find_by_id(token.to_string())
            .one(&self.db)
            .await
            .map_err(|e| DojoSystemError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(result.map(|m| m.into_file()))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{local_user, memory_storage};
    use crate::models::files::entities::File;
    use crate::models::users::entities::UserRole;

    #[tokio::test]
    async fn test_file_roundtrip_by_token() {
        let storage = memory_storage().await;
        let user = storage
            .create_user_impl(local_user("SENSEI", "sensei@example.com", None, UserRole::Teacher))
            .await
            .unwrap();

        let created = storage
            .create_file_impl(File {
                token: "tok-1".to_string(),
                original_name: "kata.png".to_string(),
                stored_name: "tok-1.png".to_string(),
                file_size: 42,
                file_type: "image/png".to_string(),
                user_id: user.id,
                uploaded_at: chrono::Utc::now(),
            })
            .await
            .unwrap();
        assert_eq!(created.stored_name, "tok-1.png");

        let found = storage.get_file_by_token_impl("tok-1").await.unwrap().unwrap();
        assert_eq!(found.original_name, "kata.png");
        assert!(storage.get_file_by_token_impl("missing").await.unwrap().is_none());
    }
}
