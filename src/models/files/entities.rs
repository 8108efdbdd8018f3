use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct File {
    // 文件令牌，下载和课时引用时使用
    pub token: String,
    // 原始文件名
    pub original_name: String,
    // 磁盘上的文件名
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub stored_name: String,
    // 文件大小（以字节为单位）
    pub file_size: i64,
    // 文件类型
    pub file_type: String,
    // 上传者
    pub user_id: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
