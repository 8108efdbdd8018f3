use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::{User, UserRole};

/// 课时内容，按类型携带不同载荷
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum LessonContent {
    Video {
        url: String,
    },
    Image {
        url: Option<String>,
        file_token: Option<String>,
    },
    Text {
        body: String,
    },
}

impl LessonContent {
    pub fn kind(&self) -> &'static str {
        match self {
            LessonContent::Video { .. } => "video",
            LessonContent::Image { .. } => "image",
            LessonContent::Text { .. } => "text",
        }
    }

    /// 校验载荷：视频需要 http(s) 地址，图片需要地址或文件令牌（二选一），文本不能为空
    pub fn validate(&self) -> Result<(), String> {
        fn is_http_url(url: &str) -> bool {
            let url = url.trim();
            url.starts_with("https://") || url.starts_with("http://")
        }

        match self {
            LessonContent::Video { url } if !is_http_url(url) => {
                Err("视频地址必须以 http:// 或 https:// 开头".to_string())
            }
            LessonContent::Image { url, file_token } => match (url, file_token) {
                (Some(url), None) if is_http_url(url) => Ok(()),
                (None, Some(token)) if !token.trim().is_empty() => Ok(()),
                (Some(_), None) => Err("图片地址必须以 http:// 或 https:// 开头".to_string()),
                _ => Err("图片课时需要提供 url 或 file_token 其中之一".to_string()),
            },
            LessonContent::Text { body } if body.trim().is_empty() => {
                Err("文本课时内容不能为空".to_string())
            }
            _ => Ok(()),
        }
    }

    pub fn file_token(&self) -> Option<&str> {
        match self {
            LessonContent::Image {
                file_token: Some(token),
                ..
            } => Some(token),
            _ => None,
        }
    }
}

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub editor_ids: Vec<i64>,
    pub published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Course {
    /// 所有者、编辑者和管理员可以编辑
    pub fn can_edit(&self, user: &User) -> bool {
        user.role == UserRole::Admin
            || self.owner_id == user.id
            || self.editor_ids.contains(&user.id)
    }

    /// 未发布课程只对可编辑的人可见
    pub fn can_view(&self, user: &User) -> bool {
        self.published || self.can_edit(user)
    }
}

// 课程模块
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseModule {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    pub position: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 课时
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Lesson {
    pub id: i64,
    pub module_id: i64,
    pub title: String,
    pub position: i32,
    pub content: LessonContent,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct ModuleTree {
    pub module: CourseModule,
    pub lessons: Vec<Lesson>,
}

/// 课程完整结构：课程 → 模块 → 课时
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseTree {
    pub course: Course,
    pub modules: Vec<ModuleTree>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_content_tagging() {
        let content: LessonContent =
            serde_json::from_str(r#"{"type":"video","url":"https://youtu.be/x"}"#).unwrap();
        assert_eq!(content.kind(), "video");
        assert!(content.validate().is_ok());

        let json = serde_json::to_value(LessonContent::Text {
            body: "Kihon".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["body"], "Kihon");
    }

    #[test]
    fn test_image_requires_exactly_one_source() {
        let both = LessonContent::Image {
            url: Some("https://x/y.png".to_string()),
            file_token: Some("abc".to_string()),
        };
        assert!(both.validate().is_err());

        let none = LessonContent::Image {
            url: None,
            file_token: None,
        };
        assert!(none.validate().is_err());

        let token = LessonContent::Image {
            url: None,
            file_token: Some("abc".to_string()),
        };
        assert!(token.validate().is_ok());
        assert_eq!(token.file_token(), Some("abc"));
    }

    #[test]
    fn test_invalid_payloads() {
        assert!(
            LessonContent::Video {
                url: "ftp://x".to_string()
            }
            .validate()
            .is_err()
        );
        assert!(
            LessonContent::Text {
                body: "   ".to_string()
            }
            .validate()
            .is_err()
        );
    }
}
