//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 时间统一以 Unix 秒存储。

pub mod prelude;

pub mod certificates;
pub mod course_modules;
pub mod courses;
pub mod exam_attempts;
pub mod exam_configs;
pub mod exam_results;
pub mod files;
pub mod lessons;
pub mod students;
pub mod teachers;
pub mod teams;
pub mod users;

use chrono::{DateTime, Utc};

pub(crate) fn from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
