//! 存储层测试辅助：单连接内存 SQLite

use super::SeaOrmStorage;
use crate::config::DatabaseConfig;
use crate::models::users::{entities::UserRole, requests::NewUser};

pub(crate) async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    })
    .await
    .expect("failed to open in-memory database")
}

pub(crate) fn local_user(name: &str, email: &str, cpf: Option<&str>, role: UserRole) -> NewUser {
    NewUser::local(
        name.to_string(),
        email.to_string(),
        cpf.map(str::to_string),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        role,
    )
}
