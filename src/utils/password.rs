use crate::config::{AppConfig, Argon2Config};
use crate::errors::DojoSystemError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

fn argon2_from(config: &Argon2Config) -> Result<Argon2<'static>, DojoSystemError> {
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| DojoSystemError::validation(format!("Argon2 参数错误: {e}")))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// 按指定参数哈希密码
pub fn hash_password_with(
    password: &str,
    config: &Argon2Config,
) -> Result<String, DojoSystemError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2_from(config)?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| DojoSystemError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, DojoSystemError> {
    hash_password_with(password, &AppConfig::get().argon2)
}

/// 验证密码，比较为常量时间；哈希自带参数，解析失败视为不匹配
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_params() -> Argon2Config {
        Argon2Config {
            memory_cost: 8,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password_with("Faixa2025", &cheap_params()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Faixa2025", &hash));
        assert!(!verify_password("faixa2025", &hash));
    }

    #[test]
    fn test_garbage_hash_never_matches() {
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
