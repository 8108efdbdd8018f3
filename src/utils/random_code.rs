use rand::Rng;
use rand::distr::Alphanumeric;

/// 生成指定长度的字母数字随机串
pub fn generate_random_code(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// 生成满足密码策略的临时密码：保证同时含大写、小写和数字
pub fn generate_temporary_password() -> String {
    let mut rng = rand::rng();
    let upper = rng.random_range(b'A'..=b'Z') as char;
    let lower = rng.random_range(b'a'..=b'z') as char;
    let digit = rng.random_range(b'0'..=b'9') as char;
    format!("{upper}{lower}{digit}{}", generate_random_code(9))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate::validate_password;

    #[test]
    fn test_random_code_length() {
        let code = generate_random_code(16);
        assert_eq!(code.len(), 16);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_temporary_password_meets_policy() {
        for _ in 0..20 {
            let password = generate_temporary_password();
            assert_eq!(password.len(), 12);
            assert!(validate_password(&password).is_valid, "{password}");
        }
    }
}
