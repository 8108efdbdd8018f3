//! CPF（巴西个人税号）校验
//!
//! 输入可带标点，只看其中的数字。校验失败一律返回 false，不会 panic。

/// 提取输入中的全部数字
fn digits_of(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// 以 `weights_from` 为首个权重递减加权求和，按 mod 11 规则算出校验位
fn check_digit(digits: &[u32], weights_from: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip((2..=weights_from).rev())
        .map(|(d, w)| d * w)
        .sum();
    let digit = (sum * 10) % 11;
    if digit == 10 { 0 } else { digit }
}

/// 校验 CPF 的两位校验码
pub fn validate_cpf(input: &str) -> bool {
    let digits = digits_of(input);
    if digits.len() != 11 {
        return false;
    }
    // 11 位全相同的号码能通过校验位计算，但不是有效 CPF
    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// 有效时返回 11 位纯数字形式
pub fn normalize_cpf(input: &str) -> Option<String> {
    if !validate_cpf(input) {
        return None;
    }
    Some(input.chars().filter(char::is_ascii_digit).collect())
}

/// 格式化为 000.000.000-00，位数不对时原样返回
pub fn format_cpf(digits: &str) -> String {
    if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return digits.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &digits[0..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..11]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_valid_cpf() {
        assert!(validate_cpf("529.982.247-25"));
        assert!(validate_cpf("52998224725"));
        assert!(validate_cpf("111.444.777-35"));
    }

    #[test]
    fn test_repeated_digits_rejected() {
        for d in 0..=9 {
            let cpf = d.to_string().repeat(11);
            assert!(!validate_cpf(&cpf), "{cpf} should be invalid");
        }
        assert!(!validate_cpf("111.111.111-11"));
    }

    #[test]
    fn test_flipped_check_digits_rejected() {
        assert!(!validate_cpf("529.982.247-35"));
        assert!(!validate_cpf("529.982.247-24"));
        assert!(!validate_cpf("111.444.777-53"));
    }

    #[test]
    fn test_wrong_length_and_garbage() {
        assert!(!validate_cpf(""));
        assert!(!validate_cpf("5299822472"));
        assert!(!validate_cpf("529982247250"));
        assert!(!validate_cpf("abc.def.ghi-jk"));
    }

    #[test]
    fn test_normalize_and_format() {
        assert_eq!(
            normalize_cpf(" 529.982.247-25 ").as_deref(),
            Some("52998224725")
        );
        assert_eq!(normalize_cpf("111.111.111-11"), None);
        assert_eq!(format_cpf("52998224725"), "529.982.247-25");
        assert_eq!(format_cpf("123"), "123");
    }
}
