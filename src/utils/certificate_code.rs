//! 证书编号：PREFIX-YEAR-NNNN
//!
//! 序号取证书行的自增 ID，至少补零到 4 位，超过 9999 时按实际位数输出。

pub fn format_certificate_code(prefix: &str, year: i32, number: i64) -> String {
    format!("{prefix}-{year}-{number:04}")
}

/// 从编号中解析出 (前缀, 年份, 序号)
pub fn parse_certificate_code(code: &str) -> Option<(&str, i32, i64)> {
    let (rest, number) = code.rsplit_once('-')?;
    let (prefix, year) = rest.rsplit_once('-')?;
    if prefix.is_empty() || number.len() < 4 || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((prefix, year.parse().ok()?, number.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding() {
        assert_eq!(format_certificate_code("CERT", 2025, 1), "CERT-2025-0001");
        assert_eq!(format_certificate_code("CERT", 2025, 42), "CERT-2025-0042");
        assert_eq!(format_certificate_code("DOJO", 2024, 12345), "DOJO-2024-12345");
    }

    #[test]
    fn test_codes_sort_with_insertion_order() {
        let first = format_certificate_code("CERT", 2025, 9);
        let second = format_certificate_code("CERT", 2025, 10);
        let (_, _, a) = parse_certificate_code(&first).unwrap();
        let (_, _, b) = parse_certificate_code(&second).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            parse_certificate_code("CERT-2025-0007"),
            Some(("CERT", 2025, 7))
        );
        assert_eq!(
            parse_certificate_code("MY-DOJO-2025-0007"),
            Some(("MY-DOJO", 2025, 7))
        );
        assert_eq!(parse_certificate_code("CERT-2025-7"), None);
        assert_eq!(parse_certificate_code("CERT-20x5-0007"), None);
        assert_eq!(parse_certificate_code("garbage"), None);
    }
}
