//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_dojo_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum DojoSystemError {
            $($variant(String),)*
        }

        impl DojoSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(DojoSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(DojoSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(DojoSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl DojoSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        DojoSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_dojo_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Conflict Error"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    ExternalService("E014", "External Service Error"),
    ArtifactGeneration("E015", "Artifact Generation Error"),
    AlreadyCertified("E016", "Already Certified Error"),
}

impl DojoSystemError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DojoSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DojoSystemError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for DojoSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        DojoSystemError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for DojoSystemError {
    fn from(err: std::io::Error) -> Self {
        DojoSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for DojoSystemError {
    fn from(err: serde_json::Error) -> Self {
        DojoSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for DojoSystemError {
    fn from(err: chrono::ParseError) -> Self {
        DojoSystemError::DateParse(err.to_string())
    }
}

impl From<reqwest::Error> for DojoSystemError {
    fn from(err: reqwest::Error) -> Self {
        DojoSystemError::ExternalService(err.to_string())
    }
}

impl From<qrcode::types::QrError> for DojoSystemError {
    fn from(err: qrcode::types::QrError) -> Self {
        DojoSystemError::ArtifactGeneration(format!("QR code: {err}"))
    }
}

impl From<printpdf::Error> for DojoSystemError {
    fn from(err: printpdf::Error) -> Self {
        DojoSystemError::ArtifactGeneration(format!("PDF: {err}"))
    }
}

impl From<image::ImageError> for DojoSystemError {
    fn from(err: image::ImageError) -> Self {
        DojoSystemError::ArtifactGeneration(format!("image: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, DojoSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DojoSystemError::cache_connection("test").code(), "E001");
        assert_eq!(DojoSystemError::database_config("test").code(), "E003");
        assert_eq!(DojoSystemError::validation("test").code(), "E007");
        assert_eq!(DojoSystemError::conflict("test").code(), "E010");
        assert_eq!(DojoSystemError::authentication("test").code(), "E012");
        assert_eq!(DojoSystemError::external_service("test").code(), "E014");
        assert_eq!(DojoSystemError::already_certified("test").code(), "E016");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            DojoSystemError::artifact_generation("test").error_type(),
            "Artifact Generation Error"
        );
        assert_eq!(
            DojoSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = DojoSystemError::not_found("Certificado não encontrado");
        assert_eq!(err.message(), "Certificado não encontrado");
    }

    #[test]
    fn test_format_simple() {
        let err = DojoSystemError::validation("CPF inválido");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("CPF inválido"));
    }

    #[test]
    fn test_db_error_maps_to_database_operation() {
        let err: DojoSystemError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E005");
    }
}
