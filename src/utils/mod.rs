pub mod cep;
pub mod certificate_code;
pub mod cpf;
pub mod extractor;
pub mod file_magic;
pub mod google;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAttemptIdI64, SafeCep, SafeCertificateCode, SafeFileToken, SafeIDI64, SafeLessonIdI64,
    SafeModuleIdI64,
};
pub use file_magic::validate_magic_bytes;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::{contains_pattern, escape_like_pattern};
