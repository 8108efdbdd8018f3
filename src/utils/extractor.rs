//! 路径参数提取器
//!
//! 在进入处理函数之前校验路径参数，非法值直接返回 400，
//! 统一使用 `ApiResponse` 格式。

use actix_web::{
    FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError,
};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(message: String) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

fn parse_positive_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    match raw.parse::<i64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(bad_request(format!("无效的路径参数 {name}: {raw}"))),
    }
}

fn parse_token(
    req: &HttpRequest,
    name: &str,
    max_len: usize,
    allowed: fn(char) -> bool,
) -> Result<String, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    if raw.is_empty() || raw.len() > max_len || !raw.chars().all(allowed) {
        return Err(bad_request(format!("无效的路径参数 {name}")));
    }
    Ok(raw.to_string())
}

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_positive_i64(req, $param).map($name))
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeModuleIdI64, "module_id");
define_safe_i64_extractor!(SafeLessonIdI64, "lesson_id");
define_safe_i64_extractor!(SafeAttemptIdI64, "attempt_id");

/// 文件下载 token：字母数字，最长 64
#[derive(Debug, Clone)]
pub struct SafeFileToken(pub String);

impl FromRequest for SafeFileToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_token(req, "file_token", 64, |c| c.is_ascii_alphanumeric()).map(SafeFileToken))
    }
}

/// 证书编号，形如 CERT-2025-0001，统一转为大写
#[derive(Debug, Clone)]
pub struct SafeCertificateCode(pub String);

impl FromRequest for SafeCertificateCode {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            parse_token(req, "code", 64, |c| c.is_ascii_alphanumeric() || c == '-')
                .map(|code| SafeCertificateCode(code.to_uppercase())),
        )
    }
}

/// CEP 路径参数，接受 8 位数字或 00000-000
#[derive(Debug, Clone)]
pub struct SafeCep(pub String);

impl FromRequest for SafeCep {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_token(req, "cep", 9, |c| c.is_ascii_digit() || c == '-').map(SafeCep))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test as actix_test, web};

    async fn echo_id(id: SafeIDI64) -> HttpResponse {
        HttpResponse::Ok().body(id.0.to_string())
    }

    async fn echo_code(code: SafeCertificateCode) -> HttpResponse {
        HttpResponse::Ok().body(code.0)
    }

    #[actix_web::test]
    async fn test_id_extractor() {
        let app = actix_test::init_service(
            App::new().route("/items/{id}", web::get().to(echo_id)),
        )
        .await;

        let req = actix_test::TestRequest::get().uri("/items/42").to_request();
        let ok = actix_test::call_service(&app, req).await;
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(actix_test::read_body(ok).await, "42");

        for bad in ["/items/abc", "/items/0", "/items/-3"] {
            let req = actix_test::TestRequest::get().uri(bad).to_request();
            let res = actix_test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{bad}");
        }
    }

    #[actix_web::test]
    async fn test_certificate_code_extractor() {
        let app = actix_test::init_service(
            App::new().route("/verify/{code}", web::get().to(echo_code)),
        )
        .await;

        let ok = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/verify/cert-2025-0001").to_request(),
        )
        .await;
        assert_eq!(actix_test::read_body(ok).await, "CERT-2025-0001");

        let bad = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/verify/CERT%3B2025").to_request(),
        )
        .await;
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
    }
}
