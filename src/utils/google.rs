//! Google ID token 校验（tokeninfo 接口）

use std::time::Duration;

use serde::Deserialize;
use tracing::info;

use crate::config::GoogleConfig;
use crate::errors::{DojoSystemError, Result};

/// 校验通过的 Google 身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleIdentity {
    pub subject: String,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: Option<String>,
    sub: Option<String>,
    email: Option<String>,
    /// tokeninfo 以字符串返回布尔值
    email_verified: Option<serde_json::Value>,
    name: Option<String>,
}

fn is_true(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::String(s) => s == "true",
        _ => false,
    }
}

/// 校验受众与邮箱验证状态
fn check_token_info(info: TokenInfo, client_id: &str) -> Result<GoogleIdentity> {
    if info.aud.as_deref() != Some(client_id) {
        return Err(DojoSystemError::authentication("ID token audience mismatch"));
    }
    if !info.email_verified.as_ref().is_some_and(is_true) {
        return Err(DojoSystemError::authentication("Google email is not verified"));
    }

    let subject = info
        .sub
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DojoSystemError::authentication("ID token has no subject"))?;
    let email = info
        .email
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| DojoSystemError::authentication("ID token has no email"))?;

    Ok(GoogleIdentity {
        subject,
        email,
        name: info.name,
    })
}

#[derive(Clone)]
pub struct GoogleVerifier {
    http: reqwest::Client,
    tokeninfo_url: String,
    client_id: String,
}

impl GoogleVerifier {
    pub fn from_config(config: &GoogleConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| DojoSystemError::external_service(format!("创建 HTTP 客户端失败: {e}")))?;

        Ok(Self {
            http,
            tokeninfo_url: config.tokeninfo_url.clone(),
            client_id: config.client_id.clone(),
        })
    }

    pub async fn verify(&self, id_token: &str) -> Result<GoogleIdentity> {
        let response = self
            .http
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .await?;

        if !response.status().is_success() {
            info!("Google tokeninfo rejected token: HTTP {}", response.status());
            return Err(DojoSystemError::authentication("Invalid Google ID token"));
        }

        let token_info = response.json::<TokenInfo>().await?;
        check_token_info(token_info, &self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_info(aud: &str, verified: serde_json::Value) -> TokenInfo {
        TokenInfo {
            aud: Some(aud.to_string()),
            sub: Some("1234567890".to_string()),
            email: Some("Joana@Gmail.com".to_string()),
            email_verified: Some(verified),
            name: Some("Joana Souza".to_string()),
        }
    }

    #[test]
    fn test_accepts_matching_audience() {
        let identity = check_token_info(
            token_info("client-1", serde_json::json!("true")),
            "client-1",
        )
        .unwrap();
        assert_eq!(identity.email, "joana@gmail.com");
        assert_eq!(identity.subject, "1234567890");
    }

    #[test]
    fn test_rejects_wrong_audience_or_unverified() {
        assert!(
            check_token_info(token_info("other", serde_json::json!(true)), "client-1").is_err()
        );
        assert!(
            check_token_info(
                token_info("client-1", serde_json::json!("false")),
                "client-1"
            )
            .is_err()
        );
    }
}
