//! CEP（巴西邮政编码）规范化与地址查询
//!
//! 查询只发一次 GET，超时由配置决定，不重试也不缓存。

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::AddressConfig;
use crate::errors::{DojoSystemError, Result};
use crate::models::address::Address;

/// 去掉非数字字符，必须正好 8 位
pub fn normalize_cep(input: &str) -> Option<String> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    (digits.len() == 8).then_some(digits)
}

/// 格式化为 00000-000
pub fn format_cep(digits: &str) -> String {
    if digits.len() == 8 {
        format!("{}-{}", &digits[..5], &digits[5..])
    } else {
        digits.to_string()
    }
}

/// 查询失败的具体原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CepError {
    InvalidFormat,
    NotFound,
    Upstream(u16),
    Transport(String),
    Decode(String),
}

impl std::fmt::Display for CepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CepError::InvalidFormat => write!(f, "CEP must have 8 digits"),
            CepError::NotFound => write!(f, "CEP not found"),
            CepError::Upstream(status) => write!(f, "address service returned HTTP {status}"),
            CepError::Transport(e) => write!(f, "address service unreachable: {e}"),
            CepError::Decode(e) => write!(f, "malformed address payload: {e}"),
        }
    }
}

impl std::error::Error for CepError {}

/// 地址服务的响应体，未找到时只有 erro 字段
#[derive(Debug, Deserialize)]
struct AddressPayload {
    #[serde(default)]
    erro: Option<serde_json::Value>,
    #[serde(default)]
    cep: Option<String>,
    #[serde(default)]
    logradouro: Option<String>,
    #[serde(default)]
    bairro: Option<String>,
    #[serde(default)]
    localidade: Option<String>,
    #[serde(default)]
    uf: Option<String>,
}

/// erro 为 true 或 "true" 都表示未找到
fn is_not_found_marker(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::String(s) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn map_payload(payload: AddressPayload, digits: &str) -> std::result::Result<Address, CepError> {
    if payload.erro.as_ref().is_some_and(is_not_found_marker) {
        return Err(CepError::NotFound);
    }

    let cep = payload
        .cep
        .as_deref()
        .and_then(normalize_cep)
        .unwrap_or_else(|| digits.to_string());

    Ok(Address {
        street: payload.logradouro.unwrap_or_default(),
        neighborhood: payload.bairro.unwrap_or_default(),
        city: payload.localidade.unwrap_or_default(),
        state: payload.uf.unwrap_or_default(),
        cep: format_cep(&cep),
    })
}

#[derive(Clone)]
pub struct CepClient {
    http: reqwest::Client,
    base_url: String,
}

impl CepClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DojoSystemError::external_service(format!("创建 HTTP 客户端失败: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AddressConfig) -> Result<Self> {
        Self::new(&config.cep_base_url, Duration::from_millis(config.timeout_ms))
    }

    /// 查询地址，区分失败原因
    pub async fn lookup(&self, cep: &str) -> std::result::Result<Address, CepError> {
        let digits = normalize_cep(cep).ok_or(CepError::InvalidFormat)?;
        let url = format!("{}/ws/{}/json/", self.base_url, digits);
        debug!("Looking up CEP {} at {}", digits, url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| CepError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CepError::Upstream(status.as_u16()));
        }

        let payload = response
            .json::<AddressPayload>()
            .await
            .map_err(|e| CepError::Decode(e.to_string()))?;

        map_payload(payload, &digits)
    }

    /// 查询地址，任何失败都记录日志后返回 None
    pub async fn find(&self, cep: &str) -> Option<Address> {
        match self.lookup(cep).await {
            Ok(address) => Some(address),
            Err(CepError::InvalidFormat | CepError::NotFound) => None,
            Err(e) => {
                warn!("CEP lookup for {} failed: {}", cep, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize_cep("01001-000").as_deref(), Some("01001000"));
        assert_eq!(normalize_cep(" 01.001-000 ").as_deref(), Some("01001000"));
        assert_eq!(normalize_cep("0100100"), None);
        assert_eq!(normalize_cep("010010000"), None);
        assert_eq!(format_cep("01001000"), "01001-000");
    }

    #[test]
    fn test_map_success_payload() {
        let payload: AddressPayload = serde_json::from_str(
            r#"{"cep":"01001-000","logradouro":"Praça da Sé","complemento":"lado ímpar",
                "bairro":"Sé","localidade":"São Paulo","uf":"SP"}"#,
        )
        .unwrap();
        let address = map_payload(payload, "01001000").unwrap();
        assert_eq!(address.street, "Praça da Sé");
        assert_eq!(address.neighborhood, "Sé");
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.state, "SP");
        assert_eq!(address.cep, "01001-000");
    }

    #[test]
    fn test_map_not_found_marker() {
        for body in [r#"{"erro":true}"#, r#"{"erro":"true"}"#] {
            let payload: AddressPayload = serde_json::from_str(body).unwrap();
            assert_eq!(map_payload(payload, "99999999"), Err(CepError::NotFound));
        }
    }

    #[tokio::test]
    async fn test_invalid_format_short_circuits() {
        // 地址不可达也无妨：格式错误在发请求前返回
        let client = CepClient::new("http://127.0.0.1:9", Duration::from_millis(50)).unwrap();
        assert_eq!(client.lookup("123").await, Err(CepError::InvalidFormat));
        assert!(client.find("abc").await.is_none());
    }

    #[tokio::test]
    async fn test_transport_failure_collapses_to_none() {
        let client = CepClient::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();
        assert!(matches!(
            client.lookup("01001-000").await,
            Err(CepError::Transport(_))
        ));
        assert!(client.find("01001-000").await.is_none());
    }
}
