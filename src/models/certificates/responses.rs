use serde::Serialize;
use ts_rs::TS;

use super::entities::Certificate;
use crate::models::{Belt, common::PaginationInfo};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateDetail {
    pub certificate: Certificate,
    pub student_name: String,
    pub verify_url: String,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateListResponse {
    pub items: Vec<Certificate>,
    pub pagination: PaginationInfo,
}

/// 公开验证结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateVerification {
    pub valid: bool,
    pub code: String,
    pub student_name: String,
    pub belt: Belt,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

/// 旧版查询接口的证书记录，字段名保持原样
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LegacyCertificateRecord {
    pub id: i64,
    pub codigo: String,
    pub nome: String,
    pub faixa: String,
    pub data_emissao: String,
}

/// 旧版查询接口的错误体
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LegacyError {
    pub error: String,
}

impl LegacyError {
    pub const INVALID_ID: &'static str = "ID inválido";
    pub const NOT_FOUND: &'static str = "Certificado não encontrado";
    pub const UNKNOWN_API: &'static str = "API não encontrada";
    pub const INTERNAL: &'static str = "Erro interno";

    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
