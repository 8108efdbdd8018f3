use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Belt;

// 证书（certificados）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct Certificate {
    pub id: i64,
    pub code: String,
    pub user_id: i64,
    pub exam_config_id: i64,
    pub exam_result_id: Option<i64>,
    pub belt: Belt,
    pub issued_by: Option<i64>,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

/// 渲染 PDF 所需的信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateDocument {
    pub code: String,
    pub student_name: String,
    pub belt: Belt,
    pub issued_on: chrono::NaiveDate,
    pub verify_url: String,
}

/// 存储层新建证书参数
#[derive(Debug, Clone)]
pub struct NewCertificate {
    pub user_id: i64,
    pub exam_config_id: i64,
    pub exam_result_id: Option<i64>,
    pub belt: Belt,
    pub issued_by: Option<i64>,
    pub code_prefix: String,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}
