use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

// 手动颁发证书
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct IssueCertificateRequest {
    pub user_id: i64,
    pub exam_config_id: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub user_id: Option<i64>,
}

/// 旧版查询接口参数 `?api=certificado&id=<int>`
#[derive(Debug, Default, Deserialize)]
pub struct LegacyApiQuery {
    pub api: Option<String>,
    pub id: Option<String>,
}
