use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// CEP 查询结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/address.ts")]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    /// 00000-000
    pub cep: String,
}
