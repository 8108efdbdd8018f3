use serde::Deserialize;
use ts_rs::TS;

use super::entities::StudentAddress;
use crate::models::common::PaginationQuery;

/// 地址输入，CEP 可带标点
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct AddressInput {
    pub cep: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

impl AddressInput {
    /// 校验并规范化 CEP，其余字段去除首尾空白
    pub fn into_address(self) -> Result<StudentAddress, String> {
        let cep = match self.cep.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                crate::utils::cep::normalize_cep(raw)
                    .ok_or_else(|| format!("CEP inválido: {raw}"))?,
            ),
        };
        let clean = |v: Option<String>| {
            v.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Ok(StudentAddress {
            cep,
            street: clean(self.street),
            number: clean(self.number),
            neighborhood: clean(self.neighborhood),
            city: clean(self.city),
            state: clean(self.state).map(|s| s.to_uppercase()),
        })
    }
}

// 教师/管理员登记学员
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub password: String,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub address: Option<AddressInput>,
    pub team_id: Option<i64>,
}

// 更新学员档案
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct UpdateStudentRequest {
    pub team_id: Option<i64>,
    #[serde(default)]
    pub clear_team: bool,
    pub phone: Option<String>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub address: Option<AddressInput>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub team_id: Option<i64>,
    pub search: Option<String>,
}

/// 存储层新建学员档案参数
#[derive(Debug, Clone, Default)]
pub struct NewStudentProfile {
    pub team_id: Option<i64>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub address: StudentAddress,
}

/// 存储层学员档案更新参数
#[derive(Debug, Clone, Default)]
pub struct StudentProfileUpdate {
    /// Some(None) 表示移出队伍
    pub team_id: Option<Option<i64>>,
    pub birth_date: Option<chrono::NaiveDate>,
    pub address: Option<StudentAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_input_normalizes_cep() {
        let input = AddressInput {
            cep: Some("01001-000".to_string()),
            street: Some("  Praça da Sé ".to_string()),
            state: Some("sp".to_string()),
            ..Default::default()
        };
        let address = input.into_address().unwrap();
        assert_eq!(address.cep.as_deref(), Some("01001000"));
        assert_eq!(address.street.as_deref(), Some("Praça da Sé"));
        assert_eq!(address.state.as_deref(), Some("SP"));
        assert!(address.city.is_none());
    }

    #[test]
    fn test_address_input_rejects_bad_cep() {
        let input = AddressInput {
            cep: Some("1234".to_string()),
            ..Default::default()
        };
        assert!(input.into_address().is_err());
    }
}
