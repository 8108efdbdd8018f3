use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 段位（腰带颜色），按等级由低到高排列
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/belt.ts")]
pub enum Belt {
    Branca,
    Cinza,
    Amarela,
    Laranja,
    Verde,
    Azul,
    Roxa,
    Marrom,
    Preta,
}

impl Belt {
    pub const ALL: [Belt; 9] = [
        Belt::Branca,
        Belt::Cinza,
        Belt::Amarela,
        Belt::Laranja,
        Belt::Verde,
        Belt::Azul,
        Belt::Roxa,
        Belt::Marrom,
        Belt::Preta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Belt::Branca => "branca",
            Belt::Cinza => "cinza",
            Belt::Amarela => "amarela",
            Belt::Laranja => "laranja",
            Belt::Verde => "verde",
            Belt::Azul => "azul",
            Belt::Roxa => "roxa",
            Belt::Marrom => "marrom",
            Belt::Preta => "preta",
        }
    }

    /// 证书上显示的名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Belt::Branca => "Faixa Branca",
            Belt::Cinza => "Faixa Cinza",
            Belt::Amarela => "Faixa Amarela",
            Belt::Laranja => "Faixa Laranja",
            Belt::Verde => "Faixa Verde",
            Belt::Azul => "Faixa Azul",
            Belt::Roxa => "Faixa Roxa",
            Belt::Marrom => "Faixa Marrom",
            Belt::Preta => "Faixa Preta",
        }
    }
}

impl<'de> Deserialize<'de> for Belt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的段位: '{s}'. 支持的段位: \
                 branca, cinza, amarela, laranja, verde, azul, roxa, marrom, preta"
            ))
        })
    }
}

impl std::fmt::Display for Belt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Belt {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Belt::ALL
            .iter()
            .find(|belt| belt.as_str() == lowered)
            .copied()
            .ok_or_else(|| format!("Invalid belt: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Azul".parse::<Belt>().unwrap(), Belt::Azul);
        assert_eq!(" preta ".parse::<Belt>().unwrap(), Belt::Preta);
        assert!("rosa".parse::<Belt>().is_err());
    }

    #[test]
    fn test_ordering_follows_rank() {
        assert!(Belt::Branca < Belt::Amarela);
        assert!(Belt::Marrom < Belt::Preta);
    }

    #[test]
    fn test_serde_uses_lowercase_code() {
        assert_eq!(serde_json::to_string(&Belt::Roxa).unwrap(), "\"roxa\"");
        let belt: Belt = serde_json::from_str("\"verde\"").unwrap();
        assert_eq!(belt, Belt::Verde);
    }
}
