//! 櫃型與場站模型

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ReleaseError;

/// 櫃型
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ContainerType {
    /// 20 呎標準櫃
    #[serde(rename = "20ST")]
    Standard20,
    /// 40 呎標準櫃
    #[serde(rename = "40ST")]
    Standard40,
    /// 40 呎冷凍櫃
    #[serde(rename = "40RH")]
    Reefer40,
    /// 40 呎高櫃
    #[serde(rename = "40HC")]
    HighCube40,
}

impl ContainerType {
    /// 所有櫃型（依顯示順序）
    pub const ALL: [ContainerType; 4] = [
        ContainerType::Standard20,
        ContainerType::Standard40,
        ContainerType::Reefer40,
        ContainerType::HighCube40,
    ];

    /// 櫃型代碼
    pub fn code(&self) -> &'static str {
        match self {
            ContainerType::Standard20 => "20ST",
            ContainerType::Standard40 => "40ST",
            ContainerType::Reefer40 => "40RH",
            ContainerType::HighCube40 => "40HC",
        }
    }

    /// 是否為冷凍櫃（適用指定日期規則）
    pub fn is_reefer(&self) -> bool {
        matches!(self, ContainerType::Reefer40)
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for ContainerType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        ContainerType::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ReleaseError::UnknownContainerType(code.to_string()))
    }
}

/// 場站ID
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepotId(String);

impl DepotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DepotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for DepotId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DepotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
