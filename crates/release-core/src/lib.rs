//! # Release Core
//!
//! 空櫃放行核心資料模型與類型定義

pub mod config;
pub mod container;
pub mod inventory;
pub mod outcome;
pub mod request;

// Re-export 主要類型
pub use config::{AllowanceConfig, ReeferDateRule, ShortageWindow, WindowPolicy};
pub use container::{ContainerType, DepotId};
pub use inventory::{InventoryStore, StockTable};
pub use outcome::{Denial, DenialReason, ReleaseOutcome, ReleaseRecord};
pub use request::ReleaseRequest;

/// 放行錯誤類型
///
/// 只涵蓋程式契約違反與無效輸入；使用者層級的拒絕（庫存不足、
/// 不在提櫃窗口內、日期不符）一律以 [`ReleaseOutcome::Denied`] 回傳。
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("無效的庫存操作: {0}")]
    InvalidOperation(String),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("無效的放行申請: {0}")]
    InvalidRequest(String),

    #[error("冷凍櫃 {0} 必須指定提櫃日期")]
    MissingRequiredDate(ContainerType),

    #[error("指定提櫃日期 {date} 超出允許範圍 [{earliest}, {latest}]")]
    RequiredDateOutOfRange {
        date: chrono::NaiveDate,
        earliest: chrono::NaiveDate,
        latest: chrono::NaiveDate,
    },

    #[error("無效的日期: {0}")]
    InvalidDate(String),

    #[error("未知的櫃型: {0}")]
    UnknownContainerType(String),

    #[error("序列化錯誤: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
