//! 放行結果模型

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{ContainerType, DepotId};

/// 拒絕原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenialReason {
    /// 今天不在提櫃窗口內
    OutsidePickupWindow,
    /// 今天不是冷凍櫃指定提櫃日
    RequiredDateMismatch,
    /// 庫存不足
    InsufficientStock,
}

impl DenialReason {
    /// 供前端選擇訊息的原因標籤
    pub fn tag(&self) -> &'static str {
        match self {
            DenialReason::OutsidePickupWindow => "outside pickup window",
            DenialReason::RequiredDateMismatch => "date must equal required date",
            DenialReason::InsufficientStock => "insufficient stock",
        }
    }
}

/// 已核准的放行紀錄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// 放行ID
    pub id: Uuid,

    /// 場站
    pub depot: DepotId,

    /// 櫃型
    pub container_type: ContainerType,

    /// 放行數量
    pub quantity: u32,

    /// 計算出的提櫃日（最早提櫃日或冷凍櫃指定日）
    pub pickup_date: NaiveDate,

    /// 放行日期
    pub released_on: NaiveDate,
}

impl ReleaseRecord {
    /// 創建新的放行紀錄
    pub fn new(
        depot: DepotId,
        container_type: ContainerType,
        quantity: u32,
        pickup_date: NaiveDate,
        released_on: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            depot,
            container_type,
            quantity,
            pickup_date,
            released_on,
        }
    }
}

/// 拒絕放行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Denial {
    /// 拒絕原因
    pub reason: DenialReason,

    /// 場站
    pub depot: DepotId,

    /// 櫃型
    pub container_type: ContainerType,

    /// 計算出的提櫃日
    pub computed_date: NaiveDate,
}

impl Denial {
    pub fn new(
        reason: DenialReason,
        depot: DepotId,
        container_type: ContainerType,
        computed_date: NaiveDate,
    ) -> Self {
        Self {
            reason,
            depot,
            container_type,
            computed_date,
        }
    }
}

/// 放行結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseOutcome {
    Approved(ReleaseRecord),
    Denied(Denial),
}

impl ReleaseOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, ReleaseOutcome::Approved(_))
    }

    /// 拒絕原因（核准時為 None）
    pub fn denial_reason(&self) -> Option<DenialReason> {
        match self {
            ReleaseOutcome::Approved(_) => None,
            ReleaseOutcome::Denied(denial) => Some(denial.reason),
        }
    }

    /// 計算出的提櫃日
    pub fn computed_date(&self) -> NaiveDate {
        match self {
            ReleaseOutcome::Approved(record) => record.pickup_date,
            ReleaseOutcome::Denied(denial) => denial.computed_date,
        }
    }

    /// 顯示給使用者的訊息
    pub fn message(&self) -> String {
        match self {
            ReleaseOutcome::Approved(record) if record.container_type.is_reefer() => format!(
                "{} {} containers have been successfully released at {} for pickup on {}!",
                record.quantity,
                record.container_type,
                record.depot,
                record.pickup_date.format("%Y-%m-%d")
            ),
            ReleaseOutcome::Approved(record) => format!(
                "{} {} containers have been successfully released at {} \
                 with earliest pickup date on {}!",
                record.quantity,
                record.container_type,
                record.depot,
                record.pickup_date.format("%Y-%m-%d")
            ),
            ReleaseOutcome::Denied(denial) => match denial.reason {
                DenialReason::OutsidePickupWindow => "Unable to release container. \
                    The current date is not within the pickup window."
                    .to_string(),
                DenialReason::RequiredDateMismatch => format!(
                    "Unable to release container. {} containers can only be released on {}.",
                    denial.container_type,
                    denial.computed_date.format("%Y-%m-%d")
                ),
                DenialReason::InsufficientStock => format!(
                    "Unable to release container. Not enough {} containers available at {}.",
                    denial.container_type, denial.depot
                ),
            },
        }
    }
}
