//! 放行申請模型

use chrono::NaiveDate;
use serde::Serialize;

use crate::{ContainerType, DepotId, ReleaseError, Result};

/// 放行申請
///
/// 每次提交建立一筆，建立後不可修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseRequest {
    /// 場站
    depot: DepotId,

    /// 櫃型
    container_type: ContainerType,

    /// 放行數量
    quantity: u32,

    /// 裝船日（ETD）
    loading_date: NaiveDate,

    /// 指定提櫃日期（僅冷凍櫃）
    required_date: Option<NaiveDate>,
}

impl ReleaseRequest {
    /// 創建新的放行申請
    pub fn new(
        depot: impl Into<DepotId>,
        container_type: ContainerType,
        quantity: u32,
        loading_date: NaiveDate,
    ) -> Result<Self> {
        if quantity == 0 {
            return Err(ReleaseError::InvalidRequest("放行數量必須至少為 1".to_string()));
        }

        Ok(Self {
            depot: depot.into(),
            container_type,
            quantity,
            loading_date,
            required_date: None,
        })
    }

    /// 建構器模式：設置指定提櫃日期
    ///
    /// 非冷凍櫃的申請會忽略此日期。
    pub fn with_required_date(mut self, date: NaiveDate) -> Self {
        self.required_date = Some(date);
        self
    }

    pub fn depot(&self) -> &DepotId {
        &self.depot
    }

    pub fn container_type(&self) -> ContainerType {
        self.container_type
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn loading_date(&self) -> NaiveDate {
        self.loading_date
    }

    /// 指定提櫃日期（非冷凍櫃一律為 None）
    pub fn required_date(&self) -> Option<NaiveDate> {
        if self.container_type.is_reefer() {
            self.required_date
        } else {
            None
        }
    }
}
