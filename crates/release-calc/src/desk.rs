//! 放行櫃台（單一作業階段）

use chrono::NaiveDate;
use release_core::{
    AllowanceConfig, InventoryStore, ReleaseOutcome, ReleaseRequest, StockTable,
};

use crate::coordinator::ReleaseCoordinator;
use crate::eligibility::{EligibilityEngine, EligibilityVerdict};

/// 放行櫃台
///
/// 持有一個作業階段的庫存與寬限配置，前端每次操作都明確呼叫對應方法。
#[derive(Debug, Clone)]
pub struct ReleaseDesk {
    store: InventoryStore,
    config: AllowanceConfig,
}

impl ReleaseDesk {
    /// 創建新的放行櫃台
    pub fn new(store: InventoryStore, config: AllowanceConfig) -> release_core::Result<Self> {
        config.validate()?;
        Ok(Self { store, config })
    }

    /// 以預設場站庫存創建
    pub fn with_default_depots(config: AllowanceConfig) -> release_core::Result<Self> {
        Self::new(InventoryStore::with_default_depots(), config)
    }

    /// 目前庫存快照
    pub fn stock_snapshot(&self) -> StockTable {
        self.store.snapshot()
    }

    /// 還原庫存
    pub fn reset_stock(&mut self) {
        tracing::info!("還原場站庫存");
        self.store.reset();
    }

    /// 目前配置
    pub fn config(&self) -> &AllowanceConfig {
        &self.config
    }

    /// 更換配置
    pub fn set_config(&mut self, config: AllowanceConfig) -> release_core::Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// 預覽提櫃窗口狀態（不動庫存）
    pub fn preview(
        &self,
        request: &ReleaseRequest,
        today: NaiveDate,
    ) -> release_core::Result<EligibilityVerdict> {
        EligibilityEngine::evaluate_request(request, &self.config, today)
    }

    /// 執行放行
    pub fn attempt_release(
        &mut self,
        request: &ReleaseRequest,
        today: NaiveDate,
    ) -> release_core::Result<ReleaseOutcome> {
        ReleaseCoordinator::attempt_release(request, &self.config, &mut self.store, today)
    }

    /// 以系統日期執行放行
    pub fn attempt_release_today(
        &mut self,
        request: &ReleaseRequest,
    ) -> release_core::Result<ReleaseOutcome> {
        ReleaseCoordinator::attempt_release_today(request, &self.config, &mut self.store)
    }
}
