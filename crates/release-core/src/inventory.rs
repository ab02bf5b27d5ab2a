//! 場站空櫃庫存模型

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ContainerType, DepotId, ReleaseError, Result};

/// 庫存表（場站 → 櫃型 → 數量）
///
/// 使用有序映射，確保顯示順序穩定。數量為無號整數，不可能為負。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockTable {
    depots: BTreeMap<DepotId, BTreeMap<ContainerType, u32>>,
}

impl StockTable {
    /// 創建空的庫存表
    pub fn new() -> Self {
        Self::default()
    }

    /// 預設場站庫存快照
    pub fn default_depots() -> Self {
        Self::new()
            .with_depot("Depot 1", [10, 5, 7, 8])
            .with_depot("Depot 2", [6, 8, 2, 9])
            .with_depot("Depot 3", [7, 6, 5, 4])
    }

    /// 建構器模式：設置單一櫃型數量
    pub fn with_stock(
        mut self,
        depot: impl Into<DepotId>,
        container_type: ContainerType,
        count: u32,
    ) -> Self {
        self.set(depot.into(), container_type, count);
        self
    }

    /// 建構器模式：依 [`ContainerType::ALL`] 順序設置整個場站
    pub fn with_depot(mut self, depot: impl Into<DepotId>, counts: [u32; 4]) -> Self {
        let depot = depot.into();
        for (container_type, count) in ContainerType::ALL.into_iter().zip(counts) {
            self.set(depot.clone(), container_type, count);
        }
        self
    }

    /// 從 JSON 載入
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 輸出為 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 設置數量
    pub fn set(&mut self, depot: DepotId, container_type: ContainerType, count: u32) {
        self.depots.entry(depot).or_default().insert(container_type, count);
    }

    /// 查詢數量（場站或櫃型不存在時為 None）
    pub fn get(&self, depot: &DepotId, container_type: ContainerType) -> Option<u32> {
        self.depots.get(depot)?.get(&container_type).copied()
    }

    fn get_mut(&mut self, depot: &DepotId, container_type: ContainerType) -> Option<&mut u32> {
        self.depots.get_mut(depot)?.get_mut(&container_type)
    }

    /// 所有場站
    pub fn depots(&self) -> impl Iterator<Item = &DepotId> {
        self.depots.keys()
    }

    /// 單一場站的櫃型庫存
    pub fn depot(&self, depot: &DepotId) -> Option<&BTreeMap<ContainerType, u32>> {
        self.depots.get(depot)
    }

    /// 場站總庫存
    pub fn depot_total(&self, depot: &DepotId) -> u32 {
        self.depots
            .get(depot)
            .map(|counts| counts.values().sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.depots.is_empty()
    }
}

/// 場站庫存
///
/// 持有建構時的初始快照，`reset` 會以深拷貝還原，
/// 之後的扣減不會影響快照。
#[derive(Debug, Clone)]
pub struct InventoryStore {
    /// 初始快照（不可變）
    initial: StockTable,

    /// 目前庫存
    current: StockTable,
}

impl InventoryStore {
    /// 以初始快照創建庫存
    pub fn new(initial: StockTable) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// 以預設場站快照創建庫存
    pub fn with_default_depots() -> Self {
        Self::new(StockTable::default_depots())
    }

    /// 檢查庫存是否足夠
    ///
    /// 場站或櫃型不存在時回傳 false，不視為錯誤。
    pub fn available(&self, depot: &DepotId, container_type: ContainerType, quantity: u32) -> bool {
        self.current
            .get(depot, container_type)
            .is_some_and(|count| count >= quantity)
    }

    /// 扣減庫存
    ///
    /// 呼叫前必須先以 [`InventoryStore::available`] 確認；此處不會夾到零，
    /// 違反前置條件時回傳 [`ReleaseError::InvalidOperation`]。
    pub fn decrement(
        &mut self,
        depot: &DepotId,
        container_type: ContainerType,
        quantity: u32,
    ) -> Result<()> {
        let Some(count) = self.current.get_mut(depot, container_type) else {
            tracing::error!(%depot, %container_type, "扣減不存在的庫存項目");
            return Err(ReleaseError::InvalidOperation(format!(
                "場站 {} 沒有櫃型 {} 的庫存",
                depot, container_type
            )));
        };

        let remaining = count.checked_sub(quantity).ok_or_else(|| {
            tracing::error!(
                %depot,
                %container_type,
                quantity,
                stock = *count,
                "扣減超過現有庫存"
            );
            ReleaseError::InvalidOperation(format!(
                "庫存不足：需要 {}, 可用 {} ({} {})",
                quantity, count, depot, container_type
            ))
        })?;

        *count = remaining;
        tracing::debug!(%depot, %container_type, quantity, remaining, "庫存已扣減");
        Ok(())
    }

    /// 還原為初始快照
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        tracing::debug!("庫存已還原為初始快照");
    }

    /// 目前庫存快照（供顯示）
    pub fn snapshot(&self) -> StockTable {
        self.current.clone()
    }

    /// 查詢目前數量
    pub fn stock_of(&self, depot: &DepotId, container_type: ContainerType) -> Option<u32> {
        self.current.get(depot, container_type)
    }

    /// 初始快照
    pub fn initial(&self) -> &StockTable {
        &self.initial
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::with_default_depots()
    }
}
