//! 提櫃寬限配置模型

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ContainerType, ReleaseError, Result};

/// 提櫃窗口上限規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowPolicy {
    /// 封閉窗口：最早提櫃日 ≤ 今天 ≤ 裝船日
    Closed,
    /// 開放窗口：最早提櫃日 ≤ 今天，無上限
    Open,
}

/// 冷凍櫃指定日期規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReeferDateRule {
    /// 由申請人指定，須落在 [裝船日 - 回溯天數, 裝船日]
    Selected,
    /// 固定為裝船日
    LoadingDate,
}

/// 缺櫃期間
///
/// 今天落在 [start, end]（含兩端）時改用較短的寬限天數。
/// start > end 視為空窗口，永不生效。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortageWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ShortageWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 是否為空窗口（起日晚於迄日）
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// 今天是否落在缺櫃期間內
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// 提櫃寬限配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowanceConfig {
    /// 預設寬限天數（非冷凍櫃）
    pub default_allowance_days: u32,

    /// 缺櫃期間寬限天數
    pub shortage_allowance_days: u32,

    /// 缺櫃期間
    pub shortage_window: Option<ShortageWindow>,

    /// 各櫃型寬限天數（覆蓋預設值，缺櫃期間除外）
    pub type_allowance_days: BTreeMap<ContainerType, u32>,

    /// 窗口上限規則（未設置時依是否有缺櫃期間決定）
    pub window_policy: Option<WindowPolicy>,

    /// 冷凍櫃指定日期規則
    pub reefer_date_rule: ReeferDateRule,

    /// 冷凍櫃指定日期最多可早於裝船日幾天
    pub reefer_lookback_days: u32,
}

impl AllowanceConfig {
    /// 創建新的寬限配置
    pub fn new(default_allowance_days: u32) -> Self {
        Self {
            default_allowance_days,
            shortage_allowance_days: default_allowance_days,
            shortage_window: None,
            type_allowance_days: BTreeMap::new(),
            window_policy: None,
            reefer_date_rule: ReeferDateRule::Selected,
            reefer_lookback_days: 5,
        }
    }

    /// 建構器模式：設置缺櫃期間與寬限天數
    pub fn with_shortage_window(
        mut self,
        start: NaiveDate,
        end: NaiveDate,
        allowance_days: u32,
    ) -> Self {
        self.shortage_window = Some(ShortageWindow::new(start, end));
        self.shortage_allowance_days = allowance_days;
        self
    }

    /// 建構器模式：設置單一櫃型寬限天數
    pub fn with_type_allowance(mut self, container_type: ContainerType, days: u32) -> Self {
        self.type_allowance_days.insert(container_type, days);
        self
    }

    /// 建構器模式：設置窗口上限規則
    pub fn with_window_policy(mut self, policy: WindowPolicy) -> Self {
        self.window_policy = Some(policy);
        self
    }

    /// 建構器模式：設置冷凍櫃日期規則
    pub fn with_reefer_date_rule(mut self, rule: ReeferDateRule) -> Self {
        self.reefer_date_rule = rule;
        self
    }

    /// 建構器模式：設置冷凍櫃回溯天數
    pub fn with_reefer_lookback_days(mut self, days: u32) -> Self {
        self.reefer_lookback_days = days;
        self
    }

    /// 從 JSON 載入並驗證
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// 驗證配置
    pub fn validate(&self) -> Result<()> {
        if self.default_allowance_days == 0 {
            return Err(ReleaseError::InvalidConfig(
                "預設寬限天數必須至少為 1".to_string(),
            ));
        }

        if self.shortage_allowance_days == 0 {
            return Err(ReleaseError::InvalidConfig(
                "缺櫃寬限天數必須至少為 1".to_string(),
            ));
        }

        let zero_type = self
            .type_allowance_days
            .iter()
            .find(|(_, days)| **days == 0);

        if let Some((container_type, _)) = zero_type {
            return Err(ReleaseError::InvalidConfig(format!(
                "櫃型 {} 的寬限天數必須至少為 1",
                container_type
            )));
        }

        Ok(())
    }

    /// 今天是否處於缺櫃期間
    pub fn shortage_active(&self, today: NaiveDate) -> bool {
        self.shortage_window.is_some_and(|window| window.contains(today))
    }

    /// 實際適用的寬限天數
    pub fn allowance_days_for(&self, container_type: ContainerType, today: NaiveDate) -> u32 {
        if self.shortage_active(today) {
            return self.shortage_allowance_days;
        }

        self.type_allowance_days
            .get(&container_type)
            .copied()
            .unwrap_or(self.default_allowance_days)
    }

    /// 實際適用的窗口上限規則
    ///
    /// 未明確設置時：有缺櫃期間用開放窗口，否則用封閉窗口。
    /// 空的缺櫃期間視同未設置。
    pub fn effective_window_policy(&self) -> WindowPolicy {
        match (self.window_policy, self.shortage_window) {
            (Some(policy), _) => policy,
            (None, Some(window)) if !window.is_empty() => WindowPolicy::Open,
            (None, _) => WindowPolicy::Closed,
        }
    }
}

impl Default for AllowanceConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
