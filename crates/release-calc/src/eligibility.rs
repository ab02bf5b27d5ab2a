//! 提櫃資格計算

use chrono::{Days, NaiveDate};
use release_core::{
    AllowanceConfig, ContainerType, DenialReason, ReeferDateRule, ReleaseError, ReleaseRequest,
    WindowPolicy,
};
use serde::Serialize;

/// 提櫃規則
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickupRule {
    /// 窗口規則（非冷凍櫃）
    Window {
        /// 最早提櫃日 = 裝船日 - 寬限天數
        earliest: NaiveDate,
        /// 最晚提櫃日（開放窗口時為 None）
        latest: Option<NaiveDate>,
        /// 實際適用的寬限天數
        allowance_days: u32,
        /// 是否處於缺櫃期間
        shortage_active: bool,
    },

    /// 指定日期規則（冷凍櫃）
    ExactDate { required_date: NaiveDate },
}

/// 提櫃資格判定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EligibilityVerdict {
    pub container_type: ContainerType,
    pub today: NaiveDate,
    pub rule: PickupRule,
    pub eligible: bool,
}

impl EligibilityVerdict {
    /// 計算出的提櫃日（無論是否符合都會提供，供顯示）
    pub fn computed_date(&self) -> NaiveDate {
        match self.rule {
            PickupRule::Window { earliest, .. } => earliest,
            PickupRule::ExactDate { required_date } => required_date,
        }
    }

    /// 不符合時的拒絕原因
    pub fn denial_reason(&self) -> Option<DenialReason> {
        if self.eligible {
            return None;
        }

        Some(match self.rule {
            PickupRule::Window { .. } => DenialReason::OutsidePickupWindow,
            PickupRule::ExactDate { .. } => DenialReason::RequiredDateMismatch,
        })
    }
}

/// 提櫃資格計算器
///
/// 純函數：只依櫃型、日期與配置判定，不讀取庫存。
pub struct EligibilityEngine;

impl EligibilityEngine {
    /// 依放行申請判定資格
    pub fn evaluate_request(
        request: &ReleaseRequest,
        config: &AllowanceConfig,
        today: NaiveDate,
    ) -> release_core::Result<EligibilityVerdict> {
        Self::evaluate(
            request.container_type(),
            request.loading_date(),
            request.required_date(),
            config,
            today,
        )
    }

    /// 判定資格
    pub fn evaluate(
        container_type: ContainerType,
        loading_date: NaiveDate,
        required_date: Option<NaiveDate>,
        config: &AllowanceConfig,
        today: NaiveDate,
    ) -> release_core::Result<EligibilityVerdict> {
        let rule = if container_type.is_reefer() {
            let required_date =
                Self::reefer_required_date(container_type, loading_date, required_date, config)?;
            PickupRule::ExactDate { required_date }
        } else {
            let allowance_days = config.allowance_days_for(container_type, today);
            let earliest = Self::earliest_pickup_date(loading_date, allowance_days)?;
            let latest = match config.effective_window_policy() {
                WindowPolicy::Closed => Some(loading_date),
                WindowPolicy::Open => None,
            };

            PickupRule::Window {
                earliest,
                latest,
                allowance_days,
                shortage_active: config.shortage_active(today),
            }
        };

        let eligible = match rule {
            PickupRule::ExactDate { required_date } => today == required_date,
            PickupRule::Window {
                earliest, latest, ..
            } => earliest <= today && latest.map_or(true, |latest| today <= latest),
        };

        tracing::debug!(
            "提櫃資格 {}: 規則 {:?}, 今天 {}, 結果 {}",
            container_type,
            rule,
            today,
            eligible
        );

        Ok(EligibilityVerdict {
            container_type,
            today,
            rule,
            eligible,
        })
    }

    /// 計算最早提櫃日（裝船日往前推寬限天數）
    pub fn earliest_pickup_date(
        loading_date: NaiveDate,
        allowance_days: u32,
    ) -> release_core::Result<NaiveDate> {
        loading_date
            .checked_sub_days(Days::new(u64::from(allowance_days)))
            .ok_or_else(|| {
                ReleaseError::InvalidDate(format!(
                    "{} 往前 {} 天超出日期範圍",
                    loading_date, allowance_days
                ))
            })
    }

    /// 冷凍櫃可選的指定日期範圍 [裝船日 - 回溯天數, 裝船日]
    pub fn reefer_date_range(
        loading_date: NaiveDate,
        config: &AllowanceConfig,
    ) -> release_core::Result<(NaiveDate, NaiveDate)> {
        let earliest = Self::earliest_pickup_date(loading_date, config.reefer_lookback_days)?;
        Ok((earliest, loading_date))
    }

    fn reefer_required_date(
        container_type: ContainerType,
        loading_date: NaiveDate,
        selected: Option<NaiveDate>,
        config: &AllowanceConfig,
    ) -> release_core::Result<NaiveDate> {
        match config.reefer_date_rule {
            ReeferDateRule::LoadingDate => Ok(loading_date),
            ReeferDateRule::Selected => {
                let date = selected.ok_or(ReleaseError::MissingRequiredDate(container_type))?;
                let (earliest, latest) = Self::reefer_date_range(loading_date, config)?;

                if date < earliest || date > latest {
                    return Err(ReleaseError::RequiredDateOutOfRange {
                        date,
                        earliest,
                        latest,
                    });
                }

                Ok(date)
            }
        }
    }
}
