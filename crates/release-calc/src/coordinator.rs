//! 放行協調器

use chrono::NaiveDate;
use release_core::{
    AllowanceConfig, Denial, DenialReason, InventoryStore, ReleaseOutcome, ReleaseRecord,
    ReleaseRequest,
};

use crate::eligibility::EligibilityEngine;

/// 放行協調器
///
/// 先判定提櫃資格，再檢查並扣減庫存。資格判定不依賴庫存狀態，
/// 因此一律先做，讓日期問題與庫存問題可以區分。
pub struct ReleaseCoordinator;

impl ReleaseCoordinator {
    /// 以系統日期執行放行
    pub fn attempt_release_today(
        request: &ReleaseRequest,
        config: &AllowanceConfig,
        store: &mut InventoryStore,
    ) -> release_core::Result<ReleaseOutcome> {
        Self::attempt_release(request, config, store, chrono::Local::now().date_naive())
    }

    /// 放行主入口
    ///
    /// 使用者層級的拒絕以 [`ReleaseOutcome::Denied`] 回傳；
    /// `Err` 只代表無效的配置或申請，此時庫存不會被動到。
    pub fn attempt_release(
        request: &ReleaseRequest,
        config: &AllowanceConfig,
        store: &mut InventoryStore,
        today: NaiveDate,
    ) -> release_core::Result<ReleaseOutcome> {
        tracing::info!(
            "開始放行：{} {} x{}，裝船日 {}，今天 {}",
            request.depot(),
            request.container_type(),
            request.quantity(),
            request.loading_date(),
            today
        );

        config.validate()?;

        // Step 1: 提櫃資格
        let verdict = EligibilityEngine::evaluate_request(request, config, today)?;
        let computed_date = verdict.computed_date();

        if let Some(reason) = verdict.denial_reason() {
            return Ok(Self::deny(request, reason, computed_date));
        }

        // Step 2: 檢查並扣減庫存（同一個 &mut 借用內完成）
        if !store.available(request.depot(), request.container_type(), request.quantity()) {
            return Ok(Self::deny(request, DenialReason::InsufficientStock, computed_date));
        }

        store.decrement(request.depot(), request.container_type(), request.quantity())?;

        let record = ReleaseRecord::new(
            request.depot().clone(),
            request.container_type(),
            request.quantity(),
            computed_date,
            today,
        );

        tracing::info!(
            release_id = %record.id,
            "放行完成：{} {} x{}，提櫃日 {}",
            record.depot,
            record.container_type,
            record.quantity,
            record.pickup_date
        );

        Ok(ReleaseOutcome::Approved(record))
    }

    fn deny(
        request: &ReleaseRequest,
        reason: DenialReason,
        computed_date: NaiveDate,
    ) -> ReleaseOutcome {
        tracing::warn!(
            "拒絕放行：{} {} x{}，原因 {}",
            request.depot(),
            request.container_type(),
            request.quantity(),
            reason.tag()
        );

        ReleaseOutcome::Denied(Denial::new(
            reason,
            request.depot().clone(),
            request.container_type(),
            computed_date,
        ))
    }
}
