//! 集成測試

use chrono::NaiveDate;
use release_calc::{EligibilityEngine, ReleaseCoordinator, ReleaseDesk};
use release_core::*;
use rstest::rstest;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_end_to_end_release_session() {
    // 場景：Depot 1 的 40ST 有 5 個，連續兩次申請 3 個

    // 1. 建立庫存與配置
    let mut store = InventoryStore::with_default_depots();
    let config = AllowanceConfig::new(8);
    let depot = DepotId::new("Depot 1");
    assert_eq!(store.stock_of(&depot, ContainerType::Standard40), Some(5));

    // 2. 申請：裝船日 6/10，今天 6/2（最早提櫃日當天）
    let request =
        ReleaseRequest::new("Depot 1", ContainerType::Standard40, 3, date(2024, 6, 10)).unwrap();
    let today = date(2024, 6, 2);

    // 3. 第一次放行：核准，庫存剩 2
    let first = ReleaseCoordinator::attempt_release(&request, &config, &mut store, today).unwrap();
    assert!(first.is_approved());
    assert_eq!(first.computed_date(), date(2024, 6, 2));
    assert_eq!(store.stock_of(&depot, ContainerType::Standard40), Some(2));

    // 4. 第二次放行：庫存不足，庫存不變
    let second = ReleaseCoordinator::attempt_release(&request, &config, &mut store, today).unwrap();
    assert_eq!(second.denial_reason().map(|r| r.tag()), Some("insufficient stock"));
    assert_eq!(store.stock_of(&depot, ContainerType::Standard40), Some(2));

    // 5. 其他場站與櫃型不受影響
    assert_eq!(store.stock_of(&depot, ContainerType::Standard20), Some(10));
    assert_eq!(store.stock_of(&DepotId::new("Depot 2"), ContainerType::Standard40), Some(8));

    // 6. 還原
    store.reset();
    assert_eq!(store.snapshot(), StockTable::default_depots());
}

#[rstest]
#[case::window_too_early(
    ContainerType::Standard20,
    None,
    date(2024, 6, 1),
    Some(DenialReason::OutsidePickupWindow)
)]
#[case::window_after_loading(
    ContainerType::HighCube40,
    None,
    date(2024, 6, 11),
    Some(DenialReason::OutsidePickupWindow)
)]
#[case::window_ok(ContainerType::HighCube40, None, date(2024, 6, 5), None)]
#[case::reefer_wrong_day(
    ContainerType::Reefer40,
    Some(date(2024, 6, 7)),
    date(2024, 6, 6),
    Some(DenialReason::RequiredDateMismatch)
)]
#[case::reefer_right_day(
    ContainerType::Reefer40,
    Some(date(2024, 6, 7)),
    date(2024, 6, 7),
    None
)]
fn test_denial_reasons_are_distinguishable(
    #[case] container_type: ContainerType,
    #[case] required_date: Option<NaiveDate>,
    #[case] today: NaiveDate,
    #[case] expected: Option<DenialReason>,
) {
    let mut desk = ReleaseDesk::with_default_depots(AllowanceConfig::new(8)).unwrap();

    let mut request = ReleaseRequest::new("Depot 2", container_type, 1, date(2024, 6, 10)).unwrap();
    if let Some(required_date) = required_date {
        request = request.with_required_date(required_date);
    }

    let outcome = desk.attempt_release(&request, today).unwrap();
    assert_eq!(outcome.denial_reason(), expected);
}

#[test]
fn test_reefer_denied_regardless_of_stock() {
    // Depot 2 的 40RH 只有 2 個；日期不對時即使數量超過也回報日期問題
    let mut desk = ReleaseDesk::with_default_depots(AllowanceConfig::new(8)).unwrap();
    let request = ReleaseRequest::new("Depot 2", ContainerType::Reefer40, 5, date(2024, 6, 10))
        .unwrap()
        .with_required_date(date(2024, 6, 7));

    let outcome = desk.attempt_release(&request, date(2024, 6, 6)).unwrap();
    assert_eq!(outcome.denial_reason(), Some(DenialReason::RequiredDateMismatch));

    let outcome = desk.attempt_release(&request, date(2024, 6, 7)).unwrap();
    assert_eq!(outcome.denial_reason(), Some(DenialReason::InsufficientStock));
}

#[test]
fn test_shortage_window_session() {
    // 缺櫃期間 6/1 ~ 6/5 寬限縮短為 5 天，期間外為 8 天（開放窗口）
    let config =
        AllowanceConfig::new(8).with_shortage_window(date(2024, 6, 1), date(2024, 6, 5), 5);
    let mut desk = ReleaseDesk::with_default_depots(config).unwrap();
    let request =
        ReleaseRequest::new("Depot 3", ContainerType::Standard20, 2, date(2024, 6, 10)).unwrap();

    // 6/3 在缺櫃期間：最早提櫃日 6/5，尚未開放
    let verdict = desk.preview(&request, date(2024, 6, 3)).unwrap();
    assert_eq!(verdict.computed_date(), date(2024, 6, 5));
    assert!(!verdict.eligible);

    let outcome = desk.attempt_release(&request, date(2024, 6, 3)).unwrap();
    assert_eq!(outcome.denial_reason(), Some(DenialReason::OutsidePickupWindow));

    // 6/12 已過裝船日，開放窗口仍可放行
    let outcome = desk.attempt_release(&request, date(2024, 6, 12)).unwrap();
    assert!(outcome.is_approved());
    assert_eq!(outcome.computed_date(), date(2024, 6, 2));
    assert_eq!(
        desk.stock_snapshot().get(&DepotId::new("Depot 3"), ContainerType::Standard20),
        Some(5)
    );
}

#[test]
fn test_inverted_shortage_window_keeps_closed_window() {
    // 缺櫃期間起日晚於迄日且未指定上限規則：行為與沒有缺櫃期間相同
    let config = AllowanceConfig::from_json(
        r#"{
            "default_allowance_days": 8,
            "shortage_allowance_days": 5,
            "shortage_window": { "start": "2024-06-05", "end": "2024-06-01" }
        }"#,
    )
    .unwrap();
    let mut desk = ReleaseDesk::with_default_depots(config).unwrap();
    let request =
        ReleaseRequest::new("Depot 1", ContainerType::Standard40, 1, date(2024, 6, 10)).unwrap();

    // 6/11 已過裝船日：封閉窗口，拒絕且庫存不變
    let outcome = desk.attempt_release(&request, date(2024, 6, 11)).unwrap();
    assert_eq!(outcome.denial_reason(), Some(DenialReason::OutsidePickupWindow));
    assert_eq!(desk.stock_snapshot(), StockTable::default_depots());

    // 6/10 仍在窗口內
    let outcome = desk.attempt_release(&request, date(2024, 6, 10)).unwrap();
    assert!(outcome.is_approved());
}

#[test]
fn test_json_configured_session() {
    let stock = StockTable::from_json(r#"{ "North Yard": { "40ST": 4, "40RH": 1 } }"#).unwrap();
    let config = AllowanceConfig::from_json(
        r#"{
            "default_allowance_days": 3,
            "window_policy": "Closed",
            "reefer_date_rule": "LoadingDate"
        }"#,
    )
    .unwrap();
    let mut desk = ReleaseDesk::new(InventoryStore::new(stock), config).unwrap();
    let yard = DepotId::new("North Yard");

    let reefer =
        ReleaseRequest::new("North Yard", ContainerType::Reefer40, 1, date(2024, 9, 1)).unwrap();
    assert!(desk.attempt_release(&reefer, date(2024, 9, 1)).unwrap().is_approved());

    let dry =
        ReleaseRequest::new("North Yard", ContainerType::Standard40, 4, date(2024, 9, 1)).unwrap();
    assert!(desk.attempt_release(&dry, date(2024, 8, 29)).unwrap().is_approved());

    assert_eq!(desk.stock_snapshot().depot_total(&yard), 0);
}

#[test]
fn test_invalid_reefer_request_is_error() {
    let mut store = InventoryStore::with_default_depots();
    let config = AllowanceConfig::new(8);
    let request =
        ReleaseRequest::new("Depot 1", ContainerType::Reefer40, 1, date(2024, 6, 10)).unwrap();

    let err = ReleaseCoordinator::attempt_release(&request, &config, &mut store, date(2024, 6, 10))
        .unwrap_err();
    assert!(matches!(err, ReleaseError::MissingRequiredDate(_)));

    let (earliest, latest) =
        EligibilityEngine::reefer_date_range(date(2024, 6, 10), &config).unwrap();
    assert_eq!((earliest, latest), (date(2024, 6, 5), date(2024, 6, 10)));
}
