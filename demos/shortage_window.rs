//! 缺櫃期間寬限示例

use chrono::{Duration, NaiveDate};
use container_release::{AllowanceConfig, ContainerType, EligibilityEngine, PickupRule};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"{
    "default_allowance_days": 8,
    "shortage_allowance_days": 5,
    "shortage_window": { "start": "2024-06-01", "end": "2024-06-05" }
}"#;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let config = AllowanceConfig::from_json(CONFIG)?;
    println!("配置: {}", serde_json::to_string(&config)?);

    let loading_date =
        NaiveDate::from_ymd_opt(2024, 6, 10).ok_or_else(|| anyhow::anyhow!("無效的日期"))?;
    println!("裝船日: {}\n", loading_date);

    let mut today =
        NaiveDate::from_ymd_opt(2024, 5, 30).ok_or_else(|| anyhow::anyhow!("無效的日期"))?;
    while today <= loading_date + Duration::days(2) {
        let verdict = EligibilityEngine::evaluate(
            ContainerType::Standard20,
            loading_date,
            None,
            &config,
            today,
        )?;
        if let PickupRule::Window {
            earliest,
            allowance_days,
            shortage_active,
            ..
        } = verdict.rule
        {
            println!(
                "{}  寬限 {} 天{}  最早提櫃日 {}  {}",
                today,
                allowance_days,
                if shortage_active { "（缺櫃）" } else { "" },
                earliest,
                if verdict.eligible { "可放行" } else { "不可放行" }
            );
        }
        today += Duration::days(1);
    }

    Ok(())
}
