//! 空櫃放行作業示例

use chrono::{Duration, Local};
use container_release::{AllowanceConfig, ContainerType, ReleaseDesk, ReleaseRequest, StockTable};
use tracing_subscriber::EnvFilter;

fn print_stock(table: &StockTable) {
    if table.is_empty() {
        println!("（無庫存資料）");
        return;
    }

    print!("{:<10}", "");
    for container_type in ContainerType::ALL {
        print!("{:>6}", container_type);
    }
    println!();

    for depot in table.depots() {
        print!("{:<10}", depot);
        let counts = table.depot(depot);
        for container_type in ContainerType::ALL {
            let count = counts
                .and_then(|counts| counts.get(&container_type))
                .copied()
                .unwrap_or(0);
            print!("{:>6}", count);
        }
        println!();
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    println!("=== 空櫃放行示例 ===\n");

    let today = Local::now().date_naive();
    println!("Today's Date: {}\n", today.format("%Y-%m-%d"));

    let mut desk = ReleaseDesk::with_default_depots(AllowanceConfig::new(3))?;
    print_stock(&desk.stock_snapshot());
    println!();

    // 40ST：裝船日為兩天後，寬限 3 天
    let loading_date = today + Duration::days(2);
    let standard = ReleaseRequest::new("Depot 1", ContainerType::Standard40, 3, loading_date)?;
    let verdict = desk.preview(&standard, today)?;
    println!(
        "Earliest Pickup Date: {} (within window: {})",
        verdict.computed_date().format("%Y-%m-%d"),
        verdict.eligible
    );

    for _ in 0..2 {
        let outcome = desk.attempt_release_today(&standard)?;
        println!("{}", outcome.message());
    }

    // 40RH：指定日期為明天，今天提櫃會被拒絕
    let reefer = ReleaseRequest::new("Depot 2", ContainerType::Reefer40, 1, loading_date)?
        .with_required_date(today + Duration::days(1));
    println!("{}", desk.attempt_release_today(&reefer)?.message());

    println!();
    print_stock(&desk.stock_snapshot());

    desk.reset_stock();
    println!("\n還原後:");
    print_stock(&desk.stock_snapshot());

    Ok(())
}
