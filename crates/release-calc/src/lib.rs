//! # Release Calculation Engine
//!
//! 提櫃資格判定與放行協調

pub mod coordinator;
pub mod desk;
pub mod eligibility;

// Re-export 主要類型
pub use coordinator::ReleaseCoordinator;
pub use desk::ReleaseDesk;
pub use eligibility::{EligibilityEngine, EligibilityVerdict, PickupRule};
