//! # Container Release
//!
//! 空櫃放行：提櫃窗口判定與場站庫存扣減

pub use release_calc::{
    EligibilityEngine, EligibilityVerdict, PickupRule, ReleaseCoordinator, ReleaseDesk,
};
pub use release_core::*;
