//! Earnings aggregation.
//!
//! Turns daily earnings reports into per-record derived values, period
//! totals, and commission splits:
//! - Total Technician Earn (sum of technician amounts)
//! - Total Earn (technicians + gift cards sold + card surcharges)
//! - Cash (total earn less non-cash channels)

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::EarningsService;
pub use types::*;
