//! Live earnings view over a subscribable report feed.
//!
//! The view owns one scoped [`Subscription`] for the selected period and
//! recomputes a fresh [`EarningsSheet`](crate::sheet::EarningsSheet) from
//! each snapshot the feed delivers. Nothing is carried between snapshots.

pub mod subscription;
pub mod view;

pub use subscription::{ReportFeed, Subscription};
pub use view::{EarningsView, ViewError};
