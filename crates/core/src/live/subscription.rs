//! Scoped feed subscriptions.

use crate::period::PeriodWindow;

type ReleaseFn = Box<dyn FnOnce() + Send>;

/// Handle to an open feed subscription.
///
/// The release callback runs exactly once: on [`Subscription::release`] or
/// when the handle is dropped, whichever comes first.
#[must_use = "dropping a subscription releases it immediately"]
pub struct Subscription {
    release: Option<ReleaseFn>,
}

impl Subscription {
    /// Wraps the callback that ends the subscription.
    pub fn new(release: impl FnOnce() + Send + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Ends the subscription now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Source of earnings report snapshots for a period window.
pub trait ReportFeed {
    /// Error raised when a subscription cannot be opened.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Starts delivering snapshots of the reports dated within `window`.
    fn subscribe(&self, window: &PeriodWindow) -> Result<Subscription, Self::Error>;
}
