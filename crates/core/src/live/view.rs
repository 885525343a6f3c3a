//! Earnings view bound to one period subscription.

use chrono::{Datelike, Local};
use thiserror::Error;
use tracing::debug;

use super::subscription::{ReportFeed, Subscription};
use crate::earnings::{EarningsReport, EarningsService};
use crate::period::{PeriodError, PeriodSelector, PeriodWindow};
use crate::sheet::EarningsSheet;
use crate::staff::Roster;

/// Errors opening or moving a live view.
#[derive(Debug, Error)]
pub enum ViewError<E: std::error::Error + 'static> {
    /// The selected period has no window.
    #[error(transparent)]
    Period(#[from] PeriodError),

    /// The feed refused the subscription.
    #[error("Report feed error: {0}")]
    Feed(#[source] E),
}

/// Live earnings sheet for the selected period.
#[derive(Debug)]
pub struct EarningsView {
    service: EarningsService,
    roster: Roster,
    year: i32,
    window: PeriodWindow,
    subscription: Option<Subscription>,
}

impl EarningsView {
    /// Subscribes to the feed for `selector` within `year`.
    pub fn open<F: ReportFeed>(
        feed: &F,
        service: EarningsService,
        roster: Roster,
        selector: PeriodSelector,
        year: i32,
    ) -> Result<Self, ViewError<F::Error>> {
        let window = PeriodWindow::resolve(selector, year)?;
        let subscription = feed.subscribe(&window).map_err(ViewError::Feed)?;
        debug!(
            period = %selector,
            year,
            start = %window.start,
            end = %window.end,
            "Opened report subscription"
        );

        Ok(Self {
            service,
            roster,
            year,
            window,
            subscription: Some(subscription),
        })
    }

    /// Subscribes for `selector` within the system clock's year.
    pub fn open_current<F: ReportFeed>(
        feed: &F,
        service: EarningsService,
        roster: Roster,
        selector: PeriodSelector,
    ) -> Result<Self, ViewError<F::Error>> {
        Self::open(feed, service, roster, selector, Local::now().year())
    }

    /// Builds the sheet for a snapshot of the subscribed window.
    #[must_use]
    pub fn on_snapshot(&self, reports: &[EarningsReport]) -> EarningsSheet {
        debug!(
            period = %self.window.selector,
            reports = reports.len(),
            technicians = self.roster.len(),
            "Recomputing earnings sheet"
        );
        EarningsSheet::build(&self.service, &self.roster, reports)
    }

    /// Moves the view to another period.
    ///
    /// The current subscription is released before the new one is opened.
    /// If the feed refuses, the view is left unsubscribed.
    pub fn reselect<F: ReportFeed>(
        &mut self,
        feed: &F,
        selector: PeriodSelector,
    ) -> Result<(), ViewError<F::Error>> {
        let window = PeriodWindow::resolve(selector, self.year)?;
        self.release();

        let subscription = feed.subscribe(&window).map_err(ViewError::Feed)?;
        debug!(period = %selector, year = self.year, "Opened report subscription");
        self.window = window;
        self.subscription = Some(subscription);
        Ok(())
    }

    /// Selected period.
    #[must_use]
    pub const fn selector(&self) -> PeriodSelector {
        self.window.selector
    }

    /// Window of the selected period.
    #[must_use]
    pub const fn window(&self) -> &PeriodWindow {
        &self.window
    }

    /// Returns true while the view holds a subscription.
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    fn release(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            debug!(period = %self.window.selector, "Releasing report subscription");
            subscription.release();
        }
    }
}

impl Drop for EarningsView {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Error)]
    #[error("feed offline")]
    struct Offline;

    #[derive(Default)]
    struct FakeFeed {
        active: Arc<AtomicUsize>,
        peak: Arc<AtomicUsize>,
        offline: AtomicBool,
        windows: RefCell<Vec<PeriodWindow>>,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl ReportFeed for FakeFeed {
        type Error = Offline;

        fn subscribe(&self, window: &PeriodWindow) -> Result<Subscription, Offline> {
            if self.offline.load(Ordering::SeqCst) {
                return Err(Offline);
            }
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            self.windows.borrow_mut().push(*window);
            self.log.lock().unwrap().push(format!("open {}", window.selector));

            let active = Arc::clone(&self.active);
            let log = Arc::clone(&self.log);
            let label = window.selector.to_string();
            Ok(Subscription::new(move || {
                active.fetch_sub(1, Ordering::SeqCst);
                log.lock().unwrap().push(format!("release {label}"));
            }))
        }
    }

    fn open(feed: &FakeFeed, selector: PeriodSelector) -> EarningsView {
        EarningsView::open(
            feed,
            EarningsService::default(),
            Roster::new(["Amy", "Bao"]),
            selector,
            2026,
        )
        .unwrap()
    }

    #[test]
    fn test_open_subscribes_for_resolved_window() {
        let feed = FakeFeed::default();
        let view = open(&feed, PeriodSelector::Month(Month::October));

        assert!(view.is_subscribed());
        assert_eq!(feed.active.load(Ordering::SeqCst), 1);
        assert_eq!(feed.windows.borrow()[0], *view.window());
        assert_eq!(view.window().start.to_string(), "2026-10-01");
    }

    #[test]
    fn test_drop_releases_subscription() {
        let feed = FakeFeed::default();
        let view = open(&feed, PeriodSelector::FullYear);
        drop(view);
        assert_eq!(feed.active.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reselect_releases_before_subscribing() {
        let feed = FakeFeed::default();
        let mut view = open(&feed, PeriodSelector::Month(Month::October));
        view.reselect(&feed, PeriodSelector::Month(Month::November)).unwrap();
        view.reselect(&feed, PeriodSelector::FullYear).unwrap();

        assert_eq!(view.selector(), PeriodSelector::FullYear);
        assert_eq!(feed.active.load(Ordering::SeqCst), 1);
        assert_eq!(feed.peak.load(Ordering::SeqCst), 1);
        assert_eq!(
            *feed.log.lock().unwrap(),
            [
                "open October",
                "release October",
                "open November",
                "release November",
                "open This Year"
            ]
        );
    }

    #[test]
    fn test_failed_reselect_leaves_view_unsubscribed() {
        let feed = FakeFeed::default();
        let mut view = open(&feed, PeriodSelector::Month(Month::October));
        feed.offline.store(true, Ordering::SeqCst);

        let err = view.reselect(&feed, PeriodSelector::Month(Month::March)).unwrap_err();
        assert!(matches!(err, ViewError::Feed(Offline)));
        assert!(!view.is_subscribed());
        assert_eq!(feed.active.load(Ordering::SeqCst), 0);
        assert_eq!(view.selector(), PeriodSelector::Month(Month::October));
    }

    #[test]
    fn test_snapshots_are_recomputed_independently() {
        let feed = FakeFeed::default();
        let view = open(&feed, PeriodSelector::Month(Month::October));

        let mut first = EarningsReport::default();
        first.technician_amounts.insert("Amy".into(), dec!(100));
        let mut second = EarningsReport::default();
        second.technician_amounts.insert("Bao".into(), dec!(40));

        let a = view.on_snapshot(&[first.clone()]);
        let b = view.on_snapshot(&[second]);
        let c = view.on_snapshot(&[first]);

        assert_eq!(a.totals.total_earn, dec!(100));
        assert_eq!(b.totals.total_earn, dec!(40));
        assert_eq!(b.totals.technician("Amy"), Some(dec!(0)));
        assert_eq!(a, c);
    }

    #[test]
    fn test_open_current_uses_clock_year() {
        let feed = FakeFeed::default();
        let view = EarningsView::open_current(
            &feed,
            EarningsService::default(),
            Roster::new(["Amy"]),
            PeriodSelector::FullYear,
        )
        .unwrap();
        assert_eq!(view.window().start.year(), Local::now().year());
        assert_eq!(view.window().end.year(), Local::now().year());
        assert_eq!(feed.active.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_year_out_of_range() {
        let feed = FakeFeed::default();
        let err = EarningsView::open(
            &feed,
            EarningsService::default(),
            Roster::default(),
            PeriodSelector::FullYear,
            i32::MAX,
        )
        .unwrap_err();
        assert!(matches!(err, ViewError::Period(PeriodError::YearOutOfRange(_))));
        assert_eq!(feed.active.load(Ordering::SeqCst), 0);
    }
}
