//! Earnings aggregation service.

use rust_decimal::Decimal;

use super::types::{
    CommissionSplit, EarningsPolicy, EarningsReport, PeriodTotals, RecordDerived, TechnicianTotal,
};

/// Service for deriving per-record values, period totals, and commissions.
///
/// Every operation is a pure function of its inputs. Callers re-run
/// [`compute_totals`](Self::compute_totals) on each snapshot; nothing is
/// retained between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct EarningsService {
    policy: EarningsPolicy,
}

impl EarningsService {
    /// Creates a service applying the given policy.
    #[must_use]
    pub const fn new(policy: EarningsPolicy) -> Self {
        Self { policy }
    }

    /// Derives total technician earnings, total earnings, and cash for one report.
    ///
    /// `cash` is a residual and is returned unclamped. Sums past the
    /// `Decimal` range saturate at its bounds.
    #[must_use]
    pub fn compute_record_derived(&self, report: &EarningsReport) -> RecordDerived {
        let total_technician_earn = sum(report.technician_amounts.values().copied());
        let surcharges =
            Decimal::from(report.no_of_credit).saturating_mul(self.policy.credit_surcharge);
        let total_earn = sum([total_technician_earn, report.sell_gift_card, surcharges]);
        let non_cash = sum([
            report.total_credit,
            report.check,
            report.return_gift_card,
            report.venmo,
            report.square,
        ]);

        RecordDerived {
            total_technician_earn,
            total_earn,
            cash: total_earn.saturating_sub(non_cash),
        }
    }

    /// Folds reports into period totals for the given roster.
    ///
    /// Every roster technician starts at zero. Amounts under names absent
    /// from the roster do not get a technician entry, though they still
    /// count toward each record's `total_earn` and `cash`. Like the record
    /// values, totals saturate instead of overflowing.
    #[must_use]
    pub fn compute_totals<S: AsRef<str>>(
        &self,
        roster: &[S],
        reports: &[EarningsReport],
    ) -> PeriodTotals {
        let mut totals = PeriodTotals::default();
        for name in roster {
            let name = name.as_ref();
            if totals.technician(name).is_none() {
                totals.technicians.push(TechnicianTotal {
                    name: name.to_string(),
                    total: Decimal::ZERO,
                });
            }
        }

        for report in reports {
            let derived = self.compute_record_derived(report);

            for technician in &mut totals.technicians {
                accumulate(&mut technician.total, report.amount_for(&technician.name));
            }
            accumulate(&mut totals.sell_gift_card, report.sell_gift_card);
            accumulate(&mut totals.return_gift_card, report.return_gift_card);
            accumulate(&mut totals.check, report.check);
            accumulate(&mut totals.total_credit, report.total_credit);
            accumulate(&mut totals.venmo, report.venmo);
            accumulate(&mut totals.square, report.square);
            accumulate(&mut totals.cash, derived.cash);
            accumulate(&mut totals.total_earn, derived.total_earn);
            totals.no_of_credit = totals.no_of_credit.saturating_add(report.no_of_credit);
            totals.report_count += 1;
        }

        totals
    }

    /// Splits a technician's period total into commission, check, and cash parts.
    ///
    /// `check_portion + cash_portion == commission` holds exactly.
    #[must_use]
    pub fn compute_commission(&self, technician_total: Decimal) -> CommissionSplit {
        let commission = technician_total.saturating_mul(self.policy.commission_rate);
        let check_portion = commission.saturating_mul(self.policy.check_share);

        CommissionSplit {
            commission,
            check_portion,
            cash_portion: commission.saturating_sub(check_portion),
        }
    }

    /// Commission split for every roster technician, in roster order.
    #[must_use]
    pub fn commissions<'a>(&self, totals: &'a PeriodTotals) -> Vec<(&'a str, CommissionSplit)> {
        totals
            .technicians
            .iter()
            .map(|t| (t.name.as_str(), self.compute_commission(t.total)))
            .collect()
    }
}

fn sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

fn accumulate(total: &mut Decimal, amount: Decimal) {
    *total = total.saturating_add(amount);
}
