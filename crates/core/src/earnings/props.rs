//! Property-based tests for the earnings engine.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::EarningsService;
use super::types::EarningsReport;

const NAMES: [&str; 4] = ["Amy", "Bao", "Cruz", "Departed"];
const ROSTER: [&str; 3] = ["Amy", "Bao", "Cruz"];

/// Strategy for amounts between -10,000.00 and 100,000.00.
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn technician_amounts() -> impl Strategy<Value = BTreeMap<String, Decimal>> {
    prop::collection::btree_map(
        prop::sample::select(NAMES.to_vec()).prop_map(str::to_string),
        amount(),
        0..=NAMES.len(),
    )
}

fn report() -> impl Strategy<Value = EarningsReport> {
    (
        technician_amounts(),
        (amount(), amount(), amount()),
        (amount(), amount(), amount()),
        -5i64..200,
    )
        .prop_map(
            |(technician_amounts, (sell, ret, check), (credit, venmo, square), count)| {
                EarningsReport {
                    technician_amounts,
                    sell_gift_card: sell,
                    return_gift_card: ret,
                    check,
                    total_credit: credit,
                    venmo,
                    square,
                    no_of_credit: count,
                    ..EarningsReport::default()
                }
            },
        )
}

/// Strategy over the whole `Decimal` range, any scale.
fn extreme_amount() -> impl Strategy<Value = Decimal> {
    (any::<u32>(), any::<u32>(), any::<u32>(), any::<bool>(), 0u32..=28)
        .prop_map(|(lo, mid, hi, negative, scale)| {
            Decimal::from_parts(lo, mid, hi, negative, scale)
        })
}

fn extreme_report() -> impl Strategy<Value = EarningsReport> {
    (
        prop::collection::btree_map(
            prop::sample::select(NAMES.to_vec()).prop_map(str::to_string),
            extreme_amount(),
            0..=NAMES.len(),
        ),
        prop::collection::vec(extreme_amount(), 6),
        any::<i64>(),
    )
        .prop_map(|(technician_amounts, channels, count)| EarningsReport {
            technician_amounts,
            sell_gift_card: channels[0],
            return_gift_card: channels[1],
            check: channels[2],
            total_credit: channels[3],
            venmo: channels[4],
            square: channels[5],
            no_of_credit: count,
            ..EarningsReport::default()
        })
}

fn reports_and_permutation() -> impl Strategy<Value = (Vec<EarningsReport>, Vec<EarningsReport>)> {
    prop::collection::vec(report(), 0..16)
        .prop_flat_map(|reports| (Just(reports.clone()), Just(reports).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Total earn is technician earnings plus gift cards sold plus 2.00 per card transaction.
    #[test]
    fn prop_total_earn_formula(report in report()) {
        let derived = EarningsService::default().compute_record_derived(&report);
        let technicians: Decimal = report.technician_amounts.values().sum();

        prop_assert_eq!(derived.total_technician_earn, technicians);
        prop_assert_eq!(
            derived.total_earn,
            technicians + report.sell_gift_card + Decimal::from(report.no_of_credit * 2)
        );
    }

    /// Cash is the unclamped residual after every non-cash channel.
    #[test]
    fn prop_cash_is_unclamped_residual(report in report()) {
        let derived = EarningsService::default().compute_record_derived(&report);
        let expected = derived.total_earn
            - (report.total_credit + report.check + report.return_gift_card
                + report.venmo + report.square);

        prop_assert_eq!(derived.cash, expected);
    }

    /// Permuting the reports leaves every total unchanged.
    #[test]
    fn prop_totals_are_order_independent((reports, shuffled) in reports_and_permutation()) {
        let service = EarningsService::default();
        prop_assert_eq!(
            service.compute_totals(&ROSTER, &reports),
            service.compute_totals(&ROSTER, &shuffled)
        );
    }

    /// Period sums equal the sums of the per-record values.
    #[test]
    fn prop_totals_fold_record_values(reports in prop::collection::vec(report(), 0..16)) {
        let service = EarningsService::default();
        let totals = service.compute_totals(&ROSTER, &reports);

        let total_earn: Decimal = reports
            .iter()
            .map(|r| service.compute_record_derived(r).total_earn)
            .sum();
        let cash: Decimal = reports.iter().map(|r| service.compute_record_derived(r).cash).sum();
        prop_assert_eq!(totals.total_earn, total_earn);
        prop_assert_eq!(totals.cash, cash);
        prop_assert_eq!(totals.report_count, reports.len());

        for name in ROSTER {
            let expected: Decimal = reports.iter().map(|r| r.amount_for(name)).sum();
            prop_assert_eq!(totals.technician(name), Some(expected));
        }
        prop_assert_eq!(totals.technician("Departed"), None);
        prop_assert_eq!(totals.technicians.len(), ROSTER.len());
    }

    /// With no reports every technician and channel is zero.
    #[test]
    fn prop_empty_reports_yield_zero_totals(
        roster in prop::collection::vec("[A-Z][a-z]{1,8}", 0..6),
    ) {
        let totals = EarningsService::default().compute_totals(&roster, &[]);

        for name in &roster {
            prop_assert_eq!(totals.technician(name), Some(Decimal::ZERO));
        }
        prop_assert_eq!(totals.sell_gift_card, Decimal::ZERO);
        prop_assert_eq!(totals.return_gift_card, Decimal::ZERO);
        prop_assert_eq!(totals.check, Decimal::ZERO);
        prop_assert_eq!(totals.no_of_credit, 0);
        prop_assert_eq!(totals.total_credit, Decimal::ZERO);
        prop_assert_eq!(totals.venmo, Decimal::ZERO);
        prop_assert_eq!(totals.square, Decimal::ZERO);
        prop_assert_eq!(totals.cash, Decimal::ZERO);
        prop_assert_eq!(totals.total_earn, Decimal::ZERO);
    }

    /// Any magnitude folds into totals; nothing aborts the period.
    #[test]
    fn prop_extreme_reports_never_abort(reports in prop::collection::vec(extreme_report(), 0..8)) {
        let service = EarningsService::default();
        let totals = service.compute_totals(&ROSTER, &reports);

        prop_assert_eq!(totals.report_count, reports.len());
        prop_assert_eq!(totals.technicians.len(), ROSTER.len());
        for technician in &totals.technicians {
            let split = service.compute_commission(technician.total);
            prop_assert!(split.commission.abs() <= technician.total.abs());
        }
    }

    /// Check and cash portions always add back to the commission.
    #[test]
    fn prop_commission_portions_sum_exactly(total in amount()) {
        let split = EarningsService::default().compute_commission(total);

        prop_assert_eq!(split.check_portion + split.cash_portion, split.commission);
        prop_assert_eq!(split.commission, total * Decimal::new(70, 2));
    }
}
