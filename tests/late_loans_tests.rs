mod common;
use common::{d, fixture, today};
use ludoview::core::late::{LatenessTier, categorize, col_time, days_overdue, late_report};
use ludoview::models::{Loan, LoanStatus};

fn open_loan(id: i64, stop: &str) -> Loan {
    Loan {
        id,
        item: 1,
        user: Some(1),
        start: d("2020-01-01"),
        stop: d(stop),
        status: LoanStatus::Out,
    }
}

#[test]
fn test_ten_days_late_is_one_week() {
    let loan = open_loan(1, "2024-06-20");
    assert_eq!(days_overdue(&loan, today()), 10);
    assert_eq!(categorize(&loan, today()), Some(LatenessTier::OneWeek));
    assert_eq!(LatenessTier::OneWeek.label(), Some("1 semaine"));
    assert_eq!(col_time(10.0 / 7.0), "1 semaines");
}

#[test]
fn test_not_yet_due_has_no_category() {
    let loan = open_loan(1, "2024-07-01");
    assert_eq!(categorize(&loan, today()), None);
}

#[test]
fn test_due_today_is_unlabelled_bucket() {
    let loan = open_loan(1, "2024-06-30");
    assert_eq!(categorize(&loan, today()), Some(LatenessTier::Due));
    assert_eq!(LatenessTier::Due.threshold_days(), 0);
    assert_eq!(LatenessTier::Due.label(), None);
}

#[test]
fn test_thresholds_are_inclusive() {
    let cases = [
        (6, LatenessTier::Due),
        (7, LatenessTier::OneWeek),
        (13, LatenessTier::OneWeek),
        (14, LatenessTier::TwoWeeks),
        (21, LatenessTier::ThreeWeeks),
        (29, LatenessTier::ThreeWeeks),
        (30, LatenessTier::OneMonth),
        (59, LatenessTier::OneMonth),
        (60, LatenessTier::TwoMonths),
        (179, LatenessTier::TwoMonths),
        (180, LatenessTier::SixMonths),
        (364, LatenessTier::SixMonths),
        (365, LatenessTier::OverAYear),
        (2000, LatenessTier::OverAYear),
    ];
    for (days, tier) in cases {
        assert_eq!(LatenessTier::for_days(days), Some(tier), "{days} days");
    }
}

#[test]
fn test_category_never_exceeds_days_overdue() {
    let allowed = [0, 7, 14, 21, 30, 60, 180, 365];
    for days in 0..800 {
        let tier = LatenessTier::for_days(days).expect("due loans always have a tier");
        assert!(allowed.contains(&tier.threshold_days()));
        assert!(tier.threshold_days() <= days);
    }
    for days in -30..0 {
        assert_eq!(LatenessTier::for_days(days), None);
    }
}

#[test]
fn test_col_time_units() {
    assert_eq!(col_time(0.4), "0 semaines");
    assert_eq!(col_time(7.9), "7 semaines");
    assert_eq!(col_time(8.0), "2 mois");
    assert_eq!(col_time(30.0), "7 mois");
    assert_eq!(col_time(52.0), "1 ans");
    assert_eq!(col_time(130.0), "3 ans");
}

#[test]
fn test_report_buckets_most_overdue_first() {
    let snapshot = fixture();
    let report = late_report(&snapshot.loans, today());

    let tiers: Vec<LatenessTier> = report.buckets.iter().map(|b| b.tier).collect();
    assert_eq!(
        tiers,
        vec![
            LatenessTier::OverAYear,
            LatenessTier::OneWeek,
            LatenessTier::Due
        ]
    );
    assert_eq!(report.total(), 3);

    let year = report.bucket(LatenessTier::OverAYear).unwrap();
    assert_eq!(year.key(), 365);
    assert_eq!(year.label(), Some("Plus d'un an"));
    assert_eq!(year.loans[0].loan.id, 101);
    assert_eq!(year.loans[0].days_overdue, 405);
    assert_eq!(year.loans[0].col_time(), "1 ans");

    let week = report.bucket(LatenessTier::OneWeek).unwrap();
    assert_eq!(week.count(), 1);
    assert_eq!(week.loans[0].col_time(), "1 semaines");
}

#[test]
fn test_report_skips_closed_and_future_loans() {
    let snapshot = fixture();
    let report = late_report(&snapshot.loans, today());
    let ids: Vec<i64> = report
        .buckets
        .iter()
        .flat_map(|b| b.loans.iter().map(|l| l.loan.id))
        .collect();

    assert!(!ids.contains(&102), "future loan must not be listed");
    assert!(!ids.contains(&104), "returned loan must not be listed");
    assert!(!ids.contains(&105));
}

#[test]
fn test_report_is_a_partition_and_keeps_input_order() {
    let loans = vec![
        open_loan(1, "2024-06-01"),
        open_loan(2, "2024-06-10"),
        open_loan(3, "2024-05-31"),
        open_loan(4, "2024-06-29"),
    ];
    let report = late_report(&loans, today());

    let month = report.bucket(LatenessTier::OneMonth).unwrap();
    assert_eq!(month.loans.iter().map(|l| l.loan.id).collect::<Vec<_>>(), vec![3]);

    let three_weeks = report.bucket(LatenessTier::ThreeWeeks).unwrap();
    assert_eq!(
        three_weeks.loans.iter().map(|l| l.loan.id).collect::<Vec<_>>(),
        vec![1]
    );

    let two_weeks = report.bucket(LatenessTier::TwoWeeks).unwrap();
    assert_eq!(two_weeks.loans[0].loan.id, 2);

    assert_eq!(report.bucket(LatenessTier::Due).unwrap().loans[0].loan.id, 4);
    assert_eq!(report.total(), loans.len());
}

#[test]
fn test_empty_report() {
    let report = late_report(&[], today());
    assert!(report.is_empty());
    assert_eq!(report.total(), 0);
}

#[test]
fn test_interleaved_tiers_grouped_in_input_order() {
    let loans = vec![
        open_loan(10, "2024-06-20"),
        open_loan(11, "2022-01-01"),
        open_loan(12, "2024-06-21"),
        open_loan(13, "2023-01-01"),
        open_loan(14, "2024-06-19"),
    ];
    let report = late_report(&loans, today());

    let tiers: Vec<LatenessTier> = report.buckets.iter().map(|b| b.tier).collect();
    assert_eq!(tiers, vec![LatenessTier::OverAYear, LatenessTier::OneWeek]);

    let ids = |tier: LatenessTier| -> Vec<i64> {
        report
            .bucket(tier)
            .unwrap()
            .loans
            .iter()
            .map(|l| l.loan.id)
            .collect()
    };
    assert_eq!(ids(LatenessTier::OverAYear), vec![11, 13]);
    assert_eq!(ids(LatenessTier::OneWeek), vec![10, 12, 14]);
}
