//! Late-loan report: open loans bucketed by how long ago they were due.

use crate::core::group::group_by;
use crate::models::Loan;
use chrono::NaiveDate;

/// Lateness category of an open loan past its due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LatenessTier {
    /// Due, but less than a week late. Grouped, never labelled.
    Due,
    OneWeek,
    TwoWeeks,
    ThreeWeeks,
    OneMonth,
    TwoMonths,
    SixMonths,
    OverAYear,
}

impl LatenessTier {
    /// Most overdue first: the order thresholds are tried in and the display order.
    pub const BY_SEVERITY: [LatenessTier; 8] = [
        LatenessTier::OverAYear,
        LatenessTier::SixMonths,
        LatenessTier::TwoMonths,
        LatenessTier::OneMonth,
        LatenessTier::ThreeWeeks,
        LatenessTier::TwoWeeks,
        LatenessTier::OneWeek,
        LatenessTier::Due,
    ];

    /// Minimum days overdue, also used as the bucket key.
    pub fn threshold_days(&self) -> i64 {
        match self {
            LatenessTier::Due => 0,
            LatenessTier::OneWeek => 7,
            LatenessTier::TwoWeeks => 14,
            LatenessTier::ThreeWeeks => 21,
            LatenessTier::OneMonth => 30,
            LatenessTier::TwoMonths => 60,
            LatenessTier::SixMonths => 180,
            LatenessTier::OverAYear => 365,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            LatenessTier::Due => None,
            LatenessTier::OneWeek => Some("1 semaine"),
            LatenessTier::TwoWeeks => Some("2 semaines"),
            LatenessTier::ThreeWeeks => Some("3 semaines"),
            LatenessTier::OneMonth => Some("1 mois"),
            LatenessTier::TwoMonths => Some("2 mois"),
            LatenessTier::SixMonths => Some("6 mois"),
            LatenessTier::OverAYear => Some("Plus d'un an"),
        }
    }

    /// Tier for a number of days overdue; `None` when not yet due.
    pub fn for_days(days_overdue: i64) -> Option<Self> {
        if days_overdue < 0 {
            return None;
        }
        Self::BY_SEVERITY
            .into_iter()
            .find(|t| days_overdue >= t.threshold_days())
    }
}

/// Whole days since `loan.stop`; negative while the loan is not yet due.
pub fn days_overdue(loan: &Loan, today: NaiveDate) -> i64 {
    (today - loan.stop).num_days()
}

pub fn categorize(loan: &Loan, today: NaiveDate) -> Option<LatenessTier> {
    LatenessTier::for_days(days_overdue(loan, today))
}

/// Display duration for a number of weeks overdue.
pub fn col_time(weeks: f64) -> String {
    if weeks >= 52.0 {
        format!("{} ans", (weeks / 52.0).round() as i64)
    } else if weeks >= 8.0 {
        format!("{} mois", (weeks / 4.0).floor() as i64)
    } else {
        format!("{} semaines", weeks.floor() as i64)
    }
}

/// A loan with its derived lateness values; the loan itself is untouched.
#[derive(Debug, Clone, Copy)]
pub struct LateLoan<'a> {
    pub loan: &'a Loan,
    pub days_overdue: i64,
}

impl LateLoan<'_> {
    pub fn weeks_overdue(&self) -> f64 {
        self.days_overdue as f64 / 7.0
    }

    pub fn col_time(&self) -> String {
        col_time(self.weeks_overdue())
    }
}

#[derive(Debug, Clone)]
pub struct LateBucket<'a> {
    pub tier: LatenessTier,
    pub loans: Vec<LateLoan<'a>>,
}

impl LateBucket<'_> {
    pub fn key(&self) -> i64 {
        self.tier.threshold_days()
    }

    pub fn count(&self) -> usize {
        self.loans.len()
    }

    pub fn label(&self) -> Option<&'static str> {
        self.tier.label()
    }
}

#[derive(Debug, Clone, Default)]
pub struct LateReport<'a> {
    /// Non-empty buckets, most overdue first.
    pub buckets: Vec<LateBucket<'a>>,
}

impl<'a> LateReport<'a> {
    pub fn bucket(&self, tier: LatenessTier) -> Option<&LateBucket<'a>> {
        self.buckets.iter().find(|b| b.tier == tier)
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Bucket the open loans that are due by `today`.
pub fn late_report(loans: &[Loan], today: NaiveDate) -> LateReport<'_> {
    let late = loans.iter().filter(|l| l.is_open()).filter_map(|loan| {
        let days = days_overdue(loan, today);
        LatenessTier::for_days(days).map(|tier| {
            let late = LateLoan {
                loan,
                days_overdue: days,
            };
            (tier, late)
        })
    });
    let groups = group_by(late, |(tier, _)| *tier);

    let buckets: Vec<LateBucket<'_>> = LatenessTier::BY_SEVERITY
        .into_iter()
        .filter_map(|tier| {
            groups.get(&tier).map(|entries| LateBucket {
                tier,
                loans: entries.iter().map(|(_, late)| *late).collect(),
            })
        })
        .collect();

    tracing::debug!(
        buckets = buckets.len(),
        loans = buckets.iter().map(|b| b.count()).sum::<usize>(),
        "late report built"
    );

    LateReport { buckets }
}
