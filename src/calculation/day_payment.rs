//! Day payment calculation.
//!
//! This module prices one worked interval against a day category's tier
//! table. An interval that lies inside one tier is priced at that tier's
//! rate. An interval that starts in one tier and ends in the next is split
//! at the first tier's end and each piece is priced on its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{TIER_COUNT, TierTable};
use crate::models::{TimeOfDay, WarningKind};

use super::elapsed_hours::elapsed_hours;
use super::tier_boundary::{Bound, satisfies_boundary};

/// Deepest split recursion allowed before a branch is priced at zero.
///
/// A well-formed table never splits more than once. Tables whose end
/// boundaries carry a non-zero minute can make a piece split again forever;
/// this bound stops that.
pub const MAX_SPLIT_DEPTH: usize = TIER_COUNT;

/// How an interval was matched against the tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierResolution {
    /// The whole interval fell inside one tier (the last match, if several).
    Single {
        /// Index of the tier used.
        tier: usize,
    },
    /// The interval was split at the end of `tier` and the start of the next.
    Split {
        /// Index of the tier the interval started in.
        tier: usize,
    },
    /// No tier and no split matched; the interval was priced at zero.
    Unmatched,
    /// A time field was out of range or the interval ended before it
    /// started; the interval was priced at zero.
    Invalid,
}

/// The result of pricing one interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalPay {
    /// Amount owed for the interval. Never negative.
    pub amount: Decimal,
    /// How the top-level interval was matched.
    pub resolution: TierResolution,
    /// Problems found while pricing the interval or its split pieces.
    pub issues: Vec<WarningKind>,
}

/// Calculates the amount owed for one interval.
///
/// Shorthand for [`resolve_interval`] when only the amount is needed.
///
/// # Example
///
/// ```
/// use shift_payroll::calculation::{pay_for_interval, DayCategory};
/// use shift_payroll::config::PayrollConfig;
/// use shift_payroll::models::TimeOfDay;
/// use rust_decimal::Decimal;
///
/// let config = PayrollConfig::standard();
/// let tiers = config.tiers(DayCategory::Weekday);
///
/// // 09:01-18:00 at 15/h
/// let pay = pay_for_interval(TimeOfDay::new(10, 30), TimeOfDay::new(15, 30), tiers);
/// assert_eq!(pay, Decimal::new(75, 0));
///
/// // 7.5h at 15/h plus 1.48h at 20/h
/// let pay = pay_for_interval(TimeOfDay::new(10, 30), TimeOfDay::new(19, 30), tiers);
/// assert_eq!(pay, Decimal::new(14210, 2));
/// ```
pub fn pay_for_interval(start: TimeOfDay, end: TimeOfDay, tiers: &TierTable) -> Decimal {
    resolve_interval(start, end, tiers).amount
}

/// Prices one interval and reports how it was matched.
///
/// # Algorithm
///
/// 1. Single-tier pass: every tier whose start the interval's start passes
///    (lower bound) and whose end the interval's end passes (upper bound) is
///    a match. The last match wins. The amount is
///    `elapsed_hours(start, end) * rate`.
/// 2. Split pass, only when nothing matched: for each tier `i`, take the
///    next tier's boundaries (see below). If the start passes tier `i`'s
///    lower bound and the end passes the next tier's upper bound, the amount
///    is `price(start, tier[i].end) + price(next_start, end)`. The first
///    such split is used.
/// 3. Otherwise the amount is zero and `NoMatchingTier` is reported.
///
/// An interval with an out-of-range field, or one that ends before it
/// starts, is never matched: it is priced at zero and `InvalidTimeValue` is
/// reported.
///
/// For the last tier the "next" boundaries wrap asymmetrically:
/// `tiers[0].start` is the restart point and `tiers[1].start` is the end
/// check, not `tiers[0].end`.
pub fn resolve_interval(start: TimeOfDay, end: TimeOfDay, tiers: &TierTable) -> IntervalPay {
    if !TimeOfDay::is_valid_span(start, end) {
        debug!(%start, %end, "Invalid interval, pricing at zero");
        return IntervalPay {
            amount: Decimal::ZERO,
            resolution: TierResolution::Invalid,
            issues: vec![WarningKind::InvalidTimeValue],
        };
    }

    let mut issues = Vec::new();
    let (amount, resolution) = resolve(start, end, tiers, 0, &mut issues);

    IntervalPay {
        amount,
        resolution,
        issues,
    }
}

fn resolve(
    start: TimeOfDay,
    end: TimeOfDay,
    tiers: &TierTable,
    depth: usize,
    issues: &mut Vec<WarningKind>,
) -> (Decimal, TierResolution) {
    if depth > MAX_SPLIT_DEPTH {
        warn!(%start, %end, depth, "Split recursion too deep, pricing piece at zero");
        issues.push(WarningKind::SplitDepthExceeded);
        return (Decimal::ZERO, TierResolution::Unmatched);
    }

    let matches: Vec<usize> = tiers
        .iter()
        .enumerate()
        .filter(|(_, tier)| {
            satisfies_boundary(start, tier.start, Bound::Lower)
                && satisfies_boundary(end, tier.end, Bound::Upper)
        })
        .map(|(index, _)| index)
        .collect();

    if let Some(&tier) = matches.last() {
        if matches.len() > 1 {
            warn!(%start, %end, ?matches, "Interval matches several tiers, using the last");
            issues.push(WarningKind::AmbiguousTier);
        }

        let hours = elapsed_hours(start, end);
        let amount = hours * tiers[tier].rate;
        debug!(%start, %end, tier, %hours, %amount, "Priced interval in a single tier");
        return (amount, TierResolution::Single { tier });
    }

    for (index, tier) in tiers.iter().enumerate() {
        let (next_start, next_end) = next_tier_bounds(tiers, index);

        if satisfies_boundary(start, tier.start, Bound::Lower)
            && satisfies_boundary(end, next_end, Bound::Upper)
        {
            debug!(%start, %end, tier = index, split_at = %tier.end, "Splitting interval");
            let (first, _) = resolve(start, tier.end, tiers, depth + 1, issues);
            let (second, _) = resolve(next_start, end, tiers, depth + 1, issues);
            return (first + second, TierResolution::Split { tier: index });
        }
    }

    warn!(%start, %end, "Interval matches no tier, pricing at zero");
    issues.push(WarningKind::NoMatchingTier);
    (Decimal::ZERO, TierResolution::Unmatched)
}

/// Returns the restart point and end boundary of the tier after `index`.
fn next_tier_bounds(tiers: &TierTable, index: usize) -> (TimeOfDay, TimeOfDay) {
    if index + 1 == tiers.len() {
        (tiers[0].start, tiers[1].start)
    } else {
        let next = &tiers[index + 1];
        (next.start, next.end)
    }
}
