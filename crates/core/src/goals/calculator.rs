//! Savings ledger calculator.
//!
//! Pure functions over goal and funding-link data supplied by the caller.
//! No I/O, no logging, no shared state; safe to call concurrently. The
//! orchestration that feeds these functions from repositories lives in
//! [`GoalService`](crate::goals::GoalService).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goals_model::{FundingLink, SavingsGoal};
use crate::money::Currency;
use crate::utils::time_utils::whole_months_between;

/// Sums the saved amount over a goal's funding links.
///
/// With an account filter, only links attributed to that account count.
/// Returns exact zero when no links exist or none match. Exact decimal
/// addition makes the result independent of summation order.
pub fn current_amount(links: &[FundingLink], account_id: Option<&str>) -> Decimal {
    links
        .iter()
        .filter(|link| account_id.map_or(true, |id| link.account_id == id))
        .map(|link| link.current_amount)
        .sum()
}

/// Suggested amount to save per month to reach the goal's target by its
/// target date.
///
/// Returns zero when the goal has no target date or is already met. With a
/// future start date the projection counts from that date instead of
/// `today`. The division result is rounded to the goal currency's decimal
/// places, half away from zero.
pub fn suggested_monthly_amount(
    goal: &SavingsGoal,
    current_amount: Decimal,
    today: NaiveDate,
    currency: &Currency,
) -> Decimal {
    let target_date = match goal.target_date {
        Some(date) if current_amount < goal.target_amount => date,
        _ => return Decimal::ZERO,
    };

    let start_date = match goal.start_date {
        Some(start) if start >= today => start,
        _ => today,
    };
    let months = whole_months_between(start_date, target_date);
    let remaining = goal.target_amount - current_amount;

    if remaining <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if months > 0 {
        // More than a month to go and still money to save.
        return currency.round(remaining / Decimal::from(months));
    }
    // Less than a month to go: pay it all now.
    remaining
}

/// Restricts a proposed contribution or withdrawal to what the goal can
/// absorb.
///
/// A deposit may not push the saved amount past the target; a withdrawal
/// may not take out more than has been saved. An unbounded goal (target of
/// zero) accepts any deposit. Amounts within bounds pass through unchanged.
pub fn clamp_contribution(
    current_amount: Decimal,
    target_amount: Decimal,
    proposed: Decimal,
) -> Decimal {
    let room = if target_amount.is_zero() {
        proposed.abs()
    } else {
        target_amount - current_amount
    };
    // Maximum that can be withdrawn.
    let available = -current_amount;

    if proposed > Decimal::ZERO && proposed > room {
        return room;
    }
    if proposed < Decimal::ZERO && proposed < available {
        return available;
    }
    proposed
}

/// Direction of a ledger transaction relative to a goal's account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowDirection {
    /// Money flows into the goal's account.
    Credit,
    /// Money flows out of the goal's account.
    Debit,
}

impl FlowDirection {
    /// Normalizes a raw transaction amount to the sign implied by the
    /// direction: credits are positive, debits negative.
    pub fn signed_amount(self, raw: Decimal) -> Decimal {
        match self {
            FlowDirection::Credit => raw.abs(),
            FlowDirection::Debit => -raw.abs(),
        }
    }
}

/// Clamps a raw transaction amount after normalizing its sign for the
/// given flow direction.
pub fn clamp_transaction(
    current_amount: Decimal,
    target_amount: Decimal,
    raw_amount: Decimal,
    direction: FlowDirection,
) -> Decimal {
    clamp_contribution(
        current_amount,
        target_amount,
        direction.signed_amount(raw_amount),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn link(account_id: &str, amount: Decimal) -> FundingLink {
        FundingLink {
            goal_id: "goal-1".to_string(),
            account_id: account_id.to_string(),
            current_amount: amount,
        }
    }

    fn goal(
        target: Decimal,
        target_date: Option<NaiveDate>,
        start_date: Option<NaiveDate>,
    ) -> SavingsGoal {
        SavingsGoal {
            id: "goal-1".to_string(),
            name: "Vacation".to_string(),
            target_amount: target,
            target_date,
            start_date,
            currency: "EUR".to_string(),
            order: 1,
            object_group: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== current_amount ====================

    #[test]
    fn test_current_amount_no_links_is_zero() {
        assert_eq!(current_amount(&[], None), Decimal::ZERO);
    }

    #[test]
    fn test_current_amount_sums_all_links() {
        let links = vec![
            link("acc-1", dec!(10.10)),
            link("acc-2", dec!(20.20)),
            link("acc-3", dec!(0.03)),
        ];
        assert_eq!(current_amount(&links, None), dec!(30.33));
    }

    #[test]
    fn test_current_amount_filters_by_account() {
        let links = vec![
            link("acc-1", dec!(10)),
            link("acc-2", dec!(20)),
            link("acc-1", dec!(5)),
        ];
        assert_eq!(current_amount(&links, Some("acc-1")), dec!(15));
        assert_eq!(current_amount(&links, Some("acc-9")), Decimal::ZERO);
    }

    // ==================== suggested_monthly_amount ====================

    #[test]
    fn test_suggestion_twelve_months_out() {
        let g = goal(
            dec!(1200.00),
            Some(date(2025, 1, 15)),
            Some(date(2024, 1, 15)),
        );
        // Start date is in the past, so counting starts today.
        let suggested =
            suggested_monthly_amount(&g, dec!(0.00), date(2024, 1, 15), &Currency::known("EUR"));
        assert_eq!(suggested.to_string(), "100.00");
    }

    #[test]
    fn test_suggestion_zero_when_target_met() {
        let g = goal(dec!(500.00), Some(date(2025, 1, 1)), None);
        let suggested =
            suggested_monthly_amount(&g, dec!(500.00), date(2024, 1, 1), &Currency::known("EUR"));
        assert_eq!(suggested, Decimal::ZERO);
    }

    #[test]
    fn test_suggestion_zero_without_target_date() {
        let g = goal(dec!(500.00), None, None);
        let suggested =
            suggested_monthly_amount(&g, dec!(10.00), date(2024, 1, 1), &Currency::known("EUR"));
        assert_eq!(suggested, Decimal::ZERO);
    }

    #[test]
    fn test_suggestion_final_month_pays_remainder() {
        let g = goal(dec!(100.00), Some(date(2024, 1, 20)), None);
        let suggested =
            suggested_monthly_amount(&g, dec!(50.00), date(2024, 1, 5), &Currency::known("EUR"));
        assert_eq!(suggested.to_string(), "50.00");
    }

    #[test]
    fn test_suggestion_rounds_half_away_from_zero() {
        let g = goal(dec!(1000.00), Some(date(2024, 8, 1)), None);
        // Seven whole months from Jan 1 to Aug 1.
        let suggested =
            suggested_monthly_amount(&g, dec!(0.00), date(2024, 1, 1), &Currency::known("EUR"));
        assert_eq!(suggested.to_string(), "142.86");
    }

    #[test]
    fn test_suggestion_future_start_date_shortens_window() {
        let g = goal(
            dec!(600.00),
            Some(date(2025, 1, 1)),
            Some(date(2024, 7, 1)),
        );
        let suggested =
            suggested_monthly_amount(&g, dec!(0.00), date(2024, 1, 1), &Currency::known("EUR"));
        // Six months from the future start date, not twelve from today.
        assert_eq!(suggested.to_string(), "100.00");
    }

    #[test]
    fn test_suggestion_zero_when_overshot() {
        let g = goal(dec!(100.00), Some(date(2025, 1, 1)), None);
        let suggested =
            suggested_monthly_amount(&g, dec!(150.00), date(2024, 1, 1), &Currency::known("EUR"));
        assert_eq!(suggested, Decimal::ZERO);
    }

    // ==================== clamp_contribution ====================

    #[test]
    fn test_clamp_deposit_to_room() {
        assert_eq!(clamp_contribution(dec!(80), dec!(100), dec!(50)), dec!(20));
    }

    #[test]
    fn test_clamp_withdrawal_to_available() {
        assert_eq!(
            clamp_contribution(dec!(30), dec!(100), dec!(-50)),
            dec!(-30)
        );
    }

    #[test]
    fn test_clamp_passes_through_in_bounds() {
        assert_eq!(clamp_contribution(dec!(30), dec!(100), dec!(10)), dec!(10));
        assert_eq!(clamp_contribution(dec!(30), dec!(100), dec!(-10)), dec!(-10));
    }

    #[test]
    fn test_clamp_unbounded_goal_accepts_any_deposit() {
        assert_eq!(
            clamp_contribution(dec!(9999), dec!(0), dec!(123.45)),
            dec!(123.45)
        );
    }

    #[test]
    fn test_clamp_unbounded_goal_still_limits_withdrawal() {
        assert_eq!(clamp_contribution(dec!(4), dec!(0), dec!(-10)), dec!(-4));
    }

    // ==================== FlowDirection ====================

    #[test]
    fn test_flow_direction_normalizes_sign() {
        assert_eq!(FlowDirection::Credit.signed_amount(dec!(-12)), dec!(12));
        assert_eq!(FlowDirection::Debit.signed_amount(dec!(12)), dec!(-12));
    }

    #[test]
    fn test_clamp_transaction_dispatches_on_direction() {
        assert_eq!(
            clamp_transaction(dec!(80), dec!(100), dec!(50), FlowDirection::Credit),
            dec!(20)
        );
        assert_eq!(
            clamp_transaction(dec!(30), dec!(100), dec!(50), FlowDirection::Debit),
            dec!(-30)
        );
    }

    // ==================== properties ====================

    fn small_amount() -> impl Strategy<Value = Decimal> {
        // Cents in [-10_000.00, 10_000.00]
        (-1_000_000i64..=1_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #[test]
        fn prop_current_amount_is_order_independent(
            amounts in proptest::collection::vec(small_amount(), 0..8)
        ) {
            let links: Vec<FundingLink> = amounts
                .iter()
                .enumerate()
                .map(|(i, a)| link(&format!("acc-{i}"), *a))
                .collect();
            let mut reversed = links.clone();
            reversed.reverse();
            prop_assert_eq!(current_amount(&links, None), current_amount(&reversed, None));
        }

        #[test]
        fn prop_clamped_deposit_never_exceeds_room(
            current in small_amount().prop_map(|a| a.abs()),
            target in small_amount().prop_map(|a| a.abs()),
            proposed in small_amount()
        ) {
            let clamped = clamp_contribution(current, target, proposed);
            if !target.is_zero() && proposed > Decimal::ZERO {
                prop_assert!(clamped <= target - current);
            }
            if proposed < Decimal::ZERO {
                prop_assert!(clamped >= -current);
            }
        }
    }
}
