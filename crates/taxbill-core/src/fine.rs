//! Late-payment fine on the discounted bill.
//!
//! A payment is only fineable when it lands strictly after the due date;
//! paying on the due date is not "zero days late", it is not late at all
//! and is rejected by this resolver. Any advance already paid is netted
//! off the final amount, which may legitimately go negative.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{types::*, BillingError, BillingResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

struct FineTier {
    /// Inclusive upper bound on days late.
    max_days_late: i64,
    percent: Percent,
}

/// Ordered ascending; first tier whose bound covers the lateness wins.
const FINE_TIERS: [FineTier; 2] = [
    FineTier {
        max_days_late: 30,
        percent: 10,
    },
    FineTier {
        max_days_late: 60,
        percent: 15,
    },
];

/// Applied beyond the last bounded tier (61 days late or more).
const FINE_PERCENT_BEYOND: Percent = 25;

const SECONDS_PER_DAY: i64 = 86_400;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineInput {
    /// Net bill from the discount stage. Must be positive.
    pub bill_after_discount: Money,
    /// Last date the bill could be paid without a fine.
    pub due_date: NaiveDate,
    /// Date the payment was actually made.
    pub payment_date: NaiveDate,
    /// Prepayment netted off the final amount. Absent means zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_amount: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentFine {
    pub days_late: i64,
    pub fine_percent: Percent,
    pub fine_amount: Money,
    /// Bill plus fine minus advance. Negative when the advance exceeds
    /// bill plus fine; reported as-is, never clamped.
    pub final_amount: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Assess the late-payment fine and the final payable amount.
pub fn calculate_fine(input: &FineInput) -> BillingResult<ComputationOutput<PaymentFine>> {
    validate_input(input)?;

    let mut warnings: Vec<String> = Vec::new();

    let days_late = days_late(input.due_date, input.payment_date);
    let fine_percent = select_tier(days_late);

    let fine_amount = input.bill_after_discount * Decimal::from(fine_percent) / dec!(100);
    let advance = input.advance_amount.unwrap_or(Decimal::ZERO);
    let final_amount = input.bill_after_discount + fine_amount - advance;

    if final_amount < Decimal::ZERO {
        warnings.push(format!(
            "Advance {} exceeds bill plus fine; final amount is negative.",
            advance
        ));
    }

    let output = PaymentFine {
        days_late,
        fine_percent,
        fine_amount,
        final_amount,
    };

    let assumptions = serde_json::json!({
        "advance_amount": advance.to_string(),
        "partial_day_counts_as_late_day": true,
    });

    Ok(with_metadata(
        "Late-Payment Fine Assessment",
        &assumptions,
        warnings,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Whole days late, ceiling. A partial day counts as a full day late; for
/// pure dates the elapsed duration is always whole days and this is exact.
/// The elapsed duration is positive here; validation rejects payments on or
/// before the due date.
fn days_late(due_date: NaiveDate, payment_date: NaiveDate) -> i64 {
    let elapsed = payment_date.signed_duration_since(due_date);
    (elapsed.num_seconds() + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
}

fn select_tier(days_late: i64) -> Percent {
    FINE_TIERS
        .iter()
        .find(|t| days_late <= t.max_days_late)
        .map(|t| t.percent)
        .unwrap_or(FINE_PERCENT_BEYOND)
}

fn validate_input(input: &FineInput) -> BillingResult<()> {
    if input.bill_after_discount <= Decimal::ZERO {
        return Err(BillingError::InvalidInput {
            field: "bill_after_discount".into(),
            reason: "Bill after discount must be greater than 0.".into(),
        });
    }
    if input.payment_date <= input.due_date {
        return Err(BillingError::PaymentNotLate {
            due_date: input.due_date,
            payment_date: input.payment_date,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rust_decimal_macros::dec;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn input_late_by(days: u64) -> FineInput {
        FineInput {
            bill_after_discount: dec!(1_000),
            due_date: due(),
            payment_date: due().checked_add_days(Days::new(days)).unwrap(),
            advance_amount: None,
        }
    }

    #[test]
    fn test_fine_tier_boundaries() {
        let cases = [(1, 10), (30, 10), (31, 15), (60, 15), (61, 25), (400, 25)];
        for (days, expected) in cases {
            let result = calculate_fine(&input_late_by(days)).unwrap();
            assert_eq!(result.result.days_late, days as i64);
            assert_eq!(result.result.fine_percent, expected, "days late = {days}");
        }
    }

    #[test]
    fn test_days_late_matches_calendar_day_count() {
        // Whole-date inputs must come out exact (no off-by-one from the
        // ceiling), including across month and leap-day boundaries.
        for days in [1, 28, 29, 59, 60, 61, 90, 365] {
            let payment_date = due().checked_add_days(Days::new(days)).unwrap();
            let result = calculate_fine(&FineInput {
                bill_after_discount: dec!(1_000),
                due_date: due(),
                payment_date,
                advance_amount: None,
            })
            .unwrap();
            assert_eq!(
                result.result.days_late,
                payment_date.signed_duration_since(due()).num_days(),
                "days = {days}"
            );
        }
    }

    #[test]
    fn test_payment_on_due_date_rejected() {
        let err = calculate_fine(&input_late_by(0)).unwrap_err();
        match err {
            BillingError::PaymentNotLate {
                due_date,
                payment_date,
            } => assert_eq!(due_date, payment_date),
            other => panic!("Expected PaymentNotLate, got {other:?}"),
        }
    }

    #[test]
    fn test_payment_before_due_date_rejected() {
        let input = FineInput {
            bill_after_discount: dec!(1_000),
            due_date: due(),
            payment_date: NaiveDate::from_ymd_opt(2023, 12, 15).unwrap(),
            advance_amount: None,
        };
        let err = calculate_fine(&input).unwrap_err();
        assert!(matches!(err, BillingError::PaymentNotLate { .. }));
    }

    #[test]
    fn test_fine_and_final_amounts_exact() {
        // 19 days late: 10% tier on 1153.87, advance 200
        let input = FineInput {
            bill_after_discount: dec!(1_153.87),
            due_date: due(),
            payment_date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            advance_amount: Some(dec!(200)),
        };
        let result = calculate_fine(&input).unwrap();
        let out = &result.result;

        assert_eq!(out.days_late, 19);
        assert_eq!(out.fine_percent, 10);
        assert_eq!(out.fine_amount, dec!(115.387));
        assert_eq!(out.final_amount, dec!(1_069.257));

        // Display layers quote to the paisa
        assert_eq!(crate::types::round_half_up(out.fine_amount), dec!(115.39));
        assert_eq!(
            crate::types::round_half_up(out.final_amount),
            dec!(1_069.26)
        );
    }

    #[test]
    fn test_missing_advance_defaults_to_zero() {
        let result = calculate_fine(&input_late_by(10)).unwrap();
        // 1000 + 100 - 0
        assert_eq!(result.result.final_amount, dec!(1_100));
    }

    #[test]
    fn test_advance_beyond_bill_goes_negative_with_warning() {
        let mut input = input_late_by(10);
        input.advance_amount = Some(dec!(2_000));
        let result = calculate_fine(&input).unwrap();
        assert_eq!(result.result.final_amount, dec!(-900));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_non_positive_bill_rejected() {
        let mut input = input_late_by(10);
        input.bill_after_discount = Decimal::ZERO;
        let err = calculate_fine(&input).unwrap_err();
        match err {
            BillingError::InvalidInput { field, .. } => assert_eq!(field, "bill_after_discount"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let input = input_late_by(45);
        assert_eq!(
            calculate_fine(&input).unwrap(),
            calculate_fine(&input).unwrap()
        );
    }
}
