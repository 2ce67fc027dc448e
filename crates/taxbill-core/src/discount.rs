//! Tiered discount on the total tax.
//!
//! The discount tier is selected from a data-driven ordered range table
//! rather than a conditional chain, so boundary policy lives in one place.
//! Total tax above the statutory limit is a rejection, not a 0% tier.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{types::*, BillingError, BillingResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Total tax above this amount is not eligible for a discounted bill.
const DISCOUNT_LIMIT: Decimal = dec!(7_000);

struct DiscountTier {
    /// Inclusive lower bound on total tax.
    floor: Decimal,
    /// Inclusive upper bound on total tax.
    ceiling: Decimal,
    percent: Percent,
}

/// Ordered ascending; first match wins. Interior floors repeat the previous
/// ceiling, which first-match-wins resolves to half-open upper ranges.
const DISCOUNT_TIERS: [DiscountTier; 4] = [
    DiscountTier {
        floor: dec!(100),
        ceiling: dec!(4_000),
        percent: 5,
    },
    DiscountTier {
        floor: dec!(4_000),
        ceiling: dec!(5_000),
        percent: 10,
    },
    DiscountTier {
        floor: dec!(5_000),
        ceiling: dec!(6_000),
        percent: 12,
    },
    DiscountTier {
        floor: dec!(6_000),
        ceiling: DISCOUNT_LIMIT,
        percent: 14,
    },
];

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountInput {
    /// Total tax from the tax assessment stage. Must be positive.
    pub total_tax: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillAfterDiscount {
    pub discount_percent: Percent,
    pub discount_amount: Money,
    pub bill_after_discount: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Select the discount tier for a total tax and net it off the bill.
pub fn calculate_discount(
    input: &DiscountInput,
) -> BillingResult<ComputationOutput<BillAfterDiscount>> {
    validate_input(input)?;

    if input.total_tax > DISCOUNT_LIMIT {
        return Err(BillingError::ExceedsDiscountLimit {
            total_tax: input.total_tax,
            limit: DISCOUNT_LIMIT,
        });
    }

    let mut warnings: Vec<String> = Vec::new();

    let discount_percent = select_tier(input.total_tax);
    if discount_percent == 0 {
        // Total tax in (0, 100) falls through every tier. Carried forward
        // from the source policy as a valid 0% outcome, not an error.
        warnings.push(format!(
            "Total tax {} is below the lowest discount tier; no discount applied.",
            input.total_tax
        ));
    }

    let discount_amount = input.total_tax * Decimal::from(discount_percent) / dec!(100);
    let bill_after_discount = input.total_tax - discount_amount;

    let output = BillAfterDiscount {
        discount_percent,
        discount_amount,
        bill_after_discount,
    };

    let assumptions = serde_json::json!({
        "discount_limit": DISCOUNT_LIMIT.to_string(),
        "tier_count": DISCOUNT_TIERS.len(),
    });

    Ok(with_metadata(
        "Tiered Total-Tax Discount",
        &assumptions,
        warnings,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn select_tier(total_tax: Decimal) -> Percent {
    DISCOUNT_TIERS
        .iter()
        .find(|t| total_tax >= t.floor && total_tax <= t.ceiling)
        .map(|t| t.percent)
        .unwrap_or(0)
}

fn validate_input(input: &DiscountInput) -> BillingResult<()> {
    if input.total_tax <= Decimal::ZERO {
        return Err(BillingError::InvalidInput {
            field: "total_tax".into(),
            reason: "Total tax must be greater than 0.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
