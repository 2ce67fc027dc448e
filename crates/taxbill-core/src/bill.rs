//! Whole-bill orchestration: tax, then discount, then fine.
//!
//! Each stage is the pure resolver from its own module; this wrapper only
//! sequences them and merges their warnings. The fine stage is optional at
//! this level: a bill computed before any payment exists simply stops after
//! the discount.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::discount::{self, BillAfterDiscount, DiscountInput};
use crate::fine::{self, FineInput, PaymentFine};
use crate::tax::{self, TaxBreakdown, TaxInput};
use crate::{types::*, BillingError, BillingResult};

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub base_tariff: Money,
    /// Fine stage runs only when both dates are provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advance_amount: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillStatement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    pub tax: TaxBreakdown,
    pub discount: BillAfterDiscount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine: Option<PaymentFine>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the full billing pipeline over one input record.
pub fn calculate_bill(input: &BillInput) -> BillingResult<ComputationOutput<BillStatement>> {
    let mut warnings: Vec<String> = Vec::new();

    let tax = tax::calculate_tax(&TaxInput {
        base_tariff: input.base_tariff,
    })?;
    warnings.extend(tax.warnings);

    let discount = discount::calculate_discount(&DiscountInput {
        total_tax: tax.result.total_tax,
    })?;
    warnings.extend(discount.warnings);

    let fine = match (input.due_date, input.payment_date) {
        (Some(due_date), Some(payment_date)) => {
            let fine = fine::calculate_fine(&FineInput {
                bill_after_discount: discount.result.bill_after_discount,
                due_date,
                payment_date,
                advance_amount: input.advance_amount,
            })?;
            warnings.extend(fine.warnings);
            Some(fine.result)
        }
        (None, None) => None,
        _ => {
            return Err(BillingError::StageNotReady {
                stage: "fine",
                missing: "both due date and payment date",
            });
        }
    };

    let output = BillStatement {
        customer_id: input.customer_id.clone(),
        tax: tax.result,
        discount: discount.result,
        fine,
    };

    let assumptions = serde_json::json!({
        "fine_assessed": output.fine.is_some(),
    });

    Ok(with_metadata(
        "Municipal Tariff Bill (tax, discount, fine)",
        &assumptions,
        warnings,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
