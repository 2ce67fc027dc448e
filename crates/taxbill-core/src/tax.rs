//! Tax assessment for a municipal tariff bill.
//!
//! Derives the house, maintenance, and drainage tax components from a base
//! tariff and sums them (with the base) into the total tax owed. Drainage
//! tax compounds on the house tax, so the composition collapses to a flat
//! 1.2160 multiplier on the base tariff.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{types::*, BillingError, BillingResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const HOUSE_TAX_RATE: Decimal = dec!(0.10);
const MAINTENANCE_TAX_RATE: Decimal = dec!(0.05);
const DRAINAGE_TAX_RATE: Decimal = dec!(0.06);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxInput {
    /// Base tariff the tax components are assessed on. Must be positive.
    pub base_tariff: Money,
}

/// Derived tax components, exact (no rounding until display).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub house_tax: Money,
    pub maintenance_tax: Money,
    /// Assessed on base plus house tax, not on base alone.
    pub drainage_tax: Money,
    /// Base tariff plus all three components.
    pub total_tax: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Assess the tax components on a base tariff and total them.
pub fn calculate_tax(input: &TaxInput) -> BillingResult<ComputationOutput<TaxBreakdown>> {
    validate_input(input)?;

    let base = input.base_tariff;
    let house_tax = base * HOUSE_TAX_RATE;
    let maintenance_tax = base * MAINTENANCE_TAX_RATE;
    let drainage_tax = (base + house_tax) * DRAINAGE_TAX_RATE;
    let total_tax = base + house_tax + maintenance_tax + drainage_tax;

    let output = TaxBreakdown {
        house_tax,
        maintenance_tax,
        drainage_tax,
        total_tax,
    };

    let assumptions = serde_json::json!({
        "house_tax_rate": HOUSE_TAX_RATE.to_string(),
        "maintenance_tax_rate": MAINTENANCE_TAX_RATE.to_string(),
        "drainage_tax_rate": DRAINAGE_TAX_RATE.to_string(),
    });

    Ok(with_metadata(
        "Municipal Tariff Tax Assessment",
        &assumptions,
        Vec::new(),
        output,
    ))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn validate_input(input: &TaxInput) -> BillingResult<()> {
    if input.base_tariff <= Decimal::ZERO {
        return Err(BillingError::InvalidInput {
            field: "base_tariff".into(),
            reason: "Base tariff must be greater than 0.".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
