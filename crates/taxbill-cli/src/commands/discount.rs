use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use taxbill_core::discount::{self, DiscountInput};

use crate::input;

/// Arguments for the tiered discount
#[derive(Args)]
pub struct DiscountArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Total tax from the tax assessment stage
    #[arg(long)]
    pub total_tax: Option<Decimal>,
}

pub fn run_discount(args: DiscountArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let discount_input: DiscountInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        DiscountInput {
            total_tax: args
                .total_tax
                .ok_or("--total-tax is required (or provide --input)")?,
        }
    };

    let result = discount::calculate_discount(&discount_input)?;
    Ok(serde_json::to_value(result)?)
}
