use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use taxbill_core::fine::{self, FineInput};

use crate::input;

/// Arguments for late-payment fine assessment
#[derive(Args)]
pub struct FineArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Net bill from the discount stage
    #[arg(long)]
    pub bill_after_discount: Option<Decimal>,

    /// Last date the bill could be paid without a fine (YYYY-MM-DD)
    #[arg(long)]
    pub due_date: Option<NaiveDate>,

    /// Date the payment was actually made (YYYY-MM-DD)
    #[arg(long)]
    pub payment_date: Option<NaiveDate>,

    /// Advance already paid, netted off the final amount
    #[arg(long)]
    pub advance_amount: Option<Decimal>,
}

pub fn run_fine(args: FineArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fine_input: FineInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        FineInput {
            bill_after_discount: args
                .bill_after_discount
                .ok_or("--bill-after-discount is required (or provide --input)")?,
            due_date: args
                .due_date
                .ok_or("--due-date is required (or provide --input)")?,
            payment_date: args
                .payment_date
                .ok_or("--payment-date is required (or provide --input)")?,
            advance_amount: args.advance_amount,
        }
    };

    let result = fine::calculate_fine(&fine_input)?;
    Ok(serde_json::to_value(result)?)
}
