use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use taxbill_core::bill::{self, BillInput};

use crate::input;

/// Arguments for the full billing pipeline
#[derive(Args)]
pub struct BillArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Customer the bill is addressed to
    #[arg(long)]
    pub customer_id: Option<String>,

    /// Base tariff the bill is assessed on
    #[arg(long)]
    pub base_tariff: Option<Decimal>,

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

pub fn run_bill(args: BillArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let bill_input: BillInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        BillInput {
            customer_id: args.customer_id,
            base_tariff: args
                .base_tariff
                .ok_or("--base-tariff is required (or provide --input)")?,
            due_date: args.due_date,
            payment_date: args.payment_date,
            advance_amount: args.advance_amount,
        }
    };

    let result = bill::calculate_bill(&bill_input)?;
    Ok(serde_json::to_value(result)?)
}
