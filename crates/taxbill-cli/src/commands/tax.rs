use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use taxbill_core::tax::{self, TaxInput};

use crate::input;

/// Arguments for tax assessment
#[derive(Args)]
pub struct TaxArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Base tariff the bill is assessed on
    #[arg(long)]
    pub base_tariff: Option<Decimal>,
}

pub fn run_tax(args: TaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_input: TaxInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        TaxInput {
            base_tariff: args
                .base_tariff
                .ok_or("--base-tariff is required (or provide --input)")?,
        }
    };

    let result = tax::calculate_tax(&tax_input)?;
    Ok(serde_json::to_value(result)?)
}
