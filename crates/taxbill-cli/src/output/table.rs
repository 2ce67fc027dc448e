use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::flatten;

/// Format output as a field/value table using the tabled crate.
///
/// The "result" section of the envelope becomes the table body; warnings
/// and methodology are printed as a footer.
pub fn print_table(value: &Value) {
    let envelope = value.as_object();
    let result = envelope
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let rows = flatten::flatten(result);
    if rows.is_empty() {
        println!("(empty)");
    } else {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (field, val) in &rows {
            builder.push_record([field.as_str(), val.as_str()]);
        }
        println!("{}", Table::from(builder));
    }

    let Some(envelope) = envelope else {
        return;
    };

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}
