use serde_json::Value;

use super::flatten;

/// Print just the key answer value from the output.
///
/// Heuristic: flatten the result section and look for well-known billing
/// fields in order of priority (the deepest stage that ran wins), then
/// fall back to the first field.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let rows = flatten::flatten(result);

    // Final payable first, then each upstream stage's headline number
    let priority_keys = [
        "final_amount",
        "fine_amount",
        "bill_after_discount",
        "discount_amount",
        "total_tax",
    ];

    for key in &priority_keys {
        if let Some((_, val)) = rows
            .iter()
            .find(|(field, _)| field == key || field.ends_with(&format!(".{key}")))
        {
            println!("{}", val);
            return;
        }
    }

    match rows.first() {
        Some((field, val)) if field.is_empty() => println!("{}", val),
        Some((field, val)) => println!("{}: {}", field, val),
        None => println!("{}", flatten::display_value(result)),
    }
}
