use serde_json::Value;

/// Flatten a JSON object into (dotted-key, display-value) rows.
///
/// Bill statements nest one object per stage (tax, discount, fine), so the
/// tabular formatters render e.g. `fine.final_amount` rather than a blob.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    collect("", value, &mut rows);
    rows
}

fn collect(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                collect(&path, val, rows);
            }
        }
        other => rows.push((prefix.to_string(), display_value(other))),
    }
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_stage_objects() {
        let value = json!({
            "customer_id": "C-1042",
            "fine": { "final_amount": "1070.72", "days_late": 19 }
        });
        let rows = flatten(&value);
        assert_eq!(
            rows,
            vec![
                ("customer_id".to_string(), "C-1042".to_string()),
                ("fine.days_late".to_string(), "19".to_string()),
                ("fine.final_amount".to_string(), "1070.72".to_string()),
            ]
        );
    }

    #[test]
    fn scalar_becomes_single_unnamed_row() {
        let rows = flatten(&json!("12160"));
        assert_eq!(rows, vec![(String::new(), "12160".to_string())]);
    }
}
