use colored::Colorize;
use serde_json::Value;

/// Key answer fields, in priority order across the different commands.
const PRIORITY_KEYS: [&str; 5] = [
    "eligible",
    "recommended_path",
    "monthly_instalment",
    "foir_pct",
    "count",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result_obj {
        for key in &PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(key, val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(key, val));
            return;
        }
    }

    println!("{}", result_obj);
}

fn format_minimal(key: &str, value: &Value) -> String {
    match value {
        Value::Bool(b) if key == "eligible" => {
            if *b {
                "ELIGIBLE".green().bold().to_string()
            } else {
                "INELIGIBLE".red().bold().to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
