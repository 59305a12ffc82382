use colored::Colorize;
use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format the output envelope as tables: scalar result fields first, then
/// each nested array (verdicts, projection, risk flags, records) as its own
/// table.
pub fn print_table(value: &Value) {
    let Value::Object(envelope) = value else {
        println!("{}", value);
        return;
    };

    let result = envelope.get("result").unwrap_or(value);

    match result {
        Value::Object(res_map) => {
            print_scalar_fields(res_map);
            for (key, val) in res_map {
                if let Value::Array(rows) = val {
                    if !rows.is_empty() {
                        println!("\n{}", key.to_uppercase());
                        print_array_table(rows);
                    }
                }
            }
        }
        Value::Array(rows) => print_array_table(rows),
        other => println!("{}", other),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\n{}", "Warnings:".yellow());
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_scalar_fields(map: &serde_json::Map<String, Value>) {
    let scalars: Vec<(&String, &Value)> =
        map.iter().filter(|(_, v)| !v.is_array()).collect();
    if scalars.is_empty() {
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in scalars {
        builder.push_record([key.as_str(), &format_value(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_array_table(rows: &[Value]) {
    let Some(Value::Object(first)) = rows.first() else {
        for row in rows {
            println!("  {}", format_value(row));
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for row in rows {
        if let Value::Object(obj) = row {
            let cells: Vec<String> = headers
                .iter()
                .map(|h| obj.get(h).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(cells);
        }
    }
    println!("{}", Table::from(builder));
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => colorize_status(s),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "—".to_string(),
        other => other.to_string(),
    }
}

/// Verdict statuses and outcomes get a colour; everything else passes through.
fn colorize_status(s: &str) -> String {
    match s {
        "compliant" | "pass" => s.green().to_string(),
        "warning" | "not_applicable" => s.yellow().to_string(),
        "non_compliant" | "fail" => s.red().to_string(),
        other => other.to_string(),
    }
}
