use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };

    let value = serde_json::to_value(value)?;
    match value {
        Value::Object(map) => {
            let headers = ["key", "value"];
            let mut rows = Vec::new();
            flatten_into(&mut rows, None, &map);
            rows.sort_by(|a, b| a[0].cmp(&b[0]));
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        other => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&other)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

/// Nested objects become `section.key` rows.
fn flatten_into(rows: &mut Vec<Vec<String>>, prefix: Option<&str>, map: &Map<String, Value>) {
    for (key, value) in map {
        let path = prefix.map_or_else(|| key.clone(), |prefix| format!("{prefix}.{key}"));
        match value {
            Value::Object(inner) => flatten_into(rows, Some(&path), inner),
            other => rows.push(vec![path, value_to_cell(other)]),
        }
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) if v.is_empty() => String::from("(empty)"),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
