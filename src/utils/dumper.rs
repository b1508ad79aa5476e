use serde_json::Value;

const INDENT: &str = "  ";

/// Pretty-prints a JSON value for debugging output.
///
/// Nested values are indented two spaces per level. An object with a
/// single flat entry stays on one line: `{ "id": 1 }`.
pub fn dump(value: &Value) -> String {
    dump_at(value, "")
}

fn dump_at(value: &Value, offset: &str) -> String {
    let next = format!("{offset}{INDENT}");

    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("\"{}\"", escape_string(s)),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().map(|item| dump_at(item, &next)).collect();
            block('[', ']', &parts, offset, &next)
        }
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, val)| format!("\"{}\": {}", escape_string(key), dump_at(val, &next)))
                .collect();

            match entries.as_slice() {
                [only] if !only.contains(|c| matches!(c, '\n' | '{' | '[')) => {
                    format!("{{ {only} }}")
                }
                _ => block('{', '}', &entries, offset, &next),
            }
        }
    }
}

fn block(open: char, close: char, parts: &[String], offset: &str, next: &str) -> String {
    let separator = format!(",\n{next}");
    format!("{open}\n{next}{}\n{offset}{close}", parts.join(&separator))
}

/// Only backslashes and double quotes are escaped.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
