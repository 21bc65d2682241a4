// JSON reading and formatting for generated config files

use serde::Serialize;
use serde_json::Value;

/// Maximum line width before a container is broken over several lines
pub const PRINT_WIDTH: usize = 80;

const INDENT: &str = "  ";

/// Parse JSON that may contain `//` and `/* */` comments and trailing commas
pub fn parse_jsonc(text: &str) -> serde_json::Result<Value> {
    let stripped = strip_trailing_commas(&strip_comments(text));
    serde_json::from_str(&stripped)
}

/// Serialize a value and lay it out with [`to_pretty_string`]
pub fn format_serializable<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let value = serde_json::to_value(value)?;
    Ok(to_pretty_string(&value))
}

/// Lay out a JSON value for humans.
///
/// Arrays and objects stay on a single line when they fit within
/// [`PRINT_WIDTH`] columns (counting the key in front and the comma after),
/// otherwise every entry goes on its own line indented by two spaces. Object
/// key order is kept as-is. The output ends with a newline.
pub fn to_pretty_string(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, 0, 0);
    out.push('\n');
    out
}

fn write_value(out: &mut String, value: &Value, depth: usize, reserved: usize) {
    let flat = flat(value);
    if reserved + width(&flat) <= PRINT_WIDTH {
        out.push_str(&flat);
        return;
    }

    let inner = INDENT.repeat(depth + 1);
    match value {
        Value::Array(items) => {
            out.push_str("[\n");
            for (i, item) in items.iter().enumerate() {
                let last = i + 1 == items.len();
                out.push_str(&inner);
                write_value(out, item, depth + 1, inner.len() + usize::from(!last));
                push_separator(out, last);
            }
            out.push_str(&INDENT.repeat(depth));
            out.push(']');
        }
        Value::Object(map) => {
            out.push_str("{\n");
            for (i, (key, item)) in map.iter().enumerate() {
                let last = i + 1 == map.len();
                let prefix = format!("{}: ", Value::from(key.as_str()));
                out.push_str(&inner);
                out.push_str(&prefix);
                write_value(
                    out,
                    item,
                    depth + 1,
                    inner.len() + width(&prefix) + usize::from(!last),
                );
                push_separator(out, last);
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
        }
        // Scalars never break
        _ => out.push_str(&flat),
    }
}

fn push_separator(out: &mut String, last: bool) {
    if !last {
        out.push(',');
    }
    out.push('\n');
}

/// Single-line rendering with a space inside object braces and after commas
fn flat(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(flat).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(key, item)| format!("{}: {}", Value::from(key.as_str()), flat(item)))
                .collect();
            format!("{{ {} }}", entries.join(", "))
        }
        scalar => scalar.to_string(),
    }
}

fn width(text: &str) -> usize {
    text.chars().count()
}

/// Remove `//` line comments and `/* */` block comments outside of strings
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                // Keep the newline so line structure survives
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    prev = next;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Drop commas that are directly followed (ignoring whitespace) by `}` or `]`
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
            if !matches!(next, Some('}' | ']')) {
                out.push(c);
            }
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}
