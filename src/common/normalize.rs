use serde_json::{Map, Number, Value};

/// Convert decimal-looking string values into numbers, recursing through
/// nested mappings. Array elements are left exactly as the parser returned
/// them, as are booleans, nulls, values that are already numeric, and strings
/// that do not look like a plain decimal.
pub fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, entry) in map {
                let entry = match entry {
                    Value::Object(_) => normalize(entry),
                    Value::String(s) => match to_number(&s) {
                        Some(number) => Value::Number(number),
                        None => Value::String(s),
                    },
                    other => other,
                };
                out.insert(key, entry);
            }
            Value::Object(out)
        }
        other => other,
    }
}

// Digits with at most one decimal point. At least one digit is required, so
// "" and "." stay strings instead of feeding the float parser garbage.
fn is_decimal_string(s: &str) -> bool {
    let mut saw_digit = false;
    let mut saw_dot = false;
    for c in s.chars() {
        match c {
            '0'..='9' => saw_digit = true,
            '.' if !saw_dot => saw_dot = true,
            _ => return false,
        }
    }
    saw_digit
}

fn to_number(s: &str) -> Option<Number> {
    if !is_decimal_string(s) {
        return None;
    }
    // from_f64 rejects non-finite values, e.g. an absurdly long digit run
    // overflowing to infinity; such strings are left untouched.
    s.parse::<f64>().ok().and_then(Number::from_f64)
}
