//! Rendering of JSON values as Python literals.
//!
//! The generated fragment is evaluated by the Fypp preprocessor, which reads
//! `#:set` values as Python expressions. JSON `true`, `null` and exponent
//! notation are therefore spelled the way Python's `repr` spells them.

use std::fmt::{self, Write};

use serde_json::{Map, Number, Value};

/// Display adapter writing a JSON value as a Python literal.
#[derive(Debug, Clone, Copy)]
pub struct PythonLiteral<'a>(pub &'a Value);

/// Display adapter writing a JSON object as a Python dict literal.
#[derive(Debug, Clone, Copy)]
pub struct PythonDict<'a>(pub &'a Map<String, Value>);

impl fmt::Display for PythonLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.0)
    }
}

impl fmt::Display for PythonDict<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dict(f, self.0)
    }
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("None"),
        Value::Bool(true) => f.write_str("True"),
        Value::Bool(false) => f.write_str("False"),
        Value::Number(n) => write_number(f, n),
        Value::String(s) => write_str(f, s),
        Value::Array(items) => {
            f.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(f, item)?;
            }
            f.write_char(']')
        }
        Value::Object(map) => write_dict(f, map),
    }
}

fn write_dict(f: &mut fmt::Formatter<'_>, map: &Map<String, Value>) -> fmt::Result {
    f.write_char('{')?;
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_str(f, key)?;
        f.write_str(": ")?;
        write_value(f, value)?;
    }
    f.write_char('}')
}

fn write_number(f: &mut fmt::Formatter<'_>, n: &Number) -> fmt::Result {
    if let Some(i) = n.as_i64() {
        write!(f, "{i}")
    } else if let Some(u) = n.as_u64() {
        write!(f, "{u}")
    } else {
        // JSON has no NaN or infinities, so every remaining number is a finite f64.
        f.write_str(&float_repr(n.as_f64().unwrap_or_default()))
    }
}

/// Python `repr` of a finite float: positional between 1e-4 and 1e16, scientific
/// with a signed two-digit exponent otherwise, and always distinguishable from an int.
fn float_repr(value: f64) -> String {
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0".to_string() } else { "0.0".to_string() };
    }

    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if (-4..16).contains(&exponent) {
        let positional = value.to_string();
        if positional.contains('.') { positional } else { format!("{positional}.0") }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

fn write_str(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    f.write_char(quote)?;
    for ch in s.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c == quote => {
                f.write_char('\\')?;
                f.write_char(c)?;
            }
            c if !is_printable(c) => {
                let code = u32::from(c);
                if code < 0x100 {
                    write!(f, "\\x{code:02x}")?;
                } else if code < 0x1_0000 {
                    write!(f, "\\u{code:04x}")?;
                } else {
                    write!(f, "\\U{code:08x}")?;
                }
            }
            c => f.write_char(c)?,
        }
    }
    f.write_char(quote)
}

/// Characters a Python string repr keeps as-is: everything but controls, format
/// characters, private use and separators other than the plain space.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || is_separator(c) || is_format(c) || is_private_use(c))
}

fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\u{00a0}' | '\u{1680}' | '\u{2000}'..='\u{200a}' | '\u{2028}' | '\u{2029}' | '\u{202f}' | '\u{205f}' | '\u{3000}'
    )
}

fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00ad}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061c}'
            | '\u{06dd}'
            | '\u{070f}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08e2}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{13430}'..='\u{1343f}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

fn is_private_use(c: char) -> bool {
    matches!(c, '\u{e000}'..='\u{f8ff}' | '\u{f0000}'..='\u{ffffd}' | '\u{100000}'..='\u{10fffd}')
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn render(value: &Value) -> String {
        PythonLiteral(value).to_string()
    }

    #[test]
    fn scalars_use_python_spelling() {
        assert_eq!(render(&json!(null)), "None");
        assert_eq!(render(&json!(true)), "True");
        assert_eq!(render(&json!(false)), "False");
        assert_eq!(render(&json!(-42)), "-42");
        assert_eq!(render(&json!(u64::MAX)), "18446744073709551615");
    }

    #[test]
    fn floats_follow_python_repr() {
        assert_eq!(render(&json!(1.0)), "1.0");
        assert_eq!(render(&json!(1.4)), "1.4");
        assert_eq!(render(&json!(0.0001)), "0.0001");
        assert_eq!(render(&json!(0.00001)), "1e-05");
        assert_eq!(render(&json!(2.5e-7)), "2.5e-07");
        assert_eq!(render(&json!(1e16)), "1e+16");
        assert_eq!(render(&json!(1e15)), "1000000000000000.0");
        assert_eq!(render(&json!(-0.0)), "-0.0");
    }

    #[test]
    fn strings_follow_python_repr() {
        assert_eq!(render(&json!("T")), "'T'");
        assert_eq!(render(&json!("it's")), "\"it's\"");
        assert_eq!(render(&json!("both ' and \"")), "'both \\' and \"'");
        assert_eq!(render(&json!("a\\b\nc")), "'a\\\\b\\nc'");
        assert_eq!(render(&json!("\u{1}")), "'\\x01'");
        assert_eq!(render(&json!("Δt")), "'Δt'");
    }

    #[test]
    fn non_printable_characters_are_escaped() {
        assert_eq!(render(&json!("a\u{a0}b c")), "'a\\xa0b c'");
        assert_eq!(render(&json!("\u{2028}\u{200b}\u{feff}")), "'\\u2028\\u200b\\ufeff'");
        assert_eq!(render(&json!("\u{f0000}")), "'\\U000f0000'");
        assert_eq!(render(&json!("\u{7f}")), "'\\x7f'");
    }

    #[test]
    fn containers_nest() {
        let value = json!({"run_time_info": "T", "fluid_pp(1)%gamma": 2.5, "bc": [-3, -3], "x": {"y": null}});
        assert_eq!(
            render(&value),
            "{'run_time_info': 'T', 'fluid_pp(1)%gamma': 2.5, 'bc': [-3, -3], 'x': {'y': None}}"
        );
        assert_eq!(render(&json!({})), "{}");
        assert_eq!(render(&json!([])), "[]");
    }
}
