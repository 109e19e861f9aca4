//! Raw content parsing
//!
//! Settings files are JSON with two relaxations: `//` and `/* */` comments,
//! and trailing commas before `}` or `]`. Parsing yields the flat top-level
//! mapping; dotted keys are not split here.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::tree::ValueTree;

/// Parse settings text into its flat top-level mapping.
///
/// Empty or whitespace-only content (comments included) is an empty mapping.
///
/// ```
/// use conf_model::parse_raw;
///
/// let raw = parse_raw(r#"{
///     // comment
///     "editor.fontSize": 12,
/// }"#).unwrap();
/// assert_eq!(raw["editor.fontSize"], 12);
/// ```
pub fn parse_raw(content: &str) -> Result<ValueTree> {
    let cleaned = strip_trailing_commas(&strip_comments(content));
    if cleaned.trim().is_empty() {
        return Ok(ValueTree::new());
    }

    match serde_json::from_str(&cleaned)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::NotAnObject {
            found: kind(&other),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Remove `//` line comments and `/* */` block comments outside strings.
///
/// Line breaks inside comments are kept so error positions still match the
/// original text.
pub fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;

    while let Some(ch) = chars.next() {
        if in_string {
            out.push(ch);
            match ch {
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

        match (ch, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(ch);
            }
            ('/', Some('/')) => {
                for next in chars.by_ref() {
                    if next == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    if next == '\n' {
                        out.push('\n');
                    }
                    previous = next;
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Remove commas that directly precede a closing `}` or `]`.
///
/// Expects comment-free input.
pub fn strip_trailing_commas(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if in_string {
            out.push(ch);
            if ch == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if ch == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        if ch == '"' {
            in_string = true;
        } else if ch == ',' {
            let next = chars[i + 1..].iter().copied().find(|c| !c.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                i += 1;
                continue;
            }
        }
        out.push(ch);
        i += 1;
    }

    out
}
