//! Assignment-script format.
//!
//! Tables are published as small scripts binding each array to a global:
//!
//! ```text
//! // Figure 1.2(1)
//! var F01_02_1IIDi1 = [0, 1, 2];
//! var F01_02_1IIDi2 = [0, 10];
//! var F01_02_1IIDd = [
//!     [1, 2, 3],
//!     [4, 5, 6]
//! ];
//! ```
//!
//! Each statement is `[var|let|const] NAME = <value>` terminated by `;`,
//! by a line break once the array brackets balance, or by end of input.
//! `//` and `/* */` comments are ignored.
//!
//! Array literals are decoded as JSON after two relaxations the legacy files
//! rely on: trailing commas (`[1, 2,]`) and numbers written without a
//! leading or trailing digit (`.5`, `-.5`, `5.`). Values that are not arrays
//! of numbers are skipped when their name is outside the figure naming
//! convention (see [`parse_source`](super::parse_source)).

use super::{bind, Variables};
use crate::error::LoadError;

/// Decode an assignment script into named arrays.
///
/// Later bindings of the same name replace earlier ones.
///
/// # Example
///
/// ```
/// use adapter_tables::format::script::parse_script;
/// use adapter_tables::format::RawValue;
///
/// let vars = parse_script("var F03_01_2IDi = [0, 1];\nF03_01_2IDd = [5, 7]", "inline").unwrap();
/// assert_eq!(vars["F03_01_2IDi"], RawValue::Vector(vec![0.0, 1.0]));
/// assert_eq!(vars["F03_01_2IDd"], RawValue::Vector(vec![5.0, 7.0]));
/// ```
pub fn parse_script(text: &str, origin: &str) -> Result<Variables, LoadError> {
    let source = strip_comments(text);
    let mut vars = Variables::new();
    let mut rest = source.as_str();

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == ';');
        if rest.is_empty() {
            break;
        }

        rest = strip_keyword(rest);

        let name_len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
            .unwrap_or(rest.len());
        if name_len == 0 {
            return Err(parse_error(origin, rest, "expected a variable name"));
        }
        let name = &rest[..name_len];
        rest = rest[name_len..].trim_start();

        rest = rest
            .strip_prefix('=')
            .ok_or_else(|| parse_error(origin, rest, &format!("expected '=' after {}", name)))?;

        let value_len = statement_end(rest);
        let literal = rest[..value_len].trim();
        rest = &rest[value_len..];

        let decoded = serde_json::from_str(&relax_literal(literal)).map_err(|e| e.to_string());
        bind(&mut vars, name.to_string(), decoded, origin)?;
    }

    Ok(vars)
}

/// Remove `//` and `/* */` comments outside string literals.
///
/// Line breaks inside block comments are kept so statement ends survive.
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('/', Some('/')) => {
                while chars.peek().is_some_and(|&n| n != '\n') {
                    chars.next();
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                out.push(' ');
                for n in chars.by_ref() {
                    if n == '\n' {
                        out.push('\n');
                    }
                    if prev == '*' && n == '/' {
                        break;
                    }
                    prev = n;
                }
            }
            ('"', _) | ('\'', _) => {
                quote = Some(c);
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out
}

/// Rewrite the JavaScript number and array forms JSON rejects.
fn relax_literal(literal: &str) -> String {
    let chars: Vec<char> = literal.chars().collect();
    let mut out = String::with_capacity(literal.len() + 4);
    let mut in_string = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if c == '"' && chars.get(i.wrapping_sub(1)) != Some(&'\\') {
                in_string = false;
            }
            continue;
        }

        let next_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
        let prev_digit = out.chars().last().is_some_and(|p| p.is_ascii_digit());
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let closes = chars[i + 1..]
                    .iter()
                    .find(|n| !n.is_whitespace())
                    .is_some_and(|&n| n == ']' || n == '}');
                if !closes {
                    out.push(c);
                }
            }
            '.' if !prev_digit && next_digit => out.push_str("0."),
            '.' if prev_digit && !next_digit => {}
            _ => out.push(c),
        }
    }

    out
}

/// Skip a leading declaration keyword, if any.
fn strip_keyword(s: &str) -> &str {
    for keyword in ["var", "let", "const"] {
        if let Some(rest) = s.strip_prefix(keyword) {
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    s
}

/// Byte length of the value expression at the start of `s`.
fn statement_end(s: &str) -> usize {
    let mut depth = 0i32;
    let mut closed = false;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (pos, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
                closed = true;
            }
            continue;
        }

        match c {
            '"' | '\'' => quote = Some(c),
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    closed = true;
                }
            }
            ';' if depth <= 0 => return pos,
            '\n' if depth <= 0 && closed => return pos,
            _ => {}
        }
    }

    s.len()
}

fn parse_error(origin: &str, at: &str, message: &str) -> LoadError {
    let snippet: String = at.chars().take(24).collect();
    LoadError::Parse {
        origin: origin.to_string(),
        message: format!("{} near '{}'", message, snippet),
    }
}
