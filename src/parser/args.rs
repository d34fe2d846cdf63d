use crate::utils::hex::to_checksum_address;
use serde::Serialize;
use std::fmt;

/// One argument of a parsed call, reproduced in the generated test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CallArgument {
    /// Checksummed 20-byte address; rendered as `address(0x..)`.
    Address(String),
    /// Opaque literal text (numbers, booleans, tuples, arrays, strings).
    Literal(String),
}

impl CallArgument {
    /// Classifies a trimmed token: anything starting with `0x` that normalizes
    /// to an address becomes one, everything else passes through verbatim.
    pub fn from_token(token: &str) -> Self {
        if !token.starts_with("0x") {
            return Self::Literal(token.to_string());
        }
        match to_checksum_address(token) {
            Ok(address) => Self::Address(address),
            Err(err) => {
                tracing::debug!("[PARSE] keeping hex token as literal: {err}");
                Self::Literal(token.to_string())
            }
        }
    }
}

impl fmt::Display for CallArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(address) => write!(f, "address({address})"),
            Self::Literal(literal) => f.write_str(literal),
        }
    }
}

/// Splits the raw text between a call's outermost parentheses on top-level
/// commas. Commas nested in `(..)`, `[..]` or double-quoted strings do not split.
pub fn split_top_level(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for ch in raw.chars() {
        if in_string {
            current.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                tokens.push(current.trim().to_string());
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }

    let tail = current.trim();
    if !tail.is_empty() {
        tokens.push(tail.to_string());
    }
    tokens
}

/// Tokenizes and classifies a raw argument list.
pub fn parse_arguments(raw: &str) -> Vec<CallArgument> {
    split_top_level(raw)
        .iter()
        .map(|token| CallArgument::from_token(token))
        .collect()
}

/// Given text that starts with `(`, returns the contents up to the matching
/// `)` and the remainder after it. Quoted strings are skipped. `None` when the
/// parentheses never balance.
pub fn take_parenthesized(text: &str) -> Option<(&str, &str)> {
    if !text.starts_with('(') {
        return None;
    }
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[1..idx], &text[idx + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}
