//! Reads a generated version-info file back into `(label, tokens)` records.
//!
//! Tokens come back in their rendered (escaped) form. Continuation lines,
//! which carry a blank label, are folded into the record above them.

use crate::errors::{GenError, Result};

const ARRAY_OPEN: &str = "[] = {";
const ELEMENT_END: &str = "\\n\",";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub label: String,
    pub tokens: Vec<String>,
}

/// Parses `source` as written by the generator with the given label width.
pub fn read_version_info(source: &str, left_margin: usize) -> Result<Vec<Record>> {
    let mut lines = source.lines();
    if !lines.by_ref().any(|line| line.contains(ARRAY_OPEN)) {
        return Err(GenError::MalformedInput(
            "array declaration not found".to_string(),
        ));
    }

    let mut records: Vec<Record> = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed == "0" {
            return Ok(records);
        }
        let body = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix(ELEMENT_END))
            .ok_or_else(|| GenError::MalformedInput(format!("unexpected line: {line}")))?;

        let split = body
            .char_indices()
            .nth(left_margin)
            .map_or(body.len(), |(idx, _)| idx);
        let (label, content) = body.split_at(split);
        let label = label.trim_end();
        let tokens = split_tokens(content);

        match records.last_mut() {
            Some(last) if label.is_empty() => last.tokens.extend(tokens),
            _ => records.push(Record {
                label: label.to_string(),
                tokens,
            }),
        }
    }

    Err(GenError::MalformedInput(
        "array sentinel `0` not found".to_string(),
    ))
}

/// Splits on spaces, keeping `key=\"...\"` values together. A quoted value
/// ends at an escaped quote followed by a space or the end of the line.
fn split_tokens(content: &str) -> Vec<String> {
    let bytes = content.as_bytes();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut idx = 0;

    while idx < bytes.len() {
        let rest = &content[idx..];
        if rest.starts_with("\\\"") {
            let after = bytes.get(idx + 2).copied();
            if !quoted && current.ends_with('=') {
                quoted = true;
            } else if quoted && matches!(after, None | Some(b' ')) {
                quoted = false;
            }
            current.push_str("\\\"");
            idx += 2;
            continue;
        }
        if rest.starts_with("\\\\") {
            current.push_str("\\\\");
            idx += 2;
            continue;
        }

        let ch = rest.chars().next().unwrap_or(' ');
        if ch == ' ' && !quoted {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
        idx += ch.len_utf8();
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
