//! Console-log cart parser.
//!
//! The bot appends a cart report to its console transcript each time the
//! cart is listed:
//!
//! ```text
//! ---------------------- Cart ----------------------
//! #  Name                                     Amount
//! 0 Red Potion 10
//! 1 Blue Herb 3
//!
//! ```
//!
//! The transcript is append-only, so a log may contain many reports; only
//! the last one reflects the current cart. The parser scans forward and
//! keeps the snapshot from the final banner occurrence.

use crate::item::{CartItem, CartSnapshot};
use thiserror::Error;

/// Literal banner line that opens a cart report block.
pub const CART_BANNER: &str = "---------------------- Cart ----------------------";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartParseError {
    /// A cart block line does not parse as `<index> <name tokens> <count>`.
    #[error("malformed cart line {line:?}: {reason}")]
    MalformedLine { line: String, reason: String },
}

/// Extract the latest cart snapshot from raw transcript text.
///
/// Returns `Ok(None)` when the banner never occurs — a normal state while
/// the bot is still warming up, not an error. A malformed line inside a
/// block aborts that block's parse and is surfaced to the caller.
pub fn parse(log_text: &str) -> Result<Option<CartSnapshot>, CartParseError> {
    let lines: Vec<&str> = log_text.lines().collect();
    let mut latest = None;

    let mut i = 0;
    while i < lines.len() {
        if lines[i].contains(CART_BANNER) {
            let (snapshot, next) = parse_block(&lines, i + 1)?;
            latest = Some(snapshot);
            i = next;
        } else {
            i += 1;
        }
    }

    Ok(latest)
}

/// Parse one report block. `start` is the line after the banner; the block
/// runs until the first blank line or end of input. Returns the snapshot and
/// the index of the line that terminated the block.
fn parse_block(lines: &[&str], start: usize) -> Result<(CartSnapshot, usize), CartParseError> {
    // The report prints a column-header row right after the banner; skip it.
    let mut i = (start + 1).min(lines.len());

    let mut items = Vec::new();
    while i < lines.len() && !lines[i].trim().is_empty() {
        items.push(parse_item_line(lines[i])?);
        i += 1;
    }

    Ok((CartSnapshot::new(items), i))
}

fn parse_item_line(line: &str) -> Result<CartItem, CartParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let (count_token, rest) = tokens
        .split_last()
        .ok_or_else(|| malformed(line, "no tokens"))?;

    let count: i64 = count_token
        .parse()
        .map_err(|_| malformed(line, &format!("count token {count_token:?} is not an integer")))?;
    if count <= 0 {
        return Err(malformed(line, &format!("count must be positive, got {count}")));
    }

    // The first token is the report's positional index, not item data.
    let name = match rest.split_first() {
        Some((_, name_tokens)) => name_tokens.join(" "),
        None => String::new(),
    };

    CartItem::new(name, count).map_err(|e| malformed(line, &e.to_string()))
}

fn malformed(line: &str, reason: &str) -> CartParseError {
    CartParseError::MalformedLine {
        line: line.to_string(),
        reason: reason.to_string(),
    }
}
