//! Splits a raw report into classified blocks.

use super::block::Block;
use super::classifier::classify;

/// Parses a raw report into one block per line, in line order.
///
/// Lines are separated by `\n`; a trailing `\r` is dropped by the classifier's
/// trimming. Blank lines become empty paragraphs, so a document with `n`
/// separators always yields `n + 1` blocks.
pub fn parse(raw_content: &str) -> Vec<Block> {
    raw_content.split('\n').map(classify).collect()
}
