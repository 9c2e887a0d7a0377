//! Writer for the brace-delimited text format.

use std::fmt::{self, Write};

use super::{DEFAULT_DELIMITER, VALUE_KEY, stored_value};
use crate::tree::{HashTree, ListedHashTree};

/// Opens a multi-line value.
pub(crate) const BLOCK_START: &str = "[[!";

/// Closes a multi-line value.
pub(crate) const BLOCK_END: &str = "!]]";

const INDENT: &str = "    ";

/// Characters that end a plain value.
const VALUE_STOPS: [char; 4] = ['\n', '\r', '{', '}'];

/// Characters that end a plain key.
const KEY_STOPS: [char; 5] = ['\n', '\r', '{', '}', '='];

/// Writes `tree` as a complete document: `value {`, the body, `}`.
pub(crate) fn write_document<W: Write>(tree: &ListedHashTree<String>, out: &mut W) -> fmt::Result {
    if let Some(value) = stored_value(tree) {
        write_value(out, value, 0)?;
        out.write_str(" {\n")?;
    } else {
        out.write_str("{\n")?;
    }
    write_body(tree, 1, out)?;
    out.write_str("}\n")
}

fn write_body<W: Write>(tree: &ListedHashTree<String>, level: usize, out: &mut W) -> fmt::Result {
    for (key, child) in tree.iter().filter(|(key, _)| key.as_str() != VALUE_KEY) {
        indent(out, level)?;
        if child.is_empty() {
            write_key(out, key, level, false)?;
        } else if let Some(property) = leaf_property(child) {
            write_key(out, key, level, false)?;
            out.write_char('=')?;
            write_value(out, property, level)?;
        } else {
            write_key(out, key, level, true)?;
            if let Some(value) = stored_value(child) {
                out.write_char('=')?;
                write_value(out, value, level)?;
            }
            out.write_str(" {\n")?;
            write_body(child, level + 1, out)?;
            indent(out, level)?;
            out.write_char('}')?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}

/// The only child of `node`, when that child is itself a leaf.
fn leaf_property(node: &ListedHashTree<String>) -> Option<&str> {
    if node.len() != 1 {
        return None;
    }
    node.iter()
        .next()
        .filter(|(_, grandchild)| grandchild.is_empty())
        .map(|(key, _)| key.as_str())
}

/// Writes a key, quoting it in a block when it would not read back as one
/// plain name. Section names are also quoted when they hold the path
/// delimiter, since plain section names are split on it.
fn write_key<W: Write>(out: &mut W, key: &str, level: usize, section: bool) -> fmt::Result {
    let quoted = key.contains(KEY_STOPS)
        || key.contains(BLOCK_START)
        || (section && key.contains(DEFAULT_DELIMITER));
    if quoted {
        write_block(out, key, level)
    } else {
        out.write_str(key)
    }
}

fn write_value<W: Write>(out: &mut W, text: &str, level: usize) -> fmt::Result {
    if text.contains(VALUE_STOPS) || text.contains(BLOCK_START) {
        write_block(out, text, level)
    } else {
        out.write_str(text)
    }
}

fn write_block<W: Write>(out: &mut W, text: &str, level: usize) -> fmt::Result {
    out.write_str(BLOCK_START)?;
    out.write_char('\n')?;
    out.write_str(text.trim())?;
    out.write_char('\n')?;
    indent(out, level)?;
    out.write_str(BLOCK_END)
}

fn indent<W: Write>(out: &mut W, level: usize) -> fmt::Result {
    for _ in 0..level {
        out.write_str(INDENT)?;
    }
    Ok(())
}
