//! Reader for the brace-delimited text format.
//!
//! The grammar lives in `grammar.pest`; this module turns the resulting
//! parse tree into a [`ListedHashTree`], applying the [`EofPolicy`] to
//! blocks left open at the end of the input.

use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use super::error::ParseError;
use super::{EofPolicy, ParseOptions, split_path, store_value};
use crate::tree::{HashTree, ListedHashTree};

#[derive(Parser)]
#[grammar = "config/grammar.pest"]
struct ConfigGrammar;

/// Name reported for unclosed outermost blocks.
const ROOT_NAME: &str = "root";

/// Parses `input` into a tree, splitting section names on `delimiter`.
pub(crate) fn parse_document(
    input: &str,
    options: &ParseOptions,
    delimiter: &str,
) -> Result<ListedHashTree<String>, ParseError> {
    let mut pairs = ConfigGrammar::parse(Rule::document, input)?;
    let mut tree = ListedHashTree::new();
    let mut builder = Builder {
        eof: options.eof(),
        delimiter,
        entries: 0,
    };

    let root = pairs
        .next()
        .and_then(|document| document.into_inner().find(|pair| pair.as_rule() == Rule::root));
    if let Some(root) = root {
        let line = line_of(&root);
        builder.build_block(&mut tree, ROOT_NAME, line, root.into_inner())?;
    }

    tracing::debug!(entries = builder.entries, "parsed configuration text");
    Ok(tree)
}

struct Builder<'d> {
    eof: EofPolicy,
    delimiter: &'d str,
    entries: usize,
}

impl Builder<'_> {
    /// Fills `node` from the pairs of a root or section, after its name.
    fn build_block<'i>(
        &mut self,
        node: &mut ListedHashTree<String>,
        name: &str,
        line: usize,
        pairs: impl IntoIterator<Item = Pair<'i, Rule>>,
    ) -> Result<(), ParseError> {
        for pair in pairs {
            match pair.as_rule() {
                Rule::header => {
                    if let Some(value) = pair.into_inner().next().and_then(|value| value_text(&value)) {
                        store_value(node, value);
                    }
                }
                Rule::body => {
                    for statement in pair.into_inner() {
                        match statement.as_rule() {
                            Rule::section => self.build_section(node, statement)?,
                            Rule::entry => self.build_entry(node, statement),
                            _ => {}
                        }
                    }
                }
                Rule::unclosed => self.unclosed(name, line)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn build_section(
        &mut self,
        parent: &mut ListedHashTree<String>,
        section: Pair<'_, Rule>,
    ) -> Result<(), ParseError> {
        let line = line_of(&section);
        let mut inner = section.into_inner();
        let Some(name_pair) = inner.next() else {
            return Ok(());
        };
        let quoted = name_pair.as_rule() == Rule::multiline;
        let name = value_text(&name_pair).unwrap_or_default();
        tracing::trace!(name = name.as_str(), line, quoted, "section");

        // Quoted names are a single key; plain ones are paths.
        let node = if quoted && !name.is_empty() {
            parent.add(name.clone())
        } else {
            parent.add_path(split_path(&name, self.delimiter).map(str::to_owned))
        };
        let rest: Vec<Pair<'_, Rule>> = inner.collect();
        let (values, block): (Vec<_>, Vec<_>) = rest
            .into_iter()
            .partition(|pair| matches!(pair.as_rule(), Rule::text | Rule::multiline));
        if let Some(value) = values.first().and_then(value_text) {
            store_value(node, value);
        }
        self.build_block(node, &name, line, block)
    }

    fn build_entry(&mut self, node: &mut ListedHashTree<String>, entry: Pair<'_, Rule>) {
        self.entries += 1;
        let mut inner = entry.into_inner();
        let Some(key) = inner.next().and_then(|key| value_text(&key)) else {
            return;
        };
        tracing::trace!(key = key.as_str(), "entry");
        let child = node.add(key);
        if let Some(value) = inner.next().and_then(|value| value_text(&value)) {
            child.add(value);
        }
    }

    fn unclosed(&self, name: &str, line: usize) -> Result<(), ParseError> {
        match self.eof {
            EofPolicy::Strict => Err(ParseError::UnclosedBlock {
                name: name.to_owned(),
                line,
            }),
            EofPolicy::Lenient => {
                tracing::warn!(name, line, "closing block left open at end of input");
                Ok(())
            }
        }
    }
}

/// Extracts trimmed, non-empty text from a `name`, `text` or `multiline` pair.
fn value_text(pair: &Pair<'_, Rule>) -> Option<String> {
    let raw = match pair.as_rule() {
        Rule::multiline => pair
            .clone()
            .into_inner()
            .next()
            .map_or("", |content| content.as_str()),
        _ => pair.as_str(),
    };
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn line_of(pair: &Pair<'_, Rule>) -> usize {
    pair.as_span().start_pos().line_col().0
}
