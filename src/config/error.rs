//! Error types of the configuration tree.

use thiserror::Error;

/// Failure to read configuration text.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The text does not follow the grammar.
    #[error("syntax error at line {line}, column {column}: {message}")]
    Syntax {
        /// 1-based line of the offending input.
        line: usize,
        /// 1-based column of the offending input.
        column: usize,
        /// What the parser expected.
        message: String,
    },

    /// The input ended while a block was still open.
    ///
    /// Only reported under [`EofPolicy::Strict`](super::EofPolicy::Strict).
    #[error("block `{name}` opened at line {line} is not closed before end of input")]
    UnclosedBlock {
        /// Name of the innermost unclosed block (`root` for the outermost).
        name: String,
        /// Line the block was opened on.
        line: usize,
    },

    /// The underlying reader failed.
    #[error("failed to read configuration text")]
    Io(#[from] std::io::Error),
}

/// Invalid argument given to a configuration constructor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required argument was empty.
    #[error("argument `{name}` must not be empty")]
    InvalidArgument {
        /// Name of the argument.
        name: &'static str,
    },
}

impl From<pest::error::Error<super::parser::Rule>> for ParseError {
    fn from(error: pest::error::Error<super::parser::Rule>) -> Self {
        let (line, column) = match error.line_col {
            pest::error::LineColLocation::Pos(position)
            | pest::error::LineColLocation::Span(position, _) => position,
        };
        Self::Syntax {
            line,
            column,
            message: error.variant.message().into_owned(),
        }
    }
}
