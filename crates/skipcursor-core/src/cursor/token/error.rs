use thiserror::Error as ThisError;

///
/// TokenSyntaxError
/// Skiptoken text that cannot be split into literals.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TokenSyntaxError {
    #[error("skiptoken is empty")]
    Empty,

    #[error("skiptoken is {len} bytes, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("literal {position} is empty")]
    EmptyLiteral { position: usize },

    #[error("literal {position} has an unterminated quote")]
    UnterminatedQuote { position: usize },

    #[error("literal {position} has a quote in an unexpected place")]
    MisplacedQuote { position: usize },

    #[error("literal {position} has trailing characters after its closing quote")]
    TrailingAfterQuote { position: usize },

    #[error("literal {position} ('{literal}') is not a recognized literal form")]
    UnrecognizedLiteral { position: usize, literal: String },
}
