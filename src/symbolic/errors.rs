use thiserror::Error;

pub type Result<T> = std::result::Result<T, SymbolicError>;

/// Failure kinds of the symbolic core.
///
/// Every failure is a programming or input error, not a transient condition:
/// there is no retry or recovery logic anywhere, no error is swallowed and
/// partial results are never returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SymbolicError {
    /// Evaluation or differentiation reached a variable with no environment
    /// or no binding for its name.
    #[error("no value for variable {0}")]
    UnboundVariable(String),
    /// Removal of a binding that does not exist.
    #[error("cannot remove undefined variable {0}")]
    UndefinedVariable(String),
    /// The parser could not classify a substring as a number, variable,
    /// parenthesized group or operator expression.
    #[error("unknown expression string: {0}")]
    MalformedExpression(String),
}
