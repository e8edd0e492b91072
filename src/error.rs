use crate::filter::FilterKind;
use thiserror::Error;

/// Everything that can go wrong while a search request is validated. All
/// variants abort the call before any file is tested, so a failed search
/// never returns a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The request named a filter kind outside the fixed set.
    #[error("Unknown filter kind: {0:?}")]
    UnknownFilterKind(String),
    /// A size filter supplied an operator outside `< <= > >= == !=`.
    #[error("Invalid size operator: {0:?}")]
    InvalidOperator(String),
    /// The argument shape does not fit the filter kind.
    #[error("Argument does not fit the {kind} filter")]
    MismatchedArgument { kind: FilterKind },
    /// Without a condition the first listed filter decides matches, which
    /// needs at least one filter in the request.
    #[error("No filters supplied")]
    NoFilters,
}
