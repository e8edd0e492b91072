mod error;
mod filter;
mod search;

pub use error::SearchError;
pub use filter::{CompareOp, FileFilter, FilterArg, FilterKind, Filters};
pub use search::{find_files, Condition};
