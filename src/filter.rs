use crate::error::SearchError;
use fstree::File;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of filter categories. Request keys resolve into this
/// through a fixed mapping; there is no by-name symbol lookup.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Name,
    Extension,
    Size,
}

impl FilterKind {
    /// Resolves a request key, ignoring ASCII case. Both the bare kind
    /// name and its `Filter`-suffixed spelling are accepted.
    pub fn resolve(name: &str) -> Result<Self, SearchError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "name" | "namefilter" => Ok(FilterKind::Name),
            "extension" | "ext" | "extensionfilter" => Ok(FilterKind::Extension),
            "size" | "sizefilter" => Ok(FilterKind::Size),
            _ => Err(SearchError::UnknownFilterKind(name.to_string())),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            FilterKind::Name => "name",
            FilterKind::Extension => "extension",
            FilterKind::Size => "size",
        };
        f.write_str(text)
    }
}

/// The closed set of relational operators a size filter accepts. Applied
/// by direct comparison, never by evaluating an expression.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Eq,
    NotEq,
}

impl CompareOp {
    pub fn compare(self, lhs: u64, rhs: u64) -> bool {
        match self {
            CompareOp::Less => lhs < rhs,
            CompareOp::LessEq => lhs <= rhs,
            CompareOp::Greater => lhs > rhs,
            CompareOp::GreaterEq => lhs >= rhs,
            CompareOp::Eq => lhs == rhs,
            CompareOp::NotEq => lhs != rhs,
        }
    }
}

impl FromStr for CompareOp {
    type Err = SearchError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "<" => Ok(CompareOp::Less),
            "<=" => Ok(CompareOp::LessEq),
            ">" => Ok(CompareOp::Greater),
            ">=" => Ok(CompareOp::GreaterEq),
            "==" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::NotEq),
            _ => Err(SearchError::InvalidOperator(token.to_string())),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            CompareOp::Less => "<",
            CompareOp::LessEq => "<=",
            CompareOp::Greater => ">",
            CompareOp::GreaterEq => ">=",
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
        };
        f.write_str(token)
    }
}

/// Argument carried by one request entry: a plain value for name and
/// extension filters, a `(threshold, operator)` pair for size filters.
/// The operator stays a raw token until the filter is built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum FilterArg {
    Value(String),
    Size { threshold: u64, operator: String },
}

impl FilterArg {
    pub fn value(value: impl Into<String>) -> Self {
        FilterArg::Value(value.into())
    }

    pub fn size(threshold: u64, operator: impl Into<String>) -> Self {
        FilterArg::Size {
            threshold,
            operator: operator.into(),
        }
    }
}

/// One constructed predicate, ready to test files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileFilter {
    Name(String),
    Extension(String),
    Size(CompareOp, u64),
}

impl FileFilter {
    /// Turns one `(kind name, argument)` request entry into a predicate.
    /// Fails on unknown kinds, on size operators outside the fixed set
    /// and on argument shapes that do not fit the kind.
    pub fn build(kind: &str, arg: &FilterArg) -> Result<Self, SearchError> {
        let kind = FilterKind::resolve(kind)?;
        match (kind, arg) {
            (FilterKind::Name, FilterArg::Value(value)) => Ok(FileFilter::Name(value.clone())),
            (FilterKind::Extension, FilterArg::Value(value)) => {
                Ok(FileFilter::Extension(value.clone()))
            }
            (FilterKind::Size, FilterArg::Size { threshold, operator }) => {
                Ok(FileFilter::Size(operator.parse()?, *threshold))
            }
            _ => Err(SearchError::MismatchedArgument { kind }),
        }
    }

    /// Name and extension compare exactly; size compares against the
    /// threshold with the requested operator.
    pub fn matches(&self, file: &File) -> bool {
        match self {
            FileFilter::Name(name) => file.name() == name,
            FileFilter::Extension(extension) => file.extension() == extension,
            FileFilter::Size(op, threshold) => op.compare(file.size(), *threshold),
        }
    }
}

/// The filters of one request: an insertion-ordered mapping from kind
/// name to argument. Keys are unique; inserting an existing key replaces
/// its argument in place and keeps the original position.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, FilterArg)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable [`Filters::insert`].
    pub fn with(mut self, kind: impl Into<String>, arg: FilterArg) -> Self {
        self.insert(kind, arg);
        self
    }

    pub fn insert(&mut self, kind: impl Into<String>, arg: FilterArg) {
        let kind = kind.into();
        match self.entries.iter().position(|(name, _)| *name == kind) {
            Some(index) => self.entries[index].1 = arg,
            None => self.entries.push((kind, arg)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterArg)> {
        self.entries.iter().map(|(kind, arg)| (kind.as_str(), arg))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_resolution_ignores_case_and_suffix() {
        assert_eq!(FilterKind::resolve("Name").unwrap(), FilterKind::Name);
        assert_eq!(FilterKind::resolve("namefilter").unwrap(), FilterKind::Name);
        assert_eq!(FilterKind::resolve("EXT").unwrap(), FilterKind::Extension);
        assert_eq!(
            FilterKind::resolve("ExtensionFilter").unwrap(),
            FilterKind::Extension
        );
        assert_eq!(FilterKind::resolve(" size ").unwrap(), FilterKind::Size);
    }

    #[test]
    fn unknown_kind_is_reported_with_its_raw_name() {
        match FilterKind::resolve("DateFilter") {
            Err(SearchError::UnknownFilterKind(name)) => assert_eq!(name, "DateFilter"),
            other => panic!("Unexpected resolution: {other:?}"),
        }
    }

    #[test]
    fn all_six_operators_parse_and_display_back() {
        for token in ["<", "<=", ">", ">=", "==", "!="] {
            let op: CompareOp = token.parse().unwrap();
            assert_eq!(op.to_string(), token);
        }
    }

    #[test]
    fn operator_parsing_tolerates_whitespace() {
        assert_eq!(" >= ".parse::<CompareOp>().unwrap(), CompareOp::GreaterEq);
    }

    #[test]
    fn bad_operators_are_rejected() {
        for token in ["=>", "=", "<>", "", "== 1"] {
            assert_eq!(
                token.parse::<CompareOp>(),
                Err(SearchError::InvalidOperator(token.to_string()))
            );
        }
    }

    #[test]
    fn compare_covers_all_operators() {
        assert!(CompareOp::Less.compare(1, 2));
        assert!(CompareOp::LessEq.compare(2, 2));
        assert!(CompareOp::Greater.compare(3, 2));
        assert!(CompareOp::GreaterEq.compare(2, 2));
        assert!(CompareOp::Eq.compare(2, 2));
        assert!(CompareOp::NotEq.compare(1, 2));
        assert!(!CompareOp::Less.compare(2, 2));
        assert!(!CompareOp::NotEq.compare(2, 2));
    }

    #[test]
    fn build_rejects_mismatched_argument_shapes() {
        let err = FileFilter::build("Name", &FilterArg::size(10, ">=")).unwrap_err();
        assert_eq!(
            err,
            SearchError::MismatchedArgument {
                kind: FilterKind::Name
            }
        );
        let err = FileFilter::build("Size", &FilterArg::value("10")).unwrap_err();
        assert_eq!(
            err,
            SearchError::MismatchedArgument {
                kind: FilterKind::Size
            }
        );
    }

    #[test]
    fn name_and_extension_match_exactly() {
        let file = File::new("abc", "txt", 10);
        assert!(FileFilter::Name("abc".into()).matches(&file));
        assert!(!FileFilter::Name("ABC".into()).matches(&file));
        assert!(FileFilter::Extension("txt".into()).matches(&file));
        assert!(!FileFilter::Extension(".txt".into()).matches(&file));
    }

    #[test]
    fn size_filter_compares_through_the_operator() {
        let filter = FileFilter::build("Size", &FilterArg::size(10, ">=")).unwrap();
        assert!(filter.matches(&File::new("a", "txt", 10)));
        assert!(filter.matches(&File::new("b", "txt", 11)));
        assert!(!filter.matches(&File::new("c", "txt", 9)));
    }

    #[test]
    fn inserting_an_existing_key_replaces_in_place() {
        let mut filters = Filters::new();
        assert!(filters.is_empty());
        filters.insert("Size", FilterArg::size(10, ">="));
        filters.insert("Name", FilterArg::value("abc"));
        filters.insert("Size", FilterArg::size(15, "<"));
        assert!(!filters.is_empty());
        assert_eq!(filters.len(), 2);

        let entries: Vec<_> = filters.iter().collect();
        assert_eq!(entries[0], ("Size", &FilterArg::size(15, "<")));
        assert_eq!(entries[1], ("Name", &FilterArg::value("abc")));
    }

    #[test]
    fn request_types_serialize_to_plain_json() {
        let filters = Filters::new()
            .with("Size", FilterArg::size(10, ">="))
            .with("Name", FilterArg::value("abc"));
        let json = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "entries": [
                    ["Size", { "Size": { "threshold": 10, "operator": ">=" } }],
                    ["Name", { "Value": "abc" }],
                ]
            })
        );
        let back: Filters = serde_json::from_value(json).unwrap();
        assert_eq!(back, filters);

        assert_eq!(
            serde_json::to_value(FilterKind::Extension).unwrap(),
            serde_json::json!("Extension")
        );
        assert_eq!(
            serde_json::to_value(CompareOp::GreaterEq).unwrap(),
            serde_json::json!("GreaterEq")
        );
    }
}
