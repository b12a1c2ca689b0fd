//! Emphasis delimiter runs → output tag.

/// Output element an emphasis run maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Italic,
    Bold,
}

impl EmphasisKind {
    pub fn tag(&self) -> &'static str {
        match self {
            EmphasisKind::Italic => "i",
            EmphasisKind::Bold => "b",
        }
    }
}

/// Classify a delimiter run.
///
/// Runs of two are bold, every other run length (including combined
/// `***` runs) is italic. Delimiters other than `*` and `_` have no mapping;
/// callers still render the children, just without a wrapper.
pub fn classify(delimiter: char, count: usize) -> Option<EmphasisKind> {
    match delimiter {
        '*' | '_' => Some(match count {
            2 => EmphasisKind::Bold,
            _ => EmphasisKind::Italic,
        }),
        _ => None,
    }
}
