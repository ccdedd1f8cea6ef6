//! Axis selector for direction-sensitive operations.

use std::fmt;

/// Selects the axis of iteration for slicing operations.
///
/// Operations that can run either row-wise or column-wise take a `Rule`
/// parameter; the conventional default is [`Rule::Row`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Iterate over rows.
    #[default]
    Row,
    /// Iterate over columns.
    Col,
}

impl Rule {
    /// The opposite rule.
    #[inline]
    pub fn inverse(self) -> Rule {
        match self {
            Rule::Row => Rule::Col,
            Rule::Col => Rule::Row,
        }
    }

    /// The human-readable axis name, `"row"` or `"column"`.
    #[inline]
    pub fn true_name(self) -> &'static str {
        match self {
            Rule::Row => "row",
            Rule::Col => "column",
        }
    }

    /// The dimension index this rule selects within a shape: 0 for rows,
    /// 1 for columns.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Rule::Row => 0,
            Rule::Col => 1,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.true_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse() {
        assert_eq!(Rule::Row.inverse(), Rule::Col);
        assert_eq!(Rule::Col.inverse(), Rule::Row);
        assert_eq!(Rule::Row.inverse().inverse(), Rule::Row);
    }

    #[test]
    fn test_true_name() {
        assert_eq!(Rule::Row.true_name(), "row");
        assert_eq!(Rule::Col.true_name(), "column");
        assert_eq!(Rule::Col.to_string(), "column");
    }

    #[test]
    fn test_default_is_row() {
        assert_eq!(Rule::default(), Rule::Row);
    }

    #[test]
    fn test_index() {
        assert_eq!(Rule::Row.index(), 0);
        assert_eq!(Rule::Col.index(), 1);
    }
}
