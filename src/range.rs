use crate::charclass::CharClass;
use crate::error::{Result, StrBumpError};
use crate::sequence::Sequence;

/// Inclusive range expression over the increment ordering, e.g. `"a..e"`
/// or `"file-008..file-012"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeExpr {
    pub start: String,
    pub end: String,
}

/// Outcome of expanding a range expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// The end value was reached; all values from start to end, inclusive.
    Complete(Vec<String>),
    /// The expansion limit was hit before the end value was produced.
    Truncated { values: Vec<String>, limit: usize },
}

impl RangeExpr {
    /// Parse a `start..end` expression.
    ///
    /// Both endpoints must be non-empty and end in an ASCII alphanumeric
    /// character; an inert endpoint could never be produced by (or advance
    /// under) the increment, so the walk would not terminate.
    pub fn parse(expr: &str) -> Result<Self> {
        let captures = match regex::Regex::new(r"^(.+?)\.\.(.+)$") {
            Ok(re) => re.captures(expr),
            Err(_) => None,
        };

        let caps = captures.ok_or_else(|| {
            StrBumpError::range(format!("'{}' is not a start..end expression", expr))
        })?;

        let (start, end) = match (caps.get(1), caps.get(2)) {
            (Some(start), Some(end)) => (start.as_str().to_string(), end.as_str().to_string()),
            _ => {
                return Err(StrBumpError::range(format!(
                    "'{}' is not a start..end expression",
                    expr
                )))
            }
        };

        ensure_active("start", &start)?;
        ensure_active("end", &end)?;

        Ok(RangeExpr { start, end })
    }

    /// Expand the range by walking the increment sequence from `start`
    /// until `end` is produced, both inclusive.
    ///
    /// At most `max_items` values are collected; hitting the limit yields
    /// [`Expansion::Truncated`] with the values gathered so far.
    ///
    /// # Errors
    /// - the end is unreachable: a generated value outgrows the end without
    ///   ever equaling it;
    /// - the walk cycles back to `start` (possible when a carry is absorbed
    ///   by a non-alphanumeric character mid-string) without reaching `end`.
    pub fn expand(&self, max_items: usize) -> Result<Expansion> {
        let mut values = vec![self.start.clone()];
        if self.start == self.end {
            return Ok(Expansion::Complete(values));
        }

        let end_len = self.end.chars().count();
        for next in Sequence::new(self.start.as_str()) {
            if next == self.end {
                values.push(next);
                return Ok(Expansion::Complete(values));
            }
            if next == self.start {
                return Err(StrBumpError::range(format!(
                    "'{}' cycles without reaching '{}'",
                    self.start, self.end
                )));
            }
            if next.chars().count() > end_len {
                return Err(StrBumpError::range(format!(
                    "'{}' is not reachable from '{}'",
                    self.end, self.start
                )));
            }
            if values.len() >= max_items {
                return Ok(Expansion::Truncated {
                    values,
                    limit: max_items,
                });
            }
            values.push(next);
        }

        // Sequence is infinite for active starts; parse() guarantees one
        Err(StrBumpError::range(format!(
            "'{}' does not advance",
            self.start
        )))
    }
}

impl std::fmt::Display for RangeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

fn ensure_active(label: &str, value: &str) -> Result<()> {
    match value.chars().last().map(CharClass::of) {
        Some(class) if class.is_alnum() => Ok(()),
        _ => Err(StrBumpError::range(format!(
            "{} '{}' does not end in an alphanumeric character",
            label, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(expr: &str) -> Vec<String> {
        match RangeExpr::parse(expr).unwrap().expand(1000).unwrap() {
            Expansion::Complete(values) => values,
            Expansion::Truncated { .. } => panic!("expansion of '{}' was truncated", expr),
        }
    }

    #[test]
    fn test_parse_simple() {
        let range = RangeExpr::parse("a..e").unwrap();
        assert_eq!(range.start, "a");
        assert_eq!(range.end, "e");
    }

    #[test]
    fn test_parse_endpoints_may_contain_dots() {
        // Lazy start match splits at the first ".."
        let range = RangeExpr::parse("v1.a..v1.c").unwrap();
        assert_eq!(range.start, "v1.a");
        assert_eq!(range.end, "v1.c");
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        assert!(RangeExpr::parse("abc").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_endpoint() {
        assert!(RangeExpr::parse("..z").is_err());
        assert!(RangeExpr::parse("a..").is_err());
    }

    #[test]
    fn test_parse_rejects_inert_endpoint() {
        assert!(RangeExpr::parse("a-..z").is_err());
        assert!(RangeExpr::parse("a..z-").is_err());
    }

    #[test]
    fn test_expand_letters() {
        assert_eq!(complete("a..e"), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_expand_numbered_files() {
        assert_eq!(
            complete("file-008..file-012"),
            vec!["file-008", "file-009", "file-010", "file-011", "file-012"]
        );
    }

    #[test]
    fn test_expand_equal_endpoints() {
        assert_eq!(complete("x..x"), vec!["x"]);
    }

    #[test]
    fn test_expand_crosses_length_boundary() {
        assert_eq!(complete("z..ab"), vec!["z", "aa", "ab"]);
    }

    #[test]
    fn test_expand_unreachable_end() {
        let range = RangeExpr::parse("b..a9").unwrap();
        let err = range.expand(1000).unwrap_err();
        assert!(
            err.to_string().contains("not reachable"),
            "expected unreachable error, got: {}",
            err
        );
    }

    #[test]
    fn test_expand_detects_cycle() {
        // "a-a" walks a-b..a-z then wraps back to a-a; "b-a" is never produced
        let range = RangeExpr::parse("a-a..b-a").unwrap();
        let err = range.expand(1000).unwrap_err();
        assert!(
            err.to_string().contains("cycles"),
            "expected cycle error, got: {}",
            err
        );
    }

    #[test]
    fn test_expand_truncates_at_limit() {
        let range = RangeExpr::parse("a..z").unwrap();
        match range.expand(5).unwrap() {
            Expansion::Truncated { values, limit } => {
                assert_eq!(values, vec!["a", "b", "c", "d", "e"]);
                assert_eq!(limit, 5);
            }
            Expansion::Complete(_) => panic!("expected truncation at limit 5"),
        }
    }

    #[test]
    fn test_expand_exact_limit_completes() {
        let range = RangeExpr::parse("a..e").unwrap();
        match range.expand(5).unwrap() {
            Expansion::Complete(values) => assert_eq!(values.len(), 5),
            Expansion::Truncated { .. } => panic!("limit equal to range size should complete"),
        }
    }

    #[test]
    fn test_display_round_trips() {
        let range = RangeExpr::parse("aa..ba").unwrap();
        assert_eq!(range.to_string(), "aa..ba");
    }
}
