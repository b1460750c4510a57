use std::fmt;

/// Non-fatal conditions reported to the user while processing inputs.
/// Each one has a defined outcome; none of them aborts the run.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Input ends in a non-alphanumeric character and is echoed unchanged
    InertInput { input: String },
    /// Input line is empty
    EmptyInput,
    /// Range expansion stopped at the configured limit
    RangeTruncated { expr: String, limit: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::InertInput { input } => {
                write!(
                    f,
                    "'{}' does not end in an alphanumeric character; left unchanged",
                    input
                )
            }
            Notice::EmptyInput => {
                write!(f, "Empty input; left unchanged")
            }
            Notice::RangeTruncated { expr, limit } => {
                write!(
                    f,
                    "Expansion of '{}' stopped at the limit of {} values",
                    expr, limit
                )
            }
        }
    }
}
