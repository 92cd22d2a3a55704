use std::fmt;

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can be reported while converting rules
///
/// Plain conversion never fails; these only surface through strict mode
/// ([`Converter::try_convert`](crate::Converter::try_convert)) and when
/// parsing a dialect name.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Parse error from pest
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    /// A rule fragment or block entry that could not be read as an item
    MalformedFragment { line: usize, fragment: String },

    /// A rule block that never reached its closing brace
    UnterminatedBlock { line: usize },

    /// Unknown output dialect name
    UnknownDialect { name: String },

    /// Multiple errors collected together
    Multiple { errors: Vec<ConvertError> },
}

impl ConvertError {
    /// Create a parse error
    pub fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        ConvertError::ParseError {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a malformed fragment error
    pub fn malformed(line: usize, fragment: impl Into<String>) -> Self {
        ConvertError::MalformedFragment {
            line,
            fragment: fragment.into(),
        }
    }

    /// Create an unterminated block error
    pub fn unterminated(line: usize) -> Self {
        ConvertError::UnterminatedBlock { line }
    }

    /// Create an unknown dialect error
    pub fn unknown_dialect(name: impl Into<String>) -> Self {
        ConvertError::UnknownDialect { name: name.into() }
    }

    /// Combine multiple errors, unwrapping a single one
    pub fn multiple(mut errors: Vec<ConvertError>) -> Self {
        if errors.len() == 1 {
            return errors.remove(0);
        }
        ConvertError::Multiple { errors }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ParseError {
                line,
                column,
                message,
            } => {
                write!(
                    f,
                    "Parse error at line {}, column {}: {}",
                    line, column, message
                )
            }
            ConvertError::MalformedFragment { line, fragment } => {
                write!(f, "Malformed rule fragment at line {}: '{}'", line, fragment)
            }
            ConvertError::UnterminatedBlock { line } => {
                write!(f, "Rule block opened at line {} is never closed", line)
            }
            ConvertError::UnknownDialect { name } => {
                write!(
                    f,
                    "Unknown dialect '{}': expected 'block' or 'inline'",
                    name
                )
            }
            ConvertError::Multiple { errors } => {
                writeln!(f, "Multiple errors occurred:")?;
                for (i, err) in errors.iter().enumerate() {
                    writeln!(f, "  {}. {}", i + 1, err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConvertError {}

impl<R: pest::RuleType> From<pest::error::Error<R>> for ConvertError {
    fn from(err: pest::error::Error<R>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((line, col)) => (line, col),
            pest::error::LineColLocation::Span((line, col), _) => (line, col),
        };

        ConvertError::ParseError {
            line,
            column,
            message: err.variant.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_unwraps_single() {
        let err = ConvertError::multiple(vec![ConvertError::unterminated(3)]);
        assert_eq!(err, ConvertError::UnterminatedBlock { line: 3 });
    }

    #[test]
    fn test_multiple_display_lists_errors() {
        let err = ConvertError::multiple(vec![
            ConvertError::unterminated(1),
            ConvertError::malformed(4, "float on"),
        ]);
        let text = err.to_string();
        assert!(text.contains("1. Rule block opened at line 1 is never closed"));
        assert!(text.contains("2. Malformed rule fragment at line 4: 'float on'"));
    }
}
