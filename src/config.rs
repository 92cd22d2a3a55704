use crate::document::RuleDocument;
use crate::error::{ConvertError, ConvertResult};
use crate::merge::RuleSet;
use crate::serialize::render_document;
use crate::types::Dialect;

/// Conversion options
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Output dialect
    pub dialect: Dialect,

    /// Report malformed fragments and unterminated blocks from `try_convert`
    pub strict: bool,

    /// Read block rules (`windowrule { ... }`) as input, not only inline ones
    pub parse_blocks: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::Block,
            strict: false,
            parse_blocks: true,
        }
    }
}

impl ConvertOptions {
    /// Default options targeting `dialect`
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }
}

/// Rule converter
///
/// Holds options only; every call builds its own document, merged rule set
/// and name counters, so a converter can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter with default options (block output)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom options
    pub fn with_options(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Convert `input`, passing through anything that is not a rule.
    ///
    /// Never fails; `strict` is ignored here.
    pub fn convert(&self, input: &str) -> String {
        let document = RuleDocument::parse(input, &self.options);
        self.render(&document)
    }

    /// Convert `input`, failing in strict mode when the input has problems.
    pub fn try_convert(&self, input: &str) -> ConvertResult<String> {
        let document = RuleDocument::parse(input, &self.options);
        if self.options.strict && !document.issues().is_empty() {
            return Err(ConvertError::multiple(document.issues().to_vec()));
        }
        Ok(self.render(&document))
    }

    fn render(&self, document: &RuleDocument<'_>) -> String {
        let rules = RuleSet::from_rules(document.rules());
        tracing::debug!(
            "Converting {} rules into {} merged {} rules",
            document.rules().count(),
            rules.len(),
            self.options.dialect
        );
        render_document(document, &rules, self.options.dialect)
    }
}
