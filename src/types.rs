use crate::error::{ConvertError, ConvertResult};
use crate::escaping::{escape_commas, unescape_commas};
use std::fmt;
use std::str::FromStr;

/// Output syntax for converted rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Named multi-line rules: `windowrule { name = ... }`
    #[default]
    Block,
    /// Anonymous single-line rules: `windowrule = ..., ...`
    Inline,
}

impl Dialect {
    /// Encode a value for this dialect.
    ///
    /// Inline rules split on commas, so a bare `,` must be written as `\,`.
    /// Block rules hold one value per line and take the comma as-is.
    pub fn encode(self, value: &str) -> String {
        match self {
            Dialect::Block => unescape_commas(value),
            Dialect::Inline => escape_commas(value),
        }
    }

    /// Argument separator used inside generated expressions
    pub fn separator(self) -> &'static str {
        match self {
            Dialect::Block => ",",
            Dialect::Inline => "\\,",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Block => write!(f, "block"),
            Dialect::Inline => write!(f, "inline"),
        }
    }
}

impl FromStr for Dialect {
    type Err = ConvertError;

    fn from_str(s: &str) -> ConvertResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" | "named" => Ok(Dialect::Block),
            "inline" | "anonymous" => Ok(Dialect::Inline),
            _ => Err(ConvertError::unknown_dialect(s)),
        }
    }
}

/// Which rule keyword a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Window,
    Layer,
}

impl RuleKind {
    /// Classify a rule keyword by prefix (`windowrulev2` is a window rule)
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.starts_with("windowrule") {
            Some(RuleKind::Window)
        } else if keyword.starts_with("layerrule") {
            Some(RuleKind::Layer)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleKind::Window => "windowrule",
            RuleKind::Layer => "layerrule",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of an item inside a rule.
///
/// The declaration order is the render order: flags, then selectors,
/// then variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    /// Property assignment applied when the rule matches
    Flag,
    /// Match criterion such as `class`
    Selector,
    /// Bare named predicate such as `$floaters`
    Variable,
}

/// One atomic piece of a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    /// Empty for variables
    pub value: String,
    pub kind: ItemKind,
    /// Set when the source text could not be read as an item
    pub error: bool,
}

impl Item {
    pub fn flag(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: ItemKind::Flag,
            error: false,
        }
    }

    pub fn selector(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            kind: ItemKind::Selector,
            error: false,
        }
    }

    pub fn variable(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            kind: ItemKind::Variable,
            error: false,
        }
    }

    /// Placeholder for source text that is not a valid item
    pub fn malformed(text: impl Into<String>) -> Self {
        Self {
            key: text.into(),
            value: String::new(),
            kind: ItemKind::Flag,
            error: true,
        }
    }

    /// Whether this item takes part in the rule signature
    pub fn is_matcher(&self) -> bool {
        !self.error && matches!(self.kind, ItemKind::Selector | ItemKind::Variable)
    }
}

/// One logical window or layer rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: RuleKind,
    pub items: Vec<Item>,
}

impl Rule {
    pub fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Compute the merge key for this rule
    pub fn signature(&self) -> Signature {
        Signature::of(&self.items)
    }

    /// Flags in item order
    pub fn flags(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(|item| !item.error && item.kind == ItemKind::Flag)
    }

    /// Value of the flag with the given key, if set
    pub fn flag(&self, key: &str) -> Option<&str> {
        self.flags()
            .find(|item| item.key == key)
            .map(|item| item.value.as_str())
    }

    /// Items marked as malformed
    pub fn errors(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.error)
    }

    /// Stable sort into render order (flags, selectors, variables)
    pub fn sort_items(&mut self) {
        self.items.sort_by_key(|item| item.kind);
    }
}

/// Canonical, order-independent encoding of a rule's selectors and variables.
///
/// Built from the sorted `key:value` strings of every selector and variable
/// item, joined with `|`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    pub fn of(items: &[Item]) -> Self {
        let mut parts: Vec<String> = items
            .iter()
            .filter(|item| item.is_matcher())
            .map(|item| format!("{}:{}", item.key, item.value))
            .collect();
        parts.sort();
        Signature(parts.join("|"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
