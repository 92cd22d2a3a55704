//! Rendering rules back to text
//!
//! Block output:
//!
//! ```text
//! windowrule {
//!   name = windowrule-1
//!   float = on
//!   match:class = kitty
//! }
//! ```
//!
//! Inline output: `windowrule = float on, match:class kitty`

use crate::document::{DocumentNode, RuleDocument};
use crate::merge::RuleSet;
use crate::types::{Dialect, Item, ItemKind, Rule, RuleKind, Signature};
use std::collections::HashSet;

/// Sequential rule names, scoped to one conversion call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCounters {
    pub window: usize,
    pub layer: usize,
}

impl RuleCounters {
    /// Both counters start at 1
    pub fn new() -> Self {
        Self {
            window: 1,
            layer: 1,
        }
    }

    /// Name for the next rule of `kind`, advancing its counter
    pub fn next_name(&mut self, kind: RuleKind) -> String {
        let counter = match kind {
            RuleKind::Window => &mut self.window,
            RuleKind::Layer => &mut self.layer,
        };
        let name = format!("{}-{}", kind, counter);
        *counter += 1;
        name
    }
}

impl Default for RuleCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one rule. Items come out as flags, selectors, variables; malformed
/// items are skipped.
pub fn render(rule: &Rule, dialect: Dialect, counters: &mut RuleCounters) -> String {
    let mut items: Vec<&Item> = rule.items.iter().filter(|item| !item.error).collect();
    items.sort_by_key(|item| item.kind);
    let name = counters.next_name(rule.kind);

    match dialect {
        Dialect::Block => {
            let mut lines = Vec::with_capacity(items.len() + 3);
            lines.push(format!("{} {{", rule.kind));
            lines.push(format!("  name = {}", name));
            for item in items {
                lines.push(match item.kind {
                    ItemKind::Variable => format!("  match:{}", item.key),
                    ItemKind::Selector if rule.kind == RuleKind::Layer => {
                        format!("  match:namespace = {}", item.key)
                    }
                    ItemKind::Selector => format!("  match:{} = {}", item.key, item.value),
                    ItemKind::Flag => format!("  {} = {}", item.key, item.value),
                });
            }
            lines.push("}\n".to_string());
            lines.join("\n")
        }
        Dialect::Inline => {
            let parts: Vec<String> = items
                .into_iter()
                .map(|item| match item.kind {
                    // `$name` reads back as a variable on its own; other keys need the prefix
                    ItemKind::Variable if item.key.starts_with('$') => item.key.clone(),
                    ItemKind::Variable => format!("match:{}", item.key),
                    ItemKind::Selector if rule.kind == RuleKind::Layer => {
                        format!("match:namespace {}", item.key)
                    }
                    ItemKind::Selector => format!("match:{} {}", item.key, item.value),
                    ItemKind::Flag => format!("{} {}", item.key, item.value),
                })
                .collect();
            format!("{} = {}", rule.kind, parts.join(", "))
        }
    }
}

/// Rewrite a parsed document.
///
/// The first rule with a given signature is replaced by the merged rule;
/// later rules with the same signature are removed along with all of their
/// source lines. Everything else is copied verbatim, except that a block
/// rendered over a block span absorbs one blank line following it, so
/// converting block output again does not grow the spacing.
pub fn render_document(document: &RuleDocument<'_>, rules: &RuleSet, dialect: Dialect) -> String {
    let mut counters = RuleCounters::new();
    let mut rendered: HashSet<Signature> = HashSet::new();
    let mut output: Vec<String> = Vec::with_capacity(document.line_count());
    let mut absorb_blank = false;

    for node in document.nodes() {
        match node {
            DocumentNode::Passthrough { line } => {
                let text = document.line(*line);
                if absorb_blank && text.trim().is_empty() {
                    absorb_blank = false;
                    continue;
                }
                absorb_blank = false;
                output.push(text.to_string());
            }
            DocumentNode::Rule { rule, span } => {
                let signature = rule.signature();
                if rendered.contains(&signature) {
                    tracing::debug!(
                        "Dropping duplicate rule at line {} ('{}')",
                        span.first_line(),
                        signature
                    );
                    continue;
                }

                absorb_blank = false;
                match rules.get(&signature) {
                    Some(merged) => {
                        let text = render(merged, dialect, &mut counters);
                        absorb_blank = span.len() > 1 && text.ends_with('\n');
                        output.push(text);
                    }
                    // Not part of the merged set; keep the source text
                    None => output.extend((span.start..span.end).map(|i| document.line(i).to_string())),
                }
                rendered.insert(signature);
            }
        }
    }

    output.join("\n")
}
