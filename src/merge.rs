//! Folding rules that share a signature
//!
//! Rules whose selectors and variables are the same set describe the same
//! windows, so their flags can live in one rule. Later flags overwrite
//! earlier ones with the same key; selectors and variables are unioned
//! without duplicates.

use crate::types::{ItemKind, Rule, Signature};
use std::collections::HashMap;

/// Merged rules indexed by signature, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    index: HashMap<Signature, usize>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge every rule in input order
    pub fn from_rules<'r>(rules: impl IntoIterator<Item = &'r Rule>) -> Self {
        let mut set = Self::new();
        for rule in rules {
            set.insert(rule);
        }
        set
    }

    /// Fold `rule` into the entry for its signature, creating it if needed.
    ///
    /// The entry keeps the kind of the first rule seen for the signature.
    pub fn insert(&mut self, rule: &Rule) {
        let signature = rule.signature();
        let slot = match self.index.get(&signature) {
            Some(&slot) => {
                tracing::debug!("Folding {} rule into '{}'", rule.kind, signature);
                slot
            }
            None => {
                let slot = self.rules.len();
                self.rules.push(Rule::new(rule.kind));
                self.index.insert(signature, slot);
                slot
            }
        };

        let target = &mut self.rules[slot];
        for item in rule.items.iter().filter(|item| !item.error) {
            match item.kind {
                ItemKind::Flag => {
                    let existing = target
                        .items
                        .iter_mut()
                        .find(|e| e.kind == ItemKind::Flag && e.key == item.key);
                    match existing {
                        Some(existing) => *existing = item.clone(),
                        None => target.items.push(item.clone()),
                    }
                }
                ItemKind::Selector | ItemKind::Variable => {
                    let seen = target
                        .items
                        .iter()
                        .any(|e| e.kind == item.kind && e.key == item.key && e.value == item.value);
                    if !seen {
                        target.items.push(item.clone());
                    }
                }
            }
        }
        target.sort_items();
    }

    /// Merged rule for a signature computed from any of its source rules
    pub fn get(&self, signature: &Signature) -> Option<&Rule> {
        self.index.get(signature).map(|&slot| &self.rules[slot])
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn into_rules(self) -> Vec<Rule> {
        self.rules
    }
}

/// Merge rules with identical signatures, keeping first-seen order
pub fn merge(rules: &[Rule]) -> Vec<Rule> {
    RuleSet::from_rules(rules).into_rules()
}
