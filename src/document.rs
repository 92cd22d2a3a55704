//! Line-level document model.
//!
//! A config is split into lines; every line either passes through untouched
//! or belongs to a rule. Inline rules cover one line, block rules cover the
//! lines from their opening keyword to the closing brace.
//!
//! The main types are:
//! - [`RuleDocument`] - The whole input with its parsed rules
//! - [`DocumentNode`] - A pass-through line or a rule with its source span
//! - [`LineSpan`] - Zero-based, end-exclusive range of source lines

use crate::config::ConvertOptions;
use crate::error::ConvertError;
use crate::parser::{is_block_close, parse_block_entry, parse_block_open, parse_line};
use crate::types::{Dialect, Item, Rule, RuleKind};

/// Source lines covered by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// First line (zero-based)
    pub start: usize,
    /// One past the last line
    pub end: usize,
}

impl LineSpan {
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line + 1,
        }
    }

    /// One-based line number of the first line, for messages
    pub fn first_line(&self) -> usize {
        self.start + 1
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A node in the document, in source order
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentNode {
    /// Blank line, comment, or anything that is not a rule
    Passthrough {
        line: usize,
    },

    /// Inline or block rule
    Rule {
        rule: Rule,
        span: LineSpan,
    },
}

/// Parsed input: the original lines plus the nodes covering them
#[derive(Debug, Clone)]
pub struct RuleDocument<'a> {
    lines: Vec<&'a str>,
    nodes: Vec<DocumentNode>,
    issues: Vec<ConvertError>,
}

impl<'a> RuleDocument<'a> {
    /// Split `input` on `\n` and parse every rule for the configured dialect
    pub fn parse(input: &'a str, options: &ConvertOptions) -> Self {
        let lines: Vec<&str> = input.split('\n').collect();
        let mut document = Self {
            lines,
            nodes: Vec::new(),
            issues: Vec::new(),
        };

        let mut index = 0;
        while index < document.lines.len() {
            index = document.parse_at(index, options);
        }

        document
    }

    /// Parse the node starting at `index`, returning the next unparsed line
    fn parse_at(&mut self, index: usize, options: &ConvertOptions) -> usize {
        let line = self.lines[index];
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            self.nodes.push(DocumentNode::Passthrough { line: index });
            return index + 1;
        }

        if options.parse_blocks {
            if let Some(kind) = parse_block_open(trimmed) {
                return self.parse_block(kind, index, options.dialect);
            }
        }

        match parse_line(line, options.dialect) {
            Some(rule) => {
                for item in rule.errors() {
                    self.issues.push(ConvertError::malformed(index + 1, item.key.as_str()));
                }
                self.nodes.push(DocumentNode::Rule {
                    rule,
                    span: LineSpan::single(index),
                });
            }
            None => {
                tracing::trace!("Passing through line {}", index + 1);
                self.nodes.push(DocumentNode::Passthrough { line: index });
            }
        }

        index + 1
    }

    fn parse_block(&mut self, kind: RuleKind, open: usize, dialect: Dialect) -> usize {
        let Some(close) = self.find_block_close(open) else {
            tracing::warn!(
                "Rule block at line {} has no closing brace, passing it through",
                open + 1
            );
            self.issues.push(ConvertError::unterminated(open + 1));
            self.nodes.push(DocumentNode::Passthrough { line: open });
            return open + 1;
        };

        let mut rule = Rule::new(kind);
        for index in open + 1..close {
            let entry = self.lines[index].trim();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            match parse_block_entry(kind, entry, dialect) {
                Ok(Some(item)) => {
                    if item.error {
                        self.issues.push(ConvertError::malformed(index + 1, entry));
                    }
                    rule.items.push(item);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::trace!("Unreadable block entry at line {}: {}", index + 1, err);
                    self.issues.push(match err {
                        ConvertError::ParseError { column, message, .. } => {
                            ConvertError::parse(index + 1, column, message)
                        }
                        other => other,
                    });
                    rule.items.push(Item::malformed(entry));
                }
            }
        }

        self.nodes.push(DocumentNode::Rule {
            rule,
            span: LineSpan {
                start: open,
                end: close + 1,
            },
        });
        close + 1
    }

    /// Index of the `}` closing the block opened at `open`.
    ///
    /// The search stops at a line that opens another block, so a rule block
    /// missing its brace never swallows the section after it.
    fn find_block_close(&self, open: usize) -> Option<usize> {
        for index in open + 1..self.lines.len() {
            let line = self.lines[index].trim();
            if is_block_close(line) {
                return Some(index);
            }
            if line.ends_with('{') {
                return None;
            }
        }
        None
    }

    /// Source line by zero-based index
    pub fn line(&self, index: usize) -> &'a str {
        self.lines[index]
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn nodes(&self) -> &[DocumentNode] {
        &self.nodes
    }

    /// Parsed rules in source order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.nodes.iter().filter_map(|node| match node {
            DocumentNode::Rule { rule, .. } => Some(rule),
            DocumentNode::Passthrough { .. } => None,
        })
    }

    /// Malformed items and unterminated blocks found while parsing
    pub fn issues(&self) -> &[ConvertError] {
        &self.issues
    }
}
