//! pest grammar for single rule lines (see `rules.pest`)

use crate::error::{ConvertError, ConvertResult};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "rules.pest"]
pub struct RuleLineParser;

impl RuleLineParser {
    /// Parse `line` as `rule`, returning the top-level pair
    pub fn parse_line(rule: Rule, line: &str) -> ConvertResult<Pair<'_, Rule>> {
        let mut pairs = RuleLineParser::parse(rule, line)?;
        pairs
            .next()
            .ok_or_else(|| ConvertError::parse(1, 1, "grammar rule produced no pair"))
    }

    /// Whether `line` matches `rule` at all
    pub fn matches(rule: Rule, line: &str) -> bool {
        RuleLineParser::parse(rule, line).is_ok()
    }
}
