use crate::error::ConvertResult;
use crate::expressions::{rewrite_move, rewrite_size};
use crate::grammar::{Rule as Syntax, RuleLineParser};
use crate::normalize::{
    DEFAULT_VALUE, MISSING_PAIR_VALUE, SelectorKey, default_for, normalize_flag_key,
    normalize_selector_key,
};
use crate::types::{Dialect, Item, Rule, RuleKind};

const MATCH_PREFIX: &str = "match:";

/// Items produced by one fragment.
///
/// Most fragments yield a single item; selectors such as `fullscreenstate`
/// expand into two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedFragment {
    Single(Item),
    Pair(Item, Item),
}

impl IntoIterator for ParsedFragment {
    type Item = Item;
    type IntoIter = std::iter::Chain<std::iter::Once<Item>, std::option::IntoIter<Item>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            ParsedFragment::Single(item) => std::iter::once(item).chain(None),
            ParsedFragment::Pair(first, second) => std::iter::once(first).chain(Some(second)),
        }
    }
}

/// Parse one inline rule line.
///
/// Returns `None` when the line has no `=` or its left-hand side does not
/// start with `windowrule` or `layerrule`.
pub fn parse_line(line: &str, dialect: Dialect) -> Option<Rule> {
    let pair = RuleLineParser::parse_line(Syntax::inline_rule, line).ok()?;

    let mut head = "";
    let mut fragments = Vec::new();
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Syntax::rule_head => head = inner.as_str(),
            Syntax::fragments => {
                fragments.extend(inner.into_inner().map(|fragment| fragment.as_str().trim()))
            }
            _ => {}
        }
    }

    let kind = RuleKind::from_keyword(head.trim())?;
    let mut rule = Rule::new(kind);

    match kind {
        RuleKind::Layer if fragments.iter().any(|f| f.starts_with(MATCH_PREFIX)) => {
            // Named inline form: `layerrule = blur on, match:namespace waybar`
            for fragment in fragments {
                rule.items.push(match fragment.strip_prefix(MATCH_PREFIX) {
                    _ if fragment.is_empty() => Item::malformed(fragment),
                    Some(matcher) => match matcher.split_once(char::is_whitespace) {
                        Some((_, namespace)) if !namespace.trim().is_empty() => {
                            Item::selector(dialect.encode(namespace.trim()), DEFAULT_VALUE)
                        }
                        _ => Item::malformed(fragment),
                    },
                    None => plain_flag(fragment, dialect),
                });
            }
        }
        RuleKind::Layer => {
            let mut fragments = fragments.into_iter();

            // First fragment is the effect, the rest are namespaces
            if let Some(first) = fragments.next() {
                rule.items.push(if first.is_empty() {
                    Item::malformed(first)
                } else {
                    plain_flag(first, dialect)
                });
            }
            for namespace in fragments {
                rule.items.push(if namespace.is_empty() {
                    Item::malformed(namespace)
                } else {
                    Item::selector(dialect.encode(namespace), DEFAULT_VALUE)
                });
            }
        }
        RuleKind::Window => {
            for fragment in fragments.into_iter().filter(|f| !f.is_empty()) {
                rule.items.extend(parse_fragment(fragment, dialect));
            }
        }
    }

    Some(rule)
}

/// Classify and normalize one window-rule fragment.
///
/// - `$name` is a variable
/// - `match:key value` is an already canonical selector (`match:key` alone is a variable)
/// - `key:value` (colon before any whitespace) is a selector
/// - anything else is a flag: `key [args...]`
pub fn parse_fragment(fragment: &str, dialect: Dialect) -> ParsedFragment {
    let fragment = fragment.trim();
    if fragment.is_empty() {
        return ParsedFragment::Single(Item::malformed(fragment));
    }

    if fragment.starts_with('$') {
        return ParsedFragment::Single(Item::variable(fragment));
    }

    if let Some(matcher) = fragment.strip_prefix(MATCH_PREFIX) {
        let item = match matcher.split_once(char::is_whitespace) {
            Some((key, value)) if !key.is_empty() => {
                Item::selector(key, dialect.encode(value.trim()))
            }
            None if !matcher.is_empty() => Item::variable(matcher),
            _ => Item::malformed(fragment),
        };
        return ParsedFragment::Single(item);
    }

    let colon = fragment.find(':');
    let space = fragment.find(char::is_whitespace);
    match (colon, space) {
        (Some(colon), None) => selector(fragment, colon, dialect),
        (Some(colon), Some(space)) if space > colon => selector(fragment, colon, dialect),
        _ => ParsedFragment::Single(window_flag(fragment, dialect)),
    }
}

fn selector(fragment: &str, colon: usize, dialect: Dialect) -> ParsedFragment {
    let raw_key = fragment[..colon].trim();
    let raw_value = fragment[colon + 1..].trim();

    match normalize_selector_key(raw_key) {
        SelectorKey::Single(key) => {
            ParsedFragment::Single(Item::selector(key, dialect.encode(raw_value)))
        }
        SelectorKey::Pair(first, second) => {
            let mut values = raw_value.split_whitespace();
            let first_value = values.next().unwrap_or(MISSING_PAIR_VALUE);
            let second_value = values.next().unwrap_or(MISSING_PAIR_VALUE);
            ParsedFragment::Pair(
                Item::selector(first, first_value),
                Item::selector(second, second_value),
            )
        }
    }
}

fn window_flag(fragment: &str, dialect: Dialect) -> Item {
    let mut tokens = fragment.split_whitespace();
    let key = normalize_flag_key(tokens.next().unwrap_or_default());
    let args: Vec<&str> = tokens.collect();

    match key.as_str() {
        "size" => {
            let rewrite = rewrite_size(&args);
            flag_with_default(rewrite.mode.key().to_string(), rewrite.values.join(" "), dialect)
        }
        "move" => {
            let values = rewrite_move(&args, dialect);
            flag_with_default(key, values.join(" "), dialect)
        }
        _ => flag_with_default(key, args.join(" "), dialect),
    }
}

/// Flag fragment without expression rewriting (layer rules)
fn plain_flag(fragment: &str, dialect: Dialect) -> Item {
    let mut tokens = fragment.split_whitespace();
    let key = normalize_flag_key(tokens.next().unwrap_or_default());
    let value = tokens.collect::<Vec<_>>().join(" ");
    flag_with_default(key, value, dialect)
}

/// Explicit value, then the registered default, then `on`
fn flag_with_default(key: String, value: String, dialect: Dialect) -> Item {
    if value.is_empty() {
        let value = default_for(&key);
        Item::flag(key, value)
    } else {
        Item::flag(key, dialect.encode(&value))
    }
}

/// Rule kind named by a block opening line such as `windowrule[name] {`
pub(crate) fn parse_block_open(line: &str) -> Option<RuleKind> {
    let pair = RuleLineParser::parse_line(Syntax::block_open, line).ok()?;
    pair.into_inner()
        .find(|inner| inner.as_rule() == Syntax::rule_keyword)
        .and_then(|keyword| RuleKind::from_keyword(keyword.as_str()))
}

pub(crate) fn is_block_close(line: &str) -> bool {
    RuleLineParser::matches(Syntax::block_close, line)
}

/// Parse one entry line of a block rule.
///
/// Returns `Ok(None)` for entries that carry no item (`name = ...`) and the
/// grammar error for entries that do not fit the `key [= value]` shape.
pub(crate) fn parse_block_entry(
    kind: RuleKind,
    line: &str,
    dialect: Dialect,
) -> ConvertResult<Option<Item>> {
    let pair = RuleLineParser::parse_line(Syntax::block_entry, line)?;

    let mut key = "";
    let mut value = None;
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Syntax::entry_key => key = inner.as_str(),
            Syntax::entry_value => value = Some(inner.as_str().trim()),
            _ => {}
        }
    }

    if key == "name" {
        return Ok(None);
    }

    let Some(matcher) = key.strip_prefix(MATCH_PREFIX) else {
        let key = normalize_flag_key(key);
        return Ok(Some(flag_with_default(key, value.unwrap_or_default().to_string(), dialect)));
    };

    Ok(Some(match value {
        _ if matcher.is_empty() => Item::malformed(line),
        None => Item::variable(matcher),
        Some("") => Item::malformed(line),
        Some(value) => match kind {
            RuleKind::Window => Item::selector(matcher, dialect.encode(value)),
            RuleKind::Layer => Item::selector(dialect.encode(value), DEFAULT_VALUE),
        },
    }))
}
