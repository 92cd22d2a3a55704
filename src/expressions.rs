//! Size and move expression rewriting
//!
//! Legacy `size` and `move` arguments use shorthands (`50%`, `>300`, `w`,
//! `cursor`, `onscreen`). Named rules expect plain arithmetic over the
//! geometry variables `monitor_w`, `monitor_h`, `window_w`, `window_h`,
//! `cursor_x` and `cursor_y`. Expressions are rewritten textually and never
//! evaluated.

use crate::types::Dialect;
use std::fmt;

/// Which size flag a `size` fragment turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    #[default]
    Exact,
    /// `>` prefix
    Min,
    /// `<` prefix
    Max,
}

impl SizeMode {
    /// Flag key emitted for this mode
    pub fn key(self) -> &'static str {
        match self {
            SizeMode::Exact => "size",
            SizeMode::Min => "size_min",
            SizeMode::Max => "size_max",
        }
    }
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rewritten `size` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeRewrite {
    pub mode: SizeMode,
    pub values: Vec<String>,
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn for_index(index: usize) -> Self {
        if index == 0 { Axis::X } else { Axis::Y }
    }

    fn monitor(self) -> &'static str {
        match self {
            Axis::X => "monitor_w",
            Axis::Y => "monitor_h",
        }
    }

    fn window(self) -> &'static str {
        match self {
            Axis::X => "window_w",
            Axis::Y => "window_h",
        }
    }

    fn cursor(self) -> &'static str {
        match self {
            Axis::X => "cursor_x",
            Axis::Y => "cursor_y",
        }
    }
}

/// Rewrite the arguments of a `size` flag.
///
/// A `>` or `<` prefix selects `size_min` / `size_max`; when tokens disagree
/// the last prefix wins. `N%` becomes `(monitor_w*f)` for the first token
/// and `(monitor_h*f)` for the rest.
pub fn rewrite_size(tokens: &[&str]) -> SizeRewrite {
    let mut mode = SizeMode::Exact;
    let values = tokens
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let mut token = raw.trim();
            if let Some(rest) = token.strip_prefix('>') {
                mode = SizeMode::Min;
                token = rest;
            } else if let Some(rest) = token.strip_prefix('<') {
                mode = SizeMode::Max;
                token = rest;
            }
            match percent_of(Axis::for_index(index).monitor(), token) {
                Some(expr) => expr,
                None => token.to_string(),
            }
        })
        .collect();

    SizeRewrite { mode, values }
}

/// Rewrite the arguments of a `move` flag for the given output dialect.
///
/// `cursor` and `onscreen` may appear anywhere and are modifiers, not
/// positions. Each remaining token is an axis expression whose `-`-separated
/// parts may be `w` (window size on that axis), `N%` (share of the monitor)
/// or a literal.
pub fn rewrite_move(tokens: &[&str], dialect: Dialect) -> Vec<String> {
    let mut cursor = false;
    let mut onscreen = false;
    let mut positions = Vec::new();

    for token in tokens {
        match *token {
            "cursor" => cursor = true,
            "onscreen" => onscreen = true,
            other => positions.push(other),
        }
    }

    let sep = dialect.separator();

    positions
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let raw = raw.trim();
            // Already an expression (output of an earlier conversion)
            if !cursor && !onscreen && is_parenthesized(raw) {
                return raw.to_string();
            }

            let axis = Axis::for_index(index);
            let mut expr = raw
                .split('-')
                .map(|part| {
                    let part = part.trim();
                    if part == "w" {
                        axis.window().to_string()
                    } else {
                        percent_of(axis.monitor(), part).unwrap_or_else(|| part.to_string())
                    }
                })
                .collect::<Vec<_>>()
                .join("-");

            if onscreen {
                expr = format!(
                    "min(max({expr}{sep}0){sep}{}-{})",
                    axis.monitor(),
                    axis.window()
                );
            }
            if cursor {
                expr = format!("{}+({expr})", axis.cursor());
            }
            format!("({expr})")
        })
        .collect()
}

/// Whether the whole token is one balanced `( ... )` group
fn is_parenthesized(token: &str) -> bool {
    if !token.starts_with('(') || !token.ends_with(')') {
        return false;
    }
    let mut depth = 0usize;
    for (idx, ch) in token.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return idx == token.len() - 1;
                }
            }
            _ => {}
        }
    }
    false
}

/// `N%` → `(dimension*N/100)`; `None` when the token has no `%` suffix
fn percent_of(dimension: &str, token: &str) -> Option<String> {
    let number = token.strip_suffix('%')?;
    let factor = parse_leading_float(number) / 100.0;
    Some(format!("({dimension}*{factor})"))
}

/// Read the longest numeric prefix of `input`, like a lenient float parser.
///
/// Text with no leading number yields `NaN`, which then shows up verbatim in
/// the generated expression.
fn parse_leading_float(input: &str) -> f64 {
    let input = input.trim_start();
    let mut chars = input.char_indices().peekable();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if let Some(&(_, ch)) = chars.peek() {
        if ch == '+' || ch == '-' {
            chars.next();
        }
    }

    while let Some(&(idx, ch)) = chars.peek() {
        if ch.is_ascii_digit() {
            seen_digit = true;
            end = idx + 1;
        } else if ch == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        chars.next();
    }

    if !seen_digit {
        return f64::NAN;
    }

    // Optional exponent, only taken when followed by digits
    if let Some(&(_, 'e' | 'E')) = chars.peek() {
        let mut lookahead = chars.clone();
        lookahead.next();
        if let Some(&(_, '+' | '-')) = lookahead.peek() {
            lookahead.next();
        }
        while let Some(&(idx, ch)) = lookahead.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            end = idx + 1;
            lookahead.next();
        }
    }

    input[..end].parse::<f64>().unwrap_or(f64::NAN)
}
