//! # hyprrule
//!
//! Converts Hyprland window and layer rules between the legacy single-line
//! syntax and the named block syntax.
//!
//! Large configs tend to accumulate one `windowrule` line per effect. This
//! crate reads those lines, normalizes renamed keys, rewrites percentage and
//! cursor-relative geometry into expressions, merges rules that match the
//! same windows, and writes the result in either syntax. Lines that are not
//! rules are left exactly where they were.
//!
//! ## Features
//!
//! - **Key normalization**: `initialClass` → `initial_class`, `noborder` → `border_size = 0`, ...
//! - **Expression rewriting**: `size 50% 50%` → `(monitor_w*0.5) (monitor_h*0.5)`,
//!   `move cursor 10 10` → `(cursor_x+(10)) (cursor_y+(10))`
//! - **Merging**: rules with the same selectors are folded into one, later flags win
//! - **Both directions**: block rules are read back as well, so output converts again
//! - **Strict mode**: collect malformed fragments and unterminated blocks as errors
//!
//! ## Example
//!
//! ```rust
//! use hyprrule::{convert, Dialect};
//!
//! let input = "\
//! bind = SUPER, Return, exec, kitty
//! windowrule = float, class:kitty
//! windowrule = size 50% 50%, class:kitty";
//!
//! let output = convert(input, Dialect::Block);
//! assert_eq!(
//!     output,
//!     "bind = SUPER, Return, exec, kitty
//! windowrule {
//!   name = windowrule-1
//!   float = on
//!   size = (monitor_w*0.5) (monitor_h*0.5)
//!   match:class = kitty
//! }
//! "
//! );
//!
//! // And back again
//! let inline = convert(&output, Dialect::Inline);
//! assert!(inline.contains("windowrule = float on, size (monitor_w*0.5) (monitor_h*0.5), match:class kitty"));
//! ```
//!
//! ## Strict Mode
//!
//! ```rust
//! use hyprrule::{ConvertOptions, Converter};
//!
//! let converter = Converter::with_options(ConvertOptions {
//!     strict: true,
//!     ..ConvertOptions::default()
//! });
//!
//! assert!(converter.try_convert("windowrule {\n  float = on\n").is_err());
//! ```

// Module declarations
mod config;
mod document;
mod error;
mod escaping;
mod expressions;
mod grammar;
mod merge;
mod normalize;
mod parser;
mod serialize;
mod types;

// Public API exports
pub use config::{ConvertOptions, Converter};
pub use error::{ConvertError, ConvertResult};
pub use types::{Dialect, Item, ItemKind, Rule, RuleKind, Signature};

// Re-export submodules for advanced usage
pub use document::{DocumentNode, LineSpan, RuleDocument};
pub use escaping::{escape_commas, unescape_commas};
pub use expressions::{SizeMode, SizeRewrite, rewrite_move, rewrite_size};
pub use merge::{RuleSet, merge};
pub use normalize::{SelectorKey, default_for, normalize_flag_key, normalize_selector_key};
pub use parser::{ParsedFragment, parse_fragment, parse_line};
pub use serialize::{RuleCounters, render, render_document};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convert every rule in `source` to `dialect` with default options.
pub fn convert(source: &str, dialect: Dialect) -> String {
    Converter::with_options(ConvertOptions::for_dialect(dialect)).convert(source)
}
