//! Key normalization tables
//!
//! Legacy rule keys are camelCase or run-together words (`initialClass`,
//! `bordersize`); named rules use snake_case. Selector keys (left of a
//! colon) and flag keys (first word of a flag fragment) live in separate
//! tables because the same word can mean different things in each position.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Result of looking up a selector key.
///
/// Most keys map to one canonical key; a few legacy selectors pack two
/// values into one fragment and expand to a fixed pair of keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorKey<'a> {
    Single(&'a str),
    Pair(&'static str, &'static str),
}

enum SelectorTarget {
    Single(&'static str),
    Pair(&'static str, &'static str),
}

static SELECTOR_KEYS: LazyLock<HashMap<&'static str, SelectorTarget>> = LazyLock::new(|| {
    HashMap::from([
        ("initialClass", SelectorTarget::Single("initial_class")),
        ("initialTitle", SelectorTarget::Single("initial_title")),
        ("floating", SelectorTarget::Single("float")),
        ("pinned", SelectorTarget::Single("pin")),
        (
            "fullscreenstate",
            SelectorTarget::Pair("fullscreen_state_internal", "fullscreen_state_client"),
        ),
        ("onworkspace", SelectorTarget::Single("workspace")),
        ("xdgTag", SelectorTarget::Single("xdg_tag")),
        ("noinitialfocus", SelectorTarget::Single("no_initial_focus")),
    ])
});

static FLAG_KEYS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("bordersize", "border_size"),
        ("bordercolor", "border_color"),
        ("roundingpower", "rounding_power"),
        ("noborder", "border_size"),
        ("noanim", "no_anim"),
        ("noblur", "no_blur"),
        ("nodim", "no_dim"),
        ("noshadow", "no_shadow"),
        ("norounding", "no_rounding"),
        ("nofocus", "no_focus"),
        ("nofollowmouse", "no_follow_mouse"),
        ("allowsinput", "allows_input"),
        ("focusonactivate", "focus_on_activate"),
        ("fullscreenstate", "fullscreen_state"),
        ("maxsize", "max_size"),
        ("minsize", "min_size"),
        ("nomaxsize", "no_max_size"),
        ("keepaspectratio", "keep_aspect_ratio"),
        ("idleinhibit", "idle_inhibit"),
        ("persistentsize", "persistent_size"),
        ("stayfocused", "stay_focused"),
        ("dimaround", "dim_around"),
        ("noclosefor", "no_close_for"),
        ("suppressevent", "suppress_event"),
        ("forcergbx", "force_rgbx"),
        ("syncfullscreen", "sync_fullscreen"),
        ("renderunfocused", "render_unfocused"),
        ("scrollmouse", "scroll_mouse"),
        ("scrolltouchpad", "scroll_touchpad"),
        ("noshortcutsinhibit", "no_shortcuts_inhibit"),
        ("noscreenshare", "no_screen_share"),
        ("novrr", "no_vrr"),
        ("noinitialfocus", "no_initial_focus"),
        ("ignorealpha", "ignore_alpha"),
        ("ignorezero", "ignore_alpha"),
        ("blurpopups", "blur_popups"),
        ("abovelock", "above_lock"),
    ])
});

static DEFAULTS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("border_size", "0"),
        ("float", "on"),
        ("xwayland", "0"),
        ("fullscreen", "on"),
        ("pin", "on"),
        ("focus", "0"),
        ("group", "0"),
        ("modal", "0"),
        ("no_anim", "on"),
        ("ignore_alpha", "0"),
        ("fullscreen_state_internal", "0"),
        ("fullscreen_state_client", "0"),
    ])
});

/// Fallback for a flag with no registered default
pub const DEFAULT_VALUE: &str = "on";

/// Value used for the second key of a pair when the fragment supplies only one
pub const MISSING_PAIR_VALUE: &str = "0";

/// Map a selector key (left of the colon) to its canonical form.
///
/// Lookup is case-sensitive; unknown keys pass through unchanged.
pub fn normalize_selector_key(raw: &str) -> SelectorKey<'_> {
    match SELECTOR_KEYS.get(raw) {
        Some(SelectorTarget::Single(key)) => SelectorKey::Single(*key),
        Some(SelectorTarget::Pair(first, second)) => SelectorKey::Pair(*first, *second),
        None => SelectorKey::Single(raw),
    }
}

/// Map a flag key to its canonical form. The key is lowercased first.
pub fn normalize_flag_key(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    match FLAG_KEYS.get(lowered.as_str()) {
        Some(key) => (*key).to_string(),
        None => lowered,
    }
}

/// Default value for a canonical flag key given without arguments
pub fn default_for(key: &str) -> &'static str {
    DEFAULTS.get(key).copied().unwrap_or(DEFAULT_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_single() {
        assert_eq!(
            normalize_selector_key("initialClass"),
            SelectorKey::Single("initial_class")
        );
        assert_eq!(normalize_selector_key("floating"), SelectorKey::Single("float"));
    }

    #[test]
    fn test_selector_passthrough_keeps_case() {
        assert_eq!(normalize_selector_key("class"), SelectorKey::Single("class"));
        assert_eq!(normalize_selector_key("Title"), SelectorKey::Single("Title"));
    }

    #[test]
    fn test_selector_pair() {
        assert_eq!(
            normalize_selector_key("fullscreenstate"),
            SelectorKey::Pair("fullscreen_state_internal", "fullscreen_state_client")
        );
    }

    #[test]
    fn test_flag_rename_lowercases() {
        assert_eq!(normalize_flag_key("BorderSize"), "border_size");
        assert_eq!(normalize_flag_key("noborder"), "border_size");
        assert_eq!(normalize_flag_key("ignorezero"), "ignore_alpha");
    }

    #[test]
    fn test_flag_unmapped_lowercased() {
        assert_eq!(normalize_flag_key("Opacity"), "opacity");
        assert_eq!(normalize_flag_key("float"), "float");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_for("border_size"), "0");
        assert_eq!(default_for("float"), "on");
        assert_eq!(default_for("xwayland"), "0");
        assert_eq!(default_for("center"), "on");
    }
}
