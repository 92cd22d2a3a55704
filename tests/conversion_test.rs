//! End-to-end conversion of legacy rule lines.

use hyprrule::{Dialect, convert};

// ========== BLOCK OUTPUT ==========

#[test]
fn test_float_with_class_block() {
    let output = convert("windowrule = float, class:kitty", Dialect::Block);
    assert_eq!(
        output,
        "windowrule {\n  name = windowrule-1\n  float = on\n  match:class = kitty\n}\n"
    );
}

#[test]
fn test_size_percentages_block() {
    let output = convert("windowrule = size 50% 50%", Dialect::Block);
    assert!(output.contains("  size = (monitor_w*0.5) (monitor_h*0.5)\n"));
}

#[test]
fn test_merge_same_selectors() {
    let input = "windowrule = float, class:kitty\nwindowrule = fullscreen, class:kitty";
    let output = convert(input, Dialect::Block);
    assert_eq!(
        output,
        "windowrule {\n  name = windowrule-1\n  float = on\n  fullscreen = on\n  match:class = kitty\n}\n"
    );
}

#[test]
fn test_move_cursor_block() {
    let output = convert("windowrule = move cursor 10 10", Dialect::Block);
    assert!(output.contains("  move = (cursor_x+(10)) (cursor_y+(10))\n"));
}

#[test]
fn test_move_onscreen_block_uses_plain_comma() {
    let output = convert("windowrule = move onscreen cursor -50% -50%, class:pavucontrol", Dialect::Block);
    assert!(output.contains(
        "  move = (cursor_x+(min(max(-(monitor_w*0.5),0),monitor_w-window_w))) \
         (cursor_y+(min(max(-(monitor_h*0.5),0),monitor_h-window_h)))\n"
    ));
}

#[test]
fn test_numbering_per_kind() {
    let input = "\
windowrule = float, class:a
layerrule = blur, waybar
windowrule = float, class:b
layerrule = blur, rofi";
    let output = convert(input, Dialect::Block);
    assert!(output.contains("name = windowrule-1"));
    assert!(output.contains("name = windowrule-2"));
    assert!(output.contains("name = layerrule-1"));
    assert!(output.contains("name = layerrule-2"));
    assert!(!output.contains("windowrule-3"));
}

#[test]
fn test_layer_rule_block() {
    let output = convert("layerrule = ignorezero, waybar", Dialect::Block);
    assert_eq!(
        output,
        "layerrule {\n  name = layerrule-1\n  ignore_alpha = 0\n  match:namespace = waybar\n}\n"
    );
}

#[test]
fn test_variables_render_last() {
    let output = convert("windowrule = $floaters, class:a, pin", Dialect::Block);
    assert_eq!(
        output,
        "windowrule {\n  name = windowrule-1\n  pin = on\n  match:class = a\n  match:$floaters\n}\n"
    );
}

#[test]
fn test_fullscreenstate_selector_pair() {
    let output = convert("windowrule = float, fullscreenstate:1", Dialect::Block);
    assert!(output.contains("  match:fullscreen_state_internal = 1\n"));
    assert!(output.contains("  match:fullscreen_state_client = 0\n"));
}

// ========== INLINE OUTPUT ==========

#[test]
fn test_float_with_class_inline() {
    let output = convert("windowrule = float, class:kitty", Dialect::Inline);
    assert_eq!(output, "windowrule = float on, match:class kitty");
}

#[test]
fn test_move_onscreen_inline_escapes_comma() {
    let output = convert("windowrule = move onscreen 10 20, class:a", Dialect::Inline);
    assert_eq!(
        output,
        r"windowrule = move (min(max(10\,0)\,monitor_w-window_w)) (min(max(20\,0)\,monitor_h-window_h)), match:class a"
    );
}

#[test]
fn test_layer_rule_inline() {
    let output = convert("layerrule = blur, waybar", Dialect::Inline);
    assert_eq!(output, "layerrule = blur on, match:namespace waybar");
}

#[test]
fn test_escaped_comma_stays_in_fragment() {
    // `\,` never splits, in legacy lines as well as in generated expressions
    let output = convert(r"windowrule = float, title:foo\, class:bar", Dialect::Block);
    assert!(output.contains("  match:title = foo, class:bar\n"));
    assert!(!output.contains("match:class"));
}

// ========== DEDUPLICATION & PLACEMENT ==========

#[test]
fn test_duplicates_removed_from_output() {
    let input = "\
# first
windowrule = float, class:a
exec-once = waybar
windowrule = pin, class:a
windowrule = opacity 0.9, class:a
# last";
    let output = convert(input, Dialect::Inline);
    assert_eq!(
        output,
        "# first\nwindowrule = float on, pin on, opacity 0.9, match:class a\nexec-once = waybar\n# last"
    );
}

#[test]
fn test_last_flag_value_wins() {
    let input = "windowrule = opacity 0.8, class:a\nwindowrule = opacity 0.95, class:a";
    let output = convert(input, Dialect::Inline);
    assert_eq!(output, "windowrule = opacity 0.95, match:class a");
}

#[test]
fn test_selector_order_does_not_matter() {
    let input = "windowrule = float, class:a, title:b\nwindowrule = pin, title:b, class:a";
    let output = convert(input, Dialect::Inline);
    assert_eq!(output, "windowrule = float on, pin on, match:class a, match:title b");
}

#[test]
fn test_different_selectors_not_merged() {
    let input = "windowrule = float, class:a\nwindowrule = float, class:b";
    let output = convert(input, Dialect::Inline);
    assert_eq!(
        output,
        "windowrule = float on, match:class a\nwindowrule = float on, match:class b"
    );
}

// ========== PASS-THROUGH ==========

#[test]
fn test_non_rule_lines_untouched() {
    let input = "\
monitor = ,preferred,auto,1
$terminal = kitty

general {
    gaps_in = 5
}
bind = SUPER, Q, exec, $terminal";
    assert_eq!(convert(input, Dialect::Block), input);
    assert_eq!(convert(input, Dialect::Inline), input);
}

#[test]
fn test_commented_rule_untouched() {
    let input = "# windowrule = float, class:a\n  #windowrule = pin, class:a";
    assert_eq!(convert(input, Dialect::Block), input);
}

#[test]
fn test_trailing_newline_kept() {
    let output = convert("windowrule = float, class:a\n", Dialect::Inline);
    assert_eq!(output, "windowrule = float on, match:class a\n");
}

#[test]
fn test_windowrulev2_lines() {
    let output = convert("windowrulev2 = float, initialClass:steam", Dialect::Inline);
    assert_eq!(output, "windowrule = float on, match:initial_class steam");
}

#[test]
fn test_empty_input() {
    assert_eq!(convert("", Dialect::Block), "");
}
