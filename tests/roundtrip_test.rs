//! Converting block output back to inline rules and forward again.

use hyprrule::{ConvertOptions, Dialect, Rule, RuleDocument, RuleSet, Signature, convert};
use std::collections::BTreeMap;

/// Signature → sorted (flag key, value) pairs of every merged rule
fn semantics(text: &str, dialect: Dialect) -> BTreeMap<Signature, Vec<(String, String)>> {
    let document = RuleDocument::parse(text, &ConvertOptions::for_dialect(dialect));
    let rules = RuleSet::from_rules(document.rules());
    rules
        .iter()
        .map(|rule: &Rule| {
            let mut flags: Vec<(String, String)> = rule
                .flags()
                .map(|item| (item.key.clone(), item.value.clone()))
                .collect();
            flags.sort();
            (rule.signature(), flags)
        })
        .collect()
}

const LEGACY: &str = "\
# floating utilities
windowrule = float, class:pavucontrol
windowrule = size 40% 60%, class:pavucontrol
windowrule = move onscreen cursor -50% -50%, class:pavucontrol
windowrule = opacity 0.9 0.8, initialTitle:Picture-in-Picture, $pip
windowrule = pin, $pip, initialTitle:Picture-in-Picture
windowrule = size >300 200, fullscreenstate:0 2
layerrule = blur, waybar
layerrule = ignorezero, waybar

windowrule = noborder, class:steam";

#[test]
fn test_block_inline_block_is_stable() {
    let block = convert(LEGACY, Dialect::Block);
    let inline = convert(&block, Dialect::Inline);
    let block_again = convert(&inline, Dialect::Block);

    assert_eq!(
        semantics(&block, Dialect::Block),
        semantics(&block_again, Dialect::Block)
    );
}

#[test]
fn test_block_output_reconverts_identically() {
    let block = convert(LEGACY, Dialect::Block);
    let inline = convert(&block, Dialect::Inline);
    let block_again = convert(&inline, Dialect::Block);
    let inline_again = convert(&block_again, Dialect::Inline);

    // Each block is followed by a blank line, so only compare the rules
    let rules = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    };
    assert_eq!(rules(&inline), rules(&inline_again));
}

#[test]
fn test_onscreen_commas_survive_inline() {
    let block = convert(
        "windowrule = move onscreen 10 10, class:a",
        Dialect::Block,
    );
    let inline = convert(&block, Dialect::Inline);
    assert!(inline.contains(r"move (min(max(10\,0)\,monitor_w-window_w))"));

    let block_again = convert(&inline, Dialect::Block);
    assert!(block_again.contains("  move = (min(max(10,0),monitor_w-window_w)) (min(max(10,0),monitor_h-window_h))\n"));
}

#[test]
fn test_block_rules_merge_with_inline_rules() {
    let input = "\
windowrule {
  name = terminals
  float = on
  match:class = kitty
}
windowrule = opacity 0.9, class:kitty";
    let output = convert(input, Dialect::Inline);
    assert_eq!(output, "windowrule = float on, opacity 0.9, match:class kitty");
}

#[test]
fn test_labelled_block_renamed() {
    let input = "windowrule[float-terminals] {\n  match:class = ^(kitty|alacritty)$\n  float = true\n}";
    let output = convert(input, Dialect::Block);
    assert_eq!(
        output,
        "windowrule {\n  name = windowrule-1\n  float = true\n  match:class = ^(kitty|alacritty)$\n}\n"
    );
}

#[test]
fn test_layer_block_to_inline() {
    let input = "layerrule {\n  name = layerrule-1\n  blur = on\n  ignore_alpha = 0.5\n  match:namespace = waybar\n}\n";
    let output = convert(input, Dialect::Inline);
    assert_eq!(output, "layerrule = blur on, ignore_alpha 0.5, match:namespace waybar\n");

    let back = convert(&output, Dialect::Block);
    assert_eq!(back, format!("{}\n", input));
}

#[test]
fn test_named_variable_survives_inline() {
    let block = "windowrule {\n  name = windowrule-1\n  float = on\n  match:floating\n}\n";
    let inline = convert(block, Dialect::Inline);
    assert_eq!(inline, "windowrule = float on, match:floating\n");

    assert_eq!(semantics(block, Dialect::Block), semantics(&inline, Dialect::Block));
    assert_eq!(convert(&inline, Dialect::Block), format!("{}\n", block));
}

#[test]
fn test_block_to_block_spacing_is_stable() {
    let once = convert(LEGACY, Dialect::Block);
    let twice = convert(&once, Dialect::Block);
    let thrice = convert(&twice, Dialect::Block);
    assert_eq!(once, twice);
    assert_eq!(twice, thrice);
}
