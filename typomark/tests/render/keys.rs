use crate::common::render;
use proptest::prelude::*;
use typomark::MarkdownRenderer;

fn assert_contiguous(keys: &[usize]) {
    let expected: Vec<usize> = (0..keys.len()).collect();
    assert_eq!(keys, expected.as_slice());
}

#[test]
fn test_keys_are_contiguous_in_pre_order() {
    let root = render("# Title\n\n| a | b |\n| - | - |\n| c | d |\n\n![i](x.png) [l](y)\n");
    assert_contiguous(&root.keys());
}

#[test]
fn test_keys_reset_on_each_call() {
    let mut renderer = MarkdownRenderer::new();
    let source = "- one\n- *two*\n";

    let first = renderer.render(source).unwrap();
    let second = renderer.render(source).unwrap();

    assert_eq!(first.keys()[0], 0);
    assert_eq!(second.keys()[0], 0);
    assert_eq!(first, second);
}

#[test]
fn test_renderers_do_not_share_counters() {
    let mut left = MarkdownRenderer::new();
    let mut right = MarkdownRenderer::new();

    let a = left.render("alpha *beta*\n").unwrap();
    let b = right.render("gamma\n").unwrap();
    let c = left.render("gamma\n").unwrap();

    assert_contiguous(&a.keys());
    assert_eq!(b, c);
}

fn markdown_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z ]{0,11}".prop_map(|s| format!("{s}\n")),
        "[a-z]{1,8}".prop_map(|s| format!("*{s}* and **{s}**\n")),
        "[a-z]{1,8}".prop_map(|s| format!("# {s}\n")),
        "[a-z]{1,8}".prop_map(|s| format!("- {s}\n  - {s}\n")),
        "[a-z]{1,8}".prop_map(|s| format!("[{s}](http://{s}) ![{s}]({s}.png)\n")),
        Just("---\n".to_string()),
        Just("| h | i |\n| - | - |\n| x | y |\n".to_string()),
        Just("> quote\n".to_string()),
        Just("```\ncode\n```\n".to_string()),
    ]
}

proptest! {
    #[test]
    fn keys_are_contiguous_and_deterministic(lines in prop::collection::vec(markdown_line(), 1..8)) {
        let source = lines.join("\n");
        let mut renderer = MarkdownRenderer::new();

        let first = renderer.render(&source);
        let second = renderer.render(&source);
        prop_assert_eq!(&first, &second);

        let root = first.unwrap();
        let keys = root.keys();
        let expected: Vec<usize> = (0..keys.len()).collect();
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(renderer.last_key_count(), root.keys().len());
    }
}
