use crate::common::{names, render, text};
use typomark::output::{OutputNode, WidgetKind};
use typomark::{ComrakParser, MarkdownRenderer, ParserOptions};

#[test]
fn test_emphasis_between_text() {
    let root = render("a *b* c\n");
    let paragraph = &root.children()[0];

    assert_eq!(
        paragraph.children(),
        &[
            text(2, "a "),
            OutputNode::Element {
                key: 3,
                tag: "i".to_string(),
                attributes: vec![],
                children: vec![text(4, "b")],
            },
            text(5, " c"),
        ]
    );
}

#[test]
fn test_strong_and_mixed_delimiters() {
    let root = render("**bold** and __also__ and _it_\n");
    let paragraph = &root.children()[0];
    assert_eq!(names(paragraph.children()), vec!["b", "#text", "b", "#text", "i"]);
    assert_eq!(paragraph.text_content(), "bold and also and it");
}

#[test]
fn test_image() {
    let root = render("![alt text](http://x/y.png)\n");
    let image = &root.children()[0].children()[0];

    assert_eq!(image.name(), "img");
    assert_eq!(image.attribute("src"), Some("http://x/y.png"));
    assert_eq!(image.attribute("alt"), Some("alt text"));
    assert!(image.children().is_empty());
}

#[test]
fn test_link() {
    let root = render("[text](http://example.com)\n");
    let link = &root.children()[0].children()[0];

    match link {
        OutputNode::Widget { kind, children, .. } => {
            assert_eq!(*kind, WidgetKind::AnchorLink);
            assert_eq!(children, &vec![text(4, "text")]);
        }
        other => panic!("Expected anchor widget, got {other:?}"),
    }
    assert_eq!(link.attribute("href"), Some("http://example.com"));
}

#[test]
fn test_code_span_keeps_markdown_literal() {
    let root = render("run `*x*` now\n");
    let code = &root.children()[0].children()[1];
    assert_eq!(code.name(), "code");
    assert_eq!(code.text_content(), "*x*");
}

#[test]
fn test_hard_break() {
    let root = render("one\\\ntwo\n");
    assert_eq!(
        names(root.children()[0].children()),
        vec!["#text", "br", "#text"]
    );
}

#[test]
fn test_inline_html_is_passed_through() {
    let root = render("press <kbd>Ctrl</kbd>\n");
    let paragraph = &root.children()[0];
    assert_eq!(
        names(paragraph.children()),
        vec!["#text", "#markup", "#text", "#markup"]
    );
    assert_eq!(paragraph.text_content(), "press <kbd>Ctrl</kbd>");
}

#[test]
fn test_strikethrough_text_is_kept() {
    let root = render("keep ~~this~~ text\n");
    let paragraph = &root.children()[0];
    assert_eq!(paragraph.text_content(), "keep this text");
    assert_eq!(names(paragraph.children()), vec!["#text", "#text", "#text"]);
}

#[test]
fn test_strikethrough_disabled_is_literal() {
    let parser = ComrakParser::new(ParserOptions {
        strikethrough: false,
        ..ParserOptions::default()
    });
    let root = MarkdownRenderer::with_parser(parser)
        .render("keep ~~this~~ text\n")
        .unwrap();
    assert_eq!(root.text_content(), "keep ~~this~~ text");
}

#[test]
fn test_bare_url_becomes_anchor() {
    let root = render("see https://example.com now\n");
    let link = &root.children()[0].children()[1];

    match link {
        OutputNode::Widget { kind, .. } => assert_eq!(*kind, WidgetKind::AnchorLink),
        other => panic!("Expected anchor widget, got {other:?}"),
    }
    assert_eq!(link.attribute("href"), Some("https://example.com"));
    assert_eq!(link.text_content(), "https://example.com");
}
