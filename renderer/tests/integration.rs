use draft::entity::{Entity, EntityType};
use renderer::{HashtagConfig, RenderError, RenderOptions};

fn render_with(source: &str, options: &RenderOptions) -> String {
    let document = draft::parser::parse_str(source).expect("parse failed");
    renderer::render_html(&document, options).expect("render failed")
}

fn render(source: &str) -> String {
    render_with(source, &RenderOptions::default())
}

#[test]
fn plain_paragraph() {
    let src = r#"{"blocks": [{"text": "hello", "type": "unstyled"}], "entityMap": {}}"#;
    assert_eq!(render(src), "<p>hello</p>\n");
}

#[test]
fn link_entity() {
    let src = r#"{
        "blocks": [{"text": "go", "type": "unstyled",
                    "entityRanges": [{"offset": 0, "length": 2, "key": 0}]}],
        "entityMap": {"0": {"type": "LINK", "data": {"url": "http://x.com"}}}
    }"#;
    assert_eq!(
        render(src),
        "<p><a href=\"http://x.com\" target=\"_self\">go</a></p>\n"
    );
}

#[test]
fn range_without_entity_key_is_plain_text() {
    let null_key = r#"{"blocks": [{"type": "unstyled", "text": "go",
        "entityRanges": [{"offset": 0, "length": 2, "key": null}]}], "entityMap": {}}"#;
    assert_eq!(render(null_key), "<p>go</p>\n");

    let missing_key = r#"{"blocks": [{"type": "unstyled", "text": "go",
        "entityRanges": [{"offset": 0, "length": 2}]}], "entityMap": {}}"#;
    assert_eq!(render(missing_key), "<p>go</p>\n");
}

#[test]
fn hashtag_scenario() {
    let src = r#"{"blocks": [{"text": "hello #world test", "type": "unstyled"}]}"#;
    let options = RenderOptions::default().with_hashtags(HashtagConfig::default());
    assert_eq!(
        render_with(src, &options),
        "<p>hello <a href=\"#world\" class=\"wysiwyg-hashtag\">#world</a> test</p>\n"
    );
    // Detection is off without a config.
    assert_eq!(render(src), "<p>hello #world test</p>\n");
}

#[test]
fn style_merge_scenario() {
    let src = r#"{"blocks": [{"text": "ab", "type": "unstyled", "inlineStyleRanges": [
        {"offset": 0, "length": 1, "style": "BOLD"},
        {"offset": 1, "length": 1, "style": "ITALIC"}
    ]}]}"#;
    assert_eq!(render(src), "<p><strong>a</strong><em>b</em></p>\n");
}

#[test]
fn nested_list_scenario() {
    let src = r#"{"blocks": [
        {"text": "one", "type": "unordered-list-item", "depth": 0},
        {"text": "two", "type": "unordered-list-item", "depth": 1},
        {"text": "three", "type": "unordered-list-item", "depth": 0}
    ]}"#;
    assert_eq!(
        render(src),
        "<ul>\n<li>one</li>\n<ul>\n<li>two</li>\n</ul>\n<li>three</li>\n</ul>\n"
    );
}

#[test]
fn atomic_image_scenario() {
    let src = r#"{
        "blocks": [{"text": "", "type": "atomic",
                    "entityRanges": [{"offset": 0, "length": 1, "key": "img"}]}],
        "entityMap": {"img": {"type": "IMAGE", "data": {
            "src": "cat.png", "alt": "cat", "height": "auto", "width": "auto", "alignment": "left"
        }}}
    }"#;
    assert_eq!(
        render(src),
        "<img src=\"cat.png\" alt=\"cat\" style=\"float:left;height: auto;width: auto\"/>\n"
    );
}

#[test]
fn leading_trailing_space_scenario() {
    let src = r#"{"blocks": [{"text": "  hi  ", "type": "unstyled"}]}"#;
    assert_eq!(render(src), "<p>&nbsp;&nbsp;hi&nbsp;&nbsp;</p>\n");
}

#[test]
fn directional_blocks_and_items() {
    let src = r#"{"blocks": [
        {"text": "p", "type": "unstyled"},
        {"text": "i", "type": "ordered-list-item"}
    ]}"#;
    let options = RenderOptions::default().with_directional(true);
    assert_eq!(
        render_with(src, &options),
        "<p dir = \"auto\">p</p>\n<ol>\n<li dir = \"auto\">i</li>\n</ol>\n"
    );
}

#[test]
fn list_run_between_blocks() {
    let src = r#"{"blocks": [
        {"text": "A", "type": "header-one"},
        {"text": "x", "type": "ordered-list-item"},
        {"text": "y", "type": "unordered-list-item"},
        {"text": "quote", "type": "blockquote"},
        {"text": "z", "type": "unordered-list-item"}
    ]}"#;
    assert_eq!(
        render(src),
        concat!(
            "<h1>A</h1>\n",
            "<ol>\n<li>x</li>\n</ol>\n<ul>\n<li>y</li>\n</ul>\n",
            "<blockquote>quote</blockquote>\n",
            "<ul>\n<li>z</li>\n</ul>\n"
        )
    );
}

#[test]
fn styled_mention_inside_list_item() {
    let src = r#"{
        "blocks": [{"text": "hi @ann", "type": "unordered-list-item",
                    "inlineStyleRanges": [{"offset": 3, "length": 4, "style": "color-red"}],
                    "entityRanges": [{"offset": 3, "length": 4, "key": "m"}]}],
        "entityMap": {"m": {"type": "MENTION", "data": {"url": "/ann", "value": "ann"}}}
    }"#;
    assert_eq!(
        render(src),
        concat!(
            "<ul>\n<li>hi <a href=\"/ann\" class=\"wysiwyg-mention\" data-mention data-value=\"ann\">",
            "<span style=\"color: red;\">@ann</span></a></li>\n</ul>\n"
        )
    );
}

#[test]
fn multiline_code_block() {
    let src = r#"{"blocks": [{"text": "if a < b {\n  go();\n}", "type": "code"}]}"#;
    assert_eq!(
        render(src),
        "<pre>if a &lt; b {<br>  go();<br>}</pre>\n"
    );
}

#[test]
fn entity_transform_overrides_builtin() {
    let document = draft::parser::parse_str(
        r#"{
            "blocks": [{"text": "go", "type": "unstyled",
                        "entityRanges": [{"offset": 0, "length": 2, "key": "0"}]}],
            "entityMap": {"0": {"type": "LINK", "data": {"url": "http://x.com"}}}
        }"#,
    )
    .unwrap();
    let transform = |entity: &Entity, text: Option<&str>| match entity.entity_type {
        EntityType::Link => Some(format!(
            "<a rel=\"nofollow\" href=\"{}\">{}</a>",
            entity.attr("url").unwrap_or_default(),
            text.unwrap_or_default()
        )),
        _ => None,
    };
    let html = renderer::render(&document, &RenderOptions::default(), Some(&transform)).unwrap();
    assert_eq!(html, "<p><a rel=\"nofollow\" href=\"http://x.com\">go</a></p>\n");
}

#[test]
fn undefined_entity_fails() {
    let document = draft::parser::parse_str(
        r#"{"blocks": [{"text": "x", "type": "unstyled",
                        "entityRanges": [{"offset": 0, "length": 1, "key": 9}]}]}"#,
    )
    .unwrap();
    let err = renderer::render_html(&document, &RenderOptions::default()).unwrap_err();
    assert_eq!(err, RenderError::UndefinedEntity { key: "9".into() });
    assert_eq!(
        err.to_string(),
        "undefined entity: key '9' is not in the entity map"
    );
}

#[test]
fn rendering_is_repeatable() {
    let src = r##"{
        "blocks": [
            {"text": "#tag and link", "type": "unstyled",
             "inlineStyleRanges": [{"offset": 0, "length": 8, "style": "BOLD"}],
             "entityRanges": [{"offset": 9, "length": 4, "key": 0}]},
            {"text": "x", "type": "unordered-list-item", "depth": 0},
            {"text": "y", "type": "unordered-list-item", "depth": 2}
        ],
        "entityMap": {"0": {"type": "LINK", "data": {"url": "u", "targetOption": "_blank"}}}
    }"##;
    let options = RenderOptions::default()
        .with_hashtags(HashtagConfig::default())
        .with_directional(true);
    assert_eq!(render_with(src, &options), render_with(src, &options));
}
