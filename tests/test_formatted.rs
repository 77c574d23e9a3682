use rstest::rstest;
use tagsmith::tags::{body, div, each, html, li, p, p_with, pre_with, script, textarea_with, ul};
use tagsmith::{Config, DomContent, Fragment, Render, Tag};

#[test]
fn test_formatted_tags() {
    assert_eq!(
        div().with(p_with("Hello")).render_formatted(),
        "<div>\n    <p>\n        Hello\n    </p>\n</div>\n"
    );
}

#[test]
fn test_formatted_does_not_format_pre() {
    let code = "public void renderModel(Appendable writer, Object model) throws IOException {\n        writer.append(text);\n    }";
    assert_eq!(
        div().with(pre_with(code)).render_formatted(),
        format!("<div>\n    <pre>{}</pre>\n</div>\n", code)
    );
}

#[test]
fn test_formatted_does_not_format_textarea() {
    assert_eq!(
        div().with(textarea_with("fred\ntom")).render_formatted(),
        "<div>\n    <textarea>fred\ntom</textarea>\n</div>\n"
    );
}

#[test]
fn test_formatted_each_inside_nested_list() {
    let html = div().with(ul().with(each(1..=2, |i| li().with(i.to_string()))));
    assert_eq!(
        html.render_formatted(),
        concat!(
            "<div>\n",
            "    <ul>\n",
            "        <li>\n",
            "            1\n",
            "        </li>\n",
            "        <li>\n",
            "            2\n",
            "        </li>\n",
            "    </ul>\n",
            "</div>\n",
        )
    );
}

#[test]
fn test_formatted_empty_script() {
    let page = html().with(body().with(script().with_src("/testScript.js")));
    assert_eq!(
        page.render_formatted(),
        "<html>\n    <body>\n        <script src=\"/testScript.js\">\n        </script>\n    </body>\n</html>\n"
    );
}

#[rstest]
fn test_formatted_with_closed_empty_tags(#[values(true, false)] close: bool) {
    let config = Config::default().with_close_empty_tags(close);
    let formatted = p().with(tagsmith::tags::br()).render_formatted_with(&config);
    let br = if close { "<br/>" } else { "<br>" };
    assert_eq!(formatted, format!("<p>\n    {}\n</p>\n", br));
}

#[test]
fn test_formatted_fragment_and_content() {
    let fragment = Fragment::new().with((p_with("a"), p_with("b")));
    assert_eq!(fragment.render_formatted(), "<p>\n    a\n</p>\n<p>\n    b\n</p>\n");
    assert_eq!(DomContent::from("plain").render_formatted(), "plain\n");
}

#[test]
fn test_formatted_and_compact_agree_without_whitespace() {
    let html = div().with((p_with("a"), ul().with(li().with("b"))));
    let squashed: String = html
        .render_formatted()
        .lines()
        .map(str::trim)
        .collect();
    assert_eq!(squashed, html.render());
}
