use insta::assert_snapshot;
use paste::paste;
use rstest::rstest;
use tagsmith::tags::{self, *};
use tagsmith::{attr, element, Config, ContainerTag, EmptyTag, Render, Tag};

fn complex_page(should_log_in: bool, should_sign_up: bool) -> ContainerTag {
    html().with((
        head().with(title().with_text("Test")),
        body().with((
            header().with(h1().with((
                text("Test Header "),
                a_with("with link").with_href("http://example.com"),
                text("."),
            ))),
            tags::main().with((
                h2_with("Test Form"),
                div()
                    .with((
                        input()
                            .with_type("email")
                            .with_name("email")
                            .with_placeholder("Email"),
                        input()
                            .with_type("password")
                            .with_name("password")
                            .with_placeholder("Password"),
                    ))
                    .cond_with(
                        should_log_in,
                        button().with_type("submit").with_text("Login"),
                    )
                    .cond_with(
                        should_sign_up,
                        button().with_type("submit").with_text("Signup"),
                    ),
            )),
            footer()
                .attr(attr::CLASS, "footer")
                .cond_attr(1 == 1, attr::ID, "id")
                .with_text("Test Footer"),
            script().with_src("/testScript.js"),
        )),
    ))
}

fn complex_page_with_helpers(should_log_in: bool, should_sign_up: bool) -> ContainerTag {
    html_with((
        head_with(title_with("Test")),
        body_with((
            header_with(h1_with((
                text("Test Header "),
                a_with("with link").with_href("http://example.com"),
                text("."),
            ))),
            tags::main_with((
                h2_with("Test Form"),
                div_with((
                    input()
                        .with_type("email")
                        .with_name("email")
                        .with_placeholder("Email"),
                    input()
                        .with_type("password")
                        .with_name("password")
                        .with_placeholder("Password"),
                    if_then(
                        should_log_in,
                        button().with_type("submit").with_text("Login"),
                    ),
                    if_then(
                        should_sign_up,
                        button().with_type("submit").with_text("Signup"),
                    ),
                )),
            )),
            footer_with("Test Footer")
                .attr(attr::CLASS, "footer")
                .cond_attr(1 == 1, attr::ID, "id"),
            script().with_src("/testScript.js"),
        )),
    ))
}

const COMPLEX_EXPECTED: &str = concat!(
    "<!DOCTYPE html><html><head><title>Test</title></head><body>",
    "<header><h1>Test Header <a href=\"http://example.com\">with link</a>.</h1></header>",
    "<main><h2>Test Form</h2><div>",
    "<input type=\"email\" name=\"email\" placeholder=\"Email\">",
    "<input type=\"password\" name=\"password\" placeholder=\"Password\">",
    "<button type=\"submit\">Login</button></div></main>",
    "<footer class=\"footer\" id=\"id\">Test Footer</footer>",
    "<script src=\"/testScript.js\"></script></body></html>",
);

#[test]
fn test_complex_render() {
    let rendered = document().render() + &complex_page(true, false).render();
    assert_eq!(rendered, COMPLEX_EXPECTED);
    assert_eq!(
        document_with(&complex_page_with_helpers(true, false)).unwrap(),
        COMPLEX_EXPECTED
    );
}

#[test]
fn test_complex_render_formatted() {
    let formatted = document_formatted(&complex_page_with_helpers(true, false)).unwrap();
    assert_eq!(
        formatted,
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "    <head>\n",
            "        <title>\n",
            "            Test\n",
            "        </title>\n",
            "    </head>\n",
            "    <body>\n",
            "        <header>\n",
            "            <h1>\n",
            "                Test Header \n",
            "                <a href=\"http://example.com\">\n",
            "                    with link\n",
            "                </a>\n",
            "                .\n",
            "            </h1>\n",
            "        </header>\n",
            "        <main>\n",
            "            <h2>\n",
            "                Test Form\n",
            "            </h2>\n",
            "            <div>\n",
            "                <input type=\"email\" name=\"email\" placeholder=\"Email\">\n",
            "                <input type=\"password\" name=\"password\" placeholder=\"Password\">\n",
            "                <button type=\"submit\">\n",
            "                    Login\n",
            "                </button>\n",
            "            </div>\n",
            "        </main>\n",
            "        <footer class=\"footer\" id=\"id\">\n",
            "            Test Footer\n",
            "        </footer>\n",
            "        <script src=\"/testScript.js\">\n",
            "        </script>\n",
            "    </body>\n",
            "</html>\n",
        )
    );
}

#[test]
fn test_render_is_repeatable() {
    let page = complex_page(false, true);
    assert_eq!(page.render(), page.render());
    assert!(page.render().contains("Signup"));
    assert!(!page.render().contains("Login"));
}

#[test]
fn test_tag_render() {
    let tag = ContainerTag::new("a").attr("href", "http://example.com");
    assert_snapshot!(tag.render(), @r#"<a href="http://example.com"></a>"#);
}

#[test]
fn test_complex_tag_render() {
    let tag = html().with(body().with((
        header(),
        tags::main().with(p_with("Main stuff...")),
        footer().cond_with(1 == 1, p_with("Conditional with!")),
    )));
    assert_snapshot!(
        tag.render(),
        @"<html><body><header></header><main><p>Main stuff...</p></main><footer><p>Conditional with!</p></footer></body></html>"
    );
}

#[test]
fn test_small_document() {
    let page = html_with((head_with(title_with("Test")), body_with(p_with("Hi"))));
    assert_snapshot!(
        page.render(),
        @"<html><head><title>Test</title></head><body><p>Hi</p></body></html>"
    );
}

#[rstest]
#[case(area(), "area")]
#[case(base(), "base")]
#[case(br(), "br")]
#[case(col(), "col")]
#[case(embed(), "embed")]
#[case(hr(), "hr")]
#[case(img(), "img")]
#[case(input(), "input")]
#[case(keygen(), "keygen")]
#[case(link(), "link")]
#[case(meta(), "meta")]
#[case(param(), "param")]
#[case(source(), "source")]
#[case(track(), "track")]
#[case(wbr(), "wbr")]
fn test_void_elements(#[case] tag: EmptyTag, #[case] name: &str) {
    assert_eq!(tag.tag_name(), name);
    assert_eq!(tag.render_with(&Config::default()), format!("<{}>", name));
    let closing = Config::default().with_close_empty_tags(true);
    assert_eq!(tag.render_with(&closing), format!("<{}/>", name));
}

macro_rules! check_containers {
    ($short_form:ident; $($name:ident),*) => {
        paste! {
            $(
                let name = stringify!($name);
                assert_eq!(tags::$name().render(), format!("<{0}></{0}>", name));
                assert_eq!(tags::[<$name _with>]("x").render(), format!("<{0}>x</{0}>", name));
                assert_eq!(
                    tags::[<$name _attrs_with>](&$short_form, "x").render(),
                    format!("<{0} id=\"i\" class=\"c\">x</{0}>", name)
                );
                assert_eq!(element(name).render(), format!("<{0}></{0}>", name));
            )*
        }
    };
}

#[test]
fn test_container_elements() {
    let short_form = attrs("#i.c").unwrap();
    check_containers!(
        short_form;
        a, abbr, address, article, aside, audio, b, bdi, bdo, blockquote, body, button, canvas,
        caption, cite, code, colgroup, datalist, dd, del, details, dfn, dialog, div, dl, dt, em,
        fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6, head, header, html,
        i, iframe, ins, kbd, label, legend, li, main, map, mark, menu, menuitem, meter, nav,
        noscript, object, ol, optgroup, option, output, p, pre, progress, q, rp, rt, ruby, s,
        samp, script, section, select, small, span, strong, style, sub, summary, sup, table,
        tbody, td, textarea, tfoot, th, thead, time, title, tr, u, ul, var, video
    );
}

#[rstest]
fn test_void_attrs(#[values("#i.c", "#i", ".c")] selector: &str) {
    let short_form = attrs(selector).unwrap();
    let rendered = img_attrs(&short_form).render();
    assert_eq!(rendered.contains("id=\"i\""), selector.contains('#'));
    assert_eq!(rendered.contains("class=\"c\""), selector.contains('.'));
}

#[test]
fn test_custom_tags() {
    assert_snapshot!(tag("my-widget").with_text("x").render(), @"<my-widget>x</my-widget>");
    assert_snapshot!(empty_tag("my-marker").render(), @"<my-marker>");
    assert_snapshot!(tag("").with(p()).render(), @"<p></p>");
}
