use tagsmith::tags::{a, body, div, h1, html, p};
use tagsmith::{DomContent, HtmlAttribute, Render, RenderContext, Tag};

struct ButtonModel {
    text: String,
}

struct PageModel {
    title: String,
    text: String,
    button: ButtonModel,
}

fn page_model() -> PageModel {
    PageModel {
        title: "Test title".to_string(),
        text: "Test & text".to_string(),
        button: ButtonModel {
            text: "Click".to_string(),
        },
    }
}

// The button renders its own markup against the button part of the page
// model.
fn button() -> DomContent {
    let template = div().with_class("button").with(
        div()
            .with_class("button-text")
            .with(DomContent::model_template(|text: &String| text.clone())),
    );
    DomContent::template(move |context: &RenderContext<'_>| {
        let rendered = match context.model_as::<PageModel>() {
            Some(page) => template.render_model_to_string(&context.rebind(&page.button.text)),
            None => String::new(),
        };
        tagsmith::raw_html(rendered)
    })
}

trait RenderToString {
    fn render_model_to_string(&self, context: &RenderContext<'_>) -> String;
}

impl<T: Render> RenderToString for T {
    fn render_model_to_string(&self, context: &RenderContext<'_>) -> String {
        let mut writer = String::new();
        self.render_model(&mut writer, context);
        writer
    }
}

#[test]
fn test_template_with_model() {
    let page = html().with(body().with((
        h1().with(DomContent::model_template(|page: &PageModel| page.title.clone())),
        p().with(DomContent::model_template(|page: &PageModel| page.text.clone())),
        button(),
    )));
    assert_eq!(
        page.render_with_model(&page_model()),
        concat!(
            "<html><body><h1>Test title</h1><p>Test &amp; text</p>",
            "<div class=\"button\"><div class=\"button-text\">Click</div></div>",
            "</body></html>",
        )
    );
}

#[test]
fn test_template_without_model_renders_nothing() {
    let page = h1().with(DomContent::model_template(|page: &PageModel| page.title.clone()));
    assert_eq!(page.render(), "<h1></h1>");
    assert_eq!(page.render_with_model(&42), "<h1></h1>");
}

#[test]
fn test_dynamic_attribute() {
    let link = a()
        .with_attribute(HtmlAttribute::bound("href", |context| {
            match context.model_as::<PageModel>() {
                Some(page) => format!("/buttons/{}", page.button.text.to_lowercase()),
                None => "/".to_string(),
            }
        }))
        .with_text("Go");
    assert_eq!(link.render(), "<a href=\"/\">Go</a>");
    assert_eq!(
        link.render_with_model(&page_model()),
        "<a href=\"/buttons/click\">Go</a>"
    );
}

#[test]
fn test_templates_render_formatted() {
    let page = div().with(p().with(DomContent::model_template(|n: &u32| n.to_string())));
    let context_config = tagsmith::Config::default();
    let model = 3u32;
    let context = RenderContext::with_model(&context_config, &model);
    assert_eq!(
        page.render_formatted_model(&context),
        "<div>\n    <p>\n        3\n    </p>\n</div>\n"
    );
}
