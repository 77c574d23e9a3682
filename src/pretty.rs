use crate::content::DomContent;
use crate::element::ContainerTag;
use crate::render::{Render, RenderContext};
use crate::tag::Tag;

/// Writes a tree with one element per line, indented by depth.
///
/// Fragments and anonymous containers do not take up a level: their
/// children are laid out as if they were children of the enclosing element.
/// Inside whitespace-preserving elements nothing is reformatted.
pub(crate) struct Formatter<'a> {
    context: RenderContext<'a>,
}

impl<'a> Formatter<'a> {
    pub(crate) fn new(context: RenderContext<'a>) -> Formatter<'a> {
        Formatter { context }
    }

    fn compact(&self, content: &DomContent) -> String {
        let mut writer = String::new();
        content.render_model(&mut writer, &self.context);
        writer
    }

    fn indent(&self, level: usize, text: &str) -> String {
        self.context.config().indent(level, text)
    }

    fn is_preformatted(&self, tag: &ContainerTag) -> bool {
        tag.has_tag_name() && self.context.config().preformatted.matches(tag.tag_name())
    }

    pub(crate) fn top_level(&self, writer: &mut String, content: &DomContent) {
        match content {
            DomContent::Container(tag) => self.container(writer, tag, 0),
            DomContent::Fragment(fragment) => self.children(writer, fragment.children(), 0, false),
            _ => self.child(writer, content, 0, false),
        }
    }

    /// Format a container whose open tag starts at `level`.
    ///
    /// The open tag itself is not indented; the caller does that.
    pub(crate) fn container(&self, writer: &mut String, tag: &ContainerTag, level: usize) {
        if !tag.has_tag_name() {
            self.children(writer, tag.children(), level, false);
            return;
        }
        let preformatted = self.is_preformatted(tag);
        tag.write_open_tag(writer, &self.context);
        if !preformatted {
            writer.push('\n');
        }
        self.children(writer, tag.children(), level + 1, preformatted);
        if !preformatted {
            writer.push_str(&self.indent(level, ""));
        }
        tag.write_close_tag(writer);
        writer.push('\n');
    }

    pub(crate) fn children(
        &self,
        writer: &mut String,
        children: &[DomContent],
        level: usize,
        preformatted: bool,
    ) {
        for child in children {
            self.child(writer, child, level, preformatted);
        }
    }

    fn child(&self, writer: &mut String, child: &DomContent, level: usize, preformatted: bool) {
        if preformatted {
            writer.push_str(&self.indent(0, &self.compact(child)));
            return;
        }
        match child {
            DomContent::Container(tag) if tag.has_tag_name() => {
                let mut formatted = String::new();
                self.container(&mut formatted, tag, level);
                writer.push_str(&self.indent(level, &formatted));
            }
            DomContent::Container(tag) => {
                self.children(writer, tag.children(), level, false);
            }
            DomContent::Fragment(fragment) => {
                self.children(writer, fragment.children(), level, false);
            }
            _ => {
                writer.push_str(&self.indent(level, &self.compact(child)));
                writer.push('\n');
            }
        }
    }
}
