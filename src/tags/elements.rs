use paste::paste;

use crate::attr::ShortForm;
use crate::content::IntoContent;
use crate::element::{ContainerTag, EmptyTag};
use crate::tag::Tag;

macro_rules! container_elements {
    ($($name:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("An empty `<", stringify!($name), ">` element.")]
                pub fn $name() -> ContainerTag {
                    ContainerTag::new(stringify!($name))
                }

                #[doc = concat!("A `<", stringify!($name), ">` element with content.")]
                pub fn [<$name _with>](content: impl IntoContent) -> ContainerTag {
                    $name().with(content)
                }

                #[doc = concat!("A `<", stringify!($name), ">` element with an id and classes.")]
                pub fn [<$name _attrs>](short_form: &ShortForm) -> ContainerTag {
                    $name().with_short_form(short_form)
                }

                #[doc = concat!("A `<", stringify!($name), ">` element with an id, classes and content.")]
                pub fn [<$name _attrs_with>](
                    short_form: &ShortForm,
                    content: impl IntoContent,
                ) -> ContainerTag {
                    $name().with_short_form(short_form).with(content)
                }
            )*
        }
    };
}

macro_rules! void_elements {
    ($($name:ident),* $(,)?) => {
        paste! {
            $(
                #[doc = concat!("A `<", stringify!($name), ">` element.")]
                pub fn $name() -> EmptyTag {
                    EmptyTag::new(stringify!($name))
                }

                #[doc = concat!("A `<", stringify!($name), ">` element with an id and classes.")]
                pub fn [<$name _attrs>](short_form: &ShortForm) -> EmptyTag {
                    $name().with_short_form(short_form)
                }
            )*
        }
    };
}

void_elements! {
    area, base, br, col, embed, hr, img, input, keygen, link, meta, param, source, track, wbr,
}

container_elements! {
    a, abbr, address, article, aside, audio, b, bdi, bdo, blockquote, body, button, canvas,
    caption, cite, code, colgroup, datalist, dd, del, details, dfn, dialog, div, dl, dt, em,
    fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6, head, header, html, i,
    iframe, ins, kbd, label, legend, li, main, map, mark, menu, menuitem, meter, nav, noscript,
    object, ol, optgroup, option, output, p, pre, progress, q, rp, rt, ruby, s, samp, script,
    section, select, small, span, strong, style, sub, summary, sup, table, tbody, td, textarea,
    tfoot, th, thead, time, title, tr, u, ul, var, video,
}
