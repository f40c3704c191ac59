//! Icon display primitive.
//!
//! # Design
//! - Classification and sizing come from `core::icon`; this file only builds nodes.
//! - Inline SVG markup is mounted as a real DOM node so it inherits `currentColor`.
//! - Anything that is not a string is passed through untouched.

use crate::core::icon::{IconRender, glyph_style, plan_icon};
use gloo::console;
use homedeck_objects::decode_svg_data_url;
use yew::prelude::*;

/// Icon value: a string to classify or an already rendered node.
#[derive(Clone, PartialEq)]
pub(crate) enum IconSrc {
    Text(AttrValue),
    Node(Html),
}

impl From<AttrValue> for IconSrc {
    fn from(value: AttrValue) -> Self {
        Self::Text(value)
    }
}

impl From<String> for IconSrc {
    fn from(value: String) -> Self {
        Self::Text(AttrValue::from(value))
    }
}

impl From<Html> for IconSrc {
    fn from(value: Html) -> Self {
        Self::Node(value)
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub src: Option<IconSrc>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    /// Replaces `style` for glyph icons.
    #[prop_or_default]
    pub style_utf8: Option<AttrValue>,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
}

#[function_component(Icon)]
pub(crate) fn icon(props: &IconProps) -> Html {
    let text = match &props.src {
        None => return Html::default(),
        Some(IconSrc::Node(node)) => return node.clone(),
        Some(IconSrc::Text(text)) => text,
    };
    let Some(plan) = plan_icon(text, props.width, props.height) else {
        return Html::default();
    };
    let classes = classes!(props.class.clone(), "iconOwn");
    let title = props.title.clone();

    match plan {
        IconRender::Glyph(glyph) => html! {
            <span
                class={classes}
                title={title}
                style={glyph_style(
                    props.style_utf8.as_deref(),
                    props.style.as_deref(),
                )}
            >
                {glyph}
            </span>
        },
        IconRender::InlineSvg { src, width, height } => {
            let fallback = || {
                html! {
                    <img
                        class={classes.clone()}
                        title={title.clone()}
                        style={props.style.clone()}
                        src={src.clone()}
                        width={width.to_string()}
                        height={height.to_string()}
                        alt=""
                    />
                }
            };
            inline_svg(&src, (width, height), &classes, title.as_ref(), props.style.as_ref())
                .unwrap_or_else(fallback)
        }
        IconRender::Image(src) => html! {
            <img
                class={classes}
                title={title}
                style={props.style.clone()}
                src={src}
                alt=""
            />
        },
    }
}

fn inline_svg(
    src: &str,
    (width, height): (u32, u32),
    classes: &Classes,
    title: Option<&AttrValue>,
    style: Option<&AttrValue>,
) -> Option<Html> {
    let markup = match decode_svg_data_url(src) {
        Ok(markup) => markup,
        Err(err) => {
            console::error!("inline svg icon could not be decoded", err.to_string());
            return None;
        }
    };
    let holder = match gloo::utils::document().create_element("span") {
        Ok(holder) => holder,
        Err(err) => {
            console::error!("inline svg holder could not be created", err);
            return None;
        }
    };
    holder.set_class_name(&classes.to_string());
    if let Some(title) = title {
        set_attr(&holder, "title", title);
    }
    if let Some(style) = style {
        set_attr(&holder, "style", style);
    }
    holder.set_inner_html(&markup);
    let svg = holder.first_element_child()?;
    set_attr(&svg, "width", &width.to_string());
    set_attr(&svg, "height", &height.to_string());
    Some(Html::VRef(holder.into()))
}

fn set_attr(element: &web_sys::Element, name: &'static str, value: &str) {
    if let Err(err) = element.set_attribute(name, value) {
        console::error!("icon attribute could not be set", name, err);
    }
}
