//! Labelled icon: an object name with its icon and colour badge.
//!
//! # Design
//! - Normalise the input with `core::label` first; rendering only reads the [`LabeledItem`].
//! - Colour styling follows the active theme mode passed in by the caller.
//!
//! [`LabeledItem`]: crate::core::label::LabeledItem

use crate::components::icon::{Icon, IconSrc};
use crate::core::label::{
    LABEL_ICON_SIZE, LABEL_ICON_STYLE, LABEL_TEXT_STYLE, LabelRequest, LabelSource, Lookup,
    label_container_style, label_title, normalize_item,
};
use crate::core::theme::ThemeMode;
use std::rc::Rc;
use yew::prelude::*;

/// Extra classes for the parts of a [`TextWithIcon`].
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct MoreClasses {
    pub root: Classes,
    pub icon: Classes,
    pub text: Classes,
}

#[derive(Properties, PartialEq)]
pub(crate) struct TextWithIconProps {
    #[prop_or_default]
    pub value: LabelSource,
    #[prop_or_default]
    pub lookup: Option<Rc<Lookup>>,
    #[prop_or_default]
    pub remove_prefix: Option<AttrValue>,
    #[prop_or_default]
    pub icon: Option<AttrValue>,
    #[prop_or_default]
    pub color: Option<AttrValue>,
    pub lang: AttrValue,
    #[prop_or(ThemeMode::Light)]
    pub theme_mode: ThemeMode,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub more_classes: MoreClasses,
}

#[function_component(TextWithIcon)]
pub(crate) fn text_with_icon(props: &TextWithIconProps) -> Html {
    let item = normalize_item(&LabelRequest {
        source: &props.value,
        lookup: props.lookup.as_deref(),
        remove_prefix: props.remove_prefix.as_deref().unwrap_or_default(),
        icon: props.icon.as_deref(),
        color: props.color.as_deref(),
        lang: &props.lang,
    });

    let style = label_container_style(&item, props.theme_mode, props.style.as_deref());
    let title = label_title(props.title.as_deref(), &item);
    let classes = classes!(
        "text-with-icon",
        props.class.clone(),
        props.more_classes.root.clone()
    );

    html! {
        <div class={classes} style={style} title={title}>
            {item.icon.map(|icon| html! {
                <Icon
                    class={classes!("icon", props.more_classes.icon.clone())}
                    style={LABEL_ICON_STYLE}
                    width={LABEL_ICON_SIZE}
                    height={LABEL_ICON_SIZE}
                    src={IconSrc::from(icon)}
                />
            }).unwrap_or_default()}
            <span
                class={classes!("text-with-icon-name", props.more_classes.text.clone())}
                style={LABEL_TEXT_STYLE}
            >
                {item.name}
            </span>
        </div>
    }
}
