//! Icon for a domain object: its own image first, then the built-in icon for its id.

use crate::components::icon::{Icon, IconSrc};
use crate::components::system_icon::SystemIcon;
use homedeck_objects::{DomainObject, icon_source, system_icon};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ObjectIconProps {
    pub object: Rc<DomainObject>,
    #[prop_or_default]
    pub image_prefix: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Option<u32>,
}

#[function_component(ObjectIcon)]
pub(crate) fn object_icon(props: &ObjectIconProps) -> Html {
    let object = props.object.as_ref();
    if let Some(src) = icon_source(Some(object), props.image_prefix.as_deref()) {
        return html! {
            <Icon
                class={props.class.clone()}
                title={props.title.clone()}
                src={IconSrc::from(src)}
                width={props.size}
                height={props.size}
            />
        };
    }
    system_icon(Some(object)).map_or_else(Html::default, |icon| {
        html! {
            <SystemIcon
                icon={icon}
                class={props.class.clone()}
                title={props.title.clone()}
                size={props.size.map(|size| AttrValue::from(size.to_string()))}
            />
        }
    })
}
