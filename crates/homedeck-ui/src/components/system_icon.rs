//! Built-in vector icons for well-known object roots.

use homedeck_objects::SymbolicIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SystemIconProps {
    pub icon: SymbolicIcon,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Option<AttrValue>,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &SystemIconProps, body: Html) -> Html {
    let mut classes = classes!("iconOwn", format!("icon-{}", props.icon.as_str()));
    if let Some(size) = size_class(props.size.as_ref()) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

fn icon_body(icon: SymbolicIcon) -> Html {
    match icon {
        SymbolicIcon::System => html! { <>
            <path d="M9.671 4.136a2.34 2.34 0 0 1 4.659 0a2.34 2.34 0 0 0 3.319 1.915a2.34 2.34 0 0 1 2.33 4.033a2.34 2.34 0 0 0 0 3.831a2.34 2.34 0 0 1-2.33 4.033a2.34 2.34 0 0 0-3.319 1.915a2.34 2.34 0 0 1-4.659 0a2.34 2.34 0 0 0-3.32-1.915a2.34 2.34 0 0 1-2.33-4.033a2.34 2.34 0 0 0 0-3.831A2.34 2.34 0 0 1 6.35 6.051a2.34 2.34 0 0 0 3.319-1.915" />
            <circle cx="12" cy="12" r="3" />
        </> },
        SymbolicIcon::Photo => html! { <>
            <rect x="3" y="3" width="18" height="18" rx="2" />
            <circle cx="9" cy="9" r="2" />
            <path d="m21 15l-3.086-3.086a2 2 0 0 0-2.828 0L6 21" />
        </> },
        SymbolicIcon::Alias => html! { <>
            <path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71" />
            <path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71" />
        </> },
        SymbolicIcon::Group => html! { <>
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M16 3.128a4 4 0 0 1 0 7.744M22 21v-2a4 4 0 0 0-3-3.87" />
            <circle cx="9" cy="7" r="4" />
        </> },
        SymbolicIcon::User => html! { <>
            <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2" />
            <circle cx="12" cy="7" r="4" />
        </> },
        SymbolicIcon::Host => html! { <>
            <rect x="2" y="2" width="20" height="8" rx="2" ry="2" />
            <rect x="2" y="14" width="20" height="8" rx="2" ry="2" />
            <path d="M6 6h.01M6 18h.01" />
        </> },
        SymbolicIcon::Connection => html! {
            <path d="M12 20h.01M2 8.82a15 15 0 0 1 20 0M5 12.859a10 10 0 0 1 14 0m-11.5 3.57a5 5 0 0 1 9 0" />
        },
        SymbolicIcon::Info => html! { <>
            <circle cx="12" cy="12" r="10" />
            <path d="M12 16v-4m0-4h.01" />
        </> },
        SymbolicIcon::Meta => html! { <>
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
            <path d="M14 2v4a2 2 0 0 0 2 2h4M10 9H8m8 4H8m8 4H8" />
        </> },
    }
}

/// Vector icon for a [`SymbolicIcon`].
#[function_component(SystemIcon)]
pub(crate) fn system_icon(props: &SystemIconProps) -> Html {
    icon_svg(props, icon_body(props.icon))
}
