//! Applies the active theme to the document root element.

use crate::core::store::UiStore;
use crate::core::theme::Theme;
use gloo::console;
use yew::prelude::*;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeRootProps {
    #[prop_or_default]
    pub children: Children,
}

/// Writes the theme's custom properties and `data-theme` on `<html>` whenever the theme changes.
#[function_component(ThemeRoot)]
pub(crate) fn theme_root(props: &ThemeRootProps) -> Html {
    let (store, _) = use_store::<UiStore>();
    let name = store.preferences.theme;

    use_effect_with_deps(
        move |name| {
            let theme = Theme::for_name(*name);
            if let Some(root) = gloo::utils::document().document_element() {
                for (attr, value) in [
                    ("style", theme.css_text()),
                    ("data-theme", theme.name.clone()),
                    ("data-theme-mode", theme.kind.mode().as_str().to_string()),
                ] {
                    if let Err(err) = root.set_attribute(attr, &value) {
                        console::error!("theme attribute could not be set", attr, err);
                    }
                }
            }
            || ()
        },
        name,
    );

    html! { <>{ for props.children.iter() }</> }
}
