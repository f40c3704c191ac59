//! Showcase shell: theme and language pickers over a gallery of sample objects.

use crate::components::object_icon::ObjectIcon;
use crate::components::text_with_icon::TextWithIcon;
use crate::components::theme_root::ThemeRoot;
use crate::core::demo::demo_objects;
use crate::core::label::{GROUP_PREFIX, LabelSource, Lookup};
use crate::core::store::UiStore;
use crate::core::theme::ThemeName;
use gloo::console;
use homedeck_objects::{DomainObject, system_icon};
use preferences::{load_preferences, persist_lang, persist_theme};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_store};

mod preferences;

const LANGUAGES: [&str; 2] = ["en", "de"];

/// Showcase rows: every sample object plus the group lookup built from it.
struct Gallery {
    objects: Vec<Rc<DomainObject>>,
    groups: Rc<Lookup>,
}

fn load_gallery() -> Gallery {
    let objects = demo_objects().unwrap_or_else(|err| {
        console::error!("sample objects could not be parsed", err.to_string());
        Vec::new()
    });
    let groups = objects
        .iter()
        .filter(|obj| obj.kind() == Some("group"))
        .cloned()
        .collect();
    Gallery {
        objects: objects.into_iter().map(Rc::new).collect(),
        groups: Rc::new(Lookup::List(groups)),
    }
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
}

#[function_component(HomedeckApp)]
fn homedeck_app() -> Html {
    let (store, dispatch) = use_store::<UiStore>();
    let gallery = use_memo(|_| load_gallery(), ());
    let prefs = &store.preferences;
    let mode = store.mode();
    let lang = AttrValue::from(prefs.lang.clone());
    let image_prefix = AttrValue::from(prefs.image_prefix.clone());

    let on_theme = dispatch.reduce_mut_callback_with(|state, event: Event| {
        if let Some(value) = select_value(&event) {
            let theme = ThemeName::parse(&value);
            persist_theme(theme);
            state.set_theme(theme);
        }
    });
    let on_lang = dispatch.reduce_mut_callback_with(|state, event: Event| {
        if let Some(value) = select_value(&event) {
            persist_lang(&value);
            state.preferences.lang = value;
        }
    });

    let rows = gallery.objects.iter().map(|obj| {
        let symbol = system_icon(Some(obj.as_ref())).map_or("", |icon| icon.as_str());
        html! {
            <tr key={obj.id.clone()}>
                <td>
                    <ObjectIcon
                        object={Rc::clone(obj)}
                        image_prefix={image_prefix.clone()}
                        size={24_u32}
                    />
                </td>
                <td>
                    <TextWithIcon
                        value={LabelSource::Object((**obj).clone())}
                        lang={lang.clone()}
                        theme_mode={mode}
                    />
                </td>
                <td><code>{obj.id.clone()}</code></td>
                <td>{symbol}</td>
            </tr>
        }
    });

    html! {
        <ThemeRoot>
            <header class="homedeck-toolbar">
                <label>
                    {"Theme "}
                    <select onchange={on_theme}>
                        { for ThemeName::all().into_iter().map(|theme| html! {
                            <option
                                value={theme.as_str()}
                                selected={theme == prefs.theme}
                            >
                                {theme.as_str()}
                            </option>
                        }) }
                    </select>
                </label>
                <label>
                    {"Language "}
                    <select onchange={on_lang}>
                        { for LANGUAGES.into_iter().map(|code| html! {
                            <option value={code} selected={code == prefs.lang}>{code}</option>
                        }) }
                    </select>
                </label>
            </header>
            <main>
                <table class="homedeck-gallery">
                    <tbody>{ for rows }</tbody>
                </table>
                <section class="homedeck-groups">
                    { for ["administrator", "user", "nobody"].into_iter().map(|name| html! {
                        <TextWithIcon
                            value={LabelSource::from(name)}
                            lookup={Rc::clone(&gallery.groups)}
                            remove_prefix={GROUP_PREFIX}
                            lang={lang.clone()}
                            theme_mode={mode}
                        />
                    }) }
                </section>
            </main>
        </ThemeRoot>
    }
}

/// Load stored preferences and mount the showcase on `#root`, or `<body>` when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<UiStore>::new().set(UiStore::new(load_preferences()));
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<HomedeckApp>::with_root(root).render();
    } else {
        yew::Renderer::<HomedeckApp>::new().render();
    }
}
