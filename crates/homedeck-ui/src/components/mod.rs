//! Yew components for icons, labelled objects and theming.

pub(crate) mod icon;
pub(crate) mod object_icon;
pub(crate) mod system_icon;
pub(crate) mod text_with_icon;
pub(crate) mod theme_root;
