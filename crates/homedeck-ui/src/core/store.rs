//! App-wide yewdux store.
//!
//! # Design
//! - Hold the active preferences in one slice shared by the shell and gallery.
//! - Derive the built theme from the slice instead of storing it twice.

use crate::core::preferences::UiPreferences;
use crate::core::theme::{Theme, ThemeMode, ThemeName};
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct UiStore {
    /// Active preferences.
    pub preferences: UiPreferences,
}

impl UiStore {
    /// Store seeded with loaded preferences.
    #[must_use]
    pub const fn new(preferences: UiPreferences) -> Self {
        Self { preferences }
    }

    /// Switch themes.
    pub const fn set_theme(&mut self, theme: ThemeName) {
        self.preferences.theme = theme;
    }

    /// Light or dark mode of the active theme.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.preferences.theme.mode()
    }

    /// Build the active theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::for_name(self.preferences.theme)
    }
}
