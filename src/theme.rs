//! Theme: Dark/light preference resolution and toggling.
//!
//! Independent of the letter row. The preference is one persisted flag
//! (`"dark"` or `"light"`); when no flag is stored the system preference
//! decides. Hosts supply storage through [`ThemeStore`] and apply the
//! result by flipping a class on the root element.

use std::fmt;

/// Stored value for the dark theme.
pub const DARK: &str = "dark";

/// Stored value for the light theme.
pub const LIGHT: &str = "light";

/// The two page themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Dark theme.
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// The value persisted for this theme.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => DARK,
            Self::Light => LIGHT,
        }
    }

    /// Check if this is the dark theme.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme to apply on page load.
///
/// A stored `"dark"` wins; with nothing stored the system preference
/// decides; any other stored value means light.
pub fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored {
        Some(DARK) => Theme::Dark,
        None if prefers_dark => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Theme after the toggle button is pressed.
///
/// With a stored flag, `"light"` goes dark and anything else goes light.
/// Without one, the root element's current class is flipped.
pub fn toggled_theme(stored: Option<&str>, root_is_dark: bool) -> Theme {
    match stored {
        Some(LIGHT) => Theme::Dark,
        Some(_) => Theme::Light,
        None if root_is_dark => Theme::Light,
        None => Theme::Dark,
    }
}

/// Persistent home of the theme flag.
pub trait ThemeStore {
    /// Read the stored flag, if any.
    fn load(&self) -> Option<String>;

    /// Persist `theme`.
    fn store(&mut self, theme: Theme);
}

/// In-process theme storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    /// Create a store holding `value`.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn store(&mut self, theme: Theme) {
        self.value = Some(theme.as_str().to_string());
    }
}

/// Current theme plus its storage.
///
/// Mirrors what the page keeps: the applied theme (the root class) and the
/// persisted flag, which may be absent until the first toggle.
#[derive(Debug, Clone)]
pub struct ThemeSwitch<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeSwitch<S> {
    /// Resolve the initial theme from `store` and the system preference.
    pub fn new(store: S, prefers_dark: bool) -> Self {
        let current = initial_theme(store.load().as_deref(), prefers_dark);
        Self { store, current }
    }

    /// The applied theme.
    pub const fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it.
    pub fn toggle(&mut self) -> Theme {
        let next = toggled_theme(self.store.load().as_deref(), self.current.is_dark());
        self.store.store(next);
        self.current = next;
        log::debug!("theme toggled to {next}");
        next
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_theme() {
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
        assert_eq!(initial_theme(Some("sepia"), true), Theme::Light);
    }

    #[test]
    fn test_toggled_theme() {
        assert_eq!(toggled_theme(Some("light"), false), Theme::Dark);
        assert_eq!(toggled_theme(Some("dark"), true), Theme::Light);
        assert_eq!(toggled_theme(Some("sepia"), false), Theme::Light);
        assert_eq!(toggled_theme(None, true), Theme::Light);
        assert_eq!(toggled_theme(None, false), Theme::Dark);
    }

    #[test]
    fn test_switch_persists_on_toggle() {
        let mut switch = ThemeSwitch::new(MemoryThemeStore::default(), true);
        assert_eq!(switch.current(), Theme::Dark);
        assert_eq!(switch.store().load(), None);

        assert_eq!(switch.toggle(), Theme::Light);
        assert_eq!(switch.store().load().as_deref(), Some("light"));
        assert_eq!(switch.toggle(), Theme::Dark);
        assert_eq!(switch.store().load().as_deref(), Some("dark"));
    }

    #[test]
    fn test_switch_from_stored_flag() {
        let switch = ThemeSwitch::new(MemoryThemeStore::with_value("light"), true);
        assert_eq!(switch.current(), Theme::Light);
    }
}
