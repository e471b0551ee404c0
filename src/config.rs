//! Configuration for the host wiring.
//!
//! The machine itself takes no configuration; these values describe the
//! markup and events the hosts bind it to.

/// Markup and event names the letter row is wired to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    /// Selector matching fillable cells, in document order.
    ///
    /// The browser host accepts any CSS selector. The in-memory document
    /// only understands a single class (`.name`).
    pub selector: String,
    /// Name of the event fired after an out-of-band swap.
    pub swap_event: String,
    /// Property path from the swap event to its numeric status.
    pub status_path: Vec<String>,
    /// Storage key of the persisted theme flag.
    pub theme_storage_key: String,
    /// Class toggled on the root element for the dark theme.
    pub dark_class: String,
    /// Id of the theme toggle button.
    pub theme_toggle_id: String,
    /// Id of the icon shown while the theme is light.
    pub theme_dark_icon_id: String,
    /// Id of the icon shown while the theme is dark.
    pub theme_light_icon_id: String,
    /// Class that hides an icon.
    pub hidden_class: String,
}

impl InputConfig {
    /// The selector as a bare class name (leading `.` stripped).
    pub fn marker_class(&self) -> &str {
        self.selector.trim_start_matches('.')
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            selector: String::from(".focusable"),
            swap_event: String::from("htmx:afterSwap"),
            status_path: vec![
                String::from("detail"),
                String::from("xhr"),
                String::from("status"),
            ],
            theme_storage_key: String::from("color-theme"),
            dark_class: String::from("dark"),
            theme_toggle_id: String::from("theme-toggle"),
            theme_dark_icon_id: String::from("theme-toggle-dark-icon"),
            theme_light_icon_id: String::from("theme-toggle-light-icon"),
            hidden_class: String::from("hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_class() {
        let config = InputConfig::default();
        assert_eq!(config.marker_class(), "focusable");

        let config = InputConfig {
            selector: String::from("cell"),
            ..InputConfig::default()
        };
        assert_eq!(config.marker_class(), "cell");
    }
}
