//! Browser theme wiring: localStorage flag, root class and toggle button.

use crate::config::InputConfig;
use crate::theme::{initial_theme, Theme, ThemeStore, ThemeSwitch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Theme flag kept in `window.localStorage`.
///
/// Without storage access (private mode, sandboxed frames) loads return
/// nothing and stores are dropped.
#[derive(Debug, Clone)]
pub struct LocalStorageThemeStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageThemeStore {
    /// Store under `key` in the window's local storage.
    pub fn new(window: &Window, key: &str) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
            key: key.to_string(),
        }
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(&self.key).ok().flatten()
    }

    fn store(&mut self, theme: Theme) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(&self.key, theme.as_str());
        }
    }
}

/// Check the system color scheme.
pub fn prefers_dark(window: &Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Set or clear the dark class on the root element.
pub fn apply(document: &Document, config: &InputConfig, theme: Theme) -> Result<(), JsValue> {
    let Some(root) = document.document_element() else {
        return Ok(());
    };
    if theme.is_dark() {
        root.class_list().add_1(&config.dark_class)
    } else {
        root.class_list().remove_1(&config.dark_class)
    }
}

/// Apply the theme resolved from storage and the system preference.
pub fn apply_initial(window: &Window, document: &Document, config: &InputConfig) -> Result<(), JsValue> {
    let store = LocalStorageThemeStore::new(window, &config.theme_storage_key);
    let theme = initial_theme(store.load().as_deref(), prefers_dark(window));
    apply(document, config, theme)
}

/// Show the right icon and make the toggle button flip the theme.
///
/// Returns early, without error, when the icons or the button are missing.
pub fn wire_toggle(window: &Window, document: &Document, config: &InputConfig) -> Result<(), JsValue> {
    let (Some(dark_icon), Some(light_icon)) = (
        document.get_element_by_id(&config.theme_dark_icon_id),
        document.get_element_by_id(&config.theme_light_icon_id),
    ) else {
        return Ok(());
    };

    let store = LocalStorageThemeStore::new(window, &config.theme_storage_key);
    let switch = ThemeSwitch::new(store, prefers_dark(window));
    if switch.current().is_dark() {
        light_icon.class_list().remove_1(&config.hidden_class)?;
    } else {
        dark_icon.class_list().remove_1(&config.hidden_class)?;
    }

    let Some(button) = document.get_element_by_id(&config.theme_toggle_id) else {
        return Ok(());
    };

    let switch = Rc::new(RefCell::new(switch));
    let document = document.clone();
    let config = config.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || {
        let _ = dark_icon.class_list().toggle(&config.hidden_class);
        let _ = light_icon.class_list().toggle(&config.hidden_class);
        if let Ok(mut switch) = switch.try_borrow_mut() {
            let theme = switch.toggle();
            if let Err(e) = apply(&document, &config, theme) {
                log::warn!("applying theme failed: {e:?}");
            }
        }
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}
