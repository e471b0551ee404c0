//! Browser host: binds the letter row to the live DOM.
//!
//! On module start the theme is applied and its toggle wired. Once the
//! document is ready, one machine is created and shared by exactly two
//! listeners: `keyup` and the swap-completion event. No listener is
//! installed before the machine has bound to its cells.

mod dom;
mod theme;

pub use dom::{swap_status, DomCell, DomRegistry};
pub use theme::{apply, apply_initial, prefers_dark, wire_toggle, LocalStorageThemeStore};

use crate::config::InputConfig;
use crate::machine::{KeyUp, LetterInputMachine, SwapEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Event, KeyboardEvent};

/// Shared handle to the page's letter machine.
pub type SharedMachine = Rc<RefCell<LetterInputMachine<DomRegistry>>>;

/// Module entry point: logging, panic hook, then [`wire`] with defaults.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // Already initialized when the module is instantiated twice.
    let _ = console_log::init_with_level(log::Level::Debug);
    wire(InputConfig::default())
}

/// Wire theme handling now and the letter row once the document is ready.
pub fn wire(config: InputConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    apply_initial(&window, &document, &config)?;
    wire_toggle(&window, &document, &config)?;

    if document.ready_state() == DocumentReadyState::Loading {
        let ready_document = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = bind_row(&ready_document, &config) {
                log::error!("binding letter row failed: {e:?}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        bind_row(&document, &config)?;
    }
    Ok(())
}

/// Create the machine, bind it to the current cells and install the
/// `keyup` and swap listeners.
pub fn bind_row(document: &Document, config: &InputConfig) -> Result<SharedMachine, JsValue> {
    let registry = DomRegistry::new(document.clone(), &config.selector);
    let machine: SharedMachine = Rc::new(RefCell::new(LetterInputMachine::new(registry)));
    machine.borrow_mut().initialize();

    let on_key = {
        let machine = Rc::clone(&machine);
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Ok(mut machine) = machine.try_borrow_mut() {
                machine.on_key_up(&KeyUp::new(event.key()));
            }
        })
    };
    document.add_event_listener_with_callback("keyup", on_key.as_ref().unchecked_ref())?;
    on_key.forget();

    let on_swap = {
        let machine = Rc::clone(&machine);
        let path = config.status_path.clone();
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let swap = SwapEvent::from(swap_status(&event, &path));
            if let Ok(mut machine) = machine.try_borrow_mut() {
                machine.on_external_reset(&swap);
            }
        })
    };
    document.add_event_listener_with_callback(&config.swap_event, on_swap.as_ref().unchecked_ref())?;
    on_swap.forget();

    Ok(machine)
}
