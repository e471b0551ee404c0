//! Browser tests for the DOM host. Run with `wasm-pack test --headless --firefox -- --features web`.

#![cfg(all(feature = "web", target_arch = "wasm32"))]

use js_sys::{Object, Reflect};
use lettr_input::web::{bind_row, swap_status, DomRegistry};
use lettr_input::{CellRegistry, InputConfig, KeyUp, LetterInputMachine, SwapEvent};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{CustomEvent, CustomEventInit, Document, Event, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_row(document: &Document, class: &str, n: usize) -> Vec<HtmlInputElement> {
    let body = document.body().unwrap();
    (0..n)
        .map(|_| {
            let input: HtmlInputElement = document.create_element("input").unwrap().dyn_into().unwrap();
            input.set_class_name(class);
            body.append_child(&input).unwrap();
            input
        })
        .collect()
}

fn values(inputs: &[HtmlInputElement]) -> Vec<String> {
    inputs.iter().map(HtmlInputElement::value).collect()
}

#[wasm_bindgen_test]
fn test_dom_registry_discovers_in_order() {
    let document = document();
    let inputs = mount_row(&document, "row-order", 3);
    inputs[1].set_value("x");

    let cells = DomRegistry::new(document, ".row-order").discover();
    assert_eq!(cells.len(), 3);
    let shown: Vec<String> = cells
        .iter()
        .map(|c| c.element().clone().dyn_into::<HtmlInputElement>().unwrap().value())
        .collect();
    assert_eq!(shown, vec!["", "x", ""]);
}

#[wasm_bindgen_test]
fn test_machine_fills_inputs_and_moves_focus() {
    let document = document();
    let inputs = mount_row(&document, "row-fill", 5);
    let mut machine = LetterInputMachine::new(DomRegistry::new(document.clone(), ".row-fill"));
    machine.initialize();

    for key in ["h", "e", "l", "l", "o", "Backspace"] {
        machine.on_key_up(&KeyUp::new(key));
    }
    assert_eq!(values(&inputs), vec!["h", "e", "l", "l", ""]);

    let active = document.active_element().unwrap();
    assert!(active.is_same_node(Some(&inputs[4])));

    machine.on_external_reset(&SwapEvent::with_status(422));
    assert_eq!(values(&inputs), vec!["h", "e", "l", "l", ""]);

    machine.on_external_reset(&SwapEvent::new());
    assert_eq!(values(&inputs), vec![""; 5]);
}

#[wasm_bindgen_test]
fn test_swap_status_path() {
    let path: Vec<String> = ["detail", "xhr", "status"].iter().map(|s| s.to_string()).collect();

    let event = Event::new("htmx:afterSwap").unwrap();
    assert_eq!(swap_status(&event, &path), None);

    let xhr = Object::new();
    Reflect::set(&xhr, &"status".into(), &JsValue::from_f64(422.0)).unwrap();
    let detail = Object::new();
    Reflect::set(&detail, &"xhr".into(), &xhr).unwrap();
    Reflect::set(&event, &"detail".into(), &detail).unwrap();
    assert_eq!(swap_status(&event, &path), Some(422));

    Reflect::set(&xhr, &"status".into(), &"oops".into()).unwrap();
    assert_eq!(swap_status(&event, &path), None);
}

fn key_up(document: &Document, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init).unwrap();
    document.dispatch_event(&event).unwrap();
}

fn after_swap(document: &Document, status: Option<u16>) {
    let init = CustomEventInit::new();
    if let Some(status) = status {
        let xhr = Object::new();
        Reflect::set(&xhr, &"status".into(), &JsValue::from(status)).unwrap();
        let detail = Object::new();
        Reflect::set(&detail, &"xhr".into(), &xhr).unwrap();
        init.set_detail(&detail);
    }
    let event = CustomEvent::new_with_event_init_dict("htmx:afterSwap", &init).unwrap();
    document.dispatch_event(&event).unwrap();
}

fn is_active(document: &Document, input: &HtmlInputElement) -> bool {
    document
        .active_element()
        .is_some_and(|active| active.is_same_node(Some(input)))
}

#[wasm_bindgen_test]
fn test_bound_row_follows_dom_events() {
    let document = document();
    let inputs = mount_row(&document, "row-wired", 5);
    inputs[3].set_value("stale");
    let config = InputConfig {
        selector: String::from(".row-wired"),
        ..InputConfig::default()
    };

    let machine = bind_row(&document, &config).unwrap();
    // Bound and rendered before any listener fires.
    assert_eq!(values(&inputs), vec![""; 5]);
    assert!(is_active(&document, &inputs[0]));

    for key in ["c", "r", "7", "Shift", "a"] {
        key_up(&document, key);
    }
    assert_eq!(values(&inputs), vec!["c", "r", "a", "", ""]);
    assert!(is_active(&document, &inputs[3]));

    key_up(&document, "Backspace");
    assert_eq!(values(&inputs), vec!["c", "r", "", "", ""]);
    assert!(is_active(&document, &inputs[2]));

    after_swap(&document, Some(422));
    assert_eq!(values(&inputs), vec!["c", "r", "", "", ""]);
    assert_eq!(machine.borrow().letters().to_string(), "cr");

    after_swap(&document, None);
    assert_eq!(values(&inputs), vec![""; 5]);
    assert!(is_active(&document, &inputs[0]));
    assert!(machine.borrow().is_empty());

    key_up(&document, "z");
    after_swap(&document, Some(500));
    assert_eq!(values(&inputs), vec![""; 5]);
}

