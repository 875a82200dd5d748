//! DOM Binding
//!
//! Finds task checkboxes in the rendered page and wires their change
//! events to the synchronizer.

use std::rc::Rc;

use task_state::{CheckboxSync, KeyValueStore, StorageKey, TaskCheckbox};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, Window};

/// Task checkbox backed by an `<input type="checkbox">`
#[derive(Clone)]
pub struct InputCheckbox(pub HtmlInputElement);

impl TaskCheckbox for InputCheckbox {
    fn enable(&self) {
        if let Err(e) = self.0.remove_attribute("disabled") {
            log::warn!("[DOM] Failed to remove disabled attribute: {:?}", e);
        }
    }

    fn is_checked(&self) -> bool {
        self.0.checked()
    }

    fn set_checked(&self, checked: bool) {
        self.0.set_checked(checked);
    }
}

/// `location.pathname`, used verbatim in storage keys
pub fn page_path(window: &Window) -> Result<String, String> {
    window.location().pathname().map_err(|e| format!("{:?}", e))
}

/// All `<input>` elements matching `selector`, in document order
pub fn find_task_checkboxes(
    document: &Document,
    selector: &str,
) -> Result<Vec<HtmlInputElement>, String> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| format!("Invalid selector '{}': {:?}", selector, e))?;

    let inputs = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlInputElement>().ok())
        .collect();
    Ok(inputs)
}

/// Persist the checkbox state under `key` on every change
pub fn bind_change_listener<S>(sync: Rc<CheckboxSync<S>>, key: StorageKey, checkbox: InputCheckbox)
where
    S: KeyValueStore + 'static,
{
    let input = checkbox.0.clone();
    let on_change = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        sync.persist(&key, checkbox.is_checked());
    });

    let callback: &js_sys::Function = on_change.as_ref().unchecked_ref();
    if let Err(e) = input.add_event_listener_with_callback("change", callback) {
        log::error!("[DOM] Failed to bind change listener: {:?}", e);
    }
    // Listener lives as long as the page
    on_change.forget();
}

/// Enable, restore and bind every task checkbox on the page
pub fn bind_page<S>(sync: Rc<CheckboxSync<S>>, path: &str, inputs: Vec<HtmlInputElement>)
where
    S: KeyValueStore + 'static,
{
    let bound = sync.attach(path, inputs.into_iter().map(InputCheckbox));
    for b in bound {
        bind_change_listener(sync.clone(), b.key, b.checkbox);
    }
}

/// Run `f` once the DOM is parsed.
///
/// Runs immediately when `DOMContentLoaded` has already fired, which
/// happens when the module is instantiated after parsing.
pub fn on_document_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return;
    }

    let mut pending = Some(f);
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Some(f) = pending.take() {
            f();
        }
    });

    let callback: &js_sys::Function = on_ready.as_ref().unchecked_ref();
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", callback) {
        log::error!("[DOM] Failed to bind DOMContentLoaded: {:?}", e);
    }
    on_ready.forget();
}
