//! Task Checkboxes Frontend Entry Point
//!
//! Makes the task-list checkboxes of a rendered page interactive and
//! remembers their state in `localStorage` across reloads.

mod dom;
mod options;
mod storage;

use std::rc::Rc;

use log::LevelFilter;

use options::SyncOptions;
use storage::LocalStorage;
use task_state::{CheckboxSync, KeyValueStore, MemoryStore};

fn main() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };

    // Default level until the options document has been parsed
    let logger = match console_logger::init(LevelFilter::Info) {
        Ok(logger) => Some(logger),
        Err(_) => {
            web_sys::console::warn_1(&"[APP] Logger already installed".into());
            None
        }
    };

    let ready_document = document.clone();
    dom::on_document_ready(&document, move || {
        let (options, options_error) = SyncOptions::load(&ready_document);
        if let Some(logger) = logger {
            logger.set_level(options.level_filter());
        }
        if let Some(msg) = options_error {
            log::warn!("[APP] {}", msg);
        }
        start(&window, &ready_document, &options);
    });
}

fn start(window: &web_sys::Window, document: &web_sys::Document, options: &SyncOptions) {
    let path = match dom::page_path(window) {
        Ok(path) => path,
        Err(e) => {
            log::error!("[APP] Cannot read page path: {}", e);
            return;
        }
    };

    let inputs = match dom::find_task_checkboxes(document, &options.selector) {
        Ok(inputs) => inputs,
        Err(e) => {
            log::error!("[APP] {}", e);
            return;
        }
    };
    if inputs.is_empty() {
        log::debug!("[APP] No task checkboxes on {}", path);
        return;
    }

    match LocalStorage::from_window(window) {
        Ok(store) => bind(store, &path, options, inputs),
        Err(e) => {
            log::warn!("[APP] {}, state will not survive a reload", e);
            bind(MemoryStore::new(), &path, options, inputs);
        }
    }
}

fn bind<S>(store: S, path: &str, options: &SyncOptions, inputs: Vec<web_sys::HtmlInputElement>)
where
    S: KeyValueStore + 'static,
{
    let sync = Rc::new(CheckboxSync::new(store).with_separator(options.separator.clone()));
    dom::bind_page(sync, path, inputs);
}
