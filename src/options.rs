//! Page Options
//!
//! Optional overrides embedded in the page as JSON:
//!
//! ```html
//! <script type="application/json" id="task-checkboxes-options">
//!   { "selector": "ul.todo input[type=checkbox]", "log_level": "debug" }
//! </script>
//! ```

use log::LevelFilter;
use serde::Deserialize;
use task_state::DEFAULT_SEPARATOR;

/// Element id of the options document
pub const OPTIONS_ELEMENT_ID: &str = "task-checkboxes-options";

/// Task checkboxes as emitted by common markdown renderers
pub const DEFAULT_SELECTOR: &str = r#"li.task-list-item input[type="checkbox"]"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SyncOptions {
    /// CSS selector matching the task checkboxes, in document order
    pub selector: String,
    /// Separator between page path and index in storage keys
    pub separator: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            selector: DEFAULT_SELECTOR.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl SyncOptions {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// Read options from the page; defaults when absent or malformed.
    ///
    /// Must run after the document is parsed: an options element the
    /// parser has not reached yet is indistinguishable from none at all.
    /// A parse failure is returned alongside the defaults for the caller
    /// to report.
    pub fn load(document: &web_sys::Document) -> (Self, Option<String>) {
        let text = document
            .get_element_by_id(OPTIONS_ELEMENT_ID)
            .and_then(|el| el.text_content());
        Self::from_element_text(text)
    }

    /// Options from the text of the options element, if it exists
    pub fn from_element_text(text: Option<String>) -> (Self, Option<String>) {
        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(options) => (options, None),
                Err(e) => {
                    let msg = format!("Ignoring #{}: {}", OPTIONS_ELEMENT_ID, e);
                    (Self::default(), Some(msg))
                }
            },
            _ => (Self::default(), None),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
