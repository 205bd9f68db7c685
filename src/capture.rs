//! Clipboard-change capture.
//!
//! The host platform delivers edge-triggered "clipboard changed"
//! notifications on a single control thread and hands us the current text
//! payload, if any. Nothing on this path may propagate an error back to the
//! platform hook: a storage fault must never break clipboard notification
//! delivery, so faults are logged and swallowed here.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::interface::Store;
use crate::models::HistoryEntry;

/// Capture policy knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOptions {
    /// When set, a payload identical to the immediately preceding successful
    /// capture is ignored. Off by default: the observed behavior of the
    /// original is a full audit trail where every qualifying change is saved.
    pub suppress_consecutive_duplicates: bool,
}

/// Reacts to clipboard-change notifications and persists qualifying captures.
pub struct CaptureController {
    store: Arc<dyn Store>,
    options: CaptureOptions,
    /// Content of the last successful capture. Process-local by design: a
    /// restart never suppresses the first capture. Sound under the single
    /// notification stream model.
    last_capture: Mutex<Option<String>>,
}

impl CaptureController {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self::with_options(store, CaptureOptions::default())
    }

    pub fn with_options(store: Arc<dyn Store>, options: CaptureOptions) -> Self {
        Self {
            store,
            options,
            last_capture: Mutex::new(None),
        }
    }

    /// Handle a clipboard-change notification.
    ///
    /// `payload` is the current text payload, or `None` when the clipboard
    /// holds no text (images, files). Both the absent and the empty payload
    /// are expected and ignored; everything else is stored verbatim with the
    /// current timestamp.
    pub fn on_clipboard_changed(&self, payload: Option<&str>) {
        let Some(content) = payload else {
            tracing::debug!("clipboard change carried no text payload");
            return;
        };
        if content.is_empty() {
            return;
        }

        if self.options.suppress_consecutive_duplicates
            && self.last_capture.lock().as_deref() == Some(content)
        {
            tracing::debug!("suppressed consecutive duplicate capture");
            return;
        }

        let entry = HistoryEntry::capture(content.to_string());
        match self.store.save_history(&entry) {
            Ok(id) => {
                *self.last_capture.lock() = Some(content.to_string());
                tracing::debug!(id = id.0, "captured clipboard change");
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to persist clipboard capture");
            }
        }
    }
}
