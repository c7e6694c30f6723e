//! Small wrappers over browser APIs the pages need

use letsgo_common::{Error, Result};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FileReader};
use yew::Callback;

/// Blocking `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!(error = ?e, "alert() failed");
        }
    }
}

/// Read `file` as a `data:` URL. `on_loaded` fires once the reader finishes.
pub fn read_as_data_url(file: &File, on_loaded: Callback<Result<String>>) -> Result<()> {
    let reader = FileReader::new().map_err(|e| Error::FileRead(format!("{:?}", e)))?;

    let finished = reader.clone();
    let onloadend = Closure::once_into_js(move |_event: Event| {
        let result = finished
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(|| Error::FileRead("reader produced no data URL".to_string()));
        on_loaded.emit(result);
    });

    reader.set_onloadend(Some(onloadend.unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|e| Error::FileRead(format!("{:?}", e)))
}
