// error.rs - Failure taxonomy for showcase instances
//
// Every error is scoped to a single instance. Nothing here is allowed to
// cross into a sibling showcase on the same page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("container with id `{0}` not found")]
    MountNotFound(String),

    #[error("texture `{url}` failed to load: {reason}")]
    TextureLoadFailed { url: String, reason: String },

    #[error("showcase `{0}` has no images")]
    EmptyImageList(String),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("malformed showcase manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// An exception thrown by the page's JavaScript (Three.js, DOM)
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for ShowcaseError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let text = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        ShowcaseError::Js(text)
    }
}
